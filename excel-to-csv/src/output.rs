//! Output file naming and CSV serialization

use anyhow::{Context, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::path::{Path, PathBuf};

use crate::grid::Grid;

/// File name for one exported sheet: `"<base> (<sheet> sheet).csv"`
pub fn csv_file_name(base_name: &str, sheet_name: &str) -> String {
    format!("{} ({} sheet).csv", base_name, sheet_name)
}

/// Full output path for one exported sheet
pub fn csv_path(output_dir: &Path, base_name: &str, sheet_name: &str) -> PathBuf {
    output_dir.join(csv_file_name(base_name, sheet_name))
}

/// Write a grid to `path`, header first, overwriting any existing file
pub fn write_grid_csv(grid: &Grid, path: &Path) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .delimiter(b',')
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_path(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;

    if !grid.is_empty() {
        wtr.write_record(&grid.headers)
            .context("Failed to write CSV header")?;

        for (idx, row) in grid.rows.iter().enumerate() {
            wtr.write_record(row)
                .with_context(|| format!("Failed to write row {}", idx + 1))?;
        }
    }

    wtr.flush()
        .with_context(|| format!("Failed to flush CSV file: {}", path.display()))?;

    Ok(())
}
