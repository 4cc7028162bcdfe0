//! Workbook to CSV conversion
//!
//! `convert` runs in two error tiers:
//! - anything that prevents the run as a whole (unsupported format, missing
//!   source, unreadable workbook, output directory creation) is returned as
//!   an error before any CSV is written;
//! - a sheet that cannot be read or written is recorded as a failed
//!   [`SheetOutcome`] and the remaining sheets are still processed.

use anyhow::{Context, Result, bail};
use calamine::{Reader, open_workbook_auto};
use std::fs;
use std::path::{Path, PathBuf};

use crate::format::{SUPPORTED_EXTENSIONS, WorkbookFormat};
use crate::grid::Grid;
use crate::output::{csv_file_name, csv_path, write_grid_csv};

/// Width of the summary banner
const BANNER_WIDTH: usize = 60;

/// Options for a single conversion run
#[derive(Debug, Clone, Default)]
pub struct ConversionOptions {
    /// Directory for the CSV files. Defaults to the workbook's directory.
    pub output_dir: Option<PathBuf>,
}

/// Stage at which a sheet failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStage {
    /// The sheet range could not be read from the workbook
    Read,
    /// The CSV file could not be created or written
    Write,
}

impl std::fmt::Display for FailureStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureStage::Read => write!(f, "read"),
            FailureStage::Write => write!(f, "write"),
        }
    }
}

/// Result of converting one sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetOutcome {
    Converted {
        sheet: String,
        path: PathBuf,
        rows: usize,
        columns: usize,
    },
    Failed {
        sheet: String,
        stage: FailureStage,
        message: String,
    },
}

impl SheetOutcome {
    pub fn sheet(&self) -> &str {
        match self {
            SheetOutcome::Converted { sheet, .. } | SheetOutcome::Failed { sheet, .. } => sheet,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SheetOutcome::Converted { .. })
    }
}

/// Summary of a conversion run, one outcome per sheet in workbook order
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    pub outcomes: Vec<SheetOutcome>,
}

impl ConversionReport {
    /// Paths of the CSV files that were written, in sheet order
    pub fn written_paths(&self) -> Vec<&Path> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                SheetOutcome::Converted { path, .. } => Some(path.as_path()),
                SheetOutcome::Failed { .. } => None,
            })
            .collect()
    }

    pub fn failures(&self) -> Vec<&SheetOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success()).collect()
    }
}

/// Convert every sheet of the workbook at `source` into its own CSV file
pub fn convert<P: AsRef<Path>>(source: P, options: &ConversionOptions) -> Result<ConversionReport> {
    let source = source.as_ref();

    let format = WorkbookFormat::from_path(source).with_context(|| {
        format!(
            "Unsupported workbook format: {} (supported extensions: {})",
            source.display(),
            SUPPORTED_EXTENSIONS.join(", ")
        )
    })?;

    if !source.exists() {
        bail!("Source file not found: {}", source.display());
    }
    if !source.is_file() {
        bail!("Source path is not a file: {}", source.display());
    }

    let output_dir = resolve_output_dir(source, options.output_dir.as_deref())?;
    let base_name = base_name(source)?;

    log::info!("Leyendo archivo: {}", source.display());
    log::debug!("Formato detectado: {}", format);
    log::info!("Directorio de salida: {}", output_dir.display());

    let mut workbook = open_workbook_auto(source)
        .with_context(|| format!("Failed to open Excel file: {}", source.display()))?;

    let sheet_names: Vec<String> = workbook.sheet_names().to_vec();
    let total = sheet_names.len();
    log::info!("Hojas encontradas: {}", total);

    let mut outcomes = Vec::with_capacity(total);

    for (idx, sheet_name) in sheet_names.into_iter().enumerate() {
        log::info!("[{}/{}] Procesando hoja: '{}'", idx + 1, total, sheet_name);

        let range = match workbook.worksheet_range(&sheet_name) {
            Ok(range) => range,
            Err(e) => {
                outcomes.push(failed(sheet_name, FailureStage::Read, e.to_string()));
                continue;
            }
        };

        let grid = Grid::from_range(&range);
        let path = csv_path(&output_dir, &base_name, &sheet_name);

        if let Err(e) = write_grid_csv(&grid, &path) {
            outcomes.push(failed(sheet_name, FailureStage::Write, format!("{:#}", e)));
            continue;
        }

        log::info!(
            "    ✓ Exportado: {} ({} filas, {} columnas)",
            csv_file_name(&base_name, &sheet_name),
            grid.row_count(),
            grid.column_count()
        );

        outcomes.push(SheetOutcome::Converted {
            sheet: sheet_name,
            path,
            rows: grid.row_count(),
            columns: grid.column_count(),
        });
    }

    let report = ConversionReport {
        source: source.to_path_buf(),
        output_dir,
        outcomes,
    };

    let banner = "=".repeat(BANNER_WIDTH);
    log::info!("{}", banner);
    log::info!(
        "Conversión completada: {} archivos CSV generados",
        report.written_paths().len()
    );
    if !report.failures().is_empty() {
        log::warn!("Hojas con errores: {}", report.failures().len());
    }
    log::info!("{}", banner);

    Ok(report)
}

fn failed(sheet: String, stage: FailureStage, message: String) -> SheetOutcome {
    log::error!("    ✗ Error al procesar '{}' ({}): {}", sheet, stage, message);
    SheetOutcome::Failed {
        sheet,
        stage,
        message,
    }
}

/// Output directory for a run, created with its parents when given explicitly
fn resolve_output_dir(source: &Path, output_dir: Option<&Path>) -> Result<PathBuf> {
    match output_dir {
        Some(dir) => {
            fs::create_dir_all(dir).with_context(|| {
                format!("Failed to create output directory: {}", dir.display())
            })?;
            Ok(dir.to_path_buf())
        }
        None => Ok(match source.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }),
    }
}

/// Workbook file name without its final extension
fn base_name(source: &Path) -> Result<String> {
    source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .with_context(|| format!("Cannot derive a file name from: {}", source.display()))
}
