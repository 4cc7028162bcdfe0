//! In-memory grid of a sheet, rendered as text
//!
//! A sheet range is turned into a header row plus data rows where every
//! cell is already the string that ends up in the CSV file.

use calamine::{Data, Range};
use chrono::NaiveTime;
use std::collections::HashMap;

/// Largest magnitude for which integral floats are printed without a fraction
const INTEGRAL_FLOAT_LIMIT: f64 = 1e15;

/// Header labels plus data rows, all rows padded to the header width
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Grid {
    /// Build a grid from a sheet range, using the first non-blank row as header
    pub fn from_range(range: &Range<Data>) -> Self {
        let mut rows = range.rows().filter(|row| !is_blank_row(row));

        let header = match rows.next() {
            Some(row) => row,
            None => return Grid::default(),
        };

        let headers = header_labels(header);
        let width = headers.len();

        let rows = rows
            .map(|row| {
                let mut cells: Vec<String> = row.iter().take(width).map(cell_to_text).collect();
                cells.resize(width, String::new());
                cells
            })
            .collect();

        Grid { headers, rows }
    }

    /// Number of data rows, header excluded
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

/// A row counts as blank when no cell carries any text
fn is_blank_row(row: &[Data]) -> bool {
    row.iter().all(|c| match c {
        Data::Empty => true,
        Data::String(s) => s.is_empty(),
        _ => false,
    })
}

/// Turn the header row into unique column labels
///
/// Empty labels become `Unnamed: <index>`, repeated labels get `.1`, `.2`, ...
fn header_labels(row: &[Data]) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut labels = Vec::with_capacity(row.len());

    for (col_idx, cell) in row.iter().enumerate() {
        let mut label = cell_to_text(cell);
        if label.is_empty() {
            label = format!("Unnamed: {}", col_idx);
        }

        let mut count = counts.get(&label).copied().unwrap_or(0);
        while count > 0 {
            counts.insert(label.clone(), count + 1);
            label = format!("{}.{}", label, count);
            count = counts.get(&label).copied().unwrap_or(0);
        }

        counts.insert(label.clone(), count + 1);
        labels.push(label);
    }

    labels
}

/// Render a single cell the way it is written to CSV
pub fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => float_to_text(*f),
        Data::Bool(b) => {
            if *b {
                "True".to_string()
            } else {
                "False".to_string()
            }
        }
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ndt) if ndt.time() == NaiveTime::MIN => ndt.format("%Y-%m-%d").to_string(),
            Some(ndt) => ndt.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => float_to_text(dt.as_f64()),
        },
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
    }
}

fn float_to_text(f: f64) -> String {
    // Whole numbers come back from most readers as floats
    if f.fract() == 0.0 && f.abs() < INTEGRAL_FLOAT_LIMIT {
        (f as i64).to_string()
    } else {
        f.to_string()
    }
}
