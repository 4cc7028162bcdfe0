//! Export each sheet of a spreadsheet workbook to its own CSV file
//!
//! For a workbook `datos.xlsx` with sheets `Sheet1` and `Sheet2` the
//! converter writes `datos (Sheet1 sheet).csv` and `datos (Sheet2 sheet).csv`.

pub mod converter;
pub mod format;
pub mod grid;
pub mod logging;
pub mod output;

pub use converter::{ConversionOptions, ConversionReport, FailureStage, SheetOutcome, convert};
pub use format::{SUPPORTED_EXTENSIONS, WorkbookFormat};
pub use grid::Grid;
pub use output::{csv_file_name, write_grid_csv};
