//! Workbook formats the reader can open
//!
//! Checked once before anything touches the filesystem, so an unsupported
//! input fails fast with a message that says what would have worked.

use std::path::Path;

/// Extensions accepted as workbook input, lowercase
pub const SUPPORTED_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "xla", "xlam", "ods"];

/// Spreadsheet container format, derived from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkbookFormat {
    /// Office Open XML (xlsx, xlsm, xlam)
    Xlsx,
    /// Excel binary workbook
    Xlsb,
    /// Legacy BIFF workbook (xls, xla)
    Xls,
    /// OpenDocument spreadsheet
    Ods,
}

impl WorkbookFormat {
    /// Detect the format from the extension of `path`
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "xlsx" | "xlsm" | "xlam" => Some(WorkbookFormat::Xlsx),
            "xlsb" => Some(WorkbookFormat::Xlsb),
            "xls" | "xla" => Some(WorkbookFormat::Xls),
            "ods" => Some(WorkbookFormat::Ods),
            _ => None,
        }
    }
}

impl std::fmt::Display for WorkbookFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkbookFormat::Xlsx => write!(f, "Excel (xlsx)"),
            WorkbookFormat::Xlsb => write!(f, "Excel binary (xlsb)"),
            WorkbookFormat::Xls => write!(f, "Excel 97-2003 (xls)"),
            WorkbookFormat::Ods => write!(f, "OpenDocument (ods)"),
        }
    }
}
