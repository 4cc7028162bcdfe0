use std::fs;
use std::io::{Cursor, Read, Write};
use std::path::Path;

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Truncated worksheet XML that calamine cannot parse
pub const BROKEN_SHEET_XML: &[u8] = b"<worksheet><sheetData><row><c";

/// Replace `xl/worksheets/sheet<number>.xml` inside the workbook at `path`
/// with malformed XML, leaving every other part untouched
pub fn break_sheet_xml(path: &Path, number: usize) {
    let target = format!("xl/worksheets/sheet{}.xml", number);
    let bytes = fs::read(path).unwrap();
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::<()>::default().compression_method(CompressionMethod::Stored);
    let mut replaced = false;

    for i in 0..archive.len() {
        let mut file = archive.by_index(i).unwrap();
        if file.is_dir() {
            continue;
        }
        let name = file.name().to_string();
        let mut contents = Vec::new();
        file.read_to_end(&mut contents).unwrap();

        writer.start_file(name.as_str(), options).unwrap();
        if name == target {
            writer.write_all(BROKEN_SHEET_XML).unwrap();
            replaced = true;
        } else {
            writer.write_all(&contents).unwrap();
        }
    }

    assert!(replaced, "{} not found in {}", target, path.display());
    let rebuilt = writer.finish().unwrap().into_inner();
    fs::write(path, rebuilt).unwrap();
}
