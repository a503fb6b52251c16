use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{info, warn};

use crate::collections::HashTable;
use crate::course::Course;
use crate::error::CatalogError;

/// Outcome of one load: rows inserted and rows rejected as malformed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub inserted: usize,
    pub skipped: usize,
}

/// Parses one catalog row: `id,title[,prereq...]`. Fields are trimmed and
/// empty prerequisite cells dropped. `None` when id or title is missing.
pub fn parse_row(line: &str) -> Option<Course> {
    let mut fields = line.split(',').map(str::trim);
    let id = fields.next().filter(|f| !f.is_empty())?;
    let title = fields.next().filter(|f| !f.is_empty())?;
    Some(Course::new(id, title, fields.filter(|f| !f.is_empty())))
}

/// Inserts every well-formed row read from `reader`. Rows that are not valid
/// UTF-8 are skipped like any other malformed row; only I/O failures abort.
pub fn load_from_reader<R: BufRead>(
    mut reader: R,
    table: &mut HashTable,
) -> Result<LoadReport, CatalogError> {
    let mut report = LoadReport::default();
    let mut buf = Vec::new();
    let mut number = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        number += 1;

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                warn!("skipping catalog row {}: {}", number, e);
                report.skipped += 1;
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match parse_row(line) {
            Some(course) => {
                table.insert(course);
                report.inserted += 1;
            }
            None => {
                warn!("skipping malformed catalog row {}: {:?}", number, line.trim_end());
                report.skipped += 1;
            }
        }
    }
    Ok(report)
}

/// Opens `path` and inserts every well-formed row into `table`. If the file
/// cannot be opened the table is left untouched.
pub fn load_catalog<P: AsRef<Path>>(
    path: P,
    table: &mut HashTable,
) -> Result<LoadReport, CatalogError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CatalogError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let report = load_from_reader(BufReader::new(file), table)?;
    info!(
        "loaded {} courses from {} ({} skipped)",
        report.inserted,
        path.display(),
        report.skipped
    );
    Ok(report)
}
