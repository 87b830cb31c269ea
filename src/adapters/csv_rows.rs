//! CSV row source and fill-in template writer. The CSV file stands in for
//! the spreadsheet: a header row, then one row of
//! (minuta, alimento, gramos_grupo_1, gramos_grupo_2) cells per line.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Writer};

use crate::core::normalize::normalize_key;
use crate::core::reconcile::IMPORT_HEADERS;
use crate::domain::model::RawRow;
use crate::domain::ports::{CatalogStore, RowSource};
use crate::utils::error::Result;

pub struct CsvRowSource<R: Read> {
    reader: csv::Reader<R>,
    record: StringRecord,
}

impl CsvRowSource<File> {
    pub fn from_path(path: &Path) -> Result<Self> {
        Ok(Self::from_reader(File::open(path)?))
    }
}

impl<R: Read> CsvRowSource<R> {
    pub fn from_reader(reader: R) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        Self {
            reader,
            record: StringRecord::new(),
        }
    }
}

fn cell(record: &StringRecord, index: usize) -> Option<String> {
    match record.get(index).map(str::trim) {
        Some("") | None => None,
        Some(value) => Some(value.to_string()),
    }
}

impl<R: Read> RowSource for CsvRowSource<R> {
    fn headers(&mut self) -> Result<Vec<String>> {
        Ok(self.reader.headers()?.iter().map(str::to_string).collect())
    }

    fn next_row(&mut self) -> Result<Option<RawRow>> {
        if !self.reader.read_record(&mut self.record)? {
            return Ok(None);
        }
        Ok(Some(RawRow {
            menu: cell(&self.record, 0),
            food: cell(&self.record, 1),
            grams_group_1: cell(&self.record, 2),
            grams_group_2: cell(&self.record, 3),
        }))
    }
}

/// Writes a fill-in template: the header row, then one row per catalog
/// food with the menu and quantity cells left blank, sorted by canonical
/// name.
pub fn write_template<S: CatalogStore, W: Write>(store: &S, out: W) -> Result<()> {
    let mut writer = Writer::from_writer(out);
    writer.write_record(IMPORT_HEADERS)?;

    let mut foods = store.list_foods()?;
    foods.sort_by_key(|f| normalize_key(&f.name));
    for food in foods {
        writer.write_record(["", food.name.as_str(), "", ""])?;
    }
    writer.flush()?;
    Ok(())
}
