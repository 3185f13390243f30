//! Ledger store backed by a CSV file
//!
//! The file is the single source of truth. Every operation reloads it in
//! full, and every mutation rewrites it in full through an atomic replace,
//! so changes made to the file between calls are always picked up.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::StringRecord;
use tracing::{debug, info};

use crate::error::{DompetError, DompetResult};
use crate::models::{Amount, Kind, Record, RecordFields, Summary};

use super::file_io::{read_csv, write_csv_atomic};

/// Column names written as the first row of every ledger file
pub const HEADER: [&str; 5] = ["date", "kind", "category", "amount", "description"];

/// Header written by older versions of the ledger
pub const LEGACY_HEADER: [&str; 5] = ["tanggal", "jenis", "kategori", "jumlah", "deskripsi"];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Ordered, file-backed collection of ledger records
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// Create a store for the ledger file at `path`
    ///
    /// The file is not touched until the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record in file order
    ///
    /// A missing file is an empty ledger.
    pub fn load(&self) -> DompetResult<Vec<Record>> {
        let Some(table) = read_csv(&self.path)? else {
            debug!(path = %self.path.display(), "ledger file missing, starting empty");
            return Ok(Vec::new());
        };

        if table.header.is_empty() && table.rows.is_empty() {
            return Ok(Vec::new());
        }

        check_header(&table.header)?;

        let records = table
            .rows
            .iter()
            .map(decode_row)
            .collect::<DompetResult<Vec<_>>>()?;

        debug!(path = %self.path.display(), count = records.len(), "loaded ledger");
        Ok(records)
    }

    /// Replace the whole ledger file with `records`, in order
    pub fn save(&self, records: &[Record]) -> DompetResult<()> {
        write_csv_atomic(&self.path, &HEADER, records.iter().map(encode_record))?;
        debug!(path = %self.path.display(), count = records.len(), "saved ledger");
        Ok(())
    }

    /// Add `record` at the end of the ledger
    pub fn append(&self, record: Record) -> DompetResult<Vec<Record>> {
        let mut records = self.load()?;
        info!(kind = %record.kind, category = %record.category, amount = %record.amount, "appending record");
        records.push(record);
        self.save(&records)?;
        Ok(records)
    }

    /// Get a copy of the record at `index`
    pub fn get(&self, index: usize) -> DompetResult<Record> {
        let records = self.load()?;
        let len = records.len();
        records
            .into_iter()
            .nth(index)
            .ok_or_else(|| DompetError::index(index, len))
    }

    /// Remove the record at `index`, returning it with the remaining ledger
    pub fn delete_at(&self, index: usize) -> DompetResult<(Record, Vec<Record>)> {
        let mut records = self.load()?;
        if index >= records.len() {
            return Err(DompetError::index(index, records.len()));
        }

        let removed = records.remove(index);
        self.save(&records)?;
        info!(index, category = %removed.category, "deleted record");
        Ok((removed, records))
    }

    /// Overwrite the editable fields of the record at `index`
    ///
    /// The record's date is kept.
    pub fn update_at(&self, index: usize, fields: RecordFields) -> DompetResult<Vec<Record>> {
        let mut records = self.load()?;
        let len = records.len();
        let record = records
            .get_mut(index)
            .ok_or_else(|| DompetError::index(index, len))?;

        record.apply(fields);
        self.save(&records)?;
        info!(index, "updated record");
        Ok(records)
    }

    /// Total income, total expense, and balance over the whole ledger
    pub fn summarize(&self) -> DompetResult<Summary> {
        let records = self.load()?;
        Ok(Summary::from_records(&records))
    }
}

fn check_header(header: &StringRecord) -> DompetResult<()> {
    let names: Vec<String> = header
        .iter()
        .take(HEADER.len())
        .map(|h| h.trim().to_ascii_lowercase())
        .collect();

    let matches = |expected: &[&str]| {
        names.len() >= expected.len() - 1
            && names.iter().zip(expected.iter()).all(|(a, b)| a == b)
    };

    if matches(&HEADER) || matches(&LEGACY_HEADER) {
        Ok(())
    } else {
        Err(DompetError::Storage(format!(
            "Unrecognized ledger header: {}",
            header.iter().collect::<Vec<_>>().join(",")
        )))
    }
}

fn decode_row(row: &StringRecord) -> DompetResult<Record> {
    let line = row.position().map(|p| p.line()).unwrap_or(0);
    let bad_row = |detail: String| DompetError::Storage(format!("Line {}: {}", line, detail));

    if row.len() < HEADER.len() - 1 {
        return Err(bad_row(format!(
            "expected at least {} columns, found {}",
            HEADER.len() - 1,
            row.len()
        )));
    }

    let date = NaiveDate::parse_from_str(row[0].trim(), DATE_FORMAT)
        .map_err(|e| bad_row(format!("invalid date '{}': {}", &row[0], e)))?;
    let kind = row[1].parse::<Kind>().map_err(|e| bad_row(e.to_string()))?;
    let amount = Amount::parse(&row[3]).map_err(|e| bad_row(e.to_string()))?;
    let description = row.get(4).unwrap_or_default();

    Ok(Record::with_details(date, kind, &row[2], amount, description))
}

fn encode_record(record: &Record) -> [String; 5] {
    [
        record.date.format(DATE_FORMAT).to_string(),
        record.kind.label().to_string(),
        record.category.clone(),
        record.amount.to_string(),
        record.description.clone(),
    ]
}
