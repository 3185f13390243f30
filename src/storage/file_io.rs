//! File I/O utilities with atomic writes
//!
//! Every write goes to a sibling temp file which is synced and then renamed
//! over the target, so readers see either the old file or the new one.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use csv::StringRecord;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::DompetError;

/// Header and data rows of a CSV file
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub header: StringRecord,
    pub rows: Vec<StringRecord>,
}

/// Path of the temp file used while rewriting `path`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("ledger"));
    name.push(".tmp");
    path.with_file_name(name)
}

fn ensure_parent(path: &Path) -> Result<(), DompetError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            DompetError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }
    Ok(())
}

/// Move a fully written temp file over the target
fn commit_temp(temp_path: &Path, path: &Path) -> Result<(), DompetError> {
    fs::rename(temp_path, path).map_err(|e| {
        let _ = fs::remove_file(temp_path);
        DompetError::Storage(format!("Failed to rename temp file: {}", e))
    })
}

/// Read a CSV file with a header row, returning `None` if it doesn't exist
///
/// Rows may have any number of columns; interpreting them is up to the caller.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Option<CsvTable>, DompetError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| DompetError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let header = reader
        .headers()
        .map_err(|e| DompetError::Storage(format!("Failed to parse {}: {}", path.display(), e)))?
        .clone();

    let rows = reader
        .records()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| DompetError::Storage(format!("Failed to parse {}: {}", path.display(), e)))?;

    Ok(Some(CsvTable { header, rows }))
}

/// Write a header and rows to a CSV file atomically (write to temp, then rename)
pub fn write_csv_atomic<P, I, R, T>(path: P, header: &[&str], rows: I) -> Result<(), DompetError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    let path = path.as_ref();
    ensure_parent(path)?;

    let temp_path = temp_path_for(path);
    let file = File::create(&temp_path)
        .map_err(|e| DompetError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = csv::Writer::from_writer(file);
    let written = (|| -> Result<File, DompetError> {
        writer.write_record(header)?;
        for row in rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        writer
            .into_inner()
            .map_err(|e| DompetError::Storage(format!("Failed to flush data: {}", e)))
    })();

    let file = match written {
        Ok(file) => file,
        Err(err) => {
            let _ = fs::remove_file(&temp_path);
            return Err(err);
        }
    };

    file.sync_all()
        .map_err(|e| DompetError::Storage(format!("Failed to sync data: {}", e)))?;
    drop(file);

    commit_temp(&temp_path, path)
}

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, DompetError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| DompetError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| DompetError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically (write to temp, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), DompetError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    ensure_parent(path)?;

    let temp_path = temp_path_for(path);
    let file = File::create(&temp_path)
        .map_err(|e| DompetError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| DompetError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| DompetError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| DompetError::Storage(format!("Failed to sync data: {}", e)))?;
    drop(writer);

    commit_temp(&temp_path, path)
}
