//! Persistence of a generated dataset.

pub mod csv;

use std::path::{Path, PathBuf};

use retailgen_core::{Dataset, TableName};

use crate::errors::GenerationError;
use self::csv::write_table_csv;

/// A table file moved into its final location.
#[derive(Debug, Clone)]
pub struct PersistedTable {
    pub table: TableName,
    pub path: PathBuf,
    pub rows: u64,
    pub bytes_written: u64,
}

/// Write all five tables into `out_dir`.
///
/// Every table is first written to a `.tmp` sibling; the final file names
/// only appear once all five writes have succeeded. A failed write removes
/// the staged files and leaves existing outputs untouched. A failed rename
/// may leave some tables already replaced, so the directory must then be
/// regenerated.
pub fn persist_dataset(
    out_dir: &Path,
    dataset: &Dataset,
) -> Result<Vec<PersistedTable>, GenerationError> {
    std::fs::create_dir_all(out_dir)?;

    let mut staged = Vec::with_capacity(TableName::ALL.len());
    if let Err(err) = stage_tables(out_dir, dataset, &mut staged) {
        discard(&staged);
        return Err(err);
    }

    let mut persisted = Vec::with_capacity(staged.len());
    for (table, tmp_path, bytes_written) in &staged {
        let path = out_dir.join(table.file_name());
        if let Err(err) = std::fs::rename(tmp_path, &path) {
            discard(&staged);
            return Err(err.into());
        }
        persisted.push(PersistedTable {
            table: *table,
            path,
            rows: dataset.row_count(*table) as u64,
            bytes_written: *bytes_written,
        });
    }
    Ok(persisted)
}

fn stage_tables(
    out_dir: &Path,
    dataset: &Dataset,
    staged: &mut Vec<(TableName, PathBuf, u64)>,
) -> Result<(), GenerationError> {
    for table in TableName::ALL {
        let tmp_path = out_dir.join(format!("{}.tmp", table.file_name()));
        let written = match table {
            TableName::Customers => write_table_csv(&tmp_path, table, &dataset.customers),
            TableName::Products => write_table_csv(&tmp_path, table, &dataset.products),
            TableName::Stores => write_table_csv(&tmp_path, table, &dataset.stores),
            TableName::Orders => write_table_csv(&tmp_path, table, &dataset.orders),
            TableName::OrderItems => write_table_csv(&tmp_path, table, &dataset.order_items),
        };
        match written {
            Ok(bytes) => staged.push((table, tmp_path, bytes)),
            Err(source) => {
                let _ = std::fs::remove_file(&tmp_path);
                return Err(GenerationError::Write {
                    path: tmp_path,
                    source,
                });
            }
        }
    }
    Ok(())
}

fn discard(staged: &[(TableName, PathBuf, u64)]) {
    for (_, tmp_path, _) in staged {
        let _ = std::fs::remove_file(tmp_path);
    }
}
