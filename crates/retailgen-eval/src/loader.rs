use std::path::Path;

use serde::de::DeserializeOwned;

use retailgen_core::{Dataset, TableName};

use crate::errors::EvalError;

/// Load the five tables from `dir`.
///
/// Columns are matched by header name, so their order does not matter.
/// Fails before reading anything if any of the files is absent.
pub fn load_dataset(dir: &Path) -> Result<Dataset, EvalError> {
    if dir.exists() && !dir.is_dir() {
        return Err(EvalError::InvalidDataset(format!(
            "'{}' is not a directory",
            dir.display()
        )));
    }

    let missing: Vec<String> = TableName::ALL
        .iter()
        .map(|table| table.file_name())
        .filter(|file| !dir.join(file).is_file())
        .map(str::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(EvalError::MissingFiles(missing));
    }

    Ok(Dataset {
        customers: read_table(dir, TableName::Customers)?,
        products: read_table(dir, TableName::Products)?,
        stores: read_table(dir, TableName::Stores)?,
        orders: read_table(dir, TableName::Orders)?,
        order_items: read_table(dir, TableName::OrderItems)?,
    })
}

fn read_table<T: DeserializeOwned>(dir: &Path, table: TableName) -> Result<Vec<T>, EvalError> {
    let path = dir.join(table.file_name());
    let read_error = |source| EvalError::Read {
        path: path.clone(),
        source,
    };

    let mut reader = csv::Reader::from_path(&path).map_err(read_error)?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row.map_err(read_error)?);
    }
    Ok(rows)
}
