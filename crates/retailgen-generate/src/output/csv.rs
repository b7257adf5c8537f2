use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use retailgen_core::TableName;

/// Write rows as CSV under the table's fixed header; returns bytes written.
///
/// The header is written explicitly so empty tables still carry it.
pub fn write_table_csv<T: Serialize>(
    path: &Path,
    table: TableName,
    rows: &[T],
) -> Result<u64, csv::Error> {
    let writer = BufWriter::new(File::create(path).map_err(csv::Error::from)?);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(ByteTally::new(writer));

    writer.write_record(table.columns())?;
    for row in rows {
        writer.serialize(row)?;
    }

    writer.flush()?;
    let mut tally = writer.into_inner().map_err(|err| err.into_error())?;
    tally.flush()?;
    Ok(tally.total)
}

/// Tallies the bytes that reach the file, for `TableReport::bytes_written`.
struct ByteTally<W: Write> {
    inner: W,
    total: u64,
}

impl<W: Write> ByteTally<W> {
    fn new(inner: W) -> Self {
        Self { inner, total: 0 }
    }
}

impl<W: Write> Write for ByteTally<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.total += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
