//! Client-side CSV export of resource lists. No server round-trip.

use std::io::Write;

use crate::error::ExportError;
use crate::table::Tabular;

/// Write `records` as CSV: one header row from [`Tabular::columns`], then
/// one row per record. Absent cells become empty fields.
pub fn write_csv<T: Tabular, W: Write>(records: &[T], writer: W) -> Result<(), ExportError> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(T::columns())?;
    for record in records {
        let row: Vec<String> = T::columns()
            .iter()
            .map(|column| record.value(column).unwrap_or_default())
            .collect();
        out.write_record(&row)?;
    }
    out.flush()?;
    Ok(())
}

/// Render `records` to an in-memory CSV string, e.g. for a download blob.
pub fn csv_string<T: Tabular>(records: &[T]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_csv(records, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}
