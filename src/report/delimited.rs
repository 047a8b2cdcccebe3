//! CSV rendition of the report.

use anyhow::Result;
use std::io;

use vidmeta_av::VideoRecord;

use super::{ReportRow, HEADERS};

/// Write the header and one row per record to `writer` as CSV.
pub fn write_csv<W: io::Write>(writer: W, records: &[VideoRecord]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    // Written explicitly so an empty scan still produces a header row.
    wtr.write_record(HEADERS)?;
    for record in records {
        wtr.serialize(ReportRow::from(record))?;
    }
    wtr.flush()?;

    Ok(())
}

/// Read CSV report rows from `reader`, checking the header row.
pub fn read_csv<R: io::Read>(reader: R) -> Result<Vec<ReportRow>> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr.headers()?.clone();
    if !headers.iter().eq(HEADERS.iter().copied()) {
        anyhow::bail!("Unexpected report header: {:?}", headers);
    }

    rdr.deserialize()
        .collect::<std::result::Result<Vec<ReportRow>, _>>()
        .map_err(Into::into)
}
