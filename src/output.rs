use crate::results::JobRecord;
use csv::WriterBuilder;
use std::io::Write;
use std::path::Path;

/// Fixed column order of the export
pub const HEADER: [&str; 4] = ["title", "company", "location", "url"];

/// Write records as CSV to `path`, truncating any existing file.
///
/// The header row is always written, even for an empty record list.
pub fn write_csv<P: AsRef<Path>>(records: &[JobRecord], path: P) -> Result<(), csv::Error> {
    let file = std::fs::File::create(path.as_ref())?;
    write_records(records, file)?;
    ::log::info!("Saved {} jobs to {}", records.len(), path.as_ref().display());
    Ok(())
}

/// Write records as CSV to any writer
pub fn write_records<W: Write>(records: &[JobRecord], out: W) -> Result<(), csv::Error> {
    // Headers are written by hand so an empty export still has them.
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(out);
    writer.write_record(HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
