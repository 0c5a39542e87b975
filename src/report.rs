use crate::detector::Duplicate;
use std::io::{self, Write};

/// Write the duplicate report, one line per repeat, to the given sink.
///
/// Line format: `Duplicate title "<title>" found at lines: <first> and <dup>.`
/// An empty report writes nothing.
pub fn write_report<W: Write>(out: &mut W, duplicates: &[Duplicate]) -> io::Result<()> {
    for duplicate in duplicates {
        writeln!(
            out,
            "Duplicate title \"{}\" found at lines: {} and {}.",
            duplicate.title, duplicate.first_line, duplicate.dup_line
        )?;
    }
    Ok(())
}
