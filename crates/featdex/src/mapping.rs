//! # Index Mapping Output
//!
//! Writers for the index-to-name mapping table, one `INDEX NAME` line per
//! interned feature. The table can be written in a single pass at the end of
//! a run, or appended to incrementally through a [`MappingSink`] as new
//! features are discovered.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::errors::Result;

/// An open, append-only channel for live mapping output.
///
/// Wraps a writer and emits one `INDEX NAME` line per [`MappingSink::append`]
/// call. Dropping the sink flushes buffered output; call
/// [`MappingSink::finish`] to observe flush errors instead of discarding
/// them.
pub struct MappingSink {
    writer: Box<dyn Write>,
}

impl MappingSink {
    /// Create a sink writing to the given path.
    ///
    /// Any pre-existing file at the path is overwritten.
    pub fn create_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }

    /// Wrap an arbitrary writer.
    pub fn from_writer(writer: impl Write + 'static) -> Self {
        Self {
            writer: Box::new(writer),
        }
    }

    /// Append one mapping entry.
    pub fn append(
        &mut self,
        index: u32,
        name: &str,
    ) -> Result<()> {
        writeln!(self.writer, "{index} {name}")?;
        Ok(())
    }

    /// Flush and close the sink.
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl core::fmt::Debug for MappingSink {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("MappingSink").finish_non_exhaustive()
    }
}

/// Write a whole mapping table to a writer.
///
/// ## Arguments
/// * `writer` - the output writer.
/// * `mapping` - `(index, name)` entries, in assignment order.
pub fn write_mapping<'a, W, I>(
    writer: &mut W,
    mapping: I,
) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = (u32, &'a str)>,
{
    for (index, name) in mapping {
        writeln!(writer, "{index} {name}")?;
    }
    Ok(())
}

/// Write a whole mapping table to a file path.
///
/// Any pre-existing file at the path is overwritten.
pub fn save_mapping_path<'a, P, I>(
    path: P,
    mapping: I,
) -> Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = (u32, &'a str)>,
{
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    write_mapping(&mut writer, mapping)?;
    writer.flush()?;

    Ok(())
}
