//! # Stream Conversion Driver
//!
//! Drives end-to-end conversion of svmlight data from named features to
//! indexed features, in two modes:
//!
//! * **Streaming** (preferred): one logical line at a time, writing each
//!   comment and converted record as it is read. Output interleaving mirrors
//!   the input exactly, and the file is never held in memory.
//! * **Batch**: the whole file is loaded into records and comments, converted
//!   in one pass, and written back comments-first. Interleaving is lost.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::codec::{Line, classify_line, write_record};
use crate::errors::Result;
use crate::interner::FeatureInterner;
use crate::mapping::{MappingSink, save_mapping_path};
use crate::types::{IndexedRecord, NamedRecord, Record};

/// Emit a progress milestone every this many records.
const PROGRESS_INTERVAL: u64 = 100_000;

/// Counters for one conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertStats {
    /// Data records converted.
    pub records: u64,

    /// Comment lines passed through.
    pub comments: u64,
}

/// Lazy, single-pass iterator over the logical lines of an input stream.
///
/// Yields one [`Line`] per non-blank input line, in original order. Blank
/// lines are skipped. The stream is finite and not restartable.
#[derive(Debug)]
pub struct LineStream<R: BufRead> {
    reader: R,
    buffer: String,
}

impl<R: BufRead> LineStream<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
        }
    }
}

impl<R: BufRead> Iterator for LineStream<R> {
    type Item = Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buffer.clear();
            match self.reader.read_line(&mut self.buffer) {
                Ok(0) => return None,
                Ok(_) => {
                    if let Some(line) = classify_line(&self.buffer) {
                        return Some(Ok(line));
                    }
                }
                Err(err) => return Some(Err(err.into())),
            }
        }
    }
}

/// Convert one named record through the interner.
fn index_record(
    record: NamedRecord,
    interner: &mut FeatureInterner,
) -> Result<IndexedRecord> {
    Ok(Record {
        target: record.target,
        features: interner.index_feature_list(record.features)?,
        info: record.info,
    })
}

/// Convert an input stream to an output stream, preserving interleaving.
///
/// Comments are written verbatim the moment they are read; records are
/// converted and written immediately. A mid-stream failure leaves the output
/// truncated at the failing line.
pub fn convert_stream<R, W>(
    reader: R,
    writer: &mut W,
    interner: &mut FeatureInterner,
) -> Result<ConvertStats>
where
    R: BufRead,
    W: Write,
{
    let mut stats = ConvertStats::default();

    for line in LineStream::new(reader) {
        match line? {
            Line::Comment(comment) => {
                writeln!(writer, "{comment}")?;
                stats.comments += 1;
            }
            Line::Record(record) => {
                let indexed = index_record(record, interner)?;
                write_record(writer, &indexed)?;

                stats.records += 1;
                if stats.records.is_multiple_of(PROGRESS_INTERVAL) {
                    log::info!(
                        "converted {} records, {} distinct features",
                        stats.records,
                        interner.len()
                    );
                }
            }
        }
    }

    writer.flush()?;

    log::debug!(
        "conversion done: {} records, {} comments, {} distinct features",
        stats.records,
        stats.comments,
        interner.len()
    );

    Ok(stats)
}

/// Convert an input file to an output file in streaming mode.
///
/// When a mapping path is given, the mapping is written live: each feature is
/// appended the moment it is first seen. The sink is closed on every exit
/// path, error exits included.
pub fn convert_stream_path(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    mapping: Option<impl AsRef<Path>>,
) -> Result<ConvertStats> {
    let reader = BufReader::new(File::open(input)?);
    let mut writer = BufWriter::new(File::create(output)?);

    let mut interner = FeatureInterner::new();
    if let Some(path) = &mapping {
        interner.activate_live_mapping(MappingSink::create_path(path)?)?;
    }

    let result = convert_stream(reader, &mut writer, &mut interner);

    // Close the sink before surfacing a conversion failure.
    let closed = interner.deactivate_live_mapping();
    let stats = result?;
    closed?;

    Ok(stats)
}

/// Load a whole svmlight file into records and comments.
///
/// Relative interleaving of comments and data is not retained; the two come
/// back as separate lists in original order.
pub fn load_records_path(
    path: impl AsRef<Path>,
) -> Result<(Vec<NamedRecord>, Vec<String>)> {
    let reader = BufReader::new(File::open(path)?);

    let mut records = Vec::new();
    let mut comments = Vec::new();

    for line in LineStream::new(reader) {
        match line? {
            Line::Comment(comment) => comments.push(comment),
            Line::Record(record) => records.push(record),
        }
    }

    Ok((records, comments))
}

/// Convert a list of named records through the interner, in order.
pub fn convert_records(
    records: Vec<NamedRecord>,
    interner: &mut FeatureInterner,
) -> Result<Vec<IndexedRecord>> {
    records
        .into_iter()
        .map(|record| index_record(record, interner))
        .collect()
}

/// Write comments, then records, to an output file.
pub fn write_records_path(
    path: impl AsRef<Path>,
    records: &[IndexedRecord],
    comments: &[String],
) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for comment in comments {
        writeln!(writer, "{comment}")?;
    }
    for record in records {
        write_record(&mut writer, record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Convert an input file to an output file in batch mode.
///
/// The whole file is loaded up front; output groups all comments before the
/// data. When a mapping path is given the table is written once at the end,
/// from the interner snapshot.
pub fn convert_batch_path(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    mapping: Option<impl AsRef<Path>>,
) -> Result<ConvertStats> {
    log::info!("loading data from {}", input.as_ref().display());
    let (records, comments) = load_records_path(&input)?;

    log::info!("converting {} records", records.len());
    let mut interner = FeatureInterner::new();
    let indexed = convert_records(records, &mut interner)?;

    log::info!("writing data to {}", output.as_ref().display());
    write_records_path(&output, &indexed, &comments)?;

    if let Some(path) = mapping {
        log::info!("writing mapping to {}", path.as_ref().display());
        save_mapping_path(path, interner.mapping())?;
    }

    Ok(ConvertStats {
        records: indexed.len() as u64,
        comments: comments.len() as u64,
    })
}
