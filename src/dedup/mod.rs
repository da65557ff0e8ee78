//! Stream deduplication on top of the Inverse Bloom Filter.
//!
//! Records are newline-delimited byte strings. Each record is observed once;
//! the filter's answer decides whether it is emitted. Because the filter never
//! reports a false positive, a record is only ever dropped if an identical
//! record really did precede it.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use crate::config::{DedupConfig, InputConfig};
use crate::data_structures::InverseBloomFilter;
use crate::error::DedupResult;

/// Which records a deduplication run writes out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmitMode {
    /// Records not reported as seen before
    #[default]
    Unique,

    /// Records reported as seen before
    Duplicates,
}

/// Counters for a single deduplication run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DedupStats {
    /// Records read, including skipped ones
    pub records: u64,

    /// Records the filter reported as not seen before
    pub unique: u64,

    /// Records the filter reported as seen before
    pub duplicates: u64,

    /// Empty records passed through without touching the filter
    pub skipped: u64,
}

/// Deduplicates records against a shared filter.
///
/// Cloning is cheap and every clone observes into the same filter, so
/// several workers can deduplicate against one window of history.
#[derive(Debug, Clone)]
pub struct Deduplicator {
    filter: Arc<InverseBloomFilter>,
    input: InputConfig,
}

impl Deduplicator {
    /// Create a deduplicator over an existing filter.
    pub fn new(filter: Arc<InverseBloomFilter>, input: InputConfig) -> Self {
        Self { filter, input }
    }

    /// Build the filter described by `config` and wrap it.
    pub fn from_config(config: &DedupConfig) -> DedupResult<Self> {
        let filter = InverseBloomFilter::with_config(&config.filter)?;
        Ok(Self::new(Arc::new(filter), config.input.clone()))
    }

    /// The shared filter.
    pub fn filter(&self) -> &Arc<InverseBloomFilter> {
        &self.filter
    }

    /// The bytes of `record` that are observed.
    pub fn record_key<'a>(&self, record: &'a [u8]) -> &'a [u8] {
        if self.input.trim_whitespace {
            record.trim_ascii()
        } else {
            record
        }
    }

    /// Observe one record.
    ///
    /// Returns `None` when the record is empty and empty records are skipped,
    /// otherwise whether the filter reported it as seen before.
    pub fn check(&self, record: &[u8]) -> Option<bool> {
        let key = self.record_key(record);
        if key.is_empty() && self.input.skip_empty {
            return None;
        }
        Some(self.filter.observe(key))
    }

    /// Read newline-delimited records from `reader` and write the ones
    /// selected by `mode` to `writer`.
    ///
    /// A trailing `\r\n` or `\n` is not part of the record. Every emitted
    /// record is terminated with `\n`. If the writer reports a broken pipe
    /// the run stops early and returns the counts gathered so far.
    pub fn run<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        mut writer: W,
        mode: EmitMode,
    ) -> DedupResult<DedupStats> {
        let mut stats = DedupStats::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let record = strip_line_ending(&buf);
            stats.records += 1;

            let emit = match self.check(record) {
                None => {
                    stats.skipped += 1;
                    mode == EmitMode::Unique
                }
                Some(true) => {
                    stats.duplicates += 1;
                    mode == EmitMode::Duplicates
                }
                Some(false) => {
                    stats.unique += 1;
                    mode == EmitMode::Unique
                }
            };

            if emit && output_closed(write_record(&mut writer, record))? {
                tracing::debug!(records = stats.records, "output closed, stopping");
                return Ok(stats);
            }
        }

        if output_closed(writer.flush())? {
            tracing::debug!(records = stats.records, "output closed, stopping");
            return Ok(stats);
        }
        tracing::debug!(
            records = stats.records,
            unique = stats.unique,
            duplicates = stats.duplicates,
            skipped = stats.skipped,
            "deduplication run finished"
        );
        Ok(stats)
    }
}

fn write_record<W: Write>(writer: &mut W, record: &[u8]) -> io::Result<()> {
    writer.write_all(record)?;
    writer.write_all(b"\n")
}

/// `Ok(true)` when the reader on the other end has gone away.
fn output_closed(result: io::Result<()>) -> io::Result<bool> {
    match result {
        Ok(()) => Ok(false),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(true),
        Err(e) => Err(e),
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
