//! # Feature Interning Table
//!
//! The authoritative bidirectional mapping between feature names and feature
//! indices. Indices start at 1, are dense, and are assigned in strict
//! first-occurrence order; once assigned they are never reassigned. The
//! reserved `qid` token never enters the table.

use crate::errors::{FeatdexError, Result};
use crate::mapping::MappingSink;
use crate::types::{FdxHashMap, FdxHashSet, FeatureRef, QID};

/// Interning table assigning dense indices to feature names on first sight.
///
/// Exclusively owned by one conversion run; it is created empty, grows
/// monotonically, and is discarded (or flushed to a mapping file) at the end
/// of the run.
#[derive(Debug, Default)]
pub struct FeatureInterner {
    /// Name to index lookup.
    string2index: FdxHashMap<String, u32>,

    /// Slot `i` holds the name assigned index `i + 1`.
    names: Vec<String>,

    /// Write-through channel for live mapping output, when active.
    live_sink: Option<MappingSink>,
}

impl FeatureInterner {
    /// Create an empty interner.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of interned features.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no features have been interned.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Resolve one feature name to its [`FeatureRef`].
    ///
    /// `qid` passes through without consuming an index. Unknown names are
    /// assigned the next dense index and, when live mapping output is
    /// active, appended to the sink immediately.
    pub fn index_for(
        &mut self,
        name: &str,
    ) -> Result<FeatureRef> {
        if name == QID {
            return Ok(FeatureRef::Qid);
        }

        if let Some(&index) = self.string2index.get(name) {
            return Ok(FeatureRef::Index(index));
        }

        let index = self.names.len() as u32 + 1;
        self.string2index.insert(name.to_string(), index);
        self.names.push(name.to_string());

        if let Some(sink) = &mut self.live_sink {
            sink.append(index, name)?;
        }

        Ok(FeatureRef::Index(index))
    }

    /// Intern a record's feature list and sort it into output order.
    ///
    /// Names are interned in input order. Two entries collapsing to the same
    /// [`FeatureRef`] (a repeated name, `qid` included) raise
    /// [`FeatdexError::DuplicateFeature`]. The result is sorted ascending by
    /// the [`FeatureRef`] total order: `qid` first, then indices.
    pub fn index_feature_list(
        &mut self,
        features: Vec<(String, String)>,
    ) -> Result<Vec<(FeatureRef, String)>> {
        let mut seen: FdxHashSet<FeatureRef> = FdxHashSet::with_capacity(features.len());
        let mut indexed = Vec::with_capacity(features.len());

        for (name, value) in features {
            let feature = self.index_for(&name)?;
            if !seen.insert(feature) {
                return Err(FeatdexError::DuplicateFeature { name });
            }
            indexed.push((feature, value));
        }

        indexed.sort_by(|a, b| a.0.cmp(&b.0));

        Ok(indexed)
    }

    /// Look up the index assigned to a name, if any.
    pub fn index_of(
        &self,
        name: &str,
    ) -> Option<u32> {
        self.string2index.get(name).copied()
    }

    /// Look up the name assigned to an index, if any.
    pub fn name_for(
        &self,
        index: u32,
    ) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|slot| self.names.get(slot as usize))
            .map(String::as_str)
    }

    /// Snapshot of all interned `(index, name)` entries, in assignment order.
    pub fn mapping(&self) -> impl Iterator<Item = (u32, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(slot, name)| (slot as u32 + 1, name.as_str()))
    }

    /// Open a write-through channel for live mapping output.
    ///
    /// Features interned before activation are flushed to the sink first, in
    /// assignment order; every later discovery is appended as it happens.
    /// Must be paired with [`FeatureInterner::deactivate_live_mapping`].
    pub fn activate_live_mapping(
        &mut self,
        mut sink: MappingSink,
    ) -> Result<()> {
        for (slot, name) in self.names.iter().enumerate() {
            sink.append(slot as u32 + 1, name)?;
        }

        log::debug!("live mapping active, {} backlog entries flushed", self.names.len());

        self.live_sink = Some(sink);
        Ok(())
    }

    /// Flush and close the live mapping channel, if one is active.
    pub fn deactivate_live_mapping(&mut self) -> Result<()> {
        if let Some(sink) = self.live_sink.take() {
            sink.finish()?;
        }
        Ok(())
    }
}
