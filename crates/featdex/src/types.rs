//! # Common Types

use core::fmt::{self, Display};

/// Type alias for hash maps in this crate.
pub type FdxHashMap<K, V> = ahash::AHashMap<K, V>;

/// Type alias for hash sets in this crate.
pub type FdxHashSet<V> = ahash::AHashSet<V>;

/// The reserved query-id pseudo-feature.
///
/// `qid` marks query/group identifiers in svmlight data. It is never
/// assigned a numeric index and never appears in a mapping file.
pub const QID: &str = "qid";

/// A converted feature reference.
///
/// The derived [`Ord`] is the total order used to sort features within a
/// record: [`FeatureRef::Qid`] sorts before every index, and indices sort
/// numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FeatureRef {
    /// The reserved `qid` token; carries no index.
    Qid,

    /// A feature index, >= 1, dense in first-occurrence order.
    Index(u32),
}

impl Display for FeatureRef {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            FeatureRef::Qid => f.write_str(QID),
            FeatureRef::Index(index) => write!(f, "{index}"),
        }
    }
}

/// One svmlight data record.
///
/// `F` is the feature identifier type: `String` before conversion,
/// [`FeatureRef`] after.
///
/// The value field is kept as verbatim text; the format is
/// comparison-and-passthrough, so values are never parsed as numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<F> {
    /// The target label, unvalidated text.
    pub target: String,

    /// Feature/value pairs, in textual order.
    pub features: Vec<(F, String)>,

    /// Trailing `#`-prefixed info segment, if present.
    pub info: Option<String>,
}

/// A record as parsed from input, features still named by strings.
pub type NamedRecord = Record<String>;

/// A record after conversion, features referenced by index or `qid`.
pub type IndexedRecord = Record<FeatureRef>;
