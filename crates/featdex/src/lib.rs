//! # `featdex` Svmlight Feature Indexer
//!
//! Svmlight training tools require features to be identified by unique,
//! ascending positive integers. `featdex` takes a data file whose features
//! are still identified by strings and converts it into that form,
//! optionally writing a side mapping from index back to feature name.
//!
//! Input follows the regular svmlight format
//!
//! ```text
//! <line> .=. <target> <feature>:<value> ... <feature>:<value> # <info>
//! ```
//!
//! except that `<feature>` is an arbitrary string (or the reserved `qid`
//! token) instead of an integer. Output is the same grammar with each
//! feature replaced by its assigned index, features sorted ascending within
//! each record, and `qid` passed through unconverted.
//!
//! See:
//! * [`codec`] to parse and serialize individual lines.
//! * [`interner`] for the name to index assignment table.
//! * [`convert`] for the streaming and batch conversion drivers.
//! * [`mapping`] for index-to-name mapping output.
//!
//! ## Converting a file
//!
//! The streaming entry point converts line by line, preserving the original
//! interleaving of comments and data and writing the mapping live:
//!
//! ```no_run
//! # fn main() -> featdex::Result<()> {
//! let stats = featdex::convert_stream_path(
//!     "train.named.dat",
//!     "train.indexed.dat",
//!     Some("train.mapping.txt"),
//! )?;
//! println!("{} records", stats.records);
//! # Ok(())
//! # }
//! ```
//!
//! ## Converting in memory
//!
//! ```
//! use featdex::{FeatureInterner, FeatureRef, parse_data_line};
//!
//! let record = parse_data_line("1 qid:A length:10 width:20");
//!
//! let mut interner = FeatureInterner::new();
//! let features = interner.index_feature_list(record.features).unwrap();
//!
//! assert_eq!(features[0].0, FeatureRef::Qid);
//! assert_eq!(features[1].0, FeatureRef::Index(1));
//! assert_eq!(interner.name_for(1), Some("length"));
//! ```

pub mod codec;
pub mod convert;
pub mod errors;
pub mod interner;
pub mod mapping;
pub mod types;

#[doc(inline)]
pub use codec::{Line, classify_line, parse_data_line, write_record};
#[doc(inline)]
pub use convert::{
    ConvertStats, LineStream, convert_batch_path, convert_records, convert_stream,
    convert_stream_path, load_records_path, write_records_path,
};
#[doc(inline)]
pub use errors::{FeatdexError, Result};
#[doc(inline)]
pub use interner::FeatureInterner;
#[doc(inline)]
pub use mapping::{MappingSink, save_mapping_path, write_mapping};
#[doc(inline)]
pub use types::{FeatureRef, IndexedRecord, NamedRecord, QID, Record};
