//! # Svmlight Line Codec
//!
//! Parses and serializes one line of svmlight-format text:
//!
//! ```text
//! <line> .=. <target> <feature>:<value> ... <feature>:<value> # <info>
//! ```
//!
//! Parsing is deliberately permissive: tokens without a `:` separator are
//! dropped without error, and blank lines yield nothing.

use std::io::Write;

use crate::errors::Result;
use crate::types::{NamedRecord, Record};

/// One logical input line: either an opaque comment or a data record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A `#`-leading line, carried verbatim.
    Comment(String),

    /// A parsed data record.
    Record(NamedRecord),
}

/// Classify a raw input line.
///
/// Trims surrounding whitespace, then routes the line:
/// * empty -> `None`,
/// * leading `#` -> [`Line::Comment`],
/// * otherwise -> [`Line::Record`] via [`parse_data_line`].
pub fn classify_line(line: &str) -> Option<Line> {
    let line = line.trim();
    if line.is_empty() {
        None
    } else if line.starts_with('#') {
        Some(Line::Comment(line.to_string()))
    } else {
        Some(Line::Record(parse_data_line(line)))
    }
}

/// Parse one data line into a [`NamedRecord`].
///
/// The info segment is split off at the first `#` and keeps its `#` prefix.
/// The remainder splits on single spaces; the first token is the target, and
/// every later token containing a `:` splits at the first `:` into a
/// `(feature, value)` pair. Tokens without a `:` are dropped.
pub fn parse_data_line(line: &str) -> NamedRecord {
    let line = line.trim();

    let (data, info) = match line.find('#') {
        Some(pos) => (&line[..pos], Some(line[pos..].to_string())),
        None => (line, None),
    };

    let mut tokens = data.split(' ');
    let target = tokens.next().unwrap_or_default().to_string();
    let features = tokens
        .filter_map(|token| token.split_once(':'))
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

    Record {
        target,
        features,
        info,
    }
}

/// Write one record as an svmlight line.
///
/// Renders `target pair pair ... info\n` with single-space joins; the info
/// field defaults to empty, which leaves a trailing space before the newline.
pub fn write_record<F, W>(
    writer: &mut W,
    record: &Record<F>,
) -> Result<()>
where
    F: core::fmt::Display,
    W: Write,
{
    let pairs = record
        .features
        .iter()
        .map(|(feature, value)| format!("{feature}:{value}"))
        .collect::<Vec<_>>()
        .join(" ");

    writeln!(
        writer,
        "{} {} {}",
        record.target,
        pairs,
        record.info.as_deref().unwrap_or("")
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FeatureRef;

    #[test]
    fn test_classify_line() {
        assert_eq!(classify_line(""), None);
        assert_eq!(classify_line("   \t"), None);

        assert_eq!(
            classify_line("  # a comment "),
            Some(Line::Comment("# a comment".to_string()))
        );

        match classify_line("1 a:2") {
            Some(Line::Record(record)) => assert_eq!(record.target, "1"),
            other => panic!("expected record, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_data_line() {
        let record = parse_data_line("-1 qid:7 color:red size:3");

        assert_eq!(record.target, "-1");
        assert_eq!(
            record.features,
            vec![
                ("qid".to_string(), "7".to_string()),
                ("color".to_string(), "red".to_string()),
                ("size".to_string(), "3".to_string()),
            ]
        );
        assert_eq!(record.info, None);
    }

    #[test]
    fn test_parse_info_splits_at_first_hash() {
        let record = parse_data_line("1 a:2 # info with # inside");

        assert_eq!(record.target, "1");
        assert_eq!(record.features, vec![("a".to_string(), "2".to_string())]);
        assert_eq!(record.info, Some("# info with # inside".to_string()));
    }

    #[test]
    fn test_parse_drops_tokens_without_colon() {
        let record = parse_data_line("2 a:1 stray b:2");

        assert_eq!(
            record.features,
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_splits_value_at_first_colon() {
        let record = parse_data_line("1 url:http://x");

        assert_eq!(
            record.features,
            vec![("url".to_string(), "http://x".to_string())]
        );
    }

    #[test]
    fn test_write_record() {
        let record = Record {
            target: "1".to_string(),
            features: vec![
                (FeatureRef::Qid, "A".to_string()),
                (FeatureRef::Index(1), "10".to_string()),
                (FeatureRef::Index(2), "20".to_string()),
            ],
            info: None,
        };

        let mut buffer = Vec::new();
        write_record(&mut buffer, &record).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "1 qid:A 1:10 2:20 \n");
    }

    #[test]
    fn test_write_record_with_info() {
        let record = Record {
            target: "0".to_string(),
            features: vec![("x".to_string(), "1".to_string())],
            info: Some("# kept".to_string()),
        };

        let mut buffer = Vec::new();
        write_record(&mut buffer, &record).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "0 x:1 # kept\n");
    }

    #[test]
    fn test_parse_write_roundtrip() {
        let line = "1 a:10 b:20 # note";
        let record = parse_data_line(line);

        let mut buffer = Vec::new();
        write_record(&mut buffer, &record).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), format!("{line}\n"));
    }
}
