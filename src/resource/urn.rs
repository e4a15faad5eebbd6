use std::fmt;

use crate::error::SolveError;
use crate::resource::kind::ResourceKind;

const URN_SCHEME: &str = "urn:solvebio";

/// A resource lookup key: the server-assigned numeric ID or a URN.
///
/// Textual input is always treated as a URN and validated before any
/// request is made; there is no fallback from a failed URN to a numeric
/// lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceId {
    Id(i64),
    Urn(String),
}

impl From<i64> for ResourceId {
    fn from(id: i64) -> Self {
        ResourceId::Id(id)
    }
}

impl From<&str> for ResourceId {
    fn from(urn: &str) -> Self {
        ResourceId::Urn(urn.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(urn: String) -> Self {
        ResourceId::Urn(urn)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceId::Id(id) => write!(f, "{id}"),
            ResourceId::Urn(urn) => f.write_str(urn),
        }
    }
}

/// Validate `input` as a URN of the given kind, returning the trimmed URN.
///
/// The URN must carry the `urn:solvebio` scheme followed by exactly the
/// segment count the kind requires, each segment non-empty and drawn from
/// letters, digits, `_`, `-` and `.`. A mismatch is a hard
/// [`SolveError::InvalidUrn`] naming the expected format.
pub fn validate(kind: ResourceKind, input: &str) -> Result<String, SolveError> {
    let (format, arity) = match (kind.urn_format(), kind.urn_segments()) {
        (Some(format), Some(arity)) => (format, arity),
        _ => return Err(SolveError::AbstractResource(kind.type_name())),
    };

    let trimmed = input.trim();
    let invalid = || SolveError::InvalidUrn {
        format,
        urn: trimmed.to_string(),
    };

    let rest = trimmed.strip_prefix(URN_SCHEME).ok_or_else(invalid)?;
    let rest = rest.strip_prefix(':').ok_or_else(invalid)?;

    let segments: Vec<&str> = rest.split(':').collect();
    if segments.len() != arity {
        return Err(invalid());
    }
    for segment in segments {
        if segment.is_empty() || !segment.chars().all(is_segment_char) {
            return Err(invalid());
        }
    }

    Ok(trimmed.to_string())
}

fn is_segment_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_urns_of_the_right_arity() {
        assert_eq!(
            validate(ResourceKind::Depository, "urn:solvebio:clinvar").unwrap(),
            "urn:solvebio:clinvar"
        );
        assert_eq!(
            validate(ResourceKind::Dataset, "urn:solvebio:clinvar:2.0.0:variants").unwrap(),
            "urn:solvebio:clinvar:2.0.0:variants"
        );
        assert_eq!(
            validate(
                ResourceKind::DatasetField,
                "urn:solvebio:clinvar:2.0.0:variants:hg19_start"
            )
            .unwrap(),
            "urn:solvebio:clinvar:2.0.0:variants:hg19_start"
        );
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(
            validate(ResourceKind::Depository, "  urn:solvebio:clinvar\n").unwrap(),
            "urn:solvebio:clinvar"
        );
    }

    #[test]
    fn rejects_wrong_arity() {
        // two segments is a version URN, not a dataset URN
        let err = validate(ResourceKind::Dataset, "urn:solvebio:clinvar:2.0.0").unwrap_err();
        match err {
            SolveError::InvalidUrn { format, .. } => {
                assert_eq!(format, "urn:solvebio:{DEPOSITORY}:{VERSION}:{DATASET}");
            }
            other => panic!("expected InvalidUrn, got {other:?}"),
        }

        assert!(validate(ResourceKind::Depository, "urn:solvebio:a:b").is_err());
    }

    #[test]
    fn rejects_bad_scheme_and_segments() {
        assert!(validate(ResourceKind::Depository, "urn:other:clinvar").is_err());
        assert!(validate(ResourceKind::Depository, "urn:solvebio:").is_err());
        assert!(validate(ResourceKind::Depository, "urn:solvebio:has space").is_err());
        assert!(validate(ResourceKind::Depository, "urn:solvebiox:clinvar").is_err());
        assert!(validate(ResourceKind::DepositoryVersion, "urn:solvebio::2.0.0").is_err());
    }

    #[test]
    fn numeric_and_textual_ids_resolve_distinctly() {
        assert_eq!(ResourceId::from(42), ResourceId::Id(42));
        assert_eq!(
            ResourceId::from("urn:solvebio:clinvar"),
            ResourceId::Urn("urn:solvebio:clinvar".to_string())
        );
        assert_eq!(ResourceId::Id(42).to_string(), "42");
        assert_eq!(
            ResourceId::Urn("urn:solvebio:x".into()).to_string(),
            "urn:solvebio:x"
        );
    }
}
