//! # Path Tokenizer
//!
//! Turns a raw request path into the ordered, non-empty segments the router
//! works on.
//!
//! ## Rules
//!
//! 1. Everything from the first `?` onward is discarded (query strings are never parsed)
//! 2. The remainder is split on `/`
//! 3. Empty segments are dropped, which collapses repeated, leading and trailing separators
//! 4. Zero remaining segments is reported as "absent" (`None`), which routes to `index`
//!
//! Segments are returned verbatim: no percent-decoding, no case folding.
//!
//! ```rust
//! use segrouter::path::tokenize;
//!
//! let segments = tokenize("/a//b///c?x=1").unwrap();
//! assert_eq!(segments.as_slice(), ["a", "b", "c"]);
//! assert!(tokenize("/").is_none());
//! ```

use crate::error::RouterError;
use serde_json::Value;
use smallvec::SmallVec;

/// Maximum inline segments before heap allocation.
/// Most application paths are at most a handful of segments deep.
pub const MAX_INLINE_SEGMENTS: usize = 8;

/// Stack-allocated segment storage for the dispatch path.
pub type SegmentVec = SmallVec<[String; MAX_INLINE_SEGMENTS]>;

const SEPARATOR: char = '/';
const QUERY_MARKER: char = '?';

/// Split a raw path into its non-empty segments.
///
/// Returns `None` when nothing is left after stripping the query string and
/// empty segments (`""`, `"/"`, `"//?a=b"`).
#[must_use]
pub fn tokenize(raw: &str) -> Option<SegmentVec> {
    let path = match raw.find(QUERY_MARKER) {
        Some(idx) => &raw[..idx],
        None => raw,
    };

    let segments: SegmentVec = path
        .split(SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect();

    if segments.is_empty() {
        None
    } else {
        Some(segments)
    }
}

/// What a caller may hand to `dispatch`: a raw string, or segments that were
/// already split (for example the remainder handed to a nested router).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathInput {
    /// Raw path, tokenized on dispatch
    Raw(String),
    /// Pre-split segments, passed through without re-validation
    Segments(SegmentVec),
}

impl PathInput {
    /// Resolve into segments. `None` means "absent" and selects the index branch.
    ///
    /// An empty pass-through sequence is treated the same as an absent path.
    #[must_use]
    pub fn into_segments(self) -> Option<SegmentVec> {
        match self {
            PathInput::Raw(raw) => tokenize(&raw),
            PathInput::Segments(segments) if segments.is_empty() => None,
            PathInput::Segments(segments) => Some(segments),
        }
    }
}

impl From<&str> for PathInput {
    fn from(raw: &str) -> Self {
        PathInput::Raw(raw.to_string())
    }
}

impl From<String> for PathInput {
    fn from(raw: String) -> Self {
        PathInput::Raw(raw)
    }
}

impl From<&String> for PathInput {
    fn from(raw: &String) -> Self {
        PathInput::Raw(raw.clone())
    }
}

impl From<SegmentVec> for PathInput {
    fn from(segments: SegmentVec) -> Self {
        PathInput::Segments(segments)
    }
}

impl From<Vec<String>> for PathInput {
    fn from(segments: Vec<String>) -> Self {
        PathInput::Segments(SegmentVec::from_vec(segments))
    }
}

impl From<&[&str]> for PathInput {
    fn from(segments: &[&str]) -> Self {
        PathInput::Segments(segments.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PathInput {
    fn from(segments: [&str; N]) -> Self {
        PathInput::Segments(segments.iter().map(|s| s.to_string()).collect())
    }
}

/// Accepts the dynamically-typed shapes a transport adapter may produce:
/// a JSON string or an array of JSON strings.
impl TryFrom<&Value> for PathInput {
    type Error = RouterError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(raw) => Ok(PathInput::Raw(raw.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_str().map(str::to_string).ok_or_else(|| {
                        RouterError::invalid_argument("url segments must be strings")
                    })
                })
                .collect::<Result<SegmentVec, _>>()
                .map(PathInput::Segments),
            _ => Err(RouterError::invalid_argument(
                "url must be a string or array",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collapses_repeated_separators() {
        let segments = tokenize("/a//b///c").unwrap();
        assert_eq!(segments.as_slice(), ["a", "b", "c"]);
    }

    #[test]
    fn test_blank_paths_are_absent() {
        assert!(tokenize("").is_none());
        assert!(tokenize("/").is_none());
        assert!(tokenize("///").is_none());
        assert!(tokenize("/?page=2").is_none());
    }

    #[test]
    fn test_strips_query_string() {
        let segments = tokenize("/users/42?expand=posts&x=/y/z").unwrap();
        assert_eq!(segments.as_slice(), ["users", "42"]);
    }

    #[test]
    fn test_segments_are_not_decoded() {
        let segments = tokenize("/files/a%20b/C").unwrap();
        assert_eq!(segments.as_slice(), ["files", "a%20b", "C"]);
    }

    #[test]
    fn test_no_leading_separator() {
        let segments = tokenize("test/lol/").unwrap();
        assert_eq!(segments.as_slice(), ["test", "lol"]);
    }

    #[test]
    fn test_segment_input_passes_through() {
        let input = PathInput::from(["", "x"]);
        // Pass-through sequences are not re-validated.
        assert_eq!(input.into_segments().unwrap().as_slice(), ["", "x"]);
    }

    #[test]
    fn test_empty_segment_input_is_absent() {
        assert!(PathInput::from(Vec::<String>::new()).into_segments().is_none());
    }

    #[test]
    fn test_try_from_json() {
        let raw = PathInput::try_from(&json!("/a/b")).unwrap();
        assert_eq!(raw, PathInput::Raw("/a/b".to_string()));

        let list = PathInput::try_from(&json!(["a", "b"])).unwrap();
        assert_eq!(list.into_segments().unwrap().as_slice(), ["a", "b"]);
    }

    #[test]
    fn test_try_from_json_rejects_other_shapes() {
        let err = PathInput::try_from(&json!({"path": "/a"})).unwrap_err();
        assert_eq!(err.to_string(), "url must be a string or array");
        assert!(err.is_invalid_argument());

        let err = PathInput::try_from(&json!(42)).unwrap_err();
        assert_eq!(err.to_string(), "url must be a string or array");

        let err = PathInput::try_from(&json!(["a", 1])).unwrap_err();
        assert_eq!(err.to_string(), "url segments must be strings");
    }
}
