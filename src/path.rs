//! Field paths locating values inside the nested configuration document.
//!
//! A path is an ordered sequence of segments, each either a string key or an
//! array index. Paths round-trip losslessly through their string encoding:
//! segments join with `.`, and an index renders as `[i]` appended to the
//! preceding key with no separator (e.g. `EXCHANGES.withdrawals[0].currency`).

use std::fmt;
use std::str::FromStr;

use anyhow::Result;

/// One step of a field path: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Key into a nested mapping
    Key(String),
    /// Index into an array
    Index(usize),
}

/// Ordered key/index sequence identifying one leaf position in the document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    /// Creates a single-key path (e.g. `SETTINGS`).
    pub fn key(name: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::Key(name.into())],
        }
    }

    /// Returns a new path extended with a key segment.
    #[must_use]
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Key(name.into()));
        Self { segments }
    }

    /// Returns a new path extended with an index segment.
    #[must_use]
    pub fn index(&self, i: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Index(i));
        Self { segments }
    }

    /// Returns a new path whose final key carries `suffix` appended.
    ///
    /// Used for the synthetic `_MIN`/`_MAX` bindings of range widgets.
    /// Returns the path unchanged if the final segment is an index.
    #[must_use]
    pub fn with_suffix(&self, suffix: &str) -> Self {
        let mut segments = self.segments.clone();
        if let Some(Segment::Key(key)) = segments.last_mut() {
            key.push_str(suffix);
        }
        Self { segments }
    }

    /// The segments of this path, in order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Encodes the path into its dot-and-bracket string form.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Key(key) => {
                    if !out.is_empty() {
                        out.push('.');
                    }
                    out.push_str(key);
                }
                Segment::Index(i) => {
                    out.push('[');
                    out.push_str(&i.to_string());
                    out.push(']');
                }
            }
        }
        out
    }

    /// Decodes a dot-and-bracket string back into a path.
    ///
    /// A bracket suffix on a segment yields two steps: the object key, then
    /// the numeric index. `decode(p.encode()) == p` for every path the
    /// renderer produces.
    ///
    /// # Errors
    ///
    /// Returns an error for empty segments, unterminated brackets,
    /// non-numeric indices, or trailing characters after a bracket.
    pub fn decode(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            anyhow::bail!("Field path cannot be empty");
        }

        let mut segments = Vec::new();
        for part in raw.split('.') {
            if part.is_empty() {
                anyhow::bail!("Field path '{raw}' contains an empty segment");
            }

            match part.find('[') {
                None => segments.push(Segment::Key(part.to_string())),
                Some(open) => {
                    let key = &part[..open];
                    if key.is_empty() {
                        anyhow::bail!("Field path '{raw}' has an index without a key");
                    }
                    let Some(rest) = part[open + 1..].strip_suffix(']') else {
                        anyhow::bail!("Field path '{raw}' has an unterminated index");
                    };
                    let index: usize = rest.parse().map_err(|_| {
                        anyhow::anyhow!("Field path '{raw}' has a non-numeric index '{rest}'")
                    })?;
                    segments.push(Segment::Key(key.to_string()));
                    segments.push(Segment::Index(index));
                }
            }
        }

        Ok(Self { segments })
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for FieldPath {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_keys_only() {
        let path = FieldPath::key("SETTINGS").child("THREADS");
        assert_eq!(path.encode(), "SETTINGS.THREADS");
    }

    #[test]
    fn test_encode_with_index() {
        let path = FieldPath::key("EXCHANGES")
            .child("withdrawals")
            .index(0)
            .child("currency");
        assert_eq!(path.encode(), "EXCHANGES.withdrawals[0].currency");
    }

    #[test]
    fn test_decode_keys_only() {
        let path = FieldPath::decode("CAPTCHA.SOLVIUM_API_KEY").unwrap();
        assert_eq!(
            path.segments(),
            &[
                Segment::Key("CAPTCHA".to_string()),
                Segment::Key("SOLVIUM_API_KEY".to_string()),
            ]
        );
    }

    #[test]
    fn test_decode_bracket_yields_key_then_index() {
        let path = FieldPath::decode("EXCHANGES.withdrawals[2].networks").unwrap();
        assert_eq!(
            path.segments(),
            &[
                Segment::Key("EXCHANGES".to_string()),
                Segment::Key("withdrawals".to_string()),
                Segment::Index(2),
                Segment::Key("networks".to_string()),
            ]
        );
    }

    #[test]
    fn test_round_trip() {
        let paths = [
            FieldPath::key("OTHERS").child("USE_PROXY_FOR_RPC"),
            FieldPath::key("SETTINGS").child("ACCOUNTS_RANGE_MIN"),
            FieldPath::key("EXCHANGES")
                .child("withdrawals")
                .index(11)
                .child("max_wait_time"),
        ];
        for path in paths {
            assert_eq!(FieldPath::decode(&path.encode()).unwrap(), path);
        }
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(FieldPath::decode("").is_err());
        assert!(FieldPath::decode("a..b").is_err());
        assert!(FieldPath::decode("a.[0]").is_err());
        assert!(FieldPath::decode("a.b[0").is_err());
        assert!(FieldPath::decode("a.b[x]").is_err());
        assert!(FieldPath::decode("a.b[0]c").is_err());
    }

    #[test]
    fn test_with_suffix() {
        let path = FieldPath::key("SETTINGS").child("ACCOUNTS_RANGE");
        assert_eq!(path.with_suffix("_MIN").encode(), "SETTINGS.ACCOUNTS_RANGE_MIN");
        assert_eq!(path.with_suffix("_MAX").encode(), "SETTINGS.ACCOUNTS_RANGE_MAX");
    }
}
