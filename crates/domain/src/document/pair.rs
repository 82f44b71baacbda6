//! Key-value entries of pair-blocks.

use serde::{Deserialize, Serialize};

/// One `name: value` line of a pair-block.
///
/// Supports enable/disable without deletion: entries read from a
/// `:disabled` block carry `enabled = false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    /// The key. Never contains whitespace or `:` when produced by the parser.
    #[serde(default)]
    pub name: String,

    /// The value, trimmed, without line breaks.
    #[serde(default)]
    pub value: String,

    /// Whether this entry is enabled.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

const fn default_enabled() -> bool {
    true
}

impl Pair {
    /// Creates a new enabled pair.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            enabled: true,
        }
    }

    /// Creates a disabled pair.
    #[must_use]
    pub fn disabled(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            enabled: false,
        }
    }
}

/// Returns the value of the first pair named `name`.
#[must_use]
pub fn find_value<'a>(pairs: &'a [Pair], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|pair| pair.name == name)
        .map(|pair| pair.value.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_constructors() {
        assert!(Pair::new("a", "1").enabled);
        assert!(!Pair::disabled("a", "1").enabled);
    }

    #[test]
    fn test_enabled_defaults_to_true_when_missing() {
        let pair: Pair =
            serde_json::from_str(r#"{"name":"host","value":"localhost"}"#).expect("valid json");
        assert!(pair.enabled);
    }

    #[test]
    fn test_find_value_returns_first_match() {
        let pairs = vec![Pair::new("url", "a"), Pair::new("url", "b")];
        assert_eq!(find_value(&pairs, "url"), Some("a"));
        assert_eq!(find_value(&pairs, "body"), None);
    }
}
