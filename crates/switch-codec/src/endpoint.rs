//! Logical endpoint naming and interlock pairing

use crate::error::CodecError;
use serde::{Deserialize, Serialize};

/// Logical endpoint names bound to Zigbee endpoint ids
///
/// The binding is fixed per firmware variant and owned by the device
/// registry; it is never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointMap {
    entries: Vec<(String, u8)>,
}

impl EndpointMap {
    /// Build a map from `(name, endpoint id)` pairs
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u8)>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, id)| (name.into(), id))
                .collect(),
        }
    }

    /// Resolve a Zigbee endpoint id to its logical name
    pub fn resolve(&self, id: u8) -> Result<&str, CodecError> {
        self.entries
            .iter()
            .find(|(_, ep)| *ep == id)
            .map(|(name, _)| name.as_str())
            .ok_or(CodecError::UnknownEndpoint(id))
    }

    /// Forward lookup: endpoint id for a logical name
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, id)| *id)
    }

    /// Logical names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

/// Symmetric interlock relation between pairs of logical endpoints
///
/// Each endpoint has at most one partner. Changing `interlock_mode`
/// on one endpoint triggers a deferred read of the partner, because
/// the device pushes the same mode to both sides autonomously.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterlockPairs {
    pairs: Vec<(String, String)>,
}

impl InterlockPairs {
    /// No interlocked endpoints (single-gang variants)
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// A single interlocked pair
    pub fn pair(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            pairs: vec![(a.into(), b.into())],
        }
    }

    /// The partner of `name`, if it is part of a pair
    #[must_use]
    pub fn partner_of(&self, name: &str) -> Option<&str> {
        self.pairs.iter().find_map(|(a, b)| {
            if a == name {
                Some(b.as_str())
            } else if b == name {
                Some(a.as_str())
            } else {
                None
            }
        })
    }

    /// Whether `name` participates in any interlock pair
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.partner_of(name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_gang() -> EndpointMap {
        EndpointMap::new([("common", 1), ("left", 2), ("right", 3), ("both", 4)])
    }

    #[test]
    fn test_resolve() {
        let map = two_gang();
        assert_eq!(map.resolve(2).unwrap(), "left");
        assert_eq!(map.resolve(4).unwrap(), "both");
    }

    #[test]
    fn test_resolve_unknown() {
        let map = two_gang();
        assert_eq!(map.resolve(9), Err(CodecError::UnknownEndpoint(9)));
    }

    #[test]
    fn test_id_of() {
        let map = two_gang();
        assert_eq!(map.id_of("right"), Some(3));
        assert_eq!(map.id_of("middle"), None);
    }

    #[test]
    fn test_partner_is_symmetric() {
        let pairs = InterlockPairs::pair("left", "right");
        assert_eq!(pairs.partner_of("left"), Some("right"));
        assert_eq!(pairs.partner_of("right"), Some("left"));
        assert_eq!(pairs.partner_of("both"), None);
    }

    #[test]
    fn test_no_pairs() {
        let pairs = InterlockPairs::none();
        assert_eq!(pairs.partner_of("button"), None);
    }
}
