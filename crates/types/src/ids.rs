//! Newtype wrapper for section identifiers
//!
//! Section ids travel between the page (element ids, link targets, URL
//! fragments) and the tracker. Wrapping them keeps a raw fragment such as
//! `"#intro"` from being mistaken for the id `"intro"`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// The stable, unique identifier of a page section.
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct SectionId(Arc<str>);

impl SectionId {
    /// Creates a new SectionId from a string
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Extracts a section id from a link target or URL fragment.
    ///
    /// Everything after the last `#` is the id, so `"#intro"`,
    /// `"page.html#intro"` and `"intro"` all resolve to `intro`.
    /// Returns `None` when nothing is left after the `#`.
    pub fn from_fragment(target: &str) -> Option<Self> {
        let id = match target.rfind('#') {
            Some(pos) => &target[pos + 1..],
            None => target,
        };
        let id = id.trim();
        if id.is_empty() {
            None
        } else {
            Some(Self::new(id))
        }
    }

    /// Returns the string representation of this section id
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the fragment form (`#id`) used for link targets.
    pub fn to_fragment(&self) -> String {
        format!("#{}", self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for SectionId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for SectionId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl From<Arc<str>> for SectionId {
    fn from(s: Arc<str>) -> Self {
        Self(s)
    }
}

impl AsRef<str> for SectionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for SectionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SectionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(SectionId::from)
    }
}
