use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// A single node in a guidance tree.
///
/// Guidance content is a tree of string leaves: a section holds either one
/// block of text, an ordered list of lines, or a nested set of named sections.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum GuidanceNode {
    Leaf(String),
    List(Vec<String>),
    Node(SectionMap),
}

impl GuidanceNode {
    /// Returns the text if this node is a leaf.
    #[must_use]
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Self::Leaf(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Returns the lines if this node is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(lines) => Some(lines.as_slice()),
            _ => None,
        }
    }

    /// Returns the nested sections if this node is a mapping.
    #[must_use]
    pub const fn as_node(&self) -> Option<&SectionMap> {
        match self {
            Self::Node(sections) => Some(sections),
            _ => None,
        }
    }
}

impl From<&str> for GuidanceNode {
    fn from(text: &str) -> Self {
        Self::Leaf(text.to_string())
    }
}

impl From<String> for GuidanceNode {
    fn from(text: String) -> Self {
        Self::Leaf(text)
    }
}

impl From<Vec<String>> for GuidanceNode {
    fn from(lines: Vec<String>) -> Self {
        Self::List(lines)
    }
}

impl From<SectionMap> for GuidanceNode {
    fn from(sections: SectionMap) -> Self {
        Self::Node(sections)
    }
}

/// Ordered mapping from section name to guidance node.
///
/// Entries keep insertion order through serialization and deserialization.
/// Section names are unique; deserializing a mapping with a repeated name fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    entries: Vec<(String, GuidanceNode)>,
}

impl SectionMap {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Inserts a section, replacing the content in place if the name exists.
    ///
    /// Returns the previous content when a section was replaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        node: impl Into<GuidanceNode>,
    ) -> Option<GuidanceNode> {
        let name = name.into();
        let node = node.into();
        if let Some((_, existing)) = self.entries.iter_mut().find(|(key, _)| *key == name) {
            return Some(std::mem::replace(existing, node));
        }
        self.entries.push((name, node));
        None
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&GuidanceNode> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, node)| node)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Section names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for SectionMap
where
    K: Into<String>,
    V: Into<GuidanceNode>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut sections = Self::new();
        for (name, node) in iter {
            sections.insert(name, node);
        }
        sections
    }
}

impl Serialize for SectionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, node) in &self.entries {
            map.serialize_entry(name, node)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SectionMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SectionMapVisitor)
    }
}

struct SectionMapVisitor;

impl<'de> Visitor<'de> for SectionMapVisitor {
    type Value = SectionMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping of section names to text, lists of text, or nested sections")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut sections = SectionMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, node)) = access.next_entry::<String, GuidanceNode>()? {
            if sections.contains(&name) {
                return Err(de::Error::custom(format_args!("duplicate section `{name}`")));
            }
            sections.entries.push((name, node));
        }
        Ok(sections)
    }
}
