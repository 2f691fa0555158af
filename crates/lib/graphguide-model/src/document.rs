use serde::{Deserialize, Serialize};

use crate::node::{GuidanceNode, SectionMap};

/// Top-level guidance for one topic: named sections in definition order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuidanceDocument {
    sections: SectionMap,
}

impl GuidanceDocument {
    /// Parses a document from JSON, keeping section order as written.
    ///
    /// # Errors
    /// Returns an error if the text is not a JSON object of strings, string
    /// lists, and nested objects, or if an object repeats a key.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serializes the document as indented JSON.
    ///
    /// # Errors
    /// Propagates serializer failures; the tree holds only strings, so this
    /// does not fail in practice.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    #[must_use]
    pub fn section(&self, name: &str) -> Option<&GuidanceNode> {
        self.sections.get(name)
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.names()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Builds a new document holding only the named top-level sections.
    ///
    /// Sections appear in the order given by `names`. Names that are missing
    /// from this document or repeated in `names` are skipped.
    #[must_use]
    pub fn project<S: AsRef<str>>(&self, names: &[S]) -> Self {
        let mut sections = SectionMap::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            if sections.contains(name) {
                continue;
            }
            if let Some(node) = self.sections.get(name) {
                sections.insert(name, node.clone());
            }
        }
        Self { sections }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GuidanceDocument {
        GuidanceDocument::from_json(
            r#"{
                "Overview": ["first", "second"],
                "Syntax": "graph('G') | graph-match (a)-[e]->(b) project a",
                "Commands": {"Show": ".show graph_model G", "Drop": ".drop graph_model G"},
                "Mistakes": ["no project clause"]
            }"#,
        )
        .expect("sample document should parse")
    }

    #[test]
    fn project_uses_requested_order() {
        let projected = sample().project(&["Mistakes", "Overview"]);

        assert_eq!(projected.section_names().collect::<Vec<_>>(), ["Mistakes", "Overview"]);
        assert_eq!(projected.section("Overview"), sample().section("Overview"));
    }

    #[test]
    fn project_skips_unknown_and_repeated_names() {
        let projected = sample().project(&["Syntax", "Missing", "Syntax"]);

        assert_eq!(projected.section_names().collect::<Vec<_>>(), ["Syntax"]);
    }

    #[test]
    fn pretty_json_round_trips() {
        let document = sample();
        let text = document.to_pretty_json().expect("serializable");
        let reparsed = GuidanceDocument::from_json(&text).expect("reparsable");

        assert_eq!(reparsed, document);
        assert!(text.starts_with("{\n  \"Overview\": [\n    \"first\","));
    }

    #[test]
    fn nested_sections_keep_order() {
        let document = sample();
        let commands = document
            .section("Commands")
            .and_then(GuidanceNode::as_node)
            .expect("commands should be nested");

        assert_eq!(commands.names().collect::<Vec<_>>(), ["Show", "Drop"]);
    }

    #[test]
    fn top_level_must_be_an_object() {
        assert!(GuidanceDocument::from_json(r#"["not", "sections"]"#).is_err());
        assert!(GuidanceDocument::from_json(r#""text""#).is_err());
    }
}
