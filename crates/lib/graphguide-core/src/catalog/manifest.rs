use serde::Deserialize;

use crate::catalog::{FocusRule, TopicDescriptor};

/// File name of the manifest inside a catalog directory.
pub const MANIFEST_FILE: &str = "catalog.toml";

/// Parsed `catalog.toml`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogManifest {
    #[serde(default, rename = "topic")]
    pub topics: Vec<TopicEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopicEntry {
    pub id: String,
    pub tool: String,
    pub description: String,
    #[serde(default)]
    pub focus_parameter: Option<String>,
    #[serde(default)]
    pub supports_focus: bool,
    pub document: String,
    #[serde(default)]
    pub focus: Vec<FocusEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FocusEntry {
    pub aliases: Vec<String>,
    pub sections: Vec<String>,
}

impl CatalogManifest {
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

impl TopicEntry {
    /// Splits the entry into its descriptor and the document path it refers to.
    pub fn into_parts(self) -> (TopicDescriptor, String) {
        let descriptor = TopicDescriptor {
            id: self.id,
            tool: self.tool,
            description: self.description,
            focus_parameter: self.focus_parameter,
            supports_focus: self.supports_focus,
            focus_rules: self
                .focus
                .into_iter()
                .map(|rule| FocusRule {
                    aliases: rule.aliases,
                    sections: rule.sections,
                })
                .collect(),
        };
        (descriptor, self.document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_topics_in_order() {
        let manifest = CatalogManifest::parse(
            r#"
            [[topic]]
            id = "b"
            tool = "get_b"
            description = "B"
            document = "b.json"

            [[topic]]
            id = "a"
            tool = "get_a"
            description = "A"
            supports_focus = true
            focus_parameter = "focusArea"
            document = "a.json"

            [[topic.focus]]
            aliases = ["x", "ex"]
            sections = ["X"]
            "#,
        )
        .expect("manifest should parse");

        let ids: Vec<_> = manifest.topics.iter().map(|topic| topic.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
        assert!(!manifest.topics[0].supports_focus);
        assert!(manifest.topics[0].focus.is_empty());
        assert_eq!(manifest.topics[1].focus[0].aliases, ["x", "ex"]);
    }

    #[test]
    fn rejects_unknown_keys() {
        let result = CatalogManifest::parse(
            r#"
            [[topic]]
            id = "a"
            tool = "get_a"
            description = "A"
            document = "a.json"
            colour = "blue"
            "#,
        );

        assert!(result.is_err());
    }
}
