//! Kusto graph modeling guidance embedded at compile time.

use crate::error::CatalogError;

/// Graph model design best practices.
pub const BEST_PRACTICES: &str = "best-practices";
/// KQL commands for graph model management and querying.
pub const COMMAND_GUIDANCE: &str = "command-guidance";
/// Property bag and schema simplification guidance.
pub const SCHEMA_SIMPLIFICATION: &str = "schema-simplification";
/// `graph-match` operator guidance; the only built-in topic with focus support.
pub const MATCH_GUIDANCE: &str = "match-guidance";

pub const MANIFEST: &str = include_str!("../../resources/catalog.toml");

const DOCUMENTS: &[(&str, &str)] = &[
    (
        "best_practices.json",
        include_str!("../../resources/best_practices.json"),
    ),
    (
        "command_guidance.json",
        include_str!("../../resources/command_guidance.json"),
    ),
    (
        "schema_simplification.json",
        include_str!("../../resources/schema_simplification.json"),
    ),
    (
        "graph_match.json",
        include_str!("../../resources/graph_match.json"),
    ),
];

/// Resolves a document name from the embedded manifest.
///
/// # Errors
/// Returns [`CatalogError::MissingDocument`] for names that are not embedded.
pub fn document(name: &str) -> Result<String, CatalogError> {
    DOCUMENTS
        .iter()
        .find(|(file, _)| *file == name)
        .map(|(_, text)| (*text).to_string())
        .ok_or_else(|| CatalogError::MissingDocument(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{GuidanceCatalog, Topic};

    #[test]
    fn builtin_catalog_loads_all_topics() {
        let catalog = GuidanceCatalog::builtin().expect("embedded catalog should be valid");

        let ids: Vec<_> = catalog.topics().map(Topic::id).collect();
        assert_eq!(
            ids,
            [BEST_PRACTICES, COMMAND_GUIDANCE, SCHEMA_SIMPLIFICATION, MATCH_GUIDANCE]
        );
    }

    #[test]
    fn only_match_guidance_supports_focus() {
        let catalog = GuidanceCatalog::builtin().expect("embedded catalog should be valid");

        let focused: Vec<_> = catalog
            .topics()
            .filter(|topic| topic.descriptor().supports_focus)
            .map(Topic::id)
            .collect();
        assert_eq!(focused, [MATCH_GUIDANCE]);
    }

    #[test]
    fn match_guidance_aliases() {
        let catalog = GuidanceCatalog::builtin().expect("embedded catalog should be valid");
        let topic = catalog.topic(MATCH_GUIDANCE).expect("match guidance topic");

        assert_eq!(
            topic.descriptor().aliases().collect::<Vec<_>>(),
            ["labels", "patterns", "variable", "variablelength", "performance", "examples"]
        );
    }

    #[test]
    fn unknown_document_name_is_reported() {
        assert!(matches!(
            document("missing.json"),
            Err(CatalogError::MissingDocument(ref name)) if name == "missing.json"
        ));
    }
}
