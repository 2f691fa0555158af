//! Topic catalog: descriptors plus their immutable guidance documents.
//!
//! A catalog is described by a TOML manifest listing topics and the JSON
//! documents holding their content. The built-in Kusto graph catalog is
//! embedded in the binary; an operator may load a replacement from disk.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;

use graphguide_model::GuidanceDocument;
use serde::Serialize;
use tracing::info;

use crate::error::CatalogError;

pub mod builtin;
mod manifest;

pub use manifest::MANIFEST_FILE;

use manifest::CatalogManifest;

/// Maps a set of focus aliases to the sections they select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FocusRule {
    pub aliases: Vec<String>,
    pub sections: Vec<String>,
}

/// Capability descriptor for one guidance topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicDescriptor {
    pub id: String,
    /// Name of the MCP tool that serves this topic.
    pub tool: String,
    pub description: String,
    /// Name of the optional string argument the tool accepts, if any.
    pub focus_parameter: Option<String>,
    pub supports_focus: bool,
    pub focus_rules: Vec<FocusRule>,
}

impl TopicDescriptor {
    /// Finds the rule for an already normalized focus value.
    ///
    /// Returns the matching alias alongside the rule. Topics without focus
    /// support never match.
    #[must_use]
    pub fn rule_for(&self, focus: &str) -> Option<(&str, &FocusRule)> {
        if !self.supports_focus {
            return None;
        }
        self.focus_rules.iter().find_map(|rule| {
            rule.aliases
                .iter()
                .find(|alias| alias.as_str() == focus)
                .map(|alias| (alias.as_str(), rule))
        })
    }

    /// All aliases across rules, in declaration order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.focus_rules
            .iter()
            .flat_map(|rule| rule.aliases.iter().map(String::as_str))
    }
}

/// A validated topic: its descriptor and document.
#[derive(Debug, Clone)]
pub struct Topic {
    descriptor: TopicDescriptor,
    document: GuidanceDocument,
}

impl Topic {
    /// Validates a descriptor against its document.
    ///
    /// Aliases are stored lowercased so lookups can compare directly.
    ///
    /// # Errors
    /// Returns an error if focus rules are declared on a topic without focus
    /// support, if a rule is empty, if an alias repeats, or if a rule names a
    /// section the document does not have.
    pub fn new(
        mut descriptor: TopicDescriptor,
        document: GuidanceDocument,
    ) -> Result<Self, CatalogError> {
        if !descriptor.supports_focus && !descriptor.focus_rules.is_empty() {
            return Err(CatalogError::FocusNotSupported(descriptor.id));
        }

        let mut seen: Vec<String> = Vec::new();
        for rule in &mut descriptor.focus_rules {
            if rule.aliases.is_empty() || rule.sections.is_empty() {
                return Err(CatalogError::EmptyRule {
                    topic: descriptor.id.clone(),
                });
            }
            for alias in &mut rule.aliases {
                *alias = alias.trim().to_lowercase();
                if alias.is_empty() {
                    return Err(CatalogError::EmptyRule {
                        topic: descriptor.id.clone(),
                    });
                }
                if seen.contains(alias) {
                    return Err(CatalogError::DuplicateAlias {
                        topic: descriptor.id.clone(),
                        alias: alias.clone(),
                    });
                }
                seen.push(alias.clone());
            }
            if let Some(section) = rule
                .sections
                .iter()
                .find(|section| document.section(section).is_none())
            {
                return Err(CatalogError::UnknownSection {
                    topic: descriptor.id.clone(),
                    alias: rule.aliases[0].clone(),
                    section: section.clone(),
                });
            }
        }

        Ok(Self {
            descriptor,
            document,
        })
    }

    #[must_use]
    pub const fn descriptor(&self) -> &TopicDescriptor {
        &self.descriptor
    }

    #[must_use]
    pub const fn document(&self) -> &GuidanceDocument {
        &self.document
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.descriptor.id
    }
}

/// Immutable set of guidance topics, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct GuidanceCatalog {
    topics: Vec<Topic>,
    by_id: HashMap<String, usize>,
}

impl GuidanceCatalog {
    /// Builds a catalog from validated topics, keeping their order.
    ///
    /// # Errors
    /// Returns an error if two topics share an id or a tool name.
    pub fn from_topics(topics: Vec<Topic>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(topics.len());
        let mut tools: Vec<&str> = Vec::with_capacity(topics.len());
        for (index, topic) in topics.iter().enumerate() {
            match by_id.entry(topic.descriptor.id.clone()) {
                Entry::Occupied(entry) => {
                    return Err(CatalogError::DuplicateTopic(entry.key().clone()));
                }
                Entry::Vacant(entry) => {
                    entry.insert(index);
                }
            }
            let tool = topic.descriptor.tool.as_str();
            if tools.contains(&tool) {
                return Err(CatalogError::DuplicateTool(tool.to_string()));
            }
            tools.push(tool);
        }
        Ok(Self { topics, by_id })
    }

    /// Builds a catalog from manifest text, resolving each topic's document
    /// through `load_document`.
    ///
    /// # Errors
    /// Returns an error if the manifest or any document is invalid, if a
    /// document cannot be loaded, or if topic validation fails.
    pub fn from_manifest<F>(manifest: &str, mut load_document: F) -> Result<Self, CatalogError>
    where
        F: FnMut(&str) -> Result<String, CatalogError>,
    {
        let manifest = CatalogManifest::parse(manifest)?;
        let mut topics = Vec::with_capacity(manifest.topics.len());
        for entry in manifest.topics {
            let (descriptor, document_name) = entry.into_parts();
            let text = load_document(&document_name)?;
            let document =
                GuidanceDocument::from_json(&text).map_err(|source| CatalogError::Document {
                    document: document_name,
                    source,
                })?;
            topics.push(Topic::new(descriptor, document)?);
        }
        Self::from_topics(topics)
    }

    /// Loads the catalog embedded in the binary.
    ///
    /// # Errors
    /// Returns an error only if the embedded resources are inconsistent.
    pub fn builtin() -> Result<Self, CatalogError> {
        let catalog = Self::from_manifest(builtin::MANIFEST, builtin::document)?;
        info!(topics = catalog.len(), "loaded built-in guidance catalog");
        Ok(catalog)
    }

    /// Loads a catalog from a directory holding `catalog.toml` and the JSON
    /// documents it references (paths relative to the directory).
    ///
    /// # Errors
    /// Returns an error if a file cannot be read or the catalog is invalid.
    pub fn from_dir(dir: &Path) -> Result<Self, CatalogError> {
        let manifest_path = dir.join(MANIFEST_FILE);
        let manifest =
            std::fs::read_to_string(&manifest_path).map_err(|source| CatalogError::Io {
                path: manifest_path,
                source,
            })?;
        let catalog = Self::from_manifest(&manifest, |name| {
            let path = dir.join(name);
            std::fs::read_to_string(&path).map_err(|source| CatalogError::Io { path, source })
        })?;
        info!(
            topics = catalog.len(),
            "loaded guidance catalog from {}",
            dir.display()
        );
        Ok(catalog)
    }

    #[must_use]
    pub fn topic(&self, id: &str) -> Option<&Topic> {
        self.by_id.get(id).map(|&index| &self.topics[index])
    }

    /// Topics in registration order.
    pub fn topics(&self) -> impl Iterator<Item = &Topic> {
        self.topics.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.topics.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}
