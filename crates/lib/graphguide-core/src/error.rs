use std::path::PathBuf;

/// Errors returned by the guidance dispatcher.
#[derive(Debug, thiserror::Error)]
pub enum GuidanceError {
    #[error("unknown topic: {0}")]
    UnknownTopic(String),
    #[error("failed to render guidance: {0}")]
    Render(#[from] serde_json::Error),
}

/// Errors raised while loading or validating a topic catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog manifest: {0}")]
    Manifest(#[from] toml::de::Error),
    #[error("invalid guidance document {document}: {source}")]
    Document {
        document: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("guidance document not found: {0}")]
    MissingDocument(String),
    #[error("duplicate topic id: {0}")]
    DuplicateTopic(String),
    #[error("duplicate tool name: {0}")]
    DuplicateTool(String),
    #[error("topic {topic} declares focus alias `{alias}` more than once")]
    DuplicateAlias { topic: String, alias: String },
    #[error("topic {topic} focus alias `{alias}` names unknown section `{section}`")]
    UnknownSection {
        topic: String,
        alias: String,
        section: String,
    },
    #[error("topic {0} declares focus rules but does not support focus")]
    FocusNotSupported(String),
    #[error("topic {topic} has a focus rule with no aliases or no sections")]
    EmptyRule { topic: String },
}
