use graphguide_core::{CatalogError, GuidanceCatalog};
use tracing::info;

use crate::config::GuidanceConfig;

/// Loads the catalog named by the configuration, or the built-in one.
pub fn build_catalog(config: &GuidanceConfig) -> Result<GuidanceCatalog, CatalogError> {
    let catalog = match config.catalog_dir.as_deref() {
        Some(dir) => GuidanceCatalog::from_dir(dir)?,
        None => GuidanceCatalog::builtin()?,
    };
    for topic in catalog.topics() {
        let descriptor = topic.descriptor();
        info!(
            topic = %descriptor.id,
            tool = %descriptor.tool,
            sections = topic.document().len(),
            supports_focus = descriptor.supports_focus,
            "registered guidance topic"
        );
    }
    Ok(catalog)
}
