//! Guidance dispatch: topic lookup, focus projection, and serialization.
//!
//! Dispatch is a pure read over the catalog. Topics that support focus narrow
//! their document to the sections mapped by a matching alias; any focus value
//! that does not match returns the full document rather than an error.

use std::borrow::Cow;

use graphguide_model::GuidanceDocument;
use tracing::debug;

use crate::catalog::{GuidanceCatalog, Topic};
use crate::error::GuidanceError;

/// How a resolved document was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    Full,
    Projection { alias: &'a str },
}

/// A topic document ready to be rendered.
#[derive(Debug, Clone)]
pub struct Resolved<'a> {
    pub topic: &'a Topic,
    pub document: Cow<'a, GuidanceDocument>,
    pub selection: Selection<'a>,
}

impl Resolved<'_> {
    /// Serializes the selected document as indented JSON.
    ///
    /// # Errors
    /// Returns [`GuidanceError::Render`] if serialization fails.
    pub fn render(&self) -> Result<String, GuidanceError> {
        Ok(self.document.to_pretty_json()?)
    }
}

/// Lowercases a focus value; an empty value counts as absent.
///
/// Surrounding whitespace is kept, so a padded value matches no alias.
#[must_use]
pub fn normalize_focus(focus: Option<&str>) -> Option<String> {
    focus
        .filter(|value| !value.is_empty())
        .map(str::to_lowercase)
}

impl GuidanceCatalog {
    /// Selects the document for `topic`, projected by `focus` when the topic
    /// supports it and the focus matches an alias.
    ///
    /// # Errors
    /// Returns [`GuidanceError::UnknownTopic`] if the topic is not registered.
    pub fn resolve<'a>(
        &'a self,
        topic: &str,
        focus: Option<&str>,
    ) -> Result<Resolved<'a>, GuidanceError> {
        let entry = self
            .topic(topic)
            .ok_or_else(|| GuidanceError::UnknownTopic(topic.to_string()))?;
        let full = Resolved {
            topic: entry,
            document: Cow::Borrowed(entry.document()),
            selection: Selection::Full,
        };

        let descriptor = entry.descriptor();
        if !descriptor.supports_focus {
            return Ok(full);
        }
        let Some(focus) = normalize_focus(focus) else {
            return Ok(full);
        };

        match descriptor.rule_for(&focus) {
            Some((alias, rule)) => {
                debug!(topic, alias, "projecting guidance sections");
                Ok(Resolved {
                    topic: entry,
                    document: Cow::Owned(entry.document().project(rule.sections.as_slice())),
                    selection: Selection::Projection { alias },
                })
            }
            None => {
                debug!(topic, focus = %focus, "unrecognized focus; returning full guidance");
                Ok(full)
            }
        }
    }

    /// Returns the serialized guidance for `topic`, optionally narrowed by
    /// `focus`.
    ///
    /// # Errors
    /// Returns [`GuidanceError::UnknownTopic`] if the topic is not registered,
    /// or [`GuidanceError::Render`] if serialization fails.
    pub fn get_guidance(&self, topic: &str, focus: Option<&str>) -> Result<String, GuidanceError> {
        self.resolve(topic, focus)?.render()
    }
}
