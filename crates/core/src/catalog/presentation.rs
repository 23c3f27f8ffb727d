//! Rendering-only attributes kept apart from the catalog data.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::MetricSection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionLayout {
    #[default]
    Grid,
    List,
    Chart,
}

/// How one section is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionPresentation {
    /// Icon name understood by the presentation layer (e.g. "target")
    pub icon: String,
    pub layout: SectionLayout,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_cols: Option<u8>,
}

impl SectionPresentation {
    pub fn grid(icon: &str, cols: u8) -> Self {
        Self {
            icon: icon.to_string(),
            layout: SectionLayout::Grid,
            grid_cols: Some(cols),
        }
    }
}

/// Presentation attributes keyed by section id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresentationHints {
    by_section: HashMap<String, SectionPresentation>,
}

impl PresentationHints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, section_id: &str, presentation: SectionPresentation) -> Self {
        self.insert(section_id, presentation);
        self
    }

    pub fn insert(&mut self, section_id: &str, presentation: SectionPresentation) {
        self.by_section.insert(section_id.to_string(), presentation);
    }

    pub fn get(&self, section_id: &str) -> Option<&SectionPresentation> {
        self.by_section.get(section_id)
    }

    pub fn len(&self) -> usize {
        self.by_section.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_section.is_empty()
    }
}

/// A section paired with its presentation attributes, if any were registered.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecoratedSection<'a> {
    pub section: &'a MetricSection,
    pub presentation: Option<&'a SectionPresentation>,
}

/// Attaches presentation hints to a derived view, keeping its order.
pub fn decorate<'a>(
    view: &[&'a MetricSection],
    hints: &'a PresentationHints,
) -> Vec<DecoratedSection<'a>> {
    view.iter()
        .copied()
        .map(|section| DecoratedSection {
            section,
            presentation: hints.get(&section.id),
        })
        .collect()
}
