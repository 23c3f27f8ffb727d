//! View derivation over the metric catalog.

use std::collections::{HashMap, HashSet};

use log::debug;

use super::{Audience, MetricSection, PriorityFilter, PriorityTier, TieredView};
use crate::errors::DataError;

/// Selects the sections shown to `audience`, limited to one priority tier
/// unless `priority` is [`PriorityFilter::All`], ascending by order.
///
/// Duplicate or zero orders among the audience's sections are a data error,
/// checked before the tier filter so the outcome does not depend on
/// `priority`. An empty result is not an error.
pub fn derive_view(
    catalog: &[MetricSection],
    audience: Audience,
    priority: PriorityFilter,
) -> Result<Vec<&MetricSection>, DataError> {
    let mut sections: Vec<&MetricSection> =
        catalog.iter().filter(|s| s.is_for(audience)).collect();
    ensure_valid_orders(&sections, audience)?;

    sections.retain(|s| priority.admits(s.order));
    sections.sort_by_key(|s| s.order);

    debug!(
        "Derived {} view ({:?}): {} of {} sections",
        audience,
        priority,
        sections.len(),
        catalog.len()
    );
    Ok(sections)
}

/// Derives the full view for `audience` grouped into priority tiers.
pub fn tiered_view(
    catalog: &[MetricSection],
    audience: Audience,
) -> Result<TieredView<'_>, DataError> {
    let mut view = TieredView::default();
    for section in derive_view(catalog, audience, PriorityFilter::All)? {
        match section.tier() {
            PriorityTier::Executive => view.executive.push(section),
            PriorityTier::Operational => view.operational.push(section),
            PriorityTier::Analytical => view.analytical.push(section),
        }
    }
    Ok(view)
}

/// Checks a whole catalog: section ids are unique, every order is at least 1,
/// and orders are unique within each audience.
pub fn validate_catalog(catalog: &[MetricSection]) -> Result<(), DataError> {
    let mut seen_ids: HashSet<&str> = HashSet::new();
    for section in catalog {
        if !seen_ids.insert(section.id.as_str()) {
            return Err(DataError::DuplicateSectionId(section.id.clone()));
        }
        if section.order == 0 {
            return Err(DataError::ZeroOrder(section.id.clone()));
        }
    }

    for audience in Audience::ALL {
        let sections: Vec<&MetricSection> =
            catalog.iter().filter(|s| s.is_for(audience)).collect();
        ensure_valid_orders(&sections, audience)?;
    }
    Ok(())
}

fn ensure_valid_orders(sections: &[&MetricSection], audience: Audience) -> Result<(), DataError> {
    let mut by_order: HashMap<u32, &str> = HashMap::new();
    for section in sections {
        if section.order == 0 {
            return Err(DataError::ZeroOrder(section.id.clone()));
        }
        if let Some(first) = by_order.insert(section.order, &section.id) {
            return Err(DataError::DuplicateOrder {
                audience: audience.to_string(),
                order: section.order,
                first_id: first.to_string(),
                second_id: section.id.clone(),
            });
        }
    }
    Ok(())
}
