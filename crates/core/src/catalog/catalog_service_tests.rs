//! Tests for catalog views.

#[cfg(test)]
mod tests {
    use crate::catalog::{
        decorate, default_catalog, default_presentation_hints, derive_view, tiered_view,
        validate_catalog, Audience, MetricSection, PresentationHints, PriorityFilter,
        PriorityTier, SectionLayout, SectionPresentation,
    };
    use crate::errors::DataError;

    fn section(id: &str, order: u32, audiences: &[Audience]) -> MetricSection {
        MetricSection::new(id, id, "", order).for_audiences(audiences)
    }

    fn orders(view: &[&MetricSection]) -> Vec<u32> {
        view.iter().map(|s| s.order).collect()
    }

    fn b2b_catalog() -> Vec<MetricSection> {
        vec![
            section("analytics", 10, &[Audience::B2B]),
            section("pipeline", 7, &[Audience::B2B]),
            section("funnel", 3, &[Audience::B2B]),
            section("summary", 1, &[Audience::B2B]),
            section("platform", 2, &[Audience::B2B]),
        ]
    }

    #[test]
    fn test_executive_view_keeps_orders_one_to_six() {
        let catalog = b2b_catalog();
        let view = derive_view(&catalog, Audience::B2B, PriorityFilter::Executive).unwrap();
        assert_eq!(orders(&view), vec![1, 2, 3]);
    }

    #[test]
    fn test_all_priority_sorts_ascending() {
        let catalog = b2b_catalog();
        let view = derive_view(&catalog, Audience::B2B, PriorityFilter::All).unwrap();
        assert_eq!(orders(&view), vec![1, 2, 3, 7, 10]);

        let view = derive_view(&catalog, Audience::B2B, PriorityFilter::Operational).unwrap();
        assert_eq!(orders(&view), vec![7]);

        let view = derive_view(&catalog, Audience::B2B, PriorityFilter::Analytical).unwrap();
        assert_eq!(orders(&view), vec![10]);
    }

    #[test]
    fn test_other_audience_yields_empty_view() {
        let catalog = b2b_catalog();
        let view = derive_view(&catalog, Audience::B2C, PriorityFilter::All).unwrap();
        assert!(view.is_empty());
    }

    #[test]
    fn test_view_is_deterministic() {
        let catalog = default_catalog();
        let first = derive_view(&catalog, Audience::B2C, PriorityFilter::All).unwrap();
        let second = derive_view(&catalog, Audience::B2C, PriorityFilter::All).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_order_within_audience_is_an_error() {
        let catalog = vec![
            section("executive-summary", 1, &[Audience::B2C, Audience::B2B]),
            section("b2b-overall-summary", 1, &[Audience::B2B]),
            section("b2b-funnel", 9, &[Audience::B2B]),
        ];

        let err = derive_view(&catalog, Audience::B2B, PriorityFilter::Analytical).unwrap_err();
        assert_eq!(
            err,
            DataError::DuplicateOrder {
                audience: "B2B".to_string(),
                order: 1,
                first_id: "executive-summary".to_string(),
                second_id: "b2b-overall-summary".to_string(),
            }
        );

        // The B2C audience only sees one section at order 1.
        let view = derive_view(&catalog, Audience::B2C, PriorityFilter::All).unwrap();
        assert_eq!(orders(&view), vec![1]);
    }

    #[test]
    fn test_zero_order_is_rejected_by_views() {
        let catalog = vec![
            section("unranked", 0, &[Audience::B2B]),
            section("summary", 1, &[Audience::B2B]),
        ];

        for priority in [PriorityFilter::Executive, PriorityFilter::Analytical] {
            assert_eq!(
                derive_view(&catalog, Audience::B2B, priority),
                Err(DataError::ZeroOrder("unranked".to_string()))
            );
        }
        assert!(tiered_view(&catalog, Audience::B2B).is_err());

        // Sections outside the audience are not inspected.
        let view = derive_view(&catalog, Audience::B2C, PriorityFilter::All).unwrap();
        assert!(view.is_empty());
    }

    #[test]
    fn test_same_order_across_audiences_is_fine() {
        let catalog = vec![
            section("b2c-growth", 2, &[Audience::B2C]),
            section("b2b-growth", 2, &[Audience::B2B]),
        ];
        assert!(validate_catalog(&catalog).is_ok());
    }

    #[test]
    fn test_tiered_view_groups_by_tier() {
        let catalog = b2b_catalog();
        let view = tiered_view(&catalog, Audience::B2B).unwrap();

        assert_eq!(orders(&view.executive), vec![1, 2, 3]);
        assert_eq!(orders(&view.operational), vec![7]);
        assert_eq!(orders(&view.analytical), vec![10]);
        assert_eq!(view.len(), 5);
        assert_eq!(orders(view.tier(PriorityTier::Operational)), vec![7]);
    }

    #[test]
    fn test_validate_catalog_rejects_duplicate_ids_and_zero_order() {
        let catalog = vec![
            section("roi", 1, &[Audience::B2C]),
            section("roi", 2, &[Audience::B2B]),
        ];
        assert_eq!(
            validate_catalog(&catalog),
            Err(DataError::DuplicateSectionId("roi".to_string()))
        );

        let catalog = vec![section("roi", 0, &[Audience::B2C])];
        assert_eq!(
            validate_catalog(&catalog),
            Err(DataError::ZeroOrder("roi".to_string()))
        );
    }

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 23);
        assert!(validate_catalog(&catalog).is_ok());
        assert!(catalog.iter().all(|s| s.metrics.len() == 8));

        let only = |audience: Audience| {
            catalog
                .iter()
                .filter(|s| s.audience_tags == vec![audience])
                .count()
        };
        assert_eq!(only(Audience::B2C), 12);
        assert_eq!(only(Audience::B2B), 10);
        assert_eq!(catalog.iter().filter(|s| s.audience_tags.len() == 2).count(), 1);
    }

    #[test]
    fn test_default_catalog_views() {
        let catalog = default_catalog();

        let b2c = tiered_view(&catalog, Audience::B2C).unwrap();
        assert_eq!(b2c.len(), 13);
        assert_eq!(b2c.executive.len(), 6);
        assert_eq!(b2c.operational.len(), 3);
        assert_eq!(b2c.analytical.len(), 4);

        let b2b = tiered_view(&catalog, Audience::B2B).unwrap();
        assert_eq!(b2b.len(), 11);
        let ids: Vec<&str> = b2b.executive.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "executive-summary",
                "b2b-overall-summary",
                "b2b-platform-performance",
                "b2b-campaign-funnel",
            ]
        );
        assert_eq!(b2b.operational.len(), 3);
        assert_eq!(b2b.analytical.len(), 4);
    }

    #[test]
    fn test_decorate_pairs_sections_with_hints() {
        let catalog = b2b_catalog();
        let hints = PresentationHints::new().with("summary", SectionPresentation::grid("building", 4));
        let view = derive_view(&catalog, Audience::B2B, PriorityFilter::Executive).unwrap();

        let decorated = decorate(&view, &hints);
        assert_eq!(decorated.len(), 3);
        assert_eq!(decorated[0].section.id, "summary");
        let presentation = decorated[0].presentation.unwrap();
        assert_eq!(presentation.icon, "building");
        assert_eq!(presentation.layout, SectionLayout::Grid);
        assert_eq!(presentation.grid_cols, Some(4));
        assert!(decorated[1].presentation.is_none());
    }

    #[test]
    fn test_default_hints_cover_default_catalog() {
        let catalog = default_catalog();
        let hints = default_presentation_hints();
        assert_eq!(hints.len(), catalog.len());
        assert!(catalog.iter().all(|s| hints.get(&s.id).is_some()));
    }
}
