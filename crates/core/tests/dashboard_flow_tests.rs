//! End-to-end tests: configuration, datasets and catalog flowing through the
//! public API the way the presentation layer drives it.

use metricdeck_core::aggregation::{aggregate, summarize_alerts};
use metricdeck_core::catalog::{Audience, PriorityFilter, Trend};
use metricdeck_core::currency::FormatOptions;
use metricdeck_core::query::{query, run_query, Predicate, Query, SortSpec};
use metricdeck_core::records::{RiskAlert, Row};
use metricdeck_core::{Dashboard, DashboardConfig};
use serde_json::json;

fn region_rows() -> Vec<Row> {
    serde_json::from_value(json!([
        { "region": "North America", "spend": 125000, "roi": 25.0, "segment": "enterprise" },
        { "region": "Europe", "spend": 98000, "roi": 22.0, "segment": "enterprise" },
        { "region": "Asia Pacific", "spend": 60000, "roi": 18.0, "segment": "smb" },
        { "region": "Latin America", "spend": 17000, "roi": 12.0, "segment": "smb" }
    ]))
    .unwrap()
}

#[test]
fn test_region_table_flow() {
    let dashboard = Dashboard::builtin(DashboardConfig::default()).unwrap();
    let rows = region_rows();

    let top = run_query(
        &rows,
        &Query::new()
            .filter(Predicate::selection("segment", "all"))
            .sort_by(SortSpec::descending("roi"))
            .limit(2),
    )
    .unwrap();
    let regions: Vec<String> = top
        .iter()
        .map(|r| r.get("region").map(|v| v.as_field_ref().to_string()).unwrap_or_default())
        .collect();
    assert_eq!(regions, vec!["North America", "Europe"]);

    let totals = aggregate(&rows, "spend", Some("segment")).unwrap();
    assert_eq!(totals.sum, 300_000.0);
    assert_eq!(totals.category("enterprise").unwrap().percentage_of_total, 74.3);
    assert_eq!(totals.category("smb").unwrap().percentage_of_total, 25.7);

    let opts = FormatOptions::compact();
    assert_eq!(dashboard.format_amount(totals.sum, &opts).unwrap(), "₹300K");
    assert_eq!(
        dashboard.format_amount(totals.mean, &FormatOptions::default()).unwrap(),
        "₹75,000"
    );
}

#[test]
fn test_risk_alert_flow() {
    let alerts: Vec<RiskAlert> = serde_json::from_value(json!([
        { "title": "Pipeline drop", "description": "", "severity": "high", "status": "active",
          "impact": 45000, "responseTime": 2.5, "detectedAt": "2 hours ago", "trend": -12.1 },
        { "title": "CPL spike", "description": "", "severity": "medium", "status": "resolved",
          "impact": 12000, "responseTime": 6.0, "detectedAt": "1 day ago", "trend": 8.7 },
        { "title": "Churn risk", "description": "", "severity": "high", "status": "resolved",
          "impact": 30000, "responseTime": 3.5, "detectedAt": "3 days ago", "trend": -4.0 }
    ]))
    .unwrap();

    let high = query(
        &alerts,
        &[
            Predicate::selection("severity", "high"),
            Predicate::selection("status", "all"),
        ],
        &SortSpec::descending("impact"),
    )
    .unwrap();
    let titles: Vec<&str> = high.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Pipeline drop", "Churn risk"]);

    let summary = summarize_alerts(&alerts);
    assert_eq!(summary.active_alerts, 1);
    assert_eq!(summary.resolved_alerts, 2);
    assert_eq!(summary.total_impact, 87_000.0);
    assert_eq!(summary.avg_response_time, 4.0);
}

#[test]
fn test_catalog_flow_with_json_config() {
    let config = DashboardConfig::from_json(
        r#"{ "currency": { "code": "USD", "symbol": "$", "name": "US Dollar", "locale": "en-US" },
             "trend": { "stableBand": 0.5 } }"#,
    )
    .unwrap();
    let dashboard = Dashboard::builtin(config).unwrap();

    let view = dashboard
        .decorated_view(Audience::B2B, PriorityFilter::Executive)
        .unwrap();
    let first = &view[0];
    assert_eq!(first.section.id, "executive-summary");
    assert_eq!(first.presentation.map(|p| p.icon.as_str()), Some("target"));

    // Static display strings re-render in the configured currency.
    let revenue = &first.section.metrics[0];
    assert_eq!(revenue.value, "₹8.7M");
    assert_eq!(
        dashboard.format_magnitude(&revenue.value, &FormatOptions::compact()),
        "$8.7M"
    );
    assert_eq!(
        dashboard.format_magnitude(&revenue.value, &FormatOptions::default()),
        "$8,700,000"
    );

    let tile = dashboard
        .dynamic_metric("Total Spend", 2_400_000.0, 2_133_333.0, &FormatOptions::compact())
        .unwrap();
    assert_eq!(tile.value, "$2.4M");
    assert_eq!(tile.change_percent, 12.5);
    assert_eq!(tile.trend, Trend::Up);
}
