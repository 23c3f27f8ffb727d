//! The built-in dashboard catalog.
//!
//! Twenty-three sections: twelve B2C-only, ten B2B-only and the shared
//! executive summary, so B2C viewers see thirteen and B2B viewers eleven.
//! The shared summary holds order 1 in both audiences, so the B2B executive
//! sections start at 2.

use super::{
    Audience, MetricEntry, MetricSection, PresentationHints, SectionPresentation, Trend,
};

const B2C: &[Audience] = &[Audience::B2C];
const B2B: &[Audience] = &[Audience::B2B];
const SHARED: &[Audience] = &[Audience::B2C, Audience::B2B];

fn up(label: &str, value: &str, change: f64) -> MetricEntry {
    MetricEntry::new(label, value, change, Trend::Up)
}

fn down(label: &str, value: &str, change: f64) -> MetricEntry {
    MetricEntry::new(label, value, change, Trend::Down)
}

fn stable(label: &str, value: &str, change: f64) -> MetricEntry {
    MetricEntry::new(label, value, change, Trend::Stable)
}

fn section(
    id: &str,
    title: &str,
    description: &str,
    order: u32,
    audiences: &[Audience],
    metrics: Vec<MetricEntry>,
) -> MetricSection {
    MetricSection::new(id, title, description, order)
        .for_audiences(audiences)
        .with_metrics(metrics)
}

/// Returns the built-in catalog in declaration order.
pub fn default_catalog() -> Vec<MetricSection> {
    vec![
        section(
            "executive-summary",
            "Executive Summary",
            "Critical business performance indicators at a glance",
            1,
            SHARED,
            vec![
                up("Total Revenue", "₹8.7M", 18.3),
                up("Total Spend", "₹2.4M", 12.5),
                up("ROI", "3.6x", 5.2),
                up("Total Conversions", "12.4K", 22.1),
                down("CPC", "₹2.69", -3.2),
                down("CPM", "₹53.10", -1.8),
                down("CPConv", "₹193.55", -7.8),
                up("Total Customers", "45.2K", 15.7),
            ],
        ),
        section(
            "revenue-growth-performance",
            "Revenue & Growth Performance",
            "Revenue metrics, growth rates, and market expansion indicators",
            2,
            B2C,
            vec![
                up("Daily GMV", "₹3.2M", 52.2),
                up("MTD GMV", "₹59.6M", 45.2),
                up("Revenue Growth Rate", "18.3%", 5.2),
                up("Market Share", "12.4%", 2.1),
                up("Customer Growth Rate", "15.7%", 3.8),
                up("Revenue per Customer", "₹192", 8.9),
                up("AOV Growth", "12.7%", 2.3),
                up("Revenue Efficiency Score", "8.7/10", 1.2),
            ],
        ),
        section(
            "operational-efficiency",
            "Operational Efficiency",
            "Cost management, efficiency metrics, and operational performance",
            3,
            B2C,
            vec![
                up("Overall CIR", "20%", 2.0),
                down("Overall CPO", "₹31", -5.2),
                down("Overall CAC", "₹51", -8.7),
                up("Budget Utilization", "126%", 8.7),
                up("Marketing Efficiency Ratio", "3.6x", 0.4),
                down("Cost per Acquisition", "₹53.10", -8.2),
                up("Operational Margin", "78%", 5.3),
                up("Efficiency Score", "8.9/10", 0.8),
            ],
        ),
        section(
            "customer-acquisition-retention",
            "Customer Acquisition & Retention",
            "Customer lifecycle metrics, acquisition costs, and retention strategies",
            4,
            B2C,
            vec![
                up("New Customers (63%)", "3,291", 56.2),
                up("Repeat Customers (31%)", "1,619", 51.3),
                up("Customer Retention Rate", "78%", 5.3),
                down("Customer Churn Rate", "2.1%", -12.5),
                up("CLV", "₹2.1K", 12.7),
                up("CLV/CAC Ratio", "39.5x", 18.9),
                up("Repeat Purchase Rate", "45%", 8.7),
                up("Customer Lifetime Value", "₹2.1K", 12.7),
            ],
        ),
        section(
            "sales-conversion-performance",
            "Sales & Conversion Performance",
            "Sales metrics, conversion rates, and revenue attribution",
            5,
            B2C,
            vec![
                up("Daily Orders", "5,624", 47.6),
                up("MTD Orders", "103.1K", 42.8),
                up("Conversion Rate", "2.8%", 15.7),
                down("Cart Abandonment Rate", "23%", -8.7),
                up("Checkout Rate", "77%", 12.3),
                up("Units Sold", "12.4K", 18.7),
                up("Sales Velocity", "₹45.2K", 15.7),
                up("March Target Achievement", "87%", 5.3),
            ],
        ),
        section(
            "platform-channel-performance",
            "Platform & Channel Performance",
            "Performance across advertising platforms and marketing channels",
            6,
            B2C,
            vec![
                up("Facebook ROI", "3.8x", 8.9),
                up("Google Ads ROI", "4.2x", 12.3),
                up("TikTok ROI", "2.9x", 18.7),
                up("Platform Efficiency Score", "8.7/10", 5.2),
                up("Paid Traffic (60%)", "245.1K", 18.9),
                up("Organic Traffic (37%)", "151.1K", 42.1),
                up("Paid CIR", "41%", 3.2),
                up("Channel Attribution Score", "9.1/10", 2.3),
            ],
        ),
        section(
            "traffic-user-engagement",
            "Traffic & User Engagement",
            "User acquisition, engagement metrics, and session analysis",
            7,
            B2C,
            vec![
                up("Daily Users", "326.8K", 25.9),
                up("Daily Sessions", "408.5K", 26.8),
                up("Daily GVs", "707K", 33.7),
                up("Daily Installs", "70.3K", 8.2),
                up("Sessions per User", "1.3", 0.7),
                up("Time on Site", "4m 32s", 12.5),
                up("Pages per Session", "3.2", 8.9),
                down("Bounce Rate", "32%", -8.3),
            ],
        ),
        section(
            "ecommerce-performance",
            "E-commerce Performance",
            "Shopping behavior, product performance, and conversion metrics",
            8,
            B2C,
            vec![
                down("Return Rate", "4.2%", -15.8),
                up("Mobile Sales", "68%", 15.7),
                down("Desktop Sales", "28%", -5.2),
                down("Tablet Sales", "4%", -2.1),
                up("Product Performance Score", "8.7/10", 3.2),
                up("Inventory Turnover", "12.4x", 8.7),
                up("Average Order Value", "₹701", 12.7),
                up("Cross-sell Rate", "23%", 5.8),
            ],
        ),
        section(
            "engagement-retention",
            "Engagement & Retention",
            "Customer engagement, social media, and loyalty metrics",
            9,
            B2C,
            vec![
                up("Social Media Engagement", "12.4K", 15.3),
                up("Push Notification CTR", "8.7%", 12.5),
                up("Email Open Rate", "24.8%", 3.2),
                up("Email Click Rate", "3.1%", 8.7),
                up("App Sessions", "45.2K", 22.1),
                up("Customer Satisfaction Score", "4.6/5", 0.2),
                up("Net Promoter Score", "72", 8.9),
                up("Customer Health Score", "87/100", 5.3),
            ],
        ),
        section(
            "revenue-attribution",
            "Revenue & Attribution",
            "Revenue breakdown by platform and attribution analysis",
            10,
            B2C,
            vec![
                up("E-commerce Revenue", "65%", 5.2),
                up("Quick Commerce Revenue", "20%", 15.7),
                down("DT2 Website Revenue", "12%", -2.1),
                down("Offline Channel Revenue", "3%", -8.7),
                up("First Click Attribution", "35%", 2.1),
                down("Last Click Attribution", "45%", -1.8),
                stable("Linear Attribution", "15%", 0.5),
                up("Data-Driven Attribution", "5%", 8.9),
            ],
        ),
        section(
            "budget-forecasting",
            "Budget & Forecasting",
            "Budget utilization, pacing, and predictive analytics",
            11,
            B2C,
            vec![
                down("Burn Rate", "2.1%", -0.8),
                up("Budget vs Performance", "105%", 8.7),
                up("30-Day Forecast Revenue", "₹2.8M", 12.5),
                up("60-Day Forecast Revenue", "₹5.2M", 15.7),
                up("Predicted ROI", "3.8x", 5.2),
                down("Risk Score", "Low", -15.3),
                down("Anomaly Alerts", "2", -5.7),
                up("Forecast Accuracy", "94%", 2.1),
            ],
        ),
        section(
            "audience-insights",
            "Audience Insights",
            "Demographics, device usage, and interest segment analysis",
            12,
            B2C,
            vec![
                up("Female Conversion Rate", "2.8%", 12.5),
                up("Male Conversion Rate", "2.1%", 8.7),
                up("18-24 Age Group ROI", "2.8x", 15.3),
                up("25-34 Age Group ROI", "4.2x", 8.9),
                down("Mobile CAC", "₹45.20", -8.7),
                down("Desktop CAC", "₹67.80", -5.2),
                up("High-Interest Segment ROI", "5.8x", 22.1),
                up("New Interest Segment CAC", "₹89.50", 12.3),
            ],
        ),
        section(
            "creative-performance",
            "Creative Performance",
            "Performance by creative type and format analysis",
            13,
            B2C,
            vec![
                up("Video CTR", "2.8%", 15.7),
                up("Image CTR", "1.9%", 8.7),
                up("Carousel CTR", "2.1%", 12.3),
                down("Text Ad CTR", "1.2%", -2.1),
                up("Video ROI", "4.2x", 18.9),
                up("Image ROI", "3.1x", 8.7),
                up("Carousel ROI", "3.8x", 12.5),
                down("Creative Fatigue Score", "Low", -15.3),
            ],
        ),
        section(
            "b2b-overall-summary",
            "B2B Overall Summary",
            "Key marketing and sales KPIs for B2B performance",
            2,
            B2B,
            vec![
                up("Total Spend", "$125K", 12.5),
                up("MQLs Generated", "1,250", 8.3),
                up("SQLs Generated", "440", 15.2),
                up("Revenue Generated", "$850K", 18.5),
                down("Cost per Lead", "$100", -3.2),
                down("Cost per SQL", "$284", -5.8),
                up("ROI", "6.8x", 12.3),
                up("Deal Win Rate", "32%", 5.7),
            ],
        ),
        section(
            "b2b-platform-performance",
            "B2B Platform Performance",
            "Channel-wise performance across B2B marketing platforms",
            3,
            B2B,
            vec![
                up("LinkedIn ROI", "4.2x", 8.9),
                up("Google Ads ROI", "3.8x", 12.3),
                up("Email ROI", "5.6x", 18.7),
                up("Webinar ROI", "7.2x", 25.3),
                down("LinkedIn CPL", "$85", -5.2),
                down("Google Ads CPL", "$120", -8.7),
                down("Email CPL", "$45", -12.1),
                up("Platform Efficiency", "8.7/10", 5.2),
            ],
        ),
        section(
            "b2b-campaign-funnel",
            "B2B Campaign Funnel",
            "MQL to Closed Won conversion funnel analysis",
            4,
            B2B,
            vec![
                up("MQL to SQL Rate", "35.2%", 5.1),
                up("SQL to Opportunity", "50%", 8.7),
                up("Opportunity to Close", "32%", 3.2),
                up("Overall Conversion", "5.6%", 12.5),
                down("Funnel Velocity", "45 days", -8.3),
                up("Lead Quality Score", "7.2/10", 2.1),
                up("Pipeline Coverage", "3.2x", 15.7),
                up("Funnel Efficiency", "8.4/10", 4.3),
            ],
        ),
        section(
            "b2b-pipeline-contribution",
            "B2B Pipeline Contribution",
            "Pipeline value influenced by marketing campaigns",
            7,
            B2B,
            vec![
                up("Pipeline Value", "$2.4M", 22.1),
                up("Marketing Sourced", "45%", 8.7),
                up("Marketing Influenced", "78%", 12.3),
                up("Avg Deal Size", "$8.7K", 15.7),
                up("Pipeline Velocity", "$45.2K", 18.9),
                up("Win Rate", "32%", 5.2),
                down("Sales Cycle Length", "67 days", -8.7),
                up("Pipeline Health", "8.9/10", 3.1),
            ],
        ),
        section(
            "b2b-lead-quality",
            "B2B Lead Quality",
            "Lead quality score breakdown and distribution",
            8,
            B2B,
            vec![
                up("Avg Lead Score", "7.2/10", 2.1),
                up("Hot Leads (80+)", "156", 15.3),
                up("Warm Leads (60-79)", "289", 8.7),
                up("Cool Leads (40-59)", "445", 12.3),
                down("Cold Leads (<40)", "360", -5.2),
                up("High Quality %", "35.6%", 8.9),
                up("Conversion Rate", "12.4%", 15.7),
                up("Quality Trend", "+2.1", 2.1),
            ],
        ),
        section(
            "b2b-account-engagement",
            "B2B Account Engagement",
            "Account penetration and engagement metrics",
            9,
            B2B,
            vec![
                up("Active Accounts", "1,247", 8.9),
                up("Avg Engagement Score", "7.8/10", 3.2),
                up("Account Penetration", "67%", 12.5),
                up("Multi-touch Accounts", "892", 18.7),
                up("High Engagement %", "45.2%", 15.3),
                down("At Risk Accounts", "23", -12.1),
                up("Avg Touchpoints", "8.7", 5.8),
                up("Engagement Trend", "+3.2", 3.2),
            ],
        ),
        section(
            "b2b-sales-cycle-velocity",
            "B2B Sales Cycle Velocity",
            "Sales cycle analysis and velocity metrics",
            10,
            B2B,
            vec![
                down("Avg Cycle Time", "67 days", -8.7),
                down("MQL to SQL", "12 days", -15.3),
                down("SQL to Opportunity", "23 days", -8.9),
                down("Opportunity to Close", "32 days", -5.2),
                up("Fast Cycles (≤30)", "156", 25.3),
                up("Normal Cycles (31-60)", "289", 8.7),
                down("Slow Cycles (61-90)", "445", -12.1),
                up("Velocity Score", "8.2/10", 4.3),
            ],
        ),
        section(
            "b2b-risk-alerts",
            "B2B Risk & Anomaly Alerts",
            "Risk monitoring and anomaly detection",
            11,
            B2B,
            vec![
                down("Active Alerts", "7", -12.1),
                down("High Risk", "2", -25.3),
                down("Medium Risk", "3", -8.7),
                up("Low Risk", "2", 15.7),
                down("Avg Response Time", "4.2h", -18.9),
                down("Risk Score", "Low", -15.3),
                up("Anomaly Detection", "94%", 8.7),
                down("Risk Trend", "-12.1", -12.1),
            ],
        ),
        section(
            "b2b-content-performance",
            "B2B Content Performance",
            "Content marketing and asset performance",
            12,
            B2B,
            vec![
                up("Content Downloads", "2.4K", 18.7),
                up("Webinar Attendance", "892", 25.3),
                up("Whitepaper Views", "1.8K", 15.7),
                up("Case Study Views", "1.2K", 22.1),
                up("Content ROI", "6.8x", 18.9),
                up("Lead Generation", "445", 25.3),
                up("Engagement Rate", "78%", 12.5),
                up("Content Score", "8.7/10", 3.2),
            ],
        ),
        section(
            "b2b-abm-metrics",
            "B2B Account-Based Marketing",
            "ABM campaign performance and account targeting",
            13,
            B2B,
            vec![
                up("Target Accounts", "156", 8.9),
                up("Account Penetration", "67%", 15.3),
                up("Engagement Score", "8.2/10", 12.5),
                up("ABM ROI", "7.8x", 18.7),
                up("Multi-touch Accounts", "89", 25.3),
                up("Pipeline Influence", "78%", 15.7),
                down("Account Velocity", "45 days", -8.7),
                up("ABM Efficiency", "9.1/10", 4.3),
            ],
        ),
    ]
}

/// Icons and grid layout for the built-in catalog.
pub fn default_presentation_hints() -> PresentationHints {
    [
        ("executive-summary", "target", 4),
        ("revenue-growth-performance", "trending-up", 4),
        ("operational-efficiency", "activity", 4),
        ("customer-acquisition-retention", "user-plus", 4),
        ("sales-conversion-performance", "bar-chart-3", 4),
        ("platform-channel-performance", "globe", 4),
        ("traffic-user-engagement", "eye", 4),
        ("ecommerce-performance", "shopping-bag", 4),
        ("engagement-retention", "activity", 4),
        ("revenue-attribution", "pie-chart", 4),
        ("budget-forecasting", "dollar-sign", 4),
        ("audience-insights", "users", 4),
        ("creative-performance", "image", 4),
        ("b2b-overall-summary", "building", 4),
        ("b2b-platform-performance", "globe", 4),
        ("b2b-campaign-funnel", "bar-chart-3", 4),
        ("b2b-pipeline-contribution", "bar-chart", 4),
        ("b2b-lead-quality", "target", 4),
        ("b2b-account-engagement", "building", 4),
        ("b2b-sales-cycle-velocity", "clock", 4),
        ("b2b-risk-alerts", "alert-triangle", 4),
        ("b2b-content-performance", "file-text", 4),
        ("b2b-abm-metrics", "target", 4),
    ]
    .iter()
    .fold(PresentationHints::new(), |hints, (id, icon, cols)| {
        hints.with(id, SectionPresentation::grid(icon, *cols))
    })
}
