//! Header-strip summaries for the typed B2B datasets.
//!
//! Empty inputs produce zeroed summaries rather than NaN averages.

use serde::Serialize;

use crate::constants::PERCENTAGE_PRECISION;
use crate::records::{
    Account, AccountStatus, AlertStatus, FunnelStage, LeadQualityBucket, RiskAlert,
};
use crate::utils::decimal_utils::round_half_away;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountEngagementSummary {
    pub account_count: usize,
    /// Mean engagement score (0-10)
    pub avg_engagement: f64,
    pub total_revenue: f64,
    pub active_accounts: usize,
    pub at_risk_accounts: usize,
}

pub fn summarize_accounts(accounts: &[Account]) -> AccountEngagementSummary {
    let mut summary = AccountEngagementSummary {
        account_count: accounts.len(),
        ..Default::default()
    };

    let mut engagement_total = 0.0;
    for account in accounts {
        engagement_total += account.engagement_score;
        summary.total_revenue += account.revenue;
        match account.status {
            AccountStatus::Active => summary.active_accounts += 1,
            AccountStatus::AtRisk => summary.at_risk_accounts += 1,
        }
    }
    summary.avg_engagement = mean(engagement_total, accounts.len());
    summary
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAlertSummary {
    pub alert_count: usize,
    pub active_alerts: usize,
    pub resolved_alerts: usize,
    pub total_impact: f64,
    /// Mean response time in hours
    pub avg_response_time: f64,
}

pub fn summarize_alerts(alerts: &[RiskAlert]) -> RiskAlertSummary {
    let mut summary = RiskAlertSummary {
        alert_count: alerts.len(),
        ..Default::default()
    };

    let mut response_total = 0.0;
    for alert in alerts {
        summary.total_impact += alert.impact;
        response_total += alert.response_time;
        match alert.status {
            AlertStatus::Active => summary.active_alerts += 1,
            AlertStatus::Resolved => summary.resolved_alerts += 1,
        }
    }
    summary.avg_response_time = mean(response_total, alerts.len());
    summary
}

/// Volume share of one lead-score band.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadQualityShare {
    pub score_range: String,
    pub volume: f64,
    /// Share of total volume (0-100, one decimal)
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadQualitySummary {
    pub total_volume: f64,
    pub shares: Vec<LeadQualityShare>,
}

pub fn summarize_lead_quality(buckets: &[LeadQualityBucket]) -> LeadQualitySummary {
    let total_volume: f64 = buckets.iter().map(|b| b.volume).sum();
    let shares = buckets
        .iter()
        .map(|bucket| LeadQualityShare {
            score_range: bucket.score_range.clone(),
            volume: bucket.volume,
            percentage: rate(bucket.volume, total_volume),
        })
        .collect();

    LeadQualitySummary {
        total_volume,
        shares,
    }
}

/// Conversion from one funnel stage to the next.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageConversion {
    pub from: String,
    pub to: String,
    /// `to / from * 100`, one decimal
    pub rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelConversion {
    pub stages: Vec<StageConversion>,
    /// Last stage over first stage, 0 with fewer than two stages
    pub overall_rate: f64,
}

pub fn funnel_conversion(stages: &[FunnelStage]) -> FunnelConversion {
    let conversions = stages
        .windows(2)
        .map(|pair| StageConversion {
            from: pair[0].name.clone(),
            to: pair[1].name.clone(),
            rate: rate(pair[1].count, pair[0].count),
        })
        .collect();

    let overall_rate = match (stages.first(), stages.last()) {
        (Some(first), Some(last)) if stages.len() > 1 => rate(last.count, first.count),
        _ => 0.0,
    };

    FunnelConversion {
        stages: conversions,
        overall_rate,
    }
}

fn mean(total: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

/// `part / whole * 100` at percentage precision, 0 when `whole` is 0.
fn rate(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    round_half_away(part / whole * 100.0, PERCENTAGE_PRECISION)
}
