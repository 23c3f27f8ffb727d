//! Typed dataset rows supplied by the surrounding UI layer.
//!
//! Field keys exposed through [`Record`] match the camelCase JSON names, so a
//! query written against a typed dataset works unchanged against the same
//! data loaded as generic [`Row`](super::Row)s.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{FieldRef, Record};

// =============================================================================
// Accounts
// =============================================================================

/// Engagement status of a B2B account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountStatus {
    #[serde(rename = "Active")]
    Active,
    #[serde(rename = "At Risk")]
    AtRisk,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "Active",
            AccountStatus::AtRisk => "At Risk",
        }
    }
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of the account engagement table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub account_name: String,
    pub industry: String,
    pub company_size: String,
    pub contact_person: String,
    /// Engagement score on a 0-10 scale
    pub engagement_score: f64,
    pub revenue: f64,
    /// Revenue change versus the previous period, in percent
    pub revenue_trend: f64,
    pub touchpoints: u32,
    pub last_activity: NaiveDate,
    pub status: AccountStatus,
}

impl Record for Account {
    fn field(&self, key: &str) -> Option<FieldRef<'_>> {
        match key {
            "accountName" => Some(FieldRef::Text(&self.account_name)),
            "industry" => Some(FieldRef::Text(&self.industry)),
            "companySize" => Some(FieldRef::Text(&self.company_size)),
            "contactPerson" => Some(FieldRef::Text(&self.contact_person)),
            "engagementScore" => Some(FieldRef::Number(self.engagement_score)),
            "revenue" => Some(FieldRef::Number(self.revenue)),
            "revenueTrend" => Some(FieldRef::Number(self.revenue_trend)),
            "touchpoints" => Some(FieldRef::Number(f64::from(self.touchpoints))),
            "lastActivity" => Some(FieldRef::Date(self.last_activity)),
            "status" => Some(FieldRef::Text(self.status.as_str())),
            _ => None,
        }
    }
}

// =============================================================================
// Risk alerts
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
}

impl AlertSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Low => "low",
            AlertSeverity::Medium => "medium",
            AlertSeverity::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Active,
    Resolved,
}

impl AlertStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertStatus::Active => "active",
            AlertStatus::Resolved => "resolved",
        }
    }
}

/// A risk or anomaly alert raised against the B2B pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAlert {
    pub title: String,
    pub description: String,
    pub severity: AlertSeverity,
    pub status: AlertStatus,
    /// Estimated revenue impact
    pub impact: f64,
    /// Hours until the alert was acknowledged
    pub response_time: f64,
    pub detected_at: String,
    pub trend: f64,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl Record for RiskAlert {
    fn field(&self, key: &str) -> Option<FieldRef<'_>> {
        match key {
            "title" => Some(FieldRef::Text(&self.title)),
            "description" => Some(FieldRef::Text(&self.description)),
            "severity" => Some(FieldRef::Text(self.severity.as_str())),
            "status" => Some(FieldRef::Text(self.status.as_str())),
            "impact" => Some(FieldRef::Number(self.impact)),
            "responseTime" => Some(FieldRef::Number(self.response_time)),
            "detectedAt" => Some(FieldRef::Text(&self.detected_at)),
            "trend" => Some(FieldRef::Number(self.trend)),
            _ => None,
        }
    }
}

// =============================================================================
// Lead quality
// =============================================================================

/// Lead volume for one score band (e.g. "80-100").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadQualityBucket {
    pub score_range: String,
    pub volume: f64,
    pub conversion_rate: f64,
    pub avg_score: f64,
    pub trend: f64,
}

impl Record for LeadQualityBucket {
    fn field(&self, key: &str) -> Option<FieldRef<'_>> {
        match key {
            "scoreRange" => Some(FieldRef::Text(&self.score_range)),
            "volume" => Some(FieldRef::Number(self.volume)),
            "conversionRate" => Some(FieldRef::Number(self.conversion_rate)),
            "avgScore" => Some(FieldRef::Number(self.avg_score)),
            "trend" => Some(FieldRef::Number(self.trend)),
            _ => None,
        }
    }
}

// =============================================================================
// Regions
// =============================================================================

/// Regional performance row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionPerformance {
    pub region: String,
    pub impressions: f64,
    pub clicks: f64,
    pub conversions: f64,
    /// Share of total traffic as a 0..1 ratio
    pub distribution: f64,
    pub change: f64,
    pub roi: f64,
    pub spend: f64,
    pub customers: f64,
}

impl Record for RegionPerformance {
    fn field(&self, key: &str) -> Option<FieldRef<'_>> {
        match key {
            "region" => Some(FieldRef::Text(&self.region)),
            "impressions" => Some(FieldRef::Number(self.impressions)),
            "clicks" => Some(FieldRef::Number(self.clicks)),
            "conversions" => Some(FieldRef::Number(self.conversions)),
            "distribution" => Some(FieldRef::Number(self.distribution)),
            "change" => Some(FieldRef::Number(self.change)),
            "roi" => Some(FieldRef::Number(self.roi)),
            "spend" => Some(FieldRef::Number(self.spend)),
            "customers" => Some(FieldRef::Number(self.customers)),
            _ => None,
        }
    }
}

// =============================================================================
// Funnel
// =============================================================================

/// One stage of a conversion funnel (MQL, SQL, Opportunity, Closed Won...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelStage {
    pub name: String,
    pub count: f64,
}

impl FunnelStage {
    pub fn new(name: &str, count: f64) -> Self {
        Self {
            name: name.to_string(),
            count,
        }
    }
}

impl Record for FunnelStage {
    fn field(&self, key: &str) -> Option<FieldRef<'_>> {
        match key {
            "name" => Some(FieldRef::Text(&self.name)),
            "count" => Some(FieldRef::Number(self.count)),
            _ => None,
        }
    }
}
