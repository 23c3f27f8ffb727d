//! Tests for record models and typed datasets.

#[cfg(test)]
mod tests {
    use crate::records::{
        Account, AccountStatus, AlertSeverity, FieldRef, FieldValue, Record, RiskAlert, Row,
    };
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn test_row_builder_and_lookup() {
        let row = Row::new().with("region", "Europe").with("roi", 22.0);
        assert_eq!(row.len(), 2);
        assert_eq!(row.field("region"), Some(FieldRef::Text("Europe")));
        assert_eq!(row.field("roi"), Some(FieldRef::Number(22.0)));
        assert_eq!(row.field("spend"), None);
        assert!(!row.has_field("spend"));
    }

    #[test]
    fn test_row_deserializes_from_json_object() {
        let row: Row = serde_json::from_value(json!({
            "region": "Asia Pacific",
            "roi": 18,
            "spend": "60000"
        }))
        .unwrap();

        assert_eq!(row.get("region"), Some(&FieldValue::Text("Asia Pacific".to_string())));
        assert_eq!(row.field("roi").and_then(|f| f.numeric()), Some(18.0));
        // Numeric text coerces
        assert_eq!(row.field("spend").and_then(|f| f.numeric()), Some(60_000.0));
    }

    #[test]
    fn test_row_serializes_as_flat_object() {
        let row: Row = [("a", 1.0)].into_iter().collect();
        assert_eq!(serde_json::to_value(&row).unwrap(), json!({ "a": 1.0 }));
    }

    #[test]
    fn test_numeric_coercion_rejects_non_finite_and_text() {
        assert_eq!(FieldRef::Number(f64::NAN).numeric(), None);
        assert_eq!(FieldRef::Text("n/a").numeric(), None);
        assert_eq!(FieldRef::Text(" 4.5 ").numeric(), Some(4.5));
    }

    #[test]
    fn test_date_text_form_is_iso() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(FieldRef::Date(date).text_form(), "2024-03-07");
        assert_eq!(FieldRef::Date(date).numeric(), None);
    }

    #[test]
    fn test_account_deserializes_and_exposes_camel_case_fields() {
        let account: Account = serde_json::from_value(json!({
            "accountName": "Acme Corp",
            "industry": "Manufacturing",
            "companySize": "Enterprise",
            "contactPerson": "J. Doe",
            "engagementScore": 8.5,
            "revenue": 125000,
            "revenueTrend": 12.5,
            "touchpoints": 14,
            "lastActivity": "2024-03-07",
            "status": "At Risk"
        }))
        .unwrap();

        assert_eq!(account.status, AccountStatus::AtRisk);
        assert_eq!(account.field("status"), Some(FieldRef::Text("At Risk")));
        assert_eq!(account.field("touchpoints"), Some(FieldRef::Number(14.0)));
        assert_eq!(
            account.field("lastActivity").map(|f| f.text_form().into_owned()),
            Some("2024-03-07".to_string())
        );
        assert_eq!(account.field("unknown"), None);
    }

    #[test]
    fn test_risk_alert_severity_is_lowercase() {
        let alert: RiskAlert = serde_json::from_value(json!({
            "title": "Pipeline drop",
            "description": "Pipeline fell 20% week over week",
            "severity": "high",
            "status": "active",
            "impact": 45000,
            "responseTime": 4.2,
            "detectedAt": "2 hours ago",
            "trend": -12.1
        }))
        .unwrap();

        assert_eq!(alert.severity, AlertSeverity::High);
        assert!(alert.recommendations.is_empty());
        assert_eq!(alert.field("severity"), Some(FieldRef::Text("high")));
    }
}
