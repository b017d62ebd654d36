use super::domain::{Industry, Prospect, ProspectId, Role, SalesRep, Signal, SignalKind, Stage};
use chrono::{DateTime, Duration, TimeZone, Utc};

pub(crate) fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 1, 15, 30, 0)
        .single()
        .expect("valid reference timestamp")
}

pub(crate) fn prospect(id: u32) -> Prospect {
    let now = reference_now();
    Prospect {
        id: ProspectId(id),
        name: "Alex Johnson".to_string(),
        role: Role::Cto,
        email: "alex.johnson@quantumsolutions.com".to_string(),
        phone: "+1-555-201-4410".to_string(),
        linkedin_url: "https://linkedin.com/in/alexjohnson".to_string(),
        company: "Quantum Solutions".to_string(),
        company_size: "50-200 Employees".to_string(),
        industry: Industry::Healthcare,
        fit_score: 50,
        engagement_score: 50,
        intent_score: 50,
        deal_size: 120_000,
        days_in_pipeline: 30,
        stage: Stage::Lead,
        last_activity: now - Duration::days(4),
        days_since_last_activity: 4,
        sourced_date: now - Duration::days(20),
        calls_made: 6,
        last_call_duration: 20,
        call_quality_score: 70,
        sales_rep: SalesRep::Alice,
        signals: vec![
            Signal::new(SignalKind::Meeting, now - Duration::days(1)),
            Signal::new(SignalKind::PageView, now - Duration::days(3)),
            Signal::new(SignalKind::Email, now - Duration::days(9)),
        ],
    }
}
