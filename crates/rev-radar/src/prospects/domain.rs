use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequential identifier assigned when a prospect is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProspectId(pub u32);

impl fmt::Display for ProspectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position in the sales funnel. Declaration order is funnel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Lead,
    Mql,
    Sal,
    Sql,
    Opportunity,
    Negotiation,
}

impl Stage {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Lead,
            Self::Mql,
            Self::Sal,
            Self::Sql,
            Self::Opportunity,
            Self::Negotiation,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Lead => "Lead",
            Self::Mql => "MQL",
            Self::Sal => "SAL",
            Self::Sql => "SQL",
            Self::Opportunity => "Opportunity",
            Self::Negotiation => "Negotiation",
        }
    }

    /// Opportunity and Negotiation share the summary's "opp" bucket.
    pub const fn is_opportunity(self) -> bool {
        matches!(self, Self::Opportunity | Self::Negotiation)
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|stage| stage.label().eq_ignore_ascii_case(value.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Ceo,
    Cto,
    Coo,
    VpSales,
    DirectorMarketing,
    Cfo,
    VpEngineering,
    Cmo,
}

impl Role {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Ceo,
            Self::Cto,
            Self::Coo,
            Self::VpSales,
            Self::DirectorMarketing,
            Self::Cfo,
            Self::VpEngineering,
            Self::Cmo,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Ceo => "CEO",
            Self::Cto => "CTO",
            Self::Coo => "COO",
            Self::VpSales => "VP Sales",
            Self::DirectorMarketing => "Director Marketing",
            Self::Cfo => "CFO",
            Self::VpEngineering => "VP Engineering",
            Self::Cmo => "CMO",
        }
    }

    /// VP-level and CEO roles count as senior buyers.
    pub const fn is_senior(self) -> bool {
        matches!(self, Self::Ceo | Self::VpSales | Self::VpEngineering)
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|role| role.label().eq_ignore_ascii_case(value.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Technology,
    Healthcare,
    Finance,
    Manufacturing,
    Retail,
    Energy,
    Telecom,
}

impl Industry {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Technology,
            Self::Healthcare,
            Self::Finance,
            Self::Manufacturing,
            Self::Retail,
            Self::Energy,
            Self::Telecom,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Healthcare => "Healthcare",
            Self::Finance => "Finance",
            Self::Manufacturing => "Manufacturing",
            Self::Retail => "Retail",
            Self::Energy => "Energy",
            Self::Telecom => "Telecom",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|industry| industry.label().eq_ignore_ascii_case(value.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalesRep {
    Alice,
    Bob,
    Charlie,
    Diana,
    Eve,
}

impl SalesRep {
    pub const fn ordered() -> [Self; 5] {
        [Self::Alice, Self::Bob, Self::Charlie, Self::Diana, Self::Eve]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Alice => "Alice",
            Self::Bob => "Bob",
            Self::Charlie => "Charlie",
            Self::Diana => "Diana",
            Self::Eve => "Eve",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|rep| rep.label().eq_ignore_ascii_case(value.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    PageView,
    FormFill,
    Email,
    Call,
    Meeting,
}

impl SignalKind {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::PageView,
            Self::FormFill,
            Self::Email,
            Self::Call,
            Self::Meeting,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PageView => "Page View",
            Self::FormFill => "Form Fill",
            Self::Email => "Email",
            Self::Call => "Call",
            Self::Meeting => "Meeting",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::PageView => "Viewed Pricing Page",
            Self::FormFill => "Downloaded \"Future of AI\" Whitepaper",
            Self::Email => "Opened \"Introductory Offer\" Email",
            Self::Call => "Logged a 15-minute discovery call",
            Self::Meeting => "Booked a demo for next week",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::PageView => "eye",
            Self::FormFill => "download",
            Self::Email => "mail",
            Self::Call => "phone-call",
            Self::Meeting => "calendar",
        }
    }
}

/// Buyer activity attached to a prospect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub kind: SignalKind,
    pub description: String,
    pub icon: String,
    pub date: DateTime<Utc>,
}

impl Signal {
    pub fn new(kind: SignalKind, date: DateTime<Utc>) -> Self {
        Self {
            kind,
            description: kind.description().to_string(),
            icon: kind.icon().to_string(),
            date,
        }
    }
}

/// A single contact in the pipeline.
///
/// Records are created once and then only read. `days_since_last_activity` is a snapshot
/// taken at creation time and is not kept in sync with `last_activity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prospect {
    pub id: ProspectId,
    pub name: String,
    pub role: Role,
    pub email: String,
    pub phone: String,
    pub linkedin_url: String,
    pub company: String,
    pub company_size: String,
    pub industry: Industry,
    pub fit_score: u8,
    pub engagement_score: u8,
    pub intent_score: u8,
    pub deal_size: u32,
    pub days_in_pipeline: u32,
    pub stage: Stage,
    pub last_activity: DateTime<Utc>,
    pub days_since_last_activity: u32,
    pub sourced_date: DateTime<Utc>,
    pub calls_made: u32,
    pub last_call_duration: u32,
    pub call_quality_score: u8,
    pub sales_rep: SalesRep,
    #[serde(default)]
    pub signals: Vec<Signal>,
}

/// Strength of a prospect's near-term purchase signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentLevel {
    High,
    Medium,
    Low,
}

impl IntentLevel {
    pub const fn ordered() -> [Self; 3] {
        [Self::High, Self::Medium, Self::Low]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::High => "#10b981",
            Self::Medium => "#f59e0b",
            Self::Low => "#ef4444",
        }
    }

    pub const fn range_label(self) -> &'static str {
        match self {
            Self::High => "High (70-100)",
            Self::Medium => "Medium (30-69)",
            Self::Low => "Low (0-29)",
        }
    }
}

/// Fit x engagement strategy bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    HotLeads,
    Nurture,
    Educate,
    Qualify,
}

impl Quadrant {
    pub const fn ordered() -> [Self; 4] {
        [Self::HotLeads, Self::Nurture, Self::Educate, Self::Qualify]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::HotLeads => "Hot Leads",
            Self::Nurture => "Nurture",
            Self::Educate => "Educate",
            Self::Qualify => "Qualify",
        }
    }

    pub const fn recommendations(self) -> [&'static str; 3] {
        match self {
            Self::HotLeads => [
                "Prioritize immediate outreach",
                "Personalize with high-intent signals",
                "Engage via multiple channels",
            ],
            Self::Nurture => [
                "Enroll in targeted email campaigns",
                "Provide valuable content",
                "Monitor engagement spikes",
            ],
            Self::Educate => [
                "Share case studies & whitepapers",
                "Invite to webinars",
                "Build brand awareness",
            ],
            Self::Qualify => [
                "Use automated sequences",
                "Gather more firmographic data",
                "Disqualify if no response",
            ],
        }
    }
}

/// All records sharing `company`, in collection order.
pub fn contacts_at_company<'a>(records: &'a [Prospect], company: &str) -> Vec<&'a Prospect> {
    records
        .iter()
        .filter(|prospect| prospect.company == company)
        .collect()
}

pub fn find_prospect(records: &[Prospect], id: ProspectId) -> Option<&Prospect> {
    records.iter().find(|prospect| prospect.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_order_follows_funnel() {
        let stages = Stage::ordered();
        assert!(stages.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(Stage::Opportunity.is_opportunity());
        assert!(Stage::Negotiation.is_opportunity());
        assert!(!Stage::Sql.is_opportunity());
    }

    #[test]
    fn labels_parse_case_insensitively() {
        assert_eq!(Stage::from_label("mql"), Some(Stage::Mql));
        assert_eq!(Role::from_label(" vp sales "), Some(Role::VpSales));
        assert_eq!(Industry::from_label("TELECOM"), Some(Industry::Telecom));
        assert_eq!(SalesRep::from_label("diana"), Some(SalesRep::Diana));
        assert_eq!(Role::from_label("Intern"), None);
    }

    #[test]
    fn seniority_covers_vp_and_ceo_roles() {
        let senior: Vec<Role> = Role::ordered()
            .into_iter()
            .filter(|role| role.is_senior())
            .collect();
        assert_eq!(senior, vec![Role::Ceo, Role::VpSales, Role::VpEngineering]);
    }
}
