use super::domain::{
    contacts_at_company, find_prospect, IntentLevel, Prospect, ProspectId, Quadrant,
};
use super::importance::{feature_importance, FeatureContribution, Metric};
use super::scoring::{intent_color, intent_level, quadrant, DetailMetrics, GaugeBand};
use serde::Serialize;

/// Everything the detail drawer shows for one selected prospect.
#[derive(Debug, Clone, Serialize)]
pub struct ProspectDetail {
    pub prospect: Prospect,
    pub contacts: Vec<ContactSummary>,
    pub metrics: DetailMetrics,
    pub bands: GaugeBands,
    pub intent: IntentLevel,
    pub intent_color: &'static str,
    pub quadrant: Quadrant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSummary {
    pub id: ProspectId,
    pub name: String,
    pub role: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GaugeBands {
    pub potential: GaugeBand,
    pub sales_effectiveness: GaugeBand,
    pub close_probability: GaugeBand,
}

impl ProspectDetail {
    pub fn build(records: &[Prospect], id: ProspectId) -> Option<Self> {
        let selected = find_prospect(records, id)?;
        let contacts = contacts_at_company(records, &selected.company)
            .into_iter()
            .map(|contact| ContactSummary {
                id: contact.id,
                name: contact.name.clone(),
                role: contact.role.label(),
            })
            .collect();
        let metrics = DetailMetrics::for_prospect(selected);

        Some(Self {
            prospect: selected.clone(),
            contacts,
            metrics,
            bands: GaugeBands {
                potential: GaugeBand::for_value(metrics.potential),
                sales_effectiveness: GaugeBand::for_value(metrics.sales_effectiveness),
                close_probability: GaugeBand::for_value(metrics.close_probability),
            },
            intent: intent_level(selected.intent_score),
            intent_color: intent_color(selected.intent_score),
            quadrant: quadrant(selected),
        })
    }

    pub fn drivers(&self, metric: Metric) -> Vec<FeatureContribution> {
        feature_importance(metric, &self.prospect)
    }
}
