//! Seeded synthetic pipeline used for demos and when no dataset is configured.

use super::domain::{Industry, Prospect, ProspectId, Role, SalesRep, Signal, SignalKind, Stage};
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

const COMPANY_PREFIXES: [&str; 15] = [
    "Quantum", "Stellar", "Apex", "Zenith", "Momentum", "Synergy", "Pinnacle", "Fusion", "Evolve",
    "Innovate", "NextGen", "BlueWave", "Core", "Vertex", "Summit",
];

const COMPANY_SUFFIXES: [&str; 14] = [
    "Solutions",
    "Dynamics",
    "Corp",
    "Labs",
    "Co",
    "Systems",
    "Tech",
    "Works",
    "AI",
    "Inc.",
    "Enterprises",
    "Group",
    "Global",
    "Logic",
];

const CONTACT_NAMES: [&str; 15] = [
    "Alex Johnson",
    "Maria Garcia",
    "Chen Wei",
    "Fatima Al-Fassi",
    "David Smith",
    "Yuki Tanaka",
    "Amara Okoro",
    "Liam O'Connell",
    "Sofia Rossi",
    "Noah Williams",
    "Isabella Chen",
    "James O'Malley",
    "Olivia Kim",
    "Ben Carter",
    "Sophia Rodriguez",
];

const COMPANY_SIZE: &str = "50-200 Employees";

#[derive(Debug, Clone, Copy)]
pub struct GeneratorConfig {
    pub seed: u64,
    pub company_count: usize,
    pub prospect_cap: usize,
    pub now: DateTime<Utc>,
}

impl GeneratorConfig {
    pub fn new(seed: u64, now: DateTime<Utc>) -> Self {
        Self {
            seed,
            company_count: 400,
            prospect_cap: 1000,
            now,
        }
    }

    pub fn with_prospect_cap(mut self, cap: usize) -> Self {
        self.prospect_cap = cap;
        self
    }
}

/// Same seed and clock, same prospects.
pub struct ProspectGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl ProspectGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(config.seed),
            config,
        }
    }

    pub fn generate(mut self) -> Vec<Prospect> {
        let mut prospects = Vec::with_capacity(self.config.prospect_cap);
        let mut next_id: u32 = 1;

        'companies: for company_index in 0..self.config.company_count {
            let company = format!(
                "{} {}",
                COMPANY_PREFIXES[company_index % COMPANY_PREFIXES.len()],
                COMPANY_SUFFIXES[company_index % COMPANY_SUFFIXES.len()]
            );
            let contacts = self.rng.gen_range(1..=4);

            for contact_index in 0..contacts {
                if prospects.len() >= self.config.prospect_cap {
                    break 'companies;
                }
                prospects.push(self.contact(ProspectId(next_id), contact_index, &company));
                next_id += 1;
            }
        }

        debug!(
            seed = self.config.seed,
            prospects = prospects.len(),
            "generated synthetic prospects"
        );
        prospects
    }

    fn contact(&mut self, id: ProspectId, contact_index: usize, company: &str) -> Prospect {
        let now = self.config.now;
        let ordinal = id.0 as usize - 1;
        let name = CONTACT_NAMES[(ordinal + contact_index) % CONTACT_NAMES.len()];
        let roles = Role::ordered();
        let industries = Industry::ordered();
        let reps = SalesRep::ordered();

        let days_since_last_activity = self.rng.gen_range(0..30u32);
        let sourced_days_ago = self.rng.gen_range(0..365i64);

        let fit_score = (self.bell_curve() * 101.0).floor().min(100.0) as u8;
        let engagement_score = (self.bell_curve() * 101.0).floor().min(100.0) as u8;
        let intent_score = self.intent_for(fit_score, engagement_score);

        let company_slug: String = company
            .to_ascii_lowercase()
            .chars()
            .filter(|ch| ch.is_ascii_alphanumeric())
            .collect();
        let local_part: String = name
            .to_ascii_lowercase()
            .replace(' ', ".")
            .chars()
            .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '.' || *ch == '-')
            .collect();
        let handle: String = name
            .to_ascii_lowercase()
            .chars()
            .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '-')
            .collect();

        let phone = format!(
            "+1-555-{}-{}",
            self.rng.gen_range(100..1000),
            self.rng.gen_range(1000..10000)
        );
        let deal_size = self.rng.gen_range(50_000..500_000u32);
        let days_in_pipeline = self.rng.gen_range(0..90u32);
        let stage = self.stage();
        let calls_made = self.rng.gen_range(0..20u32);
        let last_call_duration = self.rng.gen_range(5..50u32);
        let call_quality_score = self.rng.gen_range(50..100u8);
        let signals = self.signals();

        Prospect {
            id,
            name: name.to_string(),
            role: roles[(ordinal + contact_index) % roles.len()],
            email: format!("{local_part}@{company_slug}.com"),
            phone,
            linkedin_url: format!("https://linkedin.com/in/{handle}"),
            company: company.to_string(),
            company_size: COMPANY_SIZE.to_string(),
            industry: industries[ordinal % industries.len()],
            fit_score,
            engagement_score,
            intent_score,
            deal_size,
            days_in_pipeline,
            stage,
            last_activity: now - Duration::days(days_since_last_activity as i64),
            days_since_last_activity,
            sourced_date: now - Duration::days(sourced_days_ago),
            calls_made,
            last_call_duration,
            call_quality_score,
            sales_rep: reps[ordinal % reps.len()],
            signals,
        }
    }

    /// Mean of four uniform draws, clustering around 0.5.
    fn bell_curve(&mut self) -> f64 {
        (0..4).map(|_| self.rng.gen::<f64>()).sum::<f64>() / 4.0
    }

    /// Intent follows fit and engagement with noise; a few records get an unrelated draw.
    fn intent_for(&mut self, fit_score: u8, engagement_score: u8) -> u8 {
        let base = (fit_score as f64 + engagement_score as f64) / 2.0;
        let noise = self.rng.gen::<f64>() * 70.0 - 35.0;
        let mut intent = (base + noise).clamp(0.0, 100.0);
        if self.rng.gen::<f64>() < 0.08 {
            intent = self.rng.gen_range(0..=100u8) as f64;
        }
        intent.round() as u8
    }

    fn stage(&mut self) -> Stage {
        let roll = self.rng.gen::<f64>();
        if roll < 0.40 {
            Stage::Lead
        } else if roll < 0.65 {
            Stage::Mql
        } else if roll < 0.80 {
            Stage::Sal
        } else if roll < 0.90 {
            Stage::Sql
        } else if roll < 0.97 {
            Stage::Opportunity
        } else {
            Stage::Negotiation
        }
    }

    fn signals(&mut self) -> Vec<Signal> {
        let kinds = SignalKind::ordered();
        let count = self.rng.gen_range(3..=7);
        let mut signals: Vec<Signal> = (0..count)
            .map(|index| {
                let days_ago = self.rng.gen_range(0..30i64);
                Signal::new(
                    kinds[index % kinds.len()],
                    self.config.now - Duration::days(days_ago),
                )
            })
            .collect();
        signals.sort_by(|a, b| b.date.cmp(&a.date));
        signals
    }
}

pub fn generate_prospects(config: GeneratorConfig) -> Vec<Prospect> {
    ProspectGenerator::new(config).generate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prospects::testing::reference_now;

    #[test]
    fn respects_the_prospect_cap_and_assigns_sequential_ids() {
        let prospects = generate_prospects(GeneratorConfig::new(7, reference_now()));
        assert!(prospects.len() <= 1000);
        assert!(prospects.len() >= 400, "every company has a contact");
        for (index, prospect) in prospects.iter().enumerate() {
            assert_eq!(prospect.id, ProspectId(index as u32 + 1));
        }

        let capped =
            generate_prospects(GeneratorConfig::new(7, reference_now()).with_prospect_cap(25));
        assert_eq!(capped.len(), 25);
        assert_eq!(capped[..], prospects[..25]);
    }

    #[test]
    fn same_seed_reproduces_the_dataset() {
        let config = GeneratorConfig::new(42, reference_now()).with_prospect_cap(50);
        assert_eq!(generate_prospects(config), generate_prospects(config));

        let other = GeneratorConfig::new(43, reference_now()).with_prospect_cap(50);
        assert_ne!(generate_prospects(config), generate_prospects(other));
    }

    #[test]
    fn generated_fields_stay_in_range() {
        let now = reference_now();
        let prospects = generate_prospects(GeneratorConfig::new(3, now).with_prospect_cap(300));

        for prospect in &prospects {
            assert!(prospect.fit_score <= 100);
            assert!(prospect.engagement_score <= 100);
            assert!(prospect.intent_score <= 100);
            assert!((50..100).contains(&prospect.call_quality_score));
            assert!((50_000..500_000).contains(&prospect.deal_size));
            assert!(prospect.days_since_last_activity < 30);
            assert_eq!(
                (now - prospect.last_activity).num_days(),
                prospect.days_since_last_activity as i64
            );
            assert!((3..=7).contains(&prospect.signals.len()));
            assert!(prospect
                .signals
                .windows(2)
                .all(|pair| pair[0].date >= pair[1].date));
            assert!(prospect.email.ends_with(".com"));
        }
    }
}
