use super::super::domain::{IntentLevel, Prospect};
use super::super::scoring::intent_level;
use super::views::{HeatmapCell, HeatmapRow, IntentFitHeatmap};

/// Fit score columns; each lower bound is inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitBand {
    Low,
    Moderate,
    Strong,
    Ideal,
}

impl FitBand {
    pub const fn ordered() -> [Self; 4] {
        [Self::Low, Self::Moderate, Self::Strong, Self::Ideal]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "0-25%",
            Self::Moderate => "25-50%",
            Self::Strong => "50-75%",
            Self::Ideal => "75-100%",
        }
    }

    pub const fn column(self) -> usize {
        self as usize
    }

    /// Scores above 100 fall outside every band.
    pub fn for_score(score: u8) -> Option<Self> {
        match score {
            0..=24 => Some(Self::Low),
            25..=49 => Some(Self::Moderate),
            50..=74 => Some(Self::Strong),
            75..=100 => Some(Self::Ideal),
            _ => None,
        }
    }
}

/// 3 x 4 grid of intent rows (High first) by fit columns, with count and deal totals.
pub fn intent_fit_heatmap(records: &[Prospect]) -> IntentFitHeatmap {
    let mut rows: Vec<HeatmapRow> = IntentLevel::ordered()
        .into_iter()
        .map(|intent| HeatmapRow {
            intent,
            intent_label: intent.range_label(),
            cells: FitBand::ordered()
                .into_iter()
                .map(|band| HeatmapCell {
                    fit_band: band.label(),
                    count: 0,
                    total_deal_size: 0,
                })
                .collect(),
        })
        .collect();

    for prospect in records {
        if prospect.intent_score > 100 {
            continue;
        }
        let Some(band) = FitBand::for_score(prospect.fit_score) else {
            continue;
        };
        let level = intent_level(prospect.intent_score);
        if let Some(cell) = rows
            .iter_mut()
            .find(|row| row.intent == level)
            .and_then(|row| row.cells.get_mut(band.column()))
        {
            cell.count += 1;
            cell.total_deal_size += prospect.deal_size as u64;
        }
    }

    IntentFitHeatmap { rows }
}
