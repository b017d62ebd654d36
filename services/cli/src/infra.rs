use chrono::{DateTime, Utc};
use rev_radar::config::DatasetConfig;
use rev_radar::error::AppError;
use rev_radar::prospects::{generate_prospects, load_dataset, GeneratorConfig, Prospect};
use tracing::info;

/// Reads the configured dataset file, or generates the seeded synthetic pipeline.
pub(crate) fn load_prospects(
    dataset: &DatasetConfig,
    now: DateTime<Utc>,
) -> Result<Vec<Prospect>, AppError> {
    match &dataset.path {
        Some(path) => Ok(load_dataset(path, now)?),
        None => {
            let config =
                GeneratorConfig::new(dataset.seed, now).with_prospect_cap(dataset.prospect_cap);
            let prospects = generate_prospects(config);
            info!(
                seed = dataset.seed,
                prospects = prospects.len(),
                "using synthetic prospects"
            );
            Ok(prospects)
        }
    }
}

/// Whole dollars with thousands separators, e.g. `$1,250,000`.
pub(crate) fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}")
}

pub(crate) fn percent_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value * width + max / 2) / max
    };
    let filled = filled.min(width);
    format!("{}{}", "#".repeat(filled), ".".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_currency_with_separators() {
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(999), "$999");
        assert_eq!(format_currency(1_000), "$1,000");
        assert_eq!(format_currency(125_000), "$125,000");
        assert_eq!(format_currency(12_345_678), "$12,345,678");
    }

    #[test]
    fn bars_scale_to_the_largest_value() {
        assert_eq!(percent_bar(10, 10, 4), "####");
        assert_eq!(percent_bar(5, 10, 4), "##..");
        assert_eq!(percent_bar(0, 10, 4), "....");
        assert_eq!(percent_bar(3, 0, 4), "....");
    }

    #[test]
    fn falls_back_to_synthetic_data_without_a_path() {
        let now = Utc
            .with_ymd_and_hms(2025, 10, 1, 0, 0, 0)
            .single()
            .expect("valid timestamp");
        let dataset = DatasetConfig {
            prospect_cap: 40,
            ..DatasetConfig::default()
        };

        let prospects = load_prospects(&dataset, now).expect("synthetic data loads");
        assert_eq!(prospects.len(), 40);
    }

    #[test]
    fn missing_dataset_file_is_an_import_error() {
        let now = Utc::now();
        let dataset = DatasetConfig::default()
            .with_path("does/not/exist.csv")
            .expect("csv path accepted");

        let err = load_prospects(&dataset, now).expect_err("missing file");
        assert!(matches!(err, AppError::Import(_)));
    }
}
