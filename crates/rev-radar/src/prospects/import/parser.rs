use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};
use std::io::Read;

/// One CSV line, still in raw form. Header names are snake_case field names.
#[derive(Debug, Deserialize)]
pub(crate) struct ProspectRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) id: Option<String>,
    pub(crate) name: String,
    pub(crate) role: String,
    #[serde(default)]
    pub(crate) email: String,
    #[serde(default)]
    pub(crate) phone: String,
    #[serde(default)]
    pub(crate) linkedin_url: String,
    pub(crate) company: String,
    #[serde(default)]
    pub(crate) company_size: String,
    pub(crate) industry: String,
    pub(crate) fit_score: u32,
    pub(crate) engagement_score: u32,
    pub(crate) intent_score: u32,
    pub(crate) deal_size: u32,
    pub(crate) days_in_pipeline: u32,
    pub(crate) stage: String,
    pub(crate) last_activity: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) days_since_last_activity: Option<String>,
    pub(crate) sourced_date: String,
    pub(crate) calls_made: u32,
    pub(crate) last_call_duration: u32,
    pub(crate) call_quality_score: u32,
    pub(crate) sales_rep: String,
}

/// Rows paired with their 1-based data line number.
pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<(usize, ProspectRow)>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();

    for (index, record) in csv_reader.deserialize::<ProspectRow>().enumerate() {
        rows.push((index + 1, record?));
    }

    Ok(rows)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// RFC 3339 timestamps, or bare dates taken as midnight UTC.
pub(crate) fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamps_accept_rfc3339_and_plain_dates() {
        let expected = Utc
            .with_ymd_and_hms(2025, 9, 24, 10, 0, 0)
            .single()
            .expect("valid");
        assert_eq!(parse_timestamp("2025-09-24T10:00:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2025-09-24T12:00:00+02:00"), Some(expected));

        let midnight = Utc
            .with_ymd_and_hms(2025, 9, 24, 0, 0, 0)
            .single()
            .expect("valid");
        assert_eq!(parse_timestamp(" 2025-09-24 "), Some(midnight));
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp(""), None);
    }
}
