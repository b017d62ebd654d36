//! Loads prospect datasets from CSV exports or JSON dumps.

mod parser;

use super::domain::{Industry, Prospect, ProspectId, Role, SalesRep, Stage};
use chrono::{DateTime, Utc};
use parser::{parse_rows, parse_timestamp, ProspectRow};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

#[derive(Debug)]
pub enum ProspectImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    InvalidField {
        row: usize,
        field: &'static str,
        value: String,
    },
    DuplicateId {
        row: usize,
        id: ProspectId,
    },
    IdsExhausted {
        row: usize,
    },
    UnsupportedFormat(String),
}

impl std::fmt::Display for ProspectImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProspectImportError::Io(err) => write!(f, "failed to read prospect data: {}", err),
            ProspectImportError::Csv(err) => write!(f, "invalid prospect CSV data: {}", err),
            ProspectImportError::Json(err) => write!(f, "invalid prospect JSON data: {}", err),
            ProspectImportError::InvalidField { row, field, value } => {
                write!(f, "row {}: invalid {} '{}'", row, field, value)
            }
            ProspectImportError::DuplicateId { row, id } => {
                write!(f, "row {}: prospect id {} appears more than once", row, id)
            }
            ProspectImportError::IdsExhausted { row } => {
                write!(f, "row {}: no prospect id left to assign", row)
            }
            ProspectImportError::UnsupportedFormat(path) => write!(
                f,
                "unsupported dataset '{}': expected a .csv or .json file",
                path
            ),
        }
    }
}

impl std::error::Error for ProspectImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProspectImportError::Io(err) => Some(err),
            ProspectImportError::Csv(err) => Some(err),
            ProspectImportError::Json(err) => Some(err),
            ProspectImportError::InvalidField { .. }
            | ProspectImportError::DuplicateId { .. }
            | ProspectImportError::IdsExhausted { .. }
            | ProspectImportError::UnsupportedFormat(_) => None,
        }
    }
}

impl From<std::io::Error> for ProspectImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ProspectImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for ProspectImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Builds prospects from a flat CSV export.
///
/// Imported rows carry no signals. A blank `days_since_last_activity` is derived from
/// `last_activity` against `as_of` once, at import time.
pub struct ProspectCsvImporter;

impl ProspectCsvImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        as_of: DateTime<Utc>,
    ) -> Result<Vec<Prospect>, ProspectImportError> {
        let file = File::open(path.as_ref())?;
        let prospects = Self::from_reader(BufReader::new(file), as_of)?;
        info!(
            path = %path.as_ref().display(),
            prospects = prospects.len(),
            "imported prospects from csv"
        );
        Ok(prospects)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        as_of: DateTime<Utc>,
    ) -> Result<Vec<Prospect>, ProspectImportError> {
        let rows = parse_rows(reader)?;

        let mut seen = HashSet::new();
        for (row_number, row) in &rows {
            if let Some(raw) = &row.id {
                let id = parse_id(*row_number, raw)?;
                if !seen.insert(id) {
                    return Err(ProspectImportError::DuplicateId {
                        row: *row_number,
                        id,
                    });
                }
            }
        }

        let mut last_id = seen.iter().map(|id| id.0).max().unwrap_or(0);
        let mut prospects = Vec::with_capacity(rows.len());
        for (row_number, row) in rows {
            let id = match &row.id {
                Some(raw) => parse_id(row_number, raw)?,
                None => {
                    last_id = last_id
                        .checked_add(1)
                        .ok_or(ProspectImportError::IdsExhausted { row: row_number })?;
                    ProspectId(last_id)
                }
            };
            prospects.push(row_to_prospect(row_number, id, row, as_of)?);
        }

        Ok(prospects)
    }
}

/// Reads a JSON array of full prospect records.
pub fn load_json<R: Read>(reader: R) -> Result<Vec<Prospect>, ProspectImportError> {
    let prospects: Vec<Prospect> = serde_json::from_reader(reader)?;

    let mut seen = HashSet::new();
    for (index, prospect) in prospects.iter().enumerate() {
        let row = index + 1;
        if !seen.insert(prospect.id) {
            return Err(ProspectImportError::DuplicateId {
                row,
                id: prospect.id,
            });
        }
        check_score(row, "fit_score", prospect.fit_score as u32)?;
        check_score(row, "engagement_score", prospect.engagement_score as u32)?;
        check_score(row, "intent_score", prospect.intent_score as u32)?;
        check_call_quality(row, prospect.call_quality_score as u32)?;
        if prospect.deal_size == 0 {
            return Err(ProspectImportError::InvalidField {
                row,
                field: "deal_size",
                value: "0".to_string(),
            });
        }
    }

    Ok(prospects)
}

pub fn to_json(records: &[Prospect]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}

/// Picks the loader from the file extension.
pub fn load_dataset(
    path: &Path,
    as_of: DateTime<Utc>,
) -> Result<Vec<Prospect>, ProspectImportError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("csv") => ProspectCsvImporter::from_path(path, as_of),
        Some("json") => {
            let file = File::open(path)?;
            let prospects = load_json(BufReader::new(file))?;
            info!(
                path = %path.display(),
                prospects = prospects.len(),
                "loaded prospects from json"
            );
            Ok(prospects)
        }
        _ => Err(ProspectImportError::UnsupportedFormat(
            path.display().to_string(),
        )),
    }
}

fn row_to_prospect(
    row_number: usize,
    id: ProspectId,
    row: ProspectRow,
    as_of: DateTime<Utc>,
) -> Result<Prospect, ProspectImportError> {
    let invalid = |field: &'static str, value: &str| ProspectImportError::InvalidField {
        row: row_number,
        field,
        value: value.to_string(),
    };

    let role = Role::from_label(&row.role).ok_or_else(|| invalid("role", &row.role))?;
    let industry =
        Industry::from_label(&row.industry).ok_or_else(|| invalid("industry", &row.industry))?;
    let stage = Stage::from_label(&row.stage).ok_or_else(|| invalid("stage", &row.stage))?;
    let sales_rep =
        SalesRep::from_label(&row.sales_rep).ok_or_else(|| invalid("sales_rep", &row.sales_rep))?;

    let fit_score = check_score(row_number, "fit_score", row.fit_score)?;
    let engagement_score = check_score(row_number, "engagement_score", row.engagement_score)?;
    let intent_score = check_score(row_number, "intent_score", row.intent_score)?;
    let call_quality_score = check_call_quality(row_number, row.call_quality_score)?;
    if row.deal_size == 0 {
        return Err(invalid("deal_size", "0"));
    }

    let last_activity = parse_timestamp(&row.last_activity)
        .ok_or_else(|| invalid("last_activity", &row.last_activity))?;
    let sourced_date = parse_timestamp(&row.sourced_date)
        .ok_or_else(|| invalid("sourced_date", &row.sourced_date))?;
    let days_since_last_activity = match &row.days_since_last_activity {
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|_| invalid("days_since_last_activity", raw))?,
        None => (as_of.date_naive() - last_activity.date_naive())
            .num_days()
            .max(0) as u32,
    };

    Ok(Prospect {
        id,
        name: row.name,
        role,
        email: row.email,
        phone: row.phone,
        linkedin_url: row.linkedin_url,
        company: row.company,
        company_size: row.company_size,
        industry,
        fit_score,
        engagement_score,
        intent_score,
        deal_size: row.deal_size,
        days_in_pipeline: row.days_in_pipeline,
        stage,
        last_activity,
        days_since_last_activity,
        sourced_date,
        calls_made: row.calls_made,
        last_call_duration: row.last_call_duration,
        call_quality_score,
        sales_rep,
        signals: Vec::new(),
    })
}

fn parse_id(row: usize, raw: &str) -> Result<ProspectId, ProspectImportError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|id| *id > 0)
        .map(ProspectId)
        .ok_or_else(|| ProspectImportError::InvalidField {
            row,
            field: "id",
            value: raw.to_string(),
        })
}

fn check_score(row: usize, field: &'static str, value: u32) -> Result<u8, ProspectImportError> {
    if value > 100 {
        return Err(ProspectImportError::InvalidField {
            row,
            field,
            value: value.to_string(),
        });
    }
    Ok(value as u8)
}

fn check_call_quality(row: usize, value: u32) -> Result<u8, ProspectImportError> {
    if !(50..=100).contains(&value) {
        return Err(ProspectImportError::InvalidField {
            row,
            field: "call_quality_score",
            value: value.to_string(),
        });
    }
    Ok(value as u8)
}
