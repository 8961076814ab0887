use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use super::filter::FilterConfig;
use crate::extract::{extract_salary, has_sponsorship_hint, matches_focus};
use crate::feed::{format_iso, parse_when, RawEntry};

/// A job posting that passed the salary and keyword filters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobRow {
    #[serde(serialize_with = "serialize_date")]
    pub date: Option<DateTime<Utc>>,
    pub title: String,
    pub source: String,
    /// Largest GBP figure found in title + summary
    pub salary_max: Option<u64>,
    /// Heuristic only; display alongside `VISA_HINT_CAPTION`
    pub visa_hint: bool,
    pub link: String,
}

/// A course, call for papers or fellowship: no salary, keyword or visa logic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseRow {
    #[serde(serialize_with = "serialize_date")]
    pub date: Option<DateTime<Utc>>,
    pub title: String,
    pub source: String,
    pub link: String,
}

impl JobRow {
    /// ISO-8601 date, or an empty string when the entry had no usable date
    pub fn date_iso(&self) -> String {
        self.date.as_ref().map(format_iso).unwrap_or_default()
    }
}

impl CourseRow {
    pub fn date_iso(&self) -> String {
        self.date.as_ref().map(format_iso).unwrap_or_default()
    }
}

fn serialize_date<S: Serializer>(
    date: &Option<DateTime<Utc>>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&date.as_ref().map(format_iso).unwrap_or_default())
}

/// Turn one feed's entries into job rows, dropping those below the salary
/// floor or missing every focus keyword
pub fn build_rows(entries: &[RawEntry], source_label: &str, config: &FilterConfig) -> Vec<JobRow> {
    let mut rows = Vec::with_capacity(entries.len());

    for entry in entries {
        let text = entry.combined_text();
        let salary = extract_salary(&text);

        if let Some(salary) = salary {
            if salary < config.min_salary {
                tracing::debug!(
                    "Dropped '{}': salary {} below floor {}",
                    entry.title,
                    salary,
                    config.min_salary
                );
                continue;
            }
        }

        if !matches_focus(&text, &config.keywords) {
            tracing::debug!("Dropped '{}': no focus keyword", entry.title);
            continue;
        }

        rows.push(JobRow {
            date: parse_when(entry),
            title: entry.title.clone(),
            source: source_label.to_string(),
            salary_max: salary,
            visa_hint: has_sponsorship_hint(&text),
            link: entry.link.clone(),
        });
    }

    rows
}

/// Turn one feed's entries into course rows; nothing is filtered out
pub fn build_course_rows(entries: &[RawEntry], source_label: &str) -> Vec<CourseRow> {
    entries
        .iter()
        .map(|entry| CourseRow {
            date: parse_when(entry),
            title: entry.title.clone(),
            source: source_label.to_string(),
            link: entry.link.clone(),
        })
        .collect()
}
