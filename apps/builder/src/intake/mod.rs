//! Intake adapters: four entry paths (manual form, file upload, external
//! profile import, free-text AI prompt) that each normalize heterogeneous
//! input into the same `ResumeData` shape.
//!
//! Validation happens here and only here — the renderer, editor, and
//! exporter trust the data they are handed. Adapters never call into the
//! renderer or exporter; composition is the host page's job.

pub mod client;
pub mod form;
pub mod profile;
pub mod prompt;
pub mod upload;

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::BuilderError;
use crate::models::ResumeData;

pub use client::AiClient;
pub use form::FormAdapter;
pub use profile::{ProfileAdapter, ProfileImportRequest};
pub use prompt::PromptAdapter;
pub use upload::{UploadAdapter, UploadedResume};

/// One intake path. `Input` is the adapter's heterogeneous source; the
/// output is always a validated `ResumeData`.
#[async_trait]
pub trait IntakeAdapter: Send + Sync {
    type Input: Send;

    async fn intake(&self, input: Self::Input) -> Result<ResumeData, BuilderError>;
}

pub const SUMMARY_MIN_CHARS: usize = 50;
pub const SUMMARY_MAX_CHARS: usize = 2000;

const NAME_MAX: usize = 100;
const EMAIL_MAX: usize = 255;
const PHONE_MAX: usize = 30;
const ADDRESS_MAX: usize = 200;
const PLACE_MAX: usize = 100;
const ZIP_MAX: usize = 20;

/// Monotonic entry-id source for adapters that number their entries.
/// Ids are never reused after deletion — the counter only moves forward.
#[derive(Debug, Default)]
pub struct EntryIdSeq(AtomicU64);

impl EntryIdSeq {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> String {
        (self.0.fetch_add(1, Ordering::Relaxed) + 1).to_string()
    }
}

/// Validates an assembled `ResumeData` against the intake rules: personal
/// field length caps, summary bounds (when present), `YYYY-MM` date shape,
/// and entry-id uniqueness per collection.
pub fn validate(data: &ResumeData) -> Result<(), BuilderError> {
    let info = &data.personal_info;
    check_len("firstName", &info.first_name, NAME_MAX)?;
    check_len("lastName", &info.last_name, NAME_MAX)?;
    check_len("email", &info.email, EMAIL_MAX)?;
    check_len("phone", &info.phone, PHONE_MAX)?;
    check_len("address", &info.address, ADDRESS_MAX)?;
    check_len("city", &info.city, PLACE_MAX)?;
    check_len("state", &info.state, PLACE_MAX)?;
    check_len("zipCode", &info.zip_code, ZIP_MAX)?;
    check_len("country", &info.country, PLACE_MAX)?;

    if !data.summary.is_empty() {
        let chars = data.summary.chars().count();
        if !(SUMMARY_MIN_CHARS..=SUMMARY_MAX_CHARS).contains(&chars) {
            return Err(BuilderError::Validation(format!(
                "summary must be {SUMMARY_MIN_CHARS}–{SUMMARY_MAX_CHARS} characters, got {chars}"
            )));
        }
    }

    for exp in &data.work_experience {
        check_month("workExperience.startDate", &exp.start_date)?;
        check_month("workExperience.endDate", &exp.end_date)?;
    }
    for edu in &data.education {
        check_month("education.startDate", &edu.start_date)?;
        check_month("education.endDate", &edu.end_date)?;
    }

    check_unique_ids("workExperience", data.work_experience.iter().map(|e| e.id.as_str()))?;
    check_unique_ids("education", data.education.iter().map(|e| e.id.as_str()))?;
    check_unique_ids("certifications", data.certifications.iter().map(|e| e.id.as_str()))?;
    check_unique_ids("awards", data.awards.iter().map(|e| e.id.as_str()))?;
    check_unique_ids("projects", data.projects.iter().map(|e| e.id.as_str()))?;
    check_unique_ids("volunteering", data.volunteering.iter().map(|e| e.id.as_str()))?;
    check_unique_ids("publications", data.publications.iter().map(|e| e.id.as_str()))?;

    Ok(())
}

fn check_len(field: &str, value: &str, max: usize) -> Result<(), BuilderError> {
    if value.chars().count() > max {
        return Err(BuilderError::Validation(format!(
            "{field} exceeds the {max}-character limit"
        )));
    }
    Ok(())
}

/// Accepts empty strings (open-ended ranges) and `YYYY-MM` month stamps.
fn check_month(field: &str, value: &str) -> Result<(), BuilderError> {
    if value.is_empty() {
        return Ok(());
    }
    let parsed = NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d");
    if parsed.is_err() {
        return Err(BuilderError::Validation(format!(
            "{field} must be a YYYY-MM month, got '{value}'"
        )));
    }
    Ok(())
}

fn check_unique_ids<'a>(
    section: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), BuilderError> {
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(BuilderError::Validation(format!(
                "duplicate entry id '{id}' in {section}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PersonalInfo, WorkExperience};

    fn valid_data() -> ResumeData {
        ResumeData {
            personal_info: PersonalInfo {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: "ada@analytical.engine".to_string(),
                ..Default::default()
            },
            summary: "Mathematician and writer, regarded as the first computer programmer."
                .to_string(),
            work_experience: vec![WorkExperience {
                id: "1".to_string(),
                start_date: "2019-01".to_string(),
                end_date: "2020-06".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_data_passes() {
        validate(&valid_data()).unwrap();
    }

    #[test]
    fn test_summary_below_minimum_rejected() {
        let mut data = valid_data();
        data.summary = "Too short".to_string();
        let err = validate(&data).unwrap_err();
        assert!(matches!(err, BuilderError::Validation(_)));
    }

    #[test]
    fn test_summary_above_maximum_rejected() {
        let mut data = valid_data();
        data.summary = "x".repeat(SUMMARY_MAX_CHARS + 1);
        assert!(validate(&data).is_err());
    }

    #[test]
    fn test_empty_summary_allowed() {
        let mut data = valid_data();
        data.summary = String::new();
        validate(&data).unwrap();
    }

    #[test]
    fn test_field_length_cap_enforced() {
        let mut data = valid_data();
        data.personal_info.first_name = "A".repeat(NAME_MAX + 1);
        assert!(validate(&data).is_err());
    }

    #[test]
    fn test_malformed_month_rejected() {
        let mut data = valid_data();
        data.work_experience[0].start_date = "January 2019".to_string();
        assert!(validate(&data).is_err());

        data.work_experience[0].start_date = "2019-13".to_string();
        assert!(validate(&data).is_err());
    }

    #[test]
    fn test_empty_dates_allowed_for_open_ranges() {
        let mut data = valid_data();
        data.work_experience[0].end_date = String::new();
        validate(&data).unwrap();
    }

    #[test]
    fn test_duplicate_entry_ids_rejected() {
        let mut data = valid_data();
        data.work_experience.push(WorkExperience {
            id: "1".to_string(),
            start_date: "2021-01".to_string(),
            ..Default::default()
        });
        let err = validate(&data).unwrap_err();
        assert!(err.to_string().contains("duplicate entry id"));
    }

    #[test]
    fn test_duplicate_skills_allowed() {
        // Skills have no id and no uniqueness constraint.
        let mut data = valid_data();
        data.skills = vec![Default::default(), Default::default()];
        validate(&data).unwrap();
    }

    #[test]
    fn test_entry_id_seq_is_monotonic() {
        let seq = EntryIdSeq::new();
        assert_eq!(seq.next(), "1");
        assert_eq!(seq.next(), "2");
        assert_eq!(seq.next(), "3");
    }
}
