//! Profile intake: hands a public profile URL to the external extraction
//! service and maps its payload onto the resume model. The service does the
//! scraping; this adapter only speaks its wire format.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::config::Config;
use crate::errors::BuilderError;
use crate::models::{Education, ResumeData, Skill, WorkExperience};

use super::{validate, IntakeAdapter};

#[derive(Debug, Clone)]
pub struct ProfileImportRequest {
    pub profile_url: String,
}

// ──────────────────────────── wire format ────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfilePayload {
    #[serde(default)]
    full_name: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    positions: Vec<PositionPayload>,
    #[serde(default)]
    educations: Vec<EducationPayload>,
    #[serde(default)]
    skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PositionPayload {
    #[serde(default)]
    title: String,
    #[serde(default)]
    company_name: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    start_date: String,
    #[serde(default)]
    end_date: String,
    #[serde(default)]
    is_current: bool,
    #[serde(default)]
    bullets: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EducationPayload {
    #[serde(default)]
    school_name: String,
    #[serde(default)]
    degree: String,
    #[serde(default)]
    field_of_study: String,
    #[serde(default)]
    start_date: String,
    #[serde(default)]
    end_date: String,
}

// ─────────────────────────────── adapter ───────────────────────────────

pub struct ProfileAdapter {
    http: reqwest::Client,
    base_url: String,
}

impl ProfileAdapter {
    pub fn new(config: &Config) -> Result<Self, BuilderError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .map_err(BuilderError::Service)?;
        Ok(Self {
            http,
            base_url: config.extraction_service_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl IntakeAdapter for ProfileAdapter {
    type Input = ProfileImportRequest;

    async fn intake(&self, input: Self::Input) -> Result<ResumeData, BuilderError> {
        let url = format!("{}/extract", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("url", input.profile_url.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BuilderError::Extraction(format!(
                "extraction service returned {} for {}",
                response.status(),
                input.profile_url
            )));
        }

        let payload: ProfilePayload = response.json().await?;
        info!(
            positions = payload.positions.len(),
            educations = payload.educations.len(),
            "profile extracted"
        );

        let data = map_profile(payload);
        validate(&data)?;
        Ok(data)
    }
}

fn map_profile(payload: ProfilePayload) -> ResumeData {
    let mut data = ResumeData::default();

    let mut names = payload.full_name.split_whitespace();
    data.personal_info.first_name = names.next().unwrap_or_default().to_string();
    data.personal_info.last_name = names.collect::<Vec<_>>().join(" ");

    let mut place = payload.location.splitn(2, ',').map(str::trim);
    data.personal_info.city = place.next().unwrap_or_default().to_string();
    data.personal_info.state = place.next().unwrap_or_default().to_string();

    data.summary = payload.summary;

    data.work_experience = payload
        .positions
        .into_iter()
        .map(|p| WorkExperience {
            id: Uuid::new_v4().to_string(),
            company: p.company_name,
            position: p.title,
            location: p.location,
            start_date: p.start_date,
            end_date: p.end_date,
            current: p.is_current,
            description: p.bullets,
        })
        .collect();

    data.education = payload
        .educations
        .into_iter()
        .map(|e| Education {
            id: Uuid::new_v4().to_string(),
            institution: e.school_name,
            degree: e.degree,
            field: e.field_of_study,
            start_date: e.start_date,
            end_date: e.end_date,
            ..Default::default()
        })
        .collect();

    data.skills = payload
        .skills
        .into_iter()
        .map(|name| Skill {
            name,
            category: "Imported".to_string(),
            ..Default::default()
        })
        .collect();

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload_json() -> &'static str {
        r#"{
            "fullName": "Ada Lovelace",
            "location": "London, United Kingdom",
            "summary": "Mathematician and writer, regarded as the first computer programmer.",
            "positions": [
                {
                    "title": "Analyst",
                    "companyName": "Analytical Engine Project",
                    "startDate": "2019-01",
                    "endDate": "",
                    "isCurrent": true,
                    "bullets": ["Wrote the first published algorithm"]
                }
            ],
            "educations": [
                {
                    "schoolName": "University of London",
                    "degree": "BSc",
                    "fieldOfStudy": "Mathematics",
                    "startDate": "2015-09",
                    "endDate": "2018-06"
                }
            ],
            "skills": ["Mathematics", "Analysis"]
        }"#
    }

    #[test]
    fn test_map_profile_splits_name_and_location() {
        let payload: ProfilePayload = serde_json::from_str(payload_json()).unwrap();
        let data = map_profile(payload);
        assert_eq!(data.personal_info.first_name, "Ada");
        assert_eq!(data.personal_info.last_name, "Lovelace");
        assert_eq!(data.personal_info.city, "London");
        assert_eq!(data.personal_info.state, "United Kingdom");
    }

    #[test]
    fn test_map_profile_positions_and_educations() {
        let payload: ProfilePayload = serde_json::from_str(payload_json()).unwrap();
        let data = map_profile(payload);

        assert_eq!(data.work_experience.len(), 1);
        let exp = &data.work_experience[0];
        assert_eq!(exp.company, "Analytical Engine Project");
        assert!(exp.current);
        assert!(!exp.id.is_empty());

        assert_eq!(data.education.len(), 1);
        assert_eq!(data.education[0].institution, "University of London");
        assert_eq!(data.education[0].field, "Mathematics");
    }

    #[test]
    fn test_map_profile_generated_ids_are_unique() {
        let payload: ProfilePayload = serde_json::from_str(payload_json()).unwrap();
        let data = map_profile(payload);
        validate(&data).unwrap();
    }

    #[test]
    fn test_sparse_payload_maps_to_defaults() {
        let payload: ProfilePayload = serde_json::from_str("{}").unwrap();
        let data = map_profile(payload);
        assert!(data.personal_info.first_name.is_empty());
        assert!(data.work_experience.is_empty());
        validate(&data).unwrap();
    }
}
