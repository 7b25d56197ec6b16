//! Upload intake: an existing resume PDF is text-extracted and mapped onto
//! the structured model with line heuristics. Extraction quality varies with
//! the source document, so the parse is deliberately forgiving — anything it
//! cannot place is dropped rather than guessed at.

use async_trait::async_trait;
use bytes::Bytes;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::BuilderError;
use crate::models::{ResumeData, Skill, WorkExperience};

use super::{validate, IntakeAdapter, SUMMARY_MIN_CHARS};

pub struct UploadedResume {
    pub file_name: String,
    pub bytes: Bytes,
}

#[derive(Debug, Default)]
pub struct UploadAdapter;

impl UploadAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl IntakeAdapter for UploadAdapter {
    type Input = UploadedResume;

    async fn intake(&self, input: Self::Input) -> Result<ResumeData, BuilderError> {
        let bytes = input.bytes.to_vec();
        // pdf_extract parses the whole document up front; keep it off the
        // async runtime.
        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
            .await
            .map_err(|e| BuilderError::Internal(anyhow::anyhow!("extraction task failed: {e}")))?
            .map_err(|e| {
                BuilderError::Extraction(format!("could not read {}: {e}", input.file_name))
            })?;

        debug!(
            file = %input.file_name,
            chars = text.len(),
            "extracted resume text"
        );

        let data = parse_extracted_text(&text);
        validate(&data)?;
        Ok(data)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Section {
    Preamble,
    Summary,
    Experience,
    Skills,
    Other,
}

fn classify_heading(line: &str) -> Option<Section> {
    let compact = line.trim().trim_end_matches(':').to_ascii_uppercase();
    match compact.as_str() {
        "SUMMARY" | "PROFILE" | "ABOUT" | "ABOUT ME" | "PROFESSIONAL SUMMARY" => {
            Some(Section::Summary)
        }
        "EXPERIENCE" | "WORK EXPERIENCE" | "EMPLOYMENT" | "EMPLOYMENT HISTORY" => {
            Some(Section::Experience)
        }
        "SKILLS" | "TECHNICAL SKILLS" | "CORE SKILLS" => Some(Section::Skills),
        "EDUCATION" | "PROJECTS" | "CERTIFICATIONS" | "AWARDS" | "PUBLICATIONS"
        | "VOLUNTEERING" | "INTERESTS" | "REFERENCES" => Some(Section::Other),
        _ => None,
    }
}

fn looks_like_email(token: &str) -> bool {
    token.contains('@') && token.rsplit('@').next().is_some_and(|d| d.contains('.'))
}

fn looks_like_phone(line: &str) -> bool {
    let digits = line.chars().filter(|c| c.is_ascii_digit()).count();
    digits >= 7 && line.chars().all(|c| {
        c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | '.' | ' ')
    })
}

/// Maps extracted plain text onto the resume model.
///
/// Heuristics: the first non-empty line is the name; an `@`-bearing token is
/// the email; a digit-heavy line is the phone; recognized section headings
/// open buckets for summary, experience, and skills. Bullet lines (`-`/`•`)
/// attach to the current experience entry, other experience lines open a new
/// entry.
fn parse_extracted_text(text: &str) -> ResumeData {
    let mut data = ResumeData::default();
    let mut section = Section::Preamble;
    let mut summary_lines: Vec<String> = Vec::new();

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(next) = classify_heading(line) {
            section = next;
            continue;
        }

        match section {
            Section::Preamble => {
                if data.personal_info.first_name.is_empty() {
                    let mut parts = line.split_whitespace();
                    data.personal_info.first_name =
                        parts.next().unwrap_or_default().to_string();
                    data.personal_info.last_name =
                        parts.collect::<Vec<_>>().join(" ");
                } else if data.personal_info.email.is_empty()
                    && line.split_whitespace().any(looks_like_email)
                {
                    data.personal_info.email = line
                        .split_whitespace()
                        .find(|t| looks_like_email(t))
                        .unwrap_or_default()
                        .to_string();
                } else if data.personal_info.phone.is_empty() && looks_like_phone(line) {
                    data.personal_info.phone = line.to_string();
                }
            }
            Section::Summary => summary_lines.push(line.to_string()),
            Section::Experience => {
                if let Some(bullet) = line.strip_prefix("- ").or_else(|| line.strip_prefix("• "))
                {
                    if let Some(entry) = data.work_experience.last_mut() {
                        entry.description.push(bullet.trim().to_string());
                    }
                } else {
                    data.work_experience.push(WorkExperience {
                        id: Uuid::new_v4().to_string(),
                        position: line.to_string(),
                        ..Default::default()
                    });
                }
            }
            Section::Skills => {
                for name in line.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                    data.skills.push(Skill {
                        name: name.to_string(),
                        category: "Imported".to_string(),
                        ..Default::default()
                    });
                }
            }
            Section::Other => {}
        }
    }

    let summary = summary_lines.join(" ");
    if summary.chars().count() >= SUMMARY_MIN_CHARS {
        data.summary = summary;
    } else if !summary.is_empty() {
        warn!("dropping extracted summary shorter than the intake minimum");
    }

    data
}
