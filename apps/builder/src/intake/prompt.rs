//! Prompt intake: turns a free-text career description into a structured
//! resume by asking the drafting service for a JSON document in the resume
//! wire format.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::BuilderError;
use crate::models::ResumeData;

use super::{validate, AiClient, IntakeAdapter};

const SYSTEM_PROMPT: &str = "You draft resumes. Respond with a single JSON object using camelCase \
keys: personalInfo (firstName, lastName, email, phone, address, city, state, zipCode, country), \
summary, workExperience, education, skills, certifications, awards, projects, volunteering, \
publications, interests. Dates are YYYY-MM. Leave unknown fields empty. Output JSON only.";

pub struct PromptAdapter {
    client: AiClient,
}

impl PromptAdapter {
    pub fn new(client: AiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IntakeAdapter for PromptAdapter {
    type Input = String;

    async fn intake(&self, input: Self::Input) -> Result<ResumeData, BuilderError> {
        let prompt = build_prompt(&input);
        let mut data: ResumeData = self.client.call_json(&prompt, Some(SYSTEM_PROMPT)).await?;
        fill_missing_ids(&mut data);
        validate(&data)?;
        Ok(data)
    }
}

fn build_prompt(description: &str) -> String {
    format!("Draft a resume from this description:\n\n{}", description.trim())
}

/// Drafting models routinely omit entry ids; generate them here rather than
/// rejecting the draft.
fn fill_missing_ids(data: &mut ResumeData) {
    macro_rules! fill {
        ($section:expr) => {
            for entry in &mut $section {
                if entry.id.is_empty() {
                    entry.id = Uuid::new_v4().to_string();
                }
            }
        };
    }
    fill!(data.work_experience);
    fill!(data.education);
    fill!(data.certifications);
    fill!(data.awards);
    fill!(data.projects);
    fill!(data.volunteering);
    fill!(data.publications);
}
