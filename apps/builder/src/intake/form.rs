//! Manual intake: the multi-step builder form submits a full `ResumeData`
//! payload whose entries may not have ids yet (newly added rows). This
//! adapter assigns the missing ids from a monotonic per-adapter counter and
//! validates the result.

use async_trait::async_trait;

use crate::errors::BuilderError;
use crate::models::ResumeData;

use super::{validate, EntryIdSeq, IntakeAdapter};

#[derive(Debug, Default)]
pub struct FormAdapter {
    ids: EntryIdSeq,
}

impl FormAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    fn assign_ids(&self, data: &mut ResumeData) {
        macro_rules! fill {
            ($section:expr) => {
                for entry in &mut $section {
                    if entry.id.is_empty() {
                        entry.id = self.ids.next();
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
}

#[async_trait]
impl IntakeAdapter for FormAdapter {
    type Input = ResumeData;

    async fn intake(&self, mut input: Self::Input) -> Result<ResumeData, BuilderError> {
        self.assign_ids(&mut input);
        validate(&input)?;
        Ok(input)
    }
}
