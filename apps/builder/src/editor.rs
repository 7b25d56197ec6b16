//! Inline editor: an explicit two-slot model over one `ResumeData`.
//!
//! `committed` is the last-saved state; `draft` is the working copy every
//! edit lands in. `save` and `cancel` are the only operations that move data
//! between the slots, so the committed copy is never partially updated and
//! the two copies never alias each other.
//!
//! The editor re-runs no validation: intake already enforced the field
//! rules, and the caller supplies a well-formed seed.

use serde::{Deserialize, Serialize};

use crate::models::{
    Award, Certification, Education, Project, Publication, ResumeData, Skill, SocialLinks,
    Volunteering, WorkExperience,
};

/// One edit against the working copy. Scalar patches cover the fields the
/// edit panel exposes directly; collection patches replace a whole section
/// (the granularity the section forms submit at).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResumePatch {
    FirstName(String),
    LastName(String),
    Email(String),
    Phone(String),
    Summary(String),
    SocialLinks(SocialLinks),
    WorkExperience(Vec<WorkExperience>),
    Education(Vec<Education>),
    Skills(Vec<Skill>),
    Certifications(Vec<Certification>),
    Awards(Vec<Award>),
    Projects(Vec<Project>),
    Volunteering(Vec<Volunteering>),
    Publications(Vec<Publication>),
    Interests(Vec<String>),
}

type OnSave = Box<dyn FnMut(&ResumeData) + Send>;

/// Editor over one resume. Owned by a single builder session; never shared.
pub struct ResumeEditor {
    committed: ResumeData,
    draft: ResumeData,
    on_save: Option<OnSave>,
}

impl ResumeEditor {
    /// Seeds both slots from the committed copy.
    pub fn new(seed: ResumeData) -> Self {
        Self {
            draft: seed.clone(),
            committed: seed,
            on_save: None,
        }
    }

    /// Like [`ResumeEditor::new`], with a host callback invoked once per
    /// successful `save`.
    pub fn with_on_save(seed: ResumeData, on_save: impl FnMut(&ResumeData) + Send + 'static) -> Self {
        Self {
            draft: seed.clone(),
            committed: seed,
            on_save: Some(Box::new(on_save)),
        }
    }

    /// The working copy — reflects every patch applied since the last save
    /// or cancel. Renders triggered mid-edit read this.
    pub fn draft(&self) -> &ResumeData {
        &self.draft
    }

    /// The last-saved state.
    pub fn committed(&self) -> &ResumeData {
        &self.committed
    }

    /// Applies one patch to the working copy. The committed copy is
    /// untouched until `save`.
    pub fn update(&mut self, patch: ResumePatch) {
        match patch {
            ResumePatch::FirstName(v) => self.draft.personal_info.first_name = v,
            ResumePatch::LastName(v) => self.draft.personal_info.last_name = v,
            ResumePatch::Email(v) => self.draft.personal_info.email = v,
            ResumePatch::Phone(v) => self.draft.personal_info.phone = v,
            ResumePatch::Summary(v) => self.draft.summary = v,
            ResumePatch::SocialLinks(v) => self.draft.social_links = v,
            ResumePatch::WorkExperience(v) => self.draft.work_experience = v,
            ResumePatch::Education(v) => self.draft.education = v,
            ResumePatch::Skills(v) => self.draft.skills = v,
            ResumePatch::Certifications(v) => self.draft.certifications = v,
            ResumePatch::Awards(v) => self.draft.awards = v,
            ResumePatch::Projects(v) => self.draft.projects = v,
            ResumePatch::Volunteering(v) => self.draft.volunteering = v,
            ResumePatch::Publications(v) => self.draft.publications = v,
            ResumePatch::Interests(v) => self.draft.interests = v,
        }
    }

    /// Atomically replaces the committed copy with the working copy, then
    /// notifies the host. Either the whole draft commits or nothing changes.
    pub fn save(&mut self) {
        self.committed = self.draft.clone();
        if let Some(on_save) = self.on_save.as_mut() {
            on_save(&self.committed);
        }
    }

    /// Discards the working copy, resetting it from the committed copy.
    pub fn cancel(&mut self) {
        self.draft = self.committed.clone();
    }
}
