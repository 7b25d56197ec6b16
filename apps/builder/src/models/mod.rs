pub mod resume;

pub use resume::{
    Award, Certification, Education, PersonalInfo, Project, Publication, ResumeData, Skill,
    SkillLevel, SocialLinks, Volunteering, WorkExperience,
};
