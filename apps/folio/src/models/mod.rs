pub mod content;
pub mod portfolio;

pub use content::{CertificationEntry, ContentModel, ExperienceEntry, ProjectEntry, SkillGroups};
pub use portfolio::default_content;
