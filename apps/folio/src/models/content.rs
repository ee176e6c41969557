//! Content model — the immutable record set the page is rendered from.
//!
//! Nothing here is mutated after startup. Contact fields on [`Profile`] double as
//! display text and link targets; the `*_href` helpers derive the targets.
#![allow(dead_code)]

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    /// Full external profile URL, e.g. `https://github.com/someone`.
    pub profile_url: String,
}

impl Profile {
    pub fn email_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn phone_href(&self) -> String {
        format!("tel:{}", self.phone)
    }

    pub fn profile_href(&self) -> &str {
        &self.profile_url
    }

    /// The profile link as shown on the page: scheme and trailing slash stripped.
    pub fn profile_display(&self) -> &str {
        let url = self.profile_url.as_str();
        let url = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .unwrap_or(url);
        url.trim_end_matches('/')
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<String>,
}

/// Insertion-ordered mapping of category label → skill names.
///
/// Labels are unique. Re-inserting an existing label replaces its skills but
/// keeps the label at its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<SkillGroup>", into = "Vec<SkillGroup>")]
pub struct SkillGroups {
    groups: Vec<SkillGroup>,
}

impl SkillGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<C, I, S>(&mut self, category: C, skills: I)
    where
        C: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let category = category.into();
        let skills: Vec<String> = skills.into_iter().map(Into::into).collect();
        match self.groups.iter_mut().find(|g| g.category == category) {
            Some(existing) => existing.skills = skills,
            None => self.groups.push(SkillGroup { category, skills }),
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with<C, I, S>(mut self, category: C, skills: I) -> Self
    where
        C: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(category, skills);
        self
    }

    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.skills.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl From<Vec<SkillGroup>> for SkillGroups {
    fn from(groups: Vec<SkillGroup>) -> Self {
        let mut out = SkillGroups::new();
        for g in groups {
            out.insert(g.category, g.skills);
        }
        out
    }
}

impl From<SkillGroups> for Vec<SkillGroup> {
    fn from(groups: SkillGroups) -> Self {
        groups.groups
    }
}

impl<'a> IntoIterator for &'a SkillGroups {
    type Item = &'a SkillGroup;
    type IntoIter = std::slice::Iter<'a, SkillGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Entries
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    /// Free-text label such as `2023 – Present`; never parsed.
    pub period: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    pub stack: Vec<String>,
    pub purpose: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: String,
    pub year: String,
}

/// Everything the page shows. Entities are independent siblings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentModel {
    pub profile: Profile,
    pub summary: String,
    pub skills: SkillGroups,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<CertificationEntry>,
    /// Screen-only hint shown in the footer next to the copyright line.
    pub export_hint: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(url: &str) -> Profile {
        Profile {
            name: "A".to_string(),
            title: "B".to_string(),
            location: "C".to_string(),
            email: "a@example.com".to_string(),
            phone: "0123".to_string(),
            profile_url: url.to_string(),
        }
    }

    #[test]
    fn test_profile_hrefs() {
        let p = profile("https://github.com/someone");
        assert_eq!(p.email_href(), "mailto:a@example.com");
        assert_eq!(p.phone_href(), "tel:0123");
        assert_eq!(p.profile_href(), "https://github.com/someone");
    }

    #[test]
    fn test_profile_display_strips_scheme_and_slash() {
        assert_eq!(
            profile("https://github.com/someone/").profile_display(),
            "github.com/someone"
        );
        assert_eq!(profile("http://x.dev").profile_display(), "x.dev");
        assert_eq!(profile("x.dev/me").profile_display(), "x.dev/me");
    }

    #[test]
    fn test_skill_groups_keep_insertion_order() {
        let groups = SkillGroups::new()
            .with("Zeta", ["z"])
            .with("Alpha", ["a"])
            .with("Mid", ["m"]);
        let order: Vec<&str> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(order, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_skill_groups_reinsert_replaces_in_place() {
        let mut groups = SkillGroups::new().with("Frontend", ["HTML"]).with("Backend", ["Go"]);
        groups.insert("Frontend", ["CSS", "React"]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups.iter().next().map(|g| g.category.as_str()), Some("Frontend"));
        assert_eq!(
            groups.get("Frontend"),
            Some(&["CSS".to_string(), "React".to_string()][..])
        );
    }

    #[test]
    fn test_skill_groups_serialize_as_ordered_array() {
        let groups = SkillGroups::new().with("B", ["1"]).with("A", ["2"]);
        let json = serde_json::to_value(&groups).unwrap();
        assert_eq!(json[0]["category"], "B");
        assert_eq!(json[1]["category"], "A");

        let back: SkillGroups = serde_json::from_value(json).unwrap();
        assert_eq!(back, groups);
    }

    #[test]
    fn test_skill_groups_deserialize_dedups_labels() {
        let json = serde_json::json!([
            {"category": "X", "skills": ["a"]},
            {"category": "Y", "skills": ["b"]},
            {"category": "X", "skills": ["c"]},
        ]);
        let groups: SkillGroups = serde_json::from_value(json).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups.get("X"), Some(&["c".to_string()][..]));
    }
}
