//! Portfolio content model — what the user is building a portfolio *about*.
//!
//! Everything here serializes camelCase because `data.json` in the HTML
//! bundle export is a public contract consumed outside this service.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub title: String,
    pub bio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Canonical skill shape: a bare name, optionally tagged with a category
/// bucket and a 0–100 proficiency level. Simple and scored skills share this
/// one schema instead of two parallel types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
}

impl Skill {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: None,
            level: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    /// Immutable for the entry's lifetime.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub field: String,
    /// Year-month granularity, e.g. "2021-09".
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub start_date: String,
    /// Ignored for display while `current` is true.
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub current: bool,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Project {
    /// Appends a technology name, suppressing duplicates (case-sensitive,
    /// matching the form behavior) while preserving insertion order.
    pub fn push_technology(&mut self, tech: impl Into<String>) {
        let tech = tech.into();
        if !self.technologies.iter().any(|t| *t == tech) {
            self.technologies.push(tech);
        }
    }
}

/// The full portfolio content for one builder session. All list fields
/// preserve insertion order; order is meaningful for rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    pub personal_info: PersonalInfo,
    pub contact: ContactInfo,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_technology_suppresses_duplicates() {
        let mut project = Project {
            id: Uuid::new_v4(),
            title: "Demo".to_string(),
            description: "d".to_string(),
            technologies: vec![],
            github_url: None,
            live_url: None,
            image_url: None,
        };
        project.push_technology("React");
        project.push_technology("Rust");
        project.push_technology("React");
        assert_eq!(project.technologies, vec!["React", "Rust"]);
    }

    #[test]
    fn test_data_json_contract_is_camel_case() {
        let mut data = PortfolioData::default();
        data.personal_info.full_name = "A B".to_string();
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["personalInfo"]["fullName"], "A B");
        assert!(json["personalInfo"].get("profilePhoto").is_none());
    }

    #[test]
    fn test_entry_id_defaults_when_absent() {
        let edu: Education = serde_json::from_str(
            r#"{"institution":"MIT","degree":"BSc","field":"CS",
                "startDate":"2020-09","endDate":"2024-06"}"#,
        )
        .unwrap();
        assert!(!edu.id.is_nil());
    }
}
