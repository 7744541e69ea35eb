//! Render configuration — template selection, theme and section layout.
//! Distinct from content: the same `PortfolioData` renders under any config.

use serde::{Deserialize, Serialize};

/// The five selectable template identifiers. Three of them are aliases onto
/// a smaller set of concrete skins (see `render::layout_for`), but the
/// external selection contract is always these five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    Minimal,
    Modern,
    Dark,
    Student,
    Professional,
}

impl Default for TemplateId {
    fn default() -> Self {
        TemplateId::Minimal
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontChoice {
    Inter,
    Poppins,
    Playfair,
}

impl FontChoice {
    /// CSS font-family stack inlined into rendered markup and exports.
    pub fn css_stack(self) -> &'static str {
        match self {
            FontChoice::Inter => "'Inter', -apple-system, 'Segoe UI', sans-serif",
            FontChoice::Poppins => "'Poppins', -apple-system, 'Segoe UI', sans-serif",
            FontChoice::Playfair => "'Playfair Display', Georgia, serif",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Hex color strings, e.g. "#3b82f6".
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub font: FontChoice,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: "#3b82f6".to_string(),
            secondary: "#1e293b".to_string(),
            accent: "#f59e0b".to_string(),
            font: FontChoice::Inter,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    About,
    Skills,
    Education,
    Experience,
    Projects,
    Contact,
}

/// Per-section visibility flags. `section_order` is the authoritative layout
/// sequence; these flags act as an override filter applied to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionToggles {
    pub about: bool,
    pub skills: bool,
    pub education: bool,
    pub experience: bool,
    pub projects: bool,
    pub contact: bool,
}

impl Default for SectionToggles {
    fn default() -> Self {
        Self {
            about: true,
            skills: true,
            education: true,
            experience: true,
            projects: true,
            contact: true,
        }
    }
}

impl SectionToggles {
    pub fn is_visible(&self, section: SectionId) -> bool {
        match section {
            SectionId::About => self.about,
            SectionId::Skills => self.skills,
            SectionId::Education => self.education,
            SectionId::Experience => self.experience,
            SectionId::Projects => self.projects,
            SectionId::Contact => self.contact,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioConfig {
    pub template: TemplateId,
    pub theme: ThemeConfig,
    pub sections: SectionToggles,
    pub section_order: Vec<SectionId>,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            template: TemplateId::default(),
            theme: ThemeConfig::default(),
            sections: SectionToggles::default(),
            section_order: vec![
                SectionId::About,
                SectionId::Skills,
                SectionId::Experience,
                SectionId::Education,
                SectionId::Projects,
                SectionId::Contact,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_builder_defaults() {
        let config = PortfolioConfig::default();
        assert_eq!(config.template, TemplateId::Minimal);
        assert_eq!(config.theme.primary, "#3b82f6");
        assert!(config.sections.projects);
        assert_eq!(config.section_order.len(), 6);
        assert_eq!(config.section_order[0], SectionId::About);
    }

    #[test]
    fn test_template_id_round_trips_lowercase() {
        let json = serde_json::to_string(&TemplateId::Professional).unwrap();
        assert_eq!(json, "\"professional\"");
        let back: TemplateId = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(back, TemplateId::Dark);
    }
}
