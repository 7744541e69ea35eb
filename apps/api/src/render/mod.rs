//! Template Renderer — pure mapping from (content, config) to an HTML
//! document subtree.
//!
//! Five selectable template identifiers resolve through a lookup table onto
//! three concrete skins; the delegating identifiers in the original were pure
//! aliases, so they stay aliases here while the 5-identifier selection
//! contract is preserved. Theme colors and the font stack are inlined into
//! the markup so a DOM snapshot of the result is color-faithful without the
//! live app's style engine.

pub mod engine;

use crate::models::portfolio::PortfolioData;
use crate::models::render_config::{PortfolioConfig, SectionId, TemplateId, ThemeConfig};

/// A concrete layout skin. The engine is shared; skins only vary chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skin {
    Minimal,
    Modern,
    Dark,
}

/// The template-identifier lookup table. Student delegates to the minimal
/// skin and professional to the modern one.
pub fn layout_for(template: TemplateId) -> Skin {
    match template {
        TemplateId::Minimal | TemplateId::Student => Skin::Minimal,
        TemplateId::Modern | TemplateId::Professional => Skin::Modern,
        TemplateId::Dark => Skin::Dark,
    }
}

impl Skin {
    pub fn class_name(self) -> &'static str {
        match self {
            Skin::Minimal => "minimal",
            Skin::Modern => "modern",
            Skin::Dark => "dark",
        }
    }

    fn root_style(self, theme: &ThemeConfig) -> String {
        let font = theme.font.css_stack();
        match self {
            Skin::Minimal => format!("font-family:{font};background:#ffffff;color:#111827"),
            Skin::Modern => format!("font-family:{font};background:#f8fafc;color:#0f172a"),
            Skin::Dark => format!("font-family:{font};background:#0f172a;color:#e2e8f0"),
        }
    }

    fn muted_color(self) -> &'static str {
        match self {
            Skin::Minimal => "#4b5563",
            Skin::Modern => "#475569",
            Skin::Dark => "#94a3b8",
        }
    }

    fn header_style(self, theme: &ThemeConfig) -> String {
        match self {
            Skin::Minimal => "border-bottom:2px solid #e5e7eb;padding:48px 32px;text-align:center"
                .to_string(),
            Skin::Modern => format!(
                "background:{};color:#ffffff;padding:56px 32px;text-align:center",
                theme.secondary
            ),
            Skin::Dark => format!(
                "border-bottom:2px solid {};padding:48px 32px;text-align:center",
                theme.primary
            ),
        }
    }
}

/// Renders the full portfolio subtree for the selected template.
///
/// Section rule: a section appears iff its visibility flag is true AND it has
/// content; an empty list renders nothing rather than an empty heading.
/// `section_order` is authoritative — flags only filter it.
pub fn render_portfolio(data: &PortfolioData, config: &PortfolioConfig) -> String {
    let skin = layout_for(config.template);
    let mut out = String::with_capacity(4096);
    engine::render_header(&mut out, data, config, skin);

    for section in &config.section_order {
        if !config.sections.is_visible(*section) || !has_content(data, *section) {
            continue;
        }
        engine::render_section(&mut out, data, config, skin, *section);
    }

    engine::close_root(&mut out);
    out
}

/// Whether a section has anything to show for this data model.
pub fn has_content(data: &PortfolioData, section: SectionId) -> bool {
    match section {
        SectionId::About => !data.personal_info.bio.trim().is_empty(),
        SectionId::Skills => !data.skills.is_empty(),
        SectionId::Education => !data.education.is_empty(),
        SectionId::Experience => !data.experience.is_empty(),
        SectionId::Projects => !data.projects.is_empty(),
        SectionId::Contact => {
            !data.contact.email.trim().is_empty() || !data.contact.phone.trim().is_empty()
        }
    }
}

/// Minimal HTML entity escaping for user text and attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::portfolio::{Project, Skill};
    use crate::store::sample::sample_portfolio;
    use uuid::Uuid;

    #[test]
    fn test_five_identifiers_resolve_to_three_skins() {
        assert_eq!(layout_for(TemplateId::Minimal), Skin::Minimal);
        assert_eq!(layout_for(TemplateId::Student), Skin::Minimal);
        assert_eq!(layout_for(TemplateId::Modern), Skin::Modern);
        assert_eq!(layout_for(TemplateId::Professional), Skin::Modern);
        assert_eq!(layout_for(TemplateId::Dark), Skin::Dark);
    }

    #[test]
    fn test_header_contains_full_name() {
        let mut data = PortfolioData::default();
        data.personal_info.full_name = "Jane Doe".to_string();
        let html = render_portfolio(&data, &PortfolioConfig::default());
        assert!(html.contains("Jane Doe"));
    }

    #[test]
    fn test_empty_projects_suppressed_even_when_visible() {
        let data = PortfolioData::default();
        let config = PortfolioConfig::default();
        assert!(config.sections.projects);
        let html = render_portfolio(&data, &config);
        assert!(!html.contains("Projects"));
    }

    #[test]
    fn test_hidden_section_suppressed_even_with_content() {
        let mut data = PortfolioData::default();
        data.skills = vec![Skill::named("Rust")];
        let mut config = PortfolioConfig::default();
        config.sections.skills = false;
        let html = render_portfolio(&data, &config);
        assert!(!html.contains("Rust"));
    }

    #[test]
    fn test_section_order_is_authoritative() {
        let data = sample_portfolio();
        let mut config = PortfolioConfig::default();
        config.section_order = vec![SectionId::Projects, SectionId::Skills];
        let html = render_portfolio(&data, &config);
        let projects_at = html.find("Projects").unwrap();
        let skills_at = html.find("Skills").unwrap();
        assert!(projects_at < skills_at);
        // Sections absent from the order never render.
        assert!(!html.contains("Education"));
    }

    #[test]
    fn test_current_role_shows_present() {
        let data = sample_portfolio();
        let html = render_portfolio(&data, &PortfolioConfig::default());
        assert!(html.contains("Present"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut data = PortfolioData::default();
        data.personal_info.full_name = "<script>alert(1)</script>".to_string();
        let html = render_portfolio(&data, &PortfolioConfig::default());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_theme_primary_is_inlined() {
        let mut data = PortfolioData::default();
        data.personal_info.title = "Engineer".to_string();
        let mut config = PortfolioConfig::default();
        config.theme.primary = "#ff0000".to_string();
        let html = render_portfolio(&data, &config);
        assert!(html.contains("#ff0000"));
    }

    #[test]
    fn test_duplicate_free_technologies_render_once() {
        let mut project = Project {
            id: Uuid::new_v4(),
            title: "Demo".to_string(),
            description: "desc".to_string(),
            technologies: vec![],
            github_url: None,
            live_url: None,
            image_url: None,
        };
        project.push_technology("Rust");
        project.push_technology("Rust");
        let mut data = PortfolioData::default();
        data.projects = vec![project];
        let html = render_portfolio(&data, &PortfolioConfig::default());
        assert_eq!(html.matches(">Rust<").count(), 1);
    }
}
