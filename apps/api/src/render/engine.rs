//! The shared layout engine. One section-by-section assembly path serves all
//! skins; skins only contribute chrome (colors, header treatment).

use crate::models::portfolio::PortfolioData;
use crate::models::render_config::{PortfolioConfig, SectionId};

use super::{escape_html, Skin};

pub(super) fn render_header(
    out: &mut String,
    data: &PortfolioData,
    config: &PortfolioConfig,
    skin: Skin,
) {
    let theme = &config.theme;
    out.push_str(&format!(
        "<div id=\"portfolio-root\" class=\"portfolio portfolio--{}\" style=\"{}\">\n",
        skin.class_name(),
        skin.root_style(theme)
    ));
    out.push_str(&format!("<header style=\"{}\">\n", skin.header_style(theme)));

    if let Some(photo) = &data.personal_info.profile_photo {
        out.push_str(&format!(
            "<img class=\"profile-photo\" src=\"{}\" alt=\"{}\" \
             style=\"width:128px;height:128px;border-radius:50%;object-fit:cover;\
             border:4px solid {};margin-bottom:24px\">\n",
            escape_html(photo),
            escape_html(&data.personal_info.full_name),
            theme.primary
        ));
    }

    let name = if data.personal_info.full_name.is_empty() {
        "Your Name"
    } else {
        &data.personal_info.full_name
    };
    let title = if data.personal_info.title.is_empty() {
        "Your Professional Title"
    } else {
        &data.personal_info.title
    };

    out.push_str(&format!(
        "<h1 style=\"font-size:2.25rem;margin:0 0 8px\">{}</h1>\n",
        escape_html(name)
    ));
    // Modern headers sit on a dark band; the title keeps the accent there.
    let title_color = match skin {
        Skin::Modern => &theme.accent,
        _ => &theme.primary,
    };
    out.push_str(&format!(
        "<p class=\"headline\" style=\"font-size:1.25rem;margin:0;color:{}\">{}</p>\n",
        title_color,
        escape_html(title)
    ));
    out.push_str("</header>\n<main style=\"max-width:896px;margin:0 auto;padding:48px 32px\">\n");
}

pub(super) fn close_root(out: &mut String) {
    out.push_str("</main>\n</div>\n");
}

pub(super) fn render_section(
    out: &mut String,
    data: &PortfolioData,
    config: &PortfolioConfig,
    skin: Skin,
    section: SectionId,
) {
    match section {
        SectionId::About => about(out, data, config, skin),
        SectionId::Skills => skills(out, data, config, skin),
        SectionId::Education => education(out, data, config, skin),
        SectionId::Experience => experience(out, data, config, skin),
        SectionId::Projects => projects(out, data, config, skin),
        SectionId::Contact => contact(out, data, config, skin),
    }
}

fn open_section(out: &mut String, config: &PortfolioConfig, name: &str, heading: &str) {
    out.push_str(&format!(
        "<section class=\"section section--{name}\" style=\"margin-bottom:48px\">\n\
         <h2 style=\"font-size:1.5rem;border-bottom:2px solid {};padding-bottom:8px;\
         margin:0 0 24px\">{heading}</h2>\n",
        config.theme.primary
    ));
}

fn about(out: &mut String, data: &PortfolioData, config: &PortfolioConfig, skin: Skin) {
    open_section(out, config, "about", "About");
    out.push_str(&format!(
        "<p style=\"color:{};line-height:1.6\">{}</p>\n</section>\n",
        skin.muted_color(),
        escape_html(&data.personal_info.bio)
    ));
}

fn skills(out: &mut String, data: &PortfolioData, config: &PortfolioConfig, _skin: Skin) {
    open_section(out, config, "skills", "Skills");
    out.push_str("<div style=\"display:flex;flex-wrap:wrap;gap:8px\">\n");
    for skill in &data.skills {
        out.push_str(&format!(
            "<span class=\"skill-item\" style=\"padding:8px 16px;border-radius:8px;\
             font-size:0.875rem;background:{}20;color:{}\">{}</span>\n",
            config.theme.primary,
            config.theme.primary,
            escape_html(&skill.name)
        ));
    }
    out.push_str("</div>\n</section>\n");
}

fn experience(out: &mut String, data: &PortfolioData, config: &PortfolioConfig, skin: Skin) {
    open_section(out, config, "experience", "Experience");
    for exp in &data.experience {
        let end = if exp.current { "Present" } else { &exp.end_date };
        out.push_str(&format!(
            "<div class=\"experience-item\" style=\"border-left:2px solid {};\
             padding-left:24px;margin-bottom:24px\">\n\
             <h3 style=\"font-size:1.25rem;margin:0\">{}</h3>\n\
             <p style=\"color:{};margin:4px 0\">{}</p>\n\
             <p class=\"dates\" style=\"font-size:0.875rem;color:{};margin:0 0 8px\">{} - {}</p>\n\
             <p style=\"margin:0\">{}</p>\n",
            config.theme.primary,
            escape_html(&exp.position),
            skin.muted_color(),
            escape_html(&exp.company),
            skin.muted_color(),
            escape_html(&exp.start_date),
            escape_html(end),
            escape_html(&exp.description)
        ));
        if !exp.achievements.is_empty() {
            out.push_str("<ul style=\"margin:8px 0 0;padding-left:20px\">\n");
            for achievement in &exp.achievements {
                out.push_str(&format!(
                    "<li style=\"font-size:0.875rem;color:{}\">{}</li>\n",
                    skin.muted_color(),
                    escape_html(achievement)
                ));
            }
            out.push_str("</ul>\n");
        }
        out.push_str("</div>\n");
    }
    out.push_str("</section>\n");
}

fn education(out: &mut String, data: &PortfolioData, config: &PortfolioConfig, skin: Skin) {
    open_section(out, config, "education", "Education");
    for edu in &data.education {
        let gpa = edu
            .gpa
            .as_deref()
            .map(|g| format!(" &bull; GPA: {}", escape_html(g)))
            .unwrap_or_default();
        out.push_str(&format!(
            "<div class=\"education-item\" style=\"margin-bottom:16px\">\n\
             <h3 style=\"font-size:1.125rem;margin:0\">{} in {}</h3>\n\
             <p style=\"color:{};margin:4px 0\">{}</p>\n\
             <p class=\"dates\" style=\"font-size:0.875rem;color:{};margin:0\">{} - {}{}</p>\n",
            escape_html(&edu.degree),
            escape_html(&edu.field),
            skin.muted_color(),
            escape_html(&edu.institution),
            skin.muted_color(),
            escape_html(&edu.start_date),
            escape_html(&edu.end_date),
            gpa
        ));
        if let Some(description) = &edu.description {
            out.push_str(&format!(
                "<p style=\"font-size:0.875rem;margin:4px 0 0\">{}</p>\n",
                escape_html(description)
            ));
        }
        out.push_str("</div>\n");
    }
    out.push_str("</section>\n");
}

fn projects(out: &mut String, data: &PortfolioData, config: &PortfolioConfig, skin: Skin) {
    open_section(out, config, "projects", "Projects");
    let card_style = match skin {
        Skin::Dark => "border:1px solid #1e293b;background:#1e293b40",
        _ => "border:1px solid #e5e7eb",
    };
    for project in &data.projects {
        out.push_str(&format!(
            "<div class=\"project-card\" style=\"{card_style};border-radius:8px;\
             padding:16px;margin-bottom:24px\">\n\
             <h3 style=\"font-size:1.25rem;margin:0 0 8px\">{}</h3>\n\
             <p style=\"color:{};margin:0 0 12px\">{}</p>\n",
            escape_html(&project.title),
            skin.muted_color(),
            escape_html(&project.description)
        ));
        if !project.technologies.is_empty() {
            out.push_str("<div style=\"display:flex;flex-wrap:wrap;gap:8px;margin-bottom:12px\">\n");
            for tech in &project.technologies {
                out.push_str(&format!(
                    "<span class=\"tech-tag\" style=\"padding:4px 12px;border-radius:9999px;\
                     font-size:0.875rem;background:{}20\">{}</span>\n",
                    config.theme.accent,
                    escape_html(tech)
                ));
            }
            out.push_str("</div>\n");
        }
        let mut links = Vec::new();
        if let Some(url) = &project.github_url {
            links.push(("GitHub", url));
        }
        if let Some(url) = &project.live_url {
            links.push(("Live Demo", url));
        }
        if !links.is_empty() {
            out.push_str("<div style=\"display:flex;gap:16px;font-size:0.875rem\">\n");
            for (label, url) in links {
                out.push_str(&format!(
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" \
                     style=\"color:{}\">{label}</a>\n",
                    escape_html(url),
                    config.theme.primary
                ));
            }
            out.push_str("</div>\n");
        }
        out.push_str("</div>\n");
    }
    out.push_str("</section>\n");
}

fn contact(out: &mut String, data: &PortfolioData, config: &PortfolioConfig, skin: Skin) {
    open_section(out, config, "contact", "Contact");
    out.push_str("<ul style=\"list-style:none;margin:0;padding:0;line-height:2\">\n");
    let contact = &data.contact;
    if !contact.email.is_empty() {
        out.push_str(&format!(
            "<li>Email: <a href=\"mailto:{0}\" style=\"color:{1}\">{0}</a></li>\n",
            escape_html(&contact.email),
            config.theme.primary
        ));
    }
    if !contact.phone.is_empty() {
        out.push_str(&format!("<li>Phone: {}</li>\n", escape_html(&contact.phone)));
    }
    for (label, value) in [
        ("LinkedIn", &contact.linkedin),
        ("GitHub", &contact.github),
        ("Twitter", &contact.twitter),
        ("Website", &contact.website),
    ] {
        if let Some(url) = value {
            out.push_str(&format!(
                "<li>{label}: <a href=\"{0}\" style=\"color:{1}\">{0}</a></li>\n",
                escape_html(url),
                config.theme.primary
            ));
        }
    }
    if let Some(location) = &contact.location {
        out.push_str(&format!(
            "<li style=\"color:{}\">{}</li>\n",
            skin.muted_color(),
            escape_html(location)
        ));
    }
    out.push_str("</ul>\n</section>\n");
}
