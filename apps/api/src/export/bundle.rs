//! HTML bundle export — a self-contained archive of the rendered portfolio.
//!
//! The markup is a DOM snapshot taken at capture time (or a fresh server
//! render when the client sends none): frozen attributes survive, script
//! behavior does not. The shell's stylesheet is generic; theme colors are
//! already inlined in the snapshot and additionally exposed as `:root`
//! variables so hand-edits can reference them.

use std::io::{Cursor, Write};

use chrono::Utc;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::models::portfolio::PortfolioData;
use crate::models::render_config::PortfolioConfig;
use crate::render::escape_html;

use super::ExportError;

const GENERIC_STYLESHEET: &str = "\
* { margin: 0; padding: 0; box-sizing: border-box; }
body { line-height: 1.6; }
h1, h2, h3 { margin-bottom: 1rem; }
a { text-decoration: none; }
a:hover { text-decoration: underline; }
section { margin-bottom: 3rem; }
.skill-item, .project-card, .experience-item { margin-bottom: 1.5rem; }
@media (max-width: 768px) { main { padding: 10px; } }";

/// Wraps snapshot markup in a minimal standalone document.
pub fn document_shell(markup: &str, data: &PortfolioData, config: &PortfolioConfig) -> String {
    let title = escape_html(&data.personal_info.full_name);
    let description = escape_html(&data.personal_info.title);
    let theme = &config.theme;
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <meta name=\"description\" content=\"{description} - Professional Portfolio\">\n\
         <title>{title} - Portfolio</title>\n\
         <style>\n\
         :root {{ --primary: {primary}; --secondary: {secondary}; --accent: {accent}; }}\n\
         body {{ font-family: {font}; }}\n\
         {GENERIC_STYLESHEET}\n\
         </style>\n\
         </head>\n\
         <body>\n\
         {markup}\n\
         </body>\n\
         </html>\n",
        primary = theme.primary,
        secondary = theme.secondary,
        accent = theme.accent,
        font = theme.font.css_stack(),
    )
}

/// The plain-text usage guide shipped next to the exported page.
pub fn generate_readme(data: &PortfolioData) -> String {
    let name = &data.personal_info.full_name;
    let contact = &data.contact;
    format!(
        "# {name} - Portfolio\n\n\
         ## About\n\
         This portfolio was exported from the portfolio builder.\n\n\
         ## Setup\n\
         1. Extract the ZIP file\n\
         2. Open `index.html` in your browser\n\
         3. To deploy online, upload to GitHub Pages, Netlify Drop, or Vercel\n\n\
         ## Contents\n\
         - `index.html` - Main portfolio page\n\
         - `data.json` - Portfolio data in JSON format\n\
         - `README.md` - This file\n\n\
         ## Customization\n\
         Edit the HTML file directly to customize your portfolio.\n\n\
         ## Contact\n\
         - Email: {email}\n\
         - GitHub: {github}\n\
         - LinkedIn: {linkedin}\n\n\
         ---\n\
         Generated on {date}\n",
        email = contact.email,
        github = contact.github.as_deref().unwrap_or("N/A"),
        linkedin = contact.linkedin.as_deref().unwrap_or("N/A"),
        date = Utc::now().format("%Y-%m-%d"),
    )
}

/// Packages the document, usage guide and data dump into one archive.
pub fn build_bundle(
    markup: &str,
    data: &PortfolioData,
    config: &PortfolioConfig,
) -> Result<Vec<u8>, ExportError> {
    let html = document_shell(markup, data, config);
    let readme = generate_readme(data);
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| ExportError::Archive(e.to_string()))?;

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, contents) in [
        ("index.html", html.as_str()),
        ("README.md", readme.as_str()),
        ("data.json", json.as_str()),
    ] {
        writer
            .start_file(name, options)
            .and_then(|_| {
                writer
                    .write_all(contents.as_bytes())
                    .map_err(zip::result::ZipError::Io)
            })
            .map_err(|e| ExportError::Archive(e.to_string()))?;
    }

    let cursor = writer
        .finish()
        .map_err(|e| ExportError::Archive(e.to_string()))?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    fn read_entry(bytes: &[u8], name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        let mut entry = archive.by_name(name).unwrap();
        let mut contents = String::new();
        entry.read_to_string(&mut contents).unwrap();
        contents
    }

    #[test]
    fn test_bundle_contains_exactly_three_files() {
        let bytes =
            build_bundle("<div></div>", &PortfolioData::default(), &PortfolioConfig::default())
                .unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        assert_eq!(names.len(), 3);
        for expected in ["index.html", "README.md", "data.json"] {
            assert!(names.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn test_data_json_preserves_full_name_exactly() {
        let mut data = PortfolioData::default();
        data.personal_info.full_name = "A B".to_string();
        let bytes = build_bundle("<div></div>", &data, &PortfolioConfig::default()).unwrap();
        let json = read_entry(&bytes, "data.json");
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["personalInfo"]["fullName"], "A B");
        // Pretty-printed with 2-space indent.
        assert!(json.contains("\n  \"personalInfo\""));
    }

    #[test]
    fn test_shell_embeds_snapshot_and_theme_variables() {
        let mut config = PortfolioConfig::default();
        config.theme.primary = "#123456".to_string();
        let html = document_shell("<div id=\"snap\">x</div>", &PortfolioData::default(), &config);
        assert!(html.contains("<div id=\"snap\">x</div>"));
        assert!(html.contains("--primary: #123456"));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_readme_references_contact_fields() {
        let mut data = PortfolioData::default();
        data.personal_info.full_name = "Jane Doe".to_string();
        data.contact.email = "jane@example.com".to_string();
        let readme = generate_readme(&data);
        assert!(readme.contains("# Jane Doe - Portfolio"));
        assert!(readme.contains("jane@example.com"));
        assert!(readme.contains("LinkedIn: N/A"));
    }
}
