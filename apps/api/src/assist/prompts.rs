// Prompt templates for the assist gateway. Each capability keeps its prompt
// next to the code that sends it; cross-cutting fragments stay small because
// the raw model text is shown to the end user verbatim.

use super::ImproveKind;

/// Appended to every improve prompt so the reply needs no post-editing
/// beyond the defensive cleanup pass.
const IMPROVE_SUFFIX: &str =
    "Return ONLY the improved version without any explanation, labels, or extra text:";

pub fn improve_prompt(kind: ImproveKind, text: &str) -> String {
    let instruction = match kind {
        ImproveKind::Bio => {
            "Improve this professional bio to make it more engaging and professional. \
             Keep it concise (2-3 sentences)"
        }
        ImproveKind::Project => {
            "Improve this project description to be more impactful and clear"
        }
        ImproveKind::Summary => {
            "Create a professional summary based on this information"
        }
    };
    format!("{instruction}:\n\nOriginal: {text}\n\n{IMPROVE_SUFFIX}")
}

pub const CATEGORIZE_SYSTEM: &str =
    "You are a technical skills categorization expert. Categorize the provided \
     skills into appropriate categories such as Frontend, Backend, Database, \
     DevOps, Tools, Design, Soft Skills, etc. Return the result as a JSON object \
     where keys are category names and values are arrays of skills.";

pub fn categorize_prompt(skills: &[String]) -> String {
    format!(
        "Categorize these skills: {}\n\nReturn ONLY a valid JSON object with \
         categories as keys and arrays of skills as values.",
        skills.join(", ")
    )
}

pub const DESCRIBE_SYSTEM: &str =
    "You are a technical writer specializing in project descriptions. Create \
     compelling, concise project descriptions that highlight key features and \
     technical achievements.";

pub fn describe_prompt(title: &str, technologies: &[String]) -> String {
    format!(
        "Write a professional project description for \"{title}\" built with {}. \
         Keep it 2-3 sentences, focusing on key features and impact.",
        technologies.join(", ")
    )
}

pub const SUGGEST_SYSTEM: &str =
    "You are a career coach and portfolio expert. Provide specific, actionable \
     suggestions to improve a portfolio for the given role.";

pub fn suggest_prompt(role: &str, experience_lines: &[String]) -> String {
    format!(
        "Role: {role}\n\nExperience:\n{}\n\nProvide 5 specific suggestions to \
         improve this portfolio. Return as a JSON array of strings.",
        experience_lines.join("\n")
    )
}
