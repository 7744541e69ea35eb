//! AI-Assist Gateway — a uniform "text in, improved text / structured result
//! out" contract over the hosted model providers.
//!
//! Every capability has a fallible core (used by the HTTP surface, which maps
//! errors to 500s) and a degradation wrapper honoring the gateway contract:
//! failures are never data loss. Improve falls back to the unchanged input,
//! categorize to a single "Uncategorized" bucket holding every input skill,
//! generation to an empty string the caller must not write over.

pub mod handlers;
pub mod prompts;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::llm_client::{strip_code_fences, ChatModel, ChatRequest, ModelError};

/// Bucket that catches skills the model failed to place.
pub const FALLBACK_CATEGORY: &str = "Uncategorized";

/// Capability tag selecting an improve prompt template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImproveKind {
    Bio,
    Project,
    Summary,
}

/// Outcome of an improve round-trip. `success == false` means `content` is
/// the caller's input, unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ImproveOutcome {
    pub content: String,
    pub success: bool,
}

/// One experience entry flattened for the suggestion prompt.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceSummary {
    pub position: String,
    pub company: String,
    #[serde(default)]
    pub duration: String,
    pub description: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Improve
// ────────────────────────────────────────────────────────────────────────────

pub async fn improve_text(
    model: &dyn ChatModel,
    kind: ImproveKind,
    text: &str,
) -> Result<String, ModelError> {
    let raw = model
        .complete(ChatRequest {
            system: String::new(),
            user: prompts::improve_prompt(kind, text),
            temperature: 0.7,
            max_tokens: 1024,
        })
        .await?;
    Ok(cleanup_improved(&raw))
}

/// Gateway contract: on any failure the original text comes back unchanged
/// with the failure flagged, so callers can treat failure as a no-op.
pub async fn improve_or_keep(
    model: &dyn ChatModel,
    kind: ImproveKind,
    text: &str,
) -> ImproveOutcome {
    match improve_text(model, kind, text).await {
        Ok(content) => ImproveOutcome {
            content,
            success: true,
        },
        Err(err) => {
            warn!(class = err.taxonomy(), %err, "improve failed, keeping original text");
            ImproveOutcome {
                content: text.to_string(),
                success: false,
            }
        }
    }
}

static PREFIX_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(improved version:|improved:|enhanced:|better version:)\s*").unwrap()
});
static BOLD_LABEL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\*\*.*?\*\*\s*").unwrap());

/// Strips the prefix labels and quote/markdown artifacts models tend to add.
/// The result is shown to the end user verbatim.
fn cleanup_improved(raw: &str) -> String {
    let text = raw.trim();
    let text = PREFIX_LABEL.replace(text, "");
    let text = BOLD_LABEL.replace(&text, "");
    let text = text.trim();
    let text = text
        .strip_prefix(['"', '\''])
        .unwrap_or(text);
    let text = text
        .strip_suffix(['"', '\''])
        .unwrap_or(text);
    text.trim().to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// Categorize
// ────────────────────────────────────────────────────────────────────────────

pub async fn categorize_skills(
    model: &dyn ChatModel,
    skills: &[String],
) -> Result<BTreeMap<String, Vec<String>>, ModelError> {
    let raw = model
        .complete(ChatRequest {
            system: prompts::CATEGORIZE_SYSTEM.to_string(),
            user: prompts::categorize_prompt(skills),
            temperature: 0.3,
            max_tokens: 500,
        })
        .await?;
    let parsed: BTreeMap<String, Vec<String>> = serde_json::from_str(strip_code_fences(&raw))?;
    Ok(repair_categories(parsed, skills))
}

/// Gateway contract: every input skill ends up in exactly one bucket; on any
/// failure all of them land in the fallback bucket unchanged.
pub async fn categorize_or_uncategorized(
    model: &dyn ChatModel,
    skills: &[String],
) -> BTreeMap<String, Vec<String>> {
    match categorize_skills(model, skills).await {
        Ok(categories) => categories,
        Err(err) => {
            warn!(class = err.taxonomy(), %err, "categorize failed, using fallback bucket");
            let mut fallback = BTreeMap::new();
            fallback.insert(FALLBACK_CATEGORY.to_string(), skills.to_vec());
            fallback
        }
    }
}

/// Normalizes a model-produced partition so the union of all buckets equals
/// the input exactly: names the model invented are dropped, duplicates keep
/// their first placement, and skills the model lost are appended to the
/// fallback bucket in input order.
fn repair_categories(
    parsed: BTreeMap<String, Vec<String>>,
    input: &[String],
) -> BTreeMap<String, Vec<String>> {
    let mut placed: Vec<&String> = Vec::new();
    let mut repaired: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for (category, names) in parsed {
        let mut kept = Vec::new();
        for name in names {
            if let Some(original) = input.iter().find(|s| **s == name) {
                if !placed.contains(&original) {
                    placed.push(original);
                    kept.push(name);
                }
            }
        }
        if !kept.is_empty() {
            repaired.insert(category, kept);
        }
    }

    let missing: Vec<String> = input
        .iter()
        .filter(|s| !placed.contains(s))
        .cloned()
        .collect();
    if !missing.is_empty() {
        repaired
            .entry(FALLBACK_CATEGORY.to_string())
            .or_default()
            .extend(missing);
    }

    repaired
}

// ────────────────────────────────────────────────────────────────────────────
// Generate
// ────────────────────────────────────────────────────────────────────────────

pub async fn describe_project(
    model: &dyn ChatModel,
    title: &str,
    technologies: &[String],
) -> Result<String, ModelError> {
    let raw = model
        .complete(ChatRequest {
            system: prompts::DESCRIBE_SYSTEM.to_string(),
            user: prompts::describe_prompt(title, technologies),
            temperature: 0.7,
            max_tokens: 200,
        })
        .await?;
    Ok(raw.trim().to_string())
}

/// Gateway contract: empty string on failure. Callers must not overwrite
/// existing content with an empty result.
pub async fn describe_or_empty(
    model: &dyn ChatModel,
    title: &str,
    technologies: &[String],
) -> String {
    match describe_project(model, title, technologies).await {
        Ok(description) => description,
        Err(err) => {
            warn!(class = err.taxonomy(), %err, "project description generation failed");
            String::new()
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Suggest
// ────────────────────────────────────────────────────────────────────────────

pub async fn suggest_improvements(
    model: &dyn ChatModel,
    role: &str,
    experience: &[ExperienceSummary],
) -> Result<Vec<String>, ModelError> {
    let lines: Vec<String> = experience
        .iter()
        .map(|exp| {
            format!(
                "{} at {} ({}): {}",
                exp.position, exp.company, exp.duration, exp.description
            )
        })
        .collect();

    let raw = model
        .complete(ChatRequest {
            system: prompts::SUGGEST_SYSTEM.to_string(),
            user: prompts::suggest_prompt(role, &lines),
            temperature: 0.7,
            max_tokens: 500,
        })
        .await?;
    let suggestions: Vec<String> = serde_json::from_str(strip_code_fences(&raw))?;
    Ok(suggestions)
}

pub async fn suggest_or_none(
    model: &dyn ChatModel,
    role: &str,
    experience: &[ExperienceSummary],
) -> Vec<String> {
    match suggest_improvements(model, role, experience).await {
        Ok(suggestions) => suggestions,
        Err(err) => {
            warn!(class = err.taxonomy(), %err, "suggestion generation failed");
            Vec::new()
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Always replies with a canned string.
    struct CannedModel(&'static str);

    #[async_trait]
    impl ChatModel for CannedModel {
        async fn complete(&self, _request: ChatRequest) -> Result<String, ModelError> {
            Ok(self.0.to_string())
        }
    }

    /// Always fails as if the provider were unreachable.
    struct UnreachableModel;

    #[async_trait]
    impl ChatModel for UnreachableModel {
        async fn complete(&self, _request: ChatRequest) -> Result<String, ModelError> {
            Err(ModelError::Api {
                status: 503,
                message: "unreachable".to_string(),
            })
        }
    }

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_improve_identity_fallback_on_transport_failure() {
        let outcome = improve_or_keep(&UnreachableModel, ImproveKind::Bio, "my original bio").await;
        assert_eq!(outcome.content, "my original bio");
        assert!(!outcome.success);
    }

    #[tokio::test]
    async fn test_improve_cleans_model_artifacts() {
        let model = CannedModel("Improved version: \"A sharper bio.\"");
        let outcome = improve_or_keep(&model, ImproveKind::Bio, "x").await;
        assert!(outcome.success);
        assert_eq!(outcome.content, "A sharper bio.");
    }

    #[test]
    fn test_cleanup_strips_bold_label_and_quotes() {
        assert_eq!(cleanup_improved("**Bio:** 'better text'"), "better text");
        assert_eq!(cleanup_improved("enhanced: better text"), "better text");
        assert_eq!(cleanup_improved("plain"), "plain");
    }

    #[tokio::test]
    async fn test_categorize_fallback_keeps_every_skill() {
        let skills = strings(&["React", "Docker"]);
        let categories = categorize_or_uncategorized(&UnreachableModel, &skills).await;
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[FALLBACK_CATEGORY], skills);
    }

    #[tokio::test]
    async fn test_categorize_parses_fenced_json() {
        let model =
            CannedModel("```json\n{\"Frontend\": [\"React\"], \"DevOps\": [\"Docker\"]}\n```");
        let skills = strings(&["React", "Docker"]);
        let categories = categorize_skills(&model, &skills).await.unwrap();
        assert_eq!(categories["Frontend"], strings(&["React"]));
        assert_eq!(categories["DevOps"], strings(&["Docker"]));
    }

    #[tokio::test]
    async fn test_categorize_union_repaired_against_lossy_model() {
        // Model invents "Svelte", drops "Docker", duplicates "React".
        let model = CannedModel(
            "{\"Frontend\": [\"React\", \"Svelte\"], \"Tools\": [\"React\"]}",
        );
        let skills = strings(&["React", "Docker"]);
        let categories = categorize_skills(&model, &skills).await.unwrap();

        let mut union: Vec<String> = categories.values().flatten().cloned().collect();
        union.sort();
        let mut expected = skills.clone();
        expected.sort();
        assert_eq!(union, expected, "no skill gained or lost");
        assert_eq!(categories[FALLBACK_CATEGORY], strings(&["Docker"]));
    }

    #[tokio::test]
    async fn test_categorize_malformed_json_is_parse_failure() {
        let model = CannedModel("Frontend: React");
        let err = categorize_skills(&model, &strings(&["React"]))
            .await
            .unwrap_err();
        assert_eq!(err.taxonomy(), "parse");
    }

    #[tokio::test]
    async fn test_describe_empty_on_failure() {
        let description =
            describe_or_empty(&UnreachableModel, "Task Pilot", &strings(&["Rust"])).await;
        assert_eq!(description, "");
    }

    #[tokio::test]
    async fn test_suggest_parses_array_and_falls_back_to_none() {
        let model = CannedModel("[\"Add metrics to your bullets\"]");
        let suggestions = suggest_or_none(&model, "Backend Engineer", &[]).await;
        assert_eq!(suggestions, strings(&["Add metrics to your bullets"]));

        let none = suggest_or_none(&UnreachableModel, "Backend Engineer", &[]).await;
        assert!(none.is_empty());
    }
}
