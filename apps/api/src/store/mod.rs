//! Portfolio State Store — the single source of truth for a builder session.
//!
//! All mutation goes through named operations so every change is an atomic,
//! observable transition; nothing outside this module writes fields directly.
//! Operations are synchronous and infallible: inputs are trusted as already
//! validated by the form layer. Change notification is push-based through a
//! `watch` revision channel that renderers subscribe to.

pub mod handlers;
pub mod sample;
pub mod sessions;

use std::collections::HashMap;

use serde::Deserialize;
use tokio::sync::watch;
use uuid::Uuid;

use crate::models::portfolio::{Education, Experience, PortfolioData, Project, Skill};
use crate::models::render_config::{
    FontChoice, PortfolioConfig, SectionId, SectionToggles, TemplateId, ThemeConfig,
};

// ────────────────────────────────────────────────────────────────────────────
// Partial-update payloads (shallow-merge semantics)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfoPatch {
    pub full_name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub profile_photo: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPatch {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub twitter: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePatch {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
    pub font: Option<FontChoice>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionTogglesPatch {
    pub about: Option<bool>,
    pub skills: Option<bool>,
    pub education: Option<bool>,
    pub experience: Option<bool>,
    pub projects: Option<bool>,
    pub contact: Option<bool>,
}

/// Top-level config patch. Nested objects replace wholesale when present;
/// fine-grained theme/section merging goes through the dedicated operations.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigPatch {
    pub template: Option<TemplateId>,
    pub theme: Option<ThemeConfig>,
    pub sections: Option<SectionToggles>,
    pub section_order: Option<Vec<SectionId>>,
}

// ────────────────────────────────────────────────────────────────────────────
// Assist tickets
// ────────────────────────────────────────────────────────────────────────────

/// A store field that an AI-assist round-trip may write back into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssistField {
    Bio,
    ProjectDescription(Uuid),
}

/// Monotonic per-field sequence number issued when an assist round-trip
/// starts. A completion is applied only if its ticket is still the newest
/// for that field, so a slow first response can never clobber the result of
/// a later request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssistTicket(u64);

// ────────────────────────────────────────────────────────────────────────────
// The store
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct PortfolioStore {
    data: PortfolioData,
    config: PortfolioConfig,
    revision: u64,
    revision_tx: watch::Sender<u64>,
    assist_seq: HashMap<AssistField, u64>,
}

impl Default for PortfolioStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PortfolioStore {
    pub fn new() -> Self {
        let (revision_tx, _) = watch::channel(0);
        Self {
            data: PortfolioData::default(),
            config: PortfolioConfig::default(),
            revision: 0,
            revision_tx,
            assist_seq: HashMap::new(),
        }
    }

    pub fn data(&self) -> &PortfolioData {
        &self.data
    }

    pub fn config(&self) -> &PortfolioConfig {
        &self.config
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Subscribes to change notification. The receiver observes the revision
    /// counter; every named operation bumps it exactly once.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision_tx.subscribe()
    }

    fn bump(&mut self) {
        self.revision += 1;
        // Nobody listening is fine; sessions without a live preview still mutate.
        let _ = self.revision_tx.send(self.revision);
    }

    // ── content operations ──────────────────────────────────────────────────

    pub fn update_personal_info(&mut self, patch: PersonalInfoPatch) {
        let info = &mut self.data.personal_info;
        if let Some(v) = patch.full_name {
            info.full_name = v;
        }
        if let Some(v) = patch.title {
            info.title = v;
        }
        if let Some(v) = patch.bio {
            info.bio = v;
        }
        if let Some(v) = patch.profile_photo {
            info.profile_photo = Some(v);
        }
        self.bump();
    }

    pub fn update_contact(&mut self, patch: ContactPatch) {
        let contact = &mut self.data.contact;
        if let Some(v) = patch.email {
            contact.email = v;
        }
        if let Some(v) = patch.phone {
            contact.phone = v;
        }
        if let Some(v) = patch.linkedin {
            contact.linkedin = Some(v);
        }
        if let Some(v) = patch.github {
            contact.github = Some(v);
        }
        if let Some(v) = patch.twitter {
            contact.twitter = Some(v);
        }
        if let Some(v) = patch.website {
            contact.website = Some(v);
        }
        if let Some(v) = patch.location {
            contact.location = Some(v);
        }
        self.bump();
    }

    /// Wholesale replace. Callers compute the next full list; add/edit/delete
    /// is form-layer work, not store work.
    pub fn update_skills(&mut self, skills: Vec<Skill>) {
        self.data.skills = skills;
        self.bump();
    }

    pub fn update_education(&mut self, education: Vec<Education>) {
        self.data.education = education;
        self.bump();
    }

    pub fn update_experience(&mut self, experience: Vec<Experience>) {
        self.data.experience = experience;
        self.bump();
    }

    pub fn update_projects(&mut self, projects: Vec<Project>) {
        self.data.projects = projects;
        self.bump();
    }

    // ── config operations ───────────────────────────────────────────────────

    pub fn update_config(&mut self, patch: ConfigPatch) {
        if let Some(v) = patch.template {
            self.config.template = v;
        }
        if let Some(v) = patch.theme {
            self.config.theme = v;
        }
        if let Some(v) = patch.sections {
            self.config.sections = v;
        }
        if let Some(v) = patch.section_order {
            self.config.section_order = v;
        }
        self.bump();
    }

    pub fn update_theme(&mut self, patch: ThemePatch) {
        let theme = &mut self.config.theme;
        if let Some(v) = patch.primary {
            theme.primary = v;
        }
        if let Some(v) = patch.secondary {
            theme.secondary = v;
        }
        if let Some(v) = patch.accent {
            theme.accent = v;
        }
        if let Some(v) = patch.font {
            theme.font = v;
        }
        self.bump();
    }

    pub fn update_sections(&mut self, patch: SectionTogglesPatch) {
        let sections = &mut self.config.sections;
        if let Some(v) = patch.about {
            sections.about = v;
        }
        if let Some(v) = patch.skills {
            sections.skills = v;
        }
        if let Some(v) = patch.education {
            sections.education = v;
        }
        if let Some(v) = patch.experience {
            sections.experience = v;
        }
        if let Some(v) = patch.projects {
            sections.projects = v;
        }
        if let Some(v) = patch.contact {
            sections.contact = v;
        }
        self.bump();
    }

    pub fn update_section_order(&mut self, order: Vec<SectionId>) {
        self.config.section_order = order;
        self.bump();
    }

    // ── lifecycle operations ────────────────────────────────────────────────

    /// Replaces the entire content model in one atomic transition. Config is
    /// untouched; onboarding demos keep the user's template choice.
    pub fn load_sample_data(&mut self, data: PortfolioData) {
        self.data = data;
        self.bump();
    }

    /// Restores content and config to their default empty state. Idempotent
    /// and independent of prior mutation history.
    pub fn reset(&mut self) {
        self.data = PortfolioData::default();
        self.config = PortfolioConfig::default();
        self.assist_seq.clear();
        self.bump();
    }

    // ── assist ticket guard ─────────────────────────────────────────────────

    /// Marks the start of an assist round-trip for `field` and invalidates
    /// any ticket issued earlier for the same field.
    pub fn issue_assist_ticket(&mut self, field: AssistField) -> AssistTicket {
        let seq = self.assist_seq.entry(field).or_insert(0);
        *seq += 1;
        AssistTicket(*seq)
    }

    /// Applies an assist completion only if `ticket` is still the newest for
    /// its field. Returns whether the write happened.
    pub fn apply_assist(
        &mut self,
        field: AssistField,
        ticket: AssistTicket,
        apply: impl FnOnce(&mut PortfolioData),
    ) -> bool {
        if self.assist_seq.get(&field).copied() != Some(ticket.0) {
            return false;
        }
        apply(&mut self.data);
        self.bump();
        true
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_personal_info_shallow_merge_leaves_other_fields() {
        let mut store = PortfolioStore::new();
        store.update_personal_info(PersonalInfoPatch {
            full_name: Some("Jane Doe".to_string()),
            ..Default::default()
        });
        store.update_personal_info(PersonalInfoPatch {
            title: Some("Engineer".to_string()),
            ..Default::default()
        });
        assert_eq!(store.data().personal_info.full_name, "Jane Doe");
        assert_eq!(store.data().personal_info.title, "Engineer");
        assert_eq!(store.data().personal_info.bio, "");
    }

    #[test]
    fn test_sequential_patches_equal_iterative_merge() {
        // Applying patches in order must equal folding each partial into the
        // prior state, one field group at a time.
        let mut store = PortfolioStore::new();
        store.update_contact(ContactPatch {
            email: Some("a@b.c".to_string()),
            ..Default::default()
        });
        store.update_contact(ContactPatch {
            phone: Some("123".to_string()),
            github: Some("https://github.com/jane".to_string()),
            ..Default::default()
        });
        store.update_contact(ContactPatch {
            email: Some("new@b.c".to_string()),
            ..Default::default()
        });

        let contact = &store.data().contact;
        assert_eq!(contact.email, "new@b.c");
        assert_eq!(contact.phone, "123");
        assert_eq!(contact.github.as_deref(), Some("https://github.com/jane"));
    }

    #[test]
    fn test_skills_replace_after_filter() {
        let mut store = PortfolioStore::new();
        store.update_skills(vec![Skill::named("React"), Skill::named("Go")]);
        let next: Vec<Skill> = store
            .data()
            .skills
            .iter()
            .filter(|s| s.name != "Go")
            .cloned()
            .collect();
        store.update_skills(next);
        assert_eq!(store.data().skills, vec![Skill::named("React")]);
    }

    #[test]
    fn test_reset_restores_defaults_after_any_history() {
        let mut store = PortfolioStore::new();
        store.update_personal_info(PersonalInfoPatch {
            full_name: Some("X".to_string()),
            ..Default::default()
        });
        store.update_skills(vec![Skill::named("Rust")]);
        store.update_theme(ThemePatch {
            primary: Some("#000000".to_string()),
            ..Default::default()
        });
        store.reset();
        assert_eq!(*store.data(), PortfolioData::default());
        assert_eq!(*store.config(), PortfolioConfig::default());

        // Idempotent.
        store.reset();
        assert_eq!(*store.data(), PortfolioData::default());
    }

    #[test]
    fn test_load_sample_data_replaces_content_only() {
        let mut store = PortfolioStore::new();
        store.update_config(ConfigPatch {
            template: Some(TemplateId::Dark),
            ..Default::default()
        });
        store.load_sample_data(sample::sample_portfolio());
        assert!(!store.data().skills.is_empty());
        assert_eq!(store.config().template, TemplateId::Dark);
    }

    #[test]
    fn test_every_operation_bumps_revision_once() {
        let mut store = PortfolioStore::new();
        let rx = store.subscribe();
        store.update_skills(vec![]);
        store.update_section_order(vec![SectionId::Contact]);
        assert_eq!(store.revision(), 2);
        assert_eq!(*rx.borrow(), 2);
    }

    #[test]
    fn test_stale_assist_ticket_is_rejected() {
        let mut store = PortfolioStore::new();
        let first = store.issue_assist_ticket(AssistField::Bio);
        let second = store.issue_assist_ticket(AssistField::Bio);

        // The newer round-trip lands first.
        assert!(store.apply_assist(AssistField::Bio, second, |data| {
            data.personal_info.bio = "newer".to_string();
        }));
        // The slow first response must not clobber it.
        assert!(!store.apply_assist(AssistField::Bio, first, |data| {
            data.personal_info.bio = "older".to_string();
        }));
        assert_eq!(store.data().personal_info.bio, "newer");
    }

    #[test]
    fn test_assist_tickets_are_per_field() {
        let mut store = PortfolioStore::new();
        let id = Uuid::new_v4();
        let bio = store.issue_assist_ticket(AssistField::Bio);
        let _proj = store.issue_assist_ticket(AssistField::ProjectDescription(id));
        // A newer ticket on a different field does not invalidate this one.
        assert!(store.apply_assist(AssistField::Bio, bio, |data| {
            data.personal_info.bio = "kept".to_string();
        }));
    }
}
