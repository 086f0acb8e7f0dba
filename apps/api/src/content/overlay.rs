//! Translation overlay loading and identity-key validation.
//!
//! Overlay files are JSON, one per locale, bundled into the binary. Every
//! overlay record is keyed by its category's stable identity: the work or
//! project id, or the normalized school slug for education. Keys are
//! validated against the static record set at load time so a typo in a
//! translation file fails startup instead of silently dropping a record.

use anyhow::{bail, Context, Result};

use crate::content::data::static_content;
use crate::content::model::{Locale, OverlaySet, StaticContent};

const EN_OVERLAY: &str = include_str!("../../locales/en.json");
const ES_OVERLAY: &str = include_str!("../../locales/es.json");

/// The validated overlays for all supported locales.
#[derive(Debug, Clone)]
pub struct TranslationSet {
    pub en: OverlaySet,
    pub es: OverlaySet,
}

impl TranslationSet {
    pub fn for_locale(&self, locale: Locale) -> &OverlaySet {
        match locale {
            Locale::En => &self.en,
            Locale::Es => &self.es,
        }
    }
}

/// Loads and validates the bundled locale overlays.
pub fn load_default() -> Result<TranslationSet> {
    let statics = static_content();
    Ok(TranslationSet {
        en: load_overlay(EN_OVERLAY, &statics).context("locales/en.json")?,
        es: load_overlay(ES_OVERLAY, &statics).context("locales/es.json")?,
    })
}

fn load_overlay(raw: &str, statics: &StaticContent) -> Result<OverlaySet> {
    let overlay: OverlaySet = serde_json::from_str(raw)?;
    validate_keys(&overlay, statics)?;
    Ok(overlay)
}

/// Checks every overlay key against the static record set.
fn validate_keys(overlay: &OverlaySet, statics: &StaticContent) -> Result<()> {
    for key in overlay.work.keys() {
        if !statics.work.iter().any(|w| w.id == *key) {
            bail!("work overlay key '{key}' matches no static work entry");
        }
    }
    for key in overlay.education.keys() {
        if !statics.education.iter().any(|e| safe_key(&e.school) == *key) {
            bail!("education overlay key '{key}' matches no static school slug");
        }
    }
    for key in overlay.projects.keys() {
        let matched = statics
            .projects
            .iter()
            .any(|p| p.id == *key || safe_key(&p.title) == *key);
        if !matched {
            bail!("project overlay key '{key}' matches no static project id or title slug");
        }
    }
    Ok(())
}

/// Normalizes a natural key to a safe slug: lowercase, runs of
/// non-alphanumeric characters collapsed to `_`, edges trimmed.
/// `"llm.report"` → `"llm_report"`, `"UI Kit"` → `"ui_kit"`.
pub fn safe_key(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_sep = false;
    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_key_dots_and_spaces() {
        assert_eq!(safe_key("llm.report"), "llm_report");
        assert_eq!(safe_key("UI Kit"), "ui_kit");
    }

    #[test]
    fn test_safe_key_collapses_symbol_runs() {
        assert_eq!(safe_key("LLM — Report!"), "llm_report");
    }

    #[test]
    fn test_safe_key_trims_edges() {
        assert_eq!(safe_key("  hello  "), "hello");
        assert_eq!(safe_key("--x--"), "x");
    }

    #[test]
    fn test_safe_key_empty() {
        assert_eq!(safe_key(""), "");
        assert_eq!(safe_key("!!!"), "");
    }

    #[test]
    fn test_bundled_overlays_load_and_validate() {
        let set = load_default().expect("bundled overlays must validate");
        // Spanish overlay carries at least the profile texts
        assert!(set.es.description.is_some());
        assert!(set.es.summary.is_some());
    }

    #[test]
    fn test_unknown_work_key_rejected() {
        let statics = static_content();
        let raw = r#"{ "work": { "acme": { "title": "X" } } }"#;
        assert!(load_overlay(raw, &statics).is_err());
    }

    #[test]
    fn test_unknown_project_key_rejected() {
        let statics = static_content();
        let raw = r#"{ "projects": { "nope": { "description": "X" } } }"#;
        assert!(load_overlay(raw, &statics).is_err());
    }

    #[test]
    fn test_project_key_by_title_slug_accepted() {
        let statics = static_content();
        // "Bridge Capital" normalizes to bridge_capital
        let raw = r#"{ "projects": { "bridge_capital": { "description": "X" } } }"#;
        assert!(load_overlay(raw, &statics).is_ok());
    }
}
