//! Content model — static records, translation overlays, and merged output.
//!
//! Static records are authored at build time (`content::data`) and are
//! locale-independent. Overlay records carry per-locale field overrides and
//! are matched to their static counterpart by a stable identity key: the
//! explicit `id` for work and projects, the normalized school slug for
//! education. The merge (`content::merge`) resolves every field to either an
//! overlay value, a static value, or a category placeholder.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ────────────────────────────────────────────────────────────────────────────
// Locale
// ────────────────────────────────────────────────────────────────────────────

/// Supported display locales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    /// Parses a locale tag, accepting region subtags (`es-MX` → `Es`).
    pub fn parse(tag: &str) -> Option<Locale> {
        let primary = tag.trim().split(['-', '_']).next().unwrap_or("");
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "es" => Some(Locale::Es),
            _ => None,
        }
    }

    /// Resolves the first supported locale from an `Accept-Language` header
    /// value, scanning tags in order.
    pub fn from_accept_language(header: &str) -> Option<Locale> {
        header
            .split(',')
            .filter_map(|part| part.split(';').next())
            .find_map(Locale::parse)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static records (build-time authored, locale-independent)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct StaticContent {
    pub profile: Profile,
    pub contact: ContactBlock,
    pub work: Vec<WorkEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: Vec<SkillGroup>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub url: String,
    pub location: String,
    pub location_link: String,
    pub description: String,
    pub summary: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactBlock {
    pub email: String,
    pub tel: String,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkEntry {
    /// Stable identity key; also indexes the company metadata table.
    pub id: String,
    pub company: String,
    pub href: String,
    pub location: String,
    pub title: String,
    pub logo_url: Option<String>,
    pub start: String,
    pub end: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationEntry {
    pub school: String,
    pub href: String,
    pub degree: String,
    pub logo_url: Option<String>,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectEntry {
    /// Stable identity key. Overlays may also match via the normalized
    /// title slug for backwards compatibility with older translation files.
    pub id: String,
    pub title: String,
    pub href: String,
    pub dates: String,
    pub status: Option<ProjectStatus>,
    /// Legacy flag from older data: `true` → in progress, `false` →
    /// completed. Ignored when `status` is set.
    pub active: Option<bool>,
    pub description: String,
    pub technologies: Vec<String>,
    pub links: Vec<ProjectLink>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectLink {
    #[serde(rename = "type")]
    pub kind: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillGroup {
    pub id: String,
    pub title: String,
    pub items: Vec<String>,
}

/// Per-company presentation metadata, keyed by the work entry id.
#[derive(Debug, Clone)]
pub struct CompanyMeta {
    pub logo_url: &'static str,
    #[allow(dead_code)]
    pub brand: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Overlay records (per-locale, loaded from locales/*.json)
// ────────────────────────────────────────────────────────────────────────────

/// One locale's translation overlay. Every field is optional; anything left
/// out falls back to the static record at merge time.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverlaySet {
    pub name: Option<String>,
    pub description: Option<String>,
    pub summary: Option<String>,
    pub location: Option<String>,
    /// Flat skill list for display/export; replaces the flattened static
    /// groups when present.
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub work: BTreeMap<String, WorkOverlay>,
    #[serde(default)]
    pub education: BTreeMap<String, EducationOverlay>,
    #[serde(default)]
    pub projects: BTreeMap<String, ProjectOverlay>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkOverlay {
    pub company: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EducationOverlay {
    pub degree: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectOverlay {
    pub title: Option<String>,
    pub dates: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
}

// ────────────────────────────────────────────────────────────────────────────
// Merged output (recomputed per request, never cached across locales)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedContent {
    pub locale: Locale,
    pub name: String,
    pub initials: String,
    pub url: String,
    pub location: String,
    pub description: String,
    pub summary: String,
    pub avatar_url: String,
    pub skills: Vec<String>,
    pub work: Vec<MergedWork>,
    pub education: Vec<MergedEducation>,
    pub projects: Vec<MergedProject>,
    pub contact: MergedContact,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedWork {
    pub id: String,
    pub company: String,
    pub href: String,
    pub location: String,
    pub title: String,
    pub logo_url: String,
    pub start: String,
    pub end: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedEducation {
    pub school: String,
    pub href: String,
    pub degree: String,
    pub logo_url: String,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedProject {
    pub id: String,
    pub title: String,
    pub href: String,
    pub dates: String,
    pub status: Option<ProjectStatus>,
    pub description: String,
    pub technologies: Vec<String>,
    pub links: Vec<MergedLink>,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedLink {
    #[serde(rename = "type")]
    pub kind: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedContact {
    pub email: String,
    pub tel: String,
    pub socials: Vec<MergedSocial>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedSocial {
    pub name: String,
    pub url: String,
}
