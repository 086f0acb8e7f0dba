//! Content merge — combines static records with a locale overlay.
//!
//! Per field: overlay value if present, else static value, else the
//! category placeholder. Iteration always walks the static record set and
//! looks up the overlay counterpart by stable identity key, so the output
//! order is the authored order regardless of overlay key order. The merge
//! is pure and idempotent; callers recompute it per request.

use crate::content::data::company_meta;
use crate::content::model::{
    EducationEntry, EducationOverlay, Locale, MergedContact, MergedContent, MergedEducation,
    MergedLink, MergedProject, MergedSocial, MergedWork, OverlaySet, ProjectEntry, ProjectOverlay,
    ProjectStatus, StaticContent, WorkEntry, WorkOverlay,
};
use crate::content::overlay::safe_key;

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";
pub const PLACEHOLDER_HREF: &str = "#";

/// Resolves the full content model for one locale.
pub fn resolve_content(
    statics: &StaticContent,
    overlay: &OverlaySet,
    locale: Locale,
) -> MergedContent {
    MergedContent {
        locale,
        name: pick(overlay.name.as_ref(), &statics.profile.name),
        initials: statics.profile.initials.clone(),
        url: statics.profile.url.clone(),
        location: pick(overlay.location.as_ref(), &statics.profile.location),
        description: pick(overlay.description.as_ref(), &statics.profile.description),
        summary: pick(overlay.summary.as_ref(), &statics.profile.summary),
        avatar_url: image_or_placeholder(Some(&statics.profile.avatar_url)),
        skills: resolve_skills(statics, overlay),
        work: statics
            .work
            .iter()
            .map(|w| merge_work(w, overlay.work.get(&w.id)))
            .collect(),
        education: statics
            .education
            .iter()
            .map(|e| merge_education(e, overlay.education.get(&safe_key(&e.school))))
            .collect(),
        projects: statics
            .projects
            .iter()
            .map(|p| merge_project(p, project_overlay(overlay, p)))
            .collect(),
        contact: MergedContact {
            email: statics.contact.email.clone(),
            tel: statics.contact.tel.clone(),
            socials: statics
                .contact
                .socials
                .iter()
                .map(|s| MergedSocial {
                    name: s.name.clone(),
                    url: s.url.clone(),
                })
                .collect(),
        },
    }
}

/// Finds a project's overlay record by explicit id, falling back to the
/// normalized title slug (older translation files key projects that way).
pub fn project_overlay<'a>(overlay: &'a OverlaySet, entry: &ProjectEntry) -> Option<&'a ProjectOverlay> {
    overlay
        .projects
        .get(&entry.id)
        .or_else(|| overlay.projects.get(&safe_key(&entry.title)))
}

pub fn merge_work(entry: &WorkEntry, overlay: Option<&WorkOverlay>) -> MergedWork {
    let o = overlay.cloned().unwrap_or_default();
    MergedWork {
        id: entry.id.clone(),
        company: pick(o.company.as_ref(), &entry.company),
        href: href_or_placeholder(&entry.href),
        location: pick(o.location.as_ref(), &entry.location),
        title: pick(o.title.as_ref(), &entry.title),
        logo_url: resolve_work_logo(entry, &o),
        start: pick(o.start.as_ref(), &entry.start),
        end: pick(o.end.as_ref(), &entry.end),
        description: pick(o.description.as_ref(), &entry.description),
    }
}

pub fn merge_education(entry: &EducationEntry, overlay: Option<&EducationOverlay>) -> MergedEducation {
    let o = overlay.cloned().unwrap_or_default();
    MergedEducation {
        school: entry.school.clone(),
        href: href_or_placeholder(&entry.href),
        degree: pick(o.degree.as_ref(), &entry.degree),
        logo_url: image_or_placeholder(entry.logo_url.as_ref()),
        start: pick(o.start.as_ref(), &entry.start),
        end: pick(o.end.as_ref(), &entry.end),
    }
}

pub fn merge_project(entry: &ProjectEntry, overlay: Option<&ProjectOverlay>) -> MergedProject {
    let o = overlay.cloned().unwrap_or_default();
    MergedProject {
        id: entry.id.clone(),
        title: pick(o.title.as_ref(), &entry.title),
        href: href_or_placeholder(&entry.href),
        dates: pick(o.dates.as_ref(), &entry.dates),
        status: resolve_status(entry),
        description: pick(o.description.as_ref(), &entry.description),
        technologies: o
            .technologies
            .clone()
            .unwrap_or_else(|| entry.technologies.clone()),
        links: entry
            .links
            .iter()
            .map(|l| MergedLink {
                kind: l.kind.clone(),
                href: href_or_placeholder(&l.href),
            })
            .collect(),
        image: image_or_placeholder(entry.image.as_ref()),
    }
}

/// Explicit status wins; the legacy `active` bool maps `true` →
/// `in_progress` and `false` → `completed`.
pub fn resolve_status(entry: &ProjectEntry) -> Option<ProjectStatus> {
    entry.status.or_else(|| {
        entry.active.map(|active| {
            if active {
                ProjectStatus::InProgress
            } else {
                ProjectStatus::Completed
            }
        })
    })
}

/// Work logos resolve through three tiers: company metadata table →
/// static record → overlay record → generic placeholder.
fn resolve_work_logo(entry: &WorkEntry, overlay: &WorkOverlay) -> String {
    if let Some(meta) = company_meta(&entry.id) {
        return meta.logo_url.to_string();
    }
    entry
        .logo_url
        .clone()
        .or_else(|| overlay.logo_url.clone())
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
}

/// Overlay skill list when present, else the flattened static groups with
/// duplicates removed, authored order preserved.
fn resolve_skills(statics: &StaticContent, overlay: &OverlaySet) -> Vec<String> {
    if let Some(skills) = &overlay.skills {
        return skills.clone();
    }
    let mut flat: Vec<String> = Vec::new();
    for group in &statics.skills {
        for item in &group.items {
            if !flat.contains(item) {
                flat.push(item.clone());
            }
        }
    }
    flat
}

fn pick(overlay: Option<&String>, fallback: &str) -> String {
    match overlay {
        Some(v) => v.clone(),
        None => fallback.to_string(),
    }
}

fn href_or_placeholder(href: &str) -> String {
    if href.trim().is_empty() {
        PLACEHOLDER_HREF.to_string()
    } else {
        href.to_string()
    }
}

fn image_or_placeholder(image: Option<&String>) -> String {
    image
        .filter(|s| !s.trim().is_empty())
        .cloned()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
}
