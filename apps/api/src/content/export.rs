//! Plain-text resume export.
//!
//! Renders the merged content model into ordered text blocks with a fixed
//! section order: header (name/description/url), summary, skills, work,
//! education, projects, contact. The summary may be authored with HTML
//! markup; the export strips tags and collapses whitespace.

use crate::content::model::MergedContent;

/// Renders the deterministic plain-text CV body. Ends with a single newline.
pub fn render_cv_text(content: &MergedContent) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(content.name.clone());
    lines.push(content.description.clone());
    if !content.url.is_empty() {
        lines.push(content.url.clone());
    }
    lines.push(String::new());

    let summary = strip_html(&content.summary);
    if !summary.trim().is_empty() {
        lines.push("Summary".to_string());
        lines.push(summary.trim().to_string());
        lines.push(String::new());
    }

    if !content.skills.is_empty() {
        lines.push("Skills".to_string());
        lines.push(content.skills.join(", "));
        lines.push(String::new());
    }

    if !content.work.is_empty() {
        lines.push("Work Experience".to_string());
        for w in &content.work {
            lines.push(format!("- {} — {}", w.company, w.title));
            let dates = join_dates(&w.start, &w.end);
            let loc = if w.location.is_empty() {
                String::new()
            } else {
                format!(" ({})", w.location)
            };
            if !dates.is_empty() || !loc.is_empty() {
                lines.push(format!("  {dates}{loc}"));
            }
            if !w.description.is_empty() {
                lines.push(format!("  {}", collapse_whitespace(&w.description)));
            }
            lines.push(String::new());
        }
    }

    if !content.education.is_empty() {
        lines.push("Education".to_string());
        for e in &content.education {
            if e.degree.is_empty() {
                lines.push(format!("- {}", e.school));
            } else {
                lines.push(format!("- {} — {}", e.school, e.degree));
            }
            let dates = join_dates(&e.start, &e.end);
            if !dates.is_empty() {
                lines.push(format!("  {dates}"));
            }
            lines.push(String::new());
        }
    }

    if !content.projects.is_empty() {
        lines.push("Projects".to_string());
        for p in &content.projects {
            if p.dates.is_empty() {
                lines.push(format!("- {}", p.title));
            } else {
                lines.push(format!("- {} — {}", p.title, p.dates));
            }
            if !p.description.is_empty() {
                lines.push(format!("  {}", collapse_whitespace(&p.description)));
            }
            if !p.technologies.is_empty() {
                lines.push(format!("  Tech: {}", p.technologies.join(", ")));
            }
            lines.push(String::new());
        }
    }

    if !content.contact.email.is_empty() || !content.contact.tel.is_empty() {
        lines.push("Contact".to_string());
        if !content.contact.email.is_empty() {
            lines.push(format!("Email: {}", content.contact.email));
        }
        if !content.contact.tel.is_empty() {
            lines.push(format!("Tel: {}", content.contact.tel));
        }
        lines.push(String::new());
    }

    let body = lines.join("\n");
    format!("{}\n", body.trim())
}

/// Attachment filename derived from the resolved name:
/// `"Manu de Quevedo"` → `"Manu-de-Quevedo-CV-en.txt"`.
pub fn cv_filename(name: &str) -> String {
    let dashed: Vec<&str> = name.split_whitespace().collect();
    format!("{}-CV-en.txt", dashed.join("-"))
}

fn join_dates(start: &str, end: &str) -> String {
    [start, end]
        .iter()
        .filter(|s| !s.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(" — ")
}

/// Removes `<...>` tag spans. Not a full HTML parser; summary markup is
/// simple inline formatting.
fn strip_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::data::static_content;
    use crate::content::merge::resolve_content;
    use crate::content::model::{Locale, OverlaySet};

    fn render_default() -> String {
        let statics = static_content();
        let merged = resolve_content(&statics, &OverlaySet::default(), Locale::En);
        render_cv_text(&merged)
    }

    #[test]
    fn test_section_order_is_fixed() {
        let body = render_default();
        let positions: Vec<usize> = ["Summary", "Skills", "Work Experience", "Education", "Projects", "Contact"]
            .iter()
            .map(|s| body.find(s).unwrap_or_else(|| panic!("missing section {s}")))
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render_default(), render_default());
    }

    #[test]
    fn test_header_comes_first() {
        let body = render_default();
        assert!(body.starts_with("Manu\n"));
        assert!(body.contains("https://manudequevedo.com"));
    }

    #[test]
    fn test_ends_with_single_newline() {
        let body = render_default();
        assert!(body.ends_with('\n'));
        assert!(!body.ends_with("\n\n"));
    }

    #[test]
    fn test_summary_html_is_stripped() {
        let statics = static_content();
        let overlay = OverlaySet {
            summary: Some("I build <b>fast</b> interfaces.".to_string()),
            ..Default::default()
        };
        let merged = resolve_content(&statics, &overlay, Locale::En);
        let body = render_cv_text(&merged);
        assert!(body.contains("I build fast interfaces."));
        assert!(!body.contains("<b>"));
    }

    #[test]
    fn test_work_entry_layout() {
        let body = render_default();
        assert!(body.contains("- Tata Consultancy Services — UI Developer"));
        assert!(body.contains("  May 2023 — Present (Remote)"));
    }

    #[test]
    fn test_project_tech_line() {
        let body = render_default();
        assert!(body.contains("  Tech: Next.js, TypeScript, TailwindCSS, GSAP, Resend"));
    }

    #[test]
    fn test_contact_block_present() {
        let body = render_default();
        assert!(body.contains("Email: contact@manudequevedo.com"));
        assert!(body.contains("Tel: +52 555 50 00 228"));
    }

    #[test]
    fn test_cv_filename_from_name() {
        assert_eq!(cv_filename("Manu"), "Manu-CV-en.txt");
        assert_eq!(cv_filename("Manu de Quevedo"), "Manu-de-Quevedo-CV-en.txt");
        assert_eq!(cv_filename("  Manu   Q  "), "Manu-Q-CV-en.txt");
    }

    #[test]
    fn test_strip_html_plain_text_untouched() {
        assert_eq!(strip_html("no markup here"), "no markup here");
    }
}
