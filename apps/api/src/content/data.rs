//! Build-time authored static content. Locale-independent; the canonical
//! source every overlay merges onto.

use crate::content::model::{
    CompanyMeta, ContactBlock, EducationEntry, Profile, ProjectEntry, ProjectLink, ProjectStatus,
    SkillGroup, SocialLink, StaticContent, WorkEntry,
};

/// Per-company presentation metadata. First tier of logo resolution.
pub fn company_meta(id: &str) -> Option<CompanyMeta> {
    let (logo_url, brand) = match id {
        "tcs" => ("/tcs.png", "TCS"),
        "concentrix" => ("/concentrix.png", "Concentrix"),
        "quiubas" => ("/quiubas.png", "Quiubas"),
        "linio" => ("/linio.png", "Linio"),
        _ => return None,
    };
    Some(CompanyMeta { logo_url, brand })
}

/// The full static record set. Rebuilt per call; merged output is never
/// cached across locales.
pub fn static_content() -> StaticContent {
    StaticContent {
        profile: Profile {
            name: "Manu".into(),
            initials: "MQ".into(),
            url: "https://manudequevedo.com".into(),
            location: "Querétaro, Mexico".into(),
            location_link: "https://www.google.com/maps/place/Querétaro".into(),
            description: "Frontend engineer and UI developer focused on clean design systems, \
                          fast user experiences, and practical product delivery."
                .into(),
            summary: "I build interfaces and systems that are clear, fast, and measurable — \
                      always with a product mindset."
                .into(),
            avatar_url: "/me.jpg".into(),
        },
        contact: ContactBlock {
            email: "contact@manudequevedo.com".into(),
            tel: "+52 555 50 00 228".into(),
            socials: vec![
                SocialLink {
                    name: "GitHub".into(),
                    url: "https://github.com/manudequevedo".into(),
                },
                SocialLink {
                    name: "LinkedIn".into(),
                    url: "https://www.linkedin.com/in/manudequevedo/".into(),
                },
                SocialLink {
                    name: "Send Email".into(),
                    url: "mailto:contact@manudequevedo.com".into(),
                },
            ],
        },
        work: vec![
            WorkEntry {
                id: "tcs".into(),
                company: "Tata Consultancy Services".into(),
                href: "https://www.tcs.com/".into(),
                location: "Remote".into(),
                title: "UI Developer".into(),
                logo_url: None,
                start: "May 2023".into(),
                end: "Present".into(),
                description: "AEM & Tridion content delivery, fragments, and migration support. \
                              Cross-team collaboration to improve delivery accuracy."
                    .into(),
            },
            WorkEntry {
                id: "concentrix".into(),
                company: "Concentrix (formerly ProKarma)".into(),
                href: "https://www.concentrix.com/".into(),
                location: "Remote".into(),
                title: "Software Engineer / ServiceNow Developer".into(),
                logo_url: None,
                start: "Sept 2019".into(),
                end: "Apr 2023".into(),
                description: "Angular & Node microservices; monitoring with Grafana/Splunk; \
                              ServiceNow admin & workflows."
                    .into(),
            },
            WorkEntry {
                id: "quiubas".into(),
                company: "Quiubas".into(),
                href: "https://www.quiubas.com/".into(),
                location: "Mexico City, MX".into(),
                title: "Frontend Developer".into(),
                logo_url: None,
                start: "2018".into(),
                end: "2019".into(),
                description: "UI implementation, dashboards and messaging flows; performance \
                              and UX improvements."
                    .into(),
            },
            WorkEntry {
                id: "linio".into(),
                company: "Linio México".into(),
                href: "https://www.linio.com.mx/".into(),
                location: "Mexico City, MX".into(),
                title: "Frontend Developer".into(),
                logo_url: None,
                start: "2017".into(),
                end: "2018".into(),
                description: "E-commerce frontend features, component library usage, and \
                              conversion-focused UI changes."
                    .into(),
            },
        ],
        education: vec![
            EducationEntry {
                school: "Southern New Hampshire University".into(),
                href: "https://es.snhu.edu/".into(),
                degree: "Bachelor's in Computer Science".into(),
                logo_url: Some("/snhu.png".into()),
                start: "2023".into(),
                end: "2024".into(),
            },
            EducationEntry {
                school: "Coursera".into(),
                href: "https://coursera.org".into(),
                degree: "Google Cybersecurity Specialization".into(),
                logo_url: Some("/coursera.png".into()),
                start: "2025".into(),
                end: "In Progress".into(),
            },
            EducationEntry {
                school: "IronHack".into(),
                href: "https://ironhack.com".into(),
                degree: "Full Stack Web Development Bootcamp".into(),
                logo_url: Some("/ironhack.png".into()),
                start: "2018".into(),
                end: "2018".into(),
            },
        ],
        projects: vec![
            ProjectEntry {
                id: "bridgecapital".into(),
                title: "Bridge Capital".into(),
                href: "https://bridgecapital.mx".into(),
                dates: "May 2025 – June 2025".into(),
                status: Some(ProjectStatus::Completed),
                active: None,
                description: "Localized portfolio (ES/EN) with animated dock, projects grid, \
                              and A11y-friendly UI."
                    .into(),
                technologies: vec![
                    "Next.js".into(),
                    "TypeScript".into(),
                    "TailwindCSS".into(),
                    "GSAP".into(),
                    "Resend".into(),
                ],
                links: vec![ProjectLink {
                    kind: "Website".into(),
                    href: "https://bridgecapital.mx".into(),
                }],
                image: Some("/bridgecapital.png".into()),
            },
            ProjectEntry {
                id: "noctra".into(),
                title: "Noctra Studio".into(),
                href: "https://noctra.studio".into(),
                dates: "2025 – Present".into(),
                status: Some(ProjectStatus::InProgress),
                active: None,
                description: "Studio focused on performant frontends and brand systems for \
                              startups and non-profits."
                    .into(),
                technologies: vec![
                    "Next.js".into(),
                    "TypeScript".into(),
                    "TailwindCSS".into(),
                    "Design Systems".into(),
                ],
                links: vec![
                    ProjectLink {
                        kind: "Website".into(),
                        href: "https://noctra.studio".into(),
                    },
                    ProjectLink {
                        kind: "GitHub".into(),
                        href: "https://github.com/ManudeQuevedo/noctra-studio".into(),
                    },
                ],
                image: Some("/noctra.png".into()),
            },
            ProjectEntry {
                id: "woodax".into(),
                title: "Woodax Design".into(),
                href: "Website is coming soon!".into(),
                dates: "Aug. 2025 – Present".into(),
                status: Some(ProjectStatus::InProgress),
                active: None,
                description: "Brand site and product showcase with fast, minimal UI and CMS \
                              integration."
                    .into(),
                technologies: vec![
                    "Next.js".into(),
                    "TypeScript".into(),
                    "TailwindCSS".into(),
                    "next-intl".into(),
                    "UI/UX".into(),
                ],
                links: vec![ProjectLink {
                    kind: "Website".into(),
                    href: "Website is coming soon!".into(),
                }],
                image: Some("/woodax-design.png".into()),
            },
            ProjectEntry {
                id: "dyma".into(),
                title: "Dyma Group".into(),
                href: "https://dymagroup.com.mx".into(),
                dates: "Sept.2025 – Present".into(),
                status: Some(ProjectStatus::InProgress),
                active: None,
                description: "Corporate website revamp focused on performance, accessibility, \
                              and multilingual content."
                    .into(),
                technologies: vec![
                    "Next.js".into(),
                    "TypeScript".into(),
                    "TailwindCSS".into(),
                    "UI/UX".into(),
                ],
                links: vec![ProjectLink {
                    kind: "Website".into(),
                    href: "https://dymagroup.com.mx".into(),
                }],
                image: Some("/dyma.png".into()),
            },
        ],
        skills: vec![
            SkillGroup {
                id: "soft".into(),
                title: "Soft Skills".into(),
                items: vec![
                    "Giving and receiving feedback".into(),
                    "Creativity".into(),
                    "Teamwork".into(),
                    "Active listening".into(),
                    "Problem solving".into(),
                    "Critical thinking".into(),
                    "Ownership".into(),
                    "Adaptability".into(),
                    "A Desire to Learn".into(),
                ],
            },
            SkillGroup {
                id: "frontend".into(),
                title: "Frontend".into(),
                items: vec![
                    "React".into(),
                    "Next.js".into(),
                    "TypeScript".into(),
                    "JavaScript (ES6+)".into(),
                    "Material UI".into(),
                    "Tailwind CSS".into(),
                    "Redux".into(),
                    "Git".into(),
                    "Figma".into(),
                    "Accessibility (A11y)".into(),
                    "Performance Optimization".into(),
                    "SEO Best Practices".into(),
                    "Responsive Design".into(),
                    "Cross-Browser Compatibility".into(),
                ],
            },
            SkillGroup {
                id: "backend".into(),
                title: "Backend".into(),
                items: vec![
                    "Node.js".into(),
                    "Express JS".into(),
                    "Microservices".into(),
                    "REST".into(),
                ],
            },
            SkillGroup {
                id: "databases".into(),
                title: "Databases".into(),
                items: vec![
                    "PostgreSQL".into(),
                    "MySQL".into(),
                    "MongoDB".into(),
                    "NoSQL".into(),
                    "Firebase".into(),
                ],
            },
            SkillGroup {
                id: "cloud".into(),
                title: "Cloud".into(),
                items: vec![
                    "AWS (basic)".into(),
                    "Service Models (IaaS, PaaS, SaaS)".into(),
                    "Scalability & Elasticity".into(),
                    "High Availability & Fault Tolerance".into(),
                    "CDN (CloudFront)".into(),
                    "Serverless (Lambda)".into(),
                    "Kubernetes (basic)".into(),
                    "Cloudflare Workers".into(),
                ],
            },
            SkillGroup {
                id: "security".into(),
                title: "Monitoring & Security".into(),
                items: vec![
                    "Monitoring".into(),
                    "Grafana".into(),
                    "Splunk".into(),
                    "ServiceNow (ITSM)".into(),
                    "Cross-Site Scripting (XSS)".into(),
                    "CSRF".into(),
                    "OWASP Top 10".into(),
                    "Content Security Policy (CSP)".into(),
                ],
            },
        ],
    }
}
