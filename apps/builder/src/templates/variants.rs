//! The ten template variants.
//!
//! Five carry their own layout (professional, modern, creative, minimalist,
//! tech). The other five reuse the single-column body with a distinct theme
//! each — the same aliasing the product shipped with, kept visibly distinct
//! through header style, accent color, and typeface.
//!
//! Every variant reads the full model: any non-empty collection renders, any
//! empty one is omitted (no "no data" placeholders), and entries appear in
//! insertion order.

use crate::layout::{default_page_config, wrap_text, FontFamily, FontMetrics};
use crate::models::{PersonalInfo, ResumeData};
use crate::templates::document::{Color, Document, HeaderStyle, Node, SkillItem, Theme};
use crate::templates::TemplateId;

// Accents roughly matching the product palette.
const BLUE: Color = Color::rgb(37, 99, 235);
const SLATE: Color = Color::rgb(17, 24, 39);
const PURPLE: Color = Color::rgb(147, 51, 234);
const GRAY: Color = Color::rgb(107, 114, 128);
const GREEN: Color = Color::rgb(74, 222, 128);
const GOLD: Color = Color::rgb(202, 138, 4);
const MAROON: Color = Color::rgb(127, 29, 29);
const ORANGE: Color = Color::rgb(249, 115, 22);
const NAVY: Color = Color::rgb(30, 58, 138);
const TEAL: Color = Color::rgb(13, 148, 136);

/// Per-variant section heading texts. `summary: None` renders the summary
/// paragraph without a heading (the minimalist treatment).
struct SectionTitles {
    summary: Option<&'static str>,
    experience: &'static str,
    education: &'static str,
    skills: &'static str,
    certifications: &'static str,
    projects: &'static str,
    awards: &'static str,
    volunteering: &'static str,
    publications: &'static str,
    interests: &'static str,
}

const UPPER_TITLES: SectionTitles = SectionTitles {
    summary: Some("PROFESSIONAL SUMMARY"),
    experience: "WORK EXPERIENCE",
    education: "EDUCATION",
    skills: "SKILLS",
    certifications: "CERTIFICATIONS",
    projects: "PROJECTS",
    awards: "AWARDS",
    volunteering: "VOLUNTEERING",
    publications: "PUBLICATIONS",
    interests: "INTERESTS",
};

const TITLE_CASE_TITLES: SectionTitles = SectionTitles {
    summary: Some("Summary"),
    experience: "Experience",
    education: "Education",
    skills: "Skills",
    certifications: "Certifications",
    projects: "Projects",
    awards: "Awards",
    volunteering: "Volunteering",
    publications: "Publications",
    interests: "Interests",
};

pub(super) fn professional(data: &ResumeData) -> Document {
    let theme = Theme {
        typeface: FontFamily::Inter,
        accent: BLUE,
        header: HeaderStyle::RuleBelow,
    };
    let m = FontMetrics::for_family(theme.typeface);
    let width = default_page_config(theme.typeface).text_width_em;

    let mut nodes = vec![
        Node::Heading {
            level: 1,
            text: full_name(&data.personal_info),
        },
        Node::ContactRow {
            items: contact_items(data),
        },
        Node::Rule,
    ];
    body_sections(data, m, width, &UPPER_TITLES, 2, &mut nodes);

    Document {
        template: TemplateId::Professional,
        theme,
        nodes,
    }
}

/// Two-column layout: dark sidebar with identity and skills, wide body with
/// the narrative sections.
pub(super) fn modern(data: &ResumeData) -> Document {
    let theme = Theme {
        typeface: FontFamily::Lato,
        accent: SLATE,
        header: HeaderStyle::Sidebar,
    };
    let m = FontMetrics::for_family(theme.typeface);
    let width = default_page_config(theme.typeface).text_width_em;
    // Headings, contact items, skills, and tags in the sidebar are short
    // atoms the rasterizer places without wrapping; only the body column
    // carries pre-wrapped long-form text.
    let body_width = width * 0.62;

    let mut left = vec![
        Node::Heading {
            level: 1,
            text: full_name(&data.personal_info),
        },
        Node::ContactRow {
            items: contact_items(data),
        },
    ];
    if !data.skills.is_empty() {
        left.push(Node::Heading {
            level: 2,
            text: "SKILLS".to_string(),
        });
        left.push(skill_list(data));
    }
    if !data.interests.is_empty() {
        left.push(Node::Heading {
            level: 2,
            text: "INTERESTS".to_string(),
        });
        left.push(Node::TagRow {
            tags: data.interests.clone(),
        });
    }

    let mut right = Vec::new();
    summary_section(data, m, body_width, Some("PROFESSIONAL SUMMARY"), 2, &mut right);
    experience_section(data, m, body_width, "EXPERIENCE", 2, &mut right);
    education_section(data, "EDUCATION", 2, &mut right);
    projects_section(data, m, body_width, "PROJECTS", 2, &mut right);
    certifications_section(data, "CERTIFICATIONS", 2, &mut right);
    awards_section(data, m, body_width, "AWARDS", 2, &mut right);
    volunteering_section(data, m, body_width, "VOLUNTEERING", 2, &mut right);
    publications_section(data, "PUBLICATIONS", 2, &mut right);

    Document {
        template: TemplateId::Modern,
        theme,
        nodes: vec![Node::Columns { left, right }],
    }
}

pub(super) fn creative(data: &ResumeData) -> Document {
    let theme = Theme {
        typeface: FontFamily::Oswald,
        accent: PURPLE,
        header: HeaderStyle::Banner,
    };
    let m = FontMetrics::for_family(theme.typeface);
    let width = default_page_config(theme.typeface).text_width_em;

    let titles = SectionTitles {
        summary: Some("ABOUT ME"),
        experience: "EXPERIENCE",
        education: "EDUCATION",
        skills: "SKILLS",
        certifications: "CERTIFICATIONS",
        projects: "PROJECTS",
        awards: "AWARDS",
        volunteering: "VOLUNTEERING",
        publications: "PUBLICATIONS",
        interests: "INTERESTS",
    };

    let mut nodes = vec![
        Node::Heading {
            level: 1,
            text: full_name(&data.personal_info),
        },
        Node::ContactRow {
            items: contact_items(data),
        },
    ];
    body_sections(data, m, width, &titles, 2, &mut nodes);

    Document {
        template: TemplateId::Creative,
        theme,
        nodes,
    }
}

/// Centered header, summary without a heading, quiet title-case sections.
pub(super) fn minimalist(data: &ResumeData) -> Document {
    let theme = Theme {
        typeface: FontFamily::EbGaramond,
        accent: GRAY,
        header: HeaderStyle::CenteredRule,
    };
    let m = FontMetrics::for_family(theme.typeface);
    let width = default_page_config(theme.typeface).text_width_em;

    let titles = SectionTitles {
        summary: None,
        ..TITLE_CASE_TITLES
    };

    let mut nodes = vec![
        Node::Heading {
            level: 1,
            text: full_name(&data.personal_info),
        },
        Node::ContactRow {
            items: contact_items(data),
        },
        Node::Rule,
    ];
    body_sections(data, m, width, &titles, 2, &mut nodes);

    Document {
        template: TemplateId::Minimalist,
        theme,
        nodes,
    }
}

/// Terminal-styled layout: boxed whoami header, `$`-prefixed sections,
/// monospace throughout.
pub(super) fn tech(data: &ResumeData) -> Document {
    let theme = Theme {
        typeface: FontFamily::JetBrainsMono,
        accent: GREEN,
        header: HeaderStyle::Boxed,
    };
    let m = FontMetrics::for_family(theme.typeface);
    let width = default_page_config(theme.typeface).text_width_em;

    let titles = SectionTitles {
        summary: Some("$ summary"),
        experience: "$ experience",
        education: "$ education",
        skills: "$ skills",
        certifications: "$ certifications",
        projects: "$ projects",
        awards: "$ awards",
        volunteering: "$ volunteering",
        publications: "$ publications",
        interests: "$ interests",
    };

    let mut contact_lines = Vec::new();
    if !data.personal_info.email.is_empty() {
        contact_lines.push(format!("email: {}", data.personal_info.email));
    }
    if !data.personal_info.phone.is_empty() {
        contact_lines.push(format!("phone: {}", data.personal_info.phone));
    }
    let location = city_state(&data.personal_info);
    if !location.is_empty() {
        contact_lines.push(format!("location: {location}"));
    }

    let mut nodes = vec![Node::Heading {
        level: 1,
        text: format!("~/$ whoami: {}", full_name(&data.personal_info)),
    }];
    if !contact_lines.is_empty() {
        nodes.push(Node::Paragraph {
            lines: contact_lines,
        });
    }
    body_sections(data, m, width, &titles, 2, &mut nodes);

    Document {
        template: TemplateId::Tech,
        theme,
        nodes,
    }
}

/// Shared single-column body for the themed alias variants.
pub(super) fn themed_single_column(data: &ResumeData, template: TemplateId) -> Document {
    let theme = match template {
        TemplateId::Executive => Theme {
            typeface: FontFamily::EbGaramond,
            accent: GOLD,
            header: HeaderStyle::RuleAbove,
        },
        TemplateId::Academic => Theme {
            typeface: FontFamily::EbGaramond,
            accent: MAROON,
            header: HeaderStyle::Centered,
        },
        TemplateId::Startup => Theme {
            typeface: FontFamily::Inter,
            accent: ORANGE,
            header: HeaderStyle::FilledBanner,
        },
        TemplateId::Consultant => Theme {
            typeface: FontFamily::Lato,
            accent: NAVY,
            header: HeaderStyle::LeftBar,
        },
        TemplateId::International => Theme {
            typeface: FontFamily::Lato,
            accent: TEAL,
            header: HeaderStyle::Inline,
        },
        // The five bespoke variants never reach this function.
        _ => unreachable!("themed_single_column called for a bespoke variant"),
    };
    let m = FontMetrics::for_family(theme.typeface);
    let width = default_page_config(theme.typeface).text_width_em;

    let mut nodes = vec![
        Node::Heading {
            level: 1,
            text: full_name(&data.personal_info),
        },
        Node::ContactRow {
            items: contact_items(data),
        },
    ];
    body_sections(data, m, width, &TITLE_CASE_TITLES, 2, &mut nodes);

    Document {
        template,
        theme,
        nodes,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Shared section builders
// ────────────────────────────────────────────────────────────────────────────

fn body_sections(
    data: &ResumeData,
    m: FontMetrics,
    width: f32,
    titles: &SectionTitles,
    level: u8,
    nodes: &mut Vec<Node>,
) {
    summary_section(data, m, width, titles.summary, level, nodes);
    experience_section(data, m, width, titles.experience, level, nodes);
    education_section(data, titles.education, level, nodes);
    skills_section(data, titles.skills, level, nodes);
    certifications_section(data, titles.certifications, level, nodes);
    projects_section(data, m, width, titles.projects, level, nodes);
    awards_section(data, m, width, titles.awards, level, nodes);
    volunteering_section(data, m, width, titles.volunteering, level, nodes);
    publications_section(data, titles.publications, level, nodes);
    interests_section(data, titles.interests, level, nodes);
}

fn summary_section(
    data: &ResumeData,
    m: FontMetrics,
    width: f32,
    title: Option<&str>,
    level: u8,
    nodes: &mut Vec<Node>,
) {
    if data.summary.trim().is_empty() {
        return;
    }
    if let Some(title) = title {
        nodes.push(Node::Heading {
            level,
            text: title.to_string(),
        });
    }
    nodes.push(Node::Paragraph {
        lines: wrap_text(&data.summary, m, width),
    });
}

fn experience_section(
    data: &ResumeData,
    m: FontMetrics,
    width: f32,
    title: &str,
    level: u8,
    nodes: &mut Vec<Node>,
) {
    if data.work_experience.is_empty() {
        return;
    }
    nodes.push(Node::Heading {
        level,
        text: title.to_string(),
    });
    for exp in &data.work_experience {
        nodes.push(Node::EntryHeader {
            title: exp.position.clone(),
            subtitle: join_nonempty(&[&exp.company, &exp.location], " | "),
            date_range: date_range(&exp.start_date, &exp.end_date, exp.current),
        });
        let items: Vec<Vec<String>> = exp
            .description
            .iter()
            .filter(|d| !d.trim().is_empty())
            .map(|d| wrap_text(d, m, width))
            .collect();
        if !items.is_empty() {
            nodes.push(Node::Bullets { items });
        }
    }
}

fn education_section(data: &ResumeData, title: &str, level: u8, nodes: &mut Vec<Node>) {
    if data.education.is_empty() {
        return;
    }
    nodes.push(Node::Heading {
        level,
        text: title.to_string(),
    });
    for edu in &data.education {
        let degree_line = if edu.field.trim().is_empty() {
            edu.degree.clone()
        } else if edu.degree.trim().is_empty() {
            edu.field.clone()
        } else {
            format!("{} in {}", edu.degree, edu.field)
        };
        nodes.push(Node::EntryHeader {
            title: degree_line,
            subtitle: join_nonempty(&[&edu.institution, &edu.location], " | "),
            date_range: date_range(&edu.start_date, &edu.end_date, false),
        });
        let mut extras = Vec::new();
        if let Some(gpa) = edu.gpa.as_deref().filter(|g| !g.trim().is_empty()) {
            extras.push(format!("GPA: {gpa}"));
        }
        if let Some(honors) = edu.honors.as_deref().filter(|h| !h.trim().is_empty()) {
            extras.push(honors.to_string());
        }
        if !extras.is_empty() {
            nodes.push(Node::Paragraph { lines: extras });
        }
    }
}

fn skills_section(data: &ResumeData, title: &str, level: u8, nodes: &mut Vec<Node>) {
    if data.skills.is_empty() {
        return;
    }
    nodes.push(Node::Heading {
        level,
        text: title.to_string(),
    });
    nodes.push(skill_list(data));
}

fn skill_list(data: &ResumeData) -> Node {
    Node::SkillList {
        items: data
            .skills
            .iter()
            .map(|s| SkillItem {
                name: s.name.clone(),
                level: s.level.as_str().to_string(),
                category: s.category.clone(),
            })
            .collect(),
    }
}

fn certifications_section(data: &ResumeData, title: &str, level: u8, nodes: &mut Vec<Node>) {
    if data.certifications.is_empty() {
        return;
    }
    nodes.push(Node::Heading {
        level,
        text: title.to_string(),
    });
    for cert in &data.certifications {
        nodes.push(Node::EntryHeader {
            title: cert.name.clone(),
            subtitle: cert.issuer.clone(),
            date_range: cert.date.clone(),
        });
    }
}

fn projects_section(
    data: &ResumeData,
    m: FontMetrics,
    width: f32,
    title: &str,
    level: u8,
    nodes: &mut Vec<Node>,
) {
    if data.projects.is_empty() {
        return;
    }
    nodes.push(Node::Heading {
        level,
        text: title.to_string(),
    });
    for project in &data.projects {
        let end = project.end_date.as_deref().unwrap_or("");
        nodes.push(Node::EntryHeader {
            title: project.name.clone(),
            subtitle: project
                .url
                .clone()
                .or_else(|| project.github.clone())
                .unwrap_or_default(),
            date_range: date_range(&project.start_date, end, false),
        });
        if !project.description.trim().is_empty() {
            nodes.push(Node::Paragraph {
                lines: wrap_text(&project.description, m, width),
            });
        }
        if !project.technologies.is_empty() {
            nodes.push(Node::TagRow {
                tags: project.technologies.clone(),
            });
        }
    }
}

fn awards_section(
    data: &ResumeData,
    m: FontMetrics,
    width: f32,
    title: &str,
    level: u8,
    nodes: &mut Vec<Node>,
) {
    if data.awards.is_empty() {
        return;
    }
    nodes.push(Node::Heading {
        level,
        text: title.to_string(),
    });
    for award in &data.awards {
        nodes.push(Node::EntryHeader {
            title: award.title.clone(),
            subtitle: award.issuer.clone(),
            date_range: award.date.clone(),
        });
        if let Some(desc) = award.description.as_deref().filter(|d| !d.trim().is_empty()) {
            nodes.push(Node::Paragraph {
                lines: wrap_text(desc, m, width),
            });
        }
    }
}

fn volunteering_section(
    data: &ResumeData,
    m: FontMetrics,
    width: f32,
    title: &str,
    level: u8,
    nodes: &mut Vec<Node>,
) {
    if data.volunteering.is_empty() {
        return;
    }
    nodes.push(Node::Heading {
        level,
        text: title.to_string(),
    });
    for vol in &data.volunteering {
        let end = vol.end_date.as_deref().unwrap_or("");
        nodes.push(Node::EntryHeader {
            title: vol.role.clone(),
            subtitle: join_nonempty(&[&vol.organization, &vol.location], " | "),
            date_range: date_range(&vol.start_date, end, vol.current),
        });
        if !vol.description.trim().is_empty() {
            nodes.push(Node::Paragraph {
                lines: wrap_text(&vol.description, m, width),
            });
        }
    }
}

fn publications_section(data: &ResumeData, title: &str, level: u8, nodes: &mut Vec<Node>) {
    if data.publications.is_empty() {
        return;
    }
    nodes.push(Node::Heading {
        level,
        text: title.to_string(),
    });
    for publication in &data.publications {
        nodes.push(Node::EntryHeader {
            title: publication.title.clone(),
            subtitle: publication.publisher.clone(),
            date_range: publication.date.clone(),
        });
    }
}

fn interests_section(data: &ResumeData, title: &str, level: u8, nodes: &mut Vec<Node>) {
    if data.interests.is_empty() {
        return;
    }
    nodes.push(Node::Heading {
        level,
        text: title.to_string(),
    });
    nodes.push(Node::TagRow {
        tags: data.interests.clone(),
    });
}

// ────────────────────────────────────────────────────────────────────────────
// Field helpers
// ────────────────────────────────────────────────────────────────────────────

fn full_name(info: &PersonalInfo) -> String {
    join_nonempty(&[&info.first_name, &info.last_name], " ")
}

fn city_state(info: &PersonalInfo) -> String {
    join_nonempty(&[&info.city, &info.state], ", ")
}

/// Displayed date range. A current role always ends in "Present" no matter
/// what `end` holds.
fn date_range(start: &str, end: &str, current: bool) -> String {
    let end = if current { "Present" } else { end };
    match (start.is_empty(), end.is_empty()) {
        (true, true) => String::new(),
        (false, true) => start.to_string(),
        _ => format!("{start} - {end}"),
    }
}

fn contact_items(data: &ResumeData) -> Vec<String> {
    let info = &data.personal_info;
    let links = &data.social_links;
    let mut items = Vec::new();

    for field in [&info.email, &info.phone] {
        if !field.trim().is_empty() {
            items.push(field.clone());
        }
    }
    let location = city_state(info);
    if !location.is_empty() {
        items.push(location);
    }
    for link in [
        &links.website,
        &links.linkedin,
        &links.github,
        &links.portfolio,
        &links.twitter,
    ]
    .into_iter()
    .flatten()
    {
        if !link.trim().is_empty() {
            items.push(link.clone());
        }
    }
    items
}

fn join_nonempty(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}
