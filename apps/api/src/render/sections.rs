//! Markup fragments shared by the layouts.
//!
//! Every user-supplied value passes through `escape_html` before it is
//! concatenated. Catalog values (colors, titles) are trusted.

use crate::models::resume::ResumeData;
use crate::models::template::TemplateDescriptor;

use super::format::{escape_html, format_date, format_date_range};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Header,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
}

impl Section {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "header" => Some(Section::Header),
            "summary" => Some(Section::Summary),
            "experience" => Some(Section::Experience),
            "education" => Some(Section::Education),
            "skills" => Some(Section::Skills),
            "projects" => Some(Section::Projects),
            "certifications" => Some(Section::Certifications),
            _ => None,
        }
    }

    fn class(self) -> &'static str {
        match self {
            Section::Header => "cv-header",
            Section::Summary => "cv-summary",
            Section::Experience => "cv-experience",
            Section::Education => "cv-education",
            Section::Skills => "cv-skills",
            Section::Projects => "cv-projects",
            Section::Certifications => "cv-certifications",
        }
    }

    /// Whether the resume has anything to show here. The header always renders.
    pub fn is_present(self, data: &ResumeData) -> bool {
        match self {
            Section::Header => true,
            Section::Summary => data.has_summary(),
            Section::Experience => data.has_experience(),
            Section::Education => data.has_education(),
            Section::Skills => data.has_skills(),
            Section::Projects => data.has_projects(),
            Section::Certifications => data.has_certifications(),
        }
    }
}

/// The descriptor's sections, in render order, with unknown names dropped.
pub fn ordered_sections(descriptor: &TemplateDescriptor) -> Vec<Section> {
    descriptor
        .sections
        .iter()
        .filter_map(|name| Section::from_name(name))
        .collect()
}

pub struct Titles {
    pub summary: &'static str,
    pub experience: &'static str,
    pub education: &'static str,
    pub skills: &'static str,
    pub projects: &'static str,
    pub certifications: &'static str,
}

impl Titles {
    fn for_section(&self, section: Section) -> &'static str {
        match section {
            Section::Header => "",
            Section::Summary => self.summary,
            Section::Experience => self.experience,
            Section::Education => self.education,
            Section::Skills => self.skills,
            Section::Projects => self.projects,
            Section::Certifications => self.certifications,
        }
    }
}

pub const PROFESSIONAL_TITLES: Titles = Titles {
    summary: "Professional Summary",
    experience: "Professional Experience",
    education: "Education",
    skills: "Skills",
    projects: "Projects",
    certifications: "Certifications",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillStyle {
    Chips,
    Bars,
    Inline,
}

pub fn section(kind: Section, title: &str, title_style: &str, body: &str) -> String {
    format!(
        r#"<section class="cv-section {class}"><h2 class="cv-section-title" style="{title_style}">{title}</h2>{body}</section>"#,
        class = kind.class(),
    )
}

pub fn full_name(data: &ResumeData) -> String {
    let info = &data.personal_info;
    escape_html(format!("{} {}", info.first_name.trim(), info.last_name.trim()).trim())
}

/// Escaped email, phone, address, LinkedIn and website, in that order.
/// Blank values are left out.
pub fn contact_items(data: &ResumeData) -> Vec<String> {
    let info = &data.personal_info;
    [
        Some(info.email.as_str()),
        Some(info.phone.as_str()),
        Some(info.address.as_str()),
        info.linked_in.as_deref(),
        info.website.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .filter(|v| !v.is_empty())
    .map(escape_html)
    .collect()
}

pub fn photo(data: &ResumeData, size_px: u32, border: &str) -> String {
    match data.personal_info.photo.as_deref().map(str::trim) {
        Some(src) if !src.is_empty() => format!(
            r#"<img class="cv-photo" src="{src}" alt="{alt}" style="width:{size_px}px;height:{size_px}px;border-radius:50%;object-fit:cover;border:3px solid {border}">"#,
            src = escape_html(src),
            alt = full_name(data),
        ),
        _ => String::new(),
    }
}

pub fn summary_body(data: &ResumeData) -> String {
    format!(
        r#"<p class="cv-summary-text">{}</p>"#,
        escape_html(data.personal_info.summary.trim())
    )
}

pub fn experience_body(data: &ResumeData, muted: &str) -> String {
    let mut out = String::new();
    for exp in &data.experience {
        let range = format_date_range(&exp.start_date, &exp.end_date, exp.current);
        out.push_str(r#"<div class="cv-entry"><div class="cv-entry-head"><div>"#);
        out.push_str(&format!(
            r#"<h3 class="cv-entry-title">{}</h3><p class="cv-entry-org">{}</p></div>"#,
            escape_html(&exp.title),
            escape_html(&exp.company)
        ));
        out.push_str(&format!(
            r#"<div class="cv-entry-meta" style="color:{muted}"><p class="cv-date">{}</p>"#,
            escape_html(&range)
        ));
        if !exp.location.trim().is_empty() {
            out.push_str(&format!("<p>{}</p>", escape_html(&exp.location)));
        }
        out.push_str("</div></div>");
        if !exp.description.trim().is_empty() {
            out.push_str(&format!(
                r#"<p class="cv-entry-text">{}</p>"#,
                escape_html(exp.description.trim())
            ));
        }
        out.push_str("</div>");
    }
    out
}

pub fn education_body(data: &ResumeData, muted: &str) -> String {
    let mut out = String::new();
    for edu in &data.education {
        let range = format_date_range(&edu.start_date, &edu.end_date, false);
        out.push_str(&format!(
            r#"<div class="cv-entry"><div class="cv-entry-head"><div><h3 class="cv-entry-title">{}</h3><p class="cv-entry-org">{}</p>"#,
            escape_html(&edu.degree),
            escape_html(&edu.school)
        ));
        if !edu.location.trim().is_empty() {
            out.push_str(&format!(
                r#"<p style="color:{muted}">{}</p>"#,
                escape_html(&edu.location)
            ));
        }
        out.push_str(&format!(
            r#"</div><div class="cv-entry-meta" style="color:{muted}"><p class="cv-date">{}</p>"#,
            escape_html(&range)
        ));
        if let Some(gpa) = edu.gpa.as_deref().map(str::trim).filter(|g| !g.is_empty()) {
            out.push_str(&format!("<p>GPA: {}</p>", escape_html(gpa)));
        }
        out.push_str("</div></div></div>");
    }
    out
}

pub fn skills_body(data: &ResumeData, style: SkillStyle, accent: &str, track: &str) -> String {
    match style {
        SkillStyle::Chips => {
            let chips: String = data
                .skills
                .iter()
                .map(|s| {
                    format!(
                        r#"<span class="cv-chip" style="background:{track};color:{accent}">{}</span>"#,
                        escape_html(&s.name)
                    )
                })
                .collect();
            format!(r#"<div class="cv-chips">{chips}</div>"#)
        }
        SkillStyle::Bars => {
            let mut out = String::new();
            for skill in &data.skills {
                out.push_str(&format!(
                    r#"<div class="cv-skill"><div class="cv-skill-label"><span>{name}</span><span>{level}</span></div><div class="cv-skill-track" style="background:{track}"><div class="cv-skill-fill" style="width:{width}%;background:{accent}"></div></div></div>"#,
                    name = escape_html(&skill.name),
                    level = skill.level.label(),
                    width = skill.level.width_percent(),
                ));
            }
            out
        }
        SkillStyle::Inline => {
            let items: Vec<String> = data
                .skills
                .iter()
                .map(|s| format!("{} ({})", escape_html(&s.name), s.level.label()))
                .collect();
            format!(r#"<p class="cv-skills-inline">{}</p>"#, items.join(" · "))
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub fn projects_body(data: &ResumeData, muted: &str) -> String {
    let mut out = String::new();
    for project in &data.projects {
        let range = format_date_range(&project.start_date, &project.end_date, false);
        out.push_str(&format!(
            r#"<div class="cv-entry"><div class="cv-entry-head"><div><h3 class="cv-entry-title">{}</h3>"#,
            escape_html(&project.name)
        ));
        for link in [project.url.as_deref(), project.github.as_deref()] {
            if let Some(link) = non_blank(link) {
                out.push_str(&format!(
                    r#"<p class="cv-entry-org" style="color:{muted}">{}</p>"#,
                    escape_html(link)
                ));
            }
        }
        out.push_str(&format!(
            r#"</div><div class="cv-entry-meta" style="color:{muted}"><p class="cv-date">{}</p></div></div>"#,
            escape_html(&range)
        ));
        if !project.description.trim().is_empty() {
            out.push_str(&format!(
                r#"<p class="cv-entry-text">{}</p>"#,
                escape_html(project.description.trim())
            ));
        }
        let technologies: Vec<String> = project
            .technologies
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(escape_html)
            .collect();
        if !technologies.is_empty() {
            out.push_str(&format!(
                r#"<p class="cv-entry-tech" style="color:{muted}">{}</p>"#,
                technologies.join(", ")
            ));
        }
        out.push_str("</div>");
    }
    out
}

pub fn certifications_body(data: &ResumeData, muted: &str) -> String {
    let mut out = String::new();
    for cert in &data.certifications {
        out.push_str(&format!(
            r#"<div class="cv-entry"><div class="cv-entry-head"><div><h3 class="cv-entry-title">{}</h3><p class="cv-entry-org">{}</p>"#,
            escape_html(&cert.name),
            escape_html(&cert.issuer)
        ));
        if let Some(id) = non_blank(cert.credential_id.as_deref()) {
            out.push_str(&format!(
                r#"<p style="color:{muted}">Credential ID: {}</p>"#,
                escape_html(id)
            ));
        }
        out.push_str(&format!(
            r#"</div><div class="cv-entry-meta" style="color:{muted}"><p class="cv-date">{}</p>"#,
            escape_html(&format_date(&cert.issue_date))
        ));
        if !cert.expiration_date.trim().is_empty() {
            out.push_str(&format!(
                "<p>Expires {}</p>",
                escape_html(&format_date(&cert.expiration_date))
            ));
        }
        out.push_str("</div></div></div>");
    }
    out
}

pub struct SectionStyle<'a> {
    pub titles: &'a Titles,
    pub title_style: &'a str,
    pub skills: SkillStyle,
    pub accent: &'a str,
    pub muted: &'a str,
    pub track: &'a str,
}

/// Renders one non-header section, or nothing when its data is empty.
pub fn render_section(section: Section, data: &ResumeData, style: &SectionStyle<'_>) -> String {
    if section == Section::Header || !section.is_present(data) {
        return String::new();
    }
    let body = match section {
        Section::Summary => summary_body(data),
        Section::Experience => experience_body(data, style.muted),
        Section::Education => education_body(data, style.muted),
        Section::Skills => skills_body(data, style.skills, style.accent, style.track),
        Section::Projects => projects_body(data, style.muted),
        Section::Certifications => certifications_body(data, style.muted),
        Section::Header => String::new(),
    };
    self::section(
        section,
        style.titles.for_section(section),
        style.title_style,
        &body,
    )
}

/// Renders `sections` in order, skipping the header and empty sections.
pub fn render_sections(sections: &[Section], data: &ResumeData, style: &SectionStyle<'_>) -> String {
    sections
        .iter()
        .map(|s| render_section(*s, data, style))
        .collect()
}
