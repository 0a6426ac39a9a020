// Template Renderer: pure (TemplateDescriptor, ResumeData) -> HTML.
// No I/O and no hidden state; equal inputs always produce equal output.

pub mod format;
pub mod handlers;
pub mod layouts;
pub mod sections;

use crate::models::resume::ResumeData;
use crate::models::template::TemplateDescriptor;

use self::layouts::{LayoutFn, LAYOUTS};

const BASE_CSS: &str = r#"
.cv { max-width: 800px; margin: 0 auto; padding: 32px; line-height: 1.5; color: #1F2937; background: var(--cv-background); }
.cv-name { font-size: 2.25rem; font-weight: 700; margin: 0 0 8px; }
.cv-contact { font-size: 0.875rem; margin: 0; }
.cv-header { margin-bottom: 24px; padding-bottom: 16px; }
.cv-section { margin-bottom: 24px; }
.cv-section-title { font-size: 1.125rem; font-weight: 700; margin: 0 0 12px; padding-bottom: 4px; color: var(--cv-accent); }
.cv-entry { margin-bottom: 16px; }
.cv-entry-head { display: flex; justify-content: space-between; align-items: flex-start; gap: 12px; }
.cv-entry-title { font-size: 1rem; font-weight: 600; margin: 0; }
.cv-entry-org { margin: 0; }
.cv-entry-meta { text-align: right; font-size: 0.875rem; white-space: nowrap; }
.cv-entry-meta p { margin: 0; }
.cv-entry-text { font-size: 0.875rem; margin: 6px 0 0; white-space: pre-line; }
.cv-chip { display: inline-block; padding: 2px 10px; margin: 0 6px 6px 0; border-radius: 4px; font-size: 0.875rem; }
.cv-skill { margin-bottom: 8px; }
.cv-skill-label { display: flex; justify-content: space-between; font-size: 0.875rem; }
.cv-skill-track { height: 6px; border-radius: 3px; overflow: hidden; }
.cv-skill-fill { height: 100%; border-radius: 3px; }
.cv-rail .cv-entry { position: relative; }
.cv-rail .cv-entry::before { content: ""; position: absolute; left: -27px; top: 6px; width: 12px; height: 12px; border-radius: 50%; background: var(--cv-accent); }
@page { size: A4; margin: 12mm; }
@media print { .cv { max-width: none; padding: 0; } }
"#;

/// Picks the layout for a template id, falling back to `basic`.
pub fn resolve_layout(template_id: &str) -> LayoutFn {
    LAYOUTS
        .iter()
        .find(|(id, _)| *id == template_id)
        .map(|(_, layout)| *layout)
        .unwrap_or(layouts::basic)
}

/// Renders the resume body markup for `descriptor`.
pub fn render_template(descriptor: &TemplateDescriptor, data: &ResumeData) -> String {
    resolve_layout(&descriptor.id)(descriptor, data)
}

/// Stylesheet for a template: palette custom properties plus the shared rules.
pub fn stylesheet(descriptor: &TemplateDescriptor) -> String {
    format!(
        ":root {{ --cv-accent: {}; --cv-secondary: {}; --cv-background: {}; }}{BASE_CSS}",
        descriptor.accent(),
        descriptor.secondary(),
        descriptor.background()
    )
}

/// A complete, print-ready HTML page. PDF rasterization happens outside this service.
pub fn render_document(descriptor: &TemplateDescriptor, data: &ResumeData) -> String {
    let name = sections::full_name(data);
    let title = if name.is_empty() {
        "Resume".to_string()
    } else {
        format!("{name} - Resume")
    };
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n<title>{title}</title>\n<style>{css}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        css = stylesheet(descriptor),
        body = render_template(descriptor, data),
    )
}

/// File name offered for the exported PDF, e.g. `Ada_Lovelace_Resume.pdf`.
pub fn export_file_name(data: &ResumeData) -> String {
    let info = &data.personal_info;
    let clean = |s: &str| -> String {
        s.trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
            .collect()
    };
    let parts: Vec<String> = [clean(&info.first_name), clean(&info.last_name)]
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect();
    if parts.is_empty() {
        "Resume.pdf".to_string()
    } else {
        format!("{}_Resume.pdf", parts.join("_"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::registry::{catalog, get_by_id};
    use crate::models::resume::{
        CertificationEntry, EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry,
        SkillEntry, SkillLevel,
    };

    fn sample() -> ResumeData {
        ResumeData {
            personal_info: PersonalInfo {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                phone: "+44 20 7946 0958".to_string(),
                address: "London".to_string(),
                summary: "Mathematician and first programmer.".to_string(),
                photo: Some("https://img.example.com/ada.png".to_string()),
                ..Default::default()
            },
            experience: vec![ExperienceEntry {
                id: "e1".to_string(),
                title: "Analyst".to_string(),
                company: "Analytical Engine Ltd".to_string(),
                location: "London".to_string(),
                start_date: "1842-01".to_string(),
                end_date: "1843-09".to_string(),
                current: false,
                description: "Wrote the first published algorithm.".to_string(),
            }],
            education: vec![EducationEntry {
                id: "d1".to_string(),
                degree: "Private tutoring".to_string(),
                school: "Home".to_string(),
                location: String::new(),
                start_date: "1830-01".to_string(),
                end_date: "1835-01".to_string(),
                gpa: Some("4.0".to_string()),
            }],
            skills: vec![SkillEntry {
                id: "s1".to_string(),
                name: "SQL".to_string(),
                level: SkillLevel::Advanced,
            }],
            ..Default::default()
        }
    }

    fn unknown_descriptor() -> TemplateDescriptor {
        let mut d = catalog()[0].clone();
        d.id = "retired-template".to_string();
        d
    }

    #[test]
    fn test_render_is_deterministic_for_every_template() {
        let data = sample();
        for template in catalog() {
            assert_eq!(
                render_template(template, &data),
                render_template(template, &data),
                "{} is not deterministic",
                template.id
            );
        }
    }

    #[test]
    fn test_empty_experience_has_no_heading() {
        let mut data = sample();
        data.experience.clear();
        for template in catalog() {
            let html = render_template(template, &data);
            assert!(!html.contains("cv-experience"), "{}", template.id);
            assert!(!html.contains("Experience"), "{}", template.id);
        }
        let html = render_template(&unknown_descriptor(), &data);
        assert!(!html.contains("Work Experience"));
    }

    #[test]
    fn test_blank_first_experience_row_omits_section() {
        let mut data = sample();
        data.experience[0].title.clear();
        let html = render_template(catalog().first().unwrap(), &data);
        assert!(!html.contains("cv-experience"));
    }

    #[test]
    fn test_current_role_ends_with_present_and_ignores_end_date() {
        let mut data = sample();
        data.experience[0].current = true;
        data.experience[0].end_date = "1843-09".to_string();
        for template in catalog() {
            let html = render_template(template, &data);
            assert!(html.contains("Jan 1842 - Present"), "{}", template.id);
            assert!(!html.contains("Sep 1843"), "{}", template.id);
        }
    }

    #[test]
    fn test_closed_range_is_formatted() {
        let html = render_template(get_by_id("modern-professional").unwrap(), &sample());
        assert!(html.contains("Jan 1842 - Sep 1843"));
    }

    #[test]
    fn test_unknown_id_falls_back_to_basic() {
        let html = render_template(&unknown_descriptor(), &sample());
        assert!(html.contains("cv-basic"));
        assert!(html.contains("ADA LOVELACE"));
        assert!(html.contains("Phone: +44 20 7946 0958"));
    }

    #[test]
    fn test_skill_bar_width_for_advanced() {
        let html = render_template(get_by_id("professional-timeline").unwrap(), &sample());
        assert!(html.contains("width:75%"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut data = sample();
        data.personal_info.first_name = "<script>alert(1)</script>".to_string();
        data.experience[0].description = "R&D \"lead\"".to_string();
        data.personal_info.photo = Some("x\" onerror=\"alert(1)".to_string());
        for template in catalog() {
            let html = render_template(template, &data);
            assert!(!html.contains("<script>"), "{}", template.id);
            assert!(!html.contains("<SCRIPT>"), "{}", template.id);
            assert!(!html.contains("\" onerror="), "{}", template.id);
            assert!(html.contains("R&amp;D &quot;lead&quot;"), "{}", template.id);
        }
    }

    #[test]
    fn test_section_order_follows_descriptor() {
        let data = sample();
        let minimal = render_template(get_by_id("minimal-clean").unwrap(), &data);
        let exp = minimal.find("cv-experience").unwrap();
        let summary = minimal.find("cv-summary").unwrap();
        assert!(exp < summary, "minimal-clean puts the summary last");

        let modern = render_template(get_by_id("modern-professional").unwrap(), &data);
        assert!(modern.find("cv-summary").unwrap() < modern.find("cv-experience").unwrap());
    }

    #[test]
    fn test_unknown_section_names_are_skipped() {
        let mut d = catalog()[0].clone();
        d.sections = vec!["header".to_string(), "hobbies".to_string(), "skills".to_string()];
        let html = render_template(&d, &sample());
        assert!(html.contains("cv-skills"));
        assert!(!html.contains("cv-experience"));
        assert!(!html.contains("hobbies"));
    }

    #[test]
    fn test_projects_and_certifications_follow_section_order() {
        let mut data = sample();
        data.personal_info.linked_in = Some("linkedin.com/in/ada".to_string());
        data.projects = vec![ProjectEntry {
            name: "Bernoulli <numbers>".to_string(),
            description: "Note G".to_string(),
            technologies: vec!["Punched cards".to_string()],
            start_date: "1842-10".to_string(),
            end_date: "1843-07".to_string(),
            ..Default::default()
        }];
        data.certifications = vec![CertificationEntry {
            name: "Fellow".to_string(),
            issuer: "Royal Society".to_string(),
            issue_date: "1843-01".to_string(),
            ..Default::default()
        }];
        for template in catalog() {
            let html = render_template(template, &data);
            assert!(html.contains("Bernoulli &lt;numbers&gt;"), "{}", template.id);
            assert!(html.contains("Punched cards"), "{}", template.id);
            assert!(html.contains("Oct 1842 - Jul 1843"), "{}", template.id);
            assert!(html.contains("Royal Society"), "{}", template.id);
            assert!(html.contains("linkedin.com/in/ada"), "{}", template.id);
        }

        let minimal = render_template(get_by_id("minimal-clean").unwrap(), &data);
        let experience = minimal.find("cv-experience").unwrap();
        let projects = minimal.find("cv-projects").unwrap();
        let education = minimal.find("cv-education").unwrap();
        let certifications = minimal.find("cv-certifications").unwrap();
        assert!(experience < projects && projects < education && education < certifications);

        let without: String = render_template(get_by_id("classic-executive").unwrap(), &sample());
        assert!(!without.contains("cv-projects"));
        assert!(!without.contains("cv-certifications"));
    }

    #[test]
    fn test_photo_only_in_photo_layouts() {
        let data = sample();
        let sidebar = render_template(get_by_id("creative-sidebar").unwrap(), &data);
        assert!(sidebar.contains("cv-photo"));
        let classic = render_template(get_by_id("classic-executive").unwrap(), &data);
        assert!(!classic.contains("cv-photo"));
    }

    #[test]
    fn test_document_wraps_markup_with_palette() {
        let d = get_by_id("creative-sidebar").unwrap();
        let doc = render_document(d, &sample());
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Ada Lovelace - Resume</title>"));
        assert!(doc.contains("--cv-accent: #7C3AED"));
        assert!(doc.contains("@page { size: A4"));
        assert!(doc.contains(&render_template(d, &sample())));
    }

    #[test]
    fn test_document_title_for_empty_resume() {
        let doc = render_document(&catalog()[0], &ResumeData::default());
        assert!(doc.contains("<title>Resume</title>"));
    }

    #[test]
    fn test_empty_resume_renders_only_header() {
        let html = render_template(&catalog()[0], &ResumeData::default());
        assert!(html.contains("cv-header"));
        assert!(!html.contains("cv-section "));
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name(&sample()), "Ada_Lovelace_Resume.pdf");
        assert_eq!(export_file_name(&ResumeData::default()), "Resume.pdf");
    }
}
