//! Per-template layout strategies.
//!
//! `LAYOUTS` maps a catalog id to the function that lays it out. Ids missing
//! from the table render with `basic`. Every layout renders the header,
//! whether or not the descriptor lists it.

use crate::models::resume::ResumeData;
use crate::models::template::TemplateDescriptor;

use super::format::escape_html;
use super::sections::{
    contact_items, full_name, ordered_sections, photo, render_sections, Section, SectionStyle,
    SkillStyle, Titles, PROFESSIONAL_TITLES,
};

pub type LayoutFn = fn(&TemplateDescriptor, &ResumeData) -> String;

pub const LAYOUTS: &[(&str, LayoutFn)] = &[
    ("modern-professional", modern),
    ("classic-executive", classic),
    ("creative-sidebar", sidebar),
    ("minimal-clean", minimal),
    ("professional-timeline", timeline),
    ("modern-grid", grid),
];

const BASIC_TITLES: Titles = Titles {
    summary: "Summary",
    experience: "Work Experience",
    education: "Education",
    skills: "Skills",
    projects: "Projects",
    certifications: "Certifications",
};

/// Fallback layout: plain single column, gray rules, skill chips.
pub fn basic(descriptor: &TemplateDescriptor, data: &ResumeData) -> String {
    let info = &data.personal_info;
    let mut out = format!(
        r#"<div class="cv cv-basic" style="background:{};color:#1F2937;font-family:Arial, sans-serif">"#,
        descriptor.background()
    );
    out.push_str(r#"<header class="cv-header" style="border-bottom:2px solid #D1D5DB">"#);
    out.push_str(&format!(
        r#"<h1 class="cv-name">{} {}</h1><div class="cv-contact">"#,
        escape_html(&info.first_name.to_uppercase()),
        escape_html(&info.last_name.to_uppercase())
    ));
    out.push_str(&format!("<div>Phone: {}</div>", escape_html(&info.phone)));
    out.push_str(&format!("<div>Email: {}</div>", escape_html(&info.email)));
    for (label, value) in [
        ("Address", Some(info.address.as_str())),
        ("LinkedIn", info.linked_in.as_deref()),
        ("Website", info.website.as_deref()),
    ] {
        if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
            out.push_str(&format!("<div>{label}: {}</div>", escape_html(value)));
        }
    }
    out.push_str("</div></header>");

    let style = SectionStyle {
        titles: &BASIC_TITLES,
        title_style: "color:#1F2937;text-transform:uppercase",
        skills: SkillStyle::Chips,
        accent: "#1F2937",
        muted: "#6B7280",
        track: "#E5E7EB",
    };
    out.push_str(&render_sections(&ordered_sections(descriptor), data, &style));
    out.push_str("</div>");
    out
}

fn modern(descriptor: &TemplateDescriptor, data: &ResumeData) -> String {
    let accent = descriptor.accent();
    let secondary = descriptor.secondary();
    let mut out = format!(
        r#"<div class="cv cv-modern" style="background:{};font-family:'Inter', Arial, sans-serif">"#,
        descriptor.background()
    );
    out.push_str(&format!(
        r#"<header class="cv-header" style="background:{accent};color:#FFFFFF;padding:24px 32px"><h1 class="cv-name">{}</h1><p class="cv-contact">{}</p></header>"#,
        full_name(data),
        contact_items(data).join(" &bull; ")
    ));

    let title_style = format!("color:{accent};border-bottom:2px solid {secondary}");
    let style = SectionStyle {
        titles: &PROFESSIONAL_TITLES,
        title_style: &title_style,
        skills: SkillStyle::Chips,
        accent,
        muted: secondary,
        track: "#EFF6FF",
    };
    out.push_str(r#"<main class="cv-body" style="padding:24px 32px">"#);
    out.push_str(&render_sections(&ordered_sections(descriptor), data, &style));
    out.push_str("</main></div>");
    out
}

fn classic(descriptor: &TemplateDescriptor, data: &ResumeData) -> String {
    let accent = descriptor.accent();
    let secondary = descriptor.secondary();
    let mut out = format!(
        r#"<div class="cv cv-classic" style="background:{};color:{accent};font-family:Georgia, 'Times New Roman', serif">"#,
        descriptor.background()
    );
    out.push_str(&format!(
        r#"<header class="cv-header" style="text-align:center;border-bottom:3px double {accent}"><h1 class="cv-name" style="letter-spacing:2px">{}</h1><p class="cv-contact" style="color:{secondary}">{}</p></header>"#,
        full_name(data),
        contact_items(data).join(" | ")
    ));

    let title_style = format!(
        "text-transform:uppercase;letter-spacing:1px;border-bottom:1px solid {secondary}"
    );
    let style = SectionStyle {
        titles: &PROFESSIONAL_TITLES,
        title_style: &title_style,
        skills: SkillStyle::Inline,
        accent,
        muted: secondary,
        track: secondary,
    };
    out.push_str(&render_sections(&ordered_sections(descriptor), data, &style));
    out.push_str("</div>");
    out
}

fn sidebar(descriptor: &TemplateDescriptor, data: &ResumeData) -> String {
    let accent = descriptor.accent();
    let secondary = descriptor.secondary();
    let sections = ordered_sections(descriptor);

    let mut out = format!(
        r#"<div class="cv cv-sidebar" style="display:flex;background:{};font-family:'Poppins', Arial, sans-serif">"#,
        descriptor.background()
    );

    out.push_str(&format!(
        r#"<aside class="cv-aside" style="width:32%;background:{accent};color:#FFFFFF;padding:24px">"#
    ));
    out.push_str(r#"<div class="cv-header">"#);
    out.push_str(&photo(data, 120, secondary));
    out.push_str(&format!(
        r#"<h1 class="cv-name">{}</h1><div class="cv-contact">"#,
        full_name(data)
    ));
    for item in contact_items(data) {
        out.push_str(&format!("<p>{item}</p>"));
    }
    out.push_str("</div></div>");
    let aside_style = SectionStyle {
        titles: &PROFESSIONAL_TITLES,
        title_style: "color:#FFFFFF;text-transform:uppercase",
        skills: SkillStyle::Bars,
        accent: "#FFFFFF",
        muted: secondary,
        track: secondary,
    };
    let aside: Vec<Section> = sections
        .iter()
        .copied()
        .filter(|s| *s == Section::Skills)
        .collect();
    out.push_str(&render_sections(&aside, data, &aside_style));
    out.push_str("</aside>");

    let title_style = format!("color:{accent};border-left:4px solid {secondary};padding-left:8px");
    let main_style = SectionStyle {
        titles: &PROFESSIONAL_TITLES,
        title_style: &title_style,
        skills: SkillStyle::Bars,
        accent,
        muted: "#6B7280",
        track: secondary,
    };
    let main: Vec<Section> = sections
        .iter()
        .copied()
        .filter(|s| *s != Section::Skills)
        .collect();
    out.push_str(r#"<main class="cv-body" style="width:68%;padding:24px">"#);
    out.push_str(&render_sections(&main, data, &main_style));
    out.push_str("</main></div>");
    out
}

fn minimal(descriptor: &TemplateDescriptor, data: &ResumeData) -> String {
    let accent = descriptor.accent();
    let secondary = descriptor.secondary();
    let mut out = format!(
        r#"<div class="cv cv-minimal" style="background:{};color:{accent};font-family:'Helvetica Neue', Arial, sans-serif">"#,
        descriptor.background()
    );
    out.push_str(&format!(
        r#"<header class="cv-header"><h1 class="cv-name" style="font-weight:300">{}</h1><p class="cv-contact" style="color:{secondary}">{}</p></header>"#,
        full_name(data),
        contact_items(data).join(" / ")
    ));
    let title_style = format!("font-variant:small-caps;color:{secondary};font-weight:400");
    let style = SectionStyle {
        titles: &BASIC_TITLES,
        title_style: &title_style,
        skills: SkillStyle::Inline,
        accent,
        muted: secondary,
        track: secondary,
    };
    out.push_str(&render_sections(&ordered_sections(descriptor), data, &style));
    out.push_str("</div>");
    out
}

fn timeline(descriptor: &TemplateDescriptor, data: &ResumeData) -> String {
    let accent = descriptor.accent();
    let secondary = descriptor.secondary();
    let mut out = format!(
        r#"<div class="cv cv-timeline" style="background:{};font-family:'Source Sans Pro', Arial, sans-serif">"#,
        descriptor.background()
    );
    out.push_str(&format!(
        r#"<header class="cv-header" style="border-left:6px solid {accent};padding-left:16px"><h1 class="cv-name" style="color:{accent}">{}</h1><p class="cv-contact">{}</p></header>"#,
        full_name(data),
        contact_items(data).join(" &bull; ")
    ));
    let title_style = format!("color:{accent}");
    let style = SectionStyle {
        titles: &PROFESSIONAL_TITLES,
        title_style: &title_style,
        skills: SkillStyle::Bars,
        accent,
        muted: "#4B5563",
        track: "#E5E7EB",
    };
    // The timeline rail wraps the whole body; entries sit on it via CSS.
    out.push_str(&format!(
        r#"<main class="cv-body cv-rail" style="border-left:2px solid {secondary};margin-left:8px;padding-left:20px">"#
    ));
    out.push_str(&render_sections(&ordered_sections(descriptor), data, &style));
    out.push_str("</main></div>");
    out
}

fn grid(descriptor: &TemplateDescriptor, data: &ResumeData) -> String {
    let accent = descriptor.accent();
    let secondary = descriptor.secondary();
    let sections = ordered_sections(descriptor);

    let mut out = format!(
        r#"<div class="cv cv-grid" style="background:{};font-family:'Roboto', Arial, sans-serif">"#,
        descriptor.background()
    );
    out.push_str(&format!(
        r#"<header class="cv-header" style="display:flex;align-items:center;gap:16px;border-bottom:4px solid {accent}">{}<div><h1 class="cv-name" style="color:{accent}">{}</h1><p class="cv-contact">{}</p></div></header>"#,
        photo(data, 88, accent),
        full_name(data),
        contact_items(data).join(" &bull; ")
    ));

    let title_style = format!("color:{accent};border-bottom:1px solid {secondary}");
    let style = SectionStyle {
        titles: &PROFESSIONAL_TITLES,
        title_style: &title_style,
        skills: SkillStyle::Bars,
        accent,
        muted: "#6B7280",
        track: secondary,
    };
    let column = |wanted: &[Section]| -> Vec<Section> {
        sections
            .iter()
            .copied()
            .filter(|s| wanted.contains(s))
            .collect()
    };
    out.push_str(r#"<div class="cv-columns" style="display:grid;grid-template-columns:1fr 1.4fr 1fr;gap:20px">"#);
    for wanted in [
        &[Section::Skills, Section::Summary][..],
        &[Section::Experience, Section::Projects][..],
        &[Section::Education, Section::Certifications][..],
    ] {
        out.push_str(r#"<div class="cv-column">"#);
        out.push_str(&render_sections(&column(wanted), data, &style));
        out.push_str("</div>");
    }
    out.push_str("</div></div>");
    out
}
