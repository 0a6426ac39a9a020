//! Template Registry: the fixed, read-only catalog of template descriptors.
//!
//! Built once on first access and never mutated. Adding a template means adding
//! one descriptor here and one layout row in `render::layouts::LAYOUTS`.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::models::template::{TemplateDescriptor, TemplateLayout};

/// Template assigned to a resume when the client does not pick one.
pub const DEFAULT_TEMPLATE_ID: &str = "modern-professional";

const STANDARD_SECTIONS: &[&str] = &[
    "header",
    "summary",
    "experience",
    "education",
    "skills",
    "projects",
    "certifications",
];

/// Gallery filter. All present criteria are combined with AND.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateFilter {
    /// Category, compared case-insensitively; `"all"` disables the filter.
    pub category: Option<String>,
    /// Case-insensitive substring over name and description.
    pub search: Option<String>,
    pub has_photo: bool,
    pub premium_only: bool,
}

impl TemplateFilter {
    fn matches(&self, template: &TemplateDescriptor) -> bool {
        let category_ok = match self.category.as_deref() {
            None | Some("all") | Some("") => true,
            Some(category) => template.category.eq_ignore_ascii_case(category),
        };
        let search_ok = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                template.name.to_lowercase().contains(&term)
                    || template.description.to_lowercase().contains(&term)
            }
        };
        category_ok
            && search_ok
            && (!self.has_photo || template.has_photo)
            && (!self.premium_only || template.is_premium)
    }
}

struct Seed {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    description: &'static str,
    has_photo: bool,
    is_premium: bool,
    rating: f32,
    downloads: u32,
    colors: [&'static str; 3],
    layout: TemplateLayout,
    sections: &'static [&'static str],
}

const SEEDS: &[Seed] = &[
    Seed {
        id: DEFAULT_TEMPLATE_ID,
        name: "Modern Professional",
        category: "Modern",
        description: "A clean, modern template perfect for tech and business professionals",
        has_photo: false,
        is_premium: false,
        rating: 4.8,
        downloads: 12_450,
        colors: ["#2563EB", "#1E40AF", "#FFFFFF"],
        layout: TemplateLayout::SingleColumn,
        sections: STANDARD_SECTIONS,
    },
    Seed {
        id: "classic-executive",
        name: "Classic Executive",
        category: "Classic",
        description: "Traditional serif layout suited to finance, law and senior leadership roles",
        has_photo: false,
        is_premium: false,
        rating: 4.6,
        downloads: 9_870,
        colors: ["#1F2937", "#4B5563", "#FFFFFF"],
        layout: TemplateLayout::SingleColumn,
        sections: STANDARD_SECTIONS,
    },
    Seed {
        id: "creative-sidebar",
        name: "Creative Sidebar",
        category: "Creative",
        description: "Bold two-column design with a photo sidebar for designers and marketers",
        has_photo: true,
        is_premium: false,
        rating: 4.7,
        downloads: 8_120,
        colors: ["#7C3AED", "#A78BFA", "#F5F3FF"],
        layout: TemplateLayout::TwoColumn,
        sections: &["header", "summary", "experience", "projects", "skills", "education", "certifications"],
    },
    Seed {
        id: "minimal-clean",
        name: "Minimal Clean",
        category: "Minimal",
        description: "Whitespace-first layout that lets the content speak",
        has_photo: false,
        is_premium: false,
        rating: 4.5,
        downloads: 7_040,
        colors: ["#111827", "#9CA3AF", "#FFFFFF"],
        layout: TemplateLayout::SingleColumn,
        sections: &["header", "experience", "projects", "education", "certifications", "skills", "summary"],
    },
    Seed {
        id: "professional-timeline",
        name: "Professional Timeline",
        category: "Professional",
        description: "Career history on a vertical timeline with skill level bars",
        has_photo: false,
        is_premium: true,
        rating: 4.9,
        downloads: 5_310,
        colors: ["#0F766E", "#14B8A6", "#F0FDFA"],
        layout: TemplateLayout::SingleColumn,
        sections: STANDARD_SECTIONS,
    },
    Seed {
        id: "modern-grid",
        name: "Modern Grid",
        category: "Modern",
        description: "Three-column layout with photo and skill meters for technical profiles",
        has_photo: true,
        is_premium: true,
        rating: 4.4,
        downloads: 3_280,
        colors: ["#EA580C", "#FDBA74", "#FFF7ED"],
        layout: TemplateLayout::ThreeColumn,
        sections: &["header", "skills", "experience", "projects", "education", "certifications", "summary"],
    },
];

/// The full catalog, in gallery order. The first entry is the default template.
pub fn catalog() -> &'static [TemplateDescriptor] {
    static CATALOG: OnceLock<Vec<TemplateDescriptor>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        SEEDS
            .iter()
            .map(|seed| TemplateDescriptor {
                id: seed.id.to_string(),
                name: seed.name.to_string(),
                category: seed.category.to_string(),
                description: seed.description.to_string(),
                has_photo: seed.has_photo,
                is_premium: seed.is_premium,
                rating: seed.rating,
                downloads: seed.downloads,
                preview: format!("/templates/{}.png", seed.id),
                colors: seed.colors.map(str::to_string),
                layout: seed.layout,
                sections: seed.sections.iter().map(|s| s.to_string()).collect(),
            })
            .collect()
    })
}

/// Catalog entries matching `filter`, in catalog order.
pub fn list_templates(filter: &TemplateFilter) -> Vec<&'static TemplateDescriptor> {
    catalog().iter().filter(|t| filter.matches(t)).collect()
}

pub fn get_by_id(id: &str) -> Option<&'static TemplateDescriptor> {
    catalog().iter().find(|t| t.id == id)
}

pub fn default_template() -> &'static TemplateDescriptor {
    &catalog()[0]
}
