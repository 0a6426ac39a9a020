pub mod handlers;
pub mod registry;
pub mod store;

use crate::models::resume::{
    CertificationEntry, EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, ResumeData,
    SkillEntry, SkillLevel,
};
use crate::models::template::NewTemplate;
use crate::render::{render_template, stylesheet};

/// Placeholder resume used to pre-render the markup stored with seeded templates.
pub fn sample_resume() -> ResumeData {
    ResumeData {
        personal_info: PersonalInfo {
            first_name: "Jordan".to_string(),
            last_name: "Smith".to_string(),
            email: "jordan.smith@example.com".to_string(),
            phone: "+1 555 010 0199".to_string(),
            address: "Austin, TX".to_string(),
            summary: "Product-minded software engineer with eight years of experience \
                      building reliable web platforms."
                .to_string(),
            photo: None,
            linked_in: Some("linkedin.com/in/jordansmith".to_string()),
            website: None,
        },
        experience: vec![
            ExperienceEntry {
                id: "exp-1".to_string(),
                title: "Senior Software Engineer".to_string(),
                company: "Northwind Labs".to_string(),
                location: "Austin, TX".to_string(),
                start_date: "2020-03".to_string(),
                end_date: String::new(),
                current: true,
                description: "Led the billing platform rewrite and cut invoice latency by 60%."
                    .to_string(),
            },
            ExperienceEntry {
                id: "exp-2".to_string(),
                title: "Software Engineer".to_string(),
                company: "Contoso".to_string(),
                location: "Dallas, TX".to_string(),
                start_date: "2016-06".to_string(),
                end_date: "2020-02".to_string(),
                current: false,
                description: "Built internal tooling used by 300 support agents.".to_string(),
            },
        ],
        education: vec![EducationEntry {
            id: "edu-1".to_string(),
            degree: "B.S. Computer Science".to_string(),
            school: "University of Texas".to_string(),
            location: "Austin, TX".to_string(),
            start_date: "2012-09".to_string(),
            end_date: "2016-05".to_string(),
            gpa: None,
        }],
        skills: vec![
            SkillEntry {
                id: "skill-1".to_string(),
                name: "TypeScript".to_string(),
                level: SkillLevel::Expert,
            },
            SkillEntry {
                id: "skill-2".to_string(),
                name: "PostgreSQL".to_string(),
                level: SkillLevel::Advanced,
            },
            SkillEntry {
                id: "skill-3".to_string(),
                name: "Kubernetes".to_string(),
                level: SkillLevel::Intermediate,
            },
        ],
        projects: vec![ProjectEntry {
            id: "proj-1".to_string(),
            name: "Open Ledger".to_string(),
            description: "Double-entry bookkeeping library with 2k GitHub stars.".to_string(),
            technologies: vec!["TypeScript".to_string(), "PostgreSQL".to_string()],
            start_date: "2021-01".to_string(),
            end_date: "2022-06".to_string(),
            url: None,
            github: Some("github.com/jordansmith/open-ledger".to_string()),
        }],
        certifications: vec![CertificationEntry {
            id: "cert-1".to_string(),
            name: "Certified Kubernetes Administrator".to_string(),
            issuer: "CNCF".to_string(),
            issue_date: "2022-09".to_string(),
            expiration_date: "2025-09".to_string(),
            credential_id: None,
            url: None,
        }],
    }
}

/// One stored template per registry descriptor, in catalog order.
pub fn seed_templates() -> Vec<NewTemplate> {
    let sample = sample_resume();
    registry::catalog()
        .iter()
        .map(|d| NewTemplate {
            name: d.name.clone(),
            description: d.description.clone(),
            category: d.category.to_lowercase(),
            preview_image: d.preview.clone(),
            html_template: render_template(d, &sample),
            css_styles: stylesheet(d),
            is_active: true,
            is_premium: d.is_premium,
        })
        .collect()
}
