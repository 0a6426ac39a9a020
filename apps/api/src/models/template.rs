use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::errors::AppError;

/// Stored spelling of the categories a template record may belong to, in
/// gallery order. The catalog capitalizes these for display.
pub const TEMPLATE_CATEGORIES: &[&str] = &["modern", "classic", "creative", "minimal", "professional"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateLayout {
    SingleColumn,
    TwoColumn,
    ThreeColumn,
}

/// Static visual metadata for one catalog template.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDescriptor {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub has_photo: bool,
    pub is_premium: bool,
    pub rating: f32,
    pub downloads: u32,
    pub preview: String,
    /// accent, secondary, background
    pub colors: [String; 3],
    pub layout: TemplateLayout,
    /// Render order. Names the renderer does not know are skipped.
    pub sections: Vec<String>,
}

impl TemplateDescriptor {
    pub fn accent(&self) -> &str {
        &self.colors[0]
    }

    pub fn secondary(&self) -> &str {
        &self.colors[1]
    }

    pub fn background(&self) -> &str {
        &self.colors[2]
    }
}

/// Persisted template record. `html_template` and `css_styles` are `None`
/// when a listing was requested without content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRecord {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub category: String,
    pub preview_image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_styles: Option<String>,
    pub is_active: bool,
    pub is_premium: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TemplateRecord {
    /// Drops the heavy markup and style fields.
    pub fn without_content(mut self) -> Self {
        self.html_template = None;
        self.css_styles = None;
        self
    }
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTemplate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub preview_image: String,
    #[serde(default)]
    pub html_template: String,
    #[serde(default)]
    pub css_styles: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub is_premium: bool,
}

impl NewTemplate {
    /// Checks required fields and stores the category in its canonical spelling.
    pub fn validate(&mut self) -> Result<(), AppError> {
        let required = [
            ("name", &self.name),
            ("description", &self.description),
            ("category", &self.category),
            ("previewImage", &self.preview_image),
            ("htmlTemplate", &self.html_template),
            ("cssStyles", &self.css_styles),
        ];
        if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(AppError::Validation(format!("{field} is required")));
        }
        self.category = canonical_category(&self.category)?;
        Ok(())
    }
}

/// Partial update: only the fields present in the body are written.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub preview_image: Option<String>,
    pub html_template: Option<String>,
    pub css_styles: Option<String>,
    pub is_active: Option<bool>,
    pub is_premium: Option<bool>,
}

impl TemplatePatch {
    pub fn validate(&mut self) -> Result<(), AppError> {
        if self.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(AppError::Validation("name cannot be empty".to_string()));
        }
        if let Some(category) = &self.category {
            self.category = Some(canonical_category(category)?);
        }
        Ok(())
    }

    pub fn apply(&self, record: &mut TemplateRecord) {
        if let Some(v) = &self.name {
            record.name = v.clone();
        }
        if let Some(v) = &self.description {
            record.description = v.clone();
        }
        if let Some(v) = &self.category {
            record.category = v.clone();
        }
        if let Some(v) = &self.preview_image {
            record.preview_image = v.clone();
        }
        if let Some(v) = &self.html_template {
            record.html_template = Some(v.clone());
        }
        if let Some(v) = &self.css_styles {
            record.css_styles = Some(v.clone());
        }
        if let Some(v) = self.is_active {
            record.is_active = v;
        }
        if let Some(v) = self.is_premium {
            record.is_premium = v;
        }
    }
}

/// Case-insensitive lookup; `"Modern"` and `"modern"` both store as `"modern"`.
pub fn canonical_category(category: &str) -> Result<String, AppError> {
    let lowered = category.trim().to_lowercase();
    if TEMPLATE_CATEGORIES.contains(&lowered.as_str()) {
        Ok(lowered)
    } else {
        Err(AppError::Validation(format!(
            "category must be one of: {}",
            TEMPLATE_CATEGORIES.join(", ")
        )))
    }
}
