use axum::{http::header, response::IntoResponse};
use serde::Deserialize;

use crate::catalog::registry;
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::resume::ResumeData;
use crate::models::template::TemplateDescriptor;
use crate::render::render_document;

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    pub template_id: Option<String>,
    #[serde(default)]
    pub data: ResumeData,
}

/// Looks up a catalog template, or the default when none is named.
pub fn resolve_descriptor(template_id: Option<&str>) -> Result<&'static TemplateDescriptor, AppError> {
    match template_id {
        None => Ok(registry::default_template()),
        Some(id) => registry::get_by_id(id)
            .ok_or_else(|| AppError::NotFound(format!("Template {id} not found"))),
    }
}

/// POST /api/v1/render
/// Live preview of unsaved builder data.
pub async fn handle_render_preview(
    AppJson(req): AppJson<RenderRequest>,
) -> Result<impl IntoResponse, AppError> {
    let descriptor = resolve_descriptor(req.template_id.as_deref())?;
    let html = render_document(descriptor, &req.data);
    Ok(([(header::CONTENT_TYPE, HTML_CONTENT_TYPE)], html))
}
