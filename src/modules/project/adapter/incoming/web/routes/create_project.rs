use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::{
    auth::adapter::incoming::web::extractors::session::AdminSession,
    modules::project::application::ports::outgoing::ProjectData,
    shared::api::{
        coerce::{LenientInt, LenientList, Truthy},
        ApiResponse,
    },
    AppState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateProjectRequest {
    title: String,
    slug: String,
    description: String,
    content: Option<String>,
    #[serde(default)]
    tech_stack: LenientList,
    image_url: Option<String>,
    #[serde(default)]
    images: LenientList,
    demo_url: Option<String>,
    github_url: Option<String>,
    #[serde(default)]
    featured: Truthy,
    #[serde(default)]
    order: LenientInt,
}

#[post("/api/admin/projects")]
pub async fn create_project_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<CreateProjectRequest>,
) -> impl Responder {
    let req = payload.into_inner();

    let project = ProjectData {
        title: req.title,
        slug: req.slug,
        description: req.description,
        content: req.content,
        tech_stack: req.tech_stack.into_vec(),
        image_url: req.image_url,
        images: req.images.into_vec(),
        demo_url: req.demo_url,
        github_url: req.github_url,
        featured: req.featured.as_bool(),
        order: req.order.unwrap_or(0),
    };

    match data.projects.create(project).await {
        Ok(created) => ApiResponse::created(created),

        Err(err) => {
            error!("Failed to create project: {}", err);
            ApiResponse::internal_error()
        }
    }
}
