use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::session::AdminSession,
    modules::project::application::ports::outgoing::{ProjectData, ProjectRepositoryError},
    shared::api::{
        coerce::{LenientInt, LenientList, Truthy},
        ApiResponse,
    },
    AppState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateProjectRequest {
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

#[put("/api/admin/projects/{id}")]
pub async fn update_project_handler(
    _session: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
    payload: web::Json<UpdateProjectRequest>,
) -> impl Responder {
    let id = path.into_inner();
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

    match data.projects.update(id, project).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(ProjectRepositoryError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(ProjectRepositoryError::DatabaseError(e)) => {
            error!("Failed to update project {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
