use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::session::AdminSession,
    modules::experience::application::ports::outgoing::ExperienceProjectData,
    shared::api::{
        coerce::{LenientInt, LenientList},
        ApiResponse,
    },
    AppState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateExperienceProjectRequest {
    experience_id: Uuid,
    name: String,
    description: String,
    #[serde(default)]
    technologies: LenientList,
    #[serde(default)]
    team_size: LenientInt,
    #[serde(default)]
    responsibilities: LenientList,
    #[serde(default)]
    order: LenientInt,
}

#[post("/api/admin/experience-projects")]
pub async fn create_experience_project_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<CreateExperienceProjectRequest>,
) -> impl Responder {
    let req = payload.into_inner();

    let project = ExperienceProjectData {
        experience_id: req.experience_id,
        name: req.name,
        description: req.description,
        technologies: req.technologies.into_vec(),
        team_size: req.team_size.unwrap_or(1),
        responsibilities: req.responsibilities.into_vec(),
        order: req.order.unwrap_or(0),
    };

    match data.experience_projects.create(project).await {
        Ok(created) => ApiResponse::created(created),

        Err(err) => {
            error!("Failed to create experience project: {}", err);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    use crate::modules::experience::application::ports::outgoing::{
        ExperienceProjectRecord, ExperienceProjectRepository, ExperienceProjectRepositoryError,
    };
    use crate::tests::support::{admin_cookie, app_state_builder::TestAppStateBuilder};

    struct EchoCreateExperienceProject;

    #[async_trait]
    impl ExperienceProjectRepository for EchoCreateExperienceProject {
        async fn create(
            &self,
            data: ExperienceProjectData,
        ) -> Result<ExperienceProjectRecord, ExperienceProjectRepositoryError> {
            Ok(ExperienceProjectRecord {
                id: Uuid::new_v4(),
                experience_id: data.experience_id,
                name: data.name,
                description: data.description,
                technologies: data.technologies,
                team_size: data.team_size,
                responsibilities: data.responsibilities,
                order: data.order,
            })
        }

        async fn update(
            &self,
            _id: Uuid,
            _data: ExperienceProjectData,
        ) -> Result<ExperienceProjectRecord, ExperienceProjectRepositoryError> {
            unimplemented!("not used in create tests")
        }

        async fn delete(&self, _id: Uuid) -> Result<(), ExperienceProjectRepositoryError> {
            unimplemented!("not used in create tests")
        }
    }

    #[actix_web::test]
    async fn creates_project_under_an_experience() {
        let state = TestAppStateBuilder::default()
            .with_experience_projects(EchoCreateExperienceProject)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(create_experience_project_handler),
        )
        .await;

        let experience_id = Uuid::new_v4();
        let req = test::TestRequest::post()
            .uri("/api/admin/experience-projects")
            .cookie(admin_cookie())
            .set_json(serde_json::json!({
                "experienceId": experience_id,
                "name": "Billing",
                "description": "Invoicing pipeline",
                "technologies": ["Rust"],
                "teamSize": "5",
                "responsibilities": ["API design"]
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["experienceId"], experience_id.to_string());
        assert_eq!(body["data"]["teamSize"], 5);
        assert_eq!(body["data"]["responsibilities"][0], "API design");
    }

    #[actix_web::test]
    async fn blank_team_size_defaults_to_one() {
        let state = TestAppStateBuilder::default()
            .with_experience_projects(EchoCreateExperienceProject)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(create_experience_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/experience-projects")
            .cookie(admin_cookie())
            .set_json(serde_json::json!({
                "experienceId": Uuid::new_v4(),
                "name": "Billing",
                "description": "Invoicing pipeline",
                "teamSize": ""
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["teamSize"], 1);
        assert_eq!(body["data"]["technologies"], serde_json::json!([]));
    }
}
