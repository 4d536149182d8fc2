use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    auth::adapter::incoming::web::extractors::session::AdminSession,
    modules::education::application::ports::outgoing::EducationRepositoryError,
    shared::api::ApiResponse, AppState,
};

#[get("/api/admin/education")]
pub async fn get_educations_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.educations.list().await {
        Ok(entries) => ApiResponse::success(entries),

        Err(EducationRepositoryError::DatabaseError(e)) => {
            error!("Failed to list education entries: {}", e);
            ApiResponse::internal_error()
        }

        Err(EducationRepositoryError::NotFound) => ApiResponse::internal_error(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::modules::education::application::ports::outgoing::{
        EducationData, EducationRecord, EducationRepository,
    };
    use crate::tests::support::{admin_cookie, app_state_builder::TestAppStateBuilder};

    struct MockListEducations {
        result: Result<Vec<EducationRecord>, EducationRepositoryError>,
    }

    #[async_trait]
    impl EducationRepository for MockListEducations {
        async fn list(&self) -> Result<Vec<EducationRecord>, EducationRepositoryError> {
            self.result.clone()
        }

        async fn create(
            &self,
            _data: EducationData,
        ) -> Result<EducationRecord, EducationRepositoryError> {
            unimplemented!("not used in list tests")
        }

        async fn update(
            &self,
            _id: Uuid,
            _data: EducationData,
        ) -> Result<EducationRecord, EducationRepositoryError> {
            unimplemented!("not used in list tests")
        }

        async fn delete(&self, _id: Uuid) -> Result<(), EducationRepositoryError> {
            unimplemented!("not used in list tests")
        }
    }

    fn record(degree: &str, order: i32) -> EducationRecord {
        EducationRecord {
            id: Uuid::new_v4(),
            degree: degree.to_string(),
            school: "State University".to_string(),
            location: None,
            start_date: Some("2015".to_string()),
            end_date: None,
            description: None,
            order,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[actix_web::test]
    async fn returns_entries_with_camel_case_dates() {
        let state = TestAppStateBuilder::default()
            .with_educations(MockListEducations {
                result: Ok(vec![record("BSc", 0), record("MSc", 1)]),
            })
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(get_educations_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/admin/education")
            .cookie(admin_cookie())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["degree"], "BSc");
        assert_eq!(body["data"][0]["startDate"], "2015");
        assert_eq!(body["data"][0]["endDate"], serde_json::Value::Null);
    }

    #[actix_web::test]
    async fn missing_session_cookie_is_unauthorized() {
        let state = TestAppStateBuilder::default().build();

        let app =
            test::init_service(App::new().app_data(state).service(get_educations_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/admin/education")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
