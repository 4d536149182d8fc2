use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::session::AdminSession,
    modules::about::application::ports::outgoing::AboutRepositoryError, shared::api::ApiResponse,
    AppState,
};

#[delete("/api/admin/about/{id}")]
pub async fn delete_about_handler(
    _session: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.abouts.delete(id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(AboutRepositoryError::NotFound) => {
            ApiResponse::not_found("ABOUT_NOT_FOUND", "About entry not found")
        }

        Err(AboutRepositoryError::DatabaseError(e)) => {
            error!("Failed to delete about entry {}: {}", id, e);
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

    use crate::modules::about::application::ports::outgoing::{
        AboutData, AboutRecord, AboutRepository,
    };
    use crate::tests::support::{admin_cookie, app_state_builder::TestAppStateBuilder};

    struct MockDeleteAbout {
        result: Result<(), AboutRepositoryError>,
    }

    #[async_trait]
    impl AboutRepository for MockDeleteAbout {
        async fn list(&self) -> Result<Vec<AboutRecord>, AboutRepositoryError> {
            unimplemented!("not used in delete tests")
        }

        async fn create(&self, _data: AboutData) -> Result<AboutRecord, AboutRepositoryError> {
            unimplemented!("not used in delete tests")
        }

        async fn update(
            &self,
            _id: Uuid,
            _data: AboutData,
        ) -> Result<AboutRecord, AboutRepositoryError> {
            unimplemented!("not used in delete tests")
        }

        async fn delete(&self, _id: Uuid) -> Result<(), AboutRepositoryError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn delete_returns_no_content() {
        let state = TestAppStateBuilder::default()
            .with_abouts(MockDeleteAbout { result: Ok(()) })
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(delete_about_handler)).await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/about/{}", Uuid::new_v4()))
            .cookie(admin_cookie())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn missing_id_is_not_found() {
        let state = TestAppStateBuilder::default()
            .with_abouts(MockDeleteAbout {
                result: Err(AboutRepositoryError::NotFound),
            })
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(delete_about_handler)).await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/about/{}", Uuid::new_v4()))
            .cookie(admin_cookie())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
