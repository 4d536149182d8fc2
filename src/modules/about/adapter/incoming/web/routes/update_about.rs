use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::session::AdminSession,
    modules::about::application::ports::outgoing::{AboutData, AboutRepositoryError},
    shared::api::{coerce::LenientInt, ApiResponse},
    AppState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateAboutRequest {
    key: String,
    title: Option<String>,
    content: String,
    #[serde(default)]
    order: LenientInt,
}

#[put("/api/admin/about/{id}")]
pub async fn update_about_handler(
    _session: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
    payload: web::Json<UpdateAboutRequest>,
) -> impl Responder {
    let id = path.into_inner();
    let req = payload.into_inner();

    let entry = AboutData {
        key: req.key,
        title: req.title,
        content: req.content,
        order: req.order.unwrap_or(0),
    };

    match data.abouts.update(id, entry).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(AboutRepositoryError::NotFound) => {
            ApiResponse::not_found("ABOUT_NOT_FOUND", "About entry not found")
        }

        Err(AboutRepositoryError::DatabaseError(e)) => {
            error!("Failed to update about entry {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::modules::about::application::ports::outgoing::{AboutRecord, AboutRepository};
    use crate::tests::support::{admin_cookie, app_state_builder::TestAppStateBuilder};

    enum Behavior {
        Echo,
        NotFound,
        DbError,
    }

    struct MockUpdateAbout {
        behavior: Behavior,
    }

    #[async_trait]
    impl AboutRepository for MockUpdateAbout {
        async fn list(&self) -> Result<Vec<AboutRecord>, AboutRepositoryError> {
            unimplemented!("not used in update tests")
        }

        async fn create(&self, _data: AboutData) -> Result<AboutRecord, AboutRepositoryError> {
            unimplemented!("not used in update tests")
        }

        async fn update(
            &self,
            id: Uuid,
            data: AboutData,
        ) -> Result<AboutRecord, AboutRepositoryError> {
            match self.behavior {
                Behavior::Echo => Ok(AboutRecord {
                    id,
                    key: data.key,
                    title: data.title,
                    content: data.content,
                    order: data.order,
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                }),
                Behavior::NotFound => Err(AboutRepositoryError::NotFound),
                Behavior::DbError => {
                    Err(AboutRepositoryError::DatabaseError("update failed".into()))
                }
            }
        }

        async fn delete(&self, _id: Uuid) -> Result<(), AboutRepositoryError> {
            unimplemented!("not used in update tests")
        }
    }

    fn update_json() -> serde_json::Value {
        serde_json::json!({
            "key": "intro",
            "title": "Hello",
            "content": "Updated content",
            "order": 5
        })
    }

    #[actix_web::test]
    async fn updates_entry_by_id() {
        let state = TestAppStateBuilder::default()
            .with_abouts(MockUpdateAbout {
                behavior: Behavior::Echo,
            })
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(update_about_handler)).await;

        let id = Uuid::new_v4();
        let req = test::TestRequest::put()
            .uri(&format!("/api/admin/about/{id}"))
            .cookie(admin_cookie())
            .set_json(update_json())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], id.to_string());
        assert_eq!(body["data"]["content"], "Updated content");
        assert_eq!(body["data"]["order"], 5);
    }

    #[actix_web::test]
    async fn update_is_idempotent_for_equal_payloads() {
        let state = TestAppStateBuilder::default()
            .with_abouts(MockUpdateAbout {
                behavior: Behavior::Echo,
            })
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(update_about_handler)).await;

        let id = Uuid::new_v4();
        let mut bodies = Vec::new();

        for _ in 0..2 {
            let req = test::TestRequest::put()
                .uri(&format!("/api/admin/about/{id}"))
                .cookie(admin_cookie())
                .set_json(update_json())
                .to_request();

            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);

            let mut body: serde_json::Value = test::read_body_json(resp).await;
            // updatedAt moves forward; the record fields must not
            body["data"]
                .as_object_mut()
                .unwrap()
                .remove("updatedAt");
            body["data"].as_object_mut().unwrap().remove("createdAt");
            bodies.push(body);
        }

        assert_eq!(bodies[0], bodies[1]);
    }

    #[actix_web::test]
    async fn missing_id_is_not_found() {
        let state = TestAppStateBuilder::default()
            .with_abouts(MockUpdateAbout {
                behavior: Behavior::NotFound,
            })
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(update_about_handler)).await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/admin/about/{}", Uuid::new_v4()))
            .cookie(admin_cookie())
            .set_json(update_json())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "ABOUT_NOT_FOUND");
    }

    #[actix_web::test]
    async fn database_error_is_internal_error() {
        let state = TestAppStateBuilder::default()
            .with_abouts(MockUpdateAbout {
                behavior: Behavior::DbError,
            })
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(update_about_handler)).await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/admin/about/{}", Uuid::new_v4()))
            .cookie(admin_cookie())
            .set_json(update_json())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
