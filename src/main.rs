pub mod modules;
pub use modules::auth;
pub mod health;
pub mod shared;

use crate::auth::adapter::incoming::web::guard::admin_page_guard;
use crate::auth::adapter::incoming::web::pages::{admin_home_page, admin_login_page};
use crate::auth::application::services::session::SessionService;
use crate::modules::about::adapter::outgoing::AboutRepositoryPostgres;
use crate::modules::about::application::ports::outgoing::AboutRepository;
use crate::modules::certificate::adapter::outgoing::CertificateRepositoryPostgres;
use crate::modules::certificate::application::ports::outgoing::CertificateRepository;
use crate::modules::contact::adapter::outgoing::ContactRepositoryPostgres;
use crate::modules::contact::application::ports::outgoing::ContactRepository;
use crate::modules::education::adapter::outgoing::EducationRepositoryPostgres;
use crate::modules::education::application::ports::outgoing::EducationRepository;
use crate::modules::experience::adapter::outgoing::{
    ExperienceProjectRepositoryPostgres, ExperienceRepositoryPostgres,
};
use crate::modules::experience::application::ports::outgoing::{
    ExperienceProjectRepository, ExperienceRepository,
};
use crate::modules::project::adapter::outgoing::ProjectRepositoryPostgres;
use crate::modules::project::application::ports::outgoing::ProjectRepository;
use crate::modules::skill::adapter::outgoing::SkillRepositoryPostgres;
use crate::modules::skill::application::ports::outgoing::SkillRepository;
use crate::shared::api::custom_json_config;

use actix_web::{middleware::from_fn, web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionService,
    pub abouts: Arc<dyn AboutRepository>,
    pub skills: Arc<dyn SkillRepository>,
    pub experiences: Arc<dyn ExperienceRepository>,
    pub experience_projects: Arc<dyn ExperienceProjectRepository>,
    pub educations: Arc<dyn EducationRepository>,
    pub certificates: Arc<dyn CertificateRepository>,
    pub projects: Arc<dyn ProjectRepository>,
    pub contacts: Arc<dyn ContactRepository>,
}

#[actix_web::main]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    Migrator::up(&conn, None)
        .await
        .expect("Failed to run database migrations");

    let db_arc = Arc::new(conn);

    let state = AppState {
        sessions: SessionService::from_env(),
        abouts: Arc::new(AboutRepositoryPostgres::new(Arc::clone(&db_arc))),
        skills: Arc::new(SkillRepositoryPostgres::new(Arc::clone(&db_arc))),
        experiences: Arc::new(ExperienceRepositoryPostgres::new(Arc::clone(&db_arc))),
        experience_projects: Arc::new(ExperienceProjectRepositoryPostgres::new(Arc::clone(
            &db_arc,
        ))),
        educations: Arc::new(EducationRepositoryPostgres::new(Arc::clone(&db_arc))),
        certificates: Arc::new(CertificateRepositoryPostgres::new(Arc::clone(&db_arc))),
        projects: Arc::new(ProjectRepositoryPostgres::new(Arc::clone(&db_arc))),
        contacts: Arc::new(ContactRepositoryPostgres::new(Arc::clone(&db_arc))),
    };

    let db_for_server = Arc::clone(&db_arc);

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                web::scope("/admin")
                    .wrap(from_fn(admin_page_guard))
                    .route("", web::get().to(admin_home_page))
                    .route("/login", web::get().to(admin_login_page)),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_admin_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_admin_handler);
    // About
    cfg.service(crate::modules::about::adapter::incoming::web::routes::get_abouts_handler);
    cfg.service(crate::modules::about::adapter::incoming::web::routes::create_about_handler);
    cfg.service(crate::modules::about::adapter::incoming::web::routes::update_about_handler);
    cfg.service(crate::modules::about::adapter::incoming::web::routes::delete_about_handler);
    // Skills
    cfg.service(crate::modules::skill::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(crate::modules::skill::adapter::incoming::web::routes::create_skill_handler);
    // Experience
    cfg.service(
        crate::modules::experience::adapter::incoming::web::routes::get_experiences_handler,
    );
    cfg.service(
        crate::modules::experience::adapter::incoming::web::routes::create_experience_handler,
    );
    cfg.service(
        crate::modules::experience::adapter::incoming::web::routes::update_experience_handler,
    );
    cfg.service(
        crate::modules::experience::adapter::incoming::web::routes::delete_experience_handler,
    );
    cfg.service(
        crate::modules::experience::adapter::incoming::web::routes::create_experience_project_handler,
    );
    cfg.service(
        crate::modules::experience::adapter::incoming::web::routes::update_experience_project_handler,
    );
    cfg.service(
        crate::modules::experience::adapter::incoming::web::routes::delete_experience_project_handler,
    );
    // Education
    cfg.service(crate::modules::education::adapter::incoming::web::routes::get_educations_handler);
    cfg.service(
        crate::modules::education::adapter::incoming::web::routes::create_education_handler,
    );
    cfg.service(
        crate::modules::education::adapter::incoming::web::routes::update_education_handler,
    );
    cfg.service(
        crate::modules::education::adapter::incoming::web::routes::delete_education_handler,
    );
    // Certificates
    cfg.service(
        crate::modules::certificate::adapter::incoming::web::routes::get_certificates_handler,
    );
    cfg.service(
        crate::modules::certificate::adapter::incoming::web::routes::create_certificate_handler,
    );
    cfg.service(
        crate::modules::certificate::adapter::incoming::web::routes::update_certificate_handler,
    );
    cfg.service(
        crate::modules::certificate::adapter::incoming::web::routes::delete_certificate_handler,
    );
    // Projects
    cfg.service(crate::modules::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::delete_project_handler);
    // Contact
    cfg.service(crate::modules::contact::adapter::incoming::web::routes::submit_contact_handler);
    cfg.service(crate::modules::contact::adapter::incoming::web::routes::get_contacts_handler);
    cfg.service(crate::modules::contact::adapter::incoming::web::routes::update_contact_handler);
    cfg.service(crate::modules::contact::adapter::incoming::web::routes::delete_contact_handler);
}

fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
