mod experience_project_repository_postgres;
mod experience_repository_postgres;
pub mod sea_orm_entity;
pub mod sea_orm_project_entity;

pub use experience_project_repository_postgres::ExperienceProjectRepositoryPostgres;
pub use experience_repository_postgres::ExperienceRepositoryPostgres;
