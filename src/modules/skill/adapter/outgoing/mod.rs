mod skill_repository_postgres;
pub mod sea_orm_entity;

pub use skill_repository_postgres::SkillRepositoryPostgres;
