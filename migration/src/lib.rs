pub use sea_orm_migration::prelude::*;

mod m20260310_100001_create_table_abouts;
mod m20260310_100002_create_table_skills;
mod m20260310_100003_create_table_experiences;
mod m20260310_100004_create_table_experience_projects;
mod m20260310_100005_create_table_educations;
mod m20260310_100006_create_table_certificates;
mod m20260310_100007_create_table_projects;
mod m20260310_100008_create_table_contacts;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260310_100001_create_table_abouts::Migration),
            Box::new(m20260310_100002_create_table_skills::Migration),
            Box::new(m20260310_100003_create_table_experiences::Migration),
            Box::new(m20260310_100004_create_table_experience_projects::Migration),
            Box::new(m20260310_100005_create_table_educations::Migration),
            Box::new(m20260310_100006_create_table_certificates::Migration),
            Box::new(m20260310_100007_create_table_projects::Migration),
            Box::new(m20260310_100008_create_table_contacts::Migration),
        ]
    }
}
