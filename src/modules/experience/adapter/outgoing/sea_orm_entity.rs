use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::shared::db::StringList;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    pub position: String,

    pub company: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub location: Option<String>,

    pub start_date: String,

    pub end_date: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub tech_stack: StringList,

    pub order: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sea_orm_project_entity::Entity")]
    ExperienceProjects,
}

impl Related<super::sea_orm_project_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExperienceProjects.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
