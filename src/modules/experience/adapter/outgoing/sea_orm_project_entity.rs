use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::experience::application::ports::outgoing::ExperienceProjectRecord;
use crate::shared::db::StringList;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "experience_projects")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub experience_id: Uuid,

    pub name: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub technologies: StringList,

    pub team_size: i32,

    #[sea_orm(column_type = "JsonBinary")]
    pub responsibilities: StringList,

    pub order: i32,
}

impl Model {
    pub fn to_record(&self) -> ExperienceProjectRecord {
        ExperienceProjectRecord {
            id: self.id,
            experience_id: self.experience_id,
            name: self.name.clone(),
            description: self.description.clone(),
            technologies: self.technologies.to_vec(),
            team_size: self.team_size,
            responsibilities: self.responsibilities.to_vec(),
            order: self.order,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sea_orm_entity::Entity",
        from = "Column::ExperienceId",
        to = "super::sea_orm_entity::Column::Id",
        on_delete = "Cascade"
    )]
    Experience,
}

impl Related<super::sea_orm_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Experience.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
