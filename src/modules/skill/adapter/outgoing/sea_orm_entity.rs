use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::skill::application::ports::outgoing::SkillRecord;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    pub name: String,

    pub category: String,

    pub level: i32,

    #[sea_orm(column_type = "Text", nullable)]
    pub icon: Option<String>,

    pub order: i32,
}

impl Model {
    pub fn to_record(&self) -> SkillRecord {
        SkillRecord {
            id: self.id,
            name: self.name.clone(),
            category: self.category.clone(),
            level: self.level,
            icon: self.icon.clone(),
            order: self.order,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
