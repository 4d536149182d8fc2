use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::certificate::application::ports::outgoing::CertificateRecord;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "certificates")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    pub name: String,

    pub issuer: String,

    pub date: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub url: Option<String>,

    pub order: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> CertificateRecord {
        CertificateRecord {
            id: self.id,
            name: self.name.clone(),
            issuer: self.issuer.clone(),
            date: self.date.clone(),
            url: self.url.clone(),
            order: self.order,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
