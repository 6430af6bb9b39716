//! Acquisition headers: one purchase event with one or more lines.
//!
//! Headers are written once by the poster and never updated in place.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "acquisitions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub acquired_at: DateTimeUtc,
    pub supplier_reference: Option<String>,
    pub channel: Option<String>,
    pub currency: String,
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::acquisition_lines::Entity")]
    AcquisitionLines,
}

impl Related<super::acquisition_lines::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AcquisitionLines.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
