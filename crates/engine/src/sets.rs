//! Card set reference data (read-only from the API).

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub set_code: String,
    pub name: String,
    pub series: Option<String>,
    pub release_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::card_prints::Entity")]
    CardPrints,
}

impl Related<super::card_prints::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CardPrints.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
