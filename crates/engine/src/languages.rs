//! Card languages (seeded reference data).

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "languages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub code: String,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::card_print_languages::Entity")]
    CardPrintLanguages,
}

impl Related<super::card_print_languages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CardPrintLanguages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
