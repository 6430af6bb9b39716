//! Junction between card prints and the languages they were printed in.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "card_print_languages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub card_print_id: i64,
    pub language_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::card_prints::Entity",
        from = "Column::CardPrintId",
        to = "super::card_prints::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    CardPrints,
    #[sea_orm(
        belongs_to = "super::languages::Entity",
        from = "Column::LanguageId",
        to = "super::languages::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Languages,
}

impl Related<super::card_prints::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CardPrints.def()
    }
}

impl Related<super::languages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Languages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
