//! Card prints: one row per printed card in a set.
//!
//! A print can exist in several languages via the `card_print_languages`
//! junction. The catalog treats prints as immutable reference data; they are
//! bulk-loaded outside the API.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "card_prints")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub set_id: i64,
    pub card_number: String,
    pub name: String,
    pub rarity: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sets::Entity",
        from = "Column::SetId",
        to = "super::sets::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Sets,
    #[sea_orm(has_many = "super::card_print_languages::Entity")]
    CardPrintLanguages,
    #[sea_orm(has_many = "super::inventory_items::Entity")]
    InventoryItems,
}

impl Related<super::sets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sets.def()
    }
}

impl Related<super::card_print_languages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CardPrintLanguages.def()
    }
}

impl Related<super::inventory_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InventoryItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
