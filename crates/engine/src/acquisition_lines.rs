//! Acquisition lines.
//!
//! Each line names an inventory item, a quantity and the cost components in
//! minor units. Lines are owned by their header and cascade with it.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "acquisition_lines")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub acquisition_id: i64,
    pub inventory_item_id: i64,
    pub language_id: Option<i64>,
    pub quantity: i32,
    pub unit_cost_minor: i64,
    pub fees_minor: i64,
    pub shipping_minor: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::acquisitions::Entity",
        from = "Column::AcquisitionId",
        to = "super::acquisitions::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Acquisitions,
    #[sea_orm(
        belongs_to = "super::inventory_items::Entity",
        from = "Column::InventoryItemId",
        to = "super::inventory_items::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    InventoryItems,
}

impl Related<super::acquisitions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Acquisitions.def()
    }
}

impl Related<super::inventory_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InventoryItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
