//! Inventory items.
//!
//! An item is one tracked physical (possibly graded) unit of a card print,
//! held at a location in a condition. The three quantity counters are each
//! 0 or 1: an item models a single unit, not a fungible stack.
//!
//! The counters are a denormalized cache. The movement log
//! ([`movements`](super::movements)) is the history of record, and nothing in
//! the engine reconciles the two; correctness-sensitive reads (reporting) go
//! through the profitability view instead of these columns.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "inventory_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub card_print_id: i64,
    pub user_id: i64,
    pub location_id: i64,
    pub condition_id: i64,
    pub grade_provider: Option<String>,
    pub grade_value: Option<f64>,
    pub quantity_on_hand: i32,
    pub quantity_reserved: i32,
    pub quantity_damaged: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::card_prints::Entity",
        from = "Column::CardPrintId",
        to = "super::card_prints::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    CardPrints,
    #[sea_orm(
        belongs_to = "super::locations::Entity",
        from = "Column::LocationId",
        to = "super::locations::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Locations,
    #[sea_orm(
        belongs_to = "super::conditions::Entity",
        from = "Column::ConditionId",
        to = "super::conditions::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Conditions,
    #[sea_orm(has_many = "super::movements::Entity")]
    Movements,
    #[sea_orm(has_many = "super::listings::Entity")]
    Listings,
}

impl Related<super::card_prints::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CardPrints.def()
    }
}

impl Related<super::locations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Locations.def()
    }
}

impl Related<super::conditions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Conditions.def()
    }
}

impl Related<super::movements::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Movements.def()
    }
}

impl Related<super::listings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Listings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
