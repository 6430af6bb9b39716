//! External marketplace listings.
//!
//! A listing is the marketplace-side projection of an inventory item. Its
//! lifecycle is independent of the ledger: creating or updating a listing has
//! no effect on inventory counters or movements.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::EngineError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    Draft,
    #[default]
    Active,
    Paused,
    Sold,
    Ended,
    Error,
}

impl ListingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Sold => "sold",
            Self::Ended => "ended",
            Self::Error => "error",
        }
    }
}

impl TryFrom<&str> for ListingStatus {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, EngineError> {
        match value {
            "draft" => Ok(Self::Draft),
            "active" => Ok(Self::Active),
            "paused" => Ok(Self::Paused),
            "sold" => Ok(Self::Sold),
            "ended" => Ok(Self::Ended),
            "error" => Ok(Self::Error),
            other => Err(EngineError::Validation(format!(
                "invalid listing status: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "external_listings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub marketplace_id: i64,
    pub inventory_item_id: i64,
    pub external_listing_id: String,
    pub listing_status: String,
    pub listed_price_minor: Option<i64>,
    pub currency: Option<String>,
    pub quantity_listed: Option<i32>,
    pub url: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::marketplaces::Entity",
        from = "Column::MarketplaceId",
        to = "super::marketplaces::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Marketplaces,
    #[sea_orm(
        belongs_to = "super::inventory_items::Entity",
        from = "Column::InventoryItemId",
        to = "super::inventory_items::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    InventoryItems,
}

impl Related<super::marketplaces::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Marketplaces.def()
    }
}

impl Related<super::inventory_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InventoryItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
