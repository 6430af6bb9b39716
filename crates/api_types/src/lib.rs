//! Request/response types shared between the server and its clients.
//!
//! Everything serializes as camelCase JSON, matching the public REST surface.
//! Monetary fields are integer minor units next to a 3-letter currency code.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

pub mod pagination {
    use super::*;

    /// The effective page applied to a list query plus the total row count
    /// under the same filter.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Pagination {
        pub page: u64,
        pub page_size: u64,
        pub total: u64,
    }

    /// A page of rows with its pagination envelope.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct Paginated<T> {
        pub data: Vec<T>,
        pub pagination: Pagination,
    }
}

pub mod auth {
    use super::*;

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct LoginRequest {
        pub username: String,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RefreshRequest {
        pub refresh_token: String,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TokenResponse {
        pub access_token: String,
        pub refresh_token: String,
        /// Always `"Bearer"`.
        pub token_type: String,
        /// Access token lifetime in seconds.
        pub expires_in: i64,
    }

    #[derive(Clone, Copy, Debug, Serialize, Deserialize)]
    pub struct LogoutResponse {
        pub success: bool,
    }
}

pub mod health {
    use super::*;

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct Health {
        pub status: String,
        pub service: String,
    }
}

pub mod catalog {
    use super::*;

    /// Query string for `GET /catalog/card-prints`. Pagination values are
    /// clamped server-side, never rejected.
    #[derive(Clone, Debug, Default, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CardPrintListQuery {
        pub page: Option<i64>,
        pub page_size: Option<i64>,
        pub set_code: Option<String>,
        pub language: Option<String>,
        pub card_number: Option<String>,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SetView {
        pub id: i64,
        pub set_code: String,
        pub name: String,
        pub series: Option<String>,
        pub release_date: Option<chrono::NaiveDate>,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct LanguageView {
        pub id: i64,
        pub code: String,
        pub name: String,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CardPrintView {
        pub id: i64,
        pub set_id: i64,
        pub card_number: String,
        pub name: String,
        pub rarity: Option<String>,
        pub set: Option<SetView>,
        pub languages: Vec<LanguageView>,
    }
}

pub mod inventory {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum MovementType {
        Purchase,
        Sale,
        TransferIn,
        TransferOut,
        Adjustment,
    }

    #[derive(Clone, Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CreateInventoryItem {
        pub card_print_id: i64,
        pub user_id: i64,
        pub location_id: i64,
        pub condition_id: i64,
        pub grade_provider: Option<String>,
        pub grade_value: Option<f64>,
        pub quantity_on_hand: Option<i32>,
        pub quantity_reserved: Option<i32>,
        pub quantity_damaged: Option<i32>,
    }

    #[derive(Clone, Debug, Default, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct UpdateInventoryItem {
        pub location_id: Option<i64>,
        pub condition_id: Option<i64>,
        pub grade_provider: Option<String>,
        pub grade_value: Option<f64>,
        pub quantity_on_hand: Option<i32>,
        pub quantity_reserved: Option<i32>,
        pub quantity_damaged: Option<i32>,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct InventoryItemView {
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
        pub created_at: DateTime<Utc>,
    }

    /// The back-reference columns stay a kind/id string pair on the wire;
    /// the server parses them into its typed reference before writing.
    #[derive(Clone, Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CreateInventoryMovement {
        pub inventory_item_id: i64,
        pub movement_type: MovementType,
        pub quantity_delta: i32,
        pub occurred_at: Option<DateTime<FixedOffset>>,
        pub reference_type: Option<String>,
        pub reference_id: Option<String>,
        pub notes: Option<String>,
        pub created_by: Option<String>,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct MovementView {
        pub id: i64,
        pub inventory_item_id: i64,
        pub movement_type: MovementType,
        pub quantity_delta: i32,
        pub occurred_at: DateTime<Utc>,
        pub reference_type: Option<String>,
        pub reference_id: Option<String>,
        pub notes: Option<String>,
        pub created_by: Option<String>,
    }
}

pub mod marketplace {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum ListingStatus {
        Draft,
        Active,
        Paused,
        Sold,
        Ended,
        Error,
    }

    /// Query string for `GET /marketplaces/listings`.
    #[derive(Clone, Debug, Default, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ListingListQuery {
        pub page: Option<i64>,
        pub page_size: Option<i64>,
        pub marketplace_id: Option<i64>,
        pub status: Option<ListingStatus>,
    }

    #[derive(Clone, Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CreateListing {
        pub marketplace_id: i64,
        pub inventory_item_id: i64,
        pub external_listing_id: String,
        pub listing_status: Option<ListingStatus>,
        pub listed_price_minor: Option<i64>,
        pub currency: Option<String>,
        pub quantity_listed: Option<i32>,
        pub url: Option<String>,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ListingView {
        pub id: i64,
        pub marketplace_id: i64,
        pub inventory_item_id: i64,
        pub external_listing_id: String,
        pub listing_status: ListingStatus,
        pub listed_price_minor: Option<i64>,
        pub currency: Option<String>,
        pub quantity_listed: Option<i32>,
        pub url: Option<String>,
        pub created_at: DateTime<Utc>,
    }
}

pub mod transaction {
    use super::*;

    #[derive(Clone, Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct AcquisitionLineInput {
        pub inventory_item_id: i64,
        pub language_id: Option<i64>,
        pub quantity: i32,
        pub unit_cost_minor: i64,
        pub fees_minor: Option<i64>,
        pub shipping_minor: Option<i64>,
    }

    #[derive(Clone, Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CreateAcquisition {
        pub acquired_at: DateTime<FixedOffset>,
        pub supplier_reference: Option<String>,
        pub channel: Option<String>,
        pub currency: String,
        pub notes: Option<String>,
        pub lines: Vec<AcquisitionLineInput>,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct AcquisitionLineView {
        pub id: i64,
        pub acquisition_id: i64,
        pub inventory_item_id: i64,
        pub language_id: Option<i64>,
        pub quantity: i32,
        pub unit_cost_minor: i64,
        pub fees_minor: i64,
        pub shipping_minor: i64,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct AcquisitionView {
        pub id: i64,
        pub acquired_at: DateTime<Utc>,
        pub supplier_reference: Option<String>,
        pub channel: Option<String>,
        pub currency: String,
        pub notes: Option<String>,
        pub lines: Vec<AcquisitionLineView>,
    }

    #[derive(Clone, Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SaleLineInput {
        pub inventory_item_id: i64,
        pub language_id: Option<i64>,
        pub quantity: i32,
        pub unit_price_minor: i64,
        pub fees_minor: Option<i64>,
        pub shipping_minor: Option<i64>,
    }

    #[derive(Clone, Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CreateSale {
        pub sold_at: DateTime<FixedOffset>,
        pub buyer_reference: Option<String>,
        pub channel: Option<String>,
        pub currency: String,
        pub notes: Option<String>,
        pub lines: Vec<SaleLineInput>,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SaleLineView {
        pub id: i64,
        pub sale_id: i64,
        pub inventory_item_id: i64,
        pub language_id: Option<i64>,
        pub quantity: i32,
        pub unit_price_minor: i64,
        pub fees_minor: i64,
        pub shipping_minor: i64,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SaleView {
        pub id: i64,
        pub sold_at: DateTime<Utc>,
        pub buyer_reference: Option<String>,
        pub channel: Option<String>,
        pub currency: String,
        pub notes: Option<String>,
        pub lines: Vec<SaleLineView>,
    }
}

pub mod report {
    use super::*;

    /// Query string for `GET /reports/profitability/by-card`.
    #[derive(Clone, Debug, Default, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ReportQuery {
        pub page: Option<i64>,
        pub page_size: Option<i64>,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CardProfitView {
        pub card_print_id: i64,
        pub set_id: i64,
        pub set_name: String,
        pub language_id: Option<i64>,
        pub language_code: Option<String>,
        pub language_name: Option<String>,
        pub sold_quantity: i64,
        pub gross_revenue_minor: i64,
        pub cogs_minor: i64,
        pub gross_margin_minor: i64,
        pub realized_profit_minor: i64,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SetProfitView {
        pub set_id: i64,
        pub set_name: String,
        pub sold_quantity: i64,
        pub gross_revenue_minor: i64,
        pub cogs_minor: i64,
        pub gross_margin_minor: i64,
        pub realized_profit_minor: i64,
    }
}
