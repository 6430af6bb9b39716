//! Command structs for engine write operations.
//!
//! These group parameters for the ledger, the poster and the listing tracker,
//! keeping call sites readable and avoiding long argument lists.

use chrono::{DateTime, Utc};

use crate::listings::ListingStatus;
use crate::movements::{MovementReference, MovementType};

/// Create an inventory item.
#[derive(Clone, Debug)]
pub struct CreateItemCmd {
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

impl CreateItemCmd {
    #[must_use]
    pub fn new(card_print_id: i64, user_id: i64, location_id: i64, condition_id: i64) -> Self {
        Self {
            card_print_id,
            user_id,
            location_id,
            condition_id,
            grade_provider: None,
            grade_value: None,
            quantity_on_hand: None,
            quantity_reserved: None,
            quantity_damaged: None,
        }
    }

    #[must_use]
    pub fn graded(mut self, provider: impl Into<String>, value: f64) -> Self {
        self.grade_provider = Some(provider.into());
        self.grade_value = Some(value);
        self
    }
}

/// Partial update of an inventory item: `None` leaves the column untouched.
#[derive(Clone, Debug, Default)]
pub struct UpdateItemCmd {
    pub location_id: Option<i64>,
    pub condition_id: Option<i64>,
    pub grade_provider: Option<String>,
    pub grade_value: Option<f64>,
    pub quantity_on_hand: Option<i32>,
    pub quantity_reserved: Option<i32>,
    pub quantity_damaged: Option<i32>,
}

/// Append a movement to the inventory ledger.
#[derive(Clone, Debug)]
pub struct RecordMovementCmd {
    pub inventory_item_id: i64,
    pub movement_type: MovementType,
    pub quantity_delta: i32,
    pub occurred_at: Option<DateTime<Utc>>,
    pub reference: MovementReference,
    pub notes: Option<String>,
    pub created_by: Option<String>,
}

impl RecordMovementCmd {
    #[must_use]
    pub fn new(inventory_item_id: i64, movement_type: MovementType, quantity_delta: i32) -> Self {
        Self {
            inventory_item_id,
            movement_type,
            quantity_delta,
            occurred_at: None,
            reference: MovementReference::None,
            notes: None,
            created_by: None,
        }
    }

    #[must_use]
    pub fn reference(mut self, reference: MovementReference) -> Self {
        self.reference = reference;
        self
    }
}

/// One line of an acquisition to post.
#[derive(Clone, Debug)]
pub struct AcquisitionLineInput {
    pub inventory_item_id: i64,
    pub language_id: Option<i64>,
    pub quantity: i32,
    pub unit_cost_minor: i64,
    pub fees_minor: Option<i64>,
    pub shipping_minor: Option<i64>,
}

impl AcquisitionLineInput {
    #[must_use]
    pub fn new(inventory_item_id: i64, quantity: i32, unit_cost_minor: i64) -> Self {
        Self {
            inventory_item_id,
            language_id: None,
            quantity,
            unit_cost_minor,
            fees_minor: None,
            shipping_minor: None,
        }
    }
}

/// Post an acquisition: header, lines and purchase movements in one unit.
#[derive(Clone, Debug)]
pub struct PostAcquisitionCmd {
    pub acquired_at: DateTime<Utc>,
    pub supplier_reference: Option<String>,
    pub channel: Option<String>,
    pub currency: String,
    pub notes: Option<String>,
    pub lines: Vec<AcquisitionLineInput>,
}

impl PostAcquisitionCmd {
    #[must_use]
    pub fn new(acquired_at: DateTime<Utc>, currency: impl Into<String>) -> Self {
        Self {
            acquired_at,
            supplier_reference: None,
            channel: None,
            currency: currency.into(),
            notes: None,
            lines: Vec::new(),
        }
    }

    #[must_use]
    pub fn line(mut self, line: AcquisitionLineInput) -> Self {
        self.lines.push(line);
        self
    }
}

/// One line of a sale to post.
#[derive(Clone, Debug)]
pub struct SaleLineInput {
    pub inventory_item_id: i64,
    pub language_id: Option<i64>,
    pub quantity: i32,
    pub unit_price_minor: i64,
    pub fees_minor: Option<i64>,
    pub shipping_minor: Option<i64>,
}

impl SaleLineInput {
    #[must_use]
    pub fn new(inventory_item_id: i64, quantity: i32, unit_price_minor: i64) -> Self {
        Self {
            inventory_item_id,
            language_id: None,
            quantity,
            unit_price_minor,
            fees_minor: None,
            shipping_minor: None,
        }
    }
}

/// Post a sale: header, lines and sale movements in one unit.
#[derive(Clone, Debug)]
pub struct PostSaleCmd {
    pub sold_at: DateTime<Utc>,
    pub buyer_reference: Option<String>,
    pub channel: Option<String>,
    pub currency: String,
    pub notes: Option<String>,
    pub lines: Vec<SaleLineInput>,
}

impl PostSaleCmd {
    #[must_use]
    pub fn new(sold_at: DateTime<Utc>, currency: impl Into<String>) -> Self {
        Self {
            sold_at,
            buyer_reference: None,
            channel: None,
            currency: currency.into(),
            notes: None,
            lines: Vec::new(),
        }
    }

    #[must_use]
    pub fn line(mut self, line: SaleLineInput) -> Self {
        self.lines.push(line);
        self
    }
}

/// Create an external marketplace listing.
#[derive(Clone, Debug)]
pub struct CreateListingCmd {
    pub marketplace_id: i64,
    pub inventory_item_id: i64,
    pub external_listing_id: String,
    pub listing_status: Option<ListingStatus>,
    pub listed_price_minor: Option<i64>,
    pub currency: Option<String>,
    pub quantity_listed: Option<i32>,
    pub url: Option<String>,
}

impl CreateListingCmd {
    #[must_use]
    pub fn new(
        marketplace_id: i64,
        inventory_item_id: i64,
        external_listing_id: impl Into<String>,
    ) -> Self {
        Self {
            marketplace_id,
            inventory_item_id,
            external_listing_id: external_listing_id.into(),
            listing_status: None,
            listed_price_minor: None,
            currency: None,
            quantity_listed: None,
            url: None,
        }
    }
}
