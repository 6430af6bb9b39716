//! Business engine for the bindery card-collection manager.
//!
//! The engine owns the domain operations on top of a sea-orm
//! [`DatabaseConnection`]: catalog lookup, the inventory ledger, transaction
//! posting, the marketplace listing tracker and profitability reporting.
//! The schema itself lives in the `migration` crate.

use sea_orm::DatabaseConnection;

pub use catalog::{CardPrintFilter, CardPrintView};
pub use commands::{
    AcquisitionLineInput, CreateItemCmd, CreateListingCmd, PostAcquisitionCmd, PostSaleCmd,
    RecordMovementCmd, SaleLineInput, UpdateItemCmd,
};
pub use currency::Currency;
pub use error::EngineError;
pub use listings::ListingStatus;
pub use marketplace::ListingFilter;
pub use movements::{Movement, MovementReference, MovementType};
pub use pagination::PageRequest;
pub use posting::{PostedAcquisition, PostedSale};
pub use reports::{CardProfitRow, SetProfitRow};

pub mod acquisition_lines;
pub mod acquisitions;
pub mod card_print_languages;
pub mod card_prints;
mod catalog;
mod commands;
pub mod conditions;
mod currency;
mod error;
pub mod inventory_items;
mod ledger;
pub mod languages;
pub mod listings;
pub mod locations;
mod marketplace;
pub mod marketplaces;
pub mod movements;
mod pagination;
mod posting;
mod reports;
pub mod sale_lines;
pub mod sales;
pub mod sets;

type ResultEngine<T> = Result<T, EngineError>;

/// The engine: every domain operation hangs off this.
#[derive(Clone, Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

/// The builder for `Engine`.
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database.
    #[must_use]
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`.
    #[must_use]
    pub fn build(self) -> Engine {
        Engine {
            database: self.database,
        }
    }
}
