//! Marketplace listing tracker: CRUD plus filtered listing.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::commands::CreateListingCmd;
use crate::listings::ListingStatus;
use crate::pagination::PageRequest;
use crate::{Currency, Engine, EngineError, ResultEngine, listings};

/// Optional, AND-combined listing filters.
#[derive(Clone, Copy, Debug, Default)]
pub struct ListingFilter {
    pub marketplace_id: Option<i64>,
    pub status: Option<ListingStatus>,
}

impl Engine {
    /// Lists external listings under `filter`, newest first, with the total
    /// count under the same filter.
    pub async fn list_listings(
        &self,
        filter: ListingFilter,
        page: PageRequest,
    ) -> ResultEngine<(Vec<listings::Model>, u64)> {
        let mut query = listings::Entity::find();
        if let Some(marketplace_id) = filter.marketplace_id {
            query = query.filter(listings::Column::MarketplaceId.eq(marketplace_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(listings::Column::ListingStatus.eq(status.as_str()));
        }

        let total = query.clone().count(&self.database).await?;
        let rows = query
            .order_by_desc(listings::Column::Id)
            .offset(page.offset())
            .limit(page.page_size)
            .all(&self.database)
            .await?;

        Ok((rows, total))
    }

    /// Creates a listing. The status defaults to `active` and the currency,
    /// when given, is validated and uppercased.
    pub async fn create_listing(&self, cmd: CreateListingCmd) -> ResultEngine<listings::Model> {
        if cmd.marketplace_id <= 0 {
            return Err(EngineError::Validation(
                "marketplace_id must be positive".to_string(),
            ));
        }
        if cmd.inventory_item_id <= 0 {
            return Err(EngineError::Validation(
                "inventory_item_id must be positive".to_string(),
            ));
        }
        let external_listing_id = cmd.external_listing_id.trim().to_string();
        if external_listing_id.is_empty() || external_listing_id.len() > 255 {
            return Err(EngineError::Validation(
                "external_listing_id must be 1-255 characters".to_string(),
            ));
        }
        if cmd.listed_price_minor.is_some_and(|price| price < 0) {
            return Err(EngineError::Validation(
                "listed_price_minor must not be negative".to_string(),
            ));
        }
        if cmd.quantity_listed.is_some_and(|quantity| quantity < 0) {
            return Err(EngineError::Validation(
                "quantity_listed must not be negative".to_string(),
            ));
        }
        let currency = cmd
            .currency
            .as_deref()
            .map(Currency::try_from)
            .transpose()?;

        let listing = listings::ActiveModel {
            id: ActiveValue::NotSet,
            marketplace_id: ActiveValue::Set(cmd.marketplace_id),
            inventory_item_id: ActiveValue::Set(cmd.inventory_item_id),
            external_listing_id: ActiveValue::Set(external_listing_id),
            listing_status: ActiveValue::Set(
                cmd.listing_status.unwrap_or_default().as_str().to_string(),
            ),
            listed_price_minor: ActiveValue::Set(cmd.listed_price_minor),
            currency: ActiveValue::Set(currency.map(|c| c.code().to_string())),
            quantity_listed: ActiveValue::Set(cmd.quantity_listed),
            url: ActiveValue::Set(cmd.url),
            created_at: ActiveValue::Set(Utc::now()),
        };

        Ok(listing.insert(&self.database).await?)
    }

    /// Returns a single listing.
    pub async fn listing(&self, id: i64) -> ResultEngine<listings::Model> {
        listings::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::NotFound(format!("listing {id}")))
    }
}
