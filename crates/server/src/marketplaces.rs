//! Marketplace listing endpoints.

use api_types::marketplace::{
    CreateListing, ListingListQuery, ListingStatus as ApiListingStatus, ListingView,
};
use api_types::pagination::{Paginated, Pagination};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use engine::{CreateListingCmd, ListingFilter, ListingStatus, PageRequest, listings};

use crate::ServerError;
use crate::server::ServerState;

fn map_status(status: ApiListingStatus) -> ListingStatus {
    match status {
        ApiListingStatus::Draft => ListingStatus::Draft,
        ApiListingStatus::Active => ListingStatus::Active,
        ApiListingStatus::Paused => ListingStatus::Paused,
        ApiListingStatus::Sold => ListingStatus::Sold,
        ApiListingStatus::Ended => ListingStatus::Ended,
        ApiListingStatus::Error => ListingStatus::Error,
    }
}

fn map_status_back(status: ListingStatus) -> ApiListingStatus {
    match status {
        ListingStatus::Draft => ApiListingStatus::Draft,
        ListingStatus::Active => ApiListingStatus::Active,
        ListingStatus::Paused => ApiListingStatus::Paused,
        ListingStatus::Sold => ApiListingStatus::Sold,
        ListingStatus::Ended => ApiListingStatus::Ended,
        ListingStatus::Error => ApiListingStatus::Error,
    }
}

fn map_listing(listing: listings::Model) -> Result<ListingView, ServerError> {
    let status = ListingStatus::try_from(listing.listing_status.as_str())?;
    Ok(ListingView {
        id: listing.id,
        marketplace_id: listing.marketplace_id,
        inventory_item_id: listing.inventory_item_id,
        external_listing_id: listing.external_listing_id,
        listing_status: map_status_back(status),
        listed_price_minor: listing.listed_price_minor,
        currency: listing.currency,
        quantity_listed: listing.quantity_listed,
        url: listing.url,
        created_at: listing.created_at,
    })
}

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListingListQuery>,
) -> Result<Json<Paginated<ListingView>>, ServerError> {
    let page = PageRequest::clamped(query.page, query.page_size);
    let filter = ListingFilter {
        marketplace_id: query.marketplace_id,
        status: query.status.map(map_status),
    };

    let (rows, total) = state.engine.list_listings(filter, page).await?;

    let data = rows
        .into_iter()
        .map(map_listing)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(Paginated {
        data,
        pagination: Pagination {
            page: page.page,
            page_size: page.page_size,
            total,
        },
    }))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CreateListing>,
) -> Result<(StatusCode, Json<ListingView>), ServerError> {
    let listing = state
        .engine
        .create_listing(CreateListingCmd {
            marketplace_id: payload.marketplace_id,
            inventory_item_id: payload.inventory_item_id,
            external_listing_id: payload.external_listing_id,
            listing_status: payload.listing_status.map(map_status),
            listed_price_minor: payload.listed_price_minor,
            currency: payload.currency,
            quantity_listed: payload.quantity_listed,
            url: payload.url,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(map_listing(listing)?)))
}

pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<ListingView>, ServerError> {
    let listing = state.engine.listing(id).await?;
    Ok(Json(map_listing(listing)?))
}
