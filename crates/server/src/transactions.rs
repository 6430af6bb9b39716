//! Transaction posting endpoints.
//!
//! Each POST maps the payload to a posting command, lets the engine run the
//! atomic scope and returns the created header merged with its lines.

use api_types::transaction::{
    AcquisitionLineView, AcquisitionView, CreateAcquisition, CreateSale, SaleLineView, SaleView,
};
use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use engine::{
    AcquisitionLineInput, PostAcquisitionCmd, PostSaleCmd, PostedAcquisition, PostedSale,
    SaleLineInput,
};

use crate::ServerError;
use crate::server::ServerState;

fn map_acquisition(posted: PostedAcquisition) -> AcquisitionView {
    AcquisitionView {
        id: posted.acquisition.id,
        acquired_at: posted.acquisition.acquired_at,
        supplier_reference: posted.acquisition.supplier_reference,
        channel: posted.acquisition.channel,
        currency: posted.acquisition.currency,
        notes: posted.acquisition.notes,
        lines: posted
            .lines
            .into_iter()
            .map(|line| AcquisitionLineView {
                id: line.id,
                acquisition_id: line.acquisition_id,
                inventory_item_id: line.inventory_item_id,
                language_id: line.language_id,
                quantity: line.quantity,
                unit_cost_minor: line.unit_cost_minor,
                fees_minor: line.fees_minor,
                shipping_minor: line.shipping_minor,
            })
            .collect(),
    }
}

fn map_sale(posted: PostedSale) -> SaleView {
    SaleView {
        id: posted.sale.id,
        sold_at: posted.sale.sold_at,
        buyer_reference: posted.sale.buyer_reference,
        channel: posted.sale.channel,
        currency: posted.sale.currency,
        notes: posted.sale.notes,
        lines: posted
            .lines
            .into_iter()
            .map(|line| SaleLineView {
                id: line.id,
                sale_id: line.sale_id,
                inventory_item_id: line.inventory_item_id,
                language_id: line.language_id,
                quantity: line.quantity,
                unit_price_minor: line.unit_price_minor,
                fees_minor: line.fees_minor,
                shipping_minor: line.shipping_minor,
            })
            .collect(),
    }
}

pub async fn create_acquisition(
    State(state): State<ServerState>,
    Json(payload): Json<CreateAcquisition>,
) -> Result<(StatusCode, Json<AcquisitionView>), ServerError> {
    let posted = state
        .engine
        .post_acquisition(PostAcquisitionCmd {
            acquired_at: payload.acquired_at.with_timezone(&Utc),
            supplier_reference: payload.supplier_reference,
            channel: payload.channel,
            currency: payload.currency,
            notes: payload.notes,
            lines: payload
                .lines
                .into_iter()
                .map(|line| AcquisitionLineInput {
                    inventory_item_id: line.inventory_item_id,
                    language_id: line.language_id,
                    quantity: line.quantity,
                    unit_cost_minor: line.unit_cost_minor,
                    fees_minor: line.fees_minor,
                    shipping_minor: line.shipping_minor,
                })
                .collect(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(map_acquisition(posted))))
}

pub async fn create_sale(
    State(state): State<ServerState>,
    Json(payload): Json<CreateSale>,
) -> Result<(StatusCode, Json<SaleView>), ServerError> {
    let posted = state
        .engine
        .post_sale(PostSaleCmd {
            sold_at: payload.sold_at.with_timezone(&Utc),
            buyer_reference: payload.buyer_reference,
            channel: payload.channel,
            currency: payload.currency,
            notes: payload.notes,
            lines: payload
                .lines
                .into_iter()
                .map(|line| SaleLineInput {
                    inventory_item_id: line.inventory_item_id,
                    language_id: line.language_id,
                    quantity: line.quantity,
                    unit_price_minor: line.unit_price_minor,
                    fees_minor: line.fees_minor,
                    shipping_minor: line.shipping_minor,
                })
                .collect(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(map_sale(posted))))
}
