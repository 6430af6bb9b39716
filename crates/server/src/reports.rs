//! Profitability report endpoints.

use api_types::report::{CardProfitView, ReportQuery, SetProfitView};
use axum::{
    Json,
    extract::{Query, State},
};
use engine::PageRequest;

use crate::ServerError;
use crate::server::ServerState;

pub async fn by_card(
    State(state): State<ServerState>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<Vec<CardProfitView>>, ServerError> {
    let page = PageRequest::clamped(query.page, query.page_size);
    let rows = state.engine.profitability_by_card(page).await?;

    Ok(Json(
        rows.into_iter()
            .map(|row| CardProfitView {
                card_print_id: row.card_print_id,
                set_id: row.set_id,
                set_name: row.set_name,
                language_id: row.language_id,
                language_code: row.language_code,
                language_name: row.language_name,
                sold_quantity: row.sold_quantity,
                gross_revenue_minor: row.gross_revenue_minor,
                cogs_minor: row.cogs_minor,
                gross_margin_minor: row.gross_margin_minor,
                realized_profit_minor: row.realized_profit_minor,
            })
            .collect(),
    ))
}

pub async fn by_set(
    State(state): State<ServerState>,
) -> Result<Json<Vec<SetProfitView>>, ServerError> {
    let rows = state.engine.profitability_by_set().await?;

    Ok(Json(
        rows.into_iter()
            .map(|row| SetProfitView {
                set_id: row.set_id,
                set_name: row.set_name,
                sold_quantity: row.sold_quantity,
                gross_revenue_minor: row.gross_revenue_minor,
                cogs_minor: row.cogs_minor,
                gross_margin_minor: row.gross_margin_minor,
                realized_profit_minor: row.realized_profit_minor,
            })
            .collect(),
    ))
}
