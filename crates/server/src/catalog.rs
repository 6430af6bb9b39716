//! Catalog endpoints.

use api_types::catalog::{CardPrintListQuery, CardPrintView, LanguageView, SetView};
use api_types::pagination::{Paginated, Pagination};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use engine::PageRequest;

use crate::ServerError;
use crate::server::ServerState;

fn map_card_print(view: engine::CardPrintView) -> CardPrintView {
    CardPrintView {
        id: view.print.id,
        set_id: view.print.set_id,
        card_number: view.print.card_number,
        name: view.print.name,
        rarity: view.print.rarity,
        set: view.set.map(|set| SetView {
            id: set.id,
            set_code: set.set_code,
            name: set.name,
            series: set.series,
            release_date: set.release_date,
        }),
        languages: view
            .languages
            .into_iter()
            .map(|language| LanguageView {
                id: language.id,
                code: language.code,
                name: language.name,
            })
            .collect(),
    }
}

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<CardPrintListQuery>,
) -> Result<Json<Paginated<CardPrintView>>, ServerError> {
    let page = PageRequest::clamped(query.page, query.page_size);
    let filter = engine::CardPrintFilter {
        set_code: query.set_code,
        language: query.language,
        card_number: query.card_number,
    };

    let (views, total) = state.engine.list_card_prints(&filter, page).await?;

    Ok(Json(Paginated {
        data: views.into_iter().map(map_card_print).collect(),
        pagination: Pagination {
            page: page.page,
            page_size: page.page_size,
            total,
        },
    }))
}

pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<CardPrintView>, ServerError> {
    let view = state.engine.card_print(id).await?;
    Ok(Json(map_card_print(view)))
}
