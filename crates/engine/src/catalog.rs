//! Catalog lookup: paginated, filterable reads over card prints.
//!
//! All filters are optional and AND-combined. Text matches are
//! case-insensitive on both sides (`upper(column) = upper(input)`), which
//! behaves the same on SQLite and Postgres instead of leaning on LIKE's
//! ASCII-only folding.

use std::collections::HashMap;

use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ColumnTrait, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};

use crate::pagination::PageRequest;
use crate::{
    Engine, EngineError, ResultEngine, card_print_languages, card_prints, languages, sets,
};

/// Optional, AND-combined card print filters.
#[derive(Clone, Debug, Default)]
pub struct CardPrintFilter {
    /// Case-insensitive exact match on the owning set's code.
    pub set_code: Option<String>,
    /// Case-insensitive exact match on a printed language code.
    pub language: Option<String>,
    /// Case-insensitive substring match on the card number.
    pub card_number: Option<String>,
}

/// A card print with its set and printed languages resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct CardPrintView {
    pub print: card_prints::Model,
    pub set: Option<sets::Model>,
    pub languages: Vec<languages::Model>,
}

fn filtered_query(filter: &CardPrintFilter) -> sea_orm::Select<card_prints::Entity> {
    let mut query = card_prints::Entity::find();

    if let Some(set_code) = &filter.set_code {
        query = query
            .join(JoinType::InnerJoin, card_prints::Relation::Sets.def())
            .filter(
                Expr::expr(Func::upper(Expr::col((sets::Entity, sets::Column::SetCode))))
                    .eq(set_code.trim().to_uppercase()),
            );
    }

    if let Some(language) = &filter.language {
        query = query
            .join(
                JoinType::InnerJoin,
                card_prints::Relation::CardPrintLanguages.def(),
            )
            .join(
                JoinType::InnerJoin,
                card_print_languages::Relation::Languages.def(),
            )
            .filter(
                Expr::expr(Func::upper(Expr::col((
                    languages::Entity,
                    languages::Column::Code,
                ))))
                .eq(language.trim().to_uppercase()),
            );
    }

    if let Some(card_number) = &filter.card_number {
        query = query.filter(
            Expr::expr(Func::upper(Expr::col((
                card_prints::Entity,
                card_prints::Column::CardNumber,
            ))))
            .like(format!("%{}%", card_number.trim().to_uppercase())),
        );
    }

    query
}

impl Engine {
    /// Lists card prints under `filter`, ordered by id.
    ///
    /// Returns the page rows and the total row count under the same filter
    /// (unaffected by pagination).
    pub async fn list_card_prints(
        &self,
        filter: &CardPrintFilter,
        page: PageRequest,
    ) -> ResultEngine<(Vec<CardPrintView>, u64)> {
        let query = filtered_query(filter);
        let total = query.clone().count(&self.database).await?;

        let prints = query
            .order_by_asc(card_prints::Column::Id)
            .offset(page.offset())
            .limit(page.page_size)
            .all(&self.database)
            .await?;

        let views = self.resolve_prints(prints).await?;
        Ok((views, total))
    }

    /// Returns a single card print with its set and languages.
    pub async fn card_print(&self, id: i64) -> ResultEngine<CardPrintView> {
        let print = card_prints::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::NotFound(format!("card print {id}")))?;

        let mut views = self.resolve_prints(vec![print]).await?;
        views
            .pop()
            .ok_or_else(|| EngineError::NotFound(format!("card print {id}")))
    }

    /// Attaches sets and languages to a page of prints with two batched
    /// lookups instead of one query per row.
    async fn resolve_prints(
        &self,
        prints: Vec<card_prints::Model>,
    ) -> ResultEngine<Vec<CardPrintView>> {
        if prints.is_empty() {
            return Ok(Vec::new());
        }

        let set_ids: Vec<i64> = prints.iter().map(|p| p.set_id).collect();
        let sets_by_id: HashMap<i64, sets::Model> = sets::Entity::find()
            .filter(sets::Column::Id.is_in(set_ids))
            .all(&self.database)
            .await?
            .into_iter()
            .map(|set| (set.id, set))
            .collect();

        let print_ids: Vec<i64> = prints.iter().map(|p| p.id).collect();
        let junction_rows: Vec<(card_print_languages::Model, Option<languages::Model>)> =
            card_print_languages::Entity::find()
                .filter(card_print_languages::Column::CardPrintId.is_in(print_ids))
                .find_also_related(languages::Entity)
                .all(&self.database)
                .await?;

        let mut languages_by_print: HashMap<i64, Vec<languages::Model>> = HashMap::new();
        for (junction, language) in junction_rows {
            if let Some(language) = language {
                languages_by_print
                    .entry(junction.card_print_id)
                    .or_default()
                    .push(language);
            }
        }

        Ok(prints
            .into_iter()
            .map(|print| {
                let set = sets_by_id.get(&print.set_id).cloned();
                let languages = languages_by_print.remove(&print.id).unwrap_or_default();
                CardPrintView {
                    print,
                    set,
                    languages,
                }
            })
            .collect())
    }
}
