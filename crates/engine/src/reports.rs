//! Profitability reporting.
//!
//! Read-only queries over the `reporting_profitability_by_card_set_language`
//! view created by the schema migrations. The view derives everything from
//! sale and acquisition lines; the denormalized item counters are never read
//! here.

use sea_orm::{ConnectionTrait, FromQueryResult, Statement};

use crate::pagination::PageRequest;
use crate::{Engine, ResultEngine};

/// One row of the per-card ranking.
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct CardProfitRow {
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

/// One row of the per-set rollup.
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct SetProfitRow {
    pub set_id: i64,
    pub set_name: String,
    pub sold_quantity: i64,
    pub gross_revenue_minor: i64,
    pub cogs_minor: i64,
    pub gross_margin_minor: i64,
    pub realized_profit_minor: i64,
}

impl Engine {
    /// Per-card profitability, most profitable first, paginated.
    pub async fn profitability_by_card(
        &self,
        page: PageRequest,
    ) -> ResultEngine<Vec<CardProfitRow>> {
        let backend = self.database.get_database_backend();
        let stmt = Statement::from_sql_and_values(
            backend,
            "SELECT card_print_id, set_id, set_name, \
                    language_id, language_code, language_name, \
                    sold_quantity, gross_revenue_minor, cogs_minor, \
                    gross_margin_minor, realized_profit_minor \
             FROM reporting_profitability_by_card_set_language \
             ORDER BY realized_profit_minor DESC \
             LIMIT ? OFFSET ?",
            [page.page_size.into(), page.offset().into()],
        );

        Ok(CardProfitRow::find_by_statement(stmt)
            .all(&self.database)
            .await?)
    }

    /// Per-set profitability rollup, most profitable first, unpaginated.
    pub async fn profitability_by_set(&self) -> ResultEngine<Vec<SetProfitRow>> {
        let backend = self.database.get_database_backend();
        let stmt = Statement::from_string(
            backend,
            "SELECT set_id, set_name, \
                    SUM(sold_quantity) AS sold_quantity, \
                    SUM(gross_revenue_minor) AS gross_revenue_minor, \
                    SUM(cogs_minor) AS cogs_minor, \
                    SUM(gross_margin_minor) AS gross_margin_minor, \
                    SUM(realized_profit_minor) AS realized_profit_minor \
             FROM reporting_profitability_by_card_set_language \
             GROUP BY set_id, set_name \
             ORDER BY realized_profit_minor DESC",
        );

        Ok(SetProfitRow::find_by_statement(stmt)
            .all(&self.database)
            .await?)
    }
}
