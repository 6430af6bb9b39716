//! Profitability reporting view.
//!
//! One row per (card print, set, language) over the sale lines. Cost of
//! goods comes from the average acquisition unit cost of the sold inventory
//! item; the language is the sale line's (nullable) language. The view never
//! touches the denormalized item counters.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const VIEW_NAME: &str = "reporting_profitability_by_card_set_language";

const CREATE_VIEW: &str = "\
CREATE VIEW reporting_profitability_by_card_set_language AS
SELECT
    ii.card_print_id AS card_print_id,
    cp.set_id AS set_id,
    s.name AS set_name,
    sl.language_id AS language_id,
    l.code AS language_code,
    l.name AS language_name,
    SUM(sl.quantity) AS sold_quantity,
    SUM(sl.quantity * sl.unit_price_minor) AS gross_revenue_minor,
    CAST(ROUND(SUM(sl.quantity * COALESCE(costs.avg_unit_cost_minor, 0))) AS INTEGER)
        AS cogs_minor,
    SUM(sl.quantity * sl.unit_price_minor)
        - CAST(ROUND(SUM(sl.quantity * COALESCE(costs.avg_unit_cost_minor, 0))) AS INTEGER)
        AS gross_margin_minor,
    SUM(sl.quantity * sl.unit_price_minor)
        - CAST(ROUND(SUM(sl.quantity * COALESCE(costs.avg_unit_cost_minor, 0))) AS INTEGER)
        - SUM(sl.fees_minor + sl.shipping_minor)
        AS realized_profit_minor
FROM sale_lines sl
INNER JOIN inventory_items ii ON ii.id = sl.inventory_item_id
INNER JOIN card_prints cp ON cp.id = ii.card_print_id
INNER JOIN sets s ON s.id = cp.set_id
LEFT JOIN languages l ON l.id = sl.language_id
LEFT JOIN (
    SELECT inventory_item_id, AVG(unit_cost_minor) AS avg_unit_cost_minor
    FROM acquisition_lines
    GROUP BY inventory_item_id
) costs ON costs.inventory_item_id = sl.inventory_item_id
GROUP BY ii.card_print_id, cp.set_id, s.name, sl.language_id, l.code, l.name";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(CREATE_VIEW).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(&format!("DROP VIEW IF EXISTS {VIEW_NAME}"))
            .await?;
        Ok(())
    }
}
