//! Transaction posting.
//!
//! Posting an acquisition or a sale writes three table families (the header,
//! its lines and one inventory movement per line) inside a single database
//! transaction. Either everything commits or nothing does; readers outside
//! the scope never observe a partial post.
//!
//! The envelope is validated up front, before the scope opens, so a rejected
//! request leaves no trace at all.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, TransactionTrait};

use crate::commands::{PostAcquisitionCmd, PostSaleCmd};
use crate::movements::{MovementReference, MovementType};
use crate::{
    Currency, Engine, EngineError, ResultEngine, acquisition_lines, acquisitions, movements,
    sale_lines, sales,
};

/// A posted acquisition header together with its created lines.
#[derive(Clone, Debug, PartialEq)]
pub struct PostedAcquisition {
    pub acquisition: acquisitions::Model,
    pub lines: Vec<acquisition_lines::Model>,
}

/// A posted sale header together with its created lines.
#[derive(Clone, Debug, PartialEq)]
pub struct PostedSale {
    pub sale: sales::Model,
    pub lines: Vec<sale_lines::Model>,
}

fn validate_line(
    index: usize,
    inventory_item_id: i64,
    quantity: i32,
    unit_amount_minor: i64,
    unit_amount_field: &str,
    fees_minor: i64,
    shipping_minor: i64,
) -> ResultEngine<()> {
    if inventory_item_id <= 0 {
        return Err(EngineError::Validation(format!(
            "line {index}: inventory_item_id must be positive"
        )));
    }
    if quantity < 1 {
        return Err(EngineError::Validation(format!(
            "line {index}: quantity must be at least 1, got {quantity}"
        )));
    }
    if unit_amount_minor < 0 {
        return Err(EngineError::Validation(format!(
            "line {index}: {unit_amount_field} must not be negative"
        )));
    }
    if fees_minor < 0 || shipping_minor < 0 {
        return Err(EngineError::Validation(format!(
            "line {index}: fees and shipping must not be negative"
        )));
    }
    Ok(())
}

impl Engine {
    /// Posts a purchase event.
    ///
    /// Produces exactly one header row, one line row per input line and one
    /// `purchase` movement per line with a positive delta equal to the line
    /// quantity, back-referencing the header. The same inventory item may
    /// appear on several lines; a single purchase can restock one item twice
    /// with different cost lots.
    pub async fn post_acquisition(
        &self,
        cmd: PostAcquisitionCmd,
    ) -> ResultEngine<PostedAcquisition> {
        let currency = Currency::try_from(cmd.currency.as_str())?;
        if cmd.lines.is_empty() {
            return Err(EngineError::Validation(
                "an acquisition requires at least one line".to_string(),
            ));
        }
        for (index, line) in cmd.lines.iter().enumerate() {
            validate_line(
                index,
                line.inventory_item_id,
                line.quantity,
                line.unit_cost_minor,
                "unit_cost_minor",
                line.fees_minor.unwrap_or(0),
                line.shipping_minor.unwrap_or(0),
            )?;
        }

        let txn = self.database.begin().await?;

        let header = acquisitions::ActiveModel {
            id: ActiveValue::NotSet,
            acquired_at: ActiveValue::Set(cmd.acquired_at),
            supplier_reference: ActiveValue::Set(cmd.supplier_reference),
            channel: ActiveValue::Set(cmd.channel),
            currency: ActiveValue::Set(currency.code().to_string()),
            notes: ActiveValue::Set(cmd.notes),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(&txn)
        .await?;

        let mut lines = Vec::with_capacity(cmd.lines.len());
        for line in &cmd.lines {
            let inserted = acquisition_lines::ActiveModel {
                id: ActiveValue::NotSet,
                acquisition_id: ActiveValue::Set(header.id),
                inventory_item_id: ActiveValue::Set(line.inventory_item_id),
                language_id: ActiveValue::Set(line.language_id),
                quantity: ActiveValue::Set(line.quantity),
                unit_cost_minor: ActiveValue::Set(line.unit_cost_minor),
                fees_minor: ActiveValue::Set(line.fees_minor.unwrap_or(0)),
                shipping_minor: ActiveValue::Set(line.shipping_minor.unwrap_or(0)),
            }
            .insert(&txn)
            .await?;
            lines.push(inserted);
        }

        for line in &cmd.lines {
            movements::new_row(
                line.inventory_item_id,
                MovementType::Purchase,
                line.quantity,
                Utc::now(),
                MovementReference::Acquisition {
                    acquisition_id: header.id,
                },
                None,
                None,
            )
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        Ok(PostedAcquisition {
            acquisition: header,
            lines,
        })
    }

    /// Posts a sale event; the mirror of [`post_acquisition`] with negated
    /// movement deltas.
    ///
    /// [`post_acquisition`]: Engine::post_acquisition
    pub async fn post_sale(&self, cmd: PostSaleCmd) -> ResultEngine<PostedSale> {
        let currency = Currency::try_from(cmd.currency.as_str())?;
        if cmd.lines.is_empty() {
            return Err(EngineError::Validation(
                "a sale requires at least one line".to_string(),
            ));
        }
        for (index, line) in cmd.lines.iter().enumerate() {
            validate_line(
                index,
                line.inventory_item_id,
                line.quantity,
                line.unit_price_minor,
                "unit_price_minor",
                line.fees_minor.unwrap_or(0),
                line.shipping_minor.unwrap_or(0),
            )?;
        }

        let txn = self.database.begin().await?;

        let header = sales::ActiveModel {
            id: ActiveValue::NotSet,
            sold_at: ActiveValue::Set(cmd.sold_at),
            buyer_reference: ActiveValue::Set(cmd.buyer_reference),
            channel: ActiveValue::Set(cmd.channel),
            currency: ActiveValue::Set(currency.code().to_string()),
            notes: ActiveValue::Set(cmd.notes),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(&txn)
        .await?;

        let mut lines = Vec::with_capacity(cmd.lines.len());
        for line in &cmd.lines {
            let inserted = sale_lines::ActiveModel {
                id: ActiveValue::NotSet,
                sale_id: ActiveValue::Set(header.id),
                inventory_item_id: ActiveValue::Set(line.inventory_item_id),
                language_id: ActiveValue::Set(line.language_id),
                quantity: ActiveValue::Set(line.quantity),
                unit_price_minor: ActiveValue::Set(line.unit_price_minor),
                fees_minor: ActiveValue::Set(line.fees_minor.unwrap_or(0)),
                shipping_minor: ActiveValue::Set(line.shipping_minor.unwrap_or(0)),
            }
            .insert(&txn)
            .await?;
            lines.push(inserted);
        }

        for line in &cmd.lines {
            movements::new_row(
                line.inventory_item_id,
                MovementType::Sale,
                -line.quantity,
                Utc::now(),
                MovementReference::Sale { sale_id: header.id },
                None,
                None,
            )
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        Ok(PostedSale {
            sale: header,
            lines,
        })
    }
}
