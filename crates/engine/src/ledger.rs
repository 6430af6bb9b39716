//! Inventory ledger operations: item CRUD and the append-only movement log.
//!
//! `record_movement` only appends history. It never mutates the item's
//! quantity counters; counter upkeep is the caller's business, and reporting
//! reads the profitability view, never these counters.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};

use crate::commands::{CreateItemCmd, RecordMovementCmd, UpdateItemCmd};
use crate::movements::Movement;
use crate::{Engine, EngineError, ResultEngine, inventory_items, movements};

fn require_positive(value: i64, field: &str) -> ResultEngine<()> {
    if value <= 0 {
        return Err(EngineError::Validation(format!(
            "{field} must be positive, got {value}"
        )));
    }
    Ok(())
}

/// Items model a single physical unit, so every counter is 0 or 1.
fn require_unit_quantity(value: i32, field: &str) -> ResultEngine<()> {
    if !(0..=1).contains(&value) {
        return Err(EngineError::Validation(format!(
            "{field} must be 0 or 1, got {value}"
        )));
    }
    Ok(())
}

fn require_grade_in_range(value: f64) -> ResultEngine<()> {
    if !(0.0..=10.0).contains(&value) {
        return Err(EngineError::Validation(format!(
            "grade_value must be between 0 and 10, got {value}"
        )));
    }
    Ok(())
}

impl Engine {
    /// Creates an inventory item. Omitted counters default to
    /// `on_hand=1, reserved=0, damaged=0`.
    pub async fn create_item(&self, cmd: CreateItemCmd) -> ResultEngine<inventory_items::Model> {
        require_positive(cmd.card_print_id, "card_print_id")?;
        require_positive(cmd.user_id, "user_id")?;
        require_positive(cmd.location_id, "location_id")?;
        require_positive(cmd.condition_id, "condition_id")?;
        if let Some(grade) = cmd.grade_value {
            require_grade_in_range(grade)?;
        }

        let quantity_on_hand = cmd.quantity_on_hand.unwrap_or(1);
        let quantity_reserved = cmd.quantity_reserved.unwrap_or(0);
        let quantity_damaged = cmd.quantity_damaged.unwrap_or(0);
        require_unit_quantity(quantity_on_hand, "quantity_on_hand")?;
        require_unit_quantity(quantity_reserved, "quantity_reserved")?;
        require_unit_quantity(quantity_damaged, "quantity_damaged")?;

        let item = inventory_items::ActiveModel {
            id: ActiveValue::NotSet,
            card_print_id: ActiveValue::Set(cmd.card_print_id),
            user_id: ActiveValue::Set(cmd.user_id),
            location_id: ActiveValue::Set(cmd.location_id),
            condition_id: ActiveValue::Set(cmd.condition_id),
            grade_provider: ActiveValue::Set(cmd.grade_provider),
            grade_value: ActiveValue::Set(cmd.grade_value),
            quantity_on_hand: ActiveValue::Set(quantity_on_hand),
            quantity_reserved: ActiveValue::Set(quantity_reserved),
            quantity_damaged: ActiveValue::Set(quantity_damaged),
            created_at: ActiveValue::Set(Utc::now()),
        };

        Ok(item.insert(&self.database).await?)
    }

    /// Applies only the supplied fields to an existing item.
    pub async fn update_item(
        &self,
        id: i64,
        cmd: UpdateItemCmd,
    ) -> ResultEngine<inventory_items::Model> {
        let existing = inventory_items::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::NotFound(format!("inventory item {id}")))?;

        if let Some(location_id) = cmd.location_id {
            require_positive(location_id, "location_id")?;
        }
        if let Some(condition_id) = cmd.condition_id {
            require_positive(condition_id, "condition_id")?;
        }
        if let Some(grade) = cmd.grade_value {
            require_grade_in_range(grade)?;
        }
        for (value, field) in [
            (cmd.quantity_on_hand, "quantity_on_hand"),
            (cmd.quantity_reserved, "quantity_reserved"),
            (cmd.quantity_damaged, "quantity_damaged"),
        ] {
            if let Some(value) = value {
                require_unit_quantity(value, field)?;
            }
        }

        let mut item: inventory_items::ActiveModel = existing.into();
        if let Some(location_id) = cmd.location_id {
            item.location_id = ActiveValue::Set(location_id);
        }
        if let Some(condition_id) = cmd.condition_id {
            item.condition_id = ActiveValue::Set(condition_id);
        }
        if let Some(grade_provider) = cmd.grade_provider {
            item.grade_provider = ActiveValue::Set(Some(grade_provider));
        }
        if let Some(grade_value) = cmd.grade_value {
            item.grade_value = ActiveValue::Set(Some(grade_value));
        }
        if let Some(quantity_on_hand) = cmd.quantity_on_hand {
            item.quantity_on_hand = ActiveValue::Set(quantity_on_hand);
        }
        if let Some(quantity_reserved) = cmd.quantity_reserved {
            item.quantity_reserved = ActiveValue::Set(quantity_reserved);
        }
        if let Some(quantity_damaged) = cmd.quantity_damaged {
            item.quantity_damaged = ActiveValue::Set(quantity_damaged);
        }

        Ok(item.update(&self.database).await?)
    }

    /// Appends one movement to the log. A zero delta is rejected; the log
    /// only records actual changes.
    pub async fn record_movement(&self, cmd: RecordMovementCmd) -> ResultEngine<Movement> {
        require_positive(cmd.inventory_item_id, "inventory_item_id")?;
        if cmd.quantity_delta == 0 {
            return Err(EngineError::Validation(
                "quantity_delta must not be zero".to_string(),
            ));
        }

        let row = movements::new_row(
            cmd.inventory_item_id,
            cmd.movement_type,
            cmd.quantity_delta,
            cmd.occurred_at.unwrap_or_else(Utc::now),
            cmd.reference,
            cmd.notes,
            cmd.created_by,
        );

        let model = row.insert(&self.database).await?;
        Movement::try_from(model)
    }
}
