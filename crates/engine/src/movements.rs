//! Inventory movements.
//!
//! A [`Movement`] is a single signed quantity change recorded against one
//! inventory item. The log is append-only: rows are created, never mutated or
//! deleted, and a delta of zero is rejected.
//!
//! Recording a movement does **not** touch the item's quantity counters.
//! The log captures history; whoever mutates the counters does so separately.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

use crate::EngineError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementType {
    Purchase,
    Sale,
    TransferIn,
    TransferOut,
    Adjustment,
}

impl MovementType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Purchase => "purchase",
            Self::Sale => "sale",
            Self::TransferIn => "transfer_in",
            Self::TransferOut => "transfer_out",
            Self::Adjustment => "adjustment",
        }
    }
}

impl TryFrom<&str> for MovementType {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "purchase" => Ok(Self::Purchase),
            "sale" => Ok(Self::Sale),
            "transfer_in" => Ok(Self::TransferIn),
            "transfer_out" => Ok(Self::TransferOut),
            "adjustment" => Ok(Self::Adjustment),
            other => Err(EngineError::Validation(format!(
                "invalid movement type: {other}"
            ))),
        }
    }
}

/// Back-reference from a movement to the event that caused it.
///
/// Persisted as a `reference_kind`/`reference_id` column pair; this is a weak
/// pointer, not a foreign key, so a movement survives its cause.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MovementReference {
    Acquisition { acquisition_id: i64 },
    Sale { sale_id: i64 },
    Adjustment { adjustment_id: i64 },
    #[default]
    None,
}

impl MovementReference {
    /// The stored `reference_kind` column value.
    pub fn kind(&self) -> Option<&'static str> {
        match self {
            Self::Acquisition { .. } => Some("acquisition"),
            Self::Sale { .. } => Some("sale"),
            Self::Adjustment { .. } => Some("adjustment"),
            Self::None => None,
        }
    }

    /// The stored `reference_id` column value, before stringification.
    pub fn id(&self) -> Option<i64> {
        match *self {
            Self::Acquisition { acquisition_id } => Some(acquisition_id),
            Self::Sale { sale_id } => Some(sale_id),
            Self::Adjustment { adjustment_id } => Some(adjustment_id),
            Self::None => None,
        }
    }

    /// Rebuilds the reference from the stored column pair.
    pub fn parse(kind: Option<&str>, id: Option<&str>) -> Result<Self, EngineError> {
        let (Some(kind), Some(id)) = (kind, id) else {
            return Ok(Self::None);
        };
        let id: i64 = id
            .parse()
            .map_err(|_| EngineError::Validation(format!("invalid reference id: {id}")))?;
        if id <= 0 {
            return Err(EngineError::Validation(format!(
                "reference id must be positive, got {id}"
            )));
        }
        match kind {
            "acquisition" => Ok(Self::Acquisition { acquisition_id: id }),
            "sale" => Ok(Self::Sale { sale_id: id }),
            "adjustment" => Ok(Self::Adjustment { adjustment_id: id }),
            other => Err(EngineError::Validation(format!(
                "invalid reference kind: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub id: i64,
    pub inventory_item_id: i64,
    pub movement_type: MovementType,
    pub quantity_delta: i32,
    pub occurred_at: DateTime<Utc>,
    pub reference: MovementReference,
    pub notes: Option<String>,
    pub created_by: Option<String>,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "inventory_movements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub inventory_item_id: i64,
    pub movement_type: String,
    pub quantity_delta: i32,
    pub occurred_at: DateTimeUtc,
    pub reference_kind: Option<String>,
    pub reference_id: Option<String>,
    pub notes: Option<String>,
    pub created_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::inventory_items::Entity",
        from = "Column::InventoryItemId",
        to = "super::inventory_items::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    InventoryItems,
}

impl Related<super::inventory_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InventoryItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Builds the row for a new movement; the id stays unset for auto-increment.
pub(crate) fn new_row(
    inventory_item_id: i64,
    movement_type: MovementType,
    quantity_delta: i32,
    occurred_at: DateTime<Utc>,
    reference: MovementReference,
    notes: Option<String>,
    created_by: Option<String>,
) -> ActiveModel {
    ActiveModel {
        id: ActiveValue::NotSet,
        inventory_item_id: ActiveValue::Set(inventory_item_id),
        movement_type: ActiveValue::Set(movement_type.as_str().to_string()),
        quantity_delta: ActiveValue::Set(quantity_delta),
        occurred_at: ActiveValue::Set(occurred_at),
        reference_kind: ActiveValue::Set(reference.kind().map(str::to_string)),
        reference_id: ActiveValue::Set(reference.id().map(|id| id.to_string())),
        notes: ActiveValue::Set(notes),
        created_by: ActiveValue::Set(created_by),
    }
}

impl TryFrom<Model> for Movement {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            inventory_item_id: model.inventory_item_id,
            movement_type: MovementType::try_from(model.movement_type.as_str())?,
            quantity_delta: model.quantity_delta,
            occurred_at: model.occurred_at,
            reference: MovementReference::parse(
                model.reference_kind.as_deref(),
                model.reference_id.as_deref(),
            )?,
            notes: model.notes,
            created_by: model.created_by,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_round_trips_through_columns() {
        let reference = MovementReference::Acquisition { acquisition_id: 7 };
        let parsed = MovementReference::parse(reference.kind(), Some("7")).unwrap();
        assert_eq!(parsed, reference);
    }

    #[test]
    fn missing_columns_mean_no_reference() {
        assert_eq!(
            MovementReference::parse(None, None).unwrap(),
            MovementReference::None
        );
    }

    #[test]
    fn unknown_reference_kind_is_rejected() {
        assert!(MovementReference::parse(Some("transfer"), Some("1")).is_err());
    }

    #[test]
    fn non_numeric_reference_id_is_rejected() {
        assert!(MovementReference::parse(Some("sale"), Some("abc")).is_err());
    }
}
