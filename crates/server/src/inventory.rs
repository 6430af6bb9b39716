//! Inventory endpoints: item create/update and movement recording.

use api_types::inventory::{
    CreateInventoryItem, CreateInventoryMovement, InventoryItemView, MovementType as ApiMovementType,
    MovementView, UpdateInventoryItem,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use engine::{
    CreateItemCmd, Movement, MovementReference, MovementType, RecordMovementCmd, UpdateItemCmd,
    inventory_items,
};

use crate::ServerError;
use crate::server::ServerState;

fn map_movement_type(kind: ApiMovementType) -> MovementType {
    match kind {
        ApiMovementType::Purchase => MovementType::Purchase,
        ApiMovementType::Sale => MovementType::Sale,
        ApiMovementType::TransferIn => MovementType::TransferIn,
        ApiMovementType::TransferOut => MovementType::TransferOut,
        ApiMovementType::Adjustment => MovementType::Adjustment,
    }
}

fn map_movement_type_back(kind: MovementType) -> ApiMovementType {
    match kind {
        MovementType::Purchase => ApiMovementType::Purchase,
        MovementType::Sale => ApiMovementType::Sale,
        MovementType::TransferIn => ApiMovementType::TransferIn,
        MovementType::TransferOut => ApiMovementType::TransferOut,
        MovementType::Adjustment => ApiMovementType::Adjustment,
    }
}

fn map_item(item: inventory_items::Model) -> InventoryItemView {
    InventoryItemView {
        id: item.id,
        card_print_id: item.card_print_id,
        user_id: item.user_id,
        location_id: item.location_id,
        condition_id: item.condition_id,
        grade_provider: item.grade_provider,
        grade_value: item.grade_value,
        quantity_on_hand: item.quantity_on_hand,
        quantity_reserved: item.quantity_reserved,
        quantity_damaged: item.quantity_damaged,
        created_at: item.created_at,
    }
}

fn map_movement(movement: Movement) -> MovementView {
    MovementView {
        id: movement.id,
        inventory_item_id: movement.inventory_item_id,
        movement_type: map_movement_type_back(movement.movement_type),
        quantity_delta: movement.quantity_delta,
        occurred_at: movement.occurred_at,
        reference_type: movement.reference.kind().map(str::to_string),
        reference_id: movement.reference.id().map(|id| id.to_string()),
        notes: movement.notes,
        created_by: movement.created_by,
    }
}

pub async fn create_item(
    State(state): State<ServerState>,
    Json(payload): Json<CreateInventoryItem>,
) -> Result<(StatusCode, Json<InventoryItemView>), ServerError> {
    let item = state
        .engine
        .create_item(CreateItemCmd {
            card_print_id: payload.card_print_id,
            user_id: payload.user_id,
            location_id: payload.location_id,
            condition_id: payload.condition_id,
            grade_provider: payload.grade_provider,
            grade_value: payload.grade_value,
            quantity_on_hand: payload.quantity_on_hand,
            quantity_reserved: payload.quantity_reserved,
            quantity_damaged: payload.quantity_damaged,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(map_item(item))))
}

pub async fn update_item(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateInventoryItem>,
) -> Result<Json<InventoryItemView>, ServerError> {
    let item = state
        .engine
        .update_item(
            id,
            UpdateItemCmd {
                location_id: payload.location_id,
                condition_id: payload.condition_id,
                grade_provider: payload.grade_provider,
                grade_value: payload.grade_value,
                quantity_on_hand: payload.quantity_on_hand,
                quantity_reserved: payload.quantity_reserved,
                quantity_damaged: payload.quantity_damaged,
            },
        )
        .await?;

    Ok(Json(map_item(item)))
}

pub async fn create_movement(
    State(state): State<ServerState>,
    Json(payload): Json<CreateInventoryMovement>,
) -> Result<(StatusCode, Json<MovementView>), ServerError> {
    let reference = MovementReference::parse(
        payload.reference_type.as_deref(),
        payload.reference_id.as_deref(),
    )?;

    let movement = state
        .engine
        .record_movement(RecordMovementCmd {
            inventory_item_id: payload.inventory_item_id,
            movement_type: map_movement_type(payload.movement_type),
            quantity_delta: payload.quantity_delta,
            occurred_at: payload.occurred_at.map(|dt| dt.with_timezone(&Utc)),
            reference,
            notes: payload.notes,
            created_by: payload.created_by,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(map_movement(movement))))
}
