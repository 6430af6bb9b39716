//! Inventory tables: storage locations, items and the movement log.

use sea_orm_migration::prelude::*;

use crate::m20250318_090000_users::Users;
use crate::m20250318_091500_catalog::{CardConditions, CardPrints};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
pub enum StorageLocations {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
pub enum InventoryItems {
    Table,
    Id,
    CardPrintId,
    UserId,
    LocationId,
    ConditionId,
    GradeProvider,
    GradeValue,
    QuantityOnHand,
    QuantityReserved,
    QuantityDamaged,
    CreatedAt,
}

#[derive(Iden)]
pub enum InventoryMovements {
    Table,
    Id,
    InventoryItemId,
    MovementType,
    QuantityDelta,
    OccurredAt,
    ReferenceKind,
    ReferenceId,
    Notes,
    CreatedBy,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StorageLocations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StorageLocations::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StorageLocations::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(InventoryItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InventoryItems::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(InventoryItems::CardPrintId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InventoryItems::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InventoryItems::LocationId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InventoryItems::ConditionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(InventoryItems::GradeProvider).string())
                    .col(ColumnDef::new(InventoryItems::GradeValue).double())
                    .col(
                        ColumnDef::new(InventoryItems::QuantityOnHand)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(InventoryItems::QuantityReserved)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(InventoryItems::QuantityDamaged)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(InventoryItems::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-inventory_items-card_print_id")
                            .from(InventoryItems::Table, InventoryItems::CardPrintId)
                            .to(CardPrints::Table, CardPrints::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-inventory_items-user_id")
                            .from(InventoryItems::Table, InventoryItems::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-inventory_items-location_id")
                            .from(InventoryItems::Table, InventoryItems::LocationId)
                            .to(StorageLocations::Table, StorageLocations::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-inventory_items-condition_id")
                            .from(InventoryItems::Table, InventoryItems::ConditionId)
                            .to(CardConditions::Table, CardConditions::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-inventory_items-card_print_id")
                    .table(InventoryItems::Table)
                    .col(InventoryItems::CardPrintId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(InventoryMovements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InventoryMovements::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(InventoryMovements::InventoryItemId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InventoryMovements::MovementType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InventoryMovements::QuantityDelta)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InventoryMovements::OccurredAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(ColumnDef::new(InventoryMovements::ReferenceKind).string())
                    .col(ColumnDef::new(InventoryMovements::ReferenceId).string())
                    .col(ColumnDef::new(InventoryMovements::Notes).string())
                    .col(ColumnDef::new(InventoryMovements::CreatedBy).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-inventory_movements-inventory_item_id")
                            .from(
                                InventoryMovements::Table,
                                InventoryMovements::InventoryItemId,
                            )
                            .to(InventoryItems::Table, InventoryItems::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-inventory_movements-item-occurred_at")
                    .table(InventoryMovements::Table)
                    .col(InventoryMovements::InventoryItemId)
                    .col(InventoryMovements::OccurredAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InventoryMovements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(InventoryItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StorageLocations::Table).to_owned())
            .await?;
        Ok(())
    }
}
