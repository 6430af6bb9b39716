//! Acquisition and sale headers with their line tables.
//!
//! Lines are exclusively owned by their header and cascade with it.

use sea_orm_migration::prelude::*;

use crate::m20250318_091500_catalog::Languages;
use crate::m20250318_093000_inventory::InventoryItems;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
pub enum Acquisitions {
    Table,
    Id,
    AcquiredAt,
    SupplierReference,
    Channel,
    Currency,
    Notes,
    CreatedAt,
}

#[derive(Iden)]
pub enum AcquisitionLines {
    Table,
    Id,
    AcquisitionId,
    InventoryItemId,
    LanguageId,
    Quantity,
    UnitCostMinor,
    FeesMinor,
    ShippingMinor,
}

#[derive(Iden)]
pub enum Sales {
    Table,
    Id,
    SoldAt,
    BuyerReference,
    Channel,
    Currency,
    Notes,
    CreatedAt,
}

#[derive(Iden)]
pub enum SaleLines {
    Table,
    Id,
    SaleId,
    InventoryItemId,
    LanguageId,
    Quantity,
    UnitPriceMinor,
    FeesMinor,
    ShippingMinor,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Acquisitions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Acquisitions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Acquisitions::AcquiredAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Acquisitions::SupplierReference).string())
                    .col(ColumnDef::new(Acquisitions::Channel).string())
                    .col(ColumnDef::new(Acquisitions::Currency).string().not_null())
                    .col(ColumnDef::new(Acquisitions::Notes).string())
                    .col(
                        ColumnDef::new(Acquisitions::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AcquisitionLines::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AcquisitionLines::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AcquisitionLines::AcquisitionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AcquisitionLines::InventoryItemId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AcquisitionLines::LanguageId).big_integer())
                    .col(
                        ColumnDef::new(AcquisitionLines::Quantity)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AcquisitionLines::UnitCostMinor)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AcquisitionLines::FeesMinor)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(AcquisitionLines::ShippingMinor)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-acquisition_lines-acquisition_id")
                            .from(AcquisitionLines::Table, AcquisitionLines::AcquisitionId)
                            .to(Acquisitions::Table, Acquisitions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-acquisition_lines-inventory_item_id")
                            .from(AcquisitionLines::Table, AcquisitionLines::InventoryItemId)
                            .to(InventoryItems::Table, InventoryItems::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-acquisition_lines-language_id")
                            .from(AcquisitionLines::Table, AcquisitionLines::LanguageId)
                            .to(Languages::Table, Languages::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-acquisition_lines-acquisition_id")
                    .table(AcquisitionLines::Table)
                    .col(AcquisitionLines::AcquisitionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Sales::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sales::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sales::SoldAt).timestamp().not_null())
                    .col(ColumnDef::new(Sales::BuyerReference).string())
                    .col(ColumnDef::new(Sales::Channel).string())
                    .col(ColumnDef::new(Sales::Currency).string().not_null())
                    .col(ColumnDef::new(Sales::Notes).string())
                    .col(ColumnDef::new(Sales::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SaleLines::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SaleLines::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SaleLines::SaleId).big_integer().not_null())
                    .col(
                        ColumnDef::new(SaleLines::InventoryItemId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SaleLines::LanguageId).big_integer())
                    .col(ColumnDef::new(SaleLines::Quantity).integer().not_null())
                    .col(
                        ColumnDef::new(SaleLines::UnitPriceMinor)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SaleLines::FeesMinor)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(SaleLines::ShippingMinor)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-sale_lines-sale_id")
                            .from(SaleLines::Table, SaleLines::SaleId)
                            .to(Sales::Table, Sales::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-sale_lines-inventory_item_id")
                            .from(SaleLines::Table, SaleLines::InventoryItemId)
                            .to(InventoryItems::Table, InventoryItems::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-sale_lines-language_id")
                            .from(SaleLines::Table, SaleLines::LanguageId)
                            .to(Languages::Table, Languages::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-sale_lines-sale_id")
                    .table(SaleLines::Table)
                    .col(SaleLines::SaleId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SaleLines::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Sales::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AcquisitionLines::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Acquisitions::Table).to_owned())
            .await?;
        Ok(())
    }
}
