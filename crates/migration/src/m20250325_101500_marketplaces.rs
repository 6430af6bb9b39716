//! Marketplaces and the external listings that live on them.

use sea_orm_migration::prelude::*;

use crate::m20250318_093000_inventory::InventoryItems;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
pub enum Marketplaces {
    Table,
    Id,
    Name,
    Slug,
}

#[derive(Iden)]
pub enum ExternalListings {
    Table,
    Id,
    MarketplaceId,
    InventoryItemId,
    ExternalListingId,
    ListingStatus,
    ListedPriceMinor,
    Currency,
    QuantityListed,
    Url,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Marketplaces::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Marketplaces::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Marketplaces::Name).string().not_null())
                    .col(ColumnDef::new(Marketplaces::Slug).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-marketplaces-slug")
                    .table(Marketplaces::Table)
                    .col(Marketplaces::Slug)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ExternalListings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExternalListings::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ExternalListings::MarketplaceId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExternalListings::InventoryItemId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExternalListings::ExternalListingId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExternalListings::ListingStatus)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ExternalListings::ListedPriceMinor).big_integer())
                    .col(ColumnDef::new(ExternalListings::Currency).string())
                    .col(ColumnDef::new(ExternalListings::QuantityListed).integer())
                    .col(ColumnDef::new(ExternalListings::Url).string())
                    .col(
                        ColumnDef::new(ExternalListings::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-external_listings-marketplace_id")
                            .from(ExternalListings::Table, ExternalListings::MarketplaceId)
                            .to(Marketplaces::Table, Marketplaces::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-external_listings-inventory_item_id")
                            .from(ExternalListings::Table, ExternalListings::InventoryItemId)
                            .to(InventoryItems::Table, InventoryItems::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-external_listings-marketplace-status")
                    .table(ExternalListings::Table)
                    .col(ExternalListings::MarketplaceId)
                    .col(ExternalListings::ListingStatus)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ExternalListings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Marketplaces::Table).to_owned())
            .await?;
        Ok(())
    }
}
