//! Catalog reference tables: sets, languages, conditions and card prints.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
pub enum Sets {
    Table,
    Id,
    SetCode,
    Name,
    Series,
    ReleaseDate,
}

#[derive(Iden)]
pub enum Languages {
    Table,
    Id,
    Code,
    Name,
}

#[derive(Iden)]
pub enum CardConditions {
    Table,
    Id,
    Code,
    Name,
    SortOrder,
}

#[derive(Iden)]
pub enum CardPrints {
    Table,
    Id,
    SetId,
    CardNumber,
    Name,
    Rarity,
}

#[derive(Iden)]
pub enum CardPrintLanguages {
    Table,
    Id,
    CardPrintId,
    LanguageId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sets::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sets::SetCode).string().not_null())
                    .col(ColumnDef::new(Sets::Name).string().not_null())
                    .col(ColumnDef::new(Sets::Series).string())
                    .col(ColumnDef::new(Sets::ReleaseDate).date())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-sets-set_code")
                    .table(Sets::Table)
                    .col(Sets::SetCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Languages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Languages::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Languages::Code).string().not_null())
                    .col(ColumnDef::new(Languages::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-languages-code")
                    .table(Languages::Table)
                    .col(Languages::Code)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CardConditions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CardConditions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CardConditions::Code).string().not_null())
                    .col(ColumnDef::new(CardConditions::Name).string().not_null())
                    .col(
                        ColumnDef::new(CardConditions::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-card_conditions-code")
                    .table(CardConditions::Table)
                    .col(CardConditions::Code)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CardPrints::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CardPrints::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CardPrints::SetId).big_integer().not_null())
                    .col(ColumnDef::new(CardPrints::CardNumber).string().not_null())
                    .col(ColumnDef::new(CardPrints::Name).string().not_null())
                    .col(ColumnDef::new(CardPrints::Rarity).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-card_prints-set_id")
                            .from(CardPrints::Table, CardPrints::SetId)
                            .to(Sets::Table, Sets::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-card_prints-set_id-card_number")
                    .table(CardPrints::Table)
                    .col(CardPrints::SetId)
                    .col(CardPrints::CardNumber)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CardPrintLanguages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CardPrintLanguages::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CardPrintLanguages::CardPrintId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CardPrintLanguages::LanguageId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-card_print_languages-card_print_id")
                            .from(CardPrintLanguages::Table, CardPrintLanguages::CardPrintId)
                            .to(CardPrints::Table, CardPrints::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-card_print_languages-language_id")
                            .from(CardPrintLanguages::Table, CardPrintLanguages::LanguageId)
                            .to(Languages::Table, Languages::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-card_print_languages-print-language")
                    .table(CardPrintLanguages::Table)
                    .col(CardPrintLanguages::CardPrintId)
                    .col(CardPrintLanguages::LanguageId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CardPrintLanguages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CardPrints::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CardConditions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Languages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Sets::Table).to_owned())
            .await?;
        Ok(())
    }
}
