//! Seeds the language and condition reference rows.
//!
//! The inserts go through the unique code indexes, so re-running the
//! migration chain against an existing database is a no-op.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const SEED_LANGUAGES: &str = "\
INSERT OR IGNORE INTO languages (code, name) VALUES
    ('EN', 'English'),
    ('JP', 'Japanese')";

const SEED_CONDITIONS: &str = "\
INSERT OR IGNORE INTO card_conditions (code, name, sort_order) VALUES
    ('NM', 'Near Mint', 1),
    ('LP', 'Lightly Played', 2),
    ('MP', 'Moderately Played', 3)";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(SEED_LANGUAGES).await?;
        db.execute_unprepared(SEED_CONDITIONS).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared("DELETE FROM card_conditions WHERE code IN ('NM', 'LP', 'MP')")
            .await?;
        db.execute_unprepared("DELETE FROM languages WHERE code IN ('EN', 'JP')")
            .await?;
        Ok(())
    }
}
