pub use sea_orm_migration::prelude::*;

mod m20250318_090000_users;
mod m20250318_091500_catalog;
mod m20250318_093000_inventory;
mod m20250325_100000_transactions;
mod m20250325_101500_marketplaces;
mod m20250407_120000_reporting_view;
mod m20250407_121500_seed_reference_data;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250318_090000_users::Migration),
            Box::new(m20250318_091500_catalog::Migration),
            Box::new(m20250318_093000_inventory::Migration),
            Box::new(m20250325_100000_transactions::Migration),
            Box::new(m20250325_101500_marketplaces::Migration),
            Box::new(m20250407_120000_reporting_view::Migration),
            Box::new(m20250407_121500_seed_reference_data::Migration),
        ]
    }
}
