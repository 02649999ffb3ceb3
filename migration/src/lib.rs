pub use sea_orm_migration::prelude::*;

mod m20251020_000001_user;
mod m20251020_000002_character;
mod m20251020_000003_planet;
mod m20251020_000004_starship;
mod m20251020_000005_favorite_characters;
mod m20251020_000006_favorite_planets;
mod m20251020_000007_favorite_starships;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_user::Migration),
            Box::new(m20251020_000002_character::Migration),
            Box::new(m20251020_000003_planet::Migration),
            Box::new(m20251020_000004_starship::Migration),
            Box::new(m20251020_000005_favorite_characters::Migration),
            Box::new(m20251020_000006_favorite_planets::Migration),
            Box::new(m20251020_000007_favorite_starships::Migration),
        ]
    }
}
