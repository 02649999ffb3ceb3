use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251020_000001_user::User, m20251020_000003_planet::Planet};

static IDX_FAVORITEPLANETS_USER_ID: &str = "idx-favoriteplanets-user_id";
static IDX_FAVORITEPLANETS_PLANET_ID: &str = "idx-favoriteplanets-planet_id";
static FK_FAVORITEPLANETS_USER_ID: &str = "fk-favoriteplanets-user_id";
static FK_FAVORITEPLANETS_PLANET_ID: &str = "fk-favoriteplanets-planet_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline, SQLite cannot add them with ALTER TABLE.
        manager
            .create_table(
                Table::create()
                    .table(FavoritePlanets::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoritePlanets::Id))
                    .col(integer(FavoritePlanets::UserId))
                    .col(integer(FavoritePlanets::PlanetId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITEPLANETS_USER_ID)
                            .from(FavoritePlanets::Table, FavoritePlanets::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITEPLANETS_PLANET_ID)
                            .from(FavoritePlanets::Table, FavoritePlanets::PlanetId)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITEPLANETS_USER_ID)
                    .table(FavoritePlanets::Table)
                    .col(FavoritePlanets::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITEPLANETS_PLANET_ID)
                    .table(FavoritePlanets::Table)
                    .col(FavoritePlanets::PlanetId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITEPLANETS_PLANET_ID)
                    .table(FavoritePlanets::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITEPLANETS_USER_ID)
                    .table(FavoritePlanets::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FavoritePlanets::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FavoritePlanets {
    #[sea_orm(iden = "favoriteplanets")]
    Table,
    Id,
    UserId,
    PlanetId,
}
