use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251020_000001_user::User, m20251020_000004_starship::Starship};

static IDX_FAVORITESTARSHIPS_USER_ID: &str = "idx-favoritestarships-user_id";
static IDX_FAVORITESTARSHIPS_STARSHIP_ID: &str = "idx-favoritestarships-starship_id";
static FK_FAVORITESTARSHIPS_USER_ID: &str = "fk-favoritestarships-user_id";
static FK_FAVORITESTARSHIPS_STARSHIP_ID: &str = "fk-favoritestarships-starship_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline, SQLite cannot add them with ALTER TABLE.
        manager
            .create_table(
                Table::create()
                    .table(FavoriteStarships::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoriteStarships::Id))
                    .col(integer(FavoriteStarships::UserId))
                    .col(integer(FavoriteStarships::StarshipId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITESTARSHIPS_USER_ID)
                            .from(FavoriteStarships::Table, FavoriteStarships::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITESTARSHIPS_STARSHIP_ID)
                            .from(FavoriteStarships::Table, FavoriteStarships::StarshipId)
                            .to(Starship::Table, Starship::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITESTARSHIPS_USER_ID)
                    .table(FavoriteStarships::Table)
                    .col(FavoriteStarships::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITESTARSHIPS_STARSHIP_ID)
                    .table(FavoriteStarships::Table)
                    .col(FavoriteStarships::StarshipId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITESTARSHIPS_STARSHIP_ID)
                    .table(FavoriteStarships::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITESTARSHIPS_USER_ID)
                    .table(FavoriteStarships::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FavoriteStarships::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FavoriteStarships {
    #[sea_orm(iden = "favoritestarships")]
    Table,
    Id,
    UserId,
    StarshipId,
}
