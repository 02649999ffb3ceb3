use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251020_000001_user::User, m20251020_000002_character::Character};

static IDX_FAVORITECHARACTERS_USER_ID: &str = "idx-favoritecharacters-user_id";
static IDX_FAVORITECHARACTERS_CHARACTER_ID: &str = "idx-favoritecharacters-character_id";
static FK_FAVORITECHARACTERS_USER_ID: &str = "fk-favoritecharacters-user_id";
static FK_FAVORITECHARACTERS_CHARACTER_ID: &str = "fk-favoritecharacters-character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline, SQLite cannot add them with ALTER TABLE.
        manager
            .create_table(
                Table::create()
                    .table(FavoriteCharacters::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoriteCharacters::Id))
                    .col(integer(FavoriteCharacters::UserId))
                    .col(integer(FavoriteCharacters::CharacterId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITECHARACTERS_USER_ID)
                            .from(FavoriteCharacters::Table, FavoriteCharacters::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITECHARACTERS_CHARACTER_ID)
                            .from(FavoriteCharacters::Table, FavoriteCharacters::CharacterId)
                            .to(Character::Table, Character::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITECHARACTERS_USER_ID)
                    .table(FavoriteCharacters::Table)
                    .col(FavoriteCharacters::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITECHARACTERS_CHARACTER_ID)
                    .table(FavoriteCharacters::Table)
                    .col(FavoriteCharacters::CharacterId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITECHARACTERS_CHARACTER_ID)
                    .table(FavoriteCharacters::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITECHARACTERS_USER_ID)
                    .table(FavoriteCharacters::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FavoriteCharacters::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FavoriteCharacters {
    #[sea_orm(iden = "favoritecharacters")]
    Table,
    Id,
    UserId,
    CharacterId,
}
