//! End-to-end scenarios over the migrated schema.
//!
//! These exercise the uniqueness and cascade invariants with the DDL from the migration
//! crate, complementing the repository unit tests that run on entity-generated tables.

use holocron::{
    data::{
        catalog::{
            character::CharacterRepository, planet::PlanetRepository,
            starship::StarshipRepository,
        },
        favorite::{
            character::FavoriteCharactersRepository, planet::FavoritePlanetsRepository,
            starship::FavoriteStarshipsRepository,
        },
        user::{NewUser, UserRepository},
    },
    error::{ConstraintViolation, Error},
    model::serialize::ApiSerialize,
};
use holocron_test_utils::TestError;
use sea_orm::ConnectionTrait;
use serde_json::json;

use super::migrated_db;

fn ana() -> NewUser {
    NewUser {
        email: "a@x.com".to_string(),
        password: "p".to_string(),
        is_active: true,
        first_name: "Ana".to_string(),
        last_name: "Lee".to_string(),
    }
}

/// Tests creating a user and serializing it.
///
/// Expected: the first user receives ID 1 and serializes without the password
#[tokio::test]
async fn creates_and_serializes_user() -> Result<(), TestError> {
    let db = migrated_db().await?;

    let user = UserRepository::new(&db).create(ana()).await?;

    assert_eq!(user.id, 1);
    assert_eq!(user.password, "p");
    assert_eq!(
        user.serialize(),
        json!({
            "id": 1,
            "email": "a@x.com",
            "firstName": "Ana",
            "lastName": "Lee",
            "is_active": true,
        })
    );

    Ok(())
}

/// Tests registering a second user with the same email.
///
/// Expected: Err classified as a unique constraint violation, first user untouched
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), TestError> {
    let db = migrated_db().await?;
    let user_repo = UserRepository::new(&db);
    user_repo.create(ana()).await?;

    let mut duplicate = ana();
    duplicate.first_name = "Other".to_string();
    let result = user_repo.create(duplicate).await;

    let err = Error::from(result.expect_err("duplicate email must be rejected"));
    assert!(matches!(
        err.constraint_violation(),
        Some(ConstraintViolation::Unique(_))
    ));
    assert_eq!(user_repo.get_all().await?.len(), 1);

    Ok(())
}

/// Tests favoriting a character then deleting the character.
///
/// Expected: the join row serializes to its IDs and is removed by the cascade
#[tokio::test]
async fn character_delete_cascades_to_favorite() -> Result<(), TestError> {
    let db = migrated_db().await?;
    let user = UserRepository::new(&db).create(ana()).await?;
    let character_repo = CharacterRepository::new(&db);
    let leia = character_repo.create("Leia", "F", 150).await?;

    let favorite_repo = FavoriteCharactersRepository::new(&db);
    let favorite = favorite_repo.create(user.id, leia.id).await?;

    assert_eq!(
        favorite.serialize(),
        json!({"id": 1, "user_id": 1, "character_id": 1})
    );

    character_repo.delete(leia.id).await?;

    assert!(favorite_repo.get(favorite.id).await?.is_none());
    assert!(UserRepository::new(&db).get(user.id).await?.is_some());

    Ok(())
}

/// Tests deleting a user who has favorites of every kind.
///
/// Expected: all of the user's join rows are removed, the catalog rows remain
#[tokio::test]
async fn user_delete_cascades_to_all_favorites() -> Result<(), TestError> {
    let db = migrated_db().await?;
    let user = UserRepository::new(&db).create(ana()).await?;
    let leia = CharacterRepository::new(&db)
        .create("Leia", "F", 150)
        .await?;
    let hoth = PlanetRepository::new(&db).create("Hoth", "frozen").await?;
    let falcon = StarshipRepository::new(&db).create("Falcon", "grey").await?;

    FavoriteCharactersRepository::new(&db)
        .create(user.id, leia.id)
        .await?;
    FavoritePlanetsRepository::new(&db)
        .create(user.id, hoth.id)
        .await?;
    FavoriteStarshipsRepository::new(&db)
        .create(user.id, falcon.id)
        .await?;

    let result = UserRepository::new(&db).delete(user.id).await?;
    assert_eq!(result.rows_affected, 1);

    assert!(FavoriteCharactersRepository::new(&db)
        .get_many_by_user_id(user.id)
        .await?
        .is_empty());
    assert!(FavoritePlanetsRepository::new(&db)
        .get_many_by_user_id(user.id)
        .await?
        .is_empty());
    assert!(FavoriteStarshipsRepository::new(&db)
        .get_many_by_user_id(user.id)
        .await?
        .is_empty());
    assert!(PlanetRepository::new(&db).get(hoth.id).await?.is_some());

    Ok(())
}

/// Tests favoriting a planet for a user that does not exist.
///
/// Expected: Err classified as a foreign key violation
#[tokio::test]
async fn rejects_favorite_for_nonexistent_user() -> Result<(), TestError> {
    let db = migrated_db().await?;
    let hoth = PlanetRepository::new(&db).create("Hoth", "frozen").await?;

    let result = FavoritePlanetsRepository::new(&db).create(42, hoth.id).await;

    let err = Error::from(result.expect_err("dangling user must be rejected"));
    assert!(matches!(
        err.constraint_violation(),
        Some(ConstraintViolation::ForeignKey(_))
    ));

    Ok(())
}

/// Tests deleting a planet favorited by two users.
///
/// Expected: both join rows are removed by the cascade, the users remain
#[tokio::test]
async fn planet_delete_cascades_to_favorites() -> Result<(), TestError> {
    let db = migrated_db().await?;
    let user_repo = UserRepository::new(&db);
    let first = user_repo.create(ana()).await?;
    let second = user_repo
        .create(NewUser {
            email: "b@x.com".to_string(),
            ..ana()
        })
        .await?;
    let planet_repo = PlanetRepository::new(&db);
    let hoth = planet_repo.create("Hoth", "frozen").await?;
    let endor = planet_repo.create("Endor", "forest").await?;

    let favorite_repo = FavoritePlanetsRepository::new(&db);
    favorite_repo.create(first.id, hoth.id).await?;
    favorite_repo.create(second.id, hoth.id).await?;
    let kept = favorite_repo.create(first.id, endor.id).await?;

    let result = planet_repo.delete(hoth.id).await?;
    assert_eq!(result.rows_affected, 1);

    assert!(favorite_repo.get_many_by_planet_id(hoth.id).await?.is_empty());
    assert_eq!(favorite_repo.get_many_by_user_id(first.id).await?, vec![kept]);
    assert_eq!(user_repo.get_all().await?.len(), 2);

    Ok(())
}

/// Tests deleting a starship favorited by a user.
///
/// Expected: the join row is removed by the cascade, the user remains
#[tokio::test]
async fn starship_delete_cascades_to_favorites() -> Result<(), TestError> {
    let db = migrated_db().await?;
    let user = UserRepository::new(&db).create(ana()).await?;
    let starship_repo = StarshipRepository::new(&db);
    let falcon = starship_repo.create("Falcon", "grey").await?;
    let xwing = starship_repo.create("X-wing", "white").await?;

    let favorite_repo = FavoriteStarshipsRepository::new(&db);
    let removed = favorite_repo.create(user.id, falcon.id).await?;
    let kept = favorite_repo.create(user.id, xwing.id).await?;

    let result = starship_repo.delete(falcon.id).await?;
    assert_eq!(result.rows_affected, 1);

    assert!(favorite_repo.get(removed.id).await?.is_none());
    assert_eq!(favorite_repo.get_many_by_user_id(user.id).await?, vec![kept]);
    assert!(UserRepository::new(&db).get(user.id).await?.is_some());

    Ok(())
}

/// Tests inserting rows that leave a required column NULL.
///
/// The parent rows exist, so a NULL foreign key can only be rejected by NOT NULL.
///
/// Expected: every statement fails, the fully populated rows are accepted
#[tokio::test]
async fn rejects_null_required_columns() -> Result<(), TestError> {
    let db = migrated_db().await?;

    for stmt in [
        r#"INSERT INTO "user" ("email", "password", "is_active", "firstName", "lastName") VALUES ('a@x.com', 'p', 1, 'Ana', 'Lee')"#,
        r#"INSERT INTO "character" ("name", "gender", "height") VALUES ('Leia', 'F', 150)"#,
        r#"INSERT INTO "planet" ("name", "weather") VALUES ('Hoth', 'frozen')"#,
        r#"INSERT INTO "starship" ("name", "color") VALUES ('Falcon', 'grey')"#,
    ] {
        db.execute_unprepared(stmt).await?;
    }

    let rejected = [
        r#"INSERT INTO "user" ("email", "password", "is_active", "firstName", "lastName") VALUES ('b@x.com', NULL, 1, 'Ana', 'Lee')"#,
        r#"INSERT INTO "user" ("email", "password", "is_active", "firstName", "lastName") VALUES (NULL, 'p', 1, 'Ana', 'Lee')"#,
        r#"INSERT INTO "user" ("email", "password", "is_active", "firstName", "lastName") VALUES ('c@x.com', 'p', NULL, 'Ana', 'Lee')"#,
        r#"INSERT INTO "user" ("email", "password", "is_active", "firstName", "lastName") VALUES ('d@x.com', 'p', 1, NULL, 'Lee')"#,
        r#"INSERT INTO "user" ("email", "password", "is_active", "firstName", "lastName") VALUES ('e@x.com', 'p', 1, 'Ana', NULL)"#,
        r#"INSERT INTO "character" ("name", "gender", "height") VALUES ('Han', 'M', NULL)"#,
        r#"INSERT INTO "character" ("name", "gender", "height") VALUES (NULL, 'M', 180)"#,
        r#"INSERT INTO "character" ("name", "gender", "height") VALUES ('Han', NULL, 180)"#,
        r#"INSERT INTO "planet" ("name", "weather") VALUES ('Endor', NULL)"#,
        r#"INSERT INTO "planet" ("name", "weather") VALUES (NULL, 'forest')"#,
        r#"INSERT INTO "starship" ("name", "color") VALUES ('X-wing', NULL)"#,
        r#"INSERT INTO "starship" ("name", "color") VALUES (NULL, 'white')"#,
        r#"INSERT INTO "favoritecharacters" ("user_id", "character_id") VALUES (NULL, 1)"#,
        r#"INSERT INTO "favoritecharacters" ("user_id", "character_id") VALUES (1, NULL)"#,
        r#"INSERT INTO "favoriteplanets" ("user_id", "planet_id") VALUES (NULL, 1)"#,
        r#"INSERT INTO "favoriteplanets" ("user_id", "planet_id") VALUES (1, NULL)"#,
        r#"INSERT INTO "favoritestarships" ("user_id", "starship_id") VALUES (NULL, 1)"#,
        r#"INSERT INTO "favoritestarships" ("user_id", "starship_id") VALUES (1, NULL)"#,
    ];
    for stmt in rejected {
        let result = db.execute_unprepared(stmt).await;
        assert!(result.is_err(), "NULL accepted by: {stmt}");
    }

    // The same join rows are accepted once both keys are present
    db.execute_unprepared(
        r#"INSERT INTO "favoriteplanets" ("user_id", "planet_id") VALUES (1, 1)"#,
    )
    .await?;
    assert_eq!(
        FavoritePlanetsRepository::new(&db)
            .get_many_by_user_id(1)
            .await?
            .len(),
        1
    );

    Ok(())
}
