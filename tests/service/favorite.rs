//! Tests for FavoriteService.

use holocron::{
    data::catalog::planet::PlanetRepository,
    error::{ConstraintViolation, Error},
    model::api::{CharacterDto, FavoriteCharacterDto},
    service::favorite::FavoriteService,
};
use holocron_test_utils::prelude::*;

use crate::util::ServiceTestError;

async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_favorite_tables()
        .with_mock_user("a@x.com")
        .with_mock_user("b@x.com")
        .with_mock_character("Leia")
        .with_mock_character("Han")
        .with_mock_planet("Hoth")
        .with_mock_planet("Endor")
        .with_mock_starship("Falcon")
        .build()
        .await
}

/// Tests adding a favorite of each kind and reading them back.
///
/// Expected: each list holds the user's items in the order they were favorited
#[tokio::test]
async fn gets_user_favorites() -> Result<(), ServiceTestError> {
    let test = setup().await?;
    let favorite_service = FavoriteService::new(&test.db);

    let favorite = favorite_service
        .add_character(1, 2)
        .await?;
    favorite_service.add_character(1, 1).await?;
    favorite_service.add_planet(1, 2).await?;
    favorite_service.add_starship(1, 1).await?;
    // Another user's favorites must not leak in
    favorite_service.add_planet(2, 1).await?;

    assert_eq!(
        favorite,
        FavoriteCharacterDto {
            id: 1,
            user_id: 1,
            character_id: 2,
        }
    );

    let favorites = favorite_service
        .get_user_favorites(1)
        .await?
        .ok_or(ServiceTestError::Missing("user"))?;

    assert_eq!(favorites.user_id, 1);
    assert_eq!(
        favorites.characters,
        vec![
            CharacterDto {
                id: 2,
                name: "Han".to_string(),
                gender: "female".to_string(),
                height: 150,
            },
            CharacterDto {
                id: 1,
                name: "Leia".to_string(),
                gender: "female".to_string(),
                height: 150,
            },
        ]
    );
    let planets: Vec<&str> = favorites.planets.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(planets, vec!["Endor"]);
    assert_eq!(favorites.starships.len(), 1);
    assert_eq!(favorites.starships[0].name, "Falcon");

    Ok(())
}

/// Tests reading favorites of a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), ServiceTestError> {
    let test = setup().await?;
    let favorite_service = FavoriteService::new(&test.db);

    let result = favorite_service.get_user_favorites(3).await;

    assert!(matches!(result, Ok(None)));

    Ok(())
}

/// Tests favoriting a starship that does not exist.
///
/// Expected: Err classified as a foreign key violation
#[tokio::test]
async fn fails_for_nonexistent_starship() -> Result<(), ServiceTestError> {
    let test = setup().await?;
    let favorite_service = FavoriteService::new(&test.db);

    let result = favorite_service.add_starship(1, 9).await;

    let err = result.expect_err("dangling starship must be rejected");
    assert!(matches!(err, Error::DbErr(_)));
    assert!(matches!(
        err.constraint_violation(),
        Some(ConstraintViolation::ForeignKey(_))
    ));
    assert_eq!(err.to_dto().error, "Referenced resource does not exist");

    Ok(())
}

/// Tests removing favorites.
///
/// Expected: true when a favorite was removed, false when there was none
#[tokio::test]
async fn removes_favorites() -> Result<(), ServiceTestError> {
    let test = setup().await?;
    let favorite_service = FavoriteService::new(&test.db);
    test.favorite().insert_favorite_character(1, 1).await?;
    test.favorite().insert_favorite_planet(1, 1).await?;
    test.favorite().insert_favorite_starship(1, 1).await?;

    assert!(favorite_service.remove_character(1, 1).await?);
    assert!(favorite_service.remove_planet(1, 1).await?);
    assert!(favorite_service.remove_starship(1, 1).await?);
    assert!(!favorite_service.remove_planet(1, 1).await?);

    let favorites = favorite_service
        .get_user_favorites(1)
        .await?
        .ok_or(ServiceTestError::Missing("user"))?;
    assert!(favorites.characters.is_empty());
    assert!(favorites.planets.is_empty());
    assert!(favorites.starships.is_empty());

    Ok(())
}

/// Tests that deleting a catalog item removes it from every user's favorites.
///
/// Expected: the deleted planet no longer appears, the other favorite remains
#[tokio::test]
async fn catalog_delete_removes_favorite() -> Result<(), ServiceTestError> {
    let test = setup().await?;
    let favorite_service = FavoriteService::new(&test.db);
    test.favorite().insert_favorite_planet(1, 1).await?;
    test.favorite().insert_favorite_planet(1, 2).await?;

    PlanetRepository::new(&test.db).delete(1).await?;

    let favorites = favorite_service
        .get_user_favorites(1)
        .await?
        .ok_or(ServiceTestError::Missing("user"))?;
    let planets: Vec<&str> = favorites.planets.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(planets, vec!["Endor"]);

    Ok(())
}
