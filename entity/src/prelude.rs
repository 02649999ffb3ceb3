pub use super::character::Entity as Character;
pub use super::favorite_characters::Entity as FavoriteCharacters;
pub use super::favorite_planets::Entity as FavoritePlanets;
pub use super::favorite_starships::Entity as FavoriteStarships;
pub use super::planet::Entity as Planet;
pub use super::starship::Entity as Starship;
pub use super::user::Entity as User;
