pub use super::role::Entity as Role;
pub use super::search_history::Entity as SearchHistory;
pub use super::team_pokemon::Entity as TeamPokemon;
pub use super::trainer::Entity as Trainer;
pub use super::user::Entity as User;
