pub mod admin_shell;
pub mod error_label;
pub mod modal;
pub mod page;
pub mod pokemon_card;
pub mod sidebar;
pub mod sprite;

pub use admin_shell::AdminShell;
pub use error_label::ErrorLabel;
pub use page::Page;
pub use pokemon_card::{PokemonCard, PokemonDetail, TypeBadges};
pub use sidebar::AppShell;
pub use sprite::Sprite;
