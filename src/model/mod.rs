//! Structs describing the records exchanged with the API layer.

#[macro_use]
pub mod text;

pub mod ability;
pub mod evolution;
pub mod item;
pub mod mov;
pub mod nature;
pub mod news;
pub mod species;
pub mod stat;
pub mod team;
pub mod ty;
pub mod user;
pub mod version;

pub use ability::Ability;
pub use evolution::EvolutionNode;
pub use evolution::EvolutionTrigger;
pub use item::Item;
pub use mov::Move;
pub use mov::MoveI18n;
pub use nature::Nature;
pub use nature::NatureModifier;
pub use news::NewsArticle;
pub use species::Pokemon;
pub use species::PokemonDetails;
pub use species::PokemonFull;
pub use species::TierRank;
pub use stat::BaseStats;
pub use stat::StatName;
pub use stat::StatSpread;
pub use stat::StatValues;
pub use team::Comment;
pub use team::Gimmick;
pub use team::Team;
pub use team::TeamPokemon;
pub use text::Language;
pub use text::LocalizedText;
pub use ty::PokemonType;
pub use user::User;
pub use version::Generation;
