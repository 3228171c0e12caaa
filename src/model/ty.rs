//! Pokemon types, which describe how different Pokemon are strong against
//! others in battle.

use serde::Deserialize;
use serde::Serialize;

use crate::model::text::LocalizedText;

/// A Pokemon type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonType {
  /// This type's numeric ID.
  pub id: u32,
  /// The name of this type in various languages.
  pub name: LocalizedText,
  /// This type's API name, such as `"dragon"`.
  pub identifier: String,
}
