//! Pokemon abilities, which provide passive effects in battle.

use serde::Deserialize;
use serde::Serialize;

use crate::model::text::LocalizedText;

/// A Pokemon ability.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
  /// This ability's numeric ID.
  pub id: u32,
  /// The name of this ability in various languages.
  pub name: LocalizedText,
  /// Effect text for this ability in various languages.
  pub description: LocalizedText,
  /// This ability's API name, such as `"rough-skin"`.
  pub identifier: String,
}
