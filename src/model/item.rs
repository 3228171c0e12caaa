//! Items are objects that can be used in and outside of battle, or held by a
//! Pokemon.

use serde::Deserialize;
use serde::Serialize;

use crate::model::text::LocalizedText;

/// An item of some kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
  /// This item's numeric ID.
  pub id: u32,
  /// The name of this item in various languages.
  pub name: LocalizedText,
  /// Effect text for this item in various languages.
  pub description: LocalizedText,
  /// This item's API name, such as `"choice-scarf"`.
  pub identifier: String,
}

/// The API names of every Mega Stone, sorted.
const MEGA_STONES: &[&str] = &[
  "abomasite",
  "absolite",
  "aerodactylite",
  "aggronite",
  "alakazite",
  "altarianite",
  "ampharosite",
  "audinite",
  "banettite",
  "beedrillite",
  "blastoisinite",
  "blazikenite",
  "cameruptite",
  "charizardite-x",
  "charizardite-y",
  "diancite",
  "galladite",
  "garchompite",
  "gardevoirite",
  "gengarite",
  "glalitite",
  "gyaradosite",
  "heracronite",
  "houndoominite",
  "kangaskhanite",
  "latiasite",
  "latiosite",
  "lopunnite",
  "lucarionite",
  "manectite",
  "mawilite",
  "medichamite",
  "metagrossite",
  "mewtwonite-x",
  "mewtwonite-y",
  "pidgeotite",
  "pinsirite",
  "sablenite",
  "salamencite",
  "sceptilite",
  "scizorite",
  "sharpedonite",
  "slowbronite",
  "steelixite",
  "swampertite",
  "tyranitarite",
  "venusaurite",
];

impl Item {
  /// Returns whether this item is a Mega Stone.
  pub fn is_mega_stone(&self) -> bool {
    MEGA_STONES
      .binary_search(&self.identifier.as_str())
      .is_ok()
  }
}
