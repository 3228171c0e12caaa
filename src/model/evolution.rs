//! Evolution, ways that different Pokemon within an evolution family are
//! related.

use serde::Deserialize;
use serde::Serialize;

/// A stage within an evolution family.
///
/// This structure forms a tree rooted at the "base" stage for the family. For
/// example, Garchomp's family is rooted at Gible.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionNode {
  /// The species at this stage.
  pub species_id: u32,
  /// Ways the previous stage can become this one. Empty for the root.
  ///
  /// There may be more than one; for example, Milotic can evolve from Feebas
  /// either by holding a Prism Scale, or by having maxed-out Beauty.
  #[serde(default)]
  pub triggers: Vec<EvolutionTrigger>,
  /// Stages that this species can evolve into.
  #[serde(default)]
  pub evolves_to: Vec<EvolutionNode>,
}

/// An event that causes one stage to evolve into the next.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum EvolutionTrigger {
  /// Reaching a level, possibly with extra conditions.
  #[serde(rename_all = "camelCase")]
  LevelUp {
    /// The minimum level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min_level: Option<u8>,
    /// The minimum friendship.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min_happiness: Option<u8>,
    /// The time of day, such as `"night"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    time_of_day: Option<String>,
    /// A move that must be known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    known_move: Option<String>,
  },
  /// Using an item, such as an evolution stone.
  UseItem {
    /// The item's API name.
    item: String,
  },
  /// Being traded.
  #[serde(rename_all = "camelCase")]
  Trade {
    /// An item that must be held during the trade.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    held_item: Option<String>,
    /// The species this one must be traded for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    trade_species_id: Option<u32>,
  },
  /// Anything else, described in prose.
  Other {
    /// A description of the trigger.
    description: String,
  },
}

impl EvolutionNode {
  /// Creates a leaf stage.
  pub fn new(species_id: u32) -> Self {
    Self {
      species_id,
      triggers: Vec::new(),
      evolves_to: Vec::new(),
    }
  }

  /// Returns `self` with `child` added as an evolution.
  pub fn with_evolution(mut self, child: EvolutionNode) -> Self {
    self.evolves_to.push(child);
    self
  }

  /// Returns `self` with `trigger` added.
  pub fn with_trigger(mut self, trigger: EvolutionTrigger) -> Self {
    self.triggers.push(trigger);
    self
  }

  /// Returns an iterator over every stage, depth-first, starting with `self`.
  pub fn iter(&self) -> impl Iterator<Item = &EvolutionNode> + '_ {
    let mut stack = vec![self];
    std::iter::from_fn(move || {
      let node = stack.pop()?;
      stack.extend(node.evolves_to.iter().rev());
      Some(node)
    })
  }

  /// Returns an iterator over every species in the family.
  pub fn species(&self) -> impl Iterator<Item = u32> + '_ {
    self.iter().map(|node| node.species_id)
  }

  /// Returns the number of stages on the longest path from `self`, counting
  /// `self`.
  pub fn depth(&self) -> usize {
    1 + self
      .evolves_to
      .iter()
      .map(EvolutionNode::depth)
      .max()
      .unwrap_or(0)
  }

  /// Finds the stage for `species_id`.
  pub fn find(&self, species_id: u32) -> Option<&EvolutionNode> {
    self.iter().find(|node| node.species_id == species_id)
  }

  /// Returns the species from `self` down to `species_id`, inclusive, or
  /// `None` if it is not in this family.
  pub fn path_to(&self, species_id: u32) -> Option<Vec<u32>> {
    if self.species_id == species_id {
      return Some(vec![species_id]);
    }
    self.evolves_to.iter().find_map(|child| {
      let mut path = child.path_to(species_id)?;
      path.insert(0, self.species_id);
      Some(path)
    })
  }

  /// Returns whether `species_id` is a final stage, i.e., has no further
  /// evolutions. `None` if it is not in this family.
  pub fn is_fully_evolved(&self, species_id: u32) -> Option<bool> {
    self.find(species_id).map(|node| node.evolves_to.is_empty())
  }
}
