//! Pokemon natures, which influence how a Pokemon's stats grow.

use serde::Deserialize;
use serde::Serialize;

use crate::model::stat::StatName;
use crate::model::text::LocalizedText;

/// How a [`Nature`] scales one particular stat.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NatureModifier {
  /// The stat grows better: ×1.1.
  Boost,
  /// The stat is unaffected: ×1.0.
  Neutral,
  /// The stat grows worse: ×0.9.
  Hinder,
}

impl NatureModifier {
  /// Returns this modifier as an integer percentage.
  pub fn percent(self) -> i64 {
    match self {
      Self::Boost => 110,
      Self::Neutral => 100,
      Self::Hinder => 90,
    }
  }

  /// Returns this modifier as a multiplier, for display.
  pub fn factor(self) -> f64 {
    self.percent() as f64 / 100.0
  }

  /// Scales `value` by this modifier, rounding down.
  ///
  /// The games compute this in integer percent, so this does too; multiplying
  /// by `1.1` in floating point would not round down the same way.
  pub fn apply(self, value: i64) -> i64 {
    value.saturating_mul(self.percent()).div_euclid(100)
  }
}

impl Default for NatureModifier {
  fn default() -> Self {
    Self::Neutral
  }
}

/// A Pokemon nature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nature {
  /// This nature's numeric ID.
  pub id: u32,
  /// The name of this nature in various languages.
  pub name: LocalizedText,

  /// The statistic that this nature causes to grow better.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub increased_stat: Option<StatName>,
  /// The statistic that this nature causes to grow worse.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub decreased_stat: Option<StatName>,
}

impl Nature {
  /// Returns whether this nature leaves every stat alone.
  ///
  /// Natures like Hardy name the same stat as both increased and decreased;
  /// the two effects cancel out. A nature naming only one side still affects
  /// that stat.
  pub fn is_neutral(&self) -> bool {
    match (self.increased_stat, self.decreased_stat) {
      (Some(up), Some(down)) => up == down,
      (None, None) => true,
      _ => false,
    }
  }

  /// Returns how this nature scales `stat`.
  ///
  /// Natures never affect HP.
  pub fn modifier(&self, stat: StatName) -> NatureModifier {
    if stat == StatName::HitPoints || self.is_neutral() {
      return NatureModifier::Neutral;
    }

    if self.increased_stat == Some(stat) {
      NatureModifier::Boost
    } else if self.decreased_stat == Some(stat) {
      NatureModifier::Hinder
    } else {
      NatureModifier::Neutral
    }
  }
}
