//! Pokemon battle statistics, which describe how powerful Pokemon are relative
//! to each other.

use serde::Deserialize;
use serde::Serialize;

use crate::error::Error;

well_known! {
  /// A permanent Pokemon battle statistic.
  pub enum StatName {
    /// Hit Points determine how much damage a Pokemon can take in battle.
    HitPoints => "hp",
    /// Attack determines the power of a Pokemon's physical moves.
    Attack => "attack",
    /// Defense determines the effectiveness of a physical move on a Pokemon.
    Defense => "defense",
    /// Special Attack determines the power of a Pokemon's special moves.
    SpAttack => "special-attack" | "specialAttack" | "spAtk",
    /// Special Defense determines the effectiveness of a special move on a
    /// Pokemon.
    SpDefense => "special-defense" | "specialDefense" | "spDef",
    /// Speed determines which Pokemon moves first in a turn.
    Speed => "speed",
  }
}

/// One integer per [`StatName`].
///
/// This is the shape of both effort values (EVs) and individual values (IVs),
/// as well as of computed stats. Fields are signed so that malformed input can
/// be represented and rejected rather than wrapped.
#[derive(
  Copy,
  Clone,
  Debug,
  Default,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct StatSpread {
  pub hp: i32,
  pub attack: i32,
  pub defense: i32,
  pub special_attack: i32,
  pub special_defense: i32,
  pub speed: i32,
}

impl StatSpread {
  /// Returns a spread with every stat set to `value`.
  pub const fn splat(value: i32) -> Self {
    Self {
      hp: value,
      attack: value,
      defense: value,
      special_attack: value,
      special_defense: value,
      speed: value,
    }
  }

  /// Returns the IV spread assumed when none is given: `31` everywhere.
  pub const fn perfect_ivs() -> Self {
    Self::splat(31)
  }

  /// Builds a spread by evaluating `f` once per stat, in [`StatName::ALL`]
  /// order.
  pub fn from_fn(mut f: impl FnMut(StatName) -> i32) -> Self {
    Self {
      hp: f(StatName::HitPoints),
      attack: f(StatName::Attack),
      defense: f(StatName::Defense),
      special_attack: f(StatName::SpAttack),
      special_defense: f(StatName::SpDefense),
      speed: f(StatName::Speed),
    }
  }

  /// Returns the value for `stat`.
  pub fn get(&self, stat: StatName) -> i32 {
    match stat {
      StatName::HitPoints => self.hp,
      StatName::Attack => self.attack,
      StatName::Defense => self.defense,
      StatName::SpAttack => self.special_attack,
      StatName::SpDefense => self.special_defense,
      StatName::Speed => self.speed,
    }
  }

  /// Returns a mutable reference to the value for `stat`.
  pub fn get_mut(&mut self, stat: StatName) -> &mut i32 {
    match stat {
      StatName::HitPoints => &mut self.hp,
      StatName::Attack => &mut self.attack,
      StatName::Defense => &mut self.defense,
      StatName::SpAttack => &mut self.special_attack,
      StatName::SpDefense => &mut self.special_defense,
      StatName::Speed => &mut self.speed,
    }
  }

  /// Returns `self` with `stat` replaced by `value`.
  pub fn with(mut self, stat: StatName, value: i32) -> Self {
    *self.get_mut(stat) = value;
    self
  }

  /// Returns an iterator over every `(stat, value)` pair.
  pub fn iter(&self) -> impl Iterator<Item = (StatName, i32)> + '_ {
    StatName::ALL.iter().map(move |&stat| (stat, self.get(stat)))
  }

  /// Returns the sum of all six values.
  ///
  /// The sum is widened so that hostile input cannot overflow it.
  pub fn total(&self) -> i64 {
    self.iter().map(|(_, value)| value as i64).sum()
  }
}

/// The base value of a stat, along with the range it can reach at level 100.
#[derive(
  Copy,
  Clone,
  Debug,
  Default,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
)]
pub struct StatValues {
  /// The species' base value.
  pub base: i32,
  /// The lowest reachable value at level 100.
  pub min: i32,
  /// The highest reachable value at level 100.
  pub max: i32,
}

impl StatValues {
  /// Returns whether `min <= base <= max`.
  ///
  /// Scraped data usually has this shape, but nothing upstream enforces it.
  pub fn is_ordered(&self) -> bool {
    self.min <= self.base && self.base <= self.max
  }

  /// Checks the hard invariants on these values: the base must be positive
  /// and no greater than the maximum, and the range must not be inverted.
  pub fn validate(&self, stat: StatName) -> Result<(), Error> {
    if self.base < 1 || self.base > self.max || self.min > self.max {
      return Err(Error::InconsistentStats {
        stat,
        base: self.base,
        min: self.min,
        max: self.max,
      });
    }
    Ok(())
  }
}

/// The six [`StatValues`] of a species or form.
///
/// The total of the base values is always recomputed; a `total` present in
/// deserialized input is discarded.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(from = "BaseStatsRecord", into = "BaseStatsRecord")]
#[allow(missing_docs)]
pub struct BaseStats {
  pub hp: StatValues,
  pub attack: StatValues,
  pub defense: StatValues,
  pub sp_atk: StatValues,
  pub sp_def: StatValues,
  pub speed: StatValues,
}

impl BaseStats {
  /// Returns the values for `stat`.
  pub fn get(&self, stat: StatName) -> &StatValues {
    match stat {
      StatName::HitPoints => &self.hp,
      StatName::Attack => &self.attack,
      StatName::Defense => &self.defense,
      StatName::SpAttack => &self.sp_atk,
      StatName::SpDefense => &self.sp_def,
      StatName::Speed => &self.speed,
    }
  }

  /// Returns an iterator over every `(stat, values)` pair.
  pub fn iter(&self) -> impl Iterator<Item = (StatName, &StatValues)> + '_ {
    StatName::ALL.iter().map(move |&stat| (stat, self.get(stat)))
  }

  /// Returns just the base values.
  pub fn bases(&self) -> StatSpread {
    StatSpread::from_fn(|stat| self.get(stat).base)
  }

  /// Returns the sum of the six base values.
  pub fn total(&self) -> i32 {
    self
      .iter()
      .fold(0i32, |total, (_, values)| total.saturating_add(values.base))
  }

  /// Checks every stat with [`StatValues::validate()`].
  pub fn validate(&self) -> Result<(), Error> {
    self.iter().try_for_each(|(stat, values)| values.validate(stat))
  }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BaseStatsRecord {
  hp: StatValues,
  attack: StatValues,
  defense: StatValues,
  sp_atk: StatValues,
  sp_def: StatValues,
  speed: StatValues,
  #[serde(default)]
  total: i32,
}

impl From<BaseStatsRecord> for BaseStats {
  fn from(r: BaseStatsRecord) -> Self {
    Self {
      hp: r.hp,
      attack: r.attack,
      defense: r.defense,
      sp_atk: r.sp_atk,
      sp_def: r.sp_def,
      speed: r.speed,
    }
  }
}

impl From<BaseStats> for BaseStatsRecord {
  fn from(s: BaseStats) -> Self {
    Self {
      total: s.total(),
      hp: s.hp,
      attack: s.attack,
      defense: s.defense,
      sp_atk: s.sp_atk,
      sp_def: s.sp_def,
      speed: s.speed,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn garchomp() -> BaseStats {
    let values = |base, min, max| StatValues { base, min, max };
    BaseStats {
      hp: values(108, 326, 420),
      attack: values(130, 238, 394),
      defense: values(95, 175, 317),
      sp_atk: values(80, 148, 301),
      sp_def: values(85, 157, 312),
      speed: values(102, 188, 333),
    }
  }

  #[test]
  fn test_spread_accessors() {
    let evs = StatSpread::default()
      .with(StatName::Attack, 252)
      .with(StatName::Speed, 252)
      .with(StatName::HitPoints, 4);
    assert_eq!(evs.attack, 252);
    assert_eq!(evs.get(StatName::Speed), 252);
    assert_eq!(evs.total(), 508);
    assert_eq!(
      evs.iter().map(|(stat, _)| stat).collect::<Vec<_>>(),
      StatName::ALL.to_vec()
    );
  }

  #[test]
  fn test_total_does_not_overflow() {
    assert_eq!(StatSpread::splat(i32::MAX).total(), 6 * i32::MAX as i64);
  }

  #[test]
  fn test_total_is_recomputed() {
    let mut json = serde_json::to_value(garchomp()).unwrap();
    assert_eq!(json["total"], 600);
    assert_eq!(json["spAtk"]["base"], 80);

    json["total"] = 9999.into();
    let stats: BaseStats = serde_json::from_value(json).unwrap();
    assert_eq!(stats.total(), 600);
    assert_eq!(stats.bases().special_attack, 80);
  }

  #[test]
  fn test_stat_values_checks() {
    assert!(garchomp().validate().is_ok());
    assert!(!garchomp().hp.is_ordered());

    let ordered = StatValues {
      base: 50,
      min: 40,
      max: 60,
    };
    assert!(ordered.is_ordered());
    assert!(ordered.validate(StatName::Speed).is_ok());

    let mut broken = garchomp();
    broken.speed.base = 400;
    assert_eq!(
      broken.validate(),
      Err(Error::InconsistentStats {
        stat: StatName::Speed,
        base: 400,
        min: 188,
        max: 333,
      })
    );
  }

  #[test]
  fn test_stat_names() {
    assert_eq!("special-defense".parse::<StatName>(), Ok(StatName::SpDefense));
    assert!("accuracy".parse::<StatName>().is_err());

    for (name, stat) in [
      ("specialAttack", StatName::SpAttack),
      ("spAtk", StatName::SpAttack),
      ("specialDefense", StatName::SpDefense),
      ("spDef", StatName::SpDefense),
    ] {
      assert_eq!(name.parse::<StatName>(), Ok(stat));
      assert_eq!(
        serde_json::from_value::<StatName>(serde_json::json!(name)).unwrap(),
        stat
      );
    }
    assert_eq!(StatName::SpAttack.as_str(), "special-attack");
    assert_eq!(
      serde_json::to_value(StatName::SpDefense).unwrap(),
      "special-defense"
    );
  }
}
