//! Effective stat computation.
//!
//! These are the Generation III+ main-series formulas. Every division rounds
//! down at the same point the games do, so results match in-game values
//! exactly:
//!
//! ```text
//! core  = floor((2 * base + iv + floor(ev / 4)) * level / 100)
//! hp    = core + level + 10
//! other = floor((core + 5) * nature)
//! ```
//!
//! A species whose base HP is `1` (Shedinja) always has exactly 1 HP.

use crate::model::nature::Nature;
use crate::model::nature::NatureModifier;
use crate::model::stat::BaseStats;
use crate::model::stat::StatName;
use crate::model::stat::StatSpread;
use crate::model::stat::StatValues;

/// The level that scraped `min`/`max` columns are computed at.
pub const RANGE_LEVEL: i32 = 100;

fn core(base: i32, ev: i32, iv: i32, level: i32) -> i64 {
  let points = 2 * base as i64 + iv as i64 + (ev as i64).div_euclid(4);
  points.saturating_mul(level as i64).div_euclid(100)
}

fn narrow(value: i64) -> i32 {
  value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Computes a Pokemon's maximum HP.
pub fn effective_hp(base: &StatValues, ev: i32, iv: i32, level: i32) -> i32 {
  if base.base == 1 {
    return 1;
  }
  narrow(
    core(base.base, ev, iv, level)
      .saturating_add(level as i64)
      .saturating_add(10),
  )
}

/// Computes any stat other than HP.
pub fn effective_stat(
  base: &StatValues,
  ev: i32,
  iv: i32,
  level: i32,
  nature: NatureModifier,
) -> i32 {
  narrow(nature.apply(core(base.base, ev, iv, level).saturating_add(5)))
}

/// Computes the in-battle value of `stat`.
///
/// `nature` is ignored for HP.
pub fn compute_effective_stat(
  stat: StatName,
  base: &StatValues,
  ev: i32,
  iv: i32,
  level: i32,
  nature: NatureModifier,
) -> i32 {
  match stat {
    StatName::HitPoints => effective_hp(base, ev, iv, level),
    _ => effective_stat(base, ev, iv, level, nature),
  }
}

/// Computes all six stats at once.
pub fn compute_stats(
  base_stats: &BaseStats,
  evs: &StatSpread,
  ivs: &StatSpread,
  level: i32,
  nature: &Nature,
) -> StatSpread {
  StatSpread::from_fn(|stat| {
    compute_effective_stat(
      stat,
      base_stats.get(stat),
      evs.get(stat),
      ivs.get(stat),
      level,
      nature.modifier(stat),
    )
  })
}

/// Computes the lowest and highest values `stat` can take at `level` for a
/// species with the given `base`.
///
/// The minimum uses 0 IVs, 0 EVs and a hindering nature; the maximum uses
/// 31 IVs, 252 EVs and a boosting nature.
pub fn stat_range(stat: StatName, base: i32, level: i32) -> StatValues {
  let values = StatValues {
    base,
    min: 0,
    max: 0,
  };
  StatValues {
    base,
    min: compute_effective_stat(
      stat,
      &values,
      0,
      0,
      level,
      NatureModifier::Hinder,
    ),
    max: compute_effective_stat(
      stat,
      &values,
      252,
      31,
      level,
      NatureModifier::Boost,
    ),
  }
}

/// Builds full [`BaseStats`] from bare base values, filling in the level-100
/// ranges.
pub fn derive_base_stats(bases: &StatSpread) -> BaseStats {
  let range = |stat| stat_range(stat, bases.get(stat), RANGE_LEVEL);
  BaseStats {
    hp: range(StatName::HitPoints),
    attack: range(StatName::Attack),
    defense: range(StatName::Defense),
    sp_atk: range(StatName::SpAttack),
    sp_def: range(StatName::SpDefense),
    speed: range(StatName::Speed),
  }
}
