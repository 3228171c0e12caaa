//! Validation errors.

use std::fmt;

use serde::Serialize;

use crate::model::stat::StatName;
use crate::model::text::Language;
use crate::model::version::Generation;

/// The value that failed a range check.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Field {
  Ev(StatName),
  Iv(StatName),
  Level,
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Self::Ev(stat) => write!(f, "{} EV", stat),
      Self::Iv(stat) => write!(f, "{} IV", stat),
      Self::Level => f.write_str("level"),
    }
  }
}

/// A rejected record.
///
/// None of these are fatal; they are meant to be reported back to whoever
/// submitted the record, usually through [`crate::api::ApiResponse::err()`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[allow(missing_docs)]
pub enum Error {
  #[error("{field} is {value}, outside of {min}..={max}")]
  OutOfRange {
    field: Field,
    value: i32,
    min: i32,
    max: i32,
  },

  #[error("EVs total {total}, above the limit of {max}")]
  TotalExceeded { total: i64, max: i32 },

  #[error("{count} moves given, but at most {max} are allowed")]
  TooManyMoves { count: usize, max: usize },

  #[error("move {id} appears more than once")]
  DuplicateMove { id: u32 },

  #[error("no {requested} or fallback English text present")]
  MissingTranslation { requested: Language },

  #[error("only one of teraType, gigantamaxFactor and megaEvolution may be set")]
  ConflictingGimmicks,

  #[error("{gimmick} is not available in {generation}")]
  GimmickUnavailable {
    gimmick: &'static str,
    generation: Generation,
  },

  #[error("{stat} stat values are inconsistent (base {base}, min {min}, max {max})")]
  InconsistentStats {
    stat: StatName,
    base: i32,
    min: i32,
    max: i32,
  },

  #[error("team has {size} members, but at most {max} are allowed")]
  TeamTooLarge { size: usize, max: usize },

  #[error("team member {index}: {source}")]
  Member { index: usize, source: Box<Error> },
}

/// The kind of an [`Error`], without its details.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum ErrorKind {
  OutOfRange,
  TotalExceeded,
  TooManyMoves,
  DuplicateMove,
  MissingTranslation,
  ConflictingGimmicks,
  GimmickUnavailable,
  InconsistentStats,
  TeamTooLarge,
}

impl ErrorKind {
  /// Returns the stable code for this kind, as reported to API clients.
  pub fn code(self) -> &'static str {
    match self {
      Self::OutOfRange => "OUT_OF_RANGE",
      Self::TotalExceeded => "TOTAL_EXCEEDED",
      Self::TooManyMoves => "TOO_MANY_MOVES",
      Self::DuplicateMove => "DUPLICATE_MOVE",
      Self::MissingTranslation => "MISSING_TRANSLATION",
      Self::ConflictingGimmicks => "CONFLICTING_GIMMICKS",
      Self::GimmickUnavailable => "GIMMICK_UNAVAILABLE",
      Self::InconsistentStats => "INCONSISTENT_STATS",
      Self::TeamTooLarge => "TEAM_TOO_LARGE",
    }
  }
}

impl fmt::Display for ErrorKind {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.code())
  }
}

impl Error {
  /// Returns this error's kind.
  ///
  /// Errors wrapped in [`Error::Member`] report the kind of the member's
  /// error.
  pub fn kind(&self) -> ErrorKind {
    match self {
      Self::OutOfRange { .. } => ErrorKind::OutOfRange,
      Self::TotalExceeded { .. } => ErrorKind::TotalExceeded,
      Self::TooManyMoves { .. } => ErrorKind::TooManyMoves,
      Self::DuplicateMove { .. } => ErrorKind::DuplicateMove,
      Self::MissingTranslation { .. } => ErrorKind::MissingTranslation,
      Self::ConflictingGimmicks => ErrorKind::ConflictingGimmicks,
      Self::GimmickUnavailable { .. } => ErrorKind::GimmickUnavailable,
      Self::InconsistentStats { .. } => ErrorKind::InconsistentStats,
      Self::TeamTooLarge { .. } => ErrorKind::TeamTooLarge,
      Self::Member { source, .. } => source.kind(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_member_reports_inner_kind() {
    let err = Error::Member {
      index: 2,
      source: Box::new(Error::DuplicateMove { id: 85 }),
    };
    assert_eq!(err.kind(), ErrorKind::DuplicateMove);
    assert_eq!(err.to_string(), "team member 2: move 85 appears more than once");
  }

  #[test]
  fn test_messages() {
    let err = Error::OutOfRange {
      field: Field::Ev(StatName::SpAttack),
      value: 300,
      min: 0,
      max: 252,
    };
    assert_eq!(err.to_string(), "special-attack EV is 300, outside of 0..=252");
    assert_eq!(err.kind().code(), "OUT_OF_RANGE");
  }

  #[test]
  fn test_kind_serializes_as_code() {
    for kind in [
      ErrorKind::TotalExceeded,
      ErrorKind::MissingTranslation,
      ErrorKind::TeamTooLarge,
    ] {
      assert_eq!(serde_json::to_value(kind).unwrap(), kind.code());
    }
  }
}
