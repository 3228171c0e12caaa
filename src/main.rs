//! `champion` checks a team member from the command line.
//!
//! ```text
//! champion <request.json> [rules.json]
//! ```
//!
//! The request names a team member along with the base stats and nature it
//! refers to. The result is printed to stdout as an [`ApiResponse`] holding
//! the member's effective stats.

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use champion::model::nature::Nature;
use champion::model::stat::BaseStats;
use champion::model::stat::StatSpread;
use champion::model::team::TeamPokemon;
use champion::ApiResponse;
use champion::Rules;
use champion::Validator;

/// The input to a single check.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CheckRequest {
  pokemon: TeamPokemon,
  base_stats: BaseStats,
  nature: Nature,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
  #[error("usage: champion <request.json> [rules.json]")]
  Usage,

  #[error("could not read {}: {source}", path.display())]
  Io { path: PathBuf, source: io::Error },

  #[error("could not parse {}: {source}", path.display())]
  Json {
    path: PathBuf,
    source: serde_json::Error,
  },

  #[error(transparent)]
  Output(#[from] serde_json::Error),
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
  let text = fs::read_to_string(path).map_err(|source| CliError::Io {
    path: path.to_owned(),
    source,
  })?;
  serde_json::from_str(&text).map_err(|source| CliError::Json {
    path: path.to_owned(),
    source,
  })
}

fn run(args: &[String]) -> Result<ApiResponse<StatSpread>, CliError> {
  let (request, rules) = match args {
    [request] => (request, None),
    [request, rules] => (request, Some(rules)),
    _ => return Err(CliError::Usage),
  };

  let rules = match rules {
    Some(path) => read_json::<Rules>(Path::new(path))?,
    None => Rules::default(),
  };
  tracing::debug!(?rules, "loaded rules");

  let request = read_json::<CheckRequest>(Path::new(request))?;
  tracing::info!(
    pokemon_id = request.pokemon.pokemon_id,
    level = request.pokemon.level,
    nature = request.nature.id,
    "checking team member"
  );

  let result = Validator::new(rules).evaluate(
    &request.pokemon,
    &request.base_stats,
    &request.nature,
  );
  if let Err(e) = &result {
    tracing::info!(kind = %e.kind(), "team member rejected: {e}");
  }
  Ok(result.into())
}

fn main() -> ExitCode {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "champion=info".into()),
    )
    .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
    .init();

  let args = std::env::args().skip(1).collect::<Vec<_>>();
  let output = run(&args).and_then(|response| {
    serde_json::to_string_pretty(&response).map_err(CliError::from)
  });

  match output {
    Ok(json) => {
      println!("{json}");
      ExitCode::SUCCESS
    }
    Err(e) => {
      eprintln!("{e}");
      ExitCode::FAILURE
    }
  }
}
