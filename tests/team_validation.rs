use serde_json::json;
use serde_json::Value;

use champion::model::nature::Nature;
use champion::model::stat::BaseStats;
use champion::model::stat::StatSpread;
use champion::model::team::Gimmick;
use champion::model::team::Team;
use champion::model::team::TeamPokemon;
use champion::model::version::Generation;
use champion::ApiResponse;
use champion::Error;
use champion::ErrorKind;
use champion::Rules;
use champion::Validator;

fn garchomp_base_stats() -> BaseStats {
  serde_json::from_value(json!({
    "hp": { "base": 108, "min": 326, "max": 420 },
    "attack": { "base": 130, "min": 238, "max": 394 },
    "defense": { "base": 95, "min": 175, "max": 317 },
    "spAtk": { "base": 80, "min": 148, "max": 301 },
    "spDef": { "base": 85, "min": 157, "max": 312 },
    "speed": { "base": 102, "min": 188, "max": 333 },
    "total": 9999,
  }))
  .unwrap()
}

fn jolly() -> Nature {
  serde_json::from_value(json!({
    "id": 16,
    "name": { "en": "Jolly", "ja": "ようき" },
    "increasedStat": "speed",
    "decreasedStat": "special-attack",
  }))
  .unwrap()
}

fn garchomp() -> Value {
  json!({
    "pokemonId": 445,
    "level": 50,
    "abilityIdentifier": "rough-skin",
    "moves": [89, 200, 14, 444],
    "itemId": 197,
    "natureId": 16,
    "evs": {
      "hp": 4, "attack": 252, "defense": 0,
      "specialAttack": 0, "specialDefense": 0, "speed": 252,
    },
    "teraType": "steel",
  })
}

fn team(members: Vec<Value>) -> Team {
  serde_json::from_value(json!({
    "id": "t1",
    "name": "Sand",
    "description": "",
    "strategy": "Set sand, sweep.",
    "pokemon": members,
    "authorId": "u1",
    "isPublic": true,
    "likes": 3,
    "createdAt": "2024-06-01T00:00:00Z",
    "updatedAt": "2024-06-02T00:00:00Z",
  }))
  .unwrap()
}

#[test]
fn test_evaluates_a_legal_member() {
  let member: TeamPokemon = serde_json::from_value(garchomp()).unwrap();
  assert_eq!(member.ivs, StatSpread::perfect_ivs());
  assert_eq!(member.gimmick, Gimmick::Tera("steel".into()));

  let base_stats = garchomp_base_stats();
  assert_eq!(base_stats.total(), 600);

  let stats = Validator::default()
    .evaluate(&member, &base_stats, &jolly())
    .unwrap();
  assert_eq!(
    stats,
    StatSpread {
      hp: 184,
      attack: 182,
      defense: 115,
      special_attack: 90,
      special_defense: 105,
      speed: 169,
    }
  );

  let response = ApiResponse::ok(stats);
  let json = serde_json::to_value(&response).unwrap();
  assert_eq!(json["success"], true);
  assert_eq!(json["data"]["specialAttack"], 90);
}

#[test]
fn test_rejects_members_by_position() {
  let mut overtrained = garchomp();
  overtrained["evs"]["defense"] = json!(252);
  let mut repeated = garchomp();
  repeated["moves"] = json!([89, 89]);

  let validator = Validator::default();
  assert!(validator.validate_team(&team(vec![garchomp()])).is_ok());

  let err = validator
    .validate_team(&team(vec![garchomp(), overtrained, repeated]))
    .unwrap_err();
  assert_eq!(err.kind(), ErrorKind::TotalExceeded);
  match err {
    Error::Member { index, source } => {
      assert_eq!(index, 1);
      assert_eq!(*source, Error::TotalExceeded { total: 760, max: 510 });
    }
    other => panic!("expected a member error, got {other:?}"),
  }
}

#[test]
fn test_rejects_oversized_teams() {
  let err = Validator::default()
    .validate_team(&team(vec![garchomp(); 7]))
    .unwrap_err();
  assert_eq!(err, Error::TeamTooLarge { size: 7, max: 6 });

  let response = ApiResponse::<()>::err(&err);
  assert_eq!(response.error.as_deref(), Some("TEAM_TOO_LARGE"));
}

#[test]
fn test_rejects_conflicting_gimmicks_on_parse() {
  let mut both = garchomp();
  both["gigantamaxFactor"] = json!(true);
  assert!(serde_json::from_value::<TeamPokemon>(both).is_err());

  let mut unset = garchomp();
  unset["gigantamaxFactor"] = json!(false);
  let member: TeamPokemon = serde_json::from_value(unset).unwrap();
  assert_eq!(member.gimmick, Gimmick::Tera("steel".into()));
}

#[test]
fn test_respects_generation_rules() {
  let rules: Rules =
    serde_json::from_value(json!({ "generation": 7, "maxLevel": 50 }))
      .unwrap();
  assert_eq!(rules.generation, Some(Generation::SUN_MOON));

  let validator = Validator::new(rules);
  let err = validator.validate_team(&team(vec![garchomp()])).unwrap_err();
  assert_eq!(err.kind(), ErrorKind::GimmickUnavailable);

  let mut mega = garchomp();
  mega.as_object_mut().unwrap().remove("teraType");
  mega["megaEvolution"] = json!("garchompite");
  mega["itemId"] = json!(683);
  assert!(validator.validate_team(&team(vec![mega.clone()])).is_ok());

  mega["level"] = json!(51);
  assert_eq!(
    validator.validate_team(&team(vec![mega])).unwrap_err().kind(),
    ErrorKind::OutOfRange
  );
}

#[test]
fn test_member_round_trips_in_camel_case() {
  let member: TeamPokemon = serde_json::from_value(garchomp()).unwrap();
  let json = serde_json::to_value(&member).unwrap();
  assert_eq!(json["teraType"], "steel");
  assert!(json.get("megaEvolution").is_none());
  assert_eq!(json["ivs"]["specialDefense"], 31);
  assert_eq!(
    serde_json::from_value::<TeamPokemon>(json).unwrap(),
    member
  );
}

#[test]
fn test_evaluates_with_one_sided_camel_case_nature() {
  let nature: Nature = serde_json::from_value(json!({
    "id": 99,
    "name": { "en": "Custom", "ja": "カスタム" },
    "increasedStat": "specialAttack",
  }))
  .unwrap();

  let member: TeamPokemon = serde_json::from_value(garchomp()).unwrap();
  let stats = Validator::default()
    .evaluate(&member, &garchomp_base_stats(), &nature)
    .unwrap();
  assert_eq!(stats.special_attack, 110);
  assert_eq!(stats.speed, 154);
}
