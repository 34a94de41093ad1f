//! FTRL scorer against fixtures and invariants.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use rstest::rstest;
use serde::Deserialize;

use reason::inference::ftrl::{FtrlConfig, FtrlScorer};
use reason::model::{Feature, Model};
use reason::repr::ftrl::FtrlOptimizer;
use reason::testing::{example, mixed_optimizer, DEFAULT_TOLERANCE_F64};
use reason::{Parallelism, Value};

use super::{load_fixture, JsonExample};

// =============================================================================
// Fixtures
// =============================================================================

#[derive(Debug, Deserialize)]
struct ScorerFixture {
    config: FtrlConfig,
    optimizer: FtrlOptimizer,
    cases: Vec<ScorerCase>,
}

#[derive(Debug, Deserialize)]
struct ScorerCase {
    name: String,
    example: JsonExample,
    margin: f64,
    probability: f64,
}

fn load_scorer(name: &str) -> (FtrlScorer, Vec<ScorerCase>) {
    let fixture: ScorerFixture = load_fixture("ftrl", name);
    let scorer =
        FtrlScorer::new(fixture.optimizer, fixture.config).expect("fixture scorer is valid");
    (scorer, fixture.cases)
}

#[rstest]
#[case("single_numeric")]
#[case("mixed")]
fn scorer_matches_fixture(#[case] name: &str) {
    let (scorer, cases) = load_scorer(name);
    assert!(!cases.is_empty());

    for case in &cases {
        let margin = scorer.margin(&case.example);
        let p = scorer.predict(&case.example);
        assert!(
            (margin - case.margin).abs() < DEFAULT_TOLERANCE_F64,
            "{name}/{}: margin {margin} != {}",
            case.name,
            case.margin
        );
        assert!(
            (p - case.probability).abs() < DEFAULT_TOLERANCE_F64,
            "{name}/{}: probability {p} != {}",
            case.name,
            case.probability
        );
    }
}

#[test]
fn mixed_fixture_layout() {
    let (scorer, _) = load_scorer("mixed");
    let layout = scorer.layout();
    assert_eq!(layout.n_slots(), 7);
    assert_eq!(layout.offset_of("color"), Some(0));
    assert_eq!(layout.offset_of("x"), Some(6));
    assert_eq!(layout.offset_of("y"), None);
}

#[test]
fn batch_matches_fixture() {
    let (scorer, cases) = load_scorer("mixed");
    let examples: Vec<_> = cases.iter().map(|c| c.example.clone()).collect();
    let batch = scorer.predict_batch(&examples, Parallelism::Parallel);
    for (p, case) in batch.iter().zip(&cases) {
        assert_abs_diff_eq!(*p, case.probability, epsilon = DEFAULT_TOLERANCE_F64);
    }
}

#[test]
fn serde_json_map_is_an_example() {
    let (scorer, _) = load_scorer("mixed");
    let map: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(r#"{"color": "b", "x": 2.0, "ignored": [1, 2]}"#).unwrap();
    assert_abs_diff_eq!(
        scorer.predict(&map),
        scorer.predict(&example(&[("color", "b".into()), ("x", 2.0.into())])),
        epsilon = DEFAULT_TOLERANCE_F64
    );
}

// =============================================================================
// Invariants
// =============================================================================

#[test]
fn default_config_matches_training_defaults() {
    let config = FtrlConfig::default();
    assert_eq!(config, FtrlConfig::builder().build().unwrap());
    assert_eq!((config.alpha, config.beta, config.l1, config.l2), (0.1, 1.0, 1.0, 0.1));
}

#[test]
fn prediction_ignores_feature_declaration_order() {
    let features = [
        Feature::numerical("b"),
        Feature::categorical_vocabulary_hash_buckets("a", ["p", "q"], 2),
        Feature::numerical("c"),
    ];
    let mut reversed = features.clone();
    reversed.reverse();

    let weights = vec![0.0, 3.0, -2.0, 0.0, 1.5, -4.0];
    let sums = vec![1.0; 6];
    let config = FtrlConfig::builder().l1(0.5).build().unwrap();
    let forward = FtrlScorer::new(
        FtrlOptimizer::new(Model::new("t", features), weights.clone(), sums.clone()),
        config,
    )
    .unwrap();
    let backward = FtrlScorer::new(
        FtrlOptimizer::new(Model::new("t", reversed), weights, sums),
        config,
    )
    .unwrap();

    let x = example(&[("a", "q".into()), ("b", 2.0.into()), ("c", (-1.0).into())]);
    assert_eq!(forward.predict(&x), backward.predict(&x));
    assert_ne!(forward.predict(&x), 0.5);
}

#[test]
fn example_is_not_modified() {
    let scorer = FtrlScorer::new(mixed_optimizer(), FtrlConfig::default()).unwrap();
    let x = example(&[("age", 31.0.into()), ("browser", "edge".into())]);
    let before = x.clone();
    let first = scorer.predict(&x);
    assert_eq!(x, before);
    assert_eq!(scorer.predict(&x), first);
}

fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        (-1e6f64..1e6).prop_map(Value::Number),
        "[a-z]{0,8}".prop_map(Value::Text),
    ]
}

proptest! {
    #[test]
    fn predictions_stay_inside_unit_interval(
        age in arb_value(),
        browser in arb_value(),
        country in arb_value(),
        device in arb_value(),
    ) {
        let scorer = FtrlScorer::new(mixed_optimizer(), FtrlConfig::default()).unwrap();
        let x = example(&[
            ("age", age),
            ("browser", browser),
            ("country", country),
            ("device", device),
        ]);
        let p = scorer.predict(&x);
        prop_assert!(p > 0.0 && p < 1.0, "p = {}", p);
    }
}
