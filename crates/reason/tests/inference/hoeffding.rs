//! Hoeffding tree walker against fixtures and invariants.

use rstest::rstest;
use serde::Deserialize;

use reason::inference::hoeffding::TreeWalker;
use reason::inference::{ClassificationStats, RegressionStats};
use reason::model::{Feature, Model};
use reason::repr::hoeffding::{Node, NodeRef, Tree, TreeValidationError};
use reason::testing::{example, mixed_tree};
use reason::Parallelism;

use super::{load_fixture, JsonExample};

#[derive(Debug, Deserialize)]
struct TreeFixture {
    tree: Tree,
    cases: Vec<TreeCase>,
}

#[derive(Debug, Deserialize)]
struct TreeCase {
    name: String,
    example: JsonExample,
    node: NodeRef,
    stats: Vec<f64>,
}

#[rstest]
#[case("stump")]
#[case("mixed")]
fn walker_matches_fixture(#[case] name: &str) {
    let fixture: TreeFixture = load_fixture("hoeffding", name);
    fixture.tree.validate().expect("fixture tree is valid");

    for case in &fixture.cases {
        assert_eq!(
            fixture.tree.traverse(&case.example),
            Some(case.node),
            "{name}/{}",
            case.name
        );
        assert_eq!(
            fixture.tree.lookup(&case.example),
            case.stats.as_slice(),
            "{name}/{}",
            case.name
        );
    }
}

#[test]
fn lookup_is_idempotent() {
    let fixture: TreeFixture = load_fixture("hoeffding", "mixed");
    for case in &fixture.cases {
        let first = fixture.tree.lookup(&case.example).to_vec();
        assert_eq!(fixture.tree.lookup(&case.example), first.as_slice());
    }
}

#[test]
fn batch_matches_fixture() {
    let fixture: TreeFixture = load_fixture("hoeffding", "mixed");
    let examples: Vec<_> = fixture.cases.iter().map(|c| c.example.clone()).collect();
    let expected: Vec<_> = fixture.cases.iter().map(|c| c.stats.clone()).collect();
    assert_eq!(fixture.tree.lookup_batch(&examples, Parallelism::Sequential), expected);
    assert_eq!(fixture.tree.lookup_batch(&examples, Parallelism::Parallel), expected);
}

#[test]
fn tree_survives_json_round_trip() {
    let tree = mixed_tree();
    let json = serde_json::to_string(&tree).unwrap();
    let restored: Tree = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, tree);
    assert!(restored.validate().is_ok());
}

#[test]
fn classification_result_from_leaf() {
    let tree = mixed_tree();
    let stats = tree.lookup(&example(&[("age", 45.0.into()), ("device", 7.0.into())]));
    let result = ClassificationStats::from_stats(stats);
    assert_eq!(result.category(), Some(1));
    assert_eq!(result.prob(1), 1.0);

    let label = tree.model.as_ref().and_then(|m| m.target_feature()).unwrap();
    assert_eq!(label.label_of(1), "yes");
}

#[test]
fn regression_result_from_leaf() {
    // Leaves hold [weight, sum, sum_of_squares].
    let model = Model::new("y", [Feature::numerical("x"), Feature::numerical("y")]);
    let tree = Tree::new(
        model,
        vec![
            Node::numerical_split("x", 0.0, [2, 3], [4.0, 10.0, 30.0]),
            Node::leaf([2.0, 3.0, 5.0]),
            Node::leaf([2.0, 7.0, 25.0]),
        ],
        1,
    );

    let left = RegressionStats::from_stats(tree.lookup(&example(&[("x", (-1.0).into())])));
    assert_eq!(left.mean(), 1.5);
    assert_eq!(left.variance(), 0.5);

    let root = RegressionStats::from_stats(tree.lookup(&example(&[])));
    assert_eq!(root.mean(), 2.5);
}

#[test]
fn validate_rejects_backward_reference() {
    let mut tree = mixed_tree();
    tree.nodes[2] = Node::numerical_split("age", 1.0, [1, 7], [0.0]);
    assert_eq!(
        tree.validate(),
        Err(TreeValidationError::BackwardReference { node: 3, child: 1 })
    );
}
