//! Property-based invariant tests for forests and their trees.
//!
//! 1. The tree count equals the number of connected components petgraph finds in the same graph.
//! 2. Attachment is symmetric.
//! 3. Trees partition the nodes.
//! 4. Partitioning is idempotent and independent of node enumeration order.
//! 5. Grids of letters and spaces within the limits raise no problems.
//! 6. A line is reported for invalid characters exactly when it holds one.

use alphaforest::errors::Problem;
use alphaforest::{ForestBuilder, TreeFinder};
use petgraph::algo::connected_components;
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

const VALID: &str = "ACEFGHIJKLMNPQRSTUVWXYZ ";

fn line_strategy(alphabet: &'static str, max_width: usize) -> impl Strategy<Value = String> {
    let characters = alphabet.chars().collect::<Vec<_>>();
    prop::collection::vec(prop::sample::select(characters), 0..=max_width)
        .prop_map(|line| line.into_iter().collect::<String>())
}

fn grid_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(line_strategy(VALID, 10), 0..=10)
}

fn dense_grid_strategy() -> impl Strategy<Value = Vec<String>> {
    // mostly the four-port letters, so trees get large
    prop::collection::vec(line_strategy("HIKXHIKXAVZ ", 8), 0..=8)
}

fn messy_grid_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(line_strategy("HAVBDOhx1 ", 12), 0..=6)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Tree count matches petgraph
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn count_matches_connected_components(lines in grid_strategy()) {
        let forest = ForestBuilder::from_lines(&lines).build();
        let components = connected_components(&forest.graph().into_graph::<u32>());
        prop_assert_eq!(forest.trees().len(), components, "grid: {:?}", lines);
    }

    #[test]
    fn dense_count_matches_connected_components(lines in dense_grid_strategy()) {
        let forest = ForestBuilder::from_lines(&lines).build();
        let components = connected_components(&forest.graph().into_graph::<u32>());
        prop_assert_eq!(forest.trees().len(), components, "grid: {:?}", lines);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Attachment is symmetric
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn attachees_symmetric(lines in dense_grid_strategy()) {
        let forest = ForestBuilder::from_lines(&lines).build();
        for node in forest.nodes() {
            for other in forest.attachees(node) {
                prop_assert!(
                    forest.attachees(other).contains(&node),
                    "{:?} attaches to {:?} but not the reverse", node, other
                );
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Trees partition the nodes
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn trees_partition_nodes(lines in grid_strategy()) {
        let forest = ForestBuilder::from_lines(&lines).build();
        let trees = forest.trees();

        prop_assert_eq!(trees.iter().map(|tree| tree.len()).sum::<usize>(), forest.len());
        for node in forest.nodes() {
            prop_assert_eq!(trees.iter().filter(|tree| tree.contains(&node)).count(), 1);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Idempotent and order independent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn partition_idempotent(lines in dense_grid_strategy()) {
        let forest = ForestBuilder::from_lines(&lines).build();
        prop_assert_eq!(forest.trees(), forest.trees());
    }

    #[test]
    fn partition_order_independent(lines in dense_grid_strategy()) {
        let forest = ForestBuilder::from_lines(&lines).build();
        let graph = forest.graph();

        // the graph enumerates nodes in its own order
        let mut from_forest = forest.trees();
        let mut from_graph = TreeFinder::from(&graph).trees();
        from_forest.sort_by_key(|tree| tree.nodes().next());
        from_graph.sort_by_key(|tree| tree.nodes().next());
        prop_assert_eq!(from_forest, from_graph);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5 & 6. Problems
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn valid_grids_have_no_problems(lines in grid_strategy()) {
        let report = alphaforest::survey(&lines);
        prop_assert!(!report.is_undefined(), "unexpected problems: {}", report.problems);
    }

    #[test]
    fn invalid_characters_reported_per_line(lines in messy_grid_strategy()) {
        let builder = ForestBuilder::from_lines(&lines);
        let flagged = builder.problems()
            .problems()
            .iter()
            .filter_map(|problem| match problem {
                Problem::InvalidCharacters { line, .. } => Some(*line),
                _ => None,
            })
            .collect::<Vec<_>>();

        let expected = lines.iter()
            .enumerate()
            .filter(|(_, line)| line.chars().any(|c| "BDOhx1".contains(c)))
            .map(|(index, _)| index + 1)
            .collect::<Vec<_>>();
        prop_assert_eq!(flagged, expected);
    }
}
