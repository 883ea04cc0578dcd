//! Partitioning nodes into trees.

use std::collections::{BTreeSet, HashSet};

use itertools::Itertools;
use petgraph::graphmap::{NodeTrait, UnGraphMap};

use crate::forest::{Forest, Node};

/// Constraint on anything a [`TreeFinder`] can partition.
///
/// `attachees` must be symmetric: if `b` is an attachee of `a`, `a` must be one of `b`.
pub trait Attachees {
    /// The node type, with the same constraints as nodes of a [`GraphMap`](petgraph::graphmap::GraphMap).
    type Node: NodeTrait;

    /// Every node to be partitioned.
    fn nodes(&self) -> Vec<Self::Node>;
    /// The nodes directly joined to `node`.
    fn attachees(&self, node: Self::Node) -> Vec<Self::Node>;
}

impl Attachees for Forest {
    type Node = Node;

    fn nodes(&self) -> Vec<Node> {
        Forest::nodes(self).collect_vec()
    }

    fn attachees(&self, node: Node) -> Vec<Node> {
        Forest::attachees(self, node)
    }
}

impl<N, E> Attachees for UnGraphMap<N, E>
where
    N: NodeTrait,
{
    type Node = N;

    fn nodes(&self) -> Vec<N> {
        UnGraphMap::nodes(self).collect_vec()
    }

    fn attachees(&self, node: N) -> Vec<N> {
        self.neighbors(node).collect_vec()
    }
}

/// A maximal set of nodes joined to one another.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tree<N: NodeTrait>(BTreeSet<N>);

impl<N: NodeTrait> Tree<N> {
    /// Number of members.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; a tree holds at least the node it was grown from.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `node` belongs to this tree.
    pub fn contains(&self, node: &N) -> bool {
        self.0.contains(node)
    }

    /// Members in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = N> + '_ {
        self.0.iter().copied()
    }
}

/// Finds the trees of anything implementing [`Attachees`].
/// Use [`Self::trees`] to partition it.
///
/// Each tree is grown from a single node by repeatedly adding the attachees of every member until nothing new is added.
pub struct TreeFinder<'a, A>
where
    A: Attachees,
{
    source: &'a A,
}

impl<'a, A> From<&'a A> for TreeFinder<'a, A>
where
    A: Attachees,
{
    fn from(source: &'a A) -> Self {
        Self { source }
    }
}

impl<'a, A> TreeFinder<'a, A>
where
    A: Attachees,
{
    /// Partition every node into trees. Each node belongs to exactly one returned tree.
    ///
    /// Trees are listed in the order of the node each was first grown from.
    pub fn trees(&self) -> Vec<Tree<A::Node>> {
        let mut trees = Vec::new();
        let mut assigned = HashSet::new();

        for node in self.source.nodes() {
            if assigned.contains(&node) {
                continue;
            }

            let tree = self.home_tree(node);
            log::trace!("grew a tree of {} node(s)", tree.len());
            assigned.extend(tree.nodes());
            trees.push(tree);
        }

        log::debug!("partitioned {} node(s) into {} tree(s)", assigned.len(), trees.len());
        trees
    }

    /// Number of trees, as found by [`Self::trees`].
    pub fn count(&self) -> usize {
        self.trees().len()
    }

    /// The tree containing `node`.
    pub fn home_tree(&self, node: A::Node) -> Tree<A::Node> {
        let mut current = BTreeSet::from([node]);

        loop {
            let expanded = self.expand(&current);
            if expanded.len() == current.len() {
                break;
            }
            current = expanded;
        }

        Tree(current)
    }

    fn expand(&self, tree: &BTreeSet<A::Node>) -> BTreeSet<A::Node> {
        let mut expanded = tree.clone();
        for node in tree {
            expanded.extend(self.source.attachees(*node));
        }

        expanded
    }
}
