use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ndarray::Array1;
use petgraph::graphmap::UnGraphMap;
use unordered_pair::UnorderedPair;

use crate::letter::Letter;
use crate::location::Location;
use crate::port::Port;
use crate::trees::{Tree, TreeFinder};

/// A letter planted at a location.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Ord, PartialOrd)]
pub struct Node {
    /// Where the letter stands; no two nodes of a forest share one.
    pub location: Location,
    /// The letter, which fixes the node's ports.
    pub letter: Letter,
}

/// A connection between two nodes in a [`Forest::graph`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Link {
    /// The port leaving the upper endpoint, always one of [`Port::FORWARD_VARIANTS`].
    pub port: Port,
}

/// Every node read from one puzzle, with an index from location to letter.
///
/// [`Forest`]s should be built using a [`ForestBuilder`](crate::builder::ForestBuilder).
/// They are never modified once built.
#[derive(Clone, Debug)]
pub struct Forest {
    // one row per line read, each as long as its line
    pub(crate) rows: Vec<Array1<Option<Letter>>>,
    // longest line read, in characters
    pub(crate) width: usize,
    pub(crate) nodes: Vec<Node>,
}

impl Forest {
    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no letter was planted at all.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes, in the order they were read.
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.nodes.iter().copied()
    }

    /// The node at `location`, if one was planted there.
    pub fn node_at(&self, location: Location) -> Option<Node> {
        let (row, column) = location.as_index();
        self.rows.get(row)
            .and_then(|letters| letters.get(column))
            .copied()
            .flatten()
            .map(|letter| Node { location, letter })
    }

    fn attachments(&self, node: Node) -> impl Iterator<Item = (Port, Node)> + '_ {
        node.letter.ports().iter().filter_map(move |port| {
            self.node_at(port.attempt_from(node.location))
                // the neighbor has to face back toward us
                .filter(|other| other.letter.exposes(port.invert()))
                .map(|other| (*port, other))
        })
    }

    /// The nodes `node` is joined to: diagonal neighbors that expose the port facing `node` through a port `node` exposes.
    ///
    /// The relation is symmetric; if `b` is among the attachees of `a`, then `a` is among those of `b`.
    pub fn attachees(&self, node: Node) -> Vec<Node> {
        self.attachments(node)
            .map(|(_, other)| other)
            .collect_vec()
    }

    /// Every connection in the forest, once each.
    pub fn links(&self) -> HashSet<UnorderedPair<Location>> {
        self.nodes()
            .flat_map(|node| self.attachees(node)
                .into_iter()
                .map(move |other| UnorderedPair::from((node.location, other.location))))
            .collect()
    }

    /// The forest as an undirected graph over its nodes, isolated nodes included.
    pub fn graph(&self) -> UnGraphMap<Node, Link> {
        let mut graph = UnGraphMap::with_capacity(self.nodes.len(), self.nodes.len() * 2);

        for node in self.nodes() {
            graph.add_node(node);
        }

        for node in self.nodes() {
            // add each link from its upper end only
            for (port, other) in self.attachments(node).filter(|(port, _)| Port::FORWARD_VARIANTS.contains(port)) {
                graph.add_edge(node, other, Link { port });
            }
        }

        graph
    }

    /// Partition the forest into its trees. See [`TreeFinder`].
    pub fn trees(&self) -> Vec<Tree<Node>> {
        TreeFinder::from(self).trees()
    }
}

impl Display for Forest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut out = String::with_capacity(self.rows.len() * (self.width + 1));

        for row in &self.rows {
            for letter in row {
                out.push(letter.map_or('.', Letter::as_char));
            }
            // pad short lines out to the widest one
            out.extend(std::iter::repeat('.').take(self.width - row.len()));
            out.push('\n');
        }

        write!(f, "{out}")
    }
}
