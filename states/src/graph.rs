//! Dependency graph between states and computes.
//!
//! An edge `from -> to` means `to` reads `from`, so `to` must be recomputed after `from`
//! changes. Nodes are kept in insertion order, which makes [`Graph::topology_sort`]
//! deterministic for a given registration order.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt::{Debug, Formatter};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopologyError<T>
where
    T: Debug,
{
    #[error("Cycle detected in dependency graph: {0:?}")]
    CycleDetected(DepRoute<T>),
    #[error("Duplicate edge detected in dependency graph: {0:?}")]
    DuplicateEdge(DepRoute<T>),
}

/// A path through the graph, first node to last.
pub struct DepRoute<T> {
    route: Vec<T>,
}

impl<T> DepRoute<T> {
    pub fn nodes(&self) -> &[T] {
        &self.route
    }
}

impl<T: Debug> Debug for DepRoute<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for node in &self.route {
            if !first {
                f.write_str(" -> ")?;
            }
            write!(f, "{node:?}")?;
            first = false;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    /// Every node, in the order it was first seen.
    nodes: Vec<Node>,
    dependents: BTreeMap<Node, Vec<Node>>,
    duplicates: Vec<(Node, Node)>,
    /// Memoised [`Graph::connected`] results, dropped whenever an edge is added.
    reach_cache: BTreeMap<Node, Vec<Node>>,
}

impl<Node> Default for Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<Node> Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            dependents: BTreeMap::new(),
            duplicates: Vec::new(),
            reach_cache: BTreeMap::new(),
        }
    }

    fn touch(&mut self, node: Node) {
        if !self.dependents.contains_key(&node) {
            self.dependents.insert(node, Vec::new());
            self.nodes.push(node);
        }
    }

    /// Records that `to` depends on `from`. A repeated edge is kept out of the graph and
    /// reported by the next [`Graph::topology_sort`].
    pub fn route_to(&mut self, from: Node, to: Node) {
        self.touch(from);
        self.touch(to);
        self.reach_cache.clear();

        let out = self.dependents.entry(from).or_default();
        if out.contains(&to) {
            self.duplicates.push((from, to));
        } else {
            out.push(to);
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn direct(&self, node: Node) -> &[Node] {
        self.dependents.get(&node).map_or(&[], Vec::as_slice)
    }

    /// Kahn's algorithm over every node seen so far, dependencies first.
    pub fn topology_sort(&self) -> Result<Vec<Node>, TopologyError<Node>> {
        if let Some(&(from, to)) = self.duplicates.first() {
            return Err(TopologyError::DuplicateEdge(DepRoute {
                route: vec![from, to],
            }));
        }

        let mut in_degree: BTreeMap<Node, usize> = self.nodes.iter().map(|&n| (n, 0)).collect();
        for targets in self.dependents.values() {
            for target in targets {
                *in_degree.entry(*target).or_default() += 1;
            }
        }

        let mut ready: VecDeque<Node> = self
            .nodes
            .iter()
            .copied()
            .filter(|node| in_degree.get(node) == Some(&0))
            .collect();
        let mut order = Vec::with_capacity(self.nodes.len());

        while let Some(node) = ready.pop_front() {
            order.push(node);
            for &next in self.direct(node) {
                if let Some(degree) = in_degree.get_mut(&next) {
                    *degree -= 1;
                    if *degree == 0 {
                        ready.push_back(next);
                    }
                }
            }
        }

        if order.len() == self.nodes.len() {
            return Ok(order);
        }

        let placed: BTreeSet<Node> = order.into_iter().collect();
        let blocked: Vec<Node> = self
            .nodes
            .iter()
            .copied()
            .filter(|node| !placed.contains(node))
            .collect();
        Err(TopologyError::CycleDetected(DepRoute {
            route: self.find_cycle(&blocked),
        }))
    }

    /// A closed walk among `blocked` (every node left with a non-zero in-degree).
    ///
    /// Each blocked node has a blocked predecessor, so walking predecessors must revisit a node.
    fn find_cycle(&self, blocked: &[Node]) -> Vec<Node> {
        let Some(&start) = blocked.first() else {
            return Vec::new();
        };
        let predecessor = |node: Node| {
            blocked
                .iter()
                .copied()
                .find(|&candidate| self.direct(candidate).contains(&node))
        };

        let mut walk = vec![start];
        let mut current = start;
        while let Some(prev) = predecessor(current) {
            if let Some(pos) = walk.iter().position(|&seen| seen == prev) {
                let mut cycle = vec![prev];
                cycle.extend(walk[pos + 1..].iter().rev().copied());
                cycle.push(prev);
                return cycle;
            }
            walk.push(prev);
            current = prev;
        }
        walk
    }

    /// Every node that transitively depends on `node`, in discovery order.
    pub fn connected(&mut self, node: Node) -> Vec<Node> {
        if let Some(cached) = self.reach_cache.get(&node) {
            return cached.clone();
        }

        let mut seen = BTreeSet::new();
        let mut found = Vec::new();
        let mut queue = VecDeque::from([node]);
        while let Some(current) = queue.pop_front() {
            for &next in self.direct(current) {
                if seen.insert(next) {
                    found.push(next);
                    queue.push_back(next);
                }
            }
        }

        self.reach_cache.insert(node, found.clone());
        found
    }
}
