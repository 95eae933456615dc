//! Undirected view over loaded jump links.
//!
//! [`JumpGraph`] collapses directed rows into an undirected adjacency set and
//! answers structural questions about the network, such as which systems form
//! small closed loops that are cut off from everything else.
use std::collections::{BTreeMap, BTreeSet};

use crate::ids::SystemId;
use crate::model::Jump;

/// Three systems that are pairwise linked. Members are stored in ascending order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle([SystemId; 3]);

impl Triangle {
    /// Builds a triangle from any member order.
    pub fn new(a: SystemId, b: SystemId, c: SystemId) -> Self {
        let mut members = [a, b, c];
        members.sort_unstable();
        Self(members)
    }

    pub fn members(&self) -> [SystemId; 3] {
        self.0
    }

    pub fn contains(&self, id: SystemId) -> bool {
        self.0.contains(&id)
    }
}

/// Undirected adjacency built from jump rows.
///
/// Self-loops are ignored and `A→B` / `B→A` rows describe the same link.
#[derive(Clone, Debug, Default)]
pub struct JumpGraph {
    adjacency: BTreeMap<SystemId, BTreeSet<SystemId>>,
}

impl JumpGraph {
    pub fn from_jumps(jumps: &[Jump]) -> Self {
        let mut adjacency: BTreeMap<SystemId, BTreeSet<SystemId>> = BTreeMap::new();
        for jump in jumps {
            if jump.from == jump.to {
                continue;
            }
            adjacency.entry(jump.from).or_default().insert(jump.to);
            adjacency.entry(jump.to).or_default().insert(jump.from);
        }
        Self { adjacency }
    }

    /// Systems linked to `id`, ascending. Empty for unknown systems.
    pub fn neighbors(&self, id: SystemId) -> impl Iterator<Item = SystemId> + '_ {
        self.adjacency
            .get(&id)
            .into_iter()
            .flat_map(|links| links.iter().copied())
    }

    pub fn degree(&self, id: SystemId) -> usize {
        self.adjacency.get(&id).map_or(0, BTreeSet::len)
    }

    pub fn is_linked(&self, a: SystemId, b: SystemId) -> bool {
        self.adjacency
            .get(&a)
            .is_some_and(|links| links.contains(&b))
    }

    /// Number of systems with at least one link.
    pub fn system_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected links.
    pub fn link_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Every 3-cycle in the network, each reported once.
    pub fn triangles(&self) -> Vec<Triangle> {
        let mut found = Vec::new();
        for (&a, a_links) in &self.adjacency {
            for &b in a_links.range(a..).filter(|&&b| b != a) {
                for c in self.neighbors(b).filter(|&c| c > b) {
                    if a_links.contains(&c) {
                        found.push(Triangle([a, b, c]));
                    }
                }
            }
        }
        found
    }

    /// Triangles whose members link only to each other.
    pub fn isolated_triangles(&self) -> Vec<Triangle> {
        self.triangles()
            .into_iter()
            .filter(|triangle| triangle.0.iter().all(|&id| self.degree(id) == 2))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jumps(pairs: &[(i64, i64)]) -> Vec<Jump> {
        pairs
            .iter()
            .map(|&(a, b)| Jump::new(SystemId(a), SystemId(b)))
            .collect()
    }

    #[test]
    fn bidirectional_rows_collapse_to_one_link() {
        let graph = JumpGraph::from_jumps(&jumps(&[(1, 2), (2, 1), (2, 3)]));
        assert_eq!(graph.link_count(), 2);
        assert_eq!(graph.system_count(), 3);
        assert_eq!(graph.degree(SystemId(2)), 2);
        assert!(graph.is_linked(SystemId(3), SystemId(2)));
        assert_eq!(
            graph.neighbors(SystemId(2)).collect::<Vec<_>>(),
            vec![SystemId(1), SystemId(3)]
        );
    }

    #[test]
    fn self_loops_are_ignored() {
        let graph = JumpGraph::from_jumps(&jumps(&[(4, 4)]));
        assert_eq!(graph.system_count(), 0);
        assert_eq!(graph.degree(SystemId(4)), 0);
    }

    #[test]
    fn each_triangle_found_once() {
        // Two triangles sharing the 2-3 edge.
        let graph = JumpGraph::from_jumps(&jumps(&[
            (1, 2),
            (2, 3),
            (3, 1),
            (2, 4),
            (4, 3),
            (3, 2),
        ]));
        let triangles = graph.triangles();
        assert_eq!(
            triangles,
            vec![
                Triangle::new(SystemId(1), SystemId(2), SystemId(3)),
                Triangle::new(SystemId(2), SystemId(3), SystemId(4)),
            ]
        );
    }

    #[test]
    fn isolated_triangles_exclude_connected_loops() {
        let graph = JumpGraph::from_jumps(&jumps(&[
            // island
            (10, 11),
            (11, 12),
            (12, 10),
            // loop with a tail
            (20, 21),
            (21, 22),
            (22, 20),
            (22, 23),
        ]));
        let isolated = graph.isolated_triangles();
        assert_eq!(isolated.len(), 1);
        assert!(isolated[0].contains(SystemId(11)));
        assert!(!isolated[0].contains(SystemId(21)));
        assert_eq!(graph.triangles().len(), 2);
    }

    #[test]
    fn triangle_members_are_sorted() {
        let triangle = Triangle::new(SystemId(9), SystemId(3), SystemId(5));
        assert_eq!(triangle.members(), [SystemId(3), SystemId(5), SystemId(9)]);
    }
}
