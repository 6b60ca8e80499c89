use crate::error::{GraphError, Result};
use crate::graph::base_graph::{BaseGraph, Label, Weight};
use crate::graph::mutable_graph::MutableGraph;
use fxhash::{FxHashMap, FxHashSet};
use std::fmt;
use std::fmt::{Display, Formatter};

#[cfg(feature = "log")]
use log::trace;

/// Adjacency map from each vertex to its outgoing `target -> weight` map.
#[derive(Clone, Debug)]
pub struct HashMapGraph<L: Label> {
    data: FxHashMap<L, FxHashMap<L, Weight>>,
}

impl<L: Label> HashMapGraph<L> {
    /// Borrowed outgoing edges of `u`, if it is a vertex.
    pub fn out_edges(&self, u: &L) -> Option<&FxHashMap<L, Weight>> {
        self.data.get(u)
    }

    pub fn add_vertex_with_capacity(&mut self, u: L, capacity: usize) -> bool {
        if self.data.contains_key(&u) {
            return false;
        }
        self.data.insert(
            u,
            FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        );
        self.check_rep();
        true
    }

    #[cfg(debug_assertions)]
    fn check_rep(&self) {
        for out in self.data.values() {
            for (target, weight) in out {
                assert!(self.data.contains_key(target));
                assert!(*weight > 0);
            }
        }
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    fn check_rep(&self) {}
}

impl<L: Label> Default for HashMapGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> MutableGraph<L> for HashMapGraph<L> {
    fn add(&mut self, vertex: L) -> bool {
        let mut added = false;
        self.data.entry(vertex).or_insert_with(|| {
            added = true;
            FxHashMap::default()
        });
        #[cfg(feature = "log")]
        trace!("hash map: add vertex, new: {}", added);
        self.check_rep();
        added
    }

    fn set(&mut self, source: L, target: L, weight: Weight) -> Result<Weight> {
        if weight < 0 {
            return Err(GraphError::NegativeWeight(weight));
        }
        let previous = if weight == 0 {
            self.data
                .get_mut(&source)
                .and_then(|out| out.remove(&target))
                .unwrap_or(0)
        } else {
            self.data
                .entry(target.clone())
                .or_insert_with(FxHashMap::default);
            self.data
                .entry(source)
                .or_insert_with(FxHashMap::default)
                .insert(target, weight)
                .unwrap_or(0)
        };
        #[cfg(feature = "log")]
        trace!("hash map: edge set {} -> {}", previous, weight);
        self.check_rep();
        Ok(previous)
    }

    fn remove(&mut self, vertex: &L) -> bool {
        if self.data.remove(vertex).is_none() {
            return false;
        }
        for out in self.data.values_mut() {
            out.remove(vertex);
        }
        #[cfg(feature = "log")]
        trace!("hash map: vertex removed, order {}", self.data.len());
        self.check_rep();
        true
    }

    fn new() -> Self {
        HashMapGraph {
            data: FxHashMap::default(),
        }
    }

    fn with_capacity(capacity: usize) -> Self {
        HashMapGraph {
            data: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }
}

impl<L: Label> BaseGraph<L> for HashMapGraph<L> {
    fn vertices(&self) -> FxHashSet<L> {
        self.data.keys().cloned().collect()
    }

    fn sources(&self, target: &L) -> FxHashMap<L, Weight> {
        self.data
            .iter()
            .filter_map(|(s, out)| out.get(target).map(|w| (s.clone(), *w)))
            .collect()
    }

    fn targets(&self, source: &L) -> FxHashMap<L, Weight> {
        self.data.get(source).cloned().unwrap_or_default()
    }

    fn order(&self) -> usize {
        self.data.len()
    }

    fn size(&self) -> usize {
        self.data.values().map(|out| out.len()).sum()
    }

    fn has_vertex(&self, u: &L) -> bool {
        self.data.contains_key(u)
    }

    fn weight(&self, source: &L, target: &L) -> Weight {
        self.data
            .get(source)
            .and_then(|out| out.get(target))
            .copied()
            .unwrap_or(0)
    }
}

/// One line per vertex, sorted: `a: {b: 1, c: 2}`.
impl<L: Label + Display + Ord> Display for HashMapGraph<L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.data.keys().collect();
        keys.sort_unstable();
        for u in keys {
            let mut out: Vec<_> = self.data[u].iter().collect();
            out.sort_unstable_by(|a, b| a.0.cmp(b.0));
            write!(f, "{}: {{", u)?;
            for (i, (v, w)) in out.into_iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}: {}", v, w)?;
            }
            writeln!(f, "}}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::base_graph::BaseGraph;
    use crate::graph::hash_map_graph::HashMapGraph;
    use crate::graph::mutable_graph::MutableGraph;

    graph_contract_tests!(crate::graph::HashMapGraph<&'static str>);

    #[test]
    fn test_order() {
        let mut graph = HashMapGraph::new();
        assert_eq!(graph.order(), 0);

        graph.add(0);
        graph.add(0);
        assert_eq!(graph.order(), 1);
        graph.remove(&0);
        assert_eq!(graph.order(), 0);

        assert!(graph.add_vertex_with_capacity(0, 4));
        assert!(!graph.add_vertex_with_capacity(0, 4));
        assert_eq!(graph.order(), 1);
    }

    #[test]
    fn test_size() {
        let mut graph = HashMapGraph::new();
        graph.set(0, 1, 1).unwrap();
        assert_eq!(graph.size(), 1);
        assert_eq!(graph.order(), 2);

        graph.set(0, 1, 2).unwrap();
        assert_eq!(graph.size(), 1);

        graph.set(1, 0, 2).unwrap();
        assert_eq!(graph.size(), 2);

        graph.set(0, 1, 0).unwrap();
        assert_eq!(graph.size(), 1);
        assert_eq!(graph.order(), 2);
    }

    #[test]
    fn out_edges_borrows() {
        let mut graph = HashMapGraph::new();
        graph.set("a", "b", 3).unwrap();
        assert_eq!(graph.out_edges(&"a").map(|out| out.len()), Some(1));
        assert_eq!(graph.out_edges(&"b").map(|out| out.len()), Some(0));
        assert!(graph.out_edges(&"c").is_none());
    }

    #[test]
    fn display() {
        let mut graph = HashMapGraph::new();
        assert_eq!(graph.to_string(), "");

        graph.set("b", "a", 5).unwrap();
        graph.set("a", "c", 2).unwrap();
        graph.set("a", "b", 1).unwrap();
        assert_eq!(graph.to_string(), "a: {b: 1, c: 2}\nb: {a: 5}\nc: {}\n");
    }
}
