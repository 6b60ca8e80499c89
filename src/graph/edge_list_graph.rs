use crate::error::{GraphError, Result};
use crate::graph::base_graph::{BaseGraph, Label, Weight};
use crate::graph::edge::Edge;
use crate::graph::mutable_graph::MutableGraph;
use fxhash::{FxHashMap, FxHashSet};
use std::fmt;
use std::fmt::{Display, Formatter};

#[cfg(feature = "log")]
use log::trace;

/// A vertex set plus a flat list of edges.
///
/// Invariants: both endpoints of every edge are in `vertices`, and no two
/// edges share the same `(source, target)` pair.
#[derive(Clone, Debug)]
pub struct EdgeListGraph<L: Label> {
    vertices: FxHashSet<L>,
    edges: Vec<Edge<L>>,
}

impl<L: Label> EdgeListGraph<L> {
    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge<L>] {
        &self.edges
    }

    fn position(&self, source: &L, target: &L) -> Option<usize> {
        self.edges.iter().position(|e| e.connects(source, target))
    }

    #[cfg(debug_assertions)]
    fn check_rep(&self) {
        let mut pairs = FxHashSet::default();
        for edge in &self.edges {
            assert!(self.vertices.contains(edge.source()));
            assert!(self.vertices.contains(edge.target()));
            assert!(edge.weight() > 0);
            assert!(pairs.insert((edge.source(), edge.target())));
        }
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    fn check_rep(&self) {}
}

impl<L: Label> Default for EdgeListGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> MutableGraph<L> for EdgeListGraph<L> {
    fn add(&mut self, vertex: L) -> bool {
        let added = self.vertices.insert(vertex);
        #[cfg(feature = "log")]
        trace!("edge list: add vertex, new: {}", added);
        self.check_rep();
        added
    }

    fn set(&mut self, source: L, target: L, weight: Weight) -> Result<Weight> {
        if weight < 0 {
            return Err(GraphError::NegativeWeight(weight));
        }
        let new_edge = if weight > 0 {
            Some(Edge::new(source.clone(), target.clone(), weight)?)
        } else {
            None
        };

        let previous = match self.position(&source, &target) {
            Some(idx) => self.edges.remove(idx).weight(),
            None => 0,
        };
        if let Some(edge) = new_edge {
            self.vertices.insert(source);
            self.vertices.insert(target);
            self.edges.push(edge);
        }
        #[cfg(feature = "log")]
        trace!("edge list: edge set {} -> {}", previous, weight);
        self.check_rep();
        Ok(previous)
    }

    fn remove(&mut self, vertex: &L) -> bool {
        if !self.vertices.remove(vertex) {
            return false;
        }
        #[cfg(feature = "log")]
        let before = self.edges.len();
        self.edges.retain(|e| !e.is_incident_to(vertex));
        #[cfg(feature = "log")]
        trace!(
            "edge list: vertex removed with {} incident edges",
            before - self.edges.len()
        );
        self.check_rep();
        true
    }

    fn new() -> Self {
        EdgeListGraph {
            vertices: FxHashSet::default(),
            edges: Vec::new(),
        }
    }

    fn with_capacity(capacity: usize) -> Self {
        EdgeListGraph {
            vertices: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
            edges: Vec::with_capacity(capacity),
        }
    }
}

impl<L: Label> BaseGraph<L> for EdgeListGraph<L> {
    fn vertices(&self) -> FxHashSet<L> {
        self.vertices.clone()
    }

    fn sources(&self, target: &L) -> FxHashMap<L, Weight> {
        self.edges
            .iter()
            .filter(|e| e.target() == target)
            .map(|e| (e.source().clone(), e.weight()))
            .collect()
    }

    fn targets(&self, source: &L) -> FxHashMap<L, Weight> {
        self.edges
            .iter()
            .filter(|e| e.source() == source)
            .map(|e| (e.target().clone(), e.weight()))
            .collect()
    }

    fn order(&self) -> usize {
        self.vertices.len()
    }

    fn size(&self) -> usize {
        self.edges.len()
    }

    fn has_vertex(&self, u: &L) -> bool {
        self.vertices.contains(u)
    }

    fn weight(&self, source: &L, target: &L) -> Weight {
        self.position(source, target)
            .map_or(0, |idx| self.edges[idx].weight())
    }
}

/// One line per vertex, sorted: `a -> b : 1, c : 2`, or `a ->` without edges.
impl<L: Label + Display + Ord> Display for EdgeListGraph<L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut vertices: Vec<_> = self.vertices.iter().collect();
        vertices.sort_unstable();
        for v in vertices {
            let mut out: Vec<_> = self.edges.iter().filter(|e| e.source() == v).collect();
            out.sort_unstable_by(|a, b| a.target().cmp(b.target()));
            write!(f, "{} ->", v)?;
            for (i, edge) in out.into_iter().enumerate() {
                let sep = if i == 0 { " " } else { ", " };
                write!(f, "{}{} : {}", sep, edge.target(), edge.weight())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
