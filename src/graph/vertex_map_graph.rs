use crate::error::{GraphError, Result};
use crate::graph::base_graph::{BaseGraph, Label, Weight};
use crate::graph::mutable_graph::MutableGraph;
use crate::graph::vertex::Vertex;
use fxhash::{FxHashMap, FxHashSet};
use std::fmt;
use std::fmt::{Display, Formatter};

#[cfg(feature = "log")]
use log::trace;

/// A list of vertex records, each owning its outgoing edges.
///
/// Incoming edges are not stored; `sources` scans every record.
/// Invariants: labels are unique, and every key of every outgoing map is the
/// label of some record.
#[derive(Clone, Debug)]
pub struct VertexMapGraph<L: Label> {
    vertices: Vec<Vertex<L>>,
}

impl<L: Label> VertexMapGraph<L> {
    /// Vertex records in insertion order.
    pub fn records(&self) -> &[Vertex<L>] {
        &self.vertices
    }

    fn position(&self, label: &L) -> Option<usize> {
        self.vertices.iter().position(|v| v.label() == label)
    }

    fn find(&self, label: &L) -> Option<&Vertex<L>> {
        self.vertices.iter().find(|v| v.label() == label)
    }

    fn find_or_create(&mut self, label: L) -> usize {
        match self.position(&label) {
            Some(idx) => idx,
            None => {
                self.vertices.push(Vertex::new(label));
                self.vertices.len() - 1
            }
        }
    }

    #[cfg(debug_assertions)]
    fn check_rep(&self) {
        let labels: FxHashSet<&L> = self.vertices.iter().map(|v| v.label()).collect();
        assert_eq!(labels.len(), self.vertices.len());
        for v in &self.vertices {
            for (target, weight) in v.out_edges_ref() {
                assert!(labels.contains(target));
                assert!(*weight > 0);
            }
        }
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    fn check_rep(&self) {}
}

impl<L: Label> Default for VertexMapGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> MutableGraph<L> for VertexMapGraph<L> {
    fn add(&mut self, vertex: L) -> bool {
        if self.position(&vertex).is_some() {
            return false;
        }
        self.vertices.push(Vertex::new(vertex));
        #[cfg(feature = "log")]
        trace!("vertex map: vertex added, order {}", self.vertices.len());
        self.check_rep();
        true
    }

    fn set(&mut self, source: L, target: L, weight: Weight) -> Result<Weight> {
        if weight < 0 {
            return Err(GraphError::NegativeWeight(weight));
        }
        let previous = if weight == 0 {
            match self.position(&source) {
                Some(s) => self.vertices[s].remove_out_edge(&target),
                None => 0,
            }
        } else {
            let s = self.find_or_create(source);
            self.find_or_create(target.clone());
            self.vertices[s].set_out_edge(target, weight)?
        };
        #[cfg(feature = "log")]
        trace!("vertex map: edge set {} -> {}", previous, weight);
        self.check_rep();
        Ok(previous)
    }

    fn remove(&mut self, vertex: &L) -> bool {
        let idx = match self.position(vertex) {
            Some(idx) => idx,
            None => return false,
        };
        // Outgoing edges leave with the record, incoming ones are swept below.
        self.vertices.remove(idx);
        for v in self.vertices.iter_mut() {
            v.remove_out_edge(vertex);
        }
        #[cfg(feature = "log")]
        trace!("vertex map: vertex removed, order {}", self.vertices.len());
        self.check_rep();
        true
    }

    fn new() -> Self {
        VertexMapGraph {
            vertices: Vec::new(),
        }
    }

    fn with_capacity(capacity: usize) -> Self {
        VertexMapGraph {
            vertices: Vec::with_capacity(capacity),
        }
    }
}

impl<L: Label> BaseGraph<L> for VertexMapGraph<L> {
    fn vertices(&self) -> FxHashSet<L> {
        self.vertices.iter().map(|v| v.label().clone()).collect()
    }

    fn sources(&self, target: &L) -> FxHashMap<L, Weight> {
        self.vertices
            .iter()
            .filter(|v| v.has_out_edge(target))
            .map(|v| (v.label().clone(), v.weight_to(target)))
            .collect()
    }

    fn targets(&self, source: &L) -> FxHashMap<L, Weight> {
        self.find(source)
            .map(|v| v.out_edges())
            .unwrap_or_default()
    }

    fn order(&self) -> usize {
        self.vertices.len()
    }

    fn size(&self) -> usize {
        self.vertices.iter().map(|v| v.out_degree()).sum()
    }

    fn has_vertex(&self, u: &L) -> bool {
        self.position(u).is_some()
    }

    fn weight(&self, source: &L, target: &L) -> Weight {
        self.find(source).map_or(0, |v| v.weight_to(target))
    }
}

/// One line per vertex record, sorted by label.
impl<L: Label + Display + Ord> Display for VertexMapGraph<L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut records: Vec<_> = self.vertices.iter().collect();
        records.sort_unstable_by(|a, b| a.label().cmp(b.label()));
        for v in records {
            writeln!(f, "{}", v)?;
        }
        Ok(())
    }
}
