use crate::error::{GraphError, Result};
use crate::graph::base_graph::{Label, Weight};
use fxhash::FxHashMap;
use std::fmt;
use std::fmt::{Display, Formatter};

/// A vertex label together with its outgoing edges.
///
/// The outgoing map never holds a weight of zero or less.
#[derive(Clone, Debug)]
pub struct Vertex<L: Label> {
    label: L,
    out_edges: FxHashMap<L, Weight>,
}

impl<L: Label> Vertex<L> {
    pub fn new(label: L) -> Self {
        Self {
            label,
            out_edges: FxHashMap::default(),
        }
    }

    pub fn label(&self) -> &L {
        &self.label
    }

    /// Copy of the outgoing edges.
    pub fn out_edges(&self) -> FxHashMap<L, Weight> {
        self.out_edges.clone()
    }

    pub fn out_degree(&self) -> usize {
        self.out_edges.len()
    }

    pub fn has_out_edge(&self, target: &L) -> bool {
        self.out_edges.contains_key(target)
    }

    pub fn weight_to(&self, target: &L) -> Weight {
        self.out_edges.get(target).copied().unwrap_or(0)
    }

    /// Inserts or overwrites the edge to `target`, returning the previous weight.
    pub fn set_out_edge(&mut self, target: L, weight: Weight) -> Result<Weight> {
        if weight <= 0 {
            return Err(GraphError::NonPositiveWeight(weight));
        }
        Ok(self.out_edges.insert(target, weight).unwrap_or(0))
    }

    pub fn remove_out_edge(&mut self, target: &L) -> Weight {
        self.out_edges.remove(target).unwrap_or(0)
    }

    #[cfg(debug_assertions)]
    pub(crate) fn out_edges_ref(&self) -> &FxHashMap<L, Weight> {
        &self.out_edges
    }
}

impl<L: Label + Display + Ord> Display for Vertex<L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.out_edges.is_empty() {
            return write!(f, "{} has no outgoing edges.", self.label);
        }
        let mut edges: Vec<_> = self.out_edges.iter().collect();
        edges.sort_unstable_by(|a, b| a.0.cmp(b.0));
        write!(f, "{} -> ", self.label)?;
        for (i, (target, weight)) in edges.into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} ({})", target, weight)?;
        }
        Ok(())
    }
}
