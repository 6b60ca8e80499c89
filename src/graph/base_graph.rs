use fxhash::{FxHashMap, FxHashSet};
use std::hash::Hash;

/// Edge weight. Stored edges always carry a weight greater than zero.
pub type Weight = i32;

/// Anything usable as a vertex label: identity is `Eq` + `Hash`, and query
/// results hand out owned copies, hence `Clone`.
pub trait Label: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> Label for T {}

/// Read-only view of a directed, weighted graph.
///
/// Every query returns an independent copy; mutating the result never
/// affects the graph, and later mutation of the graph never affects a
/// result obtained earlier.
pub trait BaseGraph<L: Label>: Clone {
    /// Snapshot of the vertex set.
    fn vertices(&self) -> FxHashSet<L>;

    /// All `s -> w` such that the edge `(s, target)` exists with weight `w`.
    /// Empty if `target` has no incoming edges or is not a vertex.
    fn sources(&self, target: &L) -> FxHashMap<L, Weight>;

    /// All `t -> w` such that the edge `(source, t)` exists with weight `w`.
    /// Empty if `source` has no outgoing edges or is not a vertex.
    fn targets(&self, source: &L) -> FxHashMap<L, Weight>;

    fn order(&self) -> usize {
        self.vertices().len()
    }

    /// Number of edges.
    fn size(&self) -> usize {
        self.vertices().iter().map(|v| self.targets(v).len()).sum()
    }

    fn has_vertex(&self, u: &L) -> bool {
        self.vertices().contains(u)
    }

    /// Weight of `(source, target)`, `0` if there is no such edge.
    fn weight(&self, source: &L, target: &L) -> Weight {
        self.targets(source).get(target).copied().unwrap_or(0)
    }

    fn has_edge(&self, source: &L, target: &L) -> bool {
        self.weight(source, target) > 0
    }
}
