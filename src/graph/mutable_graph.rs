use crate::error::Result;
use crate::graph::base_graph::{BaseGraph, Label, Weight};

pub trait MutableGraph<L: Label>: BaseGraph<L> {
    /// Adds `vertex` if absent. Returns `true` if it was newly added.
    fn add(&mut self, vertex: L) -> bool;

    /// Creates, overwrites or removes the edge `(source, target)`.
    ///
    /// A positive `weight` adds both endpoints if needed and stores the edge.
    /// A weight of `0` removes the edge if present and never adds vertices.
    /// A negative weight fails with [`GraphError::NegativeWeight`] and leaves
    /// the graph unchanged.
    ///
    /// Returns the weight of the edge before the call, `0` if there was none.
    ///
    /// [`GraphError::NegativeWeight`]: crate::error::GraphError::NegativeWeight
    fn set(&mut self, source: L, target: L, weight: Weight) -> Result<Weight>;

    /// Removes `vertex` together with every edge it is an endpoint of.
    /// Returns `true` if the vertex existed.
    fn remove(&mut self, vertex: &L) -> bool;

    fn new() -> Self;

    fn with_capacity(capacity: usize) -> Self;

    /// Copies vertices and edges of any other representation.
    fn from_graph<G: BaseGraph<L>>(graph: &G) -> Result<Self>
    where
        Self: Sized,
    {
        let vertices = graph.vertices();
        let mut result = Self::with_capacity(vertices.len());
        for v in vertices {
            for (t, w) in graph.targets(&v) {
                result.set(v.clone(), t, w)?;
            }
            result.add(v);
        }
        Ok(result)
    }
}
