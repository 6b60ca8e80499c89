//! A mutable, directed, weighted graph over arbitrary hashable labels.
//!
//! [`graph::BaseGraph`] and [`graph::MutableGraph`] form the contract; the
//! representations [`graph::EdgeListGraph`], [`graph::VertexMapGraph`] and
//! [`graph::HashMapGraph`] implement it with identical observable behaviour.
//!
//! ```
//! use weighted_digraph::graph::{self, BaseGraph, MutableGraph};
//!
//! let mut g = graph::empty();
//! assert_eq!(g.set("a", "b", 5), Ok(0));
//! assert_eq!(g.set("a", "b", 7), Ok(5));
//! assert_eq!(g.targets(&"a").get(&"b"), Some(&7));
//! assert!(g.remove(&"b"));
//! assert!(g.targets(&"a").is_empty());
//! ```

pub mod error;
pub mod graph;
#[cfg(feature = "logging")]
pub mod logger;

pub use error::{GraphError, Result};
pub use graph::{
    BaseGraph, DefaultGraph, EdgeListGraph, HashMapGraph, MutableGraph, VertexMapGraph,
};
