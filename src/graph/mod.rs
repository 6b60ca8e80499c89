
pub use base_graph::{BaseGraph, Label, Weight};
pub use edge::Edge;
pub use edge_list_graph::EdgeListGraph;
pub use hash_map_graph::HashMapGraph;
pub use mutable_graph::MutableGraph;
pub use vertex::Vertex;
pub use vertex_map_graph::VertexMapGraph;

mod base_graph;
mod edge;
mod edge_list_graph;
mod hash_map_graph;
mod mutable_graph;
mod vertex;
mod vertex_map_graph;

/// Representation returned by [`empty`].
pub type DefaultGraph<L> = HashMapGraph<L>;

/// A new graph with no vertices and no edges, in the default representation.
pub fn empty<L: Label>() -> DefaultGraph<L> {
    DefaultGraph::new()
}

#[cfg(test)]
mod tests {
    use crate::graph::{empty, BaseGraph, MutableGraph};

    #[test]
    fn empty_has_no_vertices() {
        let graph = empty::<&str>();
        assert!(graph.vertices().is_empty());
    }

    #[test]
    fn integer_labels() {
        let mut graph = empty();
        assert!(graph.add(1u64));
        assert_eq!(graph.set(1, 2, 10), Ok(0));
        assert_eq!(graph.targets(&1).get(&2), Some(&10));
        assert!(graph.remove(&2));
        assert!(graph.targets(&1).is_empty());
    }

    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    struct City {
        name: String,
    }

    impl City {
        fn new(name: &str) -> Self {
            City {
                name: name.to_string(),
            }
        }
    }

    #[test]
    fn custom_labels_use_value_identity() {
        let mut graph = empty();
        assert!(graph.add(City::new("A")));
        assert!(!graph.add(City::new("A")));
        assert!(graph.add(City::new("B")));
        assert_eq!(graph.order(), 2);

        assert_eq!(graph.set(City::new("A"), City::new("B"), 4), Ok(0));
        assert_eq!(graph.weight(&City::new("A"), &City::new("B")), 4);
        assert!(graph.sources(&City::new("B")).contains_key(&City::new("A")));
    }
}
