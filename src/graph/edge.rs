use crate::error::{GraphError, Result};
use crate::graph::base_graph::{Label, Weight};
use std::fmt;
use std::fmt::{Display, Formatter};

/// Immutable directed edge with a positive weight.
///
/// A zero weight is never stored: removing an edge drops its `Edge` rather
/// than rewriting it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge<L: Label> {
    source: L,
    target: L,
    weight: Weight,
}

impl<L: Label> Edge<L> {
    pub fn new(source: L, target: L, weight: Weight) -> Result<Self> {
        if weight <= 0 {
            return Err(GraphError::NonPositiveWeight(weight));
        }
        Ok(Self {
            source,
            target,
            weight,
        })
    }

    pub fn source(&self) -> &L {
        &self.source
    }

    pub fn target(&self) -> &L {
        &self.target
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn connects(&self, source: &L, target: &L) -> bool {
        self.source == *source && self.target == *target
    }

    pub fn is_incident_to(&self, u: &L) -> bool {
        self.source == *u || self.target == *u
    }
}

impl<L: Label + Display> Display for Edge<L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} : {}", self.source, self.target, self.weight)
    }
}
