//! Static footpath graph between stops.
//!
//! Some stops are close enough to walk between, enabling connections that
//! do not appear in the timetable. This module provides the read-only graph
//! the scan consults when propagating a frontier improvement to a stop's
//! walkable neighbours.

use std::collections::HashMap;

use crate::domain::{DomainError, StopId};

/// Undirected footpath graph with edge distances in metres.
///
/// Edges are symmetric: adding A—B also adds B—A with the same distance.
/// Neighbours of a stop are iterated in insertion order, so a scan over a
/// given graph is reproducible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalkGraph {
    /// Adjacency lists; each edge appears once per endpoint.
    adjacency: HashMap<StopId, Vec<(StopId, f64)>>,
    edge_count: usize,
}

impl WalkGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a footpath between two stops with the given distance in metres.
    ///
    /// The distance must be finite and non-negative; a graph can therefore
    /// never feed the scan a walking time that moves a departure later.
    /// The edge is stored symmetrically. Adding the same pair again appends
    /// a parallel edge; callers are expected to supply each pair once.
    pub fn add(
        &mut self,
        a: StopId,
        b: StopId,
        distance_meters: f64,
    ) -> Result<(), DomainError> {
        if !(distance_meters.is_finite() && distance_meters >= 0.0) {
            return Err(DomainError::InvalidWalkDistance {
                a,
                b,
                distance: distance_meters,
            });
        }
        self.adjacency.entry(a).or_default().push((b, distance_meters));
        self.adjacency.entry(b).or_default().push((a, distance_meters));
        self.edge_count += 1;
        Ok(())
    }

    /// The walkable neighbours of a stop, with distances in metres.
    ///
    /// Returns an empty slice for a stop with no footpaths.
    pub fn neighbors(&self, stop: StopId) -> &[(StopId, f64)] {
        self.adjacency.get(&stop).map_or(&[], Vec::as_slice)
    }

    /// Number of undirected edges.
    pub fn len(&self) -> usize {
        self.edge_count
    }

    /// True if the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.edge_count == 0
    }
}

/// Builder for assembling a walk graph.
#[derive(Debug, Default)]
pub struct WalkGraphBuilder {
    inner: WalkGraph,
}

impl WalkGraphBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a footpath edge, ignoring edges with an invalid distance.
    pub fn add(mut self, a: StopId, b: StopId, distance_meters: f64) -> Self {
        let _ = self.inner.add(a, b, distance_meters);
        self
    }

    /// Build the graph.
    pub fn build(self) -> WalkGraph {
        self.inner
    }
}
