// Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

use crate::error::{Error, Result};
use crate::graph::HalfEdge;

use crate::num::traits::Zero;

use std::fmt;
use std::ops::AddAssign;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// The edges of a spanning tree rooted at a start vertex.
///
/// Every vertex except the start vertex is mapped to the half-edge that
/// connected it to the tree, whose `target` is that vertex. Vertices that
/// could not be reached from the start vertex have no entry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct MstResult<W> {
    start: usize,
    /// The tree edge of each vertex.
    edges: Vec<Option<HalfEdge<W>>>,
    /// The vertices in the order they joined the tree.
    order: Vec<usize>,
}

impl<W> MstResult<W> {
    pub(crate) fn new(n: usize, start: usize) -> Self {
        MstResult {
            start,
            edges: (0..n).map(|_| None).collect(),
            order: Vec::with_capacity(n.saturating_sub(1)),
        }
    }

    /// Record `e` as the tree edge of its target.
    pub(crate) fn insert(&mut self, e: HalfEdge<W>) {
        debug_assert!(e.target != self.start, "The start vertex has no tree edge");
        debug_assert!(self.edges[e.target].is_none(), "Vertex added twice");
        let v = e.target;
        self.order.push(v);
        self.edges[v] = Some(e);
    }

    /// Return the start vertex of the traversal.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Return the number of vertices of the underlying graph.
    pub fn num_vertices(&self) -> usize {
        self.edges.len()
    }

    /// Return the number of tree edges.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Return the tree edge connecting `v`, if there is one.
    pub fn get(&self, v: usize) -> Option<&HalfEdge<W>> {
        self.edges.get(v).and_then(Option::as_ref)
    }

    /// Return `true` if `v` is part of the tree.
    pub fn contains(&self, v: usize) -> bool {
        v == self.start || self.get(v).is_some()
    }

    /// Return an iterator over the tree edges by increasing target vertex.
    pub fn iter(&self) -> impl Iterator<Item = &HalfEdge<W>> + '_ {
        self.edges.iter().filter_map(Option::as_ref)
    }

    /// Return an iterator over the tree edges in the order they were
    /// accepted.
    pub fn traversal_order(&self) -> impl Iterator<Item = &HalfEdge<W>> + '_ {
        self.order.iter().filter_map(move |&v| self.get(v))
    }

    /// Return `true` if the tree contains every vertex.
    pub fn is_spanning(&self) -> bool {
        self.len() + 1 == self.num_vertices()
    }

    /// Fail with [`Error::DisconnectedGraph`] if some vertex is not reached.
    pub fn check_spanning(&self) -> Result<()> {
        if self.is_spanning() {
            Ok(())
        } else {
            Err(Error::DisconnectedGraph {
                reached: self.len() + 1,
                total: self.num_vertices(),
            })
        }
    }

    /// Return the sum of the weights of all tree edges.
    pub fn total_weight(&self) -> W
    where
        W: Copy + Zero + AddAssign,
    {
        let mut sum = W::zero();
        for e in self.iter() {
            sum += e.weight;
        }
        sum
    }
}

/// Renders one line `Edge: <origin> - <target> (weight: <weight>)` per tree
/// edge, ordered by target vertex.
impl<W> fmt::Display for MstResult<W>
where
    W: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for e in self.iter() {
            writeln!(f, "Edge: {}", e)?;
        }
        Ok(())
    }
}
