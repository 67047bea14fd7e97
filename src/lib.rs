// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

#![forbid(unsafe_code)]

//! Minimum spanning trees of weighted undirected graphs.
//!
//! A [`Graph`] is built from a vertex count and a list of weighted edges,
//! then [`prim`] grows a minimum spanning tree from a start vertex using a
//! binary heap ([`collections::BinHeap`]) of candidate edges.
//!
//! ```
//! use prim_mst::{prim, Graph};
//!
//! let mut g = Graph::new(4).unwrap();
//! g.add_edge(0, 1, 2).unwrap();
//! g.add_edge(1, 2, 3).unwrap();
//! g.add_edge(2, 3, 1).unwrap();
//! g.add_edge(3, 0, 4).unwrap();
//!
//! let tree = prim(&g, 0).unwrap();
//! assert_eq!(tree.total_weight(), 6);
//! print!("{}", tree);
//! ```

mod num {
    pub use num_traits as traits;
}

pub mod config;
pub use self::config::GraphConfig;

pub mod error;
pub use self::error::{Error, InvalidArgument, Result};

// # Data structures

pub mod graph;
pub use self::graph::{Graph, HalfEdge};

pub mod collections;

// # Algorithms

pub mod mst;
pub use self::mst::{prim, MstResult, Prim, PrimError, State};
