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

//! Error types.

use thiserror::Error;

/// Rejected arguments when building a graph or starting a traversal.
///
/// These are always detected before anything is modified.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("vertex count {count} is not in 1..={max}")]
    VertexCount { count: usize, max: usize },

    #[error("vertex {vertex} is out of range for a graph with {count} vertices")]
    VertexOutOfRange { vertex: usize, count: usize },

    #[error("self-loop at vertex {0}")]
    SelfLoop(usize),

    #[error("edge {u}-{v} has a negative or incomparable weight")]
    NegativeWeight { u: usize, v: usize },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    #[error("priority queue is empty")]
    EmptyQueue,

    /// The start vertex does not reach every vertex.
    ///
    /// This is not fatal, the tree over the reached component is still
    /// available.
    #[error("graph is disconnected: reached {reached} of {total} vertices")]
    DisconnectedGraph { reached: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
