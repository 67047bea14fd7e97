/*
 * Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Runtime limits for graph construction.

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// Default upper bound on the number of vertices of a graph.
pub const DEFAULT_MAX_VERTICES: usize = 1 << 20;

/// Configuration passed to [`Graph::with_config`][crate::Graph::with_config].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(default))]
pub struct GraphConfig {
    /// Largest vertex count accepted by the graph constructor.
    pub max_vertices: usize,
}

impl GraphConfig {
    pub fn new() -> Self {
        Default::default()
    }

    /// Set the largest accepted vertex count.
    pub fn max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices;
        self
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            max_vertices: DEFAULT_MAX_VERTICES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GraphConfig, DEFAULT_MAX_VERTICES};

    #[test]
    fn test_default() {
        assert_eq!(GraphConfig::new().max_vertices, DEFAULT_MAX_VERTICES);
        assert_eq!(GraphConfig::new().max_vertices(20).max_vertices, 20);
    }

    #[cfg(feature = "serialize")]
    #[test]
    fn test_serde() {
        let cfg: GraphConfig = serde_json::from_str(r#"{ "max_vertices": 20 }"#).unwrap();
        assert_eq!(cfg, GraphConfig::new().max_vertices(20));

        let cfg: GraphConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, GraphConfig::default());
    }
}
