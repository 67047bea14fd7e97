/*
 * Copyright (c) 2018 Frank Fischer <frank-fischer@shadow-soft.de>
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

/// A growing set of vertices.
///
/// Vertices can be added but never removed.
#[derive(Clone, Debug)]
pub struct VisitedSet {
    marks: Vec<bool>,
    len: usize,
}

impl VisitedSet {
    /// Create an empty set over the vertices `0..n`.
    pub fn new(n: usize) -> Self {
        VisitedSet {
            marks: vec![false; n],
            len: 0,
        }
    }

    /// Return `true` if this set is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return the number of vertices in this set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return `true` if every vertex is contained in this set.
    pub fn is_full(&self) -> bool {
        self.len == self.marks.len()
    }

    /// Add one vertex to the set.
    ///
    /// Return `true` iff `u` had not been contained in this set before.
    pub fn insert(&mut self, u: usize) -> bool {
        if self.marks[u] {
            false
        } else {
            self.marks[u] = true;
            self.len += 1;
            true
        }
    }

    /// Return `true` iff vertex `u` is contained in this set.
    pub fn contains(&self, u: usize) -> bool {
        self.marks[u]
    }
}

#[cfg(test)]
mod tests {
    use super::VisitedSet;

    #[test]
    fn test_insert() {
        let mut set = VisitedSet::new(3);
        assert!(set.is_empty());
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert!(set.contains(1));
        assert!(!set.contains(0));
        assert_eq!(set.len(), 1);
        assert!(set.insert(0));
        assert!(set.insert(2));
        assert!(set.is_full());
    }
}
