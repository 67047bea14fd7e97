// Copyright (c) 2016, 2017, 2020 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Binary heap implementation

use crate::collections::PriQueue;
use crate::error::{Error, Result};

/// Simple binary min-heap.
///
/// The elements are stored in a growable array, the children of position `i`
/// are at `2i + 1` and `2i + 2`. The value of each element is not larger than
/// the values of its children. Elements with equal values leave the heap in no
/// particular order.
///
/// # Example
///
/// ```
/// use prim_mst::collections::{BinHeap, PriQueue};
/// use prim_mst::Error;
///
/// let mut heap = BinHeap::new();
/// heap.push('a', 5);
/// heap.push('b', 1);
/// heap.push('c', 3);
///
/// assert_eq!(heap.extract_min(), Ok(('b', 1)));
/// assert_eq!(heap.extract_min(), Ok(('c', 3)));
/// assert_eq!(heap.extract_min(), Ok(('a', 5)));
/// assert_eq!(heap.extract_min(), Err(Error::EmptyQueue));
/// ```
#[derive(Clone, Debug)]
pub struct BinHeap<K, V> {
    /// The heap elements.
    heap: Vec<(K, V)>,
}

impl<K, V> BinHeap<K, V> {
    pub fn new() -> Self {
        Default::default()
    }

    /// Create an empty heap with space for `capacity` elements.
    ///
    /// The heap still grows beyond that if necessary.
    pub fn with_capacity(capacity: usize) -> Self {
        BinHeap {
            heap: Vec::with_capacity(capacity),
        }
    }
}

impl<K, V> Default for BinHeap<K, V> {
    fn default() -> Self {
        BinHeap { heap: vec![] }
    }
}

impl<K, V> PriQueue<K, V> for BinHeap<K, V>
where
    V: PartialOrd,
{
    fn len(&self) -> usize {
        self.heap.len()
    }

    fn push(&mut self, key: K, value: V) {
        self.heap.push((key, value));
        self.upheap(self.heap.len() - 1);
    }

    fn pop_min(&mut self) -> Option<(K, V)> {
        if self.heap.is_empty() {
            return None;
        }

        // the last element takes the place of the root
        let min = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.downheap(0);
        }
        Some(min)
    }
}

impl<K, V> BinHeap<K, V>
where
    V: PartialOrd,
{
    /// Remove and return the element with the smallest value.
    ///
    /// Fails with [`Error::EmptyQueue`] if the heap is empty.
    pub fn extract_min(&mut self) -> Result<(K, V)> {
        self.pop_min().ok_or(Error::EmptyQueue)
    }

    /// Move the element at `cur_pos` up in the heap until its parent does not
    /// have a larger value or the root is reached.
    fn upheap(&mut self, mut cur_pos: usize) {
        while cur_pos > 0 {
            let parent_pos = (cur_pos - 1) / 2;
            // stop at equal values
            if !(self.heap[parent_pos].1 > self.heap[cur_pos].1) {
                break;
            }
            self.heap.swap(cur_pos, parent_pos);
            cur_pos = parent_pos;
        }
    }

    /// Move the element at `cur_pos` down in the heap until none of its
    /// children has a smaller value or a leaf is reached.
    fn downheap(&mut self, mut cur_pos: usize) {
        let n = self.heap.len();
        loop {
            let left_pos = 2 * cur_pos + 1;
            let right_pos = left_pos + 1;
            if left_pos >= n {
                break;
            }
            let next_pos = if right_pos < n && self.heap[right_pos].1 < self.heap[left_pos].1 {
                right_pos
            } else {
                left_pos
            };

            if !(self.heap[next_pos].1 < self.heap[cur_pos].1) {
                break;
            }

            self.heap.swap(cur_pos, next_pos);
            cur_pos = next_pos;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BinHeap;
    use crate::collections::PriQueue;
    use crate::error::Error;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Check the heap order of the underlying array.
    fn is_heap<K, V: PartialOrd>(heap: &BinHeap<K, V>) -> bool {
        (1..heap.heap.len()).all(|i| heap.heap[(i - 1) / 2].1 <= heap.heap[i].1)
    }

    #[test]
    fn test_empty() {
        let mut heap = BinHeap::<usize, u32>::new();
        assert!(heap.is_empty());
        assert_eq!(heap.pop_min(), None);
        assert_eq!(heap.extract_min(), Err(Error::EmptyQueue));
    }

    #[test]
    fn test_sorted() {
        let mut heap = BinHeap::with_capacity(4);
        for (k, &v) in [9, 4, 10, 6, 5, 1, 7, 2, 11, 8, 3].iter().enumerate() {
            heap.push(k, v);
            assert!(is_heap(&heap));
        }
        assert_eq!(heap.len(), 11);

        let mut values = vec![];
        while let Ok((_, v)) = heap.extract_min() {
            assert!(is_heap(&heap));
            values.push(v);
        }
        assert_eq!(values, (1..=11).collect::<Vec<_>>());
        assert!(heap.is_empty());
    }

    #[test]
    fn test_random() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut heap = BinHeap::new();
        let mut present: Vec<u32> = vec![];
        let mut npushed = 0;
        let mut npopped = 0;

        for _ in 0..5000 {
            if rng.gen_bool(0.6) {
                let v = rng.gen_range(0..100);
                heap.push(npushed, v);
                present.push(v);
                npushed += 1;
            } else if let Some((_, v)) = heap.pop_min() {
                let min = *present.iter().min().unwrap();
                assert_eq!(v, min);
                let pos = present.iter().position(|&x| x == v).unwrap();
                present.swap_remove(pos);
                npopped += 1;
            } else {
                assert!(present.is_empty());
            }
            assert_eq!(heap.len(), present.len());
            assert!(is_heap(&heap));
        }

        while heap.pop_min().is_some() {
            npopped += 1;
        }
        assert_eq!(npushed, npopped);
    }

    #[test]
    fn test_ties() {
        let mut heap = BinHeap::new();
        heap.push("a", 1.0);
        heap.push("b", 1.0);
        heap.push("c", 0.5);
        assert_eq!(heap.pop_min(), Some(("c", 0.5)));
        let mut rest = vec![heap.pop_min().unwrap().0, heap.pop_min().unwrap().0];
        rest.sort();
        assert_eq!(rest, vec!["a", "b"]);
        assert!(heap.is_empty());
    }
}
