// src/pqueue.rs

//! A generic binary min-heap parameterized by a strict-weak-ordering
//! comparator.
//!
//! The heap is used by the Huffman tree builder as a pure ordering
//! primitive and carries no Huffman-specific knowledge. Elements that
//! compare equal under the comparator are ordered by insertion sequence
//! (FIFO), so any sequence of `push`/`pop` calls is fully reproducible.

use crate::utils::error::{Result, ZapError};

struct Entry<T> {
    item: T,
    seq: u64,
}

/// A binary min-heap over a growable vector.
///
/// `C` is a "precedes" predicate: `precedes(a, b)` returns true when `a`
/// must order strictly before `b`.
pub struct PQueue<T, C>
where
    C: Fn(&T, &T) -> bool,
{
    items: Vec<Entry<T>>,
    precedes: C,
    next_seq: u64,
}

impl<T, C> PQueue<T, C>
where
    C: Fn(&T, &T) -> bool,
{
    /// Creates an empty queue ordered by the given comparator.
    pub fn new(precedes: C) -> Self {
        Self {
            items: Vec::new(),
            precedes,
            next_seq: 0,
        }
    }

    /// Number of items currently in the queue.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the minimal element without removing it.
    pub fn top(&self) -> Result<&T> {
        self.items
            .first()
            .map(|e| &e.item)
            .ok_or(ZapError::Underflow("top on empty queue"))
    }

    /// Inserts an item, percolating it up while it precedes its parent.
    pub fn push(&mut self, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.items.push(Entry { item, seq });
        self.percolate_up(self.items.len() - 1);
    }

    /// Removes and returns the minimal element.
    ///
    /// The last element is moved into the root position and percolated
    /// down, at each step swapping with the smaller of its children.
    pub fn pop(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(ZapError::Underflow("pop on empty queue"));
        }
        let root = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.percolate_down(0);
        }
        Ok(root.item)
    }

    fn parent(n: usize) -> usize {
        (n - 1) / 2
    }

    fn left_child(n: usize) -> usize {
        2 * n + 1
    }

    fn right_child(n: usize) -> usize {
        2 * n + 2
    }

    fn percolate_up(&mut self, mut n: usize) {
        while n != 0 && self.compare_nodes(n, Self::parent(n)) {
            self.items.swap(n, Self::parent(n));
            n = Self::parent(n);
        }
    }

    fn percolate_down(&mut self, mut n: usize) {
        while Self::left_child(n) < self.items.len() {
            let mut child = Self::left_child(n);
            let right = Self::right_child(n);
            if right < self.items.len() && self.compare_nodes(right, child) {
                child = right;
            }
            if self.compare_nodes(child, n) {
                self.items.swap(child, n);
                n = child;
            } else {
                break;
            }
        }
    }

    // Comparator first; insertion sequence breaks ties so equal elements
    // come out in the order they went in.
    fn compare_nodes(&self, i: usize, j: usize) -> bool {
        let (a, b) = (&self.items[i], &self.items[j]);
        if (self.precedes)(&a.item, &b.item) {
            return true;
        }
        if (self.precedes)(&b.item, &a.item) {
            return false;
        }
        a.seq < b.seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int_queue() -> PQueue<i32, impl Fn(&i32, &i32) -> bool> {
        PQueue::new(|a: &i32, b: &i32| a < b)
    }

    #[test]
    fn test_push_pop_sorted() {
        let mut q = int_queue();
        for v in [5, 1, 9, 3, 7, 2, 8, 4, 6] {
            q.push(v);
        }
        assert_eq!(q.len(), 9);
        let mut out = Vec::new();
        while !q.is_empty() {
            out.push(q.pop().unwrap());
        }
        assert_eq!(out, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_top_is_min_after_interleaving() {
        let mut q = int_queue();
        q.push(4);
        q.push(2);
        assert_eq!(*q.top().unwrap(), 2);
        assert_eq!(q.pop().unwrap(), 2);
        q.push(1);
        q.push(3);
        assert_eq!(*q.top().unwrap(), 1);
        assert_eq!(q.pop().unwrap(), 1);
        assert_eq!(q.pop().unwrap(), 3);
        assert_eq!(q.pop().unwrap(), 4);
        assert_eq!(q.len(), 0);
    }

    #[test]
    fn test_underflow_on_empty() {
        let mut q = int_queue();
        assert!(matches!(q.top(), Err(ZapError::Underflow(_))));
        assert!(matches!(q.pop(), Err(ZapError::Underflow(_))));
        q.push(1);
        q.pop().unwrap();
        assert!(matches!(q.pop(), Err(ZapError::Underflow(_))));
    }

    #[test]
    fn test_size_tracks_pushes_and_pops() {
        let mut q = int_queue();
        for v in 0..100 {
            q.push(v % 10);
        }
        assert_eq!(q.len(), 100);
        for _ in 0..40 {
            q.pop().unwrap();
        }
        assert_eq!(q.len(), 60);
    }

    #[test]
    fn test_equal_elements_pop_in_insertion_order() {
        // Comparator only sees the key; payloads of equal keys must come
        // out FIFO.
        let mut q = PQueue::new(|a: &(i32, &str), b: &(i32, &str)| a.0 < b.0);
        q.push((1, "first"));
        q.push((1, "second"));
        q.push((0, "zero"));
        q.push((1, "third"));
        assert_eq!(q.pop().unwrap(), (0, "zero"));
        assert_eq!(q.pop().unwrap(), (1, "first"));
        assert_eq!(q.pop().unwrap(), (1, "second"));
        assert_eq!(q.pop().unwrap(), (1, "third"));
    }

    #[test]
    fn test_duplicate_values() {
        let mut q = int_queue();
        for v in [3, 3, 1, 1, 2, 2] {
            q.push(v);
        }
        let mut out = Vec::new();
        while let Ok(v) = q.pop() {
            out.push(v);
        }
        assert_eq!(out, vec![1, 1, 2, 2, 3, 3]);
    }
}
