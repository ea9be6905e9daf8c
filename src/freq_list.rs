//! Arena-backed frequency list used by the frequency-ordered policies.
//!
//! Buckets form a doubly-linked list with counts strictly increasing toward
//! the tail; each bucket holds the set of keys sharing its count, and adjacent
//! buckets never share one. Promoting a key by one access therefore only ever
//! touches a bucket and its immediate neighbor, keeping every operation O(1).
//! A bucket is destroyed the moment its key set empties.

use std::collections::HashSet;
use std::hash::Hash;

use crate::list::NIL;

#[derive(Debug)]
struct Bucket<K> {
    frequency: u64,
    keys: HashSet<K>,
    prev: usize,
    next: usize,
}

#[derive(Debug)]
pub(crate) struct FreqList<K> {
    arena: Vec<Option<Bucket<K>>>,
    free: Vec<usize>,
    head: usize,
    tail: usize,
    /// Total number of keys across all buckets.
    len: usize,
}

impl<K> FreqList<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    fn bucket(&self, idx: usize) -> &Bucket<K> {
        self.arena[idx].as_ref().expect("handle points at a dead bucket")
    }

    fn bucket_mut(&mut self, idx: usize) -> &mut Bucket<K> {
        self.arena[idx].as_mut().expect("handle points at a dead bucket")
    }

    fn alloc(&mut self, bucket: Bucket<K>) -> usize {
        if let Some(idx) = self.free.pop() {
            self.arena[idx] = Some(bucket);
            idx
        } else {
            self.arena.push(Some(bucket));
            self.arena.len() - 1
        }
    }

    /// Unlinks and destroys the bucket behind `idx`.
    fn remove_bucket(&mut self, idx: usize) {
        let (prev, next) = {
            let bucket = self.bucket(idx);
            (bucket.prev, bucket.next)
        };
        if prev != NIL {
            self.bucket_mut(prev).next = next;
        } else {
            self.head = next;
        }
        if next != NIL {
            self.bucket_mut(next).prev = prev;
        } else {
            self.tail = prev;
        }
        self.arena[idx] = None;
        self.free.push(idx);
    }

    /// Admits a new key at count 1 and returns its bucket handle.
    pub fn insert(&mut self, key: K) -> usize {
        self.len += 1;
        if self.head != NIL && self.bucket(self.head).frequency == 1 {
            let head = self.head;
            self.bucket_mut(head).keys.insert(key);
            return head;
        }
        let old_head = self.head;
        let mut keys = HashSet::new();
        keys.insert(key);
        let idx = self.alloc(Bucket {
            frequency: 1,
            keys,
            prev: NIL,
            next: old_head,
        });
        if old_head != NIL {
            self.bucket_mut(old_head).prev = idx;
        } else {
            self.tail = idx;
        }
        self.head = idx;
        idx
    }

    /// Bumps `key` from its bucket to count + 1 and returns the handle of the
    /// bucket now holding it.
    pub fn promote(&mut self, idx: usize, key: &K) -> usize {
        let frequency = self.bucket(idx).frequency;
        let next = self.bucket(idx).next;
        let next_matches = next != NIL && self.bucket(next).frequency == frequency + 1;

        if self.bucket(idx).keys.len() == 1 {
            if next_matches {
                // Sole occupant merges forward; its bucket dies.
                self.bucket_mut(next).keys.insert(key.clone());
                self.remove_bucket(idx);
                next
            } else {
                // Sole occupant: the bucket itself can carry the new count.
                self.bucket_mut(idx).frequency += 1;
                idx
            }
        } else {
            self.bucket_mut(idx).keys.remove(key);
            if next_matches {
                self.bucket_mut(next).keys.insert(key.clone());
                next
            } else {
                // Split off a fresh bucket right after the current one.
                let mut keys = HashSet::new();
                keys.insert(key.clone());
                let new_idx = self.alloc(Bucket {
                    frequency: frequency + 1,
                    keys,
                    prev: idx,
                    next,
                });
                self.bucket_mut(idx).next = new_idx;
                if next != NIL {
                    self.bucket_mut(next).prev = new_idx;
                } else {
                    self.tail = new_idx;
                }
                new_idx
            }
        }
    }

    /// Removes and returns some key from the lowest-count bucket.
    pub fn pop_front(&mut self) -> Option<K> {
        if self.head == NIL {
            return None;
        }
        let head = self.head;
        let key = match self.bucket(head).keys.iter().next().cloned() {
            Some(key) => key,
            None => return None,
        };
        self.bucket_mut(head).keys.remove(&key);
        if self.bucket(head).keys.is_empty() {
            self.remove_bucket(head);
        }
        self.len -= 1;
        Some(key)
    }

    /// Removes and returns some key from the highest-count bucket.
    pub fn pop_back(&mut self) -> Option<K> {
        if self.tail == NIL {
            return None;
        }
        let tail = self.tail;
        let key = match self.bucket(tail).keys.iter().next().cloned() {
            Some(key) => key,
            None => return None,
        };
        self.bucket_mut(tail).keys.remove(&key);
        if self.bucket(tail).keys.is_empty() {
            self.remove_bucket(tail);
        }
        self.len -= 1;
        Some(key)
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.free.clear();
        self.head = NIL;
        self.tail = NIL;
        self.len = 0;
    }

    /// Count recorded by the bucket behind `idx`.
    #[cfg(test)]
    pub fn frequency(&self, idx: usize) -> u64 {
        self.bucket(idx).frequency
    }
}
