//! Arena-backed doubly-linked list used by the queue-ordered policies.
//!
//! Nodes live in a `Vec` and link to each other by index, with removed slots
//! recycled through a free list. Handles returned by [`LinkedList::push_front`]
//! stay valid until the node is popped, removed or the list is cleared, so
//! entries in a policy's index can locate their node in O(1). The head is the
//! most-recent side; eviction-style pops come off the tail.

/// Index value standing in for a null link.
pub(crate) const NIL: usize = usize::MAX;

/// Key plus the tick after which it stops being fresh. List payload for the
/// time-aware policies.
#[derive(Clone, Debug)]
pub(crate) struct ExpiryEntry<K> {
    pub key: K,
    pub expires_at: u64,
}

#[derive(Debug)]
struct Node<T> {
    data: Option<T>,
    prev: usize,
    next: usize,
}

#[derive(Debug)]
pub(crate) struct LinkedList<T> {
    arena: Vec<Node<T>>,
    /// Head of the free slot list, threaded through `next`.
    free_head: usize,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            free_head: NIL,
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn alloc(&mut self, data: T) -> usize {
        if self.free_head != NIL {
            let idx = self.free_head;
            self.free_head = self.arena[idx].next;
            let node = &mut self.arena[idx];
            node.data = Some(data);
            node.prev = NIL;
            node.next = NIL;
            idx
        } else {
            self.arena.push(Node {
                data: Some(data),
                prev: NIL,
                next: NIL,
            });
            self.arena.len() - 1
        }
    }

    fn release(&mut self, idx: usize) -> T {
        let node = &mut self.arena[idx];
        let data = node.data.take().expect("released an empty slot");
        node.prev = NIL;
        node.next = self.free_head;
        self.free_head = idx;
        data
    }

    /// Unlinks `idx` from the chain without freeing its slot.
    fn detach(&mut self, idx: usize) {
        let (prev, next) = {
            let node = &self.arena[idx];
            (node.prev, node.next)
        };
        if prev != NIL {
            self.arena[prev].next = next;
        } else {
            self.head = next;
        }
        if next != NIL {
            self.arena[next].prev = prev;
        } else {
            self.tail = prev;
        }
        let node = &mut self.arena[idx];
        node.prev = NIL;
        node.next = NIL;
    }

    /// Links a fresh node at the head and returns its handle.
    pub fn push_front(&mut self, data: T) -> usize {
        let idx = self.alloc(data);
        self.arena[idx].next = self.head;
        if self.head != NIL {
            self.arena[self.head].prev = idx;
        } else {
            self.tail = idx;
        }
        self.head = idx;
        self.len += 1;
        idx
    }

    /// Unlinks and returns the tail payload.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.tail == NIL {
            return None;
        }
        let idx = self.tail;
        self.detach(idx);
        self.len -= 1;
        Some(self.release(idx))
    }

    /// Unlinks and returns the head payload.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.head == NIL {
            return None;
        }
        let idx = self.head;
        self.detach(idx);
        self.len -= 1;
        Some(self.release(idx))
    }

    /// Unlinks the node behind `idx` and returns its payload.
    pub fn remove(&mut self, idx: usize) -> T {
        self.detach(idx);
        self.len -= 1;
        self.release(idx)
    }

    /// Relinks the node behind `idx` at the head.
    pub fn move_to_front(&mut self, idx: usize) {
        if idx == self.head {
            return;
        }
        self.detach(idx);
        self.arena[idx].next = self.head;
        if self.head != NIL {
            self.arena[self.head].prev = idx;
        } else {
            self.tail = idx;
        }
        self.head = idx;
    }

    /// Tail payload without unlinking.
    pub fn back(&self) -> Option<&T> {
        if self.tail == NIL {
            None
        } else {
            self.arena[self.tail].data.as_ref()
        }
    }

    pub fn get(&self, idx: usize) -> &T {
        self.arena[idx]
            .data
            .as_ref()
            .expect("handle points at an empty slot")
    }

    pub fn get_mut(&mut self, idx: usize) -> &mut T {
        self.arena[idx]
            .data
            .as_mut()
            .expect("handle points at an empty slot")
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.free_head = NIL;
        self.head = NIL;
        self.tail = NIL;
        self.len = 0;
    }
}
