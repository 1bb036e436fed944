//! Array-backed binary heap over any indexable key container
//!
//! A binary heap is a nearly complete binary tree stored in a sequence:
//! the children of index `i` live at `2i + 1` and `2i + 2`. [`BinaryHeap`]
//! supports both the max-heap and the min-heap discipline; the caller is
//! responsible for sticking to one of them (build, extract and key updates
//! of the matching flavor) for a given heap.
//!
//! The storage is abstracted by [`HeapKeys`], so the same heap code drives
//! raw integer buffers, edges ordered by weight, or a vertex queue ordered
//! by distance that tracks positions for decrease-key.

/// Capabilities a container must expose to back a [`BinaryHeap`]
pub trait HeapKeys {
    /// Ordered key stored at each position
    type Key: Ord;

    /// Number of keys held by the container
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, i: usize) -> &Self::Key;

    fn set(&mut self, i: usize, key: Self::Key);

    /// Returns true if the key at `i` orders strictly before the key at `j`
    fn less(&self, i: usize, j: usize) -> bool {
        self.get(i) < self.get(j)
    }

    fn swap(&mut self, i: usize, j: usize);

    /// Appends a key at the end of the container
    fn push(&mut self, key: Self::Key);

    /// Removes and returns the last key of the container
    fn pop(&mut self) -> Option<Self::Key>;
}

impl<T: Ord> HeapKeys for Vec<T> {
    type Key = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, i: usize) -> &T {
        &self[i]
    }

    fn set(&mut self, i: usize, key: T) {
        self[i] = key;
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j);
    }

    fn push(&mut self, key: T) {
        Vec::push(self, key);
    }

    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }
}

/// Binary heap over a [`HeapKeys`] container
///
/// Only the first `heap_size` positions of the container form the heap.
/// After [`BinaryHeap::sort`] the container holds ascending keys and the
/// logical heap is empty until one of the build methods runs again.
#[derive(Debug, Clone)]
pub struct BinaryHeap<K: HeapKeys> {
    keys: K,
    heap_size: usize,
}

fn parent(i: usize) -> usize {
    (i - 1) / 2
}

fn left(i: usize) -> usize {
    2 * i + 1
}

fn right(i: usize) -> usize {
    2 * i + 2
}

impl<K: HeapKeys> BinaryHeap<K> {
    /// Wraps a container; the whole container is considered part of the heap
    /// but no ordering is established until a build method is called
    pub fn new(keys: K) -> Self {
        let heap_size = keys.len();
        BinaryHeap { keys, heap_size }
    }

    /// Number of keys in the logical heap
    pub fn heap_size(&self) -> usize {
        self.heap_size
    }

    /// Number of keys held by the backing container
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the logical heap holds no keys
    pub fn is_empty(&self) -> bool {
        self.heap_size == 0
    }

    pub fn keys(&self) -> &K {
        &self.keys
    }

    pub fn into_keys(self) -> K {
        self.keys
    }

    /// Restores the max-heap property for the subtree rooted at `i`,
    /// assuming both child subtrees already satisfy it
    ///
    /// On equal keys the left child wins; the right child only replaces
    /// the current candidate when strictly larger.
    pub fn max_heapify(&mut self, mut i: usize) {
        loop {
            let (l, r) = (left(i), right(i));
            let mut largest = i;
            if l < self.heap_size && self.keys.less(largest, l) {
                largest = l;
            }
            if r < self.heap_size && self.keys.less(largest, r) {
                largest = r;
            }
            if largest == i {
                return;
            }
            self.keys.swap(i, largest);
            i = largest;
        }
    }

    /// Restores the min-heap property for the subtree rooted at `i`
    pub fn min_heapify(&mut self, mut i: usize) {
        loop {
            let (l, r) = (left(i), right(i));
            let mut smallest = i;
            if l < self.heap_size && self.keys.less(l, smallest) {
                smallest = l;
            }
            if r < self.heap_size && self.keys.less(r, smallest) {
                smallest = r;
            }
            if smallest == i {
                return;
            }
            self.keys.swap(i, smallest);
            i = smallest;
        }
    }

    /// Turns the whole container into a max-heap in linear time
    pub fn build_max_heap(&mut self) {
        self.heap_size = self.keys.len();
        for i in (0..self.heap_size / 2).rev() {
            self.max_heapify(i);
        }
    }

    /// Turns the whole container into a min-heap in linear time
    pub fn build_min_heap(&mut self) {
        self.heap_size = self.keys.len();
        for i in (0..self.heap_size / 2).rev() {
            self.min_heapify(i);
        }
    }

    /// Root of a max-heap
    pub fn maximum(&self) -> Option<&K::Key> {
        self.root()
    }

    /// Root of a min-heap
    pub fn minimum(&self) -> Option<&K::Key> {
        self.root()
    }

    fn root(&self) -> Option<&K::Key> {
        if self.heap_size == 0 {
            None
        } else {
            Some(self.keys.get(0))
        }
    }

    /// Removes and returns the largest key, or `None` on an empty heap
    pub fn extract_max(&mut self) -> Option<K::Key> {
        let key = self.take_root()?;
        self.max_heapify(0);
        Some(key)
    }

    /// Removes and returns the smallest key, or `None` on an empty heap
    pub fn extract_min(&mut self) -> Option<K::Key> {
        let key = self.take_root()?;
        self.min_heapify(0);
        Some(key)
    }

    /// Moves the last heap key to the root and removes the old root from
    /// the container; the caller re-heapifies
    fn take_root(&mut self) -> Option<K::Key> {
        if self.heap_size < 1 {
            return None;
        }
        let last = self.heap_size - 1;
        self.keys.swap(0, last);
        self.heap_size -= 1;
        // Keys past the heap (left behind by `sort`) keep their order.
        for j in last..self.keys.len() - 1 {
            self.keys.swap(j, j + 1);
        }
        self.keys.pop()
    }

    /// Raises the key at `i` and sifts it up a max-heap
    ///
    /// Returns false without mutating anything if `i` is outside the heap
    /// or `key` is smaller than the current key.
    pub fn increase_key(&mut self, i: usize, key: K::Key) -> bool {
        if i >= self.heap_size || key < *self.keys.get(i) {
            return false;
        }
        self.keys.set(i, key);
        self.sift_up_max(i);
        true
    }

    /// Lowers the key at `i` and sifts it up a min-heap
    ///
    /// Returns false without mutating anything if `i` is outside the heap
    /// or `key` is larger than the current key.
    pub fn decrease_key(&mut self, i: usize, key: K::Key) -> bool {
        if i >= self.heap_size || key > *self.keys.get(i) {
            return false;
        }
        self.keys.set(i, key);
        self.sift_up_min(i);
        true
    }

    fn sift_up_max(&mut self, mut i: usize) {
        while i > 0 && self.keys.less(parent(i), i) {
            self.keys.swap(i, parent(i));
            i = parent(i);
        }
    }

    fn sift_up_min(&mut self, mut i: usize) {
        while i > 0 && self.keys.less(i, parent(i)) {
            self.keys.swap(i, parent(i));
            i = parent(i);
        }
    }

    /// Appends `key` as the new last heap position and returns that index
    fn append(&mut self, key: K::Key) -> usize {
        self.keys.push(key);
        // Keys past the heap (left behind by `sort`) keep their order.
        let mut j = self.keys.len() - 1;
        while j > self.heap_size {
            self.keys.swap(j, j - 1);
            j -= 1;
        }
        self.heap_size += 1;
        self.heap_size - 1
    }

    /// Inserts a key into a max-heap
    pub fn max_heap_insert(&mut self, key: K::Key) {
        // The appended key equals itself, so this is increase_key at the new last index.
        let i = self.append(key);
        self.sift_up_max(i);
    }

    /// Inserts a key into a min-heap
    pub fn min_heap_insert(&mut self, key: K::Key) {
        let i = self.append(key);
        self.sift_up_min(i);
    }

    /// Heap sort: leaves the container in ascending order, in place
    pub fn sort(&mut self) {
        self.build_max_heap();
        for i in (1..self.keys.len()).rev() {
            self.keys.swap(0, i);
            self.heap_size -= 1;
            self.max_heapify(0);
        }
        self.heap_size = 0;
    }
}
