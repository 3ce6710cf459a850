/// An indexed min-priority queue: a binary heap over priorities with a
/// reverse index from key to heap slot, so that `decrease_key` runs in
/// logarithmic time and `contains` in constant time.
///
/// Holds at most one entry per index in `0..capacity`. Misuse of the
/// queue is a programming error, not a data condition, so the mutating
/// operations panic on contract violations instead of returning errors.
#[derive(Debug, Clone)]
pub struct IndexMinPq<P> {
    /// Heap of (index, priority) pairs ordered by priority.
    heap: Vec<(usize, P)>,
    /// slot[i] = position of index i in `heap`, if present.
    slot: Vec<Option<usize>>,
}

impl<P: Ord + Copy> IndexMinPq<P> {
    /// Creates an empty queue accepting indices in `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        IndexMinPq {
            heap: Vec::with_capacity(capacity),
            slot: vec![None; capacity],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Is `index` currently in the queue?
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn contains(&self, index: usize) -> bool {
        self.slot[index].is_some()
    }

    /// Inserts `index` with the given priority.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range or already present.
    pub fn insert(&mut self, index: usize, priority: P) {
        assert!(
            index < self.slot.len(),
            "index {} out of range 0..{}",
            index,
            self.slot.len()
        );
        assert!(!self.contains(index), "index {index} is already in the queue");
        self.heap.push((index, priority));
        let last = self.heap.len() - 1;
        self.slot[index] = Some(last);
        self.swim(last);
    }

    /// Lowers the priority of `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range or absent, or if `priority` is
    /// not strictly smaller than the current priority.
    pub fn decrease_key(&mut self, index: usize, priority: P) {
        let k = match self.slot[index] {
            Some(k) => k,
            None => panic!("index {index} is not in the queue"),
        };
        assert!(
            priority < self.heap[k].1,
            "decrease_key for index {index} requires a strictly smaller priority"
        );
        self.heap[k].1 = priority;
        self.swim(k);
    }

    /// Removes and returns the entry with the smallest priority, or
    /// `None` when the queue is empty. Ties are broken by heap order.
    pub fn del_min(&mut self) -> Option<(usize, P)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let (index, priority) = self.heap.pop()?;
        self.slot[index] = None;
        if !self.heap.is_empty() {
            self.slot[self.heap[0].0] = Some(0);
            self.sink(0);
        }
        Some((index, priority))
    }

    fn swim(&mut self, mut k: usize) {
        while k > 0 {
            let parent = (k - 1) / 2;
            if self.heap[k].1 < self.heap[parent].1 {
                self.exchange(k, parent);
                k = parent;
            } else {
                break;
            }
        }
    }

    fn sink(&mut self, mut k: usize) {
        let n = self.heap.len();
        loop {
            let mut child = 2 * k + 1;
            if child >= n {
                break;
            }
            if child + 1 < n && self.heap[child + 1].1 < self.heap[child].1 {
                child += 1;
            }
            if self.heap[child].1 < self.heap[k].1 {
                self.exchange(k, child);
                k = child;
            } else {
                break;
            }
        }
    }

    fn exchange(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.slot[self.heap[a].0] = Some(a);
        self.slot[self.heap[b].0] = Some(b);
    }
}
