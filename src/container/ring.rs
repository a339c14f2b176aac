// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A fixed-capacity, overwriting ring buffer with a windowed read.

/// A fixed-capacity ring buffer that overwrites its oldest entry once full.
///
/// The requested capacity is rounded up to the next power of two. `read` always returns a
/// window ending at the most recently pushed item; positions not yet written (because fewer
/// than `requested` items have been pushed) read back as `T::default()`.
pub struct Ring<T> {
    buffer: Vec<T>,
    mask: usize,
    /// `capacity() - requested`, used to align the logical window within the rounded buffer.
    diff: usize,
    count: usize,
    index: usize,
}

impl<T: Copy + Default> Ring<T> {
    /// Creates a ring sized to hold at least `requested` items.
    ///
    /// # Panics
    ///
    /// Panics if `requested` is zero.
    pub fn new(requested: usize) -> Self {
        assert!(requested > 0, "ring buffer requires a non-zero capacity");

        let capacity = requested.next_power_of_two();

        Self {
            buffer: vec![T::default(); capacity],
            mask: capacity - 1,
            diff: capacity - requested,
            count: 0,
            index: 0,
        }
    }

    /// The rounded capacity of the ring (a power of two).
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Pushes a new item, overwriting the oldest entry once the ring is full.
    pub fn push(&mut self, item: T) {
        let pos = self.index & self.mask;
        self.buffer[pos] = item;
        self.index = self.index.wrapping_add(1);
        self.count = (self.count + 1).min(self.capacity());
    }

    /// Reads the last `k` items, oldest first. `k` must not exceed [`Ring::capacity`].
    ///
    /// Positions preceding the first push (when fewer than `requested` items have been pushed)
    /// read back as `T::default()`.
    pub fn read(&self, k: usize) -> Vec<T> {
        assert!(k <= self.capacity(), "window larger than ring capacity");

        (0..k)
            .map(|i| self.buffer[(i + self.diff + self.index) & self.mask])
            .collect()
    }

    /// Removes and returns the most recently pushed item.
    ///
    /// # Panics
    ///
    /// Panics if the ring is empty (a programmer error — see the crate's error handling notes).
    pub fn pop(&mut self) -> T {
        assert!(self.count > 0, "pop from an empty ring buffer");

        self.count -= 1;
        self.index = self.index.wrapping_sub(1);
        self.buffer[self.index & self.mask]
    }

    /// Resets the ring to empty. The backing storage is retained but treated as all-default.
    pub fn clear(&mut self) {
        self.count = 0;
        self.index = 0;
        self.buffer.iter_mut().for_each(|slot| *slot = T::default());
    }

    /// Number of items pushed since the last clear, saturating at [`Ring::capacity`].
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_capacity_up_to_power_of_two() {
        let r: Ring<u8> = Ring::new(5);
        assert_eq!(r.capacity(), 8);

        let r: Ring<u8> = Ring::new(8);
        assert_eq!(r.capacity(), 8);
    }

    #[test]
    fn under_filled_window_zero_pads_the_head() {
        let mut r: Ring<i32> = Ring::new(8);
        r.push(1);
        r.push(2);
        r.push(3);
        assert_eq!(r.read(8), vec![0, 0, 0, 0, 0, 1, 2, 3]);
    }

    #[test]
    fn full_window_reads_oldest_first() {
        let mut r: Ring<i32> = Ring::new(4);
        for v in 1..=10 {
            r.push(v);
        }
        // Last 4 pushes were 7, 8, 9, 10.
        assert_eq!(r.read(4), vec![7, 8, 9, 10]);
    }

    #[test]
    fn pop_returns_most_recent_push() {
        let mut r: Ring<i32> = Ring::new(4);
        r.push(1);
        r.push(2);
        assert_eq!(r.pop(), 2);
        assert_eq!(r.pop(), 1);
    }

    #[test]
    #[should_panic(expected = "empty ring buffer")]
    fn pop_from_empty_panics() {
        let mut r: Ring<i32> = Ring::new(4);
        r.pop();
    }

    #[test]
    fn clear_resets_the_window_to_defaults() {
        let mut r: Ring<i32> = Ring::new(4);
        r.push(1);
        r.push(2);
        r.clear();
        assert_eq!(r.read(4), vec![0, 0, 0, 0]);
    }
}
