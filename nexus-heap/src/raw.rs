//! Heap algorithms over plain slices.
//!
//! These are the building blocks behind [`Heap`](crate::Heap), exposed for
//! callers that manage their own buffers. Every function takes the
//! [`Polarity`] as an argument, so max and min heaps run the same code.
//!
//! Layout is the usual implicit binary tree:
//!
//! ```text
//!             [0]
//!          /       \
//!       [1]         [2]
//!      /   \       /   \
//!    [3]   [4]   [5]   [6]
//!
//! parent(i) = (i - 1) / 2     children(i) = 2i + 1, 2i + 2
//! leaves    = len / 2 .. len
//! ```
//!
//! # Example
//!
//! ```
//! use nexus_heap::Polarity;
//! use nexus_heap::raw;
//!
//! let mut buf = vec![3, 1, 4, 1, 5, 9, 2, 6];
//! raw::heapify(&mut buf, Polarity::Max);
//!
//! assert!(raw::is_heap(&buf, Polarity::Max));
//! assert_eq!(buf[0], 9);
//!
//! let bottom = raw::find_bottom(&buf, Polarity::Max).unwrap();
//! assert_eq!(buf[bottom], 1);
//! ```

use crate::item::Item;
use crate::polarity::Polarity;

/// Moves the element at `pos` toward the root until its parent is strictly
/// better under `polarity`.
///
/// Ties keep climbing. O(log n).
///
/// # Panics
///
/// Panics if `pos >= heap.len()`.
pub fn sift_up<T: Item>(heap: &mut [T], polarity: Polarity, pos: usize) {
    assert!(pos < heap.len(), "sift_up position out of bounds");

    let mut hole = pos;
    while hole > 0 {
        let parent = (hole - 1) / 2;
        if polarity.prefers(&heap[parent], &heap[hole]) {
            break;
        }
        heap.swap(parent, hole);
        hole = parent;
    }
}

/// Moves the element at `pos` toward the leaves until it is strictly better
/// than the chosen child.
///
/// At each level the right child is chosen only if it is strictly better
/// than the left. Pass a shorter slice to sift within a prefix. O(log n).
///
/// # Panics
///
/// Panics if `pos >= heap.len()`.
pub fn sift_down<T: Item>(heap: &mut [T], polarity: Polarity, pos: usize) {
    assert!(pos < heap.len(), "sift_down position out of bounds");

    let len = heap.len();
    let mut hole = pos;
    loop {
        let left = 2 * hole + 1;
        if left >= len {
            break;
        }

        let right = left + 1;
        let child = if right < len && polarity.prefers(&heap[right], &heap[left]) {
            right
        } else {
            left
        };

        if polarity.prefers(&heap[hole], &heap[child]) {
            break;
        }
        heap.swap(hole, child);
        hole = child;
    }
}

/// Establishes heap order over the whole slice, bottom-up. O(n).
///
/// Visits every internal node from the last parent back to the root and
/// sifts it down.
pub fn heapify<T: Item>(heap: &mut [T], polarity: Polarity) {
    for pos in (0..heap.len() / 2).rev() {
        sift_down(heap, polarity, pos);
    }
}

/// Returns `true` if no child is strictly better than its parent.
pub fn is_heap<T: Item>(heap: &[T], polarity: Polarity) -> bool {
    (1..heap.len()).all(|i| !polarity.prefers(&heap[i], &heap[(i - 1) / 2]))
}

/// Returns the position of the opposite extreme: the minimum of a max-heap,
/// or the maximum of a min-heap.
///
/// An internal node is never worse than anything in its subtree, so the
/// opposite extreme always sits on a leaf and only `len / 2 ..` is scanned.
/// Ties resolve to the leftmost leaf. Returns `None` for an empty slice.
///
/// The slice must already be in heap order for `polarity`.
pub fn find_bottom<T: Item>(heap: &[T], polarity: Polarity) -> Option<usize> {
    if heap.is_empty() {
        return None;
    }

    let first_leaf = heap.len() / 2;
    let mut max = first_leaf;
    let mut min = first_leaf;

    for i in first_leaf + 1..heap.len() {
        if heap[max].less(&heap[i]) {
            max = i;
        }
        if heap[i].less(&heap[min]) {
            min = i;
        }
    }

    Some(match polarity {
        Polarity::Max => min,
        Polarity::Min => max,
    })
}
