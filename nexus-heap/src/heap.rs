//! Shared binary heap with runtime polarity.
//!
//! [`Heap`] wraps an array-backed binary heap in a reader-writer lock, so a
//! single instance can sit behind an `Arc` and be used from many threads.
//! Readers never observe a half-sifted array: every method runs its whole
//! read or read-modify-write under the lock.

use core::fmt;

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::error::HeapError;
use crate::item::Item;
use crate::polarity::Polarity;
use crate::raw;

/// An array-backed binary heap ordered by [`Item::less`].
///
/// The [`Polarity`] is chosen at construction and never changes. Elements
/// are owned by the heap; every accessor that hands out elements returns
/// copies, so the live buffer is never aliased.
///
/// # Example
///
/// ```
/// use nexus_heap::{Heap, SimpleItem};
///
/// let items = [
///     SimpleItem::new("a", 3.0),
///     SimpleItem::new("b", 1.0),
///     SimpleItem::new("c", 4.0),
///     SimpleItem::new("d", 1.5),
/// ];
///
/// let heap = Heap::build_max(&items);
/// assert_eq!(heap.peek().unwrap().key(), 4.0);
///
/// // Opposite extreme, found among the leaves only
/// let (_, bottom) = heap.find_bottom().unwrap();
/// assert_eq!(bottom.key(), 1.0);
///
/// // Grows by one
/// heap.add(SimpleItem::new("e", 9.0));
/// assert_eq!(heap.len(), 5);
/// assert_eq!(*heap.peek().unwrap().payload(), "e");
/// ```
///
/// # Sharing
///
/// ```
/// use std::sync::Arc;
/// use std::thread;
/// use nexus_heap::Heap;
///
/// let heap: Arc<Heap<u64>> = Arc::new(Heap::build_min(&[]));
///
/// let handles: Vec<_> = (0..4u64)
///     .map(|t| {
///         let heap = Arc::clone(&heap);
///         thread::spawn(move || {
///             for i in 0..100 {
///                 heap.add(t * 100 + i);
///             }
///         })
///     })
///     .collect();
///
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(heap.len(), 400);
/// assert_eq!(heap.peek(), Some(0));
/// ```
pub struct Heap<T> {
    /// Heap-ordered elements.
    inner: RwLock<Vec<T>>,
    polarity: Polarity,
}

impl<T: Item> Heap<T> {
    /// Creates an empty heap.
    #[inline]
    pub fn new(polarity: Polarity) -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
            polarity,
        }
    }

    /// Creates an empty heap with room for `capacity` elements.
    #[inline]
    pub fn with_capacity(polarity: Polarity, capacity: usize) -> Self {
        Self {
            inner: RwLock::new(Vec::with_capacity(capacity)),
            polarity,
        }
    }

    /// Builds a heap from a copy of `initial`. O(n).
    ///
    /// The caller's slice is neither retained nor modified.
    pub fn build(polarity: Polarity, initial: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_vec(polarity, initial.to_vec())
    }

    /// Builds a max-heap from a copy of `initial`. O(n).
    #[inline]
    pub fn build_max(initial: &[T]) -> Self
    where
        T: Clone,
    {
        Self::build(Polarity::Max, initial)
    }

    /// Builds a min-heap from a copy of `initial`. O(n).
    #[inline]
    pub fn build_min(initial: &[T]) -> Self
    where
        T: Clone,
    {
        Self::build(Polarity::Min, initial)
    }

    /// Builds a heap that takes ownership of `items`. O(n).
    pub fn from_vec(polarity: Polarity, mut items: Vec<T>) -> Self {
        raw::heapify(&mut items, polarity);
        debug!(polarity = %polarity, len = items.len(), "built heap");

        Self {
            inner: RwLock::new(items),
            polarity,
        }
    }

    /// Returns the polarity chosen at construction.
    #[inline]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Returns the number of elements in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns `true` if the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Returns the capacity of the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.inner.read().capacity()
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns a copy of the element at heap position `index`.
    ///
    /// # Errors
    ///
    /// [`HeapError::IndexOutOfRange`] if `index >= len`.
    pub fn at(&self, index: usize) -> Result<T, HeapError>
    where
        T: Clone,
    {
        let heap = self.inner.read();
        heap.get(index).cloned().ok_or_else(|| {
            debug!(polarity = %self.polarity, index, len = heap.len(), "at rejected index");
            HeapError::IndexOutOfRange {
                index,
                len: heap.len(),
            }
        })
    }

    /// Returns a copy of the root: the maximum of a max-heap, the minimum of
    /// a min-heap.
    ///
    /// Returns `None` if the heap is empty.
    #[inline]
    pub fn peek(&self) -> Option<T>
    where
        T: Clone,
    {
        self.inner.read().first().cloned()
    }

    /// Returns a copy of every element in heap order (not sorted order).
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.read().clone()
    }

    /// Locates the opposite extreme: the minimum of a max-heap, or the
    /// maximum of a min-heap.
    ///
    /// Only leaf positions are scanned. With ties, the leftmost leaf holding
    /// the extreme value wins.
    ///
    /// # Errors
    ///
    /// [`HeapError::Empty`] if the heap has no elements.
    pub fn find_bottom(&self) -> Result<(usize, T), HeapError>
    where
        T: Clone,
    {
        let heap = self.inner.read();
        let index = raw::find_bottom(&heap, self.polarity).ok_or(HeapError::Empty)?;
        Ok((index, heap[index].clone()))
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Offers `value` to a heap of fixed size.
    ///
    /// An empty heap accepts the value as its only element. Otherwise the
    /// root is overwritten only when the candidate beats it in the
    /// *opposite* direction of the polarity:
    ///
    /// - max-heap: `value.less(root)`
    /// - min-heap: `root.less(value)`
    ///
    /// Returns `true` if the value was stored. The length never changes
    /// except on the empty-to-one transition. O(log n).
    ///
    /// ```
    /// use nexus_heap::Heap;
    ///
    /// let heap = Heap::build_max(&[5, 1, 2]);
    ///
    /// assert!(heap.insert_value(0));
    /// assert_eq!(heap.len(), 3);
    ///
    /// assert!(!heap.insert_value(9));
    /// ```
    pub fn insert_value(&self, value: T) -> bool {
        let mut heap = self.inner.write();

        if heap.is_empty() {
            heap.push(value);
            trace!(polarity = %self.polarity, "insert_value seeded empty heap");
            return true;
        }

        let replace = match self.polarity {
            Polarity::Max => value.less(&heap[0]),
            Polarity::Min => heap[0].less(&value),
        };
        if !replace {
            trace!(polarity = %self.polarity, len = heap.len(), "insert_value rejected");
            return false;
        }

        heap[0] = value;
        raw::sift_down(&mut heap, self.polarity, 0);
        trace!(polarity = %self.polarity, len = heap.len(), "insert_value replaced root");
        true
    }

    /// Appends `value` and sifts it toward the root. O(log n).
    pub fn add(&self, value: T) {
        let mut heap = self.inner.write();
        heap.push(value);

        let last = heap.len() - 1;
        raw::sift_up(&mut heap, self.polarity, last);
        trace!(polarity = %self.polarity, len = heap.len(), "add");
    }

    /// Removes the element at heap position `index`, then rebuilds heap
    /// order over the rest. O(n).
    ///
    /// Deleting from an empty heap is a no-op for any index.
    ///
    /// # Errors
    ///
    /// [`HeapError::IndexOutOfRange`] if the heap is non-empty and
    /// `index >= len`. The heap is left unchanged.
    pub fn delete(&self, index: usize) -> Result<(), HeapError> {
        let mut heap = self.inner.write();
        let len = heap.len();

        if len == 0 {
            return Ok(());
        }
        if index >= len {
            debug!(polarity = %self.polarity, index, len, "delete rejected index");
            return Err(HeapError::IndexOutOfRange { index, len });
        }

        heap.remove(index);
        raw::heapify(&mut heap, self.polarity);
        trace!(polarity = %self.polarity, index, len = heap.len(), "delete");
        Ok(())
    }

    /// Removes every element. The polarity is unchanged.
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Consumes the heap, returning its elements in heap order.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.inner.into_inner()
    }
}

impl<T: Item + Clone> Clone for Heap<T> {
    fn clone(&self) -> Self {
        Self {
            inner: RwLock::new(self.snapshot()),
            polarity: self.polarity,
        }
    }
}

impl<T> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("polarity", &self.polarity)
            .field("len", &self.inner.read().len())
            .finish()
    }
}

impl<T: Item> From<Heap<T>> for Vec<T> {
    #[inline]
    fn from(heap: Heap<T>) -> Self {
        heap.into_vec()
    }
}
