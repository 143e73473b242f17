//! Ordering capability for heap elements.
//!
//! The heap never looks inside its elements. All it needs is a strict
//! "is less than" relation between two values of the same type, which is
//! what [`Item`] provides. Taking `&Self` on the right-hand side means two
//! unrelated kinds can never be compared against each other.

use core::cmp::Reverse;

/// A value with a strict ordering against values of the same type.
///
/// `less` must be irreflexive and transitive. Values where neither
/// `a.less(b)` nor `b.less(a)` holds are treated as ties.
///
/// # Example
///
/// ```
/// use nexus_heap::Item;
///
/// #[derive(Clone)]
/// struct Order {
///     price: u64,
///     id: u32,
/// }
///
/// impl Item for Order {
///     fn less(&self, other: &Self) -> bool {
///         self.price < other.price
///     }
/// }
///
/// let a = Order { price: 10, id: 1 };
/// let b = Order { price: 12, id: 2 };
/// assert!(a.less(&b));
/// assert!(!b.less(&a));
/// ```
pub trait Item {
    /// Returns `true` if `self` orders strictly before `other`.
    fn less(&self, other: &Self) -> bool;
}

macro_rules! impl_item_for_primitive {
    ($($ty:ty),*) => {
        $(
            impl Item for $ty {
                #[inline]
                fn less(&self, other: &Self) -> bool {
                    *self < *other
                }
            }
        )*
    };
}

impl_item_for_primitive!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64
);

impl<T: Item> Item for Reverse<T> {
    #[inline]
    fn less(&self, other: &Self) -> bool {
        other.0.less(&self.0)
    }
}

/// An opaque payload ordered by a numeric key.
///
/// Only `key` takes part in ordering; the payload rides along untouched.
/// There is no way to mutate either field once the item is built.
///
/// # Example
///
/// ```
/// use nexus_heap::{Item, SimpleItem};
///
/// let near = SimpleItem::new("near", 0.5);
/// let far = SimpleItem::new("far", 3.25);
///
/// assert!(near.less(&far));
/// assert_eq!(*far.payload(), "far");
/// assert_eq!(far.key(), 3.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimpleItem<P> {
    payload: P,
    key: f64,
}

impl<P> SimpleItem<P> {
    /// Pairs `payload` with the ordering `key`.
    #[inline]
    pub const fn new(payload: P, key: f64) -> Self {
        Self { payload, key }
    }

    /// Returns the payload.
    #[inline]
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Returns the ordering key.
    #[inline]
    pub fn key(&self) -> f64 {
        self.key
    }

    /// Consumes the item, returning the payload.
    #[inline]
    pub fn into_payload(self) -> P {
        self.payload
    }
}

impl<P> Item for SimpleItem<P> {
    #[inline]
    fn less(&self, other: &Self) -> bool {
        self.key < other.key
    }
}
