//! Array-backed binary heap with a polarity chosen at build time.
//!
//! A [`Heap`] keeps either its maximum or its minimum at the root, decided by
//! a [`Polarity`] fixed for the life of the instance. Elements only need to
//! implement [`Item`], a strict "less than" against their own type.
//!
//! Beyond the usual grow-by-one [`add`](Heap::add), the heap supports:
//!
//! - **Bounded replacement**: [`insert_value`](Heap::insert_value) overwrites
//!   the root in place without growing the heap.
//! - **Bottom search**: [`find_bottom`](Heap::find_bottom) finds the opposite
//!   extreme by scanning only the leaves.
//! - **Positional delete**: [`delete`](Heap::delete) removes any position and
//!   re-heapifies.
//!
//! # Quick Start
//!
//! ```
//! use nexus_heap::{Heap, HeapError, SimpleItem};
//!
//! let heap = Heap::build_max(&[
//!     SimpleItem::new("x", 3.0),
//!     SimpleItem::new("y", 1.0),
//!     SimpleItem::new("z", 4.0),
//! ]);
//!
//! assert_eq!(heap.peek().unwrap().key(), 4.0);
//!
//! let (index, bottom) = heap.find_bottom()?;
//! assert_eq!(bottom.key(), 1.0);
//!
//! heap.delete(index)?;
//! assert_eq!(heap.len(), 2);
//! # Ok::<(), HeapError>(())
//! ```
//!
//! # Concurrency
//!
//! Every method takes `&self`. Reads share a lock, mutations hold it
//! exclusively, and each call is atomic with respect to the others. Wrap the
//! heap in an `Arc` to share it.
//!
//! | Operation | Lock | Cost |
//! |-----------|------|------|
//! | `len`, `at`, `peek` | shared | O(1) |
//! | `snapshot` | shared | O(n) copy |
//! | `find_bottom` | shared | O(n/2) |
//! | `add`, `insert_value` | exclusive | O(log n) |
//! | `delete` | exclusive | O(n) |
//!
//! # Raw algorithms
//!
//! The sift, heapify and bottom-search routines live in [`raw`] and operate
//! on plain slices.
//!
//! # Feature Flags
//!
//! - `serde` - Derive `Serialize`/`Deserialize` for [`Polarity`] and
//!   [`SimpleItem`]

#![warn(missing_docs)]

pub mod error;
pub mod heap;
pub mod item;
pub mod polarity;
pub mod raw;

pub use error::{HeapError, ParsePolarityError};
pub use heap::Heap;
pub use item::{Item, SimpleItem};
pub use polarity::Polarity;
