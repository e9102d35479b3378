//! `rb-ordered-set` is an ordered set based on a red-black tree.
//!
//! It fully implements the insertion and deletion functionality of a red-black tree,
//! ensuring that each modification operation requires at most O(logN) time complexity.
//!
//! To safely and efficiently handle insertion and deletion operations in Rust,
//! `rb-ordered-set` uses arrays to simulate pointers for managing the parent-child
//! references in the red-black tree. This approach also ensures that `OrderedSet` has the
//! `Send` and `Unpin` traits, allowing it to be safely transferred between threads and
//! to maintain a fixed memory location during asynchronous operations.
//!
//! # Example
//!
//! ```rust
//! use rb_ordered_set::OrderedSet;
//!
//! let mut set = OrderedSet::new();
//! set.insert(123456);
//! assert!(set.contains(&123456));
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![123456]);
//! ```
//!

mod index;
mod iter;
mod node;
mod set;


pub use index::{DefaultIx, IndexType, NodeIndex};
pub use iter::{IntoIter, Iter, RangeIter};
pub use set::OrderedSet;
