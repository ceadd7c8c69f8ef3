//! Ring-buffer-backed sequence structures.
//!
//! Two types: [`RingBuf`], a growable double-ended queue over a circular,
//! power-of-two backing array with arbitrary-position insertion and
//! removal, and [`SortedBuf`], a comparator-ordered view that layers
//! binary-search positioning over a `RingBuf` it owns.
//!
//! # Quick Start
//!
//! ```
//! use ringlist::RingBuf;
//! use ringlist::SortedBuf;
//!
//! let mut buf = RingBuf::new();
//! buf.push_back(2);
//! buf.push_back(3);
//! buf.push_front(1);
//! assert_eq!(buf.to_vec(), vec![1, 2, 3]);
//!
//! let mut sorted = SortedBuf::new();
//! for value in [5, 2, 8, 1] {
//!     sorted.insert(value);
//! }
//! assert_eq!(sorted.to_vec(), vec![1, 2, 5, 8]);
//! assert_eq!(sorted.lower_bound(&3), 1);
//! ```

pub mod ring;
pub mod sorted;

pub use ring::RingBuf;
pub use sorted::CmpFn;
pub use sorted::Compare;
pub use sorted::Natural;
pub use sorted::SortedBuf;
