pub(crate) mod range_set;
pub mod square;

pub(crate) use self::range_set::RangeSet;
pub use self::square::Square;

use linked_hash_set::LinkedHashSet;

/// An insertion-ordered set, used as a work queue that never holds duplicates
pub(crate) type LinkedAHashSet<T> = LinkedHashSet<T, ahash::RandomState>;
