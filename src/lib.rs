//! An unbalanced binary search tree mapping owned string keys to values.
//!
//! Keys are ordered by a caller-supplied [`KeyComparator`]. Values are never
//! inspected; when a destructor is installed it receives every value the map
//! discards (on replacement and on destruction).
//!
//! ```
//! use str_bst::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.put("b", 2).unwrap();
//! map.put("a", 1).unwrap();
//! map.put("c", 3).unwrap();
//!
//! assert_eq!(map.get("a"), Some(&1));
//! assert_eq!(map.remove("b"), Some(2));
//!
//! let keys: Vec<_> = map.cursor().unwrap().map(|(k, _)| k).collect();
//! assert_eq!(keys, ["a", "c"]);
//! ```

pub mod bst_base;
pub mod error;
pub mod ordered_map;

pub use bst_base::{
    bst_traits::{DestroyData, KeyComparator},
    iter::InOrderCursor,
    tree_stats::TreeStats,
    DefaultKeyComparator,
};
pub use error::Error;
pub use ordered_map::{DefaultOrderedMap, OrderedMap};
