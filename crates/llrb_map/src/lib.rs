pub mod error;
pub mod impls;
pub mod queue;

/// Ordered map interface.
///
/// - Keys are unique.
/// - `insert` overwrites the existing value and returns the old one.
/// - `keys` yields every key in ascending order.
pub trait OrderedMap {
    type Key: Ord;
    type Value;

    fn new() -> Self;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, key: &Self::Key) -> Option<&Self::Value>;

    fn insert(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

    fn keys(&self) -> Queue<&Self::Key>;
}

pub use error::{LlrbError, Result};
pub use impls::{LlrbMap, StdBTreeMap};
pub use queue::Queue;
