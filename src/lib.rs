pub mod heap;
pub mod order;

pub use heap::{BinaryHeap, HeapError};
pub use order::{Compare, MaxOrder, MinOrder};
