//! Word-frequency counting and the persistent aggregate

mod counter;
mod map;
mod store;

pub use counter::{count_text, count_words};
pub use map::WordFrequencyMap;
pub use store::{FrequencyStore, StoreError};
