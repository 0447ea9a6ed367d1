pub mod client;
pub mod entry;
pub mod normalize;

pub use client::{DictionaryClient, DictionaryError};
pub use entry::{Definition, Meaning, WordEntry};
pub use normalize::{DefaultNormalizer, QueryNormalizer};
