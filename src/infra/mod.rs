//! Infrastructure helpers that sit between the codec and its callers.
pub mod text;
