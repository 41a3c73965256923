//! Small browser utilities.

pub mod token_store;
