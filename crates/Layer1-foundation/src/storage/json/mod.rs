//! JSON storage

mod store;

pub use store::JsonStore;
