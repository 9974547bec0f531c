pub mod classify;
pub mod events;
pub mod tree;
