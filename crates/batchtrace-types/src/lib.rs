pub mod domain;
pub mod error;
pub mod event;

pub use domain::*;
pub use error::{Error, Result};
pub use event::*;
