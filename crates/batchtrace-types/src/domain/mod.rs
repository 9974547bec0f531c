pub mod batch;
pub mod view;

pub use batch::*;
pub use view::*;
