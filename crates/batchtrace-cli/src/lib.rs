// NOTE: batchtrace layering
//
// - batchtrace-types: input/output records only (events, batch nodes, view nodes)
// - batchtrace-engine: pure functions over those records, no IO and no logging
// - this crate: everything that touches the outside world (files, stdin,
//   config, logging, terminal output)
//
// Input is validated and coerced here, at the boundary. The engine stays total
// and never rejects a well-typed record.

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod loader;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
