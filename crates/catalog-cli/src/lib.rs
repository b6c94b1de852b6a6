//! Session and command line front end for grouped forward-fill of product
//! exports.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod session;
pub mod types;

pub use session::{Session, SessionError};
