pub mod busy;
pub mod client;
pub mod config;
pub mod consts;
pub mod error;
pub mod io;
pub mod payload;
pub mod prompt;
pub mod session;
