pub mod config;
pub use config::*;

pub mod handlers;

pub mod host;
pub use host::*;

pub mod server;
pub use server::*;
