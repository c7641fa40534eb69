pub mod arena;
pub use arena::*;

pub mod error;
pub use error::*;

pub mod game;
pub use game::*;

pub mod report;
pub use report::*;

pub mod rules;
pub use rules::*;
