pub mod choice;
pub use choice::*;

pub mod outcome;
pub use outcome::*;

pub mod slot;
pub use slot::*;
