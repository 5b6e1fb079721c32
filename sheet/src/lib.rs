pub mod error;
mod extract;
mod tint;
mod types;

pub use extract::*;
pub use tint::*;
pub use types::*;
