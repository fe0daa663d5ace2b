mod error;
pub mod result;
mod root;
mod wake;

pub use error::WakeError;
pub use root::*;
pub use wake::*;
