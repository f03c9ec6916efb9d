mod errors;
mod fetch;

pub use errors::*;
pub use fetch::*;
