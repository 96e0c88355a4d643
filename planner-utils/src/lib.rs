mod input;
pub use input::*;
mod json;
pub use json::*;
mod number;
pub use number::*;
