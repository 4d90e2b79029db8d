pub mod document;
mod lenient;
pub mod offer;
pub mod pending;

pub use document::*;
pub use offer::*;
pub use pending::*;
