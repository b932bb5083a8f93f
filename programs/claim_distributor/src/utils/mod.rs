pub mod merkle;
pub mod native;
pub mod token;

pub use merkle::*;
pub use native::*;
pub use token::*;
