pub mod distributor_state;
pub mod nonce_state;
pub mod receipt_state;

pub use distributor_state::*;
pub use nonce_state::*;
pub use receipt_state::*;
