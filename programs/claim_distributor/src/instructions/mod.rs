pub mod create_distributor;
pub mod set_claim_root;
pub mod set_fee;
pub mod toggle_active;
pub mod withdraw_native;
pub mod withdraw_tokens;
pub mod transfer_ownership;
pub mod claim;

pub use create_distributor::*;
pub use set_claim_root::*;
pub use set_fee::*;
pub use toggle_active::*;
pub use withdraw_native::*;
pub use withdraw_tokens::*;
pub use transfer_ownership::*;
pub use claim::*;
