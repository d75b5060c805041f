//! Execute handlers for the cross-domain token contract.
//!
//! - `bridge` - Mint and Burn gated to the bridge authority
//! - `crosschain` - SendTransfer and RelayTransfer

mod bridge;
mod crosschain;

pub use bridge::*;
pub use crosschain::*;
