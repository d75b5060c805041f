//! Cross-Domain Token - Burn/Mint Transfers Between Isolated Domains
//!
//! A fungible token that is also its own bridge endpoint. The same contract is
//! deployed at the same address on every domain and only trusts messages that
//! one of its instances dispatched.
//!
//! # Outgoing Flow (Send)
//! 1. Holder calls `SendTransfer` with a recipient and destination domain
//! 2. The amount is burned from the holder
//! 3. A `RelayTransfer` payload addressed to this contract is handed to the messenger
//!
//! # Incoming Flow (Relay)
//! 1. The messenger on the destination domain delivers the payload
//! 2. The contract checks the caller is the messenger and that the
//!    authenticated sender is this contract
//! 3. The amount is minted to the recipient
//!
//! # Security
//! - Mint/Burn gated to the bridge authority
//! - Relay gated to the messenger
//! - Self-addressing check on every relay
//! - Replay protection delegated to the messenger's at-most-once delivery

pub mod contract;
pub mod error;
mod execute;
pub mod ledger;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
