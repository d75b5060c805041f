//! Reference Cross-Domain Messenger
//!
//! A transport endpoint that token contracts on one domain use to reach their
//! counterparts on another.
//!
//! # Outbound
//! 1. A contract calls `SendMessage` with a destination domain, target and payload
//! 2. The messenger assigns a nonce and emits a `sent_message` event
//!
//! # Inbound
//! 1. The relayer submits the observed message with `RelayMessage`
//! 2. The messenger checks the message was never relayed before
//! 3. The origin (domain + sender) is exposed through `CrossDomainContext`
//!    while the target executes the payload
//!
//! # Guarantees
//! - At-most-once delivery keyed by message hash
//! - Authenticated origin readable only during delivery
//! - Failed deliveries revert and can be retried

pub mod contract;
pub mod error;
pub mod hash;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
pub use crate::hash::{compute_message_hash, keccak256};
