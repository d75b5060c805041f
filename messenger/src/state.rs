//! State definitions for the messenger contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

/// Messenger configuration
#[cw_serde]
pub struct Config {
    /// Domain id of the chain this messenger runs on
    pub domain_id: u64,
    /// Identity allowed to submit inbound messages
    pub relayer: Addr,
    /// Admin allowed to rotate the relayer
    pub admin: Addr,
}

/// Origin of the message currently being delivered
#[cw_serde]
pub struct CrossDomainContext {
    pub origin_domain: u64,
    pub sender: String,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:xdomain-messenger";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reply id for the target execution of a relayed message
pub const RELAY_REPLY_ID: u64 = 1;

pub const CONFIG: Item<Config> = Item::new("config");

/// Next outbound nonce
pub const MESSAGE_NONCE: Item<u64> = Item::new("message_nonce");

/// Outbound message hashes
/// Key: nonce, Value: 32-byte message hash
pub const SENT_MESSAGES: Map<u64, [u8; 32]> = Map::new("sent_messages");

/// Inbound message hashes that were delivered
/// Key: 32-byte message hash, Value: always true
pub const SUCCESSFUL_MESSAGES: Map<&[u8], bool> = Map::new("successful_messages");

/// Present only while a relayed message executes on its target
pub const CROSS_DOMAIN_CONTEXT: Item<CrossDomainContext> = Item::new("cross_domain_context");
