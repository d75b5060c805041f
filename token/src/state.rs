//! State definitions for the cross-domain token contract
//!
//! Balances and token info live in `cw20_base::state` so the library's
//! transfer and allowance handlers share the ledger with mint/burn.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;

pub use cw20_base::state::{TokenInfo, BALANCES, TOKEN_INFO};

/// Immutable contract configuration
#[cw_serde]
pub struct Config {
    /// Token this one converts from on the legacy bridge path
    pub remote_token: String,
    /// Identity allowed to call Mint/Burn directly
    pub bridge: Addr,
    /// Messenger used to dispatch and authenticate cross-domain messages
    pub messenger: Addr,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:xdomain-token";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const CONFIG: Item<Config> = Item::new("config");
