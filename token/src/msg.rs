//! Message types for the cross-domain token contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};
use cw20::{
    AllAccountsResponse, AllAllowancesResponse, AllowanceResponse, BalanceResponse, Expiration,
    TokenInfoResponse,
};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message. Every field is fixed for the contract's lifetime.
#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    /// Display precision only; never affects arithmetic
    pub decimals: u8,
    /// Token this one converts from on the legacy bridge path
    pub remote_token: String,
    /// Identity allowed to call Mint/Burn directly
    pub bridge: String,
    /// Messenger contract on this domain
    pub messenger: String,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Cross-Domain Transfers
    // ========================================================================
    /// Burn `amount` from the caller and dispatch a relay to `to` on
    /// `destination_domain`.
    ///
    /// Authorization: Any holder
    SendTransfer {
        to: String,
        amount: Uint128,
        destination_domain: u64,
    },

    /// Mint `amount` to `to` for a transfer sent from another domain.
    ///
    /// Authorization: Messenger only, and the authenticated cross-domain
    /// sender must be this contract
    RelayTransfer {
        /// Original sender on the origin domain (not validated locally)
        from: String,
        to: String,
        amount: Uint128,
    },

    // ========================================================================
    // Bridge Authority
    // ========================================================================
    /// Authorization: Bridge only
    Mint { recipient: String, amount: Uint128 },

    /// Authorization: Bridge only
    Burn { account: String, amount: Uint128 },

    // ========================================================================
    // Ledger (cw20)
    // ========================================================================
    Transfer {
        recipient: String,
        amount: Uint128,
    },
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
    Send {
        contract: String,
        amount: Uint128,
        msg: Binary,
    },
    SendFrom {
        owner: String,
        contract: String,
        amount: Uint128,
        msg: Binary,
    },
    IncreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    DecreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Bridge, messenger and remote token
    #[returns(ConfigResponse)]
    Config {},

    #[returns(BalanceResponse)]
    Balance { address: String },

    /// Name, symbol, decimals and total supply
    #[returns(TokenInfoResponse)]
    TokenInfo {},

    #[returns(AllowanceResponse)]
    Allowance { owner: String, spender: String },

    #[returns(AllAllowancesResponse)]
    AllAllowances {
        owner: String,
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(AllAccountsResponse)]
    AllAccounts {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct ConfigResponse {
    pub remote_token: String,
    pub bridge: Addr,
    pub messenger: Addr,
}
