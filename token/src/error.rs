//! Error types for the cross-domain token contract

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    /// Raised by the delegated cw20 ledger operations (transfer, allowances)
    #[error("{0}")]
    Cw20(#[from] cw20_base::ContractError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only the bridge can mint or burn")]
    Unauthorized,

    #[error("Unauthorized: caller is not the messenger")]
    CallerNotMessenger,

    #[error("Invalid cross-domain sender: {sender}")]
    InvalidCrossDomainSender { sender: String },

    // ========================================================================
    // Ledger Errors
    // ========================================================================

    #[error("Zero address: target identity must not be empty")]
    ZeroAddress,

    #[error("Insufficient balance: available {available}, required {required}")]
    InsufficientBalance {
        available: Uint128,
        required: Uint128,
    },

    #[error("Invalid token info: {reason}")]
    InvalidTokenInfo { reason: String },
}
