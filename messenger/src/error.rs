//! Error types for the messenger contract

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only the relayer can deliver messages")]
    Unauthorized,

    #[error("Unauthorized: only admin can perform this action")]
    UnauthorizedAdmin,

    #[error("Zero address: {field} must not be empty")]
    ZeroAddress { field: String },

    #[error("Message destination is this domain: {domain}")]
    MessageDestinationSameDomain { domain: u64 },

    #[error("Message source is this domain: {domain}")]
    MessageSourceSameDomain { domain: u64 },

    #[error("Message target cannot be the messenger")]
    MessageTargetMessenger,

    #[error("Message already relayed: {message_hash}")]
    MessageAlreadyRelayed { message_hash: String },

    #[error("Reentrant call: a message is already being delivered")]
    ReentrantCall,

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },
}
