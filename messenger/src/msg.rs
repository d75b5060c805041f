//! Message types for the messenger contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary};

pub use common::CrossDomainContextResponse;

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Domain id of the chain this messenger is deployed on
    pub domain_id: u64,
    /// Identity allowed to deliver inbound messages
    pub relayer: String,
    /// Admin allowed to rotate the relayer
    pub admin: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Queue a message for delivery on another domain.
    ///
    /// Authorization: Anyone (the caller becomes the authenticated sender)
    SendMessage {
        destination: u64,
        target: String,
        message: Binary,
    },

    /// Deliver a message dispatched on another domain.
    ///
    /// Authorization: Relayer only
    RelayMessage {
        /// Domain the message was dispatched from
        source: u64,
        /// Nonce assigned by the source messenger
        nonce: u64,
        /// Identity that called `SendMessage` on the source domain
        sender: String,
        target: String,
        message: Binary,
    },

    /// Authorization: Admin only
    UpdateRelayer { relayer: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Origin of the message being delivered. Fails outside a delivery.
    #[returns(CrossDomainContextResponse)]
    CrossDomainContext {},

    #[returns(ConfigResponse)]
    Config {},

    /// Nonce the next outbound message will get
    #[returns(MessageNonceResponse)]
    MessageNonce {},

    #[returns(IsRelayedResponse)]
    IsRelayed { message_hash: Binary },

    #[returns(SentMessageHashResponse)]
    SentMessageHash { nonce: u64 },
}

#[cw_serde]
pub struct ConfigResponse {
    pub domain_id: u64,
    pub relayer: Addr,
    pub admin: Addr,
}

#[cw_serde]
pub struct MessageNonceResponse {
    pub nonce: u64,
}

#[cw_serde]
pub struct IsRelayedResponse {
    pub relayed: bool,
}

#[cw_serde]
pub struct SentMessageHashResponse {
    pub message_hash: Option<Binary>,
}
