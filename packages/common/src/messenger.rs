//! Cross-domain messenger interface.
//!
//! Any messenger implementation a token is pointed at must accept
//! [`MessengerExecuteMsg::SendMessage`] and answer
//! [`MessengerQueryMsg::CrossDomainContext`] while it is delivering a message.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, QuerierWrapper, StdResult};

/// Execute messages a messenger must accept from token contracts.
#[cw_serde]
pub enum MessengerExecuteMsg {
    /// Queue `message` for at-most-once delivery to `target` on `destination`.
    SendMessage {
        /// Destination domain id
        destination: u64,
        /// Contract invoked with `message` on the destination domain
        target: String,
        /// JSON-encoded execute message for `target`
        message: Binary,
    },
}

/// Queries a messenger must answer.
#[cw_serde]
#[derive(QueryResponses)]
pub enum MessengerQueryMsg {
    /// Authenticated origin of the message currently being delivered.
    /// Fails when no delivery is in progress.
    #[returns(CrossDomainContextResponse)]
    CrossDomainContext {},
}

#[cw_serde]
pub struct CrossDomainContextResponse {
    /// Domain id the in-flight message was dispatched from
    pub origin_domain: u64,
    /// Identity that dispatched the in-flight message on its origin domain
    pub sender: String,
}

/// Read the authenticated origin of the in-flight message from `messenger`.
pub fn query_cross_domain_context(
    querier: &QuerierWrapper,
    messenger: &Addr,
) -> StdResult<CrossDomainContextResponse> {
    querier.query_wasm_smart(messenger, &MessengerQueryMsg::CrossDomainContext {})
}
