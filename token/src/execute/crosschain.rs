//! Cross-domain transfer handlers (SendTransfer and RelayTransfer).
//!
//! A transfer is `Initiated` once `SendTransfer` has burned and dispatched,
//! and `Relayed` once the destination instance has minted. Nothing in
//! between is persisted; the messenger's delivery log is the only record of
//! in-flight transfers.

use cosmwasm_std::{to_json_binary, DepsMut, Env, Event, MessageInfo, Response, Uint128, WasmMsg};

use common::{query_cross_domain_context, MessengerExecuteMsg};

use crate::error::ContractError;
use crate::ledger::{burn_from, mint_to, require_identity};
use crate::msg::ExecuteMsg;
use crate::state::CONFIG;

/// Burn from the caller and dispatch a relay addressed to this contract on
/// `destination_domain`.
///
/// `to` is validated as a local address before anything is burned; the
/// destination instance mints under the same address scheme. If the message
/// is never delivered the burned amount is not minted anywhere; there is no
/// refund path.
pub fn execute_send_transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    to: String,
    amount: Uint128,
    destination_domain: u64,
) -> Result<Response, ContractError> {
    require_identity(&to)?;
    let recipient = deps.api.addr_validate(&to)?;
    let config = CONFIG.load(deps.storage)?;

    burn_from(deps.storage, &info.sender, amount)?;

    let payload = to_json_binary(&ExecuteMsg::RelayTransfer {
        from: info.sender.to_string(),
        to: recipient.to_string(),
        amount,
    })?;
    let dispatch = WasmMsg::Execute {
        contract_addr: config.messenger.to_string(),
        msg: to_json_binary(&MessengerExecuteMsg::SendMessage {
            destination: destination_domain,
            target: env.contract.address.to_string(),
            message: payload,
        })?,
        funds: vec![],
    };

    let event = Event::new("sent_transfer")
        .add_attribute("sender", &info.sender)
        .add_attribute("to", &recipient)
        .add_attribute("amount", amount)
        .add_attribute("destination_domain", destination_domain.to_string());

    Ok(Response::new()
        .add_message(dispatch)
        .add_event(event)
        .add_attribute("action", "send_transfer")
        .add_attribute("sender", info.sender)
        .add_attribute("to", recipient)
        .add_attribute("amount", amount)
        .add_attribute("destination_domain", destination_domain.to_string()))
}

/// Mint a transfer delivered by the messenger.
///
/// Only messages whose authenticated sender is this contract are honored,
/// so nothing but a `SendTransfer` on another domain can trigger a mint.
pub fn execute_relay_transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    from: String,
    to: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    require_identity(&to)?;
    let config = CONFIG.load(deps.storage)?;

    if info.sender != config.messenger {
        return Err(ContractError::CallerNotMessenger);
    }

    let context = query_cross_domain_context(&deps.querier, &config.messenger)?;
    if context.sender != env.contract.address.as_str() {
        return Err(ContractError::InvalidCrossDomainSender {
            sender: context.sender,
        });
    }

    let recipient = deps.api.addr_validate(&to)?;
    mint_to(deps.storage, &recipient, amount)?;

    let event = Event::new("relayed_transfer")
        .add_attribute("from", &from)
        .add_attribute("to", &recipient)
        .add_attribute("amount", amount)
        .add_attribute("origin_domain", context.origin_domain.to_string());

    Ok(Response::new()
        .add_event(event)
        .add_attribute("action", "relay_transfer")
        .add_attribute("from", from)
        .add_attribute("to", recipient)
        .add_attribute("amount", amount)
        .add_attribute("origin_domain", context.origin_domain.to_string()))
}
