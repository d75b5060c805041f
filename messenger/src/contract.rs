//! Messenger Contract - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, Event, MessageInfo, Reply,
    Response, StdError, StdResult, SubMsg, WasmMsg,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::hash::{bytes32_to_hex, compute_message_hash};
use crate::msg::{
    ConfigResponse, CrossDomainContextResponse, ExecuteMsg, InstantiateMsg, IsRelayedResponse,
    MessageNonceResponse, MigrateMsg, QueryMsg, SentMessageHashResponse,
};
use crate::state::{
    Config, CrossDomainContext, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, CROSS_DOMAIN_CONTEXT,
    MESSAGE_NONCE, RELAY_REPLY_ID, SENT_MESSAGES, SUCCESSFUL_MESSAGES,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        domain_id: msg.domain_id,
        relayer: deps.api.addr_validate(&msg.relayer)?,
        admin: deps.api.addr_validate(&msg.admin)?,
    };
    CONFIG.save(deps.storage, &config)?;
    MESSAGE_NONCE.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("domain_id", config.domain_id.to_string())
        .add_attribute("relayer", config.relayer)
        .add_attribute("admin", config.admin))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SendMessage {
            destination,
            target,
            message,
        } => execute_send_message(deps, env, info, destination, target, message),
        ExecuteMsg::RelayMessage {
            source,
            nonce,
            sender,
            target,
            message,
        } => execute_relay_message(deps, env, info, source, nonce, sender, target, message),
        ExecuteMsg::UpdateRelayer { relayer } => execute_update_relayer(deps, info, relayer),
    }
}

fn execute_send_message(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    destination: u64,
    target: String,
    message: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if destination == config.domain_id {
        return Err(ContractError::MessageDestinationSameDomain {
            domain: destination,
        });
    }
    if target.trim().is_empty() {
        return Err(ContractError::ZeroAddress {
            field: "target".to_string(),
        });
    }
    // Bech32 is case-insensitive; the target is not validated locally
    if target.eq_ignore_ascii_case(env.contract.address.as_str()) {
        return Err(ContractError::MessageTargetMessenger);
    }

    let nonce = MESSAGE_NONCE.load(deps.storage)?;
    let next_nonce = nonce
        .checked_add(1)
        .ok_or_else(|| StdError::generic_err("Message nonce overflow"))?;
    MESSAGE_NONCE.save(deps.storage, &next_nonce)?;

    let sender = info.sender.to_string();
    let message_hash = compute_message_hash(
        destination,
        config.domain_id,
        nonce,
        &sender,
        &target,
        message.as_slice(),
    );
    SENT_MESSAGES.save(deps.storage, nonce, &message_hash)?;

    let event = Event::new("sent_message")
        .add_attribute("destination", destination.to_string())
        .add_attribute("source", config.domain_id.to_string())
        .add_attribute("target", &target)
        .add_attribute("sender", &sender)
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("message", message.to_base64())
        .add_attribute("message_hash", bytes32_to_hex(&message_hash));

    Ok(Response::new()
        .add_event(event)
        .add_attribute("action", "send_message")
        .add_attribute("nonce", nonce.to_string())
        .set_data(Binary::from(message_hash.to_vec())))
}

#[allow(clippy::too_many_arguments)]
fn execute_relay_message(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    source: u64,
    nonce: u64,
    sender: String,
    target: String,
    message: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.relayer {
        return Err(ContractError::Unauthorized);
    }

    if source == config.domain_id {
        return Err(ContractError::MessageSourceSameDomain { domain: source });
    }
    if sender.trim().is_empty() {
        return Err(ContractError::ZeroAddress {
            field: "sender".to_string(),
        });
    }
    let target_addr = deps.api.addr_validate(&target)?;
    if target_addr == env.contract.address {
        return Err(ContractError::MessageTargetMessenger);
    }
    if CROSS_DOMAIN_CONTEXT.may_load(deps.storage)?.is_some() {
        return Err(ContractError::ReentrantCall);
    }

    let message_hash = compute_message_hash(
        config.domain_id,
        source,
        nonce,
        &sender,
        &target,
        message.as_slice(),
    );
    if SUCCESSFUL_MESSAGES.has(deps.storage, &message_hash) {
        return Err(ContractError::MessageAlreadyRelayed {
            message_hash: bytes32_to_hex(&message_hash),
        });
    }
    SUCCESSFUL_MESSAGES.save(deps.storage, &message_hash, &true)?;

    CROSS_DOMAIN_CONTEXT.save(
        deps.storage,
        &CrossDomainContext {
            origin_domain: source,
            sender: sender.clone(),
        },
    )?;

    // A failing target reverts the whole delivery, so only success needs a reply.
    let delivery = SubMsg::reply_on_success(
        WasmMsg::Execute {
            contract_addr: target_addr.to_string(),
            msg: message,
            funds: vec![],
        },
        RELAY_REPLY_ID,
    );

    let event = Event::new("relayed_message")
        .add_attribute("source", source.to_string())
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("sender", sender)
        .add_attribute("target", target_addr)
        .add_attribute("message_hash", bytes32_to_hex(&message_hash));

    Ok(Response::new()
        .add_submessage(delivery)
        .add_event(event)
        .add_attribute("action", "relay_message")
        .add_attribute("nonce", nonce.to_string()))
}

fn execute_update_relayer(
    deps: DepsMut,
    info: MessageInfo,
    relayer: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::UnauthorizedAdmin);
    }

    config.relayer = deps.api.addr_validate(&relayer)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_relayer")
        .add_attribute("relayer", config.relayer))
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        RELAY_REPLY_ID => {
            CROSS_DOMAIN_CONTEXT.remove(deps.storage);
            Ok(Response::new().add_attribute("action", "relay_message_delivered"))
        }
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::CrossDomainContext {} => to_json_binary(&query_cross_domain_context(deps)?),
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::MessageNonce {} => to_json_binary(&MessageNonceResponse {
            nonce: MESSAGE_NONCE.load(deps.storage)?,
        }),
        QueryMsg::IsRelayed { message_hash } => to_json_binary(&IsRelayedResponse {
            relayed: SUCCESSFUL_MESSAGES.has(deps.storage, message_hash.as_slice()),
        }),
        QueryMsg::SentMessageHash { nonce } => to_json_binary(&SentMessageHashResponse {
            message_hash: SENT_MESSAGES
                .may_load(deps.storage, nonce)?
                .map(|hash| Binary::from(hash.to_vec())),
        }),
    }
}

fn query_cross_domain_context(deps: Deps) -> StdResult<CrossDomainContextResponse> {
    let context = CROSS_DOMAIN_CONTEXT
        .may_load(deps.storage)?
        .ok_or_else(|| StdError::generic_err("Cross-domain context not entered"))?;
    Ok(CrossDomainContextResponse {
        origin_domain: context.origin_domain,
        sender: context.sender,
    })
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        domain_id: config.domain_id,
        relayer: config.relayer,
        admin: config.admin,
    })
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};

    #[test]
    fn test_send_message_nonce_overflow_is_an_error() {
        let mut deps = mock_dependencies();
        instantiate(
            deps.as_mut(),
            mock_env(),
            mock_info("admin", &[]),
            InstantiateMsg {
                domain_id: 1,
                relayer: "relayer".to_string(),
                admin: "admin".to_string(),
            },
        )
        .unwrap();
        MESSAGE_NONCE.save(deps.as_mut().storage, &u64::MAX).unwrap();

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("user", &[]),
            ExecuteMsg::SendMessage {
                destination: 2,
                target: "remotetarget".to_string(),
                message: Binary::default(),
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("Message nonce overflow"));
        assert_eq!(MESSAGE_NONCE.load(&deps.storage).unwrap(), u64::MAX);
    }
}
