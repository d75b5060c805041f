//! Bridge authority handlers (Mint and Burn).
//!
//! These back the legacy conversion path: the bridge mints when value
//! arrives from the remote token and burns when it leaves.

use cosmwasm_std::{DepsMut, Event, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::ledger::{burn_from, mint_to, require_identity};
use crate::state::CONFIG;

/// Mint `amount` to `recipient`.
pub fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.bridge {
        return Err(ContractError::Unauthorized);
    }

    let to = deps.api.addr_validate(require_identity(&recipient)?)?;
    mint_to(deps.storage, &to, amount)?;

    Ok(Response::new()
        .add_event(
            Event::new("mint")
                .add_attribute("to", &to)
                .add_attribute("amount", amount),
        )
        .add_attribute("action", "mint")
        .add_attribute("to", to)
        .add_attribute("amount", amount))
}

/// Burn `amount` from `account`.
pub fn execute_burn(
    deps: DepsMut,
    info: MessageInfo,
    account: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.bridge {
        return Err(ContractError::Unauthorized);
    }

    let from = deps.api.addr_validate(require_identity(&account)?)?;
    burn_from(deps.storage, &from, amount)?;

    Ok(Response::new()
        .add_event(
            Event::new("burn")
                .add_attribute("from", &from)
                .add_attribute("amount", amount),
        )
        .add_attribute("action", "burn")
        .add_attribute("from", from)
        .add_attribute("amount", amount))
}
