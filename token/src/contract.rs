//! Cross-Domain Token Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Cross-domain and bridge authority handlers
//! - `ledger` - Supply bookkeeping shared by those handlers
//! - `query` - Configuration queries
//!
//! Transfer, allowance and balance handling is delegated to `cw20_base`.

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;
use cw20_base::allowances::{
    execute_decrease_allowance, execute_increase_allowance, execute_send_from,
    execute_transfer_from, query_allowance,
};
use cw20_base::contract::{execute_send, execute_transfer, query_balance, query_token_info};
use cw20_base::enumerable::{query_all_accounts, query_owner_allowances};

use crate::error::ContractError;
use crate::execute::{execute_burn, execute_mint, execute_relay_transfer, execute_send_transfer};
use crate::ledger::require_identity;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::query_config;
use crate::state::{Config, TokenInfo, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, TOKEN_INFO};

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

    validate_token_info(&msg.name, &msg.symbol, msg.decimals)?;
    let remote_token = require_identity(&msg.remote_token)?.to_string();
    let bridge = deps.api.addr_validate(require_identity(&msg.bridge)?)?;
    let messenger = deps.api.addr_validate(require_identity(&msg.messenger)?)?;

    // Supply starts at zero; only mint can create it.
    TOKEN_INFO.save(
        deps.storage,
        &TokenInfo {
            name: msg.name.clone(),
            symbol: msg.symbol.clone(),
            decimals: msg.decimals,
            total_supply: Uint128::zero(),
            mint: None,
        },
    )?;

    let config = Config {
        remote_token,
        bridge,
        messenger,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("name", msg.name)
        .add_attribute("symbol", msg.symbol)
        .add_attribute("decimals", msg.decimals.to_string())
        .add_attribute("remote_token", config.remote_token)
        .add_attribute("bridge", config.bridge)
        .add_attribute("messenger", config.messenger))
}

/// Same bounds cw20-base applies to its own instantiate message.
fn validate_token_info(name: &str, symbol: &str, decimals: u8) -> Result<(), ContractError> {
    if !(3..=50).contains(&name.len()) {
        return Err(ContractError::InvalidTokenInfo {
            reason: "name must be 3-50 bytes".to_string(),
        });
    }
    if !(3..=12).contains(&symbol.len())
        || !symbol.bytes().all(|b| b.is_ascii_alphabetic() || b == b'-')
    {
        return Err(ContractError::InvalidTokenInfo {
            reason: "symbol must be 3-12 letters or '-'".to_string(),
        });
    }
    if decimals > 18 {
        return Err(ContractError::InvalidTokenInfo {
            reason: "decimals must not exceed 18".to_string(),
        });
    }
    Ok(())
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
        // Cross-domain transfers
        ExecuteMsg::SendTransfer {
            to,
            amount,
            destination_domain,
        } => execute_send_transfer(deps, env, info, to, amount, destination_domain),
        ExecuteMsg::RelayTransfer { from, to, amount } => {
            execute_relay_transfer(deps, env, info, from, to, amount)
        }

        // Bridge authority
        ExecuteMsg::Mint { recipient, amount } => execute_mint(deps, info, recipient, amount),
        ExecuteMsg::Burn { account, amount } => execute_burn(deps, info, account, amount),

        // Ledger
        ExecuteMsg::Transfer { recipient, amount } => {
            Ok(execute_transfer(deps, env, info, recipient, amount)?)
        }
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => Ok(execute_transfer_from(
            deps, env, info, owner, recipient, amount,
        )?),
        ExecuteMsg::Send {
            contract,
            amount,
            msg,
        } => Ok(execute_send(deps, env, info, contract, amount, msg)?),
        ExecuteMsg::SendFrom {
            owner,
            contract,
            amount,
            msg,
        } => Ok(execute_send_from(
            deps, env, info, owner, contract, amount, msg,
        )?),
        ExecuteMsg::IncreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(execute_increase_allowance(
            deps, env, info, spender, amount, expires,
        )?),
        ExecuteMsg::DecreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(execute_decrease_allowance(
            deps, env, info, spender, amount, expires,
        )?),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&query_allowance(deps, owner, spender)?)
        }
        QueryMsg::AllAllowances {
            owner,
            start_after,
            limit,
        } => to_json_binary(&query_owner_allowances(deps, owner, start_after, limit)?),
        QueryMsg::AllAccounts { start_after, limit } => {
            to_json_binary(&query_all_accounts(deps, start_after, limit)?)
        }
    }
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

    #[test]
    fn test_validate_token_info() {
        assert!(validate_token_info("Superchain Token", "SCT", 6).is_ok());
        assert!(validate_token_info("Superchain Token", "S-CT", 18).is_ok());

        assert!(validate_token_info("ab", "SCT", 6).is_err());
        assert!(validate_token_info("Superchain Token", "SC", 6).is_err());
        assert!(validate_token_info("Superchain Token", "SCT1", 6).is_err());
        assert!(validate_token_info("Superchain Token", "SCT", 19).is_err());
    }
}
