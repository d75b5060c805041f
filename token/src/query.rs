//! Query handlers for the cross-domain token contract.

use cosmwasm_std::{Deps, StdResult};

use crate::msg::ConfigResponse;
use crate::state::CONFIG;

/// Query the immutable contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        remote_token: config.remote_token,
        bridge: config.bridge,
        messenger: config.messenger,
    })
}
