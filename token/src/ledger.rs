//! Supply bookkeeping primitives.
//!
//! `mint_to` and `burn_from` are the only code paths that change total
//! supply. They perform no authorization; callers gate them.

use cosmwasm_std::{Addr, StdError, StdResult, Storage, Uint128};

use crate::error::ContractError;
use crate::state::{BALANCES, TOKEN_INFO};

/// Reject the null identity (empty or whitespace-only).
pub fn require_identity(identity: &str) -> Result<&str, ContractError> {
    if identity.trim().is_empty() {
        return Err(ContractError::ZeroAddress);
    }
    Ok(identity)
}

/// Credit `amount` to `to` and grow total supply by the same amount.
pub fn mint_to(storage: &mut dyn Storage, to: &Addr, amount: Uint128) -> Result<(), ContractError> {
    let mut token_info = TOKEN_INFO.load(storage)?;
    token_info.total_supply = token_info
        .total_supply
        .checked_add(amount)
        .map_err(StdError::from)?;
    TOKEN_INFO.save(storage, &token_info)?;

    BALANCES.update(storage, to, |balance| -> StdResult<_> {
        Ok(balance.unwrap_or_default().checked_add(amount)?)
    })?;
    Ok(())
}

/// Debit `amount` from `from` and shrink total supply by the same amount.
pub fn burn_from(
    storage: &mut dyn Storage,
    from: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    let available = BALANCES.may_load(storage, from)?.unwrap_or_default();
    let remaining = available
        .checked_sub(amount)
        .map_err(|_| ContractError::InsufficientBalance {
            available,
            required: amount,
        })?;
    BALANCES.save(storage, from, &remaining)?;

    let mut token_info = TOKEN_INFO.load(storage)?;
    token_info.total_supply = token_info
        .total_supply
        .checked_sub(amount)
        .map_err(StdError::from)?;
    TOKEN_INFO.save(storage, &token_info)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TokenInfo;
    use cosmwasm_std::testing::mock_dependencies;

    fn init_token(storage: &mut dyn Storage) {
        TOKEN_INFO
            .save(
                storage,
                &TokenInfo {
                    name: "Superchain Token".to_string(),
                    symbol: "SCT".to_string(),
                    decimals: 6,
                    total_supply: Uint128::zero(),
                    mint: None,
                },
            )
            .unwrap();
    }

    fn supply(storage: &dyn Storage) -> Uint128 {
        TOKEN_INFO.load(storage).unwrap().total_supply
    }

    fn balance(storage: &dyn Storage, addr: &Addr) -> Uint128 {
        BALANCES.may_load(storage, addr).unwrap().unwrap_or_default()
    }

    #[test]
    fn test_require_identity() {
        assert_eq!(require_identity("terra1user").unwrap(), "terra1user");
        assert_eq!(require_identity(""), Err(ContractError::ZeroAddress));
        assert_eq!(require_identity("   "), Err(ContractError::ZeroAddress));
    }

    #[test]
    fn test_mint_then_burn_keeps_supply_equal_to_balances() {
        let mut deps = mock_dependencies();
        init_token(deps.as_mut().storage);
        let alice = Addr::unchecked("terra1alice");
        let bob = Addr::unchecked("terra1bob");

        mint_to(deps.as_mut().storage, &alice, Uint128::new(100)).unwrap();
        mint_to(deps.as_mut().storage, &bob, Uint128::new(50)).unwrap();
        burn_from(deps.as_mut().storage, &alice, Uint128::new(30)).unwrap();

        let storage = deps.as_ref().storage;
        assert_eq!(balance(storage, &alice), Uint128::new(70));
        assert_eq!(balance(storage, &bob), Uint128::new(50));
        assert_eq!(supply(storage), Uint128::new(120));
    }

    #[test]
    fn test_burn_more_than_balance_changes_nothing() {
        let mut deps = mock_dependencies();
        init_token(deps.as_mut().storage);
        let alice = Addr::unchecked("terra1alice");
        mint_to(deps.as_mut().storage, &alice, Uint128::new(10)).unwrap();

        let err = burn_from(deps.as_mut().storage, &alice, Uint128::new(11)).unwrap_err();
        assert_eq!(
            err,
            ContractError::InsufficientBalance {
                available: Uint128::new(10),
                required: Uint128::new(11),
            }
        );
        assert_eq!(balance(deps.as_ref().storage, &alice), Uint128::new(10));
        assert_eq!(supply(deps.as_ref().storage), Uint128::new(10));
    }

    #[test]
    fn test_burn_from_unknown_account() {
        let mut deps = mock_dependencies();
        init_token(deps.as_mut().storage);

        let err = burn_from(
            deps.as_mut().storage,
            &Addr::unchecked("terra1nobody"),
            Uint128::new(1),
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::InsufficientBalance { .. }));
    }

    #[test]
    fn test_mint_overflow_is_rejected() {
        let mut deps = mock_dependencies();
        init_token(deps.as_mut().storage);
        let alice = Addr::unchecked("terra1alice");

        mint_to(deps.as_mut().storage, &alice, Uint128::MAX).unwrap();
        assert!(mint_to(deps.as_mut().storage, &alice, Uint128::one()).is_err());
        assert_eq!(supply(deps.as_ref().storage), Uint128::MAX);
    }
}
