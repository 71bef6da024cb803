//! Hook interface between a token pallet and its transfer policy.
//!
//! A token calls the matching `before_*` hook before mutating balances or
//! allowances, performs its own mutation, then calls the matching `after_*`
//! hook. A failure from either hook must abort the token operation. The
//! [`TransferHooks::guarded`] helper wraps that calling convention in a storage
//! layer so the token's own writes are discarded whenever a hook rejects.

use frame_support::{dispatch::DispatchResult, storage::with_storage_layer};
use sp_runtime::{DispatchError, RuntimeDebug};

/// Interface revision of the hook surface, read by tokens to select compatible
/// hook behavior across upgrades.
pub const POLICY_VERSION: u32 = 1;

/// A balance- or allowance-mutating token operation.
#[derive(Clone, PartialEq, Eq, RuntimeDebug)]
pub enum TokenOperation<AccountId, Balance> {
    /// `sender` moves its own funds to `recipient`.
    Transfer { sender: AccountId, recipient: AccountId, amount: Balance },
    /// `spender` moves funds owned by `sender` to `recipient`.
    TransferFrom { spender: AccountId, sender: AccountId, recipient: AccountId, amount: Balance },
    /// `owner` sets the allowance of `spender`.
    Approve { owner: AccountId, spender: AccountId, amount: Balance },
    /// `owner` raises the allowance of `spender` by `added`.
    IncreaseAllowance { owner: AccountId, spender: AccountId, added: Balance },
    /// `owner` lowers the allowance of `spender` by `subtracted`.
    DecreaseAllowance { owner: AccountId, spender: AccountId, subtracted: Balance },
}

/// Before/after hooks a token invokes around its state changes.
pub trait TransferHooks<AccountId, Balance: Copy> {
    fn before_transfer(sender: &AccountId, recipient: &AccountId, amount: Balance)
        -> DispatchResult;

    fn after_transfer(sender: &AccountId, recipient: &AccountId, amount: Balance)
        -> DispatchResult;

    /// `sender` is the owner of the funds, not the `spender` initiating the move.
    fn before_transfer_from(
        spender: &AccountId,
        sender: &AccountId,
        recipient: &AccountId,
        amount: Balance,
    ) -> DispatchResult;

    fn after_transfer_from(
        spender: &AccountId,
        sender: &AccountId,
        recipient: &AccountId,
        amount: Balance,
    ) -> DispatchResult;

    fn before_approve(owner: &AccountId, spender: &AccountId, amount: Balance) -> DispatchResult;

    fn after_approve(owner: &AccountId, spender: &AccountId, amount: Balance) -> DispatchResult;

    fn before_increase_allowance(
        owner: &AccountId,
        spender: &AccountId,
        added: Balance,
    ) -> DispatchResult;

    fn after_increase_allowance(
        owner: &AccountId,
        spender: &AccountId,
        added: Balance,
    ) -> DispatchResult;

    fn before_decrease_allowance(
        owner: &AccountId,
        spender: &AccountId,
        subtracted: Balance,
    ) -> DispatchResult;

    fn after_decrease_allowance(
        owner: &AccountId,
        spender: &AccountId,
        subtracted: Balance,
    ) -> DispatchResult;

    /// Interface revision implemented by this policy.
    fn version() -> u32;

    /// Runs the `before_*` hook matching `op`.
    fn before(op: &TokenOperation<AccountId, Balance>) -> DispatchResult {
        match op {
            TokenOperation::Transfer { sender, recipient, amount } => {
                Self::before_transfer(sender, recipient, *amount)
            },
            TokenOperation::TransferFrom { spender, sender, recipient, amount } => {
                Self::before_transfer_from(spender, sender, recipient, *amount)
            },
            TokenOperation::Approve { owner, spender, amount } => {
                Self::before_approve(owner, spender, *amount)
            },
            TokenOperation::IncreaseAllowance { owner, spender, added } => {
                Self::before_increase_allowance(owner, spender, *added)
            },
            TokenOperation::DecreaseAllowance { owner, spender, subtracted } => {
                Self::before_decrease_allowance(owner, spender, *subtracted)
            },
        }
    }

    /// Runs the `after_*` hook matching `op`.
    fn after(op: &TokenOperation<AccountId, Balance>) -> DispatchResult {
        match op {
            TokenOperation::Transfer { sender, recipient, amount } => {
                Self::after_transfer(sender, recipient, *amount)
            },
            TokenOperation::TransferFrom { spender, sender, recipient, amount } => {
                Self::after_transfer_from(spender, sender, recipient, *amount)
            },
            TokenOperation::Approve { owner, spender, amount } => {
                Self::after_approve(owner, spender, *amount)
            },
            TokenOperation::IncreaseAllowance { owner, spender, added } => {
                Self::after_increase_allowance(owner, spender, *added)
            },
            TokenOperation::DecreaseAllowance { owner, spender, subtracted } => {
                Self::after_decrease_allowance(owner, spender, *subtracted)
            },
        }
    }

    /// Runs `apply` between the before and after hooks of `op`.
    ///
    /// `apply` is never called when the before hook rejects. Storage written by
    /// `apply` is rolled back when `apply` itself or the after hook fails.
    fn guarded<R>(
        op: &TokenOperation<AccountId, Balance>,
        apply: impl FnOnce() -> Result<R, DispatchError>,
    ) -> Result<R, DispatchError> {
        with_storage_layer(|| {
            Self::before(op)?;
            let output = apply()?;
            Self::after(op)?;
            Ok(output)
        })
    }
}

/// Permissive policy: every hook succeeds.
impl<AccountId, Balance: Copy> TransferHooks<AccountId, Balance> for () {
    fn before_transfer(_: &AccountId, _: &AccountId, _: Balance) -> DispatchResult {
        Ok(())
    }

    fn after_transfer(_: &AccountId, _: &AccountId, _: Balance) -> DispatchResult {
        Ok(())
    }

    fn before_transfer_from(_: &AccountId, _: &AccountId, _: &AccountId, _: Balance) -> DispatchResult {
        Ok(())
    }

    fn after_transfer_from(_: &AccountId, _: &AccountId, _: &AccountId, _: Balance) -> DispatchResult {
        Ok(())
    }

    fn before_approve(_: &AccountId, _: &AccountId, _: Balance) -> DispatchResult {
        Ok(())
    }

    fn after_approve(_: &AccountId, _: &AccountId, _: Balance) -> DispatchResult {
        Ok(())
    }

    fn before_increase_allowance(_: &AccountId, _: &AccountId, _: Balance) -> DispatchResult {
        Ok(())
    }

    fn after_increase_allowance(_: &AccountId, _: &AccountId, _: Balance) -> DispatchResult {
        Ok(())
    }

    fn before_decrease_allowance(_: &AccountId, _: &AccountId, _: Balance) -> DispatchResult {
        Ok(())
    }

    fn after_decrease_allowance(_: &AccountId, _: &AccountId, _: Balance) -> DispatchResult {
        Ok(())
    }

    fn version() -> u32 {
        POLICY_VERSION
    }
}
