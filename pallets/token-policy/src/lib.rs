#![cfg_attr(not(feature = "std"), no_std)]
// `#[pallet::getter]` and the pallet-level `RuntimeEvent` are deprecated upstream
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

//! # Token Policy Pallet
//!
//! Authorization and transfer-gating controller for a token pallet.
//!
//! - Three privileged roles: `admin`, `recovery_admin` and `pause_admin`.
//! - The recovery admin rotates the other two roles, maintains the blacklist and
//!   hands its own role over through a two-phase commit/reveal protocol.
//! - The pause admin toggles a global pause flag.
//! - A token calls the [`TransferHooks`] implementation around every transfer,
//!   approval and allowance change so the policy can veto it.

use codec::{Decode, Encode, MaxEncodedLen};
use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*, traits::EnsureOrigin};
use frame_system::{ensure_signed, pallet_prelude::*};
use scale_info::TypeInfo;
use sp_runtime::{traits::Hash, RuntimeDebug};
use sp_std::prelude::*;

pub use pallet::*;
pub use traits::{TokenOperation, TransferHooks, POLICY_VERSION};
pub use weights::WeightInfo;

pub mod migrations;
pub mod traits;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub(crate) const LOG_TARGET: &str = "pallet-token-policy";

/// A privileged role slot.
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum Role {
    Admin,
    RecoveryAdmin,
    PauseAdmin,
}

/// Outstanding recovery-admin handoff: the only account allowed to accept it
/// and the hash of the secret it must reveal.
#[derive(Clone, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug)]
pub struct RecoveryHandoff<AccountId, Hash> {
    pub candidate: AccountId,
    pub commitment: Hash,
}

pub type RecoveryHandoffOf<T> =
    RecoveryHandoff<<T as frame_system::Config>::AccountId, <T as frame_system::Config>::Hash>;

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Origin allowed to perform the one-time role initialization.
        type InitializeOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        /// Whether `before_*` hooks reject while the pallet is paused.
        #[pallet::constant]
        type EnforcePause: Get<bool>;

        /// Longest secret `accept_recovery_admin` accepts.
        #[pallet::constant]
        type MaxSecretLen: Get<u32>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Admin role holder
    #[pallet::storage]
    #[pallet::getter(fn admin)]
    pub type Admin<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Recovery admin role holder. Rotates the other roles and owns the blacklist.
    #[pallet::storage]
    #[pallet::getter(fn recovery_admin)]
    pub type RecoveryAdmin<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Pause admin role holder
    #[pallet::storage]
    #[pallet::getter(fn pause_admin)]
    pub type PauseAdmin<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Proposed recovery admin and the commitment it must open
    #[pallet::storage]
    #[pallet::getter(fn pending_recovery_admin)]
    pub type PendingRecoveryAdmin<T: Config> = StorageValue<_, RecoveryHandoffOf<T>, OptionQuery>;

    /// Blacklisted accounts (cannot send transfers)
    #[pallet::storage]
    #[pallet::getter(fn is_blacklisted)]
    pub type Blacklisted<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Global pause flag
    #[pallet::storage]
    #[pallet::getter(fn is_paused)]
    pub type Paused<T> = StorageValue<_, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// All three roles assigned for the first time
        Initialized { admin: T::AccountId, recovery_admin: T::AccountId, pause_admin: T::AccountId },
        /// Admin role rotated
        AdminChanged { old_admin: T::AccountId, new_admin: T::AccountId },
        /// Pause admin role rotated
        PauseAdminChanged { old_pause_admin: T::AccountId, new_pause_admin: T::AccountId },
        /// Recovery admin handoff staged for `candidate`
        RecoveryAdminProposed { candidate: T::AccountId },
        /// Recovery admin handoff completed
        RecoveryAdminChanged { old_recovery_admin: T::AccountId, new_recovery_admin: T::AccountId },
        /// Account added to blacklist
        Blacklisted { account: T::AccountId },
        /// Account removed from blacklist
        Unblacklisted { account: T::AccountId },
        /// Hooks paused by `account`
        Paused { account: T::AccountId },
        /// Hooks unpaused by `account`
        Unpaused { account: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller does not hold the role the call requires.
        Unauthorized,
        /// Revealed secret does not match the stored commitment.
        InvalidSecret,
        /// Sender of the transfer is blacklisted.
        BlacklistedSender,
        /// Roles have already been initialized.
        AlreadyInitialized,
        /// Roles have not been initialized yet.
        NotInitialized,
        /// Pause flag is already in the requested state.
        AlreadyInState,
        /// Token operations are paused.
        Paused,
        /// The recovery admin cannot hand its role to itself.
        CandidateIsRecoveryAdmin,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::initialize())]
        pub fn initialize(
            origin: OriginFor<T>,
            admin: T::AccountId,
            recovery_admin: T::AccountId,
            pause_admin: T::AccountId,
        ) -> DispatchResult {
            T::InitializeOrigin::ensure_origin(origin)?;
            Self::do_initialize(admin, recovery_admin, pause_admin)
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::set_admin())]
        pub fn set_admin(origin: OriginFor<T>, new_admin: T::AccountId) -> DispatchResult {
            Self::ensure_role(origin, Role::RecoveryAdmin)?;
            let old_admin = Admin::<T>::get().ok_or(Error::<T>::NotInitialized)?;
            Admin::<T>::put(&new_admin);

            log::info!(target: LOG_TARGET, "admin rotated from {old_admin:?} to {new_admin:?}");
            Self::deposit_event(Event::AdminChanged { old_admin, new_admin });
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::set_pause_admin())]
        pub fn set_pause_admin(
            origin: OriginFor<T>,
            new_pause_admin: T::AccountId,
        ) -> DispatchResult {
            Self::ensure_role(origin, Role::RecoveryAdmin)?;
            let old_pause_admin = PauseAdmin::<T>::get().ok_or(Error::<T>::NotInitialized)?;
            PauseAdmin::<T>::put(&new_pause_admin);

            log::info!(
                target: LOG_TARGET,
                "pause admin rotated from {old_pause_admin:?} to {new_pause_admin:?}"
            );
            Self::deposit_event(Event::PauseAdminChanged { old_pause_admin, new_pause_admin });
            Ok(())
        }

        /// Stage a recovery admin handoff. Replaces any handoff still pending.
        ///
        /// `commitment` is the hash of a secret only `candidate` should learn.
        /// `candidate` must differ from the current recovery admin.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::propose_recovery_admin())]
        pub fn propose_recovery_admin(
            origin: OriginFor<T>,
            candidate: T::AccountId,
            commitment: T::Hash,
        ) -> DispatchResult {
            let recovery_admin = Self::ensure_role(origin, Role::RecoveryAdmin)?;
            ensure!(candidate != recovery_admin, Error::<T>::CandidateIsRecoveryAdmin);
            PendingRecoveryAdmin::<T>::put(RecoveryHandoff {
                candidate: candidate.clone(),
                commitment,
            });

            log::info!(target: LOG_TARGET, "recovery admin handoff proposed to {candidate:?}");
            Self::deposit_event(Event::RecoveryAdminProposed { candidate });
            Ok(())
        }

        /// Complete a staged handoff by revealing the committed secret.
        ///
        /// Only the staged candidate may call this. The pending handoff is
        /// removed on success.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::accept_recovery_admin())]
        pub fn accept_recovery_admin(
            origin: OriginFor<T>,
            secret: BoundedVec<u8, T::MaxSecretLen>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let handoff = PendingRecoveryAdmin::<T>::get().ok_or(Error::<T>::Unauthorized)?;
            ensure!(who == handoff.candidate, Error::<T>::Unauthorized);
            ensure!(Self::commitment_of(&secret) == handoff.commitment, Error::<T>::InvalidSecret);

            let old_recovery_admin = RecoveryAdmin::<T>::get().ok_or(Error::<T>::NotInitialized)?;
            RecoveryAdmin::<T>::put(&who);
            PendingRecoveryAdmin::<T>::kill();

            log::info!(
                target: LOG_TARGET,
                "recovery admin rotated from {old_recovery_admin:?} to {who:?}"
            );
            Self::deposit_event(Event::RecoveryAdminChanged {
                old_recovery_admin,
                new_recovery_admin: who,
            });
            Ok(())
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::add_blacklist())]
        pub fn add_blacklist(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            Self::ensure_role(origin, Role::RecoveryAdmin)?;
            Blacklisted::<T>::insert(&account, true);

            log::info!(target: LOG_TARGET, "blacklisted {account:?}");
            Self::deposit_event(Event::Blacklisted { account });
            Ok(())
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::remove_blacklist())]
        pub fn remove_blacklist(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            Self::ensure_role(origin, Role::RecoveryAdmin)?;
            Blacklisted::<T>::remove(&account);

            log::info!(target: LOG_TARGET, "removed {account:?} from blacklist");
            Self::deposit_event(Event::Unblacklisted { account });
            Ok(())
        }

        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::pause())]
        pub fn pause(origin: OriginFor<T>) -> DispatchResult {
            let account = Self::ensure_role(origin, Role::PauseAdmin)?;
            ensure!(!Paused::<T>::get(), Error::<T>::AlreadyInState);
            Paused::<T>::put(true);

            log::info!(target: LOG_TARGET, "paused by {account:?}");
            Self::deposit_event(Event::Paused { account });
            Ok(())
        }

        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::unpause())]
        pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
            let account = Self::ensure_role(origin, Role::PauseAdmin)?;
            ensure!(Paused::<T>::get(), Error::<T>::AlreadyInState);
            Paused::<T>::put(false);

            log::info!(target: LOG_TARGET, "unpaused by {account:?}");
            Self::deposit_event(Event::Unpaused { account });
            Ok(())
        }
    }

    #[pallet::extra_constants]
    impl<T: Config> Pallet<T> {
        /// Interface revision of the transfer hooks.
        pub fn policy_version() -> u32 {
            POLICY_VERSION
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Initial admin. The three roles are configured together or not at all.
        pub admin: Option<T::AccountId>,
        /// Initial recovery admin
        pub recovery_admin: Option<T::AccountId>,
        /// Initial pause admin
        pub pause_admin: Option<T::AccountId>,
        /// Accounts to blacklist at genesis
        pub blacklisted_accounts: Vec<T::AccountId>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            match (&self.admin, &self.recovery_admin, &self.pause_admin) {
                (Some(admin), Some(recovery_admin), Some(pause_admin)) => {
                    Pallet::<T>::do_initialize(
                        admin.clone(),
                        recovery_admin.clone(),
                        pause_admin.clone(),
                    )
                    .expect("Genesis storage starts uninitialized");
                },
                (None, None, None) => {},
                _ => panic!("admin, recovery_admin and pause_admin must be set together"),
            }

            for account in &self.blacklisted_accounts {
                Blacklisted::<T>::insert(account, true);
                log::info!(target: LOG_TARGET, "blacklisted {account:?} at genesis");
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Whether any role slot has been assigned.
    pub fn is_initialized() -> bool {
        Admin::<T>::exists() || RecoveryAdmin::<T>::exists() || PauseAdmin::<T>::exists()
    }

    /// Current holder of `role`, `None` before initialization.
    pub fn role_holder(role: Role) -> Option<T::AccountId> {
        match role {
            Role::Admin => Admin::<T>::get(),
            Role::RecoveryAdmin => RecoveryAdmin::<T>::get(),
            Role::PauseAdmin => PauseAdmin::<T>::get(),
        }
    }

    /// Commitment a recovery admin must store for `secret`.
    pub fn commitment_of(secret: &[u8]) -> T::Hash {
        T::Hashing::hash(secret)
    }

    pub(crate) fn do_initialize(
        admin: T::AccountId,
        recovery_admin: T::AccountId,
        pause_admin: T::AccountId,
    ) -> DispatchResult {
        ensure!(!Self::is_initialized(), Error::<T>::AlreadyInitialized);

        Admin::<T>::put(&admin);
        RecoveryAdmin::<T>::put(&recovery_admin);
        PauseAdmin::<T>::put(&pause_admin);

        log::info!(
            target: LOG_TARGET,
            "roles initialized: admin {admin:?}, recovery admin {recovery_admin:?}, pause admin {pause_admin:?}"
        );
        Self::deposit_event(Event::Initialized { admin, recovery_admin, pause_admin });
        Ok(())
    }

    /// Ensure `origin` is signed by the current holder of `role`.
    fn ensure_role(origin: OriginFor<T>, role: Role) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        let holder = Self::role_holder(role).ok_or(Error::<T>::NotInitialized)?;
        ensure!(who == holder, Error::<T>::Unauthorized);
        Ok(who)
    }

    fn ensure_not_paused() -> DispatchResult {
        if T::EnforcePause::get() && Paused::<T>::get() {
            log::debug!(target: LOG_TARGET, "token operation rejected: paused");
            return Err(Error::<T>::Paused.into());
        }
        Ok(())
    }

    /// Runs before the pause check: a blacklisted sender is rejected with
    /// `BlacklistedSender` whether or not the pallet is paused.
    fn ensure_sender_allowed(sender: &T::AccountId) -> DispatchResult {
        if Blacklisted::<T>::get(sender) {
            log::debug!(target: LOG_TARGET, "transfer rejected: sender {sender:?} is blacklisted");
            return Err(Error::<T>::BlacklistedSender.into());
        }
        Ok(())
    }

    #[cfg(any(feature = "try-runtime", test))]
    pub(crate) fn do_try_state() -> Result<(), DispatchError> {
        let set = [Admin::<T>::exists(), RecoveryAdmin::<T>::exists(), PauseAdmin::<T>::exists()];
        ensure!(
            set.iter().all(|s| *s) || set.iter().all(|s| !*s),
            "role slots must be assigned together"
        );
        Ok(())
    }
}

impl<T: Config, Balance: Copy> TransferHooks<T::AccountId, Balance> for Pallet<T> {
    fn before_transfer(
        sender: &T::AccountId,
        _recipient: &T::AccountId,
        _amount: Balance,
    ) -> DispatchResult {
        Self::ensure_sender_allowed(sender)?;
        Self::ensure_not_paused()
    }

    fn after_transfer(_: &T::AccountId, _: &T::AccountId, _: Balance) -> DispatchResult {
        Ok(())
    }

    fn before_transfer_from(
        _spender: &T::AccountId,
        sender: &T::AccountId,
        _recipient: &T::AccountId,
        _amount: Balance,
    ) -> DispatchResult {
        Self::ensure_sender_allowed(sender)?;
        Self::ensure_not_paused()
    }

    fn after_transfer_from(
        _: &T::AccountId,
        _: &T::AccountId,
        _: &T::AccountId,
        _: Balance,
    ) -> DispatchResult {
        Ok(())
    }

    fn before_approve(_: &T::AccountId, _: &T::AccountId, _: Balance) -> DispatchResult {
        Self::ensure_not_paused()
    }

    fn after_approve(_: &T::AccountId, _: &T::AccountId, _: Balance) -> DispatchResult {
        Ok(())
    }

    fn before_increase_allowance(_: &T::AccountId, _: &T::AccountId, _: Balance) -> DispatchResult {
        Self::ensure_not_paused()
    }

    fn after_increase_allowance(_: &T::AccountId, _: &T::AccountId, _: Balance) -> DispatchResult {
        Ok(())
    }

    fn before_decrease_allowance(_: &T::AccountId, _: &T::AccountId, _: Balance) -> DispatchResult {
        Self::ensure_not_paused()
    }

    fn after_decrease_allowance(_: &T::AccountId, _: &T::AccountId, _: Balance) -> DispatchResult {
        Ok(())
    }

    fn version() -> u32 {
        POLICY_VERSION
    }
}
