//! Storage migrations for pallet-token-policy.
//!
//! Each migration is versioned, checks the on-chain storage version before doing
//! any work and can therefore be included in the runtime's migration tuple more
//! than once without effect.
//!
//! # Wiring Migrations in Runtime
//!
//! ```ignore
//! pub type Executive = frame_executive::Executive<
//!     Runtime,
//!     Block,
//!     frame_system::ChainContext<Runtime>,
//!     Runtime,
//!     AllPalletsWithSystem,
//!     pallet_token_policy::migrations::v1::MigrateToV1<Runtime>,
//! >;
//! ```

use frame_support::{pallet_prelude::*, traits::OnRuntimeUpgrade};
use sp_std::marker::PhantomData;

use crate::{Config, Pallet, PendingRecoveryAdmin, RecoveryAdmin, LOG_TARGET};

/// Migration to version 1.
///
/// Storage version 0 kept an accepted recovery admin handoff in storage after
/// the candidate took over the role, and let the recovery admin propose itself.
/// Version 1 removes the handoff on acceptance and rejects self-proposals with
/// `CandidateIsRecoveryAdmin`, so a handoff whose candidate already holds the
/// role is either spent or a no-op, and is dropped here. Accepting such a
/// handoff would not have changed the recovery admin.
pub mod v1 {
    use super::*;

    pub struct MigrateToV1<T>(PhantomData<T>);

    impl<T: Config> MigrateToV1<T> {
        /// A pending handoff naming the current recovery admin.
        fn has_stale_handoff() -> bool {
            match (PendingRecoveryAdmin::<T>::get(), RecoveryAdmin::<T>::get()) {
                (Some(handoff), Some(recovery_admin)) => handoff.candidate == recovery_admin,
                _ => false,
            }
        }
    }

    impl<T: Config> OnRuntimeUpgrade for MigrateToV1<T> {
        fn on_runtime_upgrade() -> Weight {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();

            if on_chain_version < 1 {
                let mut writes = 1;
                if Self::has_stale_handoff() {
                    PendingRecoveryAdmin::<T>::kill();
                    writes += 1;
                    log::info!(target: LOG_TARGET, "Removed stale recovery admin handoff");
                }

                StorageVersion::new(1).put::<Pallet<T>>();
                log::info!(target: LOG_TARGET, "Migrated storage from v0 to v1");

                // version, pending handoff and recovery admin reads
                T::DbWeight::get().reads_writes(3, writes)
            } else {
                log::info!(
                    target: LOG_TARGET,
                    "Storage already at v{on_chain_version:?}, skipping v1 migration"
                );
                T::DbWeight::get().reads(1)
            }
        }

        #[cfg(feature = "try-runtime")]
        fn pre_upgrade() -> Result<sp_std::vec::Vec<u8>, sp_runtime::TryRuntimeError> {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();
            log::info!(
                target: LOG_TARGET,
                "Pre-upgrade: on-chain storage version is {:?}",
                on_chain_version
            );
            Ok(on_chain_version.encode())
        }

        #[cfg(feature = "try-runtime")]
        fn post_upgrade(state: sp_std::vec::Vec<u8>) -> Result<(), sp_runtime::TryRuntimeError> {
            let pre_version: u16 = Decode::decode(&mut &state[..])
                .map_err(|_| sp_runtime::TryRuntimeError::Other("Failed to decode pre-state"))?;
            let post_version = Pallet::<T>::on_chain_storage_version();

            if pre_version < 1 {
                frame_support::ensure!(
                    post_version >= 1,
                    sp_runtime::TryRuntimeError::Other("Migration to v1 did not complete")
                );
                frame_support::ensure!(
                    !Self::has_stale_handoff(),
                    sp_runtime::TryRuntimeError::Other("Stale recovery admin handoff remains")
                );
            }

            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        mock::{new_test_ext, RuntimeOrigin, Test, RECOVERY_ADMIN},
        Error, RecoveryHandoff,
    };
    use frame_support::{assert_noop, assert_ok, traits::StorageVersion};
    use sp_core::H256;

    fn put_handoff(candidate: u64) {
        PendingRecoveryAdmin::<Test>::put(RecoveryHandoff {
            candidate,
            commitment: H256::repeat_byte(7),
        });
    }

    #[test]
    fn migration_v1_removes_stale_handoff() {
        new_test_ext().execute_with(|| {
            StorageVersion::new(0).put::<Pallet<Test>>();
            // v0 accepted the handoff but left it in storage
            put_handoff(40);
            RecoveryAdmin::<Test>::put(40);

            v1::MigrateToV1::<Test>::on_runtime_upgrade();

            assert_eq!(PendingRecoveryAdmin::<Test>::get(), None);
            assert_eq!(RecoveryAdmin::<Test>::get(), Some(40));
            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 1);
        });
    }

    #[test]
    fn migration_v1_removes_v0_self_proposal() {
        new_test_ext().execute_with(|| {
            StorageVersion::new(0).put::<Pallet<Test>>();
            // v0 let the recovery admin name itself as candidate
            put_handoff(RECOVERY_ADMIN);

            v1::MigrateToV1::<Test>::on_runtime_upgrade();

            assert_eq!(PendingRecoveryAdmin::<Test>::get(), None);
            assert_eq!(RecoveryAdmin::<Test>::get(), Some(RECOVERY_ADMIN));
            assert_ok!(Pallet::<Test>::do_try_state());

            // v1 refuses to recreate it
            assert_noop!(
                Pallet::<Test>::propose_recovery_admin(
                    RuntimeOrigin::signed(RECOVERY_ADMIN),
                    RECOVERY_ADMIN,
                    H256::repeat_byte(7)
                ),
                Error::<Test>::CandidateIsRecoveryAdmin
            );
        });
    }

    #[test]
    fn migration_v1_keeps_live_handoff() {
        new_test_ext().execute_with(|| {
            StorageVersion::new(0).put::<Pallet<Test>>();
            put_handoff(40);

            v1::MigrateToV1::<Test>::on_runtime_upgrade();

            assert_eq!(PendingRecoveryAdmin::<Test>::get().map(|h| h.candidate), Some(40));
            assert_eq!(RecoveryAdmin::<Test>::get(), Some(RECOVERY_ADMIN));
            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 1);
        });
    }

    #[test]
    fn migration_v1_idempotent() {
        new_test_ext().execute_with(|| {
            StorageVersion::new(1).put::<Pallet<Test>>();
            // Already migrated: even a handoff naming the recovery admin is left alone
            put_handoff(RECOVERY_ADMIN);

            v1::MigrateToV1::<Test>::on_runtime_upgrade();

            assert!(PendingRecoveryAdmin::<Test>::get().is_some());
            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 1);
        });
    }

    #[test]
    fn migration_v1_skipped_on_higher_version() {
        new_test_ext().execute_with(|| {
            StorageVersion::new(5).put::<Pallet<Test>>();

            v1::MigrateToV1::<Test>::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 5);
        });
    }

    #[test]
    fn migration_handles_empty_storage() {
        new_test_ext().execute_with(|| {
            StorageVersion::new(0).put::<Pallet<Test>>();

            v1::MigrateToV1::<Test>::on_runtime_upgrade();
            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 1);

            v1::MigrateToV1::<Test>::on_runtime_upgrade();
            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 1);
        });
    }
}
