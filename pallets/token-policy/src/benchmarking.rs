//! Benchmarking setup for pallet-token-policy

use super::*;

#[allow(unused)]
use crate::Pallet as TokenPolicy;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

/// Current role holders, assigning fresh ones if genesis left the roles empty.
fn roles<T: Config>() -> (T::AccountId, T::AccountId, T::AccountId) {
    if !Pallet::<T>::is_initialized() {
        Pallet::<T>::do_initialize(
            account("admin", 0, 0),
            account("recovery_admin", 0, 0),
            account("pause_admin", 0, 0),
        )
        .expect("roles are empty");
    }
    (
        Admin::<T>::get().expect("initialized"),
        RecoveryAdmin::<T>::get().expect("initialized"),
        PauseAdmin::<T>::get().expect("initialized"),
    )
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn initialize() {
        Admin::<T>::kill();
        RecoveryAdmin::<T>::kill();
        PauseAdmin::<T>::kill();
        let admin: T::AccountId = account("admin", 0, 0);
        let recovery_admin: T::AccountId = account("recovery_admin", 0, 0);
        let pause_admin: T::AccountId = account("pause_admin", 0, 0);
        let origin = T::InitializeOrigin::try_successful_origin().expect("Initialize origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, admin.clone(), recovery_admin, pause_admin);

        assert_eq!(Admin::<T>::get(), Some(admin));
    }

    #[benchmark]
    fn set_admin() {
        let (_, recovery_admin, _) = roles::<T>();
        let new_admin: T::AccountId = account("new_admin", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(recovery_admin), new_admin.clone());

        assert_eq!(Admin::<T>::get(), Some(new_admin));
    }

    #[benchmark]
    fn set_pause_admin() {
        let (_, recovery_admin, _) = roles::<T>();
        let new_pause_admin: T::AccountId = account("new_pause_admin", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(recovery_admin), new_pause_admin.clone());

        assert_eq!(PauseAdmin::<T>::get(), Some(new_pause_admin));
    }

    #[benchmark]
    fn propose_recovery_admin() {
        let (_, recovery_admin, _) = roles::<T>();
        let candidate: T::AccountId = account("candidate", 0, 0);
        let commitment = Pallet::<T>::commitment_of(b"benchmark secret");

        #[extrinsic_call]
        _(RawOrigin::Signed(recovery_admin), candidate.clone(), commitment);

        assert_eq!(PendingRecoveryAdmin::<T>::get().map(|h| h.candidate), Some(candidate));
    }

    #[benchmark]
    fn accept_recovery_admin() {
        roles::<T>();
        let candidate: T::AccountId = whitelisted_caller();
        // Worst case: hashing the longest secret allowed
        let secret: BoundedVec<u8, T::MaxSecretLen> =
            BoundedVec::truncate_from((0..T::MaxSecretLen::get()).map(|_| 7u8).collect());
        PendingRecoveryAdmin::<T>::put(RecoveryHandoff {
            candidate: candidate.clone(),
            commitment: Pallet::<T>::commitment_of(&secret),
        });

        #[extrinsic_call]
        _(RawOrigin::Signed(candidate.clone()), secret);

        assert_eq!(RecoveryAdmin::<T>::get(), Some(candidate));
    }

    #[benchmark]
    fn add_blacklist() {
        let (_, recovery_admin, _) = roles::<T>();
        let target: T::AccountId = account("target", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(recovery_admin), target.clone());

        assert_eq!(Blacklisted::<T>::get(&target), true);
    }

    #[benchmark]
    fn remove_blacklist() {
        let (_, recovery_admin, _) = roles::<T>();
        let target: T::AccountId = account("target", 0, 0);
        Blacklisted::<T>::insert(&target, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(recovery_admin), target.clone());

        assert_eq!(Blacklisted::<T>::get(&target), false);
    }

    #[benchmark]
    fn pause() {
        let (_, _, pause_admin) = roles::<T>();
        Paused::<T>::put(false);

        #[extrinsic_call]
        _(RawOrigin::Signed(pause_admin));

        assert_eq!(Paused::<T>::get(), true);
    }

    #[benchmark]
    fn unpause() {
        let (_, _, pause_admin) = roles::<T>();
        Paused::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(pause_admin));

        assert_eq!(Paused::<T>::get(), false);
    }

    impl_benchmark_test_suite!(TokenPolicy, crate::mock::new_test_ext(), crate::mock::Test);
}
