//! Weights for pallet-token-policy.
//!
//! Every call touches a fixed number of storage items, so weights are expressed
//! directly in database reads and writes plus a flat execution cost.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

/// Weight functions needed for pallet-token-policy.
pub trait WeightInfo {
    fn initialize() -> Weight;
    fn set_admin() -> Weight;
    fn set_pause_admin() -> Weight;
    fn propose_recovery_admin() -> Weight;
    fn accept_recovery_admin() -> Weight;
    fn add_blacklist() -> Weight;
    fn remove_blacklist() -> Weight;
    fn pause() -> Weight;
    fn unpause() -> Weight;
}

/// Weights using the runtime's configured database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);

impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `TokenPolicy::Admin`, `RecoveryAdmin`, `PauseAdmin` (r:3 w:3)
    fn initialize() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(3, 3))
    }
    /// Storage: `TokenPolicy::RecoveryAdmin` (r:1), `TokenPolicy::Admin` (r:1 w:1)
    fn set_admin() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    /// Storage: `TokenPolicy::RecoveryAdmin` (r:1), `TokenPolicy::PauseAdmin` (r:1 w:1)
    fn set_pause_admin() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    /// Storage: `TokenPolicy::RecoveryAdmin` (r:1), `TokenPolicy::PendingRecoveryAdmin` (w:1)
    fn propose_recovery_admin() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    /// Storage: `TokenPolicy::PendingRecoveryAdmin` (r:1 w:1), `TokenPolicy::RecoveryAdmin` (r:1 w:1)
    /// Measured with a secret of `MaxSecretLen` bytes.
    fn accept_recovery_admin() -> Weight {
        Weight::from_parts(14_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(2, 2))
    }
    /// Storage: `TokenPolicy::RecoveryAdmin` (r:1), `TokenPolicy::Blacklisted` (w:1)
    fn add_blacklist() -> Weight {
        Weight::from_parts(9_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    /// Storage: `TokenPolicy::RecoveryAdmin` (r:1), `TokenPolicy::Blacklisted` (w:1)
    fn remove_blacklist() -> Weight {
        Weight::from_parts(9_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    /// Storage: `TokenPolicy::PauseAdmin` (r:1), `TokenPolicy::Paused` (r:1 w:1)
    fn pause() -> Weight {
        Weight::from_parts(9_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    /// Storage: `TokenPolicy::PauseAdmin` (r:1), `TokenPolicy::Paused` (r:1 w:1)
    fn unpause() -> Weight {
        Weight::from_parts(9_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn initialize() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(3, 3))
    }
    fn set_admin() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn set_pause_admin() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn propose_recovery_admin() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn accept_recovery_admin() -> Weight {
        Weight::from_parts(14_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(2, 2))
    }
    fn add_blacklist() -> Weight {
        Weight::from_parts(9_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn remove_blacklist() -> Weight {
        Weight::from_parts(9_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn pause() -> Weight {
        Weight::from_parts(9_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn unpause() -> Weight {
        Weight::from_parts(9_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
}
