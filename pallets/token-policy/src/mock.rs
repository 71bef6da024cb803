use crate as pallet_token_policy;
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64},
};
use frame_system::EnsureRoot;
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        TokenPolicy: pallet_token_policy,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

pub const ADMIN: u64 = 1;
pub const RECOVERY_ADMIN: u64 = 2;
pub const PAUSE_ADMIN: u64 = 3;

parameter_types! {
    // Thread-local so individual tests can switch pause enforcement off.
    pub static EnforcePause: bool = true;
    pub const MaxSecretLen: u32 = 64;
}

impl pallet_token_policy::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type InitializeOrigin = EnsureRoot<u64>;
    type EnforcePause = EnforcePause;
    type MaxSecretLen = MaxSecretLen;
    type WeightInfo = ();
}

fn build_ext(genesis: pallet_token_policy::GenesisConfig<Test>) -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();
    genesis.assimilate_storage(&mut t).unwrap();
    t.into()
}

// Build genesis storage with roles (ADMIN, RECOVERY_ADMIN, PAUSE_ADMIN).
pub fn new_test_ext() -> sp_io::TestExternalities {
    build_ext(pallet_token_policy::GenesisConfig::<Test> {
        admin: Some(ADMIN),
        recovery_admin: Some(RECOVERY_ADMIN),
        pause_admin: Some(PAUSE_ADMIN),
        blacklisted_accounts: vec![],
    })
}

// Build genesis storage where no role has been assigned yet.
pub fn new_uninitialized_ext() -> sp_io::TestExternalities {
    build_ext(pallet_token_policy::GenesisConfig::<Test>::default())
}

// Build genesis storage with roles and a pre-populated blacklist.
pub fn new_test_ext_with_blacklist(accounts: Vec<u64>) -> sp_io::TestExternalities {
    build_ext(pallet_token_policy::GenesisConfig::<Test> {
        admin: Some(ADMIN),
        recovery_admin: Some(RECOVERY_ADMIN),
        pause_admin: Some(PAUSE_ADMIN),
        blacklisted_accounts: accounts,
    })
}
