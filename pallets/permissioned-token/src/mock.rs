use crate as pallet_permissioned_token;
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

frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        PermissionedToken: pallet_permissioned_token,
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

/// Admin account set at genesis.
pub const ADMIN: u64 = 1;
/// The null account (`0u64` encodes to all zero bytes).
pub const NULL: u64 = 0;

parameter_types! {
    pub const MaxBatchSize: u32 = 16;
}

impl pallet_permissioned_token::Config for Test {
    type AdminOrigin = EnsureRoot<u64>;
    type MaxBatchSize = MaxBatchSize;
    type WeightInfo = ();
}

/// Builds test externalities. Defaults: admin 1, whitelist enabled with
/// members 2 and 3, balances 2 => 1_000_000 and 3 => 500_000.
pub struct ExtBuilder {
    whitelist_enabled: bool,
    whitelisted: Vec<u64>,
    balances: Vec<(u64, u128)>,
}

impl Default for ExtBuilder {
    fn default() -> Self {
        Self {
            whitelist_enabled: true,
            whitelisted: vec![2, 3],
            balances: vec![(2, 1_000_000), (3, 500_000)],
        }
    }
}

impl ExtBuilder {
    pub fn whitelist_enabled(mut self, enabled: bool) -> Self {
        self.whitelist_enabled = enabled;
        self
    }

    pub fn whitelisted(mut self, accounts: Vec<u64>) -> Self {
        self.whitelisted = accounts;
        self
    }

    pub fn balances(mut self, balances: Vec<(u64, u128)>) -> Self {
        self.balances = balances;
        self
    }

    pub fn build(self) -> sp_io::TestExternalities {
        let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

        pallet_permissioned_token::GenesisConfig::<Test> {
            admin: Some(ADMIN),
            token_name: b"Test Token".to_vec(),
            token_symbol: b"TST".to_vec(),
            decimals: 6,
            whitelist_enabled: self.whitelist_enabled,
            whitelisted_accounts: self.whitelisted,
            initial_balances: self.balances,
        }
        .assimilate_storage(&mut t)
        .unwrap();

        let mut ext = sp_io::TestExternalities::new(t);
        // Events are only recorded from block 1 onwards
        ext.execute_with(|| System::set_block_number(1));
        ext
    }
}

pub fn new_test_ext() -> sp_io::TestExternalities {
    ExtBuilder::default().build()
}

/// Collect `ids` into the bounded list type taken by `batch_update_whitelist`.
pub fn accounts(ids: &[u64]) -> frame_support::BoundedVec<u64, MaxBatchSize> {
    ids.to_vec().try_into().expect("test batch within MaxBatchSize")
}

/// Events emitted by this pallet since the last reset.
pub fn token_events() -> Vec<crate::Event<Test>> {
    System::events()
        .into_iter()
        .filter_map(|record| match record.event {
            RuntimeEvent::PermissionedToken(event) => Some(event),
            _ => None,
        })
        .collect()
}
