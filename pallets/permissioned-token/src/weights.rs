//! Weights for pallet-permissioned-token.
//!
//! Hand-estimated from the storage accesses of each call. Regenerate with
//! `frame-benchmarking-cli` against the `runtime-benchmarks` build once a
//! reference machine is available.

#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};
use sp_std::marker::PhantomData;

pub trait WeightInfo {
    fn mint() -> Weight;
    fn burn() -> Weight;
    fn transfer() -> Weight;
    fn approve() -> Weight;
    fn transfer_from() -> Weight;
    fn set_whitelist_enabled() -> Weight;
    fn add_to_whitelist() -> Weight;
    fn remove_from_whitelist() -> Weight;
    fn batch_update_whitelist(a: u32, r: u32) -> Weight;
    fn set_admin() -> Weight;
}

/// Weights using the runtime's configured database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);

impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    // Reads: Admin, TotalSupply, Balances. Writes: TotalSupply, Balances.
    fn mint() -> Weight {
        Weight::from_parts(20_000_000, 3_500)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn burn() -> Weight {
        Weight::from_parts(20_000_000, 3_500)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    // Reads: WhitelistEnabled, Admin, WhitelistIndex x2, Balances x2. Writes: Balances x2.
    fn transfer() -> Weight {
        Weight::from_parts(30_000_000, 6_000)
            .saturating_add(T::DbWeight::get().reads(6))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn approve() -> Weight {
        Weight::from_parts(15_000_000, 3_500).saturating_add(T::DbWeight::get().writes(1))
    }
    // transfer() plus one read and one write of Allowances.
    fn transfer_from() -> Weight {
        Weight::from_parts(38_000_000, 7_500)
            .saturating_add(T::DbWeight::get().reads(7))
            .saturating_add(T::DbWeight::get().writes(3))
    }
    fn set_whitelist_enabled() -> Weight {
        Weight::from_parts(10_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    // Reads: Admin, WhitelistIndex, WhitelistCount. Writes: WhitelistIndex, WhitelistMembers, WhitelistCount.
    fn add_to_whitelist() -> Weight {
        Weight::from_parts(18_000_000, 3_500)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(3))
    }
    // Worst case moves the last member into the freed slot.
    fn remove_from_whitelist() -> Weight {
        Weight::from_parts(22_000_000, 6_000)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(5))
    }
    fn batch_update_whitelist(a: u32, r: u32) -> Weight {
        Weight::from_parts(12_000_000, 1_500)
            .saturating_add(Weight::from_parts(9_000_000, 2_500).saturating_mul(a.into()))
            .saturating_add(Weight::from_parts(12_000_000, 5_000).saturating_mul(r.into()))
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().reads((2u64).saturating_mul(a.into())))
            .saturating_add(T::DbWeight::get().writes((3u64).saturating_mul(a.into())))
            .saturating_add(T::DbWeight::get().reads((3u64).saturating_mul(r.into())))
            .saturating_add(T::DbWeight::get().writes((5u64).saturating_mul(r.into())))
    }
    fn set_admin() -> Weight {
        Weight::from_parts(12_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn mint() -> Weight {
        Weight::from_parts(20_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads(3))
            .saturating_add(RocksDbWeight::get().writes(2))
    }
    fn burn() -> Weight {
        Weight::from_parts(20_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads(3))
            .saturating_add(RocksDbWeight::get().writes(2))
    }
    fn transfer() -> Weight {
        Weight::from_parts(30_000_000, 6_000)
            .saturating_add(RocksDbWeight::get().reads(6))
            .saturating_add(RocksDbWeight::get().writes(2))
    }
    fn approve() -> Weight {
        Weight::from_parts(15_000_000, 3_500).saturating_add(RocksDbWeight::get().writes(1))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(38_000_000, 7_500)
            .saturating_add(RocksDbWeight::get().reads(7))
            .saturating_add(RocksDbWeight::get().writes(3))
    }
    fn set_whitelist_enabled() -> Weight {
        Weight::from_parts(10_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn add_to_whitelist() -> Weight {
        Weight::from_parts(18_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads(3))
            .saturating_add(RocksDbWeight::get().writes(3))
    }
    fn remove_from_whitelist() -> Weight {
        Weight::from_parts(22_000_000, 6_000)
            .saturating_add(RocksDbWeight::get().reads(4))
            .saturating_add(RocksDbWeight::get().writes(5))
    }
    fn batch_update_whitelist(a: u32, r: u32) -> Weight {
        Weight::from_parts(12_000_000, 1_500)
            .saturating_add(Weight::from_parts(9_000_000, 2_500).saturating_mul(a.into()))
            .saturating_add(Weight::from_parts(12_000_000, 5_000).saturating_mul(r.into()))
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().reads((2u64).saturating_mul(a.into())))
            .saturating_add(RocksDbWeight::get().writes((3u64).saturating_mul(a.into())))
            .saturating_add(RocksDbWeight::get().reads((3u64).saturating_mul(r.into())))
            .saturating_add(RocksDbWeight::get().writes((5u64).saturating_mul(r.into())))
    }
    fn set_admin() -> Weight {
        Weight::from_parts(12_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
}
