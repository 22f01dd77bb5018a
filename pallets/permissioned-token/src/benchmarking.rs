//! Benchmarking setup for pallet-permissioned-token

use super::*;

#[allow(unused)]
use crate::Pallet as PermissionedToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

fn make_admin<T: Config>() -> T::AccountId {
    let admin: T::AccountId = account("admin", 0, 0);
    Admin::<T>::put(&admin);
    admin
}

/// Worst case for the gate: enabled, neither party is the admin, both are members.
fn gated_pair<T: Config>() -> Result<(T::AccountId, T::AccountId), BenchmarkError> {
    make_admin::<T>();
    let sender: T::AccountId = whitelisted_caller();
    let recipient: T::AccountId = account("recipient", 0, 0);
    WhitelistEnabled::<T>::put(true);
    Pallet::<T>::insert_member(&sender).map_err(|_| BenchmarkError::Stop("whitelist full"))?;
    Pallet::<T>::insert_member(&recipient).map_err(|_| BenchmarkError::Stop("whitelist full"))?;
    Pallet::<T>::do_mint(&sender, 10_000_000)?;
    Pallet::<T>::do_mint(&recipient, 1)?;
    Ok((sender, recipient))
}

fn member_list<T: Config>(
    name: &'static str,
    len: u32,
) -> Result<BoundedVec<T::AccountId, T::MaxBatchSize>, BenchmarkError> {
    (0..len)
        .map(|i| account(name, i, 0))
        .collect::<Vec<T::AccountId>>()
        .try_into()
        .map_err(|_| BenchmarkError::Stop("batch larger than MaxBatchSize"))
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn mint() {
        let admin = make_admin::<T>();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn burn() -> Result<(), BenchmarkError> {
        let admin = make_admin::<T>();
        let holder: T::AccountId = account("holder", 0, 0);
        Pallet::<T>::do_mint(&holder, 1_000_000)?;

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), holder.clone(), 400_000u128);

        assert_eq!(Balances::<T>::get(&holder), 600_000);
        Ok(())
    }

    #[benchmark]
    fn transfer() -> Result<(), BenchmarkError> {
        let (sender, recipient) = gated_pair::<T>()?;
        let amount: u128 = 1_000_000;

        #[extrinsic_call]
        _(RawOrigin::Signed(sender), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount + 1);
        Ok(())
    }

    #[benchmark]
    fn approve() {
        let owner: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner.clone()), spender.clone(), 1_000u128);

        assert_eq!(Allowances::<T>::get(&owner, &spender), 1_000);
    }

    #[benchmark]
    fn transfer_from() -> Result<(), BenchmarkError> {
        let (owner, recipient) = gated_pair::<T>()?;
        let spender: T::AccountId = account("spender", 0, 0);
        Allowances::<T>::insert(&owner, &spender, 5_000_000u128);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), owner.clone(), recipient.clone(), 1_000_000u128);

        assert_eq!(Allowances::<T>::get(&owner, &spender), 4_000_000);
        Ok(())
    }

    #[benchmark]
    fn set_whitelist_enabled() {
        let admin = make_admin::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), true);

        assert!(WhitelistEnabled::<T>::get());
    }

    #[benchmark]
    fn add_to_whitelist() {
        let admin = make_admin::<T>();
        let who: T::AccountId = whitelisted_caller();

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), who.clone());

        assert!(Pallet::<T>::is_whitelisted(&who));
    }

    #[benchmark]
    fn remove_from_whitelist() -> Result<(), BenchmarkError> {
        let admin = make_admin::<T>();
        let who: T::AccountId = whitelisted_caller();
        let last: T::AccountId = account("last", 0, 0);
        // Remove ahead of the last member so the last member has to move
        let slot = WhitelistCount::<T>::get();
        Pallet::<T>::insert_member(&who)?;
        Pallet::<T>::insert_member(&last)?;

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), who.clone());

        assert!(!Pallet::<T>::is_whitelisted(&who));
        assert_eq!(WhitelistIndex::<T>::get(&last), Some(slot));
        Ok(())
    }

    #[benchmark]
    fn batch_update_whitelist(
        a: Linear<0, { T::MaxBatchSize::get() }>,
        r: Linear<0, { T::MaxBatchSize::get() }>,
    ) -> Result<(), BenchmarkError> {
        let admin = make_admin::<T>();
        let to_add = member_list::<T>("add", a)?;
        let to_remove = member_list::<T>("remove", r)?;
        let before = WhitelistCount::<T>::get();
        for who in to_remove.iter() {
            Pallet::<T>::insert_member(who)?;
        }

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), to_add, to_remove);

        assert_eq!(WhitelistCount::<T>::get(), before + a);
        Ok(())
    }

    #[benchmark]
    fn set_admin() -> Result<(), BenchmarkError> {
        make_admin::<T>();
        let new_admin: T::AccountId = account("new_admin", 0, 0);
        let origin =
            T::AdminOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, new_admin.clone());

        assert_eq!(Admin::<T>::get(), Some(new_admin));
        Ok(())
    }

    impl_benchmark_test_suite!(PermissionedToken, crate::mock::new_test_ext(), crate::mock::Test);
}
