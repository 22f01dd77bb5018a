//! # Permissioned Token Pallet
//!
//! A fungible token whose supply is adjusted by a single admin account and
//! whose transfers can be restricted to an allow-list of accounts.
//!
//! - **Ledger**: balances and total supply (`mint`, `burn`, `transfer`).
//! - **Allowances**: delegated spending (`approve`, `transfer_from`).
//! - **Whitelist**: an enumerable member set plus an on/off switch. While the
//!   switch is on, both parties of a transfer must be members unless one of
//!   them is the admin.
//!
//! Every dispatchable runs in its own storage layer, so a call that returns an
//! error leaves no writes and no events behind.
#![cfg_attr(not(feature = "std"), no_std)]
// `#[pallet::getter]` is deprecated upstream but keeps the read API compact.
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{
    dispatch::DispatchResult, ensure, pallet_prelude::*, storage::with_storage_layer,
    traits::EnsureOrigin,
};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_std::prelude::*;

pub use pallet::*;
pub use weights::WeightInfo;

pub mod migrations;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub(crate) const LOG_TARGET: &str = "pallet-permissioned-token";

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(2);

/// Allowance value that `transfer_from` never decrements.
pub const UNLIMITED_ALLOWANCE: u128 = u128::MAX;

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// Origin that may replace the admin without the admin's signature
        /// (e.g. root or a governance multisig).
        type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        /// Upper bound for each list passed to `batch_update_whitelist`.
        #[pallet::constant]
        type MaxBatchSize: Get<u32>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "Hong Kong Dollar Coin")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "HKDC")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// The privileged account: mints, burns and manages the whitelist.
    #[pallet::storage]
    #[pallet::getter(fn admin)]
    pub type Admin<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Total token supply. Always equals the sum of `Balances`.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances. Zero balances are not stored.
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Spending limits, keyed by (owner, spender).
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    /// Whether transfers are restricted to whitelist members.
    #[pallet::storage]
    #[pallet::getter(fn whitelist_enabled)]
    pub type WhitelistEnabled<T> = StorageValue<_, bool, ValueQuery>;

    /// Whitelist membership. The value is the member's slot in `WhitelistMembers`.
    #[pallet::storage]
    pub type WhitelistIndex<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, u32, OptionQuery>;

    /// Whitelist members in insertion order, dense over `0..WhitelistCount`.
    #[pallet::storage]
    pub type WhitelistMembers<T: Config> =
        StorageMap<_, Twox64Concat, u32, T::AccountId, OptionQuery>;

    #[pallet::storage]
    #[pallet::getter(fn whitelist_count)]
    pub type WhitelistCount<T> = StorageValue<_, u32, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens transferred from one account to another
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// New tokens minted
        Minted { to: T::AccountId, amount: u128 },
        /// Tokens destroyed
        Burned { from: T::AccountId, amount: u128 },
        /// Spending limit set by `owner` for `spender`
        Approval { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        /// Whitelist enforcement switched (emitted even if unchanged)
        WhitelistStatusChanged { enabled: bool },
        /// Account added to whitelist
        Whitelisted { account: T::AccountId },
        /// Account removed from whitelist
        RemovedFromWhitelist { account: T::AccountId },
        /// Batch whitelist update finished; counts only include real changes
        WhitelistBatchUpdated { added: u32, removed: u32 },
        /// Admin account changed
        AdminChanged { old_admin: Option<T::AccountId>, new_admin: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The null account was used where a real account is required.
        ZeroAddress,
        InsufficientBalance,
        InsufficientAllowance,
        /// The whitelist is enabled and a party to the transfer is not a member.
        NotWhitelisted,
        /// The caller is not the admin.
        Unauthorized,
        /// Balance or supply accounting would leave the `u128` range.
        Overflow,
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
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            Self::ensure_admin(origin)?;
            Self::do_mint(&to, amount)
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::do_transfer(&sender, &to, amount)
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, from: T::AccountId, amount: u128) -> DispatchResult {
            Self::ensure_admin(origin)?;
            Self::do_burn(&from, amount)
        }

        /// Set the amount `spender` may move out of the caller's account.
        ///
        /// Overwrites any previous limit. `UNLIMITED_ALLOWANCE` is never
        /// consumed by `transfer_from`.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::do_approve(&owner, &spender, amount)
        }

        /// Move `amount` from `from` to `to`, spending the caller's allowance.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::do_transfer_from(&spender, &from, &to, amount)
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::set_whitelist_enabled())]
        pub fn set_whitelist_enabled(origin: OriginFor<T>, enabled: bool) -> DispatchResult {
            Self::ensure_admin(origin)?;
            WhitelistEnabled::<T>::put(enabled);
            Self::deposit_event(Event::WhitelistStatusChanged { enabled });
            Ok(())
        }

        /// Add `account` to the whitelist. Succeeds silently if it is already a member.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::add_to_whitelist())]
        pub fn add_to_whitelist(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            Self::ensure_admin(origin)?;
            ensure!(!Self::is_null_account(&account), Error::<T>::ZeroAddress);
            if Self::insert_member(&account)? {
                Self::deposit_event(Event::Whitelisted { account });
            }
            Ok(())
        }

        /// Remove `account` from the whitelist. Succeeds silently if it is not a member.
        ///
        /// The last member takes the removed member's slot, so `list_members`
        /// order is not preserved across removals.
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::remove_from_whitelist())]
        pub fn remove_from_whitelist(
            origin: OriginFor<T>,
            account: T::AccountId,
        ) -> DispatchResult {
            Self::ensure_admin(origin)?;
            if Self::remove_member(&account) {
                Self::deposit_event(Event::RemovedFromWhitelist { account });
            }
            Ok(())
        }

        /// Apply all of `to_add`, then all of `to_remove`.
        ///
        /// An account present in both lists ends up removed. Null accounts in
        /// `to_add` are skipped. Emits a single `WhitelistBatchUpdated` event
        /// with the number of accounts actually added and removed.
        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::batch_update_whitelist(
            to_add.len() as u32,
            to_remove.len() as u32,
        ))]
        pub fn batch_update_whitelist(
            origin: OriginFor<T>,
            to_add: BoundedVec<T::AccountId, T::MaxBatchSize>,
            to_remove: BoundedVec<T::AccountId, T::MaxBatchSize>,
        ) -> DispatchResult {
            Self::ensure_admin(origin)?;

            let mut added: u32 = 0;
            for account in to_add.iter() {
                if Self::is_null_account(account) {
                    continue;
                }
                if Self::insert_member(account)? {
                    added += 1;
                }
            }

            let mut removed: u32 = 0;
            for account in to_remove.iter() {
                if Self::remove_member(account) {
                    removed += 1;
                }
            }

            Self::deposit_event(Event::WhitelistBatchUpdated { added, removed });
            Ok(())
        }

        /// Hand the admin role to `new_admin`.
        ///
        /// Callable by the current admin or by `T::AdminOrigin`.
        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::set_admin())]
        pub fn set_admin(origin: OriginFor<T>, new_admin: T::AccountId) -> DispatchResult {
            if let Err(origin) = T::AdminOrigin::try_origin(origin) {
                Self::ensure_admin(origin)?;
            }
            ensure!(!Self::is_null_account(&new_admin), Error::<T>::ZeroAddress);

            let old_admin = Admin::<T>::get();
            Admin::<T>::put(&new_admin);
            Self::deposit_event(Event::AdminChanged { old_admin, new_admin });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Initial admin account
        pub admin: Option<T::AccountId>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
        /// Whether transfers start out restricted to whitelist members
        pub whitelist_enabled: bool,
        /// Accounts to whitelist at genesis, in enumeration order
        pub whitelisted_accounts: Vec<T::AccountId>,
        /// Initial token mints (account, amount)
        pub initial_balances: Vec<(T::AccountId, u128)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);

            if let Some(ref admin) = self.admin {
                Admin::<T>::put(admin);
            }

            WhitelistEnabled::<T>::put(self.whitelist_enabled);
            for account in &self.whitelisted_accounts {
                assert!(!Pallet::<T>::is_null_account(account), "Null account in genesis whitelist");
                Pallet::<T>::insert_member(account).expect("Genesis whitelist fits in u32 slots");
            }

            let mut total: u128 = 0;
            for (account, amount) in &self.initial_balances {
                assert!(!Pallet::<T>::is_null_account(account), "Null account in genesis balances");
                let balance = Balances::<T>::get(account)
                    .checked_add(*amount)
                    .expect("Genesis balance overflows u128");
                Pallet::<T>::set_balance(account, balance);
                total = total.checked_add(*amount).expect("Genesis total supply overflows u128");
            }
            TotalSupply::<T>::put(total);

            log::info!(
                target: LOG_TARGET,
                "Genesis: supply {}, {} whitelisted, whitelist enabled: {}",
                total,
                self.whitelisted_accounts.len(),
                self.whitelist_enabled,
            );
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Whether `who` is the current admin.
    pub fn is_admin(who: &T::AccountId) -> bool {
        Admin::<T>::get().as_ref() == Some(who)
    }

    /// The null account is the one whose encoding is all zero bytes.
    pub fn is_null_account(who: &T::AccountId) -> bool {
        who.using_encoded(|bytes| bytes.iter().all(|b| *b == 0))
    }

    pub fn is_whitelisted(who: &T::AccountId) -> bool {
        WhitelistIndex::<T>::contains_key(who)
    }

    /// Snapshot of the whitelist in enumeration order.
    pub fn list_members() -> Vec<T::AccountId> {
        (0..WhitelistCount::<T>::get()).filter_map(WhitelistMembers::<T>::get).collect()
    }

    fn ensure_admin(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        ensure!(Self::is_admin(&who), Error::<T>::Unauthorized);
        Ok(who)
    }

    /// Reject a transfer between `from` and `to` if the whitelist forbids it.
    ///
    /// Passes when the whitelist is disabled, when either side is the admin,
    /// or when both sides are members.
    pub fn ensure_can_transfer(from: &T::AccountId, to: &T::AccountId) -> DispatchResult {
        if !WhitelistEnabled::<T>::get() {
            return Ok(());
        }
        if let Some(admin) = Admin::<T>::get() {
            if *from == admin || *to == admin {
                return Ok(());
            }
        }
        ensure!(
            Self::is_whitelisted(from) && Self::is_whitelisted(to),
            Error::<T>::NotWhitelisted
        );
        Ok(())
    }

    pub fn do_mint(to: &T::AccountId, amount: u128) -> DispatchResult {
        ensure!(!Self::is_null_account(to), Error::<T>::ZeroAddress);

        let supply = TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;
        let balance = Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;

        TotalSupply::<T>::put(supply);
        Self::set_balance(to, balance);
        Self::deposit_event(Event::Minted { to: to.clone(), amount });
        Ok(())
    }

    pub fn do_burn(from: &T::AccountId, amount: u128) -> DispatchResult {
        ensure!(!Self::is_null_account(from), Error::<T>::ZeroAddress);

        let remaining =
            Balances::<T>::get(from).checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;
        let supply = TotalSupply::<T>::get().checked_sub(amount).ok_or(Error::<T>::Overflow)?;

        Self::set_balance(from, remaining);
        TotalSupply::<T>::put(supply);
        Self::deposit_event(Event::Burned { from: from.clone(), amount });
        Ok(())
    }

    /// Move `amount` from `from` to `to` through the whitelist gate.
    ///
    /// Checks run in order: null accounts, whitelist, sender balance,
    /// receiver overflow. Nothing is written unless all of them pass.
    pub fn do_transfer(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        ensure!(
            !Self::is_null_account(from) && !Self::is_null_account(to),
            Error::<T>::ZeroAddress
        );
        Self::ensure_can_transfer(from, to)?;

        let sender_balance = Balances::<T>::get(from);
        let remaining =
            sender_balance.checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;

        if from != to {
            let receiver_balance =
                Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;
            Self::set_balance(from, remaining);
            Self::set_balance(to, receiver_balance);
        }

        Self::deposit_event(Event::Transferred { from: from.clone(), to: to.clone(), amount });
        Ok(())
    }

    pub fn do_approve(owner: &T::AccountId, spender: &T::AccountId, amount: u128) -> DispatchResult {
        ensure!(
            !Self::is_null_account(owner) && !Self::is_null_account(spender),
            Error::<T>::ZeroAddress
        );
        Self::set_allowance(owner, spender, amount);
        Self::deposit_event(Event::Approval {
            owner: owner.clone(),
            spender: spender.clone(),
            amount,
        });
        Ok(())
    }

    /// Spend `spender`'s allowance over `from`, then transfer.
    ///
    /// Both steps share one storage layer: if the transfer fails the
    /// allowance is left untouched.
    pub fn do_transfer_from(
        spender: &T::AccountId,
        from: &T::AccountId,
        to: &T::AccountId,
        amount: u128,
    ) -> DispatchResult {
        with_storage_layer(|| {
            Self::spend_allowance(from, spender, amount)?;
            Self::do_transfer(from, to, amount)
        })
    }

    fn spend_allowance(owner: &T::AccountId, spender: &T::AccountId, amount: u128) -> DispatchResult {
        let current = Allowances::<T>::get(owner, spender);
        if current == UNLIMITED_ALLOWANCE {
            return Ok(());
        }
        let remaining = current.checked_sub(amount).ok_or(Error::<T>::InsufficientAllowance)?;
        Self::set_allowance(owner, spender, remaining);
        Ok(())
    }

    fn set_allowance(owner: &T::AccountId, spender: &T::AccountId, amount: u128) {
        if amount == 0 {
            Allowances::<T>::remove(owner, spender);
        } else {
            Allowances::<T>::insert(owner, spender, amount);
        }
    }

    pub(crate) fn set_balance(who: &T::AccountId, amount: u128) {
        if amount == 0 {
            Balances::<T>::remove(who);
        } else {
            Balances::<T>::insert(who, amount);
        }
    }

    /// Append `who` to the whitelist. Returns `false` if it was already a member.
    pub(crate) fn insert_member(who: &T::AccountId) -> Result<bool, DispatchError> {
        if Self::is_whitelisted(who) {
            return Ok(false);
        }
        let slot = WhitelistCount::<T>::get();
        let count = slot.checked_add(1).ok_or(Error::<T>::Overflow)?;

        WhitelistIndex::<T>::insert(who, slot);
        WhitelistMembers::<T>::insert(slot, who);
        WhitelistCount::<T>::put(count);
        Ok(true)
    }

    /// Swap-and-pop removal. Returns `false` if `who` was not a member.
    pub(crate) fn remove_member(who: &T::AccountId) -> bool {
        let Some(slot) = WhitelistIndex::<T>::take(who) else {
            return false;
        };
        let last = WhitelistCount::<T>::get().saturating_sub(1);

        if slot != last {
            if let Some(moved) = WhitelistMembers::<T>::get(last) {
                WhitelistMembers::<T>::insert(slot, &moved);
                WhitelistIndex::<T>::insert(&moved, slot);
            }
        }
        WhitelistMembers::<T>::remove(last);
        WhitelistCount::<T>::put(last);
        true
    }

    /// Check the storage invariants:
    ///
    /// * `TotalSupply` equals the sum of all balances, and no zero balance is stored.
    /// * `WhitelistIndex` and `WhitelistMembers` describe the same set, the
    ///   sequence is dense over `0..WhitelistCount` and holds no duplicates.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), DispatchError> {
        let mut sum: u128 = 0;
        for balance in Balances::<T>::iter_values() {
            ensure!(balance > 0, DispatchError::Other("Zero balance stored"));
            sum = sum
                .checked_add(balance)
                .ok_or(DispatchError::Other("Sum of balances overflows"))?;
        }
        ensure!(
            sum == TotalSupply::<T>::get(),
            DispatchError::Other("Total supply does not match sum of balances")
        );

        let count = WhitelistCount::<T>::get();
        ensure!(
            WhitelistMembers::<T>::iter_keys().count() == count as usize,
            DispatchError::Other("Whitelist sequence length does not match count")
        );
        ensure!(
            WhitelistIndex::<T>::iter_keys().count() == count as usize,
            DispatchError::Other("Whitelist set size does not match count")
        );
        for slot in 0..count {
            let member = WhitelistMembers::<T>::get(slot)
                .ok_or(DispatchError::Other("Hole in whitelist sequence"))?;
            ensure!(
                WhitelistIndex::<T>::get(&member) == Some(slot),
                DispatchError::Other("Whitelist index points to the wrong slot")
            );
        }
        Ok(())
    }
}
