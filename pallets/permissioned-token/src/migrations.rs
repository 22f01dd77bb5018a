//! Storage migrations for pallet-permissioned-token.
//!
//! Each migration is versioned, checks the on-chain storage version first and
//! runs exactly once. Wire them into the runtime's `Executive` migration tuple:
//!
//! ```ignore
//! pub type Executive = frame_executive::Executive<
//!     Runtime,
//!     Block,
//!     frame_system::ChainContext<Runtime>,
//!     Runtime,
//!     AllPalletsWithSystem,
//!     pallet_permissioned_token::migrations::v2::MigrateToV2<Runtime>,
//! >;
//! ```

use frame_support::{pallet_prelude::*, traits::OnRuntimeUpgrade};
use sp_std::marker::PhantomData;

use crate::{Config, Pallet, WhitelistEnabled, LOG_TARGET};

/// Migration from the v1 whitelist layout to indexed membership.
///
/// v1 stored the whitelist as `Whitelist: map AccountId => bool`, could not
/// enumerate members and always enforced the whitelist on transfers. v2 keeps
/// membership in `WhitelistIndex` / `WhitelistMembers` / `WhitelistCount` and
/// gates enforcement behind `WhitelistEnabled`.
///
/// Flagged entries are appended in storage iteration order. The gate is
/// switched on so that transfers stay restricted exactly as before.
pub mod v2 {
    use super::*;

    pub(crate) mod v1 {
        use super::*;

        #[frame_support::storage_alias]
        pub type Whitelist<T: Config> = StorageMap<
            Pallet<T>,
            Blake2_128Concat,
            <T as frame_system::Config>::AccountId,
            bool,
            ValueQuery,
        >;
    }

    pub struct MigrateToV2<T>(PhantomData<T>);

    impl<T: Config> OnRuntimeUpgrade for MigrateToV2<T> {
        fn on_runtime_upgrade() -> Weight {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();

            if on_chain_version != 1 {
                log::info!(
                    target: LOG_TARGET,
                    "Storage at v{on_chain_version:?}, skipping v2 migration"
                );
                return T::DbWeight::get().reads(1);
            }

            let mut reads: u64 = 1;
            let mut writes: u64 = 0;
            let mut migrated: u32 = 0;

            for (account, whitelisted) in v1::Whitelist::<T>::drain() {
                reads += 1;
                writes += 1;
                if !whitelisted || Pallet::<T>::is_null_account(&account) {
                    continue;
                }
                reads += 2;
                match Pallet::<T>::insert_member(&account) {
                    Ok(true) => {
                        migrated += 1;
                        writes += 3;
                    },
                    Ok(false) => {},
                    Err(e) => {
                        log::error!(
                            target: LOG_TARGET,
                            "Could not migrate whitelist entry {account:?}: {e:?}"
                        );
                    },
                }
            }

            WhitelistEnabled::<T>::put(true);
            StorageVersion::new(2).put::<Pallet<T>>();
            writes += 2;

            log::info!(
                target: LOG_TARGET,
                "Migrated {migrated} whitelist entries to indexed storage (v1 → v2)"
            );

            T::DbWeight::get().reads_writes(reads, writes)
        }

        #[cfg(feature = "try-runtime")]
        fn pre_upgrade() -> Result<sp_std::vec::Vec<u8>, sp_runtime::TryRuntimeError> {
            let migrating = Pallet::<T>::on_chain_storage_version() == 1;
            let flagged =
                v1::Whitelist::<T>::iter().filter(|(_, whitelisted)| *whitelisted).count() as u32;
            let already = crate::WhitelistCount::<T>::get();
            Ok((migrating, flagged, already).encode())
        }

        #[cfg(feature = "try-runtime")]
        fn post_upgrade(state: sp_std::vec::Vec<u8>) -> Result<(), sp_runtime::TryRuntimeError> {
            let (migrating, flagged, already): (bool, u32, u32) = Decode::decode(&mut &state[..])
                .map_err(|_| sp_runtime::TryRuntimeError::Other("Failed to decode pre-state"))?;

            frame_support::ensure!(
                Pallet::<T>::on_chain_storage_version() >= 2,
                sp_runtime::TryRuntimeError::Other("Migration to v2 did not complete")
            );
            if migrating {
                frame_support::ensure!(
                    v1::Whitelist::<T>::iter().next().is_none(),
                    sp_runtime::TryRuntimeError::Other("v1 whitelist not drained")
                );
                frame_support::ensure!(
                    crate::WhitelistCount::<T>::get() <= already.saturating_add(flagged),
                    sp_runtime::TryRuntimeError::Other("More members than flagged v1 entries")
                );
            }
            Pallet::<T>::do_try_state()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{ExtBuilder, PermissionedToken, Test};
    use frame_support::traits::StorageVersion;

    fn v1_ext() -> sp_io::TestExternalities {
        ExtBuilder::default().whitelist_enabled(false).whitelisted(vec![]).build()
    }

    #[test]
    fn migration_v2_moves_flagged_accounts() {
        v1_ext().execute_with(|| {
            StorageVersion::new(1).put::<Pallet<Test>>();
            v2::v1::Whitelist::<Test>::insert(2, true);
            v2::v1::Whitelist::<Test>::insert(3, true);
            v2::v1::Whitelist::<Test>::insert(4, false);

            let _weight = v2::MigrateToV2::<Test>::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 2);
            assert!(PermissionedToken::is_whitelisted(&2));
            assert!(PermissionedToken::is_whitelisted(&3));
            assert!(!PermissionedToken::is_whitelisted(&4));
            assert_eq!(PermissionedToken::whitelist_count(), 2);

            let mut members = PermissionedToken::list_members();
            members.sort();
            assert_eq!(members, vec![2, 3]);

            // v1 enforced the whitelist unconditionally
            assert!(PermissionedToken::whitelist_enabled());
            assert_eq!(v2::v1::Whitelist::<Test>::iter().count(), 0);
            PermissionedToken::do_try_state().unwrap();
        });
    }

    #[test]
    fn migration_v2_skips_null_account() {
        v1_ext().execute_with(|| {
            StorageVersion::new(1).put::<Pallet<Test>>();
            v2::v1::Whitelist::<Test>::insert(0, true);
            v2::v1::Whitelist::<Test>::insert(7, true);

            v2::MigrateToV2::<Test>::on_runtime_upgrade();

            assert_eq!(PermissionedToken::list_members(), vec![7]);
        });
    }

    #[test]
    fn migration_v2_idempotent() {
        v1_ext().execute_with(|| {
            StorageVersion::new(1).put::<Pallet<Test>>();
            v2::v1::Whitelist::<Test>::insert(5, true);

            v2::MigrateToV2::<Test>::on_runtime_upgrade();
            assert_eq!(PermissionedToken::whitelist_count(), 1);

            // Stray v1 data written after the upgrade is ignored
            v2::v1::Whitelist::<Test>::insert(6, true);
            v2::MigrateToV2::<Test>::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 2);
            assert_eq!(PermissionedToken::whitelist_count(), 1);
            assert!(!PermissionedToken::is_whitelisted(&6));
        });
    }

    #[test]
    fn migration_v2_skipped_on_other_versions() {
        v1_ext().execute_with(|| {
            StorageVersion::new(0).put::<Pallet<Test>>();
            v2::v1::Whitelist::<Test>::insert(5, true);

            v2::MigrateToV2::<Test>::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 0);
            assert!(!PermissionedToken::is_whitelisted(&5));
            assert!(!PermissionedToken::whitelist_enabled());
        });
    }
}
