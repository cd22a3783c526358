#![cfg_attr(not(feature = "std"), no_std)]
// Allow deprecated constant weights until benchmarked weights replace them
#![allow(deprecated)]

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_std::prelude::*;

pub use pallet::*;

pub mod migrations;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

/// The entire token supply, created once at genesis and credited to the
/// creator account. 100,000,000 whole tokens at 18 decimals. The pallet
/// exposes no mint, so the supply only ever decreases (via `burn`).
pub const INITIAL_SUPPLY: u128 = 100_000_000 * 1_000_000_000_000_000_000;

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
        /// Upper bound on the number of registered admins.
        type MaxAdmins: Get<u32>;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "Aurum")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "AUR")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Token decimals (18 for the canonical deployment)
    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Total token supply. Set at genesis, reduced by burns, never increased.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Registered admins. Never empty after genesis: every removal path
    /// checks the count floor first.
    #[pallet::storage]
    #[pallet::getter(fn admins)]
    pub type Admins<T: Config> =
        StorageValue<_, BoundedVec<T::AccountId, T::MaxAdmins>, ValueQuery>;

    /// Global pause switch. While `true`, transfers and burns are rejected;
    /// admin-set and pause operations stay available.
    #[pallet::storage]
    #[pallet::getter(fn is_paused)]
    pub type Paused<T> = StorageValue<_, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens transferred from one account to another
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// Tokens destroyed by their holder; total supply reduced
        Burned { from: T::AccountId, amount: u128 },
        /// Balance-mutating operations halted
        Paused { who: T::AccountId },
        /// Balance-mutating operations resumed
        Unpaused { who: T::AccountId },
        /// Account added to the admin set
        AdminAdded { account: T::AccountId },
        /// Account removed from the admin set
        AdminRemoved { account: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The caller is not a registered admin.
        Unauthorized,
        /// The operation would leave the admin set empty.
        LastAdmin,
        /// Balance-mutating operations are currently halted.
        Paused,
        /// The caller's balance does not cover the requested amount.
        InsufficientBalance,
        /// The receiver's balance would overflow.
        Overflow,
        /// The admin set is at capacity.
        TooManyAdmins,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(10_000)]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_not_paused()?;

            let from_balance = Balances::<T>::get(&sender);
            ensure!(from_balance >= amount, Error::<T>::InsufficientBalance);

            if sender != to {
                let to_balance = Balances::<T>::get(&to);
                let credited = to_balance.checked_add(amount).ok_or(Error::<T>::Overflow)?;
                Balances::<T>::insert(&sender, from_balance - amount);
                Balances::<T>::insert(&to, credited);
            }

            Self::deposit_event(Event::Transferred { from: sender, to, amount });
            Ok(())
        }

        #[pallet::call_index(1)]
        #[pallet::weight(10_000)]
        pub fn burn(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_not_paused()?;

            let balance = Balances::<T>::get(&who);
            ensure!(balance >= amount, Error::<T>::InsufficientBalance);

            // Debit and supply reduction happen in the same dispatch, so the
            // sum-of-balances == total-supply invariant holds at every
            // observable point.
            Balances::<T>::insert(&who, balance - amount);
            TotalSupply::<T>::mutate(|supply| *supply = supply.saturating_sub(amount));

            Self::deposit_event(Event::Burned { from: who, amount });
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(10_000)]
        pub fn pause(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_admin(&who)?;

            // Idempotent: pausing an already paused ledger succeeds without
            // a second notification.
            if Paused::<T>::get() {
                return Ok(());
            }

            Paused::<T>::put(true);
            Self::deposit_event(Event::Paused { who });
            Ok(())
        }

        #[pallet::call_index(3)]
        #[pallet::weight(10_000)]
        pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_admin(&who)?;

            if !Paused::<T>::get() {
                return Ok(());
            }

            Paused::<T>::put(false);
            Self::deposit_event(Event::Unpaused { who });
            Ok(())
        }

        #[pallet::call_index(4)]
        #[pallet::weight(10_000)]
        pub fn add_admin(origin: OriginFor<T>, who: T::AccountId) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::ensure_admin(&caller)?;

            let mut admins = Admins::<T>::get();
            if admins.contains(&who) {
                // Set semantics: re-adding a member is a no-op success.
                return Ok(());
            }

            admins.try_push(who.clone()).map_err(|_| Error::<T>::TooManyAdmins)?;
            Admins::<T>::put(admins);

            Self::deposit_event(Event::AdminAdded { account: who });
            Ok(())
        }

        #[pallet::call_index(5)]
        #[pallet::weight(10_000)]
        pub fn remove_admin(origin: OriginFor<T>, who: T::AccountId) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::ensure_admin(&caller)?;

            let mut admins = Admins::<T>::get();
            // The count floor is checked before the target is inspected:
            // with a single admin left, removal is rejected even when the
            // target is not a member.
            ensure!(admins.len() > 1, Error::<T>::LastAdmin);

            if let Some(pos) = admins.iter().position(|a| a == &who) {
                admins.swap_remove(pos);
                Admins::<T>::put(admins);
                Self::deposit_event(Event::AdminRemoved { account: who });
            }
            Ok(())
        }

        #[pallet::call_index(6)]
        #[pallet::weight(10_000)]
        pub fn renounce_admin(origin: OriginFor<T>) -> DispatchResult {
            let caller = ensure_signed(origin)?;

            let mut admins = Admins::<T>::get();
            let pos =
                admins.iter().position(|a| a == &caller).ok_or(Error::<T>::Unauthorized)?;
            ensure!(admins.len() > 1, Error::<T>::LastAdmin);

            admins.swap_remove(pos);
            Admins::<T>::put(admins);

            Self::deposit_event(Event::AdminRemoved { account: caller });
            Ok(())
        }
    }

    impl<T: Config> Pallet<T> {
        /// Whether `who` is currently a registered admin.
        pub fn is_admin(who: &T::AccountId) -> bool {
            Admins::<T>::get().contains(who)
        }

        /// Number of registered admins. At least 1 after genesis.
        pub fn admin_count() -> u32 {
            Admins::<T>::get().len() as u32
        }

        /// Admin at `index` in the live set. The index is only stable until
        /// the next removal (removals swap the last member into the gap).
        pub fn admin_at(index: u32) -> Option<T::AccountId> {
            Admins::<T>::get().get(index as usize).cloned()
        }

        fn ensure_admin(who: &T::AccountId) -> DispatchResult {
            ensure!(Self::is_admin(who), Error::<T>::Unauthorized);
            Ok(())
        }

        fn ensure_not_paused() -> DispatchResult {
            ensure!(!Paused::<T>::get(), Error::<T>::Paused);
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Creator account: sole initial admin, credited with the full
        /// initial supply.
        pub creator: Option<T::AccountId>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            // Set token metadata
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);

            // Admin set and supply are initialized together: the creator
            // becomes the sole admin and holds the entire supply.
            if let Some(ref creator) = self.creator {
                let admins: BoundedVec<T::AccountId, T::MaxAdmins> =
                    sp_std::vec![creator.clone()]
                        .try_into()
                        .expect("MaxAdmins must be at least 1");
                Admins::<T>::put(admins);

                Balances::<T>::insert(creator, INITIAL_SUPPLY);
                TotalSupply::<T>::put(INITIAL_SUPPLY);
            }
        }
    }
}
