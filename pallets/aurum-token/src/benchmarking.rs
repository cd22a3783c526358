//! Benchmarking setup for pallet-aurum-token

use super::*;

#[allow(unused)]
use crate::Pallet as AurumToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

fn seed_admins<T: Config>(admins: sp_std::vec::Vec<T::AccountId>) {
    let bounded: BoundedVec<T::AccountId, T::MaxAdmins> = BoundedVec::truncate_from(admins);
    Admins::<T>::put(bounded);
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;

        Balances::<T>::insert(&caller, 10_000_000);
        TotalSupply::<T>::put(10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn burn() {
        let caller: T::AccountId = whitelisted_caller();
        let amount: u128 = 1_000_000;

        Balances::<T>::insert(&caller, 10_000_000);
        TotalSupply::<T>::put(10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), amount);

        assert_eq!(Balances::<T>::get(&caller), 9_000_000);
        assert_eq!(TotalSupply::<T>::get(), 9_000_000);
    }

    #[benchmark]
    fn pause() {
        let admin: T::AccountId = whitelisted_caller();
        seed_admins::<T>(sp_std::vec![admin.clone()]);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin));

        assert_eq!(Paused::<T>::get(), true);
    }

    #[benchmark]
    fn unpause() {
        let admin: T::AccountId = whitelisted_caller();
        seed_admins::<T>(sp_std::vec![admin.clone()]);
        Paused::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin));

        assert_eq!(Paused::<T>::get(), false);
    }

    #[benchmark]
    fn add_admin() {
        let admin: T::AccountId = whitelisted_caller();
        let target: T::AccountId = account("target", 0, 0);
        seed_admins::<T>(sp_std::vec![admin.clone()]);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), target.clone());

        assert!(AurumToken::<T>::is_admin(&target));
    }

    #[benchmark]
    fn remove_admin() {
        let admin: T::AccountId = whitelisted_caller();
        let target: T::AccountId = account("target", 0, 0);
        seed_admins::<T>(sp_std::vec![admin.clone(), target.clone()]);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), target.clone());

        assert!(!AurumToken::<T>::is_admin(&target));
    }

    #[benchmark]
    fn renounce_admin() {
        let admin: T::AccountId = whitelisted_caller();
        let other: T::AccountId = account("other", 0, 0);
        seed_admins::<T>(sp_std::vec![admin.clone(), other]);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin.clone()));

        assert!(!AurumToken::<T>::is_admin(&admin));
    }

    impl_benchmark_test_suite!(AurumToken, crate::mock::new_test_ext(), crate::mock::Test);
}
