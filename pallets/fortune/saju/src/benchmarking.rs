//! # Saju Chart Pallet Benchmarking
//!
//! 排盘模块基准测试

#![cfg(feature = "runtime-benchmarks")]

use super::*;
use frame_benchmarking::v2::*;
use frame_support::BoundedVec;
use frame_system::RawOrigin;
use pallet::*;

fn text<T: Config>(raw: &[u8]) -> BoundedVec<u8, T::MaxTextLen> {
    raw.to_vec().try_into().expect("benchmark text fits bound; qed")
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn create_reading() {
        let caller: T::AccountId = whitelisted_caller();

        #[extrinsic_call]
        _(
            RawOrigin::Signed(caller),
            text::<T>("홍길동".as_bytes()),
            b"1990.05.15".to_vec().try_into().unwrap(),
            Some(b"14:30".to_vec().try_into().unwrap()),
            Gender::Male,
            15,
            text::<T>("남서울CC".as_bytes()),
        );
    }

    #[benchmark]
    fn delete_reading() {
        let caller: T::AccountId = whitelisted_caller();
        Pallet::<T>::create_reading(
            RawOrigin::Signed(caller.clone()).into(),
            text::<T>("홍길동".as_bytes()),
            b"1990.05.15".to_vec().try_into().unwrap(),
            None,
            Gender::Female,
            22,
            text::<T>(b""),
        )
        .expect("benchmark setup creates a reading; qed");

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), 0);
    }

    impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
