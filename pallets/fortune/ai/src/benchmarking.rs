//! # Fortune AI Pallet Benchmarking
//!
//! AI 运势模块基准测试

#![cfg(feature = "runtime-benchmarks")]

use super::*;
use frame_benchmarking::v2::*;
use frame_support::BoundedVec;
use frame_system::RawOrigin;
use pallet::*;

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn request_fortune() {
        let caller: T::AccountId = whitelisted_caller();
        let reading_id: u64 = 0;

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), reading_id);
    }

    #[benchmark]
    fn submit_fortune() {
        let reading_id: u64 = 0;
        let reply: BoundedVec<u8, T::MaxResponseLen> =
            b"{}".to_vec().try_into().expect("short reply fits bound; qed");

        #[extrinsic_call]
        _(RawOrigin::Root, reading_id, reply);
    }

    #[benchmark]
    fn cancel_request() {
        let caller: T::AccountId = whitelisted_caller();
        let reading_id: u64 = 0;

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), reading_id);
    }

    impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
