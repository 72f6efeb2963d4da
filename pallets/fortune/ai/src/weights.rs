//! # Fortune AI Pallet Weights
//!
//! AI 运势模块权重定义

use frame_support::{traits::Get, weights::Weight};

/// 权重信息 Trait
pub trait WeightInfo {
    fn request_fortune() -> Weight;
    fn submit_fortune() -> Weight;
    fn cancel_request() -> Weight;
}

/// Substrate 权重实现
pub struct SubstrateWeight<T>(core::marker::PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    fn request_fortune() -> Weight {
        Weight::from_parts(50_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn submit_fortune() -> Weight {
        Weight::from_parts(70_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn cancel_request() -> Weight {
        Weight::from_parts(20_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
}

/// 默认权重实现（用于测试）
impl WeightInfo for () {
    fn request_fortune() -> Weight { Weight::from_parts(50_000_000, 0) }
    fn submit_fortune() -> Weight { Weight::from_parts(70_000_000, 0) }
    fn cancel_request() -> Weight { Weight::from_parts(20_000_000, 0) }
}
