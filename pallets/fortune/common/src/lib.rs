//! # 运势公共类型库 (pallet-fortune-common)
//!
//! 排盘模块（pallet-saju-chart）与 AI 运势模块（pallet-fortune-ai）
//! 之间共享的类型与接口，避免两个模块互相依赖。

#![cfg_attr(not(feature = "std"), no_std)]

pub mod traits;
pub mod types;

pub use traits::FortuneProvider;
pub use types::{FortuneSeed, Gender};
