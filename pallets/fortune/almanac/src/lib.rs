//! # 历法库 (fortune-almanac)
//!
//! ## 概述
//!
//! 本地农历计算库（预存储 1900-2100 共 201 年数据），为排盘模块提供
//! 公历/农历互转与儒略日计算等基础能力。全部为纯函数，无链上状态。
//!
//! ## 功能特性
//!
//! - 公历转农历 / 农历转公历（含闰月处理）
//! - 儒略日（JDN）与公历日期互转
//! - 公历日期合法性校验
//!
//! ## 数据范围
//!
//! 农历数据表以 1900 年正月初一（公历 1900-01-31）为锚点，覆盖至
//! 2100 年腊月。锚点之前或表外的日期一律返回 `None`，由调用方决定
//! 回退策略。

#![cfg_attr(not(feature = "std"), no_std)]

pub mod lunar;
pub mod lunar_data;

pub use lunar::{
    from_julian_day, is_leap_year, julian_day, lunar_to_solar, solar_month_days, solar_to_lunar,
    validate_solar_date, LunarDate,
};

/// 农历数据起始年
pub const LUNAR_START_YEAR: u16 = 1900;
/// 农历数据结束年
pub const LUNAR_END_YEAR: u16 = 2100;
