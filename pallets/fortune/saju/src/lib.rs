//! # 四柱排盘 Pallet (pallet-saju-chart)
//!
//! ## 概述
//!
//! 本 Pallet 将公历出生日期/时刻转换为传统四柱（年/月/日/时干支），
//! 由日柱天干判定五行，并结合差点水平档与性别产出确定性的高尔夫
//! 性格画像，作为 AI 运势生成的提示词素材：
//!
//! - 四柱计算（公历 → 农历 → 干支四柱，含夜子时日柱进位）
//! - 五行判定（日干查十干归五行表）
//! - 性格画像引擎（五行画像 + 水平档 + 性别修饰，7 条固定顺序建议）
//! - 命盘存储与查询（精简 8 字节四柱索引，分析实时重算）
//!
//! ## 输入契约
//!
//! - 出生日期：`YYYY.MM.DD` 或 `YYYY-MM-DD` 字面格式，二者之外拒绝
//! - 出生时刻：`HH:MM`；缺省或哨兵 `미입력` 时按正午 12:00 处理
//! - 支持公历 1900-2100 年；范围之外直接拒绝
//!
//! ## 回退策略
//!
//! 范围内但历法转换失败的日期（如 1900 年正月初一之前的公历日）
//! 不拒绝请求：按可用性优先原则落盘固定回退命盘（甲子四柱 → 木），
//! 分析摘要替换为哨兵 `사주 계산 실패`，并发出 `ConversionFellBack`
//! 事件与告警日志。调用方须通过哨兵摘要显式识别回退结果。

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod weights;
pub use weights::WeightInfo;

pub mod calculations;
pub mod constants;
pub mod interpretation;
pub mod types;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

// 重新导出核心类型，方便外部使用
pub use types::{Element, FortuneAnalysis, FourPillars, Gender, Pillar, PillarIndex, SkillTier};

#[frame_support::pallet]
pub mod pallet {
    use alloc::format;
    use frame_support::pallet_prelude::*;
    use frame_system::pallet_prelude::*;
    use sp_runtime::SaturatedConversion;

    use crate::weights::WeightInfo;
    use crate::{calculations, interpretation};

    pub use crate::types::*;

    /// Pallet 配置 Trait
    #[pallet::config]
    pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
        /// 权重信息
        type WeightInfo: WeightInfo;

        /// 每个账户最多创建的命盘数量
        #[pallet::constant]
        type MaxReadingsPerAccount: Get<u32>;

        /// 姓名/球场等文本字段的最大字节数
        #[pallet::constant]
        type MaxTextLen: Get<u32>;
    }

    #[pallet::pallet]
    pub struct Pallet<T>(_);

    /// 下一个命盘 ID 计数器
    #[pallet::storage]
    #[pallet::getter(fn next_reading_id)]
    pub type NextReadingId<T: Config> = StorageValue<_, u64, ValueQuery>;

    /// 存储映射: 命盘 ID -> 命盘详情
    #[pallet::storage]
    #[pallet::getter(fn reading_by_id)]
    pub type ReadingById<T: Config> = StorageMap<_, Blake2_128Concat, u64, Reading<T>>;

    /// 存储映射: 用户 -> 命盘 ID 列表
    #[pallet::storage]
    #[pallet::getter(fn user_readings)]
    pub type UserReadings<T: Config> = StorageMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        BoundedVec<u64, T::MaxReadingsPerAccount>,
        ValueQuery,
    >;

    /// Pallet 事件
    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// 命盘创建成功 [所有者, 命盘ID, 出生时间]
        ReadingCreated {
            owner: T::AccountId,
            reading_id: u64,
            birth_time: BirthTime,
        },
        /// 历法转换失败，命盘按固定回退落盘 [命盘ID]
        ConversionFellBack { reading_id: u64 },
        /// 命盘删除 [所有者, 命盘ID]
        ReadingDeleted {
            owner: T::AccountId,
            reading_id: u64,
        },
    }

    /// Pallet 错误
    #[pallet::error]
    pub enum Error<T> {
        /// 出生日期字符串不符合 YYYY.MM.DD / YYYY-MM-DD 格式
        InvalidDateFormat,
        /// 出生时刻字符串不符合 HH:MM 格式
        InvalidTimeFormat,
        /// 出生年份超出支持范围（1900-2100）
        BirthYearOutOfRange,
        /// 命盘数量过多
        TooManyReadings,
        /// 命盘未找到
        ReadingNotFound,
        /// 非命盘所有者
        NotReadingOwner,
        /// 命盘 ID 已达到最大值
        ReadingIdOverflow,
    }

    /// Pallet 可调用函数
    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// 创建命盘
        ///
        /// # 处理流程
        ///
        /// 1. 解析出生日期字符串（两种字面格式之外拒绝）
        /// 2. 校验年份范围（1900-2100 之外拒绝）
        /// 3. 解析出生时刻（缺省或 `미입력` 按正午处理）
        /// 4. 推算四柱；范围内转换失败时按固定回退落盘
        /// 5. 存储精简命盘并发出事件
        ///
        /// # 参数
        ///
        /// - `origin`: 交易发起者
        /// - `name`: 用户姓名（UTF-8）
        /// - `birth_date`: 出生日期字符串
        /// - `birth_time`: 出生时刻字符串（可缺省）
        /// - `gender`: 性别
        /// - `skill_level`: 差点（数值越低水平越高）
        /// - `venue`: 常去球场（UTF-8，可为空）
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::create_reading())]
        pub fn create_reading(
            origin: OriginFor<T>,
            name: BoundedVec<u8, T::MaxTextLen>,
            birth_date: BoundedVec<u8, ConstU32<16>>,
            birth_time: Option<BoundedVec<u8, ConstU32<16>>>,
            gender: Gender,
            skill_level: u32,
            venue: BoundedVec<u8, T::MaxTextLen>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            // 1. 检查账户命盘数量限制
            let existing = UserReadings::<T>::get(&who);
            ensure!(
                existing.len() < T::MaxReadingsPerAccount::get() as usize,
                Error::<T>::TooManyReadings
            );

            // 2. 解析并校验出生日期
            let (year, month, day) =
                calculations::parse_birth_date(&birth_date).ok_or(Error::<T>::InvalidDateFormat)?;
            ensure!(
                (calculations::SUPPORTED_START_YEAR..=calculations::SUPPORTED_END_YEAR)
                    .contains(&year),
                Error::<T>::BirthYearOutOfRange
            );

            // 3. 解析出生时刻；缺省与哨兵一律按正午处理
            let (hour, minute, time_provided) = match &birth_time {
                None => (12, 0, false),
                Some(raw) if calculations::is_time_sentinel(raw) => (12, 0, false),
                Some(raw) => {
                    let (h, m) =
                        calculations::parse_birth_time(raw).ok_or(Error::<T>::InvalidTimeFormat)?;
                    (h, m, true)
                }
            };

            // 4. 推算四柱；范围内转换失败时走固定回退
            let (pillars, is_fallback) = match calculations::four_pillars(year, month, day, hour) {
                Some(pillars) => (pillars, false),
                None => {
                    log::warn!(
                        target: "saju-chart",
                        "lunar conversion failed for {year:04}-{month:02}-{day:02}, storing fallback reading"
                    );
                    (interpretation::fallback_pillars(), true)
                }
            };

            // 5. 存储命盘
            let reading_id = NextReadingId::<T>::get();
            ensure!(reading_id < u64::MAX, Error::<T>::ReadingIdOverflow);

            let birth_time = BirthTime { year, month, day, hour, minute };
            let reading = Reading::<T> {
                owner: who.clone(),
                name,
                venue,
                birth_time,
                time_provided,
                gender,
                skill_level,
                pillars: pillars.to_index(),
                is_fallback,
                created_at: frame_system::Pallet::<T>::block_number().saturated_into(),
            };

            ReadingById::<T>::insert(reading_id, reading);
            UserReadings::<T>::try_mutate(&who, |readings| {
                readings.try_push(reading_id).map_err(|_| Error::<T>::TooManyReadings)
            })?;
            NextReadingId::<T>::put(reading_id + 1);

            // 6. 触发事件
            if is_fallback {
                Self::deposit_event(Event::ConversionFellBack { reading_id });
            }
            Self::deposit_event(Event::ReadingCreated { owner: who, reading_id, birth_time });

            Ok(())
        }

        /// 删除命盘
        ///
        /// 只有命盘所有者可以删除自己的命盘。
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::delete_reading())]
        pub fn delete_reading(origin: OriginFor<T>, reading_id: u64) -> DispatchResult {
            let who = ensure_signed(origin)?;

            let reading = ReadingById::<T>::get(reading_id).ok_or(Error::<T>::ReadingNotFound)?;
            ensure!(reading.owner == who, Error::<T>::NotReadingOwner);

            ReadingById::<T>::remove(reading_id);
            UserReadings::<T>::mutate(&who, |readings| {
                if let Some(pos) = readings.iter().position(|&id| id == reading_id) {
                    readings.remove(pos);
                }
            });

            Self::deposit_event(Event::ReadingDeleted { owner: who, reading_id });

            Ok(())
        }
    }

    // 辅助函数与 RPC 接口
    impl<T: Config> Pallet<T> {
        /// 命盘对应的性格分析（实时重算，不落存储）
        pub fn analysis_of(reading_id: u64) -> Option<FortuneAnalysis> {
            let reading = ReadingById::<T>::get(reading_id)?;
            Some(Self::analysis_for(&reading))
        }

        fn analysis_for(reading: &Reading<T>) -> FortuneAnalysis {
            if reading.is_fallback {
                interpretation::fallback_analysis(reading.skill_level, reading.gender)
            } else {
                interpretation::derive_traits(
                    &reading.pillars.to_pillars(),
                    reading.skill_level,
                    reading.gender,
                )
            }
        }

        /// RPC 接口：临时排盘（不存储，免费）
        ///
        /// # 参数
        /// - `year`/`month`/`day`: 公历出生日期
        /// - `hour`: 出生小时（`None` 表示未提供，按正午 12 时处理）
        /// - `gender`: 性别 (0 = 男, 1 = 女；其余取值显式拒绝，不取默认)
        /// - `skill_level`: 差点
        ///
        /// # 返回
        /// - `Some(FortuneAnalysis)`: 分析结果（范围内转换失败时为回退结果）
        /// - `None`: 输入参数无效
        pub fn analyze_temp(
            year: u16,
            month: u8,
            day: u8,
            hour: Option<u8>,
            gender: u8,
            skill_level: u32,
        ) -> Option<FortuneAnalysis> {
            let gender = Gender::from_u8(gender)?;
            if year < calculations::SUPPORTED_START_YEAR
                || year > calculations::SUPPORTED_END_YEAR
            {
                return None;
            }
            let hour = hour.unwrap_or(12);
            if hour > 23 || !fortune_almanac::validate_solar_date(year, month, day) {
                return None;
            }

            match calculations::four_pillars(year, month, day, hour) {
                Some(pillars) => {
                    Some(interpretation::derive_traits(&pillars, skill_level, gender))
                }
                None => Some(interpretation::fallback_analysis(skill_level, gender)),
            }
        }
    }

    // ==================== FortuneProvider 实现 ====================

    /// 实现 FortuneProvider trait，使排盘结果能够接入 AI 运势模块
    impl<T: Config> pallet_fortune_common::FortuneProvider<T::AccountId> for Pallet<T> {
        /// 命盘是否存在
        fn reading_exists(reading_id: u64) -> bool {
            ReadingById::<T>::contains_key(reading_id)
        }

        /// 命盘创建者
        fn reading_owner(reading_id: u64) -> Option<T::AccountId> {
            ReadingById::<T>::get(reading_id).map(|reading| reading.owner)
        }

        /// 导出运势生成种子（实时重算分析）
        fn fortune_seed(reading_id: u64) -> Option<pallet_fortune_common::FortuneSeed> {
            let reading = ReadingById::<T>::get(reading_id)?;
            let analysis = Self::analysis_for(&reading);

            let birth_date = format!(
                "{:04}.{:02}.{:02}",
                reading.birth_time.year, reading.birth_time.month, reading.birth_time.day
            )
            .into_bytes();

            Some(pallet_fortune_common::FortuneSeed {
                name: reading.name.to_vec(),
                birth_date,
                gender: reading.gender,
                skill_level: reading.skill_level,
                venue: reading.venue.to_vec(),
                element: analysis.element.glyph().as_bytes().to_vec(),
                element_name: analysis.element_name,
                saju_summary: analysis.saju_summary,
                personality: analysis.personality,
                golf_style: analysis.golf_style,
                strengths: analysis.strengths,
                weaknesses: analysis.weaknesses,
                lucky_colors: analysis.lucky_colors,
                lucky_numbers: analysis.lucky_numbers,
                recommendations: analysis.recommendations,
            })
        }
    }
}
