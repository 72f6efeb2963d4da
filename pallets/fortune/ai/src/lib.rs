//! # AI 高尔夫运势 Pallet (pallet-fortune-ai)
//!
//! ## 概述
//!
//! 本 Pallet 编排确定性排盘结果与外部文本生成端之间的交互：
//!
//! - 按固定模板将命盘分析渲染为运势生成提示词（见 [`prompt`]）
//! - 记录生成请求并发出事件，由链下生成器监听处理
//! - 接收生成器（预言机权限）提交的回复，解析为 11 字段运势单；
//!   回复不可用时落确定性兜底运势（见 [`response`]）
//!
//! 文本生成本身是黑盒外部协作者，本模块只负责请求编排与两侧的
//! 确定性转换。

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod weights;
pub use weights::WeightInfo;

pub mod prompt;
pub mod response;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub use response::GeneratedFortune;

#[frame_support::pallet]
pub mod pallet {
    use frame_support::{
        pallet_prelude::*, CloneNoBound, EqNoBound, PartialEqNoBound, RuntimeDebugNoBound,
    };
    use frame_system::pallet_prelude::*;
    use sp_runtime::SaturatedConversion;

    use crate::weights::WeightInfo;
    use crate::{prompt, response};
    use pallet_fortune_common::FortuneProvider;

    /// Pallet 配置 Trait
    #[pallet::config]
    pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
        /// 权重信息
        type WeightInfo: WeightInfo;

        /// 命盘数据提供者（由排盘模块实现）
        type FortuneProvider: FortuneProvider<Self::AccountId>;

        /// 生成器预言机权限来源
        type OracleOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        /// 渲染后提示词的最大字节数
        #[pallet::constant]
        type MaxPromptLen: Get<u32>;

        /// 生成器回复的最大字节数
        #[pallet::constant]
        type MaxResponseLen: Get<u32>;

        /// 运势单单个字段的最大字节数
        #[pallet::constant]
        type MaxFieldLen: Get<u32>;
    }

    #[pallet::pallet]
    pub struct Pallet<T>(_);

    /// 待处理的运势生成请求
    #[derive(
        CloneNoBound,
        PartialEqNoBound,
        EqNoBound,
        RuntimeDebugNoBound,
        Encode,
        Decode,
        TypeInfo,
        MaxEncodedLen,
    )]
    #[scale_info(skip_type_params(T))]
    #[codec(mel_bound())]
    pub struct FortuneRequest<T: Config> {
        /// 请求者
        pub requester: T::AccountId,
        /// 渲染完毕的提示词（生成器按原样消费）
        pub prompt: BoundedVec<u8, T::MaxPromptLen>,
        /// 请求时的区块高度
        pub requested_at: u64,
    }

    /// 已完成的运势单
    #[derive(
        CloneNoBound,
        PartialEqNoBound,
        EqNoBound,
        RuntimeDebugNoBound,
        Encode,
        Decode,
        TypeInfo,
        MaxEncodedLen,
    )]
    #[scale_info(skip_type_params(T))]
    #[codec(mel_bound())]
    pub struct FortuneSheet<T: Config> {
        pub title: BoundedVec<u8, T::MaxFieldLen>,
        pub lucky_club: BoundedVec<u8, T::MaxFieldLen>,
        pub lucky_ball: BoundedVec<u8, T::MaxFieldLen>,
        pub lucky_hole: BoundedVec<u8, T::MaxFieldLen>,
        pub lucky_tpo: BoundedVec<u8, T::MaxFieldLen>,
        pub round_fortune: BoundedVec<u8, T::MaxFieldLen>,
        pub betting_fortune: BoundedVec<u8, T::MaxFieldLen>,
        pub strategy_fortune: BoundedVec<u8, T::MaxFieldLen>,
        pub score_fortune: BoundedVec<u8, T::MaxFieldLen>,
        pub course_fortune: BoundedVec<u8, T::MaxFieldLen>,
        pub quote: BoundedVec<u8, T::MaxFieldLen>,
        /// 是否来自生成器回复的成功解析（false = 兜底运势）
        pub parsed: bool,
        /// 提交时的区块高度
        pub submitted_at: u64,
    }

    /// 存储映射: 命盘 ID -> 待处理请求
    #[pallet::storage]
    #[pallet::getter(fn pending_request)]
    pub type PendingRequests<T: Config> =
        StorageMap<_, Blake2_128Concat, u64, FortuneRequest<T>>;

    /// 存储映射: 命盘 ID -> 运势单
    #[pallet::storage]
    #[pallet::getter(fn fortune_of)]
    pub type Fortunes<T: Config> = StorageMap<_, Blake2_128Concat, u64, FortuneSheet<T>>;

    /// Pallet 事件
    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// 运势生成请求已提交，待链下生成器处理 [命盘ID, 请求者]
        FortuneRequested {
            reading_id: u64,
            requester: T::AccountId,
        },
        /// 运势单已就绪 [命盘ID, 是否成功解析生成器回复]
        FortuneReady { reading_id: u64, parsed: bool },
        /// 运势生成请求已取消 [命盘ID]
        RequestCancelled { reading_id: u64 },
    }

    /// Pallet 错误
    #[pallet::error]
    pub enum Error<T> {
        /// 命盘不存在
        ReadingNotFound,
        /// 非命盘所有者
        NotReadingOwner,
        /// 该命盘已有待处理请求
        RequestAlreadyPending,
        /// 请求不存在
        RequestNotFound,
        /// 非请求发起者
        NotRequester,
        /// 渲染后的提示词超长
        PromptTooLong,
        /// 运势单字段超长
        FortuneFieldTooLong,
    }

    /// Pallet 可调用函数
    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// 请求生成运势
        ///
        /// 校验命盘归属后，实时渲染提示词并登记请求；链下生成器
        /// 监听 `FortuneRequested` 事件取走提示词。
        ///
        /// # 参数
        /// - `origin`: 交易发起者（须为命盘所有者）
        /// - `reading_id`: 命盘 ID
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::request_fortune())]
        pub fn request_fortune(origin: OriginFor<T>, reading_id: u64) -> DispatchResult {
            let who = ensure_signed(origin)?;

            ensure!(
                T::FortuneProvider::reading_exists(reading_id),
                Error::<T>::ReadingNotFound
            );
            ensure!(
                T::FortuneProvider::reading_owner(reading_id).as_ref() == Some(&who),
                Error::<T>::NotReadingOwner
            );
            ensure!(
                !PendingRequests::<T>::contains_key(reading_id),
                Error::<T>::RequestAlreadyPending
            );

            let seed =
                T::FortuneProvider::fortune_seed(reading_id).ok_or(Error::<T>::ReadingNotFound)?;
            let rendered = prompt::build_prompt(&seed);
            let prompt: BoundedVec<u8, T::MaxPromptLen> =
                rendered.try_into().map_err(|_| Error::<T>::PromptTooLong)?;

            let request = FortuneRequest::<T> {
                requester: who.clone(),
                prompt,
                requested_at: frame_system::Pallet::<T>::block_number().saturated_into(),
            };
            PendingRequests::<T>::insert(reading_id, request);

            Self::deposit_event(Event::FortuneRequested { reading_id, requester: who });

            Ok(())
        }

        /// 提交生成结果（仅限预言机权限）
        ///
        /// 回复按 11 键 JSON 契约解析；解析失败时记录告警日志并落
        /// 确定性兜底运势，请求方总能拿到结构完整的运势单。
        ///
        /// # 参数
        /// - `origin`: 预言机权限来源
        /// - `reading_id`: 命盘 ID
        /// - `reply`: 生成器原始回复
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::submit_fortune())]
        pub fn submit_fortune(
            origin: OriginFor<T>,
            reading_id: u64,
            reply: BoundedVec<u8, T::MaxResponseLen>,
        ) -> DispatchResult {
            T::OracleOrigin::ensure_origin(origin)?;

            ensure!(
                PendingRequests::<T>::contains_key(reading_id),
                Error::<T>::RequestNotFound
            );

            let (generated, parsed) = match response::parse_fortune_json(&reply) {
                Some(generated) => (generated, true),
                None => {
                    log::warn!(
                        target: "fortune-ai",
                        "unparseable generator reply for reading {reading_id}, storing default fortune"
                    );
                    let seed = T::FortuneProvider::fortune_seed(reading_id)
                        .ok_or(Error::<T>::ReadingNotFound)?;
                    (response::default_fortune(&seed), false)
                }
            };

            let sheet = Self::bound_sheet(generated, parsed)?;
            PendingRequests::<T>::remove(reading_id);
            Fortunes::<T>::insert(reading_id, sheet);

            Self::deposit_event(Event::FortuneReady { reading_id, parsed });

            Ok(())
        }

        /// 取消待处理的运势请求
        ///
        /// 只有请求发起者可以取消自己的请求。
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::cancel_request())]
        pub fn cancel_request(origin: OriginFor<T>, reading_id: u64) -> DispatchResult {
            let who = ensure_signed(origin)?;

            let request =
                PendingRequests::<T>::get(reading_id).ok_or(Error::<T>::RequestNotFound)?;
            ensure!(request.requester == who, Error::<T>::NotRequester);

            PendingRequests::<T>::remove(reading_id);

            Self::deposit_event(Event::RequestCancelled { reading_id });

            Ok(())
        }
    }

    // 辅助函数
    impl<T: Config> Pallet<T> {
        fn bound_field(
            raw: sp_std::vec::Vec<u8>,
        ) -> Result<BoundedVec<u8, T::MaxFieldLen>, Error<T>> {
            raw.try_into().map_err(|_| Error::<T>::FortuneFieldTooLong)
        }

        fn bound_sheet(
            generated: response::GeneratedFortune,
            parsed: bool,
        ) -> Result<FortuneSheet<T>, Error<T>> {
            Ok(FortuneSheet::<T> {
                title: Self::bound_field(generated.title)?,
                lucky_club: Self::bound_field(generated.lucky_club)?,
                lucky_ball: Self::bound_field(generated.lucky_ball)?,
                lucky_hole: Self::bound_field(generated.lucky_hole)?,
                lucky_tpo: Self::bound_field(generated.lucky_tpo)?,
                round_fortune: Self::bound_field(generated.round_fortune)?,
                betting_fortune: Self::bound_field(generated.betting_fortune)?,
                strategy_fortune: Self::bound_field(generated.strategy_fortune)?,
                score_fortune: Self::bound_field(generated.score_fortune)?,
                course_fortune: Self::bound_field(generated.course_fortune)?,
                quote: Self::bound_field(generated.quote)?,
                parsed,
                submitted_at: frame_system::Pallet::<T>::block_number().saturated_into(),
            })
        }
    }
}
