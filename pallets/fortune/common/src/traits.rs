//! 跨模块接口定义

use crate::types::FortuneSeed;

/// 命盘数据提供者
///
/// 由排盘模块实现，供 AI 运势模块在不直接依赖排盘存储的前提下
/// 校验命盘归属并获取提示词素材。
pub trait FortuneProvider<AccountId> {
    /// 命盘是否存在
    fn reading_exists(reading_id: u64) -> bool;

    /// 命盘创建者
    fn reading_owner(reading_id: u64) -> Option<AccountId>;

    /// 导出该命盘的运势生成种子（实时计算，不落存储）
    fn fortune_seed(reading_id: u64) -> Option<FortuneSeed>;
}
