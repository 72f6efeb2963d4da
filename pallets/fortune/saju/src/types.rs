//! 四柱排盘核心类型

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame_support::{
    pallet_prelude::*, CloneNoBound, EqNoBound, PartialEqNoBound, RuntimeDebugNoBound,
};
use scale_info::TypeInfo;
use sp_std::vec::Vec;

use crate::constants;
use crate::pallet::Config;

pub use pallet_fortune_common::Gender;

/// 天干（0-9：甲乙丙丁戊己庚辛壬癸）
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen,
)]
pub struct Stem(pub u8);

impl Stem {
    /// 天干汉字
    pub fn glyph(&self) -> &'static str {
        constants::STEM_GLYPHS[(self.0 % 10) as usize]
    }
}

/// 地支（0-11：子丑寅卯辰巳午未申酉戌亥）
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen,
)]
pub struct Branch(pub u8);

impl Branch {
    /// 地支汉字
    pub fn glyph(&self) -> &'static str {
        constants::BRANCH_GLYPHS[(self.0 % 12) as usize]
    }
}

/// 单柱（干支对）
///
/// 干支不是任意组合：合法柱必为六十甲子序列的成员，即干序与支序
/// 奇偶一致。构造统一走 `from_index`，或由柱算法按固定口诀推出。
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen,
)]
pub struct Pillar {
    /// 天干
    pub stem: Stem,
    /// 地支
    pub branch: Branch,
}

impl Pillar {
    /// 从六十甲子序号构造（0 = 甲子，59 = 癸亥）
    pub fn from_index(index: u8) -> Option<Self> {
        if index >= 60 {
            return None;
        }
        Some(Self { stem: Stem(index % 10), branch: Branch(index % 12) })
    }

    /// 六十甲子序号
    pub fn to_index(&self) -> u8 {
        // n ≡ stem (mod 10)，n ≡ branch (mod 12) 的唯一解
        ((6 * self.stem.0 as i32 - 5 * self.branch.0 as i32).rem_euclid(60)) as u8
    }

    /// 干支对是否为六十甲子合法成员
    pub fn is_valid(&self) -> bool {
        self.stem.0 < 10 && self.branch.0 < 12 && self.stem.0 % 2 == self.branch.0 % 2
    }

    /// 下一位干支（癸亥回到甲子）
    pub fn next(&self) -> Self {
        Self::from_index((self.to_index() + 1) % 60).expect("index < 60; qed")
    }
}

/// 四柱（年/月/日/时）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Encode, Decode, TypeInfo, MaxEncodedLen)]
pub struct FourPillars {
    /// 年柱
    pub year: Pillar,
    /// 月柱
    pub month: Pillar,
    /// 日柱
    pub day: Pillar,
    /// 时柱
    pub hour: Pillar,
}

impl FourPillars {
    /// 压缩为 8 字节索引（用于存储）
    pub fn to_index(&self) -> PillarIndex {
        PillarIndex {
            year_stem: self.year.stem.0,
            year_branch: self.year.branch.0,
            month_stem: self.month.stem.0,
            month_branch: self.month.branch.0,
            day_stem: self.day.stem.0,
            day_branch: self.day.branch.0,
            hour_stem: self.hour.stem.0,
            hour_branch: self.hour.branch.0,
        }
    }
}

/// 四柱压缩索引（8 字节）
///
/// 存储层只保留该索引，完整分析由查询时实时重算。
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen,
)]
pub struct PillarIndex {
    pub year_stem: u8,
    pub year_branch: u8,
    pub month_stem: u8,
    pub month_branch: u8,
    pub day_stem: u8,
    pub day_branch: u8,
    pub hour_stem: u8,
    pub hour_branch: u8,
}

impl PillarIndex {
    /// 还原为四柱
    pub fn to_pillars(&self) -> FourPillars {
        let pillar = |s: u8, b: u8| Pillar { stem: Stem(s % 10), branch: Branch(b % 12) };
        FourPillars {
            year: pillar(self.year_stem, self.year_branch),
            month: pillar(self.month_stem, self.month_branch),
            day: pillar(self.day_stem, self.day_branch),
            hour: pillar(self.hour_stem, self.hour_branch),
        }
    }
}

/// 五行
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen,
)]
pub enum Element {
    /// 木
    Wood,
    /// 火
    Fire,
    /// 土
    Earth,
    /// 金
    Metal,
    /// 水
    Water,
}

impl Element {
    /// 由日柱天干查五行（十干两两归一行，全射且无失败路径）
    pub fn from_stem(stem: Stem) -> Self {
        constants::STEM_ELEMENTS[(stem.0 % 10) as usize]
    }

    /// 表序（木火土金水 = 0..5）
    pub fn index(&self) -> usize {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// 五行汉字
    pub fn glyph(&self) -> &'static str {
        constants::ELEMENT_GLYPHS[self.index()]
    }

    /// 韩文名称（如 목(木) - 나무의 기운）
    pub fn korean_name(&self) -> &'static str {
        constants::ELEMENT_NAMES[self.index()]
    }

    /// 韩文详细说明
    pub fn korean_description(&self) -> &'static str {
        constants::ELEMENT_DESCRIPTIONS[self.index()]
    }
}

/// 差点水平档
///
/// 档位边界是输出稳定性契约的一部分：`<10` 专家、`10..<20` 中级、
/// `>=20` 初学，边界取值不得移动。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Encode, Decode, TypeInfo, MaxEncodedLen)]
pub enum SkillTier {
    /// 专家（差点 < 10）
    Expert,
    /// 中级（10 <= 差点 < 20）
    Intermediate,
    /// 初学（差点 >= 20）
    Beginner,
}

impl SkillTier {
    /// 由差点数值分档
    pub fn from_level(skill_level: u32) -> Self {
        if skill_level < 10 {
            Self::Expert
        } else if skill_level < 20 {
            Self::Intermediate
        } else {
            Self::Beginner
        }
    }

    /// 表序（专家/中级/初学 = 0..3）
    pub fn index(&self) -> usize {
        match self {
            Self::Expert => 0,
            Self::Intermediate => 1,
            Self::Beginner => 2,
        }
    }

    /// 韩文档位标签（전문가급/중급자/초보자）
    pub fn korean_label(&self) -> &'static str {
        constants::TIER_LABELS[self.index()]
    }
}

/// 出生时间（公历）
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen,
)]
pub struct BirthTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
}

/// 高尔夫性格分析结果
///
/// 全部字段预渲染完毕，下游直接序列化，不做惰性格式化。
/// 回退命盘携带哨兵摘要（사주 계산 실패），结构上与正常结果无异，
/// 调用方须通过 [`FortuneAnalysis::is_fallback`] 显式识别。
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode, TypeInfo)]
pub struct FortuneAnalysis {
    /// 五行
    pub element: Element,
    /// 五行韩文名称
    pub element_name: Vec<u8>,
    /// 五行韩文说明
    pub element_description: Vec<u8>,
    /// 性格描述（球风 + 水平档 + 性别气质）
    pub personality: Vec<u8>,
    /// 球风描述
    pub golf_style: Vec<u8>,
    /// 四柱摘要（{干}{支}년 … 시）
    pub saju_summary: Vec<u8>,
    /// 强项（2 项）
    pub strengths: Vec<Vec<u8>>,
    /// 弱项（2 项）
    pub weaknesses: Vec<Vec<u8>>,
    /// 幸运色（2 项）
    pub lucky_colors: Vec<Vec<u8>>,
    /// 幸运数字（2 项）
    pub lucky_numbers: Vec<u8>,
    /// 建议（7 项：3 基础 + 2 五行 + 2 水平档，顺序固定）
    pub recommendations: Vec<Vec<u8>>,
}

impl FortuneAnalysis {
    /// 是否为历法转换失败后的回退结果
    pub fn is_fallback(&self) -> bool {
        self.saju_summary == constants::FALLBACK_SUMMARY.as_bytes()
    }
}

/// 命盘存储结构
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
pub struct Reading<T: Config> {
    /// 创建者
    pub owner: T::AccountId,
    /// 用户姓名
    pub name: BoundedVec<u8, T::MaxTextLen>,
    /// 常去球场
    pub venue: BoundedVec<u8, T::MaxTextLen>,
    /// 出生时间（未提供出生时刻时为 12:00）
    pub birth_time: BirthTime,
    /// 出生时刻是否由用户提供
    pub time_provided: bool,
    /// 性别
    pub gender: Gender,
    /// 差点
    pub skill_level: u32,
    /// 四柱索引
    pub pillars: PillarIndex,
    /// 历法转换是否走了回退路径
    pub is_fallback: bool,
    /// 创建时的区块高度
    pub created_at: u64,
}
