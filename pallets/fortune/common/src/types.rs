//! 共享类型定义

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_std::vec::Vec;

/// 性别
///
/// 仅承认两个取值；RPC 边界的 `u8` 输入若不是 0/1 必须显式拒绝，
/// 不允许静默取默认值。
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen,
)]
pub enum Gender {
    /// 男性
    Male,
    /// 女性
    Female,
}

impl Gender {
    /// 从 RPC 边界的 u8 转换（0 = 男，1 = 女，其余拒绝）
    pub fn from_u8(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Male),
            1 => Some(Self::Female),
            _ => None,
        }
    }

    /// 韩文称谓（남자/여자）
    pub fn korean(&self) -> &'static str {
        match self {
            Self::Male => "남자",
            Self::Female => "여자",
        }
    }

    /// 韩文气质修饰词（남성적/여성적）
    pub fn korean_modifier(&self) -> &'static str {
        match self {
            Self::Male => "남성적",
            Self::Female => "여성적",
        }
    }
}

/// 运势生成种子
///
/// 排盘模块对一份命盘完成全部确定性计算后导出的提示词素材，
/// AI 运势模块据此渲染发往文本生成端的请求。所有文本均已预渲染
/// 为 UTF-8 字节串，列表保持排盘模块给出的固定顺序。
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode, TypeInfo)]
pub struct FortuneSeed {
    /// 用户姓名
    pub name: Vec<u8>,
    /// 出生日期（原始输入格式）
    pub birth_date: Vec<u8>,
    /// 性别
    pub gender: Gender,
    /// 差点（数值越低水平越高）
    pub skill_level: u32,
    /// 常去球场
    pub venue: Vec<u8>,
    /// 五行字符（木/火/土/金/水）
    pub element: Vec<u8>,
    /// 五行韩文名称
    pub element_name: Vec<u8>,
    /// 四柱摘要（如 庚午년 辛巳월 丙申일 甲午시）
    pub saju_summary: Vec<u8>,
    /// 性格描述
    pub personality: Vec<u8>,
    /// 球风描述
    pub golf_style: Vec<u8>,
    /// 强项（2 项，顺序固定）
    pub strengths: Vec<Vec<u8>>,
    /// 弱项（2 项，顺序固定）
    pub weaknesses: Vec<Vec<u8>>,
    /// 幸运色（2 项，顺序固定）
    pub lucky_colors: Vec<Vec<u8>>,
    /// 幸运数字（2 项，顺序固定）
    pub lucky_numbers: Vec<u8>,
    /// 建议（7 项：3 基础 + 2 五行 + 2 水平档）
    pub recommendations: Vec<Vec<u8>>,
}
