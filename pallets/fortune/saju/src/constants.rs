//! 固定查表数据
//!
//! 干支字表、五行归属、月柱/时柱起法口诀表、五行高尔夫画像与建议文案。
//! 全部为进程生命周期内只读的编译期常量，运行期不可变。
//!
//! 月柱/时柱的起法本质是查表而非公式（五虎遁、五鼠遁两套口诀），
//! 按口诀原样列举，便于对照古法核对。

use crate::types::Element;

/// 十天干
pub const STEM_GLYPHS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// 十二地支
pub const BRANCH_GLYPHS: [&str; 12] =
    ["子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥"];

/// 五行字（表序：木火土金水）
pub const ELEMENT_GLYPHS: [&str; 5] = ["木", "火", "土", "金", "水"];

/// 天干五行归属表（10 -> 5，每行恰好两干）
///
/// 甲乙木、丙丁火、戊己土、庚辛金、壬癸水。
pub const STEM_ELEMENTS: [Element; 10] = [
    Element::Wood,
    Element::Wood,
    Element::Fire,
    Element::Fire,
    Element::Earth,
    Element::Earth,
    Element::Metal,
    Element::Metal,
    Element::Water,
    Element::Water,
];

/// 五虎遁：年干（按甲己/乙庚/丙辛/丁壬/戊癸分组）对应的正月天干
///
/// 甲己之年丙作首，乙庚之岁戊为头，丙辛必定寻庚起，
/// 丁壬壬位顺行流，戊癸何方发，甲寅之上好追求。
pub const FIVE_TIGER_FIRST_MONTH_STEM: [u8; 5] = [2, 4, 6, 8, 0];

/// 五鼠遁：日干（按甲己/乙庚/丙辛/丁壬/戊癸分组）对应的子时天干
///
/// 甲己还加甲，乙庚丙作初，丙辛从戊起，丁壬庚子居，戊癸何方发，壬子是真途。
pub const FIVE_RAT_FIRST_HOUR_STEM: [u8; 5] = [0, 2, 4, 6, 8];

/// 五行高尔夫画像（静态配置，表序：木火土金水）
pub struct ElementProfile {
    /// 球风描述
    pub style: &'static str,
    /// 强项（2 项，顺序固定）
    pub strengths: [&'static str; 2],
    /// 弱项（2 项，顺序固定）
    pub weaknesses: [&'static str; 2],
    /// 幸运色（2 项，顺序固定）
    pub lucky_colors: [&'static str; 2],
    /// 幸运数字（2 项，顺序固定）
    pub lucky_numbers: [u8; 2],
}

/// 五行画像表
pub const ELEMENT_PROFILES: [ElementProfile; 5] = [
    // 木
    ElementProfile {
        style: "공격적이고 도전적",
        strengths: ["드라이버", "장타"],
        weaknesses: ["퍼팅", "정확성"],
        lucky_colors: ["초록", "파랑"],
        lucky_numbers: [3, 8],
    },
    // 火
    ElementProfile {
        style: "열정적이고 활발",
        strengths: ["아이언", "어프로치"],
        weaknesses: ["멘탈", "집중력"],
        lucky_colors: ["빨강", "주황"],
        lucky_numbers: [2, 7],
    },
    // 土
    ElementProfile {
        style: "안정적이고 신중",
        strengths: ["퍼팅", "정확성"],
        weaknesses: ["장타", "공격성"],
        lucky_colors: ["노랑", "갈색"],
        lucky_numbers: [5, 0],
    },
    // 金
    ElementProfile {
        style: "정확하고 완벽주의",
        strengths: ["아이언", "샌드웨지"],
        weaknesses: ["드라이버", "유연성"],
        lucky_colors: ["흰색", "금색"],
        lucky_numbers: [4, 9],
    },
    // 水
    ElementProfile {
        style: "유연하고 적응력 좋음",
        strengths: ["퍼팅", "그린플레이"],
        weaknesses: ["아이언", "일관성"],
        lucky_colors: ["검정", "파랑"],
        lucky_numbers: [1, 6],
    },
];

/// 五行韩文名称
pub const ELEMENT_NAMES: [&str; 5] = [
    "목(木) - 나무의 기운",
    "화(火) - 불의 기운",
    "토(土) - 땅의 기운",
    "금(金) - 쇠의 기운",
    "수(水) - 물의 기운",
];

/// 五行韩文说明
pub const ELEMENT_DESCRIPTIONS: [&str; 5] = [
    "성장과 발전의 기운으로, 새로운 도전과 확장을 의미합니다. 골프에서는 공격적이고 도전적인 플레이를 선호합니다.",
    "열정과 활력의 기운으로, 리더십과 표현력을 의미합니다. 골프에서는 열정적이고 활발한 플레이를 합니다.",
    "안정과 신뢰의 기운으로, 꾸준함과 실용성을 의미합니다. 골프에서는 안정적이고 신중한 플레이를 선호합니다.",
    "정의와 완성의 기운으로, 정확성과 완벽을 의미합니다. 골프에서는 정교하고 완벽주의적인 플레이를 합니다.",
    "지혜와 적응의 기운으로, 유연성과 지혜를 의미합니다. 골프에서는 유연하고 적응력이 뛰어난 플레이를 합니다.",
];

/// 通用基础建议（3 项，建议列表的固定前缀）
pub const BASE_TIPS: [&str; 3] =
    ["충분한 워밍업을 하세요", "긍정적인 마음가짐을 유지하세요", "집중력을 높이세요"];

/// 五行专属建议（每行 2 项，表序：木火土金水）
pub const ELEMENT_TIPS: [[&str; 2]; 5] = [
    ["드라이버 연습에 집중하세요", "공격적인 플레이를 시도해보세요"],
    ["아이언 샷 연습을 많이 하세요", "열정적으로 플레이하세요"],
    ["퍼팅 연습에 시간을 투자하세요", "안정적인 플레이를 하세요"],
    ["정확성을 중시하는 연습을 하세요", "완벽을 추구하되 스트레스는 피하세요"],
    ["그린 위에서의 플레이를 연습하세요", "유연한 사고로 플레이하세요"],
];

/// 水平档建议（每档 2 项，表序：专家/中级/初学）
pub const TIER_TIPS: [[&str; 2]; 3] = [
    ["고급 기술을 연습하세요", "경기 전략을 연구하세요"],
    ["특정 클럽의 정확도를 높이세요", "멘탈 게임을 연습하세요"],
    ["기본기 연습에 집중하세요", "단계별로 실력을 향상시키세요"],
];

/// 水平档韩文标签（表序：专家/中级/初学）
pub const TIER_LABELS: [&str; 3] = ["전문가급", "중급자", "초보자"];

/// 历法转换回退时的哨兵摘要
pub const FALLBACK_SUMMARY: &str = "사주 계산 실패";

/// 出生时刻缺省哨兵（与缺省输入同义）
pub const TIME_NOT_PROVIDED_SENTINEL: &str = "미입력";
