//! 性格分析引擎
//!
//! 由五行、差点水平档与性别三项输入查表合成完整的高尔夫性格画像。
//! 引擎完全确定：同样输入永远得到同样的预渲染文本，方便下游
//! 直接序列化与断言。

use alloc::format;
use sp_std::vec::Vec;

use crate::constants::{
    BASE_TIPS, ELEMENT_PROFILES, ELEMENT_TIPS, FALLBACK_SUMMARY, TIER_TIPS,
};
use crate::types::{Element, FortuneAnalysis, FourPillars, Gender, Pillar, SkillTier};

/// 四柱摘要（{干}{支}년 {干}{支}월 {干}{支}일 {干}{支}시）
pub fn pillar_summary(pillars: &FourPillars) -> Vec<u8> {
    format!(
        "{}{}년 {}{}월 {}{}일 {}{}시",
        pillars.year.stem.glyph(),
        pillars.year.branch.glyph(),
        pillars.month.stem.glyph(),
        pillars.month.branch.glyph(),
        pillars.day.stem.glyph(),
        pillars.day.branch.glyph(),
        pillars.hour.stem.glyph(),
        pillars.hour.branch.glyph(),
    )
    .into_bytes()
}

/// 建议列表：3 条基础 + 2 条五行专属 + 2 条水平档专属
///
/// 数量与先后顺序是输出契约的一部分，不可重排。
pub fn recommendations(element: Element, tier: SkillTier) -> Vec<Vec<u8>> {
    let mut tips = Vec::with_capacity(7);
    for tip in BASE_TIPS {
        tips.push(tip.as_bytes().to_vec());
    }
    for tip in ELEMENT_TIPS[element.index()] {
        tips.push(tip.as_bytes().to_vec());
    }
    for tip in TIER_TIPS[tier.index()] {
        tips.push(tip.as_bytes().to_vec());
    }
    tips
}

/// 由四柱推导完整性格分析
///
/// 五行取自日柱天干；水平档按固定阈值分档；性别只在性格描述中
/// 附加气质修饰词。
pub fn derive_traits(pillars: &FourPillars, skill_level: u32, gender: Gender) -> FortuneAnalysis {
    let element = Element::from_stem(pillars.day.stem);
    let tier = SkillTier::from_level(skill_level);
    let profile = &ELEMENT_PROFILES[element.index()];

    let personality =
        format!("{} ({}, {})", profile.style, tier.korean_label(), gender.korean_modifier());

    FortuneAnalysis {
        element,
        element_name: element.korean_name().as_bytes().to_vec(),
        element_description: element.korean_description().as_bytes().to_vec(),
        personality: personality.into_bytes(),
        golf_style: profile.style.as_bytes().to_vec(),
        saju_summary: pillar_summary(pillars),
        strengths: profile.strengths.iter().map(|s| s.as_bytes().to_vec()).collect(),
        weaknesses: profile.weaknesses.iter().map(|s| s.as_bytes().to_vec()).collect(),
        lucky_colors: profile.lucky_colors.iter().map(|s| s.as_bytes().to_vec()).collect(),
        lucky_numbers: profile.lucky_numbers.to_vec(),
        recommendations: recommendations(element, tier),
    }
}

/// 历法转换失败时的回退分析
///
/// 固定取甲子四柱（日干甲 → 木），摘要替换为哨兵字符串，结构上
/// 与正常结果完全一致，保证下游始终拿到合法的分析包。
pub fn fallback_analysis(skill_level: u32, gender: Gender) -> FortuneAnalysis {
    let jiazi = Pillar::from_index(0).expect("0 < 60; qed");
    let pillars = FourPillars { year: jiazi, month: jiazi, day: jiazi, hour: jiazi };
    let mut analysis = derive_traits(&pillars, skill_level, gender);
    analysis.saju_summary = FALLBACK_SUMMARY.as_bytes().to_vec();
    analysis
}

/// 回退命盘使用的四柱索引（甲子 × 4）
pub fn fallback_pillars() -> FourPillars {
    let jiazi = Pillar::from_index(0).expect("0 < 60; qed");
    FourPillars { year: jiazi, month: jiazi, day: jiazi, hour: jiazi }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Stem;

    fn sample_pillars() -> FourPillars {
        // 庚午년 辛巳월 丙申일 甲午시
        FourPillars {
            year: Pillar::from_index(6).unwrap(),
            month: Pillar::from_index(17).unwrap(),
            day: Pillar::from_index(32).unwrap(),
            hour: Pillar::from_index(30).unwrap(),
        }
    }

    #[test]
    fn stem_element_table_is_total_and_balanced() {
        // 十干全射五行，每行恰好两干
        let mut counts = [0u8; 5];
        for stem in 0..10u8 {
            counts[Element::from_stem(Stem(stem)).index()] += 1;
        }
        assert_eq!(counts, [2, 2, 2, 2, 2]);
    }

    #[test]
    fn tier_boundaries_are_exact() {
        assert_eq!(SkillTier::from_level(0), SkillTier::Expert);
        assert_eq!(SkillTier::from_level(9), SkillTier::Expert);
        assert_eq!(SkillTier::from_level(10), SkillTier::Intermediate);
        assert_eq!(SkillTier::from_level(19), SkillTier::Intermediate);
        assert_eq!(SkillTier::from_level(20), SkillTier::Beginner);
        assert_eq!(SkillTier::from_level(54), SkillTier::Beginner);
    }

    #[test]
    fn recommendations_order_and_length() {
        let tips = recommendations(Element::Wood, SkillTier::Expert);
        assert_eq!(tips.len(), 7);
        // 固定顺序：基础 3 条、五行 2 条、水平档 2 条
        let expected: Vec<&str> = vec![
            "충분한 워밍업을 하세요",
            "긍정적인 마음가짐을 유지하세요",
            "집중력을 높이세요",
            "드라이버 연습에 집중하세요",
            "공격적인 플레이를 시도해보세요",
            "고급 기술을 연습하세요",
            "경기 전략을 연구하세요",
        ];
        for (tip, want) in tips.iter().zip(expected) {
            assert_eq!(tip, want.as_bytes());
        }
    }

    #[test]
    fn tier_tips_respect_boundaries() {
        // 差点 9 → 专家建议；差点 10 → 中级建议
        let expert = derive_traits(&sample_pillars(), 9, Gender::Male);
        assert_eq!(expert.recommendations[5], "고급 기술을 연습하세요".as_bytes());
        let mid = derive_traits(&sample_pillars(), 10, Gender::Male);
        assert_eq!(mid.recommendations[5], "특정 클럽의 정확도를 높이세요".as_bytes());
        let beginner = derive_traits(&sample_pillars(), 20, Gender::Male);
        assert_eq!(beginner.recommendations[5], "기본기 연습에 집중하세요".as_bytes());
    }

    #[test]
    fn pillar_summary_format() {
        let summary = pillar_summary(&sample_pillars());
        assert_eq!(
            summary,
            "庚午년 辛巳월 丙申일 甲午시".as_bytes()
        );
    }

    #[test]
    fn derive_traits_renders_profile() {
        // 丙申日 → 日干丙 → 火
        let analysis = derive_traits(&sample_pillars(), 15, Gender::Female);
        assert_eq!(analysis.element, Element::Fire);
        assert_eq!(analysis.element_name, "화(火) - 불의 기운".as_bytes());
        assert_eq!(analysis.golf_style, "열정적이고 활발".as_bytes());
        assert_eq!(analysis.personality, "열정적이고 활발 (중급자, 여성적)".as_bytes());
        assert_eq!(analysis.strengths.len(), 2);
        assert_eq!(analysis.weaknesses.len(), 2);
        assert_eq!(analysis.lucky_colors.len(), 2);
        assert_eq!(analysis.lucky_numbers, vec![2, 7]);
        assert!(!analysis.is_fallback());
    }

    #[test]
    fn gender_modifier_is_the_only_gender_effect() {
        let male = derive_traits(&sample_pillars(), 15, Gender::Male);
        let female = derive_traits(&sample_pillars(), 15, Gender::Female);
        assert_ne!(male.personality, female.personality);
        assert_eq!(male.golf_style, female.golf_style);
        assert_eq!(male.recommendations, female.recommendations);
    }

    #[test]
    fn fallback_is_wood_with_sentinel_summary() {
        let analysis = fallback_analysis(25, Gender::Male);
        assert!(analysis.is_fallback());
        assert_eq!(analysis.element, Element::Wood);
        assert_eq!(analysis.saju_summary, FALLBACK_SUMMARY.as_bytes());
        // 回退包结构完整：建议仍是 7 条
        assert_eq!(analysis.recommendations.len(), 7);
    }
}
