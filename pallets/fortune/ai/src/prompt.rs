//! 提示词渲染
//!
//! 将排盘模块导出的运势种子渲染成发往文本生成端的固定结构文本块。
//! 纯模板替换，不依据内容分支；字段先后顺序与 JSON 输出键集是对外
//! 契约，增删键都会破坏下游解析。

use alloc::{format, string::String};
use sp_std::vec::Vec;

use pallet_fortune_common::FortuneSeed;

/// 生成端必须返回的 JSON 键集（顺序固定，全部为字符串值）
pub const FORTUNE_SCHEMA_KEYS: [&str; 11] = [
    "title",
    "luckyClub",
    "luckyBall",
    "luckyHole",
    "luckyTPO",
    "roundFortune",
    "bettingFortune",
    "strategyFortune",
    "scoreFortune",
    "courseFortune",
    "quote",
];

fn utf8(raw: &[u8]) -> &str {
    core::str::from_utf8(raw).unwrap_or("")
}

/// 以 ", " 连接列表字段
fn join(items: &[Vec<u8>]) -> String {
    let mut joined = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            joined.push_str(", ");
        }
        joined.push_str(utf8(item));
    }
    joined
}

/// 渲染运势生成提示词
pub fn build_prompt(seed: &FortuneSeed) -> Vec<u8> {
    format!(
        r#"당신은 전문 골프 운세사입니다. 다음 사용자 정보와 사주 분석을 바탕으로 골프 운세를 작성해주세요.

=== 사용자 정보 ===
- 이름: {name}
- 생년월일: {birth_date}
- 성별: {gender}
- 핸디캡: {skill_level}
- 자주 가는 골프장: {venue}

=== 사주 분석 결과 ===
- 사주: {saju_summary}
- 오행: {element} ({element_name})
- 성격: {personality}
- 골프 스타일: {golf_style}
- 강점: {strengths}
- 약점: {weaknesses}
- 행운 요소: {lucky_colors}
- 추천사항: {recommendations}

=== 요청사항 ===
위 정보를 바탕으로 개인화된 골프 운세를 다음 JSON 형식으로 작성해주세요:

{{
  "title": "운세 제목 (사주와 골프 스타일을 반영)",
  "luckyClub": "행운의 클럽 (강점과 오행을 고려)",
  "luckyBall": "행운의 볼 (오행 색상 고려)",
  "luckyHole": "행운의 홀 (사주와 관련)",
  "luckyTPO": "행운의 복장 (행운 색상 포함)",
  "roundFortune": "나의 전반적 기류 (올해 전체적인 골프 운세와 기류)",
  "bettingFortune": "멘탈 운 (골프 플레이 시 정신적 상태와 멘탈 관리)",
  "strategyFortune": "기술 운 (스윙, 샷 기술, 클럽 사용 등 기술적 측면)",
  "scoreFortune": "체력 운 (신체 컨디션, 지구력, 건강 상태 등)",
  "courseFortune": "대인 & 인맥 운 (골프 파트너, 동반자, 골프장 관계자 등)",
  "quote": "종합 메시지 (개인화된 마무리 메시지)"
}}

중요: 반드시 JSON 형식으로만 응답하고, 다른 설명은 포함하지 마세요."#,
        name = utf8(&seed.name),
        birth_date = utf8(&seed.birth_date),
        gender = seed.gender.korean(),
        skill_level = seed.skill_level,
        venue = utf8(&seed.venue),
        saju_summary = utf8(&seed.saju_summary),
        element = utf8(&seed.element),
        element_name = utf8(&seed.element_name),
        personality = utf8(&seed.personality),
        golf_style = utf8(&seed.golf_style),
        strengths = join(&seed.strengths),
        weaknesses = join(&seed.weaknesses),
        lucky_colors = join(&seed.lucky_colors),
        recommendations = join(&seed.recommendations),
    )
    .into_bytes()
}
