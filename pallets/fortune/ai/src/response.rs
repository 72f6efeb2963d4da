//! 生成结果解析与兜底运势
//!
//! 生成端约定只返回一个 JSON 对象（11 个字符串键）。本模块负责：
//! - 从原始回复中截取 JSON 并解析为 [`GeneratedFortune`]
//! - 回复缺键、非字符串值或完全不可解析时，由运势种子确定性地
//!   合成一份兜底运势，保证请求方总能拿到结构完整的运势单

use alloc::{format, string::String};
use lite_json::{json::JsonValue, json_parser::parse_json};
use sp_std::vec::Vec;

use pallet_fortune_common::FortuneSeed;

/// 生成端返回的运势单（11 个字段，与提示词中的 JSON 键一一对应）
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedFortune {
    pub title: Vec<u8>,
    pub lucky_club: Vec<u8>,
    pub lucky_ball: Vec<u8>,
    pub lucky_hole: Vec<u8>,
    pub lucky_tpo: Vec<u8>,
    pub round_fortune: Vec<u8>,
    pub betting_fortune: Vec<u8>,
    pub strategy_fortune: Vec<u8>,
    pub score_fortune: Vec<u8>,
    pub course_fortune: Vec<u8>,
    pub quote: Vec<u8>,
}

fn utf8(raw: &[u8]) -> &str {
    core::str::from_utf8(raw).unwrap_or("")
}

fn string_field(fields: &[(Vec<char>, JsonValue)], key: &str) -> Option<Vec<u8>> {
    let (_, value) = fields.iter().find(|(k, _)| k.iter().copied().eq(key.chars()))?;
    match value {
        JsonValue::String(chars) => {
            let text: String = chars.iter().collect();
            Some(text.into_bytes())
        }
        _ => None,
    }
}

/// 解析生成端的 JSON 回复
///
/// 生成模型偶尔会在 JSON 前后夹带说明文字，解析前先截取首个 `{`
/// 到最后一个 `}` 之间的片段。11 个键缺一不可，值必须是字符串。
pub fn parse_fortune_json(raw: &[u8]) -> Option<GeneratedFortune> {
    let text = core::str::from_utf8(raw).ok()?;
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    let parsed = parse_json(&text[start..=end]).ok()?;

    let fields = match parsed {
        JsonValue::Object(fields) => fields,
        _ => return None,
    };

    Some(GeneratedFortune {
        title: string_field(&fields, "title")?,
        lucky_club: string_field(&fields, "luckyClub")?,
        lucky_ball: string_field(&fields, "luckyBall")?,
        lucky_hole: string_field(&fields, "luckyHole")?,
        lucky_tpo: string_field(&fields, "luckyTPO")?,
        round_fortune: string_field(&fields, "roundFortune")?,
        betting_fortune: string_field(&fields, "bettingFortune")?,
        strategy_fortune: string_field(&fields, "strategyFortune")?,
        score_fortune: string_field(&fields, "scoreFortune")?,
        course_fortune: string_field(&fields, "courseFortune")?,
        quote: string_field(&fields, "quote")?,
    })
}

fn list_contains(items: &[Vec<u8>], needle: &str) -> bool {
    items.iter().any(|item| item == needle.as_bytes())
}

fn first_or(items: &[Vec<u8>], fallback: &str) -> Vec<u8> {
    items.first().cloned().unwrap_or_else(|| fallback.as_bytes().to_vec())
}

/// 强项 → 行运球杆
fn lucky_club(strengths: &[Vec<u8>]) -> &'static str {
    if list_contains(strengths, "드라이버") {
        "드라이버"
    } else if list_contains(strengths, "아이언") {
        "아이언"
    } else if list_contains(strengths, "퍼팅") {
        "퍼터"
    } else if list_contains(strengths, "웨지") {
        "웨지"
    } else {
        "아이언"
    }
}

/// 幸运色 → 行运球
fn lucky_ball(colors: &[Vec<u8>]) -> &'static str {
    if list_contains(colors, "파랑") {
        "타이틀리스트 Pro V1"
    } else if list_contains(colors, "빨강") {
        "테일러메이드 TP5"
    } else if list_contains(colors, "초록") {
        "브리지스톤 B XS"
    } else if list_contains(colors, "노랑") {
        "콜웨이 ERC Soft"
    } else {
        "타이틀리스트 Pro V1"
    }
}

/// 首位幸运色 → 行运着装
fn lucky_tpo(colors: &[Vec<u8>]) -> &'static str {
    let first = colors.first().map(|c| c.as_slice()).unwrap_or(b"");
    match first {
        b if b == "파랑".as_bytes() => "청색 상의, 하얀색 하의",
        b if b == "빨강".as_bytes() => "빨간색 상의, 검은색 하의",
        b if b == "초록".as_bytes() => "초록색 상의, 하얀색 하의",
        b if b == "노랑".as_bytes() => "노란색 상의, 검은색 하의",
        b if b == "흰색".as_bytes() => "하얀색 상의, 검은색 하의",
        _ => "청색 상의, 하얀색 하의",
    }
}

/// 差点 → 韩文水平称呼（兜底文案专用口语档）
fn handicap_level(skill_level: u32) -> &'static str {
    if skill_level < 10 {
        "싱글"
    } else if skill_level < 20 {
        "중급"
    } else {
        "초심자"
    }
}

/// 由运势种子确定性合成兜底运势单
///
/// 生成端回复不可用时的降级路径：行运球杆取自强项、行运球与着装
/// 取自幸运色、行运球洞取自首位幸运数字，文案由画像字段拼接。
pub fn default_fortune(seed: &FortuneSeed) -> GeneratedFortune {
    let level = handicap_level(seed.skill_level);
    let personality = utf8(&seed.personality);
    let golf_style = utf8(&seed.golf_style);
    let element = utf8(&seed.element);
    let element_name = utf8(&seed.element_name);
    let strength = first_or(&seed.strengths, "드라이버");
    let strength = utf8(&strength);
    let weakness = first_or(&seed.weaknesses, "퍼팅");
    let weakness = utf8(&weakness);
    let lucky_number = seed.lucky_numbers.first().copied().unwrap_or(5);
    let venue = if seed.venue.is_empty() { "평지 코스" } else { utf8(&seed.venue) };

    GeneratedFortune {
        title: format!("{}님의 오늘 골프 운세", utf8(&seed.name)).into_bytes(),
        lucky_club: lucky_club(&seed.strengths).as_bytes().to_vec(),
        lucky_ball: lucky_ball(&seed.lucky_colors).as_bytes().to_vec(),
        lucky_hole: format!("{lucky_number}번홀").into_bytes(),
        lucky_tpo: lucky_tpo(&seed.lucky_colors).as_bytes().to_vec(),
        round_fortune: format!("{personality}한 성격으로 {golf_style}한 플레이가 좋겠습니다.")
            .into_bytes(),
        betting_fortune: format!(
            "{level} 레벨에 맞는 작은 내기만 하세요. {strength}이 강점이니 이를 활용하세요."
        )
        .into_bytes(),
        strategy_fortune: format!(
            "{strength}을 활용하고 {weakness}을 보완하는 전략으로 플레이하세요."
        )
        .into_bytes(),
        score_fortune: format!(
            "{level} 레벨에 맞는 목표를 설정하세요. {weakness}을 보완하는 연습이 필요합니다."
        )
        .into_bytes(),
        course_fortune: format!(
            "{element} 오행의 기운에 맞는 코스를 선택하세요. {venue}가 좋겠습니다."
        )
        .into_bytes(),
        quote: format!(
            "{personality}한 마음으로 골프를 즐기세요. {element_name}이 당신을 응원합니다."
        )
        .into_bytes(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pallet_fortune_common::Gender;

    fn sample_seed() -> FortuneSeed {
        FortuneSeed {
            name: "홍길동".as_bytes().to_vec(),
            birth_date: b"1990.05.15".to_vec(),
            gender: Gender::Female,
            skill_level: 25,
            venue: Vec::new(),
            element: "木".as_bytes().to_vec(),
            element_name: "목(木) - 나무의 기운".as_bytes().to_vec(),
            saju_summary: "庚午년 辛巳월 甲辰일 庚午시".as_bytes().to_vec(),
            personality: "공격적이고 도전적 (초보자, 여성적)".as_bytes().to_vec(),
            golf_style: "공격적이고 도전적".as_bytes().to_vec(),
            strengths: vec!["드라이버".as_bytes().to_vec(), "장타".as_bytes().to_vec()],
            weaknesses: vec!["퍼팅".as_bytes().to_vec(), "정확성".as_bytes().to_vec()],
            lucky_colors: vec!["초록".as_bytes().to_vec(), "파랑".as_bytes().to_vec()],
            lucky_numbers: vec![3, 8],
            recommendations: Vec::new(),
        }
    }

    #[test]
    fn parses_complete_json_reply() {
        let reply = r#"{
            "title": "금의 기운이 빛나는 날",
            "luckyClub": "아이언",
            "luckyBall": "타이틀리스트 Pro V1",
            "luckyHole": "4번홀",
            "luckyTPO": "흰색 상의, 검은색 하의",
            "roundFortune": "전반적으로 안정적인 기류입니다.",
            "bettingFortune": "멘탈이 흔들리지 않는 하루.",
            "strategyFortune": "아이언 샷이 특히 좋습니다.",
            "scoreFortune": "체력 관리에 신경 쓰세요.",
            "courseFortune": "동반자 운이 좋습니다.",
            "quote": "오늘도 즐거운 라운드 되세요."
        }"#
        .as_bytes();

        let fortune = parse_fortune_json(reply).unwrap();
        assert_eq!(fortune.title, "금의 기운이 빛나는 날".as_bytes());
        assert_eq!(fortune.lucky_hole, "4번홀".as_bytes());
        assert_eq!(fortune.quote, "오늘도 즐거운 라운드 되세요.".as_bytes());
    }

    #[test]
    fn parses_json_wrapped_in_extra_text() {
        let reply = "다음은 운세입니다:\n{\"title\":\"t\",\"luckyClub\":\"c\",\"luckyBall\":\"b\",\"luckyHole\":\"h\",\"luckyTPO\":\"p\",\"roundFortune\":\"r\",\"bettingFortune\":\"be\",\"strategyFortune\":\"st\",\"scoreFortune\":\"sc\",\"courseFortune\":\"co\",\"quote\":\"q\"}\n이상입니다.";
        let fortune = parse_fortune_json(reply.as_bytes()).unwrap();
        assert_eq!(fortune.title, b"t");
        assert_eq!(fortune.course_fortune, b"co");
    }

    #[test]
    fn missing_key_fails_parse() {
        // quote 缺失
        let reply = br#"{"title":"t","luckyClub":"c","luckyBall":"b","luckyHole":"h","luckyTPO":"p","roundFortune":"r","bettingFortune":"be","strategyFortune":"st","scoreFortune":"sc","courseFortune":"co"}"#;
        assert!(parse_fortune_json(reply).is_none());
    }

    #[test]
    fn non_string_value_fails_parse() {
        let reply = br#"{"title":1,"luckyClub":"c","luckyBall":"b","luckyHole":"h","luckyTPO":"p","roundFortune":"r","bettingFortune":"be","strategyFortune":"st","scoreFortune":"sc","courseFortune":"co","quote":"q"}"#;
        assert!(parse_fortune_json(reply).is_none());
    }

    #[test]
    fn garbage_fails_parse() {
        assert!(parse_fortune_json(b"I am not JSON at all").is_none());
        assert!(parse_fortune_json(b"").is_none());
        assert!(parse_fortune_json(b"}{").is_none());
    }

    #[test]
    fn default_fortune_is_deterministic_and_seed_driven() {
        let seed = sample_seed();
        let fortune = default_fortune(&seed);
        assert_eq!(fortune, default_fortune(&seed));

        // 强项含드라이버 → 행운의 클럽은 드라이버
        assert_eq!(fortune.lucky_club, "드라이버".as_bytes());
        // 幸运色含파랑（次位）→ 행운의 볼은 타이틀리스트
        assert_eq!(fortune.lucky_ball, "타이틀리스트 Pro V1".as_bytes());
        // 首位幸运色초록 → 착장은 초록 계열
        assert_eq!(fortune.lucky_tpo, "초록색 상의, 하얀색 하의".as_bytes());
        // 首位幸运数字 → 행운의 홀
        assert_eq!(fortune.lucky_hole, "3번홀".as_bytes());
        assert_eq!(fortune.title, "홍길동님의 오늘 골프 운세".as_bytes());
        // 球场为空时退到平地文案
        let course = String::from_utf8(fortune.course_fortune).unwrap();
        assert!(course.contains("평지 코스"));
    }

    #[test]
    fn handicap_level_boundaries() {
        assert_eq!(handicap_level(9), "싱글");
        assert_eq!(handicap_level(10), "중급");
        assert_eq!(handicap_level(19), "중급");
        assert_eq!(handicap_level(20), "초심자");
    }
}
