//! 四柱推算
//!
//! 排盘流程：公历 → 农历（fortune-almanac）→ 年/月/日/时四柱。
//!
//! - 年柱、日柱是六十甲子循环上的独立计数：年柱以农历年对 1984 年
//!   （甲子）锚定，日柱以儒略日对 1949-10-01（甲子日）锚定。
//! - 月柱、时柱不是独立计数，分别由年干按五虎遁、日干按五鼠遁
//!   查表推出。
//! - 时辰按两小时一支划分，23:00-00:59 归子时；23 时起日柱前移一位
//!   （夜子时归次日）。分钟不参与推算。

use fortune_almanac as almanac;

use crate::constants::{
    FIVE_RAT_FIRST_HOUR_STEM, FIVE_TIGER_FIRST_MONTH_STEM, TIME_NOT_PROVIDED_SENTINEL,
};
use crate::types::{Branch, FourPillars, Pillar, Stem};

/// 支持的公历年份下限
pub const SUPPORTED_START_YEAR: u16 = 1900;
/// 支持的公历年份上限
pub const SUPPORTED_END_YEAR: u16 = 2100;

/// 日柱锚点：1949-10-01 为甲子日
const DAY_CYCLE_ANCHOR_JDN: i64 = 2433191;

/// 年柱锚点：1984 年为甲子年
const YEAR_CYCLE_ANCHOR: i32 = 1984;

fn parse_ascii_number(raw: &[u8]) -> Option<u32> {
    if raw.is_empty() || raw.len() > 4 {
        return None;
    }
    let mut value: u32 = 0;
    for &b in raw {
        if !b.is_ascii_digit() {
            return None;
        }
        value = value * 10 + (b - b'0') as u32;
    }
    Some(value)
}

/// 解析出生日期字符串
///
/// 仅接受 `YYYY.MM.DD` 与 `YYYY-MM-DD` 两种字面格式，并校验
/// 公历日期合法性。格式不符返回 `None`，由调用方拒绝请求
/// （与范围内转换失败的回退路径严格区分）。
pub fn parse_birth_date(raw: &[u8]) -> Option<(u16, u8, u8)> {
    let separator = if raw.contains(&b'.') {
        b'.'
    } else if raw.contains(&b'-') {
        b'-'
    } else {
        return None;
    };

    let mut parts = raw.split(|&b| b == separator);
    let year_raw = parts.next()?;
    let month_raw = parts.next()?;
    let day_raw = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    if year_raw.len() != 4 || month_raw.is_empty() || month_raw.len() > 2 || day_raw.is_empty() || day_raw.len() > 2 {
        return None;
    }

    let year = parse_ascii_number(year_raw)? as u16;
    let month = parse_ascii_number(month_raw)? as u8;
    let day = parse_ascii_number(day_raw)? as u8;
    if !almanac::validate_solar_date(year, month, day) {
        return None;
    }
    Some((year, month, day))
}

/// 出生时刻字符串是否为"未提供"哨兵（미입력）
pub fn is_time_sentinel(raw: &[u8]) -> bool {
    raw == TIME_NOT_PROVIDED_SENTINEL.as_bytes()
}

/// 解析出生时刻字符串（`HH:MM`）
pub fn parse_birth_time(raw: &[u8]) -> Option<(u8, u8)> {
    let mut parts = raw.split(|&b| b == b':');
    let hour_raw = parts.next()?;
    let minute_raw = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    if hour_raw.is_empty() || hour_raw.len() > 2 || minute_raw.is_empty() || minute_raw.len() > 2 {
        return None;
    }

    let hour = parse_ascii_number(hour_raw)? as u8;
    let minute = parse_ascii_number(minute_raw)? as u8;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}

/// 小时归入的时辰序号（0 = 子时，…，11 = 亥时）
///
/// 23:00-00:59 归子时，之后每两小时一支；正午 12:00 恒为午时（6）。
pub fn hour_slot(hour: u8) -> u8 {
    ((hour + 1) / 2) % 12
}

/// 年柱：农历年在六十甲子上的位置
pub fn year_pillar(lunar_year: u16) -> Pillar {
    let index = (lunar_year as i32 - YEAR_CYCLE_ANCHOR).rem_euclid(60) as u8;
    Pillar::from_index(index).expect("rem_euclid(60) < 60; qed")
}

/// 月柱：五虎遁，由年干与农历月序查表（闰月沿用所闰月份的月序）
pub fn month_pillar(year_stem: Stem, lunar_month: u8) -> Option<Pillar> {
    if lunar_month < 1 || lunar_month > 12 || year_stem.0 >= 10 {
        return None;
    }
    let first_stem = FIVE_TIGER_FIRST_MONTH_STEM[(year_stem.0 % 5) as usize];
    let stem = (first_stem + lunar_month - 1) % 10;
    // 正月建寅
    let branch = (lunar_month + 1) % 12;
    Some(Pillar { stem: Stem(stem), branch: Branch(branch) })
}

/// 日柱：儒略日相对甲子日锚点在六十甲子上的位置
pub fn day_pillar(year: u16, month: u8, day: u8) -> Option<Pillar> {
    if !almanac::validate_solar_date(year, month, day) {
        return None;
    }
    let jdn = almanac::julian_day(year, month, day);
    let index = (jdn - DAY_CYCLE_ANCHOR_JDN).rem_euclid(60) as u8;
    Pillar::from_index(index)
}

/// 时柱：五鼠遁，由日干与时辰序号查表
pub fn hour_pillar(day_stem: Stem, hour: u8) -> Option<Pillar> {
    if hour > 23 || day_stem.0 >= 10 {
        return None;
    }
    let slot = hour_slot(hour);
    let first_stem = FIVE_RAT_FIRST_HOUR_STEM[(day_stem.0 % 5) as usize];
    let stem = (first_stem + slot) % 10;
    Some(Pillar { stem: Stem(stem), branch: Branch(slot) })
}

/// 四柱推算总入口
///
/// 对支持范围内的合法公历日期完全确定；农历表未覆盖（如 1900 年
/// 正月初一之前的公历日）返回 `None`，回退策略由调用方决定。
pub fn four_pillars(year: u16, month: u8, day: u8, hour: u8) -> Option<FourPillars> {
    if hour > 23 {
        return None;
    }
    let lunar = almanac::solar_to_lunar(year, month, day)?;

    let year_pillar = year_pillar(lunar.year);
    let month_pillar = month_pillar(year_pillar.stem, lunar.month)?;

    // 23 时为夜子时，日柱按次日推，时干随之取次日日干
    let naive_day = day_pillar(year, month, day)?;
    let day_pillar = if hour == 23 { naive_day.next() } else { naive_day };
    let hour_pillar = hour_pillar(day_pillar.stem, hour)?;

    Some(FourPillars { year: year_pillar, month: month_pillar, day: day_pillar, hour: hour_pillar })
}
