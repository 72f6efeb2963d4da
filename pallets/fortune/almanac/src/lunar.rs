//! 公历/农历转换核心
//!
//! 转换以天数偏移为基础：先将公历日期折算为儒略日，再相对农历锚点
//! （1900-01-31，即农历 1900 年正月初一）逐年逐月扣减，得到农历日期。
//! 反向转换按同样的偏移累加还原。

use codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;

use crate::{lunar_data, LUNAR_END_YEAR, LUNAR_START_YEAR};

/// 农历锚点的儒略日：公历 1900-01-31 = 农历 1900 年正月初一
const EPOCH_JDN: i64 = 2415051;

/// 农历日期
#[derive(Clone, Copy, Debug, PartialEq, Eq, Encode, Decode, TypeInfo, MaxEncodedLen)]
pub struct LunarDate {
    /// 农历年（1900-2100）
    pub year: u16,
    /// 农历月（1-12，闰月沿用所闰月份的月号）
    pub month: u8,
    /// 农历日（1-30）
    pub day: u8,
    /// 是否闰月
    pub is_leap_month: bool,
}

/// 公历闰年判断
pub fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// 公历月份天数
pub fn solar_month_days(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// 公历日期合法性校验
pub fn validate_solar_date(year: u16, month: u8, day: u8) -> bool {
    month >= 1 && month <= 12 && day >= 1 && day <= solar_month_days(year, month)
}

/// 公历日期转儒略日（整数算法，格里历）
pub fn julian_day(year: u16, month: u8, day: u8) -> i64 {
    let (y, m, d) = (year as i64, month as i64, day as i64);
    let a = (14 - m) / 12;
    let yy = y + 4800 - a;
    let mm = m + 12 * a - 3;
    d + (153 * mm + 2) / 5 + 365 * yy + yy / 4 - yy / 100 + yy / 400 - 32045
}

/// 儒略日转公历日期
pub fn from_julian_day(jdn: i64) -> (u16, u8, u8) {
    let a = jdn + 32044;
    let b = (4 * a + 3) / 146097;
    let c = a - 146097 * b / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;
    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;
    (year as u16, month as u8, day as u8)
}

/// 公历转农历
///
/// 锚点之前（1900-01-31 以前）或数据表覆盖范围之外的日期返回 `None`。
pub fn solar_to_lunar(year: u16, month: u8, day: u8) -> Option<LunarDate> {
    if !validate_solar_date(year, month, day) {
        return None;
    }

    let mut offset = julian_day(year, month, day) - EPOCH_JDN;
    if offset < 0 {
        return None;
    }

    // 逐年扣减，定位农历年
    let mut lunar_year = LUNAR_START_YEAR;
    loop {
        if lunar_year > LUNAR_END_YEAR {
            return None;
        }
        let year_days = lunar_data::lunar_year_days(lunar_year) as i64;
        if offset < year_days {
            break;
        }
        offset -= year_days;
        lunar_year += 1;
    }

    // 逐月扣减，闰月紧随所闰月份之后
    let leap = lunar_data::leap_month(lunar_year);
    let mut lunar_month = 1u8;
    let mut is_leap = false;
    loop {
        let month_days = if is_leap {
            lunar_data::leap_month_days(lunar_year) as i64
        } else {
            lunar_data::lunar_month_days(lunar_year, lunar_month) as i64
        };
        if offset < month_days {
            break;
        }
        offset -= month_days;
        if !is_leap && leap != 0 && lunar_month == leap {
            is_leap = true;
        } else {
            is_leap = false;
            lunar_month += 1;
            if lunar_month > 12 {
                return None;
            }
        }
    }

    Some(LunarDate {
        year: lunar_year,
        month: lunar_month,
        day: (offset + 1) as u8,
        is_leap_month: is_leap,
    })
}

/// 农历转公历
///
/// `is_leap_month` 为真时要求该年确实闰所指月份，否则返回 `None`。
pub fn lunar_to_solar(year: u16, month: u8, day: u8, is_leap_month: bool) -> Option<(u16, u8, u8)> {
    if year < LUNAR_START_YEAR || year > LUNAR_END_YEAR {
        return None;
    }
    if month < 1 || month > 12 || day < 1 {
        return None;
    }

    let leap = lunar_data::leap_month(year);
    if is_leap_month && leap != month {
        return None;
    }
    let month_days = if is_leap_month {
        lunar_data::leap_month_days(year)
    } else {
        lunar_data::lunar_month_days(year, month)
    };
    if day as u16 > month_days {
        return None;
    }

    let mut offset: i64 = 0;
    let mut y = LUNAR_START_YEAR;
    while y < year {
        offset += lunar_data::lunar_year_days(y) as i64;
        y += 1;
    }
    let mut m = 1u8;
    while m < month {
        offset += lunar_data::lunar_month_days(year, m) as i64;
        if m == leap {
            offset += lunar_data::leap_month_days(year) as i64;
        }
        m += 1;
    }
    // 闰月排在所闰月份之后
    if is_leap_month {
        offset += lunar_data::lunar_month_days(year, month) as i64;
    }
    offset += (day - 1) as i64;

    Some(from_julian_day(EPOCH_JDN + offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn julian_day_known_dates() {
        // J2000.0 历元
        assert_eq!(julian_day(2000, 1, 1), 2451545);
        assert_eq!(julian_day(1900, 1, 1), 2415021);
        assert_eq!(julian_day(1900, 1, 31), EPOCH_JDN);
    }

    #[test]
    fn julian_day_round_trip() {
        for &(y, m, d) in &[
            (1900u16, 1u8, 31u8),
            (1949, 10, 1),
            (1990, 5, 15),
            (2000, 2, 29),
            (2024, 2, 10),
            (2100, 12, 31),
        ] {
            assert_eq!(from_julian_day(julian_day(y, m, d)), (y, m, d));
        }
    }

    #[test]
    fn solar_date_validation() {
        assert!(validate_solar_date(2000, 2, 29));
        assert!(!validate_solar_date(1900, 2, 29)); // 1900 非闰年
        assert!(!validate_solar_date(2021, 4, 31));
        assert!(!validate_solar_date(2021, 13, 1));
        assert!(!validate_solar_date(2021, 0, 1));
        assert!(!validate_solar_date(2021, 1, 0));
    }

    #[test]
    fn lunar_new_year_anchors() {
        // 各年正月初一对应的公历日期（天文台对照表）
        for &(sy, sm, sd, ly) in &[
            (1900u16, 1u8, 31u8, 1900u16),
            (1990, 1, 27, 1990),
            (1991, 2, 15, 1991),
            (2000, 2, 5, 2000),
            (2024, 2, 10, 2024),
        ] {
            let lunar = solar_to_lunar(sy, sm, sd).unwrap();
            assert_eq!(
                lunar,
                LunarDate { year: ly, month: 1, day: 1, is_leap_month: false }
            );
        }
    }

    #[test]
    fn solar_to_lunar_mid_year() {
        // 1990-05-15 = 农历 1990 年四月廿一
        let lunar = solar_to_lunar(1990, 5, 15).unwrap();
        assert_eq!(
            lunar,
            LunarDate { year: 1990, month: 4, day: 21, is_leap_month: false }
        );
    }

    #[test]
    fn leap_month_handling() {
        // 1990 年闰五月
        assert_eq!(lunar_data::leap_month(1990), 5);
        let (sy, sm, sd) = lunar_to_solar(1990, 5, 1, true).unwrap();
        let back = solar_to_lunar(sy, sm, sd).unwrap();
        assert_eq!(
            back,
            LunarDate { year: 1990, month: 5, day: 1, is_leap_month: true }
        );
        // 非闰月年份不接受闰月输入
        assert!(lunar_to_solar(1991, 5, 1, true).is_none());
    }

    #[test]
    fn round_trip_across_table() {
        // 隔年抽样全表往返
        let mut year = LUNAR_START_YEAR + 1;
        while year <= LUNAR_END_YEAR {
            for &(m, d) in &[(1u8, 1u8), (6, 15), (12, 29)] {
                let (sy, sm, sd) = lunar_to_solar(year, m, d, false).unwrap();
                let back = solar_to_lunar(sy, sm, sd).unwrap();
                assert_eq!(
                    back,
                    LunarDate { year, month: m, day: d, is_leap_month: false },
                    "round trip failed for lunar {year}-{m}-{d}"
                );
            }
            year += 7;
        }
    }

    #[test]
    fn out_of_range_rejected() {
        // 锚点之前
        assert!(solar_to_lunar(1900, 1, 30).is_none());
        assert!(solar_to_lunar(1899, 12, 31).is_none());
        // 表外年份
        assert!(lunar_to_solar(1899, 1, 1, false).is_none());
        assert!(lunar_to_solar(2101, 1, 1, false).is_none());
    }
}
