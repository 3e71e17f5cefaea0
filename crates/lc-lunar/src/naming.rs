//! Sexagenary (干支) names, zodiac animals, and month / day / term names.

use lc_time::Date;

/// The ten heavenly stems.
pub const HEAVENLY_STEMS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// The twelve earthly branches.
pub const EARTHLY_BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// Zodiac animals, in branch order.
pub const ZODIAC_ANIMALS: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

/// Solar-term names, indexed from 春分.
pub const SOLAR_TERM_NAMES: [&str; 24] = [
    "春分", "清明", "谷雨", "立夏", "小满", "芒种", "夏至", "小暑", "大暑", "立秋", "处暑", "白露",
    "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至", "小寒", "大寒", "立春", "雨水", "惊蛰",
];

const MONTH_NAMES: [&str; 12] = [
    "正月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "冬月", "腊月",
];

const DAY_NAMES: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十",
    "十一", "十二", "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十",
    "廿一", "廿二", "廿三", "廿四", "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

// Cycle anchors: 1864 was 甲子; 1900-01-01 lies in a 丙子 month, and
// 1970-01-01 was a 辛巳 day.
const YEAR_ANCHOR: i64 = 1864;
const MONTH_ANCHOR_YEAR: i64 = 1900;
const MONTH_OFFSET: i64 = 12;
const DAY_OFFSET: i64 = 29_219 + 18;

/// Stem-branch pair for position `n` of the sixty cycle.
pub fn ganzhi(n: i64) -> String {
    let stem = HEAVENLY_STEMS[n.rem_euclid(10) as usize];
    let branch = EARTHLY_BRANCHES[n.rem_euclid(12) as usize];
    format!("{stem}{branch}")
}

/// Stem-branch name of a lunar year.
pub fn year_ganzhi(lunar_year: i32) -> String {
    ganzhi(lunar_year as i64 - YEAR_ANCHOR)
}

/// Stem-branch name of the solar month containing a date of Gregorian year
/// `year`, given its month branch (count of 节 passed since January 1).
pub fn month_ganzhi(year: i32, month_branch: u8) -> String {
    ganzhi((year as i64 - MONTH_ANCHOR_YEAR) * 12 + month_branch as i64 + MONTH_OFFSET)
}

/// Stem-branch name of a civil day.
pub fn day_ganzhi(date: Date) -> String {
    ganzhi(date.unix_days() as i64 + DAY_OFFSET)
}

/// Zodiac animal of a lunar year.
pub fn zodiac(lunar_year: i32) -> &'static str {
    ZODIAC_ANIMALS[(lunar_year as i64 - 4).rem_euclid(12) as usize]
}

/// Name of a lunar month (1–12), with the 闰 prefix for a leap month.
pub fn month_name(ordinal: u8, is_leap: bool) -> String {
    let name = MONTH_NAMES[(ordinal.clamp(1, 12) - 1) as usize];
    if is_leap {
        format!("闰{name}")
    } else {
        name.to_string()
    }
}

/// Name of a lunar day (1–30).
pub fn day_name(day: u8) -> &'static str {
    DAY_NAMES[(day.clamp(1, 30) - 1) as usize]
}
