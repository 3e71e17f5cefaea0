//! Solar and lunar festival lookup.
//!
//! Solar festivals are keyed by `month × 100 + day` and only reported from
//! the year they were introduced.  Lunar festivals are keyed by
//! `lunar_month × 100 + lunar_day` and never apply to a leap month.
//! Several festivals on one day are joined with commas; an empty string
//! means none.

use crate::lunar_year::LunarDayInfo;
use crate::solar_terms::SolarTerm;
use lc_time::Date;

/// A fixed-date solar festival.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarFestival {
    /// `month × 100 + day`.
    pub key: u16,
    /// Display name.
    pub name: &'static str,
    /// First year in which the festival is observed.
    pub since: i32,
}

const fn solar(key: u16, name: &'static str, since: i32) -> SolarFestival {
    SolarFestival { key, name, since }
}

/// Fixed-date solar festivals, ordered by key.
pub static SOLAR_FESTIVALS: [SolarFestival; 18] = [
    solar(101, "元旦", 1912),
    solar(214, "情人节", 1900),
    solar(308, "妇女节", 1911),
    solar(312, "植树节", 1979),
    solar(315, "消费者权益日", 1983),
    solar(401, "愚人节", 1900),
    solar(501, "劳动节", 1890),
    solar(504, "青年节", 1939),
    solar(512, "护士节", 1912),
    solar(601, "儿童节", 1950),
    solar(701, "建党节", 1941),
    solar(701, "香港回归纪念日", 1997),
    solar(801, "建军节", 1933),
    solar(910, "教师节", 1985),
    solar(1001, "国庆节", 1949),
    solar(1220, "澳门回归纪念日", 1999),
    solar(1224, "平安夜", 1900),
    solar(1225, "圣诞节", 1900),
];

/// Lunar festivals keyed by `month × 100 + day`.
pub static LUNAR_FESTIVALS: [(u16, &str); 12] = [
    (101, "春节"),
    (115, "元宵节"),
    (202, "龙头节"),
    (505, "端午节"),
    (707, "七夕节"),
    (715, "中元节"),
    (815, "中秋节"),
    (909, "重阳节"),
    (1001, "寒衣节"),
    (1015, "下元节"),
    (1208, "腊八节"),
    (1223, "小年"),
];

/// Name of the lunar new year's eve.
pub const NEW_YEARS_EVE: &str = "除夕";

/// Name of the Qingming festival.
pub const QINGMING_FESTIVAL: &str = "清明节";

/// Day of May that is the second Sunday (Mother's Day).
fn mothers_day(year: i32) -> Option<u8> {
    let first = Date::from_ymd(year, 5, 1).ok()?;
    Some(8 + (7 - first.weekday().sunday_based_index()) % 7)
}

/// Day of June that is the third Sunday (Father's Day).
fn fathers_day(year: i32) -> Option<u8> {
    let first = Date::from_ymd(year, 6, 1).ok()?;
    Some(15 + (7 - first.weekday().sunday_based_index()) % 7)
}

/// Comma-joined solar festivals of `date`.
pub fn solar_festival(date: Date) -> String {
    let (year, month, day) = date.ymd();
    let mut names: Vec<&str> = Vec::new();
    if month == 5 && mothers_day(year) == Some(day) {
        names.push("母亲节");
    }
    if month == 6 && fathers_day(year) == Some(day) {
        names.push("父亲节");
    }
    let key = month as u16 * 100 + day as u16;
    names.extend(
        SOLAR_FESTIVALS
            .iter()
            .filter(|f| f.key == key && year >= f.since)
            .map(|f| f.name),
    );
    names.join(",")
}

/// Lunar festival of a day, or an empty string.
///
/// `new_years_eve` marks the day before 正月初一, which is 除夕 even when it
/// closes a leap twelfth month.  Other leap-month days carry no lunar
/// festival.  清明节 applies on the day of the 清明 term when nothing else
/// matched.
pub fn lunar_festival(info: &LunarDayInfo, new_years_eve: bool) -> String {
    if new_years_eve {
        return NEW_YEARS_EVE.to_string();
    }
    if !info.is_leap {
        let key = info.month as u16 * 100 + info.day as u16;
        if let Some((_, name)) = LUNAR_FESTIVALS.iter().find(|(k, _)| *k == key) {
            return (*name).to_string();
        }
    }
    if info.solar_term == Some(SolarTerm::QingMing) {
        return QINGMING_FESTIVAL.to_string();
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lc_time::Weekday;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn info(month: u8, is_leap: bool, day: u8, days: u8) -> LunarDayInfo {
        LunarDayInfo {
            lunar_year: 2023,
            month,
            is_leap,
            day,
            days_in_month: days,
            solar_term: None,
            month_branch: 0,
        }
    }

    #[test]
    fn movable_sundays_match_nth_weekday() {
        for year in 1900..=2100 {
            let m = Date::nth_weekday(2, Weekday::Sunday, year, 5).unwrap();
            assert_eq!(mothers_day(year), Some(m.day_of_month()), "{year}");
            let f = Date::nth_weekday(3, Weekday::Sunday, year, 6).unwrap();
            assert_eq!(fathers_day(year), Some(f.day_of_month()), "{year}");
        }
    }

    #[test]
    fn solar_lookup() {
        assert_eq!(solar_festival(date(2023, 10, 1)), "国庆节");
        assert_eq!(solar_festival(date(2023, 5, 14)), "母亲节");
        assert_eq!(solar_festival(date(2023, 6, 18)), "父亲节");
        assert_eq!(solar_festival(date(2023, 7, 1)), "建党节,香港回归纪念日");
        assert_eq!(solar_festival(date(2023, 7, 2)), "");
    }

    #[test]
    fn solar_gate_by_first_year() {
        assert_eq!(solar_festival(date(1984, 9, 10)), "");
        assert_eq!(solar_festival(date(1985, 9, 10)), "教师节");
        assert_eq!(solar_festival(date(1990, 7, 1)), "建党节");
    }

    #[test]
    fn lunar_lookup() {
        assert_eq!(lunar_festival(&info(1, false, 1, 29), false), "春节");
        assert_eq!(lunar_festival(&info(8, false, 15, 30), false), "中秋节");
        assert_eq!(lunar_festival(&info(8, true, 15, 30), false), "");
        assert_eq!(lunar_festival(&info(3, false, 3, 30), false), "");
    }

    #[test]
    fn new_years_eve_follows_the_flag() {
        assert_eq!(lunar_festival(&info(12, false, 29, 29), true), NEW_YEARS_EVE);
        assert_eq!(lunar_festival(&info(12, false, 30, 30), true), NEW_YEARS_EVE);
        // A leap twelfth month closes the year instead of the regular one.
        assert_eq!(lunar_festival(&info(12, true, 29, 29), true), NEW_YEARS_EVE);
        assert_eq!(lunar_festival(&info(12, false, 30, 30), false), "");
    }

    #[test]
    fn qingming_only_when_unnamed() {
        let mut i = info(2, false, 14, 30);
        i.solar_term = Some(SolarTerm::QingMing);
        assert_eq!(lunar_festival(&i, false), QINGMING_FESTIVAL);
        i.solar_term = Some(SolarTerm::GuYu);
        assert_eq!(lunar_festival(&i, false), "");
    }
}
