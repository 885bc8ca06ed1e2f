//! Calendar-derived lords for temporal (Kala) strength.
//!
//! Weekday, year, month, and hora lords are pure functions of the birth
//! date/time fields carried by the chart. Weekday arithmetic uses the
//! proleptic Gregorian calendar; hora hours are counted from 06:00 local in
//! the classical descending-speed sequence rooted at the weekday lord.

use jyotish_base::chart::BirthInfo;
use jyotish_base::graha::{Graha, HORA_SEQUENCE, WEEKDAY_LORDS};

/// Day of week for a Gregorian date: 0 = Sunday .. 6 = Saturday.
///
/// Sakamoto's method; valid for the proleptic Gregorian calendar.
pub fn day_of_week(year: i32, month: u8, day: u8) -> u8 {
    const T: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let y = if month < 3 { year - 1 } else { year };
    let m = month as i32;
    let d = day as i32;
    (((y + y / 4 - y / 100 + y / 400 + T[(m - 1) as usize] + d) % 7 + 7) % 7) as u8
}

/// Lord of the birth weekday (vara lord).
pub fn vara_lord(birth: &BirthInfo) -> Graha {
    WEEKDAY_LORDS[day_of_week(birth.year, birth.month, birth.day) as usize]
}

/// Lord of the birth month: weekday lord of the 1st of that month.
pub fn masa_lord(birth: &BirthInfo) -> Graha {
    WEEKDAY_LORDS[day_of_week(birth.year, birth.month, 1) as usize]
}

/// Lord of the birth year: weekday lord of January 1st of that year.
pub fn abda_lord(birth: &BirthInfo) -> Graha {
    WEEKDAY_LORDS[day_of_week(birth.year, 1, 1) as usize]
}

/// Lord of the birth hour (hora lord).
///
/// Horas run in the classical descending-speed sequence (Sun, Venus,
/// Mercury, Moon, Saturn, Jupiter, Mars), starting from the weekday lord at
/// 06:00 local time.
pub fn hora_lord(birth: &BirthInfo) -> Graha {
    let weekday_lord = vara_lord(birth);
    let start = HORA_SEQUENCE
        .iter()
        .position(|&g| g == weekday_lord)
        .unwrap_or(0);
    // Hours elapsed since 06:00, wrapping through midnight
    let hours_since_dawn = (birth.hour as i32 - 6).rem_euclid(24) as usize;
    HORA_SEQUENCE[(start + hours_since_dawn) % 7]
}

/// True when the birth hour falls in the daytime half (06:00-18:00).
pub fn is_daytime(birth: &BirthInfo) -> bool {
    (6..18).contains(&birth.hour)
}

/// Fraction elapsed within the day half or night half, in [0, 1).
pub fn day_night_fraction(birth: &BirthInfo) -> f64 {
    let minutes = birth.hour as f64 * 60.0 + birth.minute as f64;
    let since_six = (minutes - 360.0).rem_euclid(1440.0);
    if since_six < 720.0 {
        since_six / 720.0
    } else {
        (since_six - 720.0) / 720.0
    }
}

/// Solstice half of the year, from the Sun's sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ayana {
    /// Sun in Capricorn through Gemini.
    Uttarayana,
    /// Sun in Cancer through Sagittarius.
    Dakshinayana,
}

/// Determine the solstice half from the Sun's longitude.
pub fn ayana_from_sun(sun_longitude: f64) -> Ayana {
    let lon = jyotish_base::util::normalize_360(sun_longitude);
    if !(90.0..270.0).contains(&lon) {
        Ayana::Uttarayana
    } else {
        Ayana::Dakshinayana
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn birth(year: i32, month: u8, day: u8, hour: u8, minute: u8) -> BirthInfo {
        BirthInfo {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    #[test]
    fn known_weekdays() {
        // 2000-01-01 was a Saturday
        assert_eq!(day_of_week(2000, 1, 1), 6);
        // 2024-01-01 was a Monday
        assert_eq!(day_of_week(2024, 1, 1), 1);
        // 1990-03-15 was a Thursday
        assert_eq!(day_of_week(1990, 3, 15), 4);
    }

    #[test]
    fn vara_lord_follows_weekday() {
        // Thursday -> Jupiter
        assert_eq!(vara_lord(&birth(1990, 3, 15, 12, 0)), Graha::Jupiter);
        // Saturday -> Saturn
        assert_eq!(vara_lord(&birth(2000, 1, 1, 12, 0)), Graha::Saturn);
    }

    #[test]
    fn abda_and_masa_lords() {
        let b = birth(2000, 6, 20, 12, 0);
        // Jan 1 2000 Saturday -> Saturn year
        assert_eq!(abda_lord(&b), Graha::Saturn);
        // Jun 1 2000 Thursday -> Jupiter month
        assert_eq!(masa_lord(&b), Graha::Jupiter);
    }

    #[test]
    fn hora_first_hour_is_weekday_lord() {
        // Any day at 06:xx, the hora lord is the weekday lord
        let b = birth(1990, 3, 15, 6, 30); // Thursday
        assert_eq!(hora_lord(&b), Graha::Jupiter);
    }

    #[test]
    fn hora_sequence_advances() {
        // Thursday 07:00: one hora past Jupiter in the sequence is Mars
        let b = birth(1990, 3, 15, 7, 0);
        assert_eq!(hora_lord(&b), Graha::Mars);
    }

    #[test]
    fn hora_wraps_through_midnight() {
        // Thursday 05:00 = 23 hours past Thursday's dawn
        let b = birth(1990, 3, 15, 5, 0);
        let expected_idx = (HORA_SEQUENCE.iter().position(|&g| g == Graha::Jupiter).unwrap() + 23) % 7;
        assert_eq!(hora_lord(&b), HORA_SEQUENCE[expected_idx]);
    }

    #[test]
    fn daytime_bounds() {
        assert!(is_daytime(&birth(2000, 1, 1, 6, 0)));
        assert!(is_daytime(&birth(2000, 1, 1, 17, 59)));
        assert!(!is_daytime(&birth(2000, 1, 1, 18, 0)));
        assert!(!is_daytime(&birth(2000, 1, 1, 2, 0)));
    }

    #[test]
    fn fraction_thirds() {
        // 06:00 -> 0.0 of day; 10:00 -> 1/3; 14:00 -> 2/3
        assert!(day_night_fraction(&birth(2000, 1, 1, 6, 0)).abs() < 1e-12);
        assert!((day_night_fraction(&birth(2000, 1, 1, 10, 0)) - 1.0 / 3.0).abs() < 1e-12);
        assert!((day_night_fraction(&birth(2000, 1, 1, 14, 0)) - 2.0 / 3.0).abs() < 1e-12);
        // 18:00 -> 0.0 of night; 02:00 -> 2/3 of night
        assert!(day_night_fraction(&birth(2000, 1, 1, 18, 0)).abs() < 1e-12);
        assert!((day_night_fraction(&birth(2000, 1, 1, 2, 0)) - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn ayana_halves() {
        assert_eq!(ayana_from_sun(280.0), Ayana::Uttarayana); // Capricorn
        assert_eq!(ayana_from_sun(0.0), Ayana::Uttarayana); // Aries
        assert_eq!(ayana_from_sun(89.9), Ayana::Uttarayana); // late Gemini
        assert_eq!(ayana_from_sun(90.0), Ayana::Dakshinayana); // Cancer
        assert_eq!(ayana_from_sun(200.0), Ayana::Dakshinayana); // Libra
    }
}
