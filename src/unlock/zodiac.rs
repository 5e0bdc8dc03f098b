//! Zodiac sign lookup used for the first-wrong-attempt reveal.

/// Days per month; February admits the 29th so a leap birthday still reads.
const MONTH_DAYS: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Sign for an inclusive day/month, or `None` when the date is impossible.
pub fn sign_for(day: u32, month: u32) -> Option<&'static str> {
    if month == 0 || month > 12 {
        return None;
    }
    if day == 0 || day > MONTH_DAYS[(month - 1) as usize] {
        return None;
    }
    let sign = match month {
        1 => {
            if day <= 19 {
                "Capricorn"
            } else {
                "Aquarius"
            }
        }
        2 => {
            if day <= 18 {
                "Aquarius"
            } else {
                "Pisces"
            }
        }
        3 => {
            if day <= 20 {
                "Pisces"
            } else {
                "Aries"
            }
        }
        4 => {
            if day <= 19 {
                "Aries"
            } else {
                "Taurus"
            }
        }
        5 => {
            if day <= 20 {
                "Taurus"
            } else {
                "Gemini"
            }
        }
        6 => {
            if day <= 20 {
                "Gemini"
            } else {
                "Cancer"
            }
        }
        7 => {
            if day <= 22 {
                "Cancer"
            } else {
                "Leo"
            }
        }
        8 => {
            if day <= 22 {
                "Leo"
            } else {
                "Virgo"
            }
        }
        9 => {
            if day <= 22 {
                "Virgo"
            } else {
                "Libra"
            }
        }
        10 => {
            if day <= 22 {
                "Libra"
            } else {
                "Scorpio"
            }
        }
        11 => {
            if day <= 21 {
                "Scorpio"
            } else {
                "Sagittarius"
            }
        }
        _ => {
            if day <= 21 {
                "Sagittarius"
            } else {
                "Capricorn"
            }
        }
    };
    Some(sign)
}

/// Read the leading four digits of a code as DDMM and look up the sign.
pub fn sign_from_code(code: &str) -> Option<&'static str> {
    if code.len() < 4 || !code.is_char_boundary(4) {
        return None;
    }
    let day = code[0..2].parse().ok()?;
    let month = code[2..4].parse().ok()?;
    sign_for(day, month)
}
