//! Core types for the course registry

use serde::{Deserialize, Serialize};

/// Course ID type
pub type CourseId = u64;

/// A single course record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
}

impl Course {
    pub fn new(id: CourseId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Records present when the process starts
pub fn seed_courses() -> Vec<Course> {
    (1..=3)
        .map(|id| Course::new(id, format!("course{id}")))
        .collect()
}

/// Parse an id path segment the way `parseInt` without a radix does.
///
/// Leading whitespace is skipped, one sign is accepted, and a `0x`/`0X`
/// prefix switches to hexadecimal. The longest run of digits in that base is
/// read. Anything that cannot name a stored course (no digits, negative,
/// overflow) yields `None`.
pub fn parse_course_id(raw: &str) -> Option<CourseId> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, digits) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) => (16, hex),
        None => (10, unsigned),
    };

    let digits_len = digits
        .bytes()
        .take_while(|b| char::from(*b).is_digit(radix))
        .count();
    if digits_len == 0 {
        return None;
    }

    let value = CourseId::from_str_radix(&digits[..digits_len], radix).ok()?;
    if negative && value != 0 {
        return None;
    }
    Some(value)
}
