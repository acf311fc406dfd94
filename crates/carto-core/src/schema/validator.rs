use crate::{record::RecordData, Value};

use regex::Regex;
use std::sync::{Arc, LazyLock};

static TIME_12HR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+):([0-9]+)([ap]m)$").unwrap());
static DATE_UK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{2})/([0-9]{2})/([0-9]{4})$").unwrap());
static DATE_MYSQL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").unwrap());
static DATE_ISO8601: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([0-9]{4})-([0-9]{2})-([0-9]{2})T([0-9]{2}):([0-9]{2}):([0-9]{2})(([+\-])([0-9]{2}):([0-9]{2}))?$",
    )
    .unwrap()
});
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// Outcome of one validation step.
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    /// The value passed.
    Valid,

    /// The value failed with a specific message.
    Invalid(String),

    /// The value failed without a message; the caller reports the default
    /// "This field is invalid".
    Unspecified,
}

impl Validation {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

/// A named validation rule, or an injected predicate.
#[derive(Clone)]
pub enum Validator {
    /// `h:m(am/pm)` 12-hour clock time.
    Time12Hr,

    /// `dd/mm/yyyy` calendar date.
    DateUk,

    /// `yyyy-mm-dd` calendar date.
    DateMysql,

    /// `yyyy-mm-ddThh:mm:ss(+/-hh:mm)` datetime.
    DateIso8601,

    /// Loose email address shape.
    EmailAddress,

    Custom(Arc<dyn Fn(&Value, &RecordData) -> Validation + Send + Sync>),
}

impl Validator {
    pub fn check(&self, value: &Value, data: &RecordData) -> Validation {
        match self {
            Self::Time12Hr => named(value, check_time_12hr),
            Self::DateUk => named(value, check_date_uk),
            Self::DateMysql => named(value, check_date_mysql),
            Self::DateIso8601 => named(value, check_date_iso8601),
            Self::EmailAddress => named(value, check_email),
            Self::Custom(f) => f(value, data),
        }
    }
}

impl core::fmt::Debug for Validator {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let name = match self {
            Self::Time12Hr => "Time12Hr",
            Self::DateUk => "DateUk",
            Self::DateMysql => "DateMysql",
            Self::DateIso8601 => "DateIso8601",
            Self::EmailAddress => "EmailAddress",
            Self::Custom(_) => "Custom",
        };
        f.write_str(name)
    }
}

// Named validators operate on the string form; other value types fail with
// the validator's format message.
fn named(value: &Value, check: fn(&str) -> Validation) -> Validation {
    match value.as_str() {
        Some(s) => check(s),
        None => check(""),
    }
}

fn check_time_12hr(value: &str) -> Validation {
    let Some(caps) = TIME_12HR.captures(value) else {
        return Validation::invalid("Expected a time in the format h:m(am/pm)");
    };
    let hour: u32 = caps[1].parse().unwrap_or(u32::MAX);
    let minute: u32 = caps[2].parse().unwrap_or(u32::MAX);
    if hour > 12 {
        return Validation::invalid("The hour cannot be more than 12");
    }
    if minute > 59 {
        return Validation::invalid("The number of minutes cannot be more than 59");
    }
    Validation::Valid
}

fn valid_date(year: i64, month: i64, day: i64) -> bool {
    let (Ok(year), Ok(month), Ok(day)) = (
        i16::try_from(year),
        i8::try_from(month),
        i8::try_from(day),
    ) else {
        return false;
    };
    jiff::civil::Date::new(year, month, day).is_ok()
}

fn check_date_uk(value: &str) -> Validation {
    let Some(caps) = DATE_UK.captures(value) else {
        return Validation::invalid("Not a date in the format dd-mm-yyyy");
    };
    let day: i64 = caps[1].parse().unwrap();
    let month: i64 = caps[2].parse().unwrap();
    let year: i64 = caps[3].parse().unwrap();
    if valid_date(year, month, day) {
        Validation::Valid
    } else {
        Validation::invalid("Not a valid date")
    }
}

fn check_date_mysql(value: &str) -> Validation {
    let Some(caps) = DATE_MYSQL.captures(value) else {
        return Validation::invalid("Not a date in the format yyyy-mm-dd");
    };
    let year: i64 = caps[1].parse().unwrap();
    let month: i64 = caps[2].parse().unwrap();
    let day: i64 = caps[3].parse().unwrap();
    if valid_date(year, month, day) {
        Validation::Valid
    } else {
        Validation::invalid("Not a valid date")
    }
}

fn check_date_iso8601(value: &str) -> Validation {
    let Some(caps) = DATE_ISO8601.captures(value) else {
        return Validation::invalid(
            "Not a date in the format yyyy-mm-ddThh:mm:ss(+/-hh:mm)",
        );
    };
    let year: i64 = caps[1].parse().unwrap();
    let month: i64 = caps[2].parse().unwrap();
    let day: i64 = caps[3].parse().unwrap();
    let hour: i64 = caps[4].parse().unwrap();
    let minute: i64 = caps[5].parse().unwrap();
    let second: i64 = caps[6].parse().unwrap();

    if !valid_date(year, month, day) || hour > 23 || minute > 59 || second > 59 {
        return Validation::invalid("Not a valid date");
    }
    Validation::Valid
}

fn check_email(value: &str) -> Validation {
    if EMAIL.is_match(value) {
        Validation::Valid
    } else {
        Validation::invalid("Not a valid email address")
    }
}
