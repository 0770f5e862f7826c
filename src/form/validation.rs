use std::sync::OnceLock;
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;
use time::macros::format_description;
use time::{Date, Time};
use crate::models::reservation::ReservationRequest;

pub const PHONE_DIGITS: usize = 11;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Why a submission was stopped before reaching the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing field")]
    MissingField,
    #[error("bad email")]
    BadEmail,
    #[error("bad phone")]
    BadPhone,
}

impl ValidationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::MissingField => "Please fill all fields",
            ValidationError::BadEmail => "Please enter a valid email address",
            ValidationError::BadPhone => "Phone number must contain 11 digits",
        }
    }
}

/// Rejections raised by an input control while the user is typing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("`{0}` is not a calendar date")]
    BadDate(String),
    #[error("`{0}` is not a time of day")]
    BadTime(String),
    #[error("{date} is before {today}")]
    DateInPast { date: Date, today: Date },
}

/// Raw values of the six reservation inputs, named as the page posts them.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ReservationFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
}

impl ReservationFields {
    fn all_present(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.phone,
            &self.date,
            &self.time,
        ]
        .iter()
        .all(|field| !field.is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Keystroke filter for the phone input: digits only, at most 11 of them.
pub fn mask_phone_input(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_DIGITS)
        .collect()
}

/// Checks the fields in submission order and builds the trimmed request.
pub fn validate(fields: &ReservationFields) -> Result<ReservationRequest, ValidationError> {
    if !fields.all_present() {
        return Err(ValidationError::MissingField);
    }

    if !is_valid_email(&fields.email) {
        return Err(ValidationError::BadEmail);
    }

    if digits_only(&fields.phone).len() != PHONE_DIGITS {
        return Err(ValidationError::BadPhone);
    }

    Ok(ReservationRequest {
        first_name: fields.first_name.trim().to_string(),
        last_name: fields.last_name.trim().to_string(),
        email: fields.email.trim().to_string(),
        phone: digits_only(&fields.phone),
        date: fields.date.clone(),
        time: fields.time.clone(),
    })
}

pub fn parse_date(input: &str) -> Result<Date, FieldError> {
    Date::parse(input, format_description!("[year]-[month]-[day]"))
        .map_err(|_| FieldError::BadDate(input.to_string()))
}

pub fn parse_time(input: &str) -> Result<Time, FieldError> {
    Time::parse(input, format_description!("[hour]:[minute]"))
        .map_err(|_| FieldError::BadTime(input.to_string()))
}

/// Date floor of the picker: today or later.
pub fn check_selectable_date(input: &str, today: Date) -> Result<Date, FieldError> {
    let date = parse_date(input)?;
    if date < today {
        return Err(FieldError::DateInPast { date, today });
    }
    Ok(date)
}

pub fn format_date(date: Date) -> String {
    // Formatting a calendar date with this description cannot fail.
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use time::macros::date;
    use super::*;

    fn jane() -> ReservationFields {
        ReservationFields {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: "07123456789".to_string(),
            date: "2030-01-01".to_string(),
            time: "19:00".to_string(),
        }
    }

    #[test]
    fn any_empty_field_is_missing() {
        let clears: [fn(&mut ReservationFields); 6] = [
            |f| f.first_name.clear(),
            |f| f.last_name.clear(),
            |f| f.email.clear(),
            |f| f.phone.clear(),
            |f| f.date.clear(),
            |f| f.time.clear(),
        ];

        for clear in clears {
            let mut fields = jane();
            clear(&mut fields);
            assert_eq!(validate(&fields), Err(ValidationError::MissingField));
        }
    }

    #[test]
    fn missing_field_wins_over_bad_email() {
        let mut fields = jane();
        fields.email = "not-an-email".to_string();
        fields.time.clear();

        assert_eq!(validate(&fields), Err(ValidationError::MissingField));
    }

    #[test]
    fn email_pattern() {
        for good in ["jane@x.com", "a.b@c.d.e", "x+y@host.io"] {
            assert!(is_valid_email(good), "{} should pass", good);
        }
        for bad in ["jane", "jane@x", "@x.com", "jane@.com.", "ja ne@x.com", "jane@x.com ", "j@n@x.com"] {
            assert!(!is_valid_email(bad), "{} should fail", bad);
        }
    }

    #[test]
    fn bad_email_is_reported_before_bad_phone() {
        let mut fields = jane();
        fields.email = "jane@x".to_string();
        fields.phone = "071234".to_string();

        let err = validate(&fields).unwrap_err();
        assert_eq!(err, ValidationError::BadEmail);
        assert_eq!(err.user_message(), "Please enter a valid email address");
    }

    #[test]
    fn short_phone_is_rejected() {
        let mut fields = jane();
        fields.phone = "071234".to_string();

        let err = validate(&fields).unwrap_err();
        assert_eq!(err, ValidationError::BadPhone);
        assert_eq!(err.user_message(), "Phone number must contain 11 digits");
    }

    #[test]
    fn phone_counts_digits_only() {
        let mut fields = jane();
        fields.phone = "0712-345-678".to_string();
        assert_eq!(validate(&fields), Err(ValidationError::BadPhone));

        fields.phone = " 0712-345-6789".to_string();
        assert_eq!(validate(&fields).unwrap().phone, "07123456789");
    }

    #[test]
    fn valid_fields_are_trimmed() {
        let mut fields = jane();
        fields.first_name = "  Jane ".to_string();
        fields.last_name = "Doe\t".to_string();

        let request = validate(&fields).unwrap();
        assert_eq!(request.first_name, "Jane");
        assert_eq!(request.last_name, "Doe");
        assert_eq!(request.phone, "07123456789");
    }

    #[test]
    fn phone_mask_keeps_at_most_eleven_digits() {
        assert_eq!(mask_phone_input("071-2345 6789"), "07123456789");
        assert_eq!(mask_phone_input("0712345678999"), "07123456789");
        assert_eq!(mask_phone_input("abc"), "");
        assert_eq!(mask_phone_input("+44 71"), "4471");

        for input in ["", "1", "((((", "٣٣٣", "12345678901234567890x"] {
            let masked = mask_phone_input(input);
            assert!(masked.len() <= PHONE_DIGITS);
            assert!(masked.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn date_floor_is_today() {
        let today = date!(2030 - 01 - 01);

        assert_eq!(check_selectable_date("2030-01-01", today), Ok(today));
        assert_eq!(check_selectable_date("2030-02-14", today), Ok(date!(2030 - 02 - 14)));
        assert_eq!(
            check_selectable_date("2029-12-31", today),
            Err(FieldError::DateInPast { date: date!(2029 - 12 - 31), today })
        );
        assert_eq!(
            check_selectable_date("01/02/2030", today),
            Err(FieldError::BadDate("01/02/2030".to_string()))
        );
    }

    #[test]
    fn time_of_day_is_hours_and_minutes() {
        assert!(parse_time("19:30").is_ok());
        assert_eq!(parse_time("7pm"), Err(FieldError::BadTime("7pm".to_string())));
    }

    #[test]
    fn date_formats_as_picker_value() {
        assert_eq!(format_date(date!(2030 - 01 - 01)), "2030-01-01");
    }
}
