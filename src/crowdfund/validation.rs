//! Field validation for accounts and projects.
//!
//! Every check is a pure function returning `Ok` or a [`ValidationError`]
//! whose `Display` is the reason shown to the user. Uniqueness rules need
//! the dataset and live with the commands that own them.
//!
//! Rules:
//! - Email: `local@domain.tld`, local part of letters, digits, `_` and `.`,
//!   lowercase domain, lowercase TLD of two or more letters
//! - Password (surrounding whitespace ignored): at least 8 characters, one
//!   uppercase letter, one digit and one non-alphanumeric character
//! - Phone: exactly 11 digits starting with `01`
//! - Dates: `YYYY-MM-DD`

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_.]+@[a-z]+\.[a-z]{2,}$").expect("valid email regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^01[0-9]{9}$").expect("valid phone regex"));

/// Checks an email address against the accepted format.
///
/// # Examples
/// ```
/// use crowdfund::validation::valid_email;
///
/// assert!(valid_email("jane.doe_1@mail.com").is_ok());
/// assert!(valid_email("jane@Mail.com").is_err());
/// assert!(valid_email("jane@mail.c").is_err());
/// ```
pub fn valid_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Checks password strength. Leading and trailing whitespace is ignored.
///
/// The rules are checked in order and the first failure is reported.
pub fn valid_password(password: &str) -> Result<(), ValidationError> {
    let password = password.trim();

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::PasswordMissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PasswordMissingDigit);
    }
    if !password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        return Err(ValidationError::PasswordMissingSpecial);
    }

    Ok(())
}

/// Checks that the confirmation matches the (trimmed) password.
pub fn confirm_password(password: &str, confirmation: &str) -> Result<(), ValidationError> {
    if password.trim() == confirmation.trim() {
        Ok(())
    } else {
        Err(ValidationError::PasswordMismatch)
    }
}

pub fn valid_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_RE.is_match(phone) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone)
    }
}

/// Parses a `YYYY-MM-DD` date.
pub fn valid_date(input: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(input.trim().to_string()))
}

/// Requires `end` to fall strictly after `start`.
pub fn date_after(end: NaiveDate, start: NaiveDate) -> Result<(), ValidationError> {
    if end > start {
        Ok(())
    } else {
        Err(ValidationError::EndNotAfterStart { start, end })
    }
}

pub fn require_title(title: &str) -> Result<String, ValidationError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(title.to_string())
}

pub fn require_details(details: &str) -> Result<String, ValidationError> {
    let details = details.trim();
    if details.is_empty() {
        return Err(ValidationError::EmptyDetails);
    }
    Ok(details.to_string())
}

/// Parses a funding target. Any finite number is accepted.
pub fn parse_target(input: &str) -> Result<f64, ValidationError> {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::InvalidTarget(input.trim().to_string())),
    }
}

/// Error type for field validation failures.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    InvalidEmail,
    PasswordTooShort,
    PasswordMissingUppercase,
    PasswordMissingDigit,
    PasswordMissingSpecial,
    PasswordMismatch,
    InvalidPhone,
    /// Input is not a `YYYY-MM-DD` date
    InvalidDate(String),
    EndNotAfterStart {
        start: NaiveDate,
        end: NaiveDate,
    },
    EmptyTitle,
    EmptyDetails,
    /// Funding target is not a number
    InvalidTarget(String),
    /// Project selector is not a positive integer
    InvalidSelector(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidEmail => write!(
                f,
                "Invalid email! Ensure the email follows a standard format (e.g., local@domain.com)"
            ),
            ValidationError::PasswordTooShort => write!(
                f,
                "Your password is too short! It must be at least {} characters long.",
                MIN_PASSWORD_LEN
            ),
            ValidationError::PasswordMissingUppercase => {
                write!(f, "Password must contain at least one uppercase letter.")
            }
            ValidationError::PasswordMissingDigit => {
                write!(f, "Password must contain at least one digit.")
            }
            ValidationError::PasswordMissingSpecial => {
                write!(f, "Password must contain at least one special character.")
            }
            ValidationError::PasswordMismatch => write!(f, "Passwords do not match!"),
            ValidationError::InvalidPhone => write!(
                f,
                "Invalid phone number! It must be 11 digits starting with 01."
            ),
            ValidationError::InvalidDate(input) => write!(
                f,
                "Invalid date '{}'! Please enter the date in YYYY-MM-DD format.",
                input
            ),
            ValidationError::EndNotAfterStart { start, end } => write!(
                f,
                "End date {} must be after the start date {}.",
                end, start
            ),
            ValidationError::EmptyTitle => write!(f, "Project title can't be empty"),
            ValidationError::EmptyDetails => write!(f, "Project details can't be empty"),
            ValidationError::InvalidTarget(input) => {
                write!(f, "Invalid total target amount '{}'!", input)
            }
            ValidationError::InvalidSelector(input) => {
                write!(f, "Invalid project number '{}'", input)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_valid_emails() {
        assert!(valid_email("user@mail.com").is_ok());
        assert!(valid_email("First.Last_9@example.org").is_ok());
        assert!(valid_email("a@bc.io").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert_eq!(valid_email(""), Err(ValidationError::InvalidEmail));
        assert_eq!(valid_email("user@"), Err(ValidationError::InvalidEmail));
        assert_eq!(valid_email("user@mail"), Err(ValidationError::InvalidEmail));
        assert_eq!(
            valid_email("user-name@mail.com"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            valid_email("user@mail.co.uk"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(valid_email("user@MAIL.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(valid_email("user@mail.x"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_password_rules() {
        assert!(valid_password("Abcdefg1!").is_ok());
        assert_eq!(
            valid_password("abcdefg1!"),
            Err(ValidationError::PasswordMissingUppercase)
        );
        assert_eq!(
            valid_password("Abcdefg!"),
            Err(ValidationError::PasswordMissingDigit)
        );
        assert_eq!(
            valid_password("Abcdefg1"),
            Err(ValidationError::PasswordMissingSpecial)
        );
        assert_eq!(valid_password("Ab1!"), Err(ValidationError::PasswordTooShort));
    }

    #[test]
    fn test_password_ignores_surrounding_whitespace() {
        assert!(valid_password("  Abcdefg1!  ").is_ok());
        // Padding does not count towards the length.
        assert_eq!(
            valid_password("   Ab1!   "),
            Err(ValidationError::PasswordTooShort)
        );
    }

    #[test]
    fn test_confirm_password() {
        assert!(confirm_password("Abcdefg1!", "Abcdefg1!").is_ok());
        assert!(confirm_password(" Abcdefg1!", "Abcdefg1! ").is_ok());
        assert_eq!(
            confirm_password("Abcdefg1!", "Abcdefg1?"),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn test_phone() {
        assert!(valid_phone("01012345678").is_ok());
        assert_eq!(valid_phone("0101234567"), Err(ValidationError::InvalidPhone));
        assert_eq!(valid_phone("010123456789"), Err(ValidationError::InvalidPhone));
        assert_eq!(valid_phone("02012345678"), Err(ValidationError::InvalidPhone));
        assert_eq!(valid_phone("0101234567a"), Err(ValidationError::InvalidPhone));
    }

    #[test]
    fn test_dates() {
        assert_eq!(valid_date("2025-03-09").unwrap(), date("2025-03-09"));
        assert_eq!(
            valid_date("09/03/2025"),
            Err(ValidationError::InvalidDate("09/03/2025".into()))
        );
        assert!(valid_date("2025-02-30").is_err());
        assert!(valid_date("").is_err());
    }

    #[test]
    fn test_date_after_is_strict() {
        let start = date("2025-01-01");
        assert!(date_after(date("2025-01-02"), start).is_ok());
        assert!(date_after(start, start).is_err());
        assert!(date_after(date("2024-12-31"), start).is_err());
    }

    #[test]
    fn test_required_fields_are_trimmed() {
        assert_eq!(require_title("  Well  ").unwrap(), "Well");
        assert_eq!(require_title("   "), Err(ValidationError::EmptyTitle));
        assert_eq!(require_details(""), Err(ValidationError::EmptyDetails));
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target("5000").unwrap(), 5000.0);
        assert_eq!(parse_target(" 12.5 ").unwrap(), 12.5);
        assert!(parse_target("lots").is_err());
        assert!(parse_target("NaN").is_err());
        assert!(parse_target("inf").is_err());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ValidationError::PasswordMismatch.to_string(),
            "Passwords do not match!"
        );
        assert_eq!(
            ValidationError::EndNotAfterStart {
                start: date("2025-01-02"),
                end: date("2025-01-01"),
            }
            .to_string(),
            "End date 2025-01-01 must be after the start date 2025-01-02."
        );
    }
}
