//! Contact Form Validation
//!
//! Six fields, one predicate each. The submit control is enabled exactly when
//! all six hold for the current values; nothing is ever sent anywhere.

use regex::Regex;
use std::sync::OnceLock;

static NAME_RE: OnceLock<Regex> = OnceLock::new();
static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_RE: OnceLock<Regex> = OnceLock::new();

fn name_re() -> &'static Regex {
    // Latin letters, the Arabic block, and spaces
    NAME_RE.get_or_init(|| Regex::new(r"^[A-Za-z\x{0600}-\x{06FF} ]{3,30}$").expect("name pattern"))
}

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"))
}

fn phone_re() -> &'static Regex {
    PHONE_RE.get_or_init(|| Regex::new(r"^[0-9]{8,14}$").expect("phone pattern"))
}

pub const MIN_AGE: f64 = 10.0;
pub const MAX_AGE: f64 = 120.0;
pub const MIN_PASSWORD_LEN: usize = 6;

pub fn valid_name(value: &str) -> bool {
    name_re().is_match(value.trim())
}

pub fn valid_email(value: &str) -> bool {
    email_re().is_match(value.trim())
}

pub fn valid_phone(value: &str) -> bool {
    phone_re().is_match(value.trim())
}

/// Numeric text as a browser reads a form number: decimal, exponent, or
/// `0x`/`0o`/`0b` integer literals
fn parse_number(text: &str) -> Option<f64> {
    let radix_literal = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)];
    for (prefix, radix) in radix_literal {
        if let Some(digits) = text.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix).ok().map(|n| n as f64);
        }
    }
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Numeric value in `[10, 120]`; blank or non-numeric text fails
pub fn valid_age(value: &str) -> bool {
    parse_number(value.trim())
        .map(|age| (MIN_AGE..=MAX_AGE).contains(&age))
        .unwrap_or(false)
}

/// Length in UTF-16 code units, as the input element reports it
pub fn valid_password(value: &str) -> bool {
    value.encode_utf16().count() >= MIN_PASSWORD_LEN
}

/// Same as the password, and the password itself valid
pub fn valid_confirmation(password: &str, confirmation: &str) -> bool {
    valid_password(password) && password == confirmation
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Age,
    Password,
    ConfirmPassword,
}

impl ContactField {
    pub const ALL: [ContactField; 6] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Age,
        ContactField::Password,
        ContactField::ConfirmPassword,
    ];

    /// DOM id of the input
    pub fn id(&self) -> &'static str {
        match self {
            ContactField::Name => "c_name",
            ContactField::Email => "c_email",
            ContactField::Phone => "c_phone",
            ContactField::Age => "c_age",
            ContactField::Password => "c_pass",
            ContactField::ConfirmPassword => "c_repass",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "Name (3-30 chars)",
            ContactField::Email => "Email",
            ContactField::Phone => "Phone (8-14 digits)",
            ContactField::Age => "Age (10-120)",
            ContactField::Password => "Password (6+ chars)",
            ContactField::ConfirmPassword => "Confirm password",
        }
    }

    /// Rendered as a password input
    pub fn is_secret(&self) -> bool {
        matches!(self, ContactField::Password | ContactField::ConfirmPassword)
    }
}

/// Current field values; validity is always recomputed from these
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub password: String,
    pub confirm_password: String,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Age => &self.age,
            ContactField::Password => &self.password,
            ContactField::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Apply one input change; returns whether submit is now enabled
    pub fn set(&mut self, field: ContactField, value: String) -> bool {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Age => self.age = value,
            ContactField::Password => self.password = value,
            ContactField::ConfirmPassword => self.confirm_password = value,
        }
        self.can_submit()
    }

    pub fn is_valid(&self, field: ContactField) -> bool {
        match field {
            ContactField::Name => valid_name(&self.name),
            ContactField::Email => valid_email(&self.email),
            ContactField::Phone => valid_phone(&self.phone),
            ContactField::Age => valid_age(&self.age),
            ContactField::Password => valid_password(&self.password),
            ContactField::ConfirmPassword => {
                valid_confirmation(&self.password, &self.confirm_password)
            }
        }
    }

    pub fn invalid_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|f| !self.is_valid(*f))
            .collect()
    }

    pub fn can_submit(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.is_valid(*f))
    }
}
