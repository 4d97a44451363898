//! Login and signup form validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call these before "submitting". There is no backend to submit to;
//! accepted forms are only forwarded to the log sink, with the password left
//! out of the logged line.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern compiles")
});

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
}

/// Trim the email and require both fields.
pub fn validate_login_input(email: &str, password: &str) -> Result<LoginForm, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(LoginForm { email: email.to_owned(), password: password.to_owned() })
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if EMAIL_RE.is_match(email) { Ok(()) } else { Err("Invalid email format.") }
}

/// Reports the first unmet requirement: length, then uppercase, lowercase
/// and digit. Length counts UTF-8 bytes; letters and digits are Unicode
/// aware.
pub fn validate_password_strength(password: &str) -> Result<(), &'static str> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters long.");
    }
    if !password.chars().any(char::is_uppercase) {
        return Err("Password must contain at least one uppercase letter.");
    }
    if !password.chars().any(char::is_lowercase) {
        return Err("Password must contain at least one lowercase letter.");
    }
    if !password.chars().any(char::is_numeric) {
        return Err("Password must contain at least one digit.");
    }
    Ok(())
}

pub fn validate_signup_input(email: &str, password: &str, confirm: &str) -> Result<SignupForm, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter an email.");
    }
    validate_email(email)?;
    validate_password_strength(password)?;
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(SignupForm { email: email.to_owned(), password: password.to_owned() })
}

#[derive(Serialize)]
struct Submission<'a> {
    form: &'a str,
    email: &'a str,
}

/// JSON line describing an accepted form, without the password.
pub fn submission_log_line(form: &str, email: &str) -> String {
    serde_json::to_string(&Submission { form, email }).unwrap_or_default()
}
