// src/specs/login_form.rs
//! Reader for the portal's login form.
//!
//! The username field is the first input matching `USERNAME_SELECTOR`
//! (text/email type, or a name/id mentioning "user"/"email"); the password
//! field is the first `type=password` input. The injected page script uses
//! the same selectors, so a headless surface and a real webview agree on
//! which fields get autofilled and captured.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::{PASSWORD_SELECTOR, USERNAME_SELECTOR};
use crate::core::html::{attr, selector};
use crate::model::Credentials;

static FORMS: LazyLock<Selector> = LazyLock::new(|| selector("form"));
static USERNAME: LazyLock<Selector> = LazyLock::new(|| selector(USERNAME_SELECTOR));
static PASSWORD: LazyLock<Selector> = LazyLock::new(|| selector(PASSWORD_SELECTOR));

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputField {
    pub name: Option<String>,
    pub id: Option<String>,
    pub value: String,
}

impl InputField {
    fn from_element(el: &ElementRef<'_>) -> Self {
        Self {
            name: attr(el, "name").map(str::to_string),
            id: attr(el, "id").map(str::to_string),
            value: attr(el, "value").unwrap_or_default().to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFields {
    pub username: Option<InputField>,
    pub password: Option<InputField>,
}

impl LoginFields {
    pub fn is_complete(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }
}

/// Autofill targets anywhere in the document.
pub fn find_fields(doc: &str) -> LoginFields {
    let html = Html::parse_document(doc);
    LoginFields {
        username: html.select(&USERNAME).next().map(|e| InputField::from_element(&e)),
        password: html.select(&PASSWORD).next().map(|e| InputField::from_element(&e)),
    }
}

fn fields_in(form: ElementRef<'_>) -> LoginFields {
    LoginFields {
        username: form.select(&USERNAME).next().map(|e| InputField::from_element(&e)),
        password: form.select(&PASSWORD).next().map(|e| InputField::from_element(&e)),
    }
}

/// What a submit listener would report for this page: the first form that has
/// both a username and a password field, with their current values. `typed`
/// stands in for what the user entered; without it the `value` attributes
/// are used. Whether the login then succeeds is unknown here.
pub fn capture_submission(doc: &str, typed: Option<&Credentials>) -> Option<Credentials> {
    let html = Html::parse_document(doc);
    let fields = html.select(&FORMS).map(fields_in).find(LoginFields::is_complete)?;
    if let Some(creds) = typed {
        return Some(creds.clone());
    }
    let username = fields.username.map(|f| f.value).unwrap_or_default();
    let password = fields.password.map(|f| f.value).unwrap_or_default();
    Some(Credentials { username, password })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LOGIN: &str = r#"
        <html><body>
          <form id="search"><input type="search" name="q"></form>
          <form action="/student/login" method="post">
            <input type="hidden" name="_token" value="abc">
            <input name="student_email" id="login-email" value="a@uni.edu">
            <input type="password" name="pwd" value="s3cret">
            <button type="submit">Login</button>
          </form>
        </body></html>"#;

    #[test]
    fn name_containing_email_counts_as_username() {
        let fields = find_fields(LOGIN);
        assert_eq!(
            fields.username,
            Some(InputField {
                name: Some(s!("student_email")),
                id: Some(s!("login-email")),
                value: s!("a@uni.edu"),
            })
        );
        assert_eq!(fields.password.map(|p| p.value), Some(s!("s3cret")));
    }

    #[test]
    fn capture_reads_values_from_the_login_form() {
        let creds = capture_submission(LOGIN, None).unwrap();
        assert_eq!(creds, Credentials::new("a@uni.edu", "s3cret"));
    }

    #[test]
    fn typed_values_override_markup() {
        let typed = Credentials::new("me", "pw");
        assert_eq!(capture_submission(LOGIN, Some(&typed)), Some(typed));
    }

    #[test]
    fn form_without_password_is_not_captured() {
        let doc = r#"<form><input type="text" name="user"></form>"#;
        assert_eq!(capture_submission(doc, None), None);
        assert!(!find_fields(doc).is_complete());
    }
}
