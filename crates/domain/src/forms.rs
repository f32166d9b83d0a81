use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::{Validate, ValidationErrors};

/// Field name → messages, ordered by field name for stable rendering.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Input structs that can be trimmed before validation.
pub trait FormInput: Validate + Default {
    fn normalize(self) -> Self;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CommentForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 80, message = "Enter a name of 1 to 80 characters."))]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "This field is required."))]
    pub body: String,
}

impl FormInput for CommentForm {
    fn normalize(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            body: self.body.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct EmailPostForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 25, message = "Enter a name of 1 to 25 characters."))]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,
    #[serde(default)]
    #[validate(email(message = "Enter a valid email address."))]
    pub to: String,
    #[serde(default)]
    pub comments: String,
}

impl FormInput for EmailPostForm {
    fn normalize(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            to: self.to.trim().to_string(),
            comments: self.comments.trim().to_string(),
        }
    }
}

/// A form together with the submitted data and its validation outcome.
///
/// An unbound form (nothing submitted yet) is never valid and carries no errors.
#[derive(Debug, Clone)]
pub struct BoundForm<T> {
    pub data: T,
    pub errors: FieldErrors,
    bound: bool,
}

impl<T: FormInput> BoundForm<T> {
    pub fn unbound() -> Self {
        Self {
            data: T::default(),
            errors: FieldErrors::new(),
            bound: false,
        }
    }

    pub fn bind(data: T) -> Self {
        let data = data.normalize();
        let errors = match data.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => flatten(&e),
        };
        Self {
            data,
            errors,
            bound: true,
        }
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    pub fn is_valid(&self) -> bool {
        self.bound && self.errors.is_empty()
    }

    pub fn errors_for(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

fn flatten(errors: &ValidationErrors) -> FieldErrors {
    let mut out = FieldErrors::new();
    for (field, errs) in errors.field_errors() {
        let messages = errs
            .iter()
            .map(|e| match &e.message {
                Some(m) => m.to_string(),
                None => format!("Invalid value ({}).", e.code),
            })
            .collect();
        out.insert(field.to_string(), messages);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(name: &str, email: &str, body: &str) -> CommentForm {
        CommentForm {
            name: name.into(),
            email: email.into(),
            body: body.into(),
        }
    }

    #[test]
    fn unbound_form_is_not_valid_and_has_no_errors() {
        let form = BoundForm::<CommentForm>::unbound();
        assert!(!form.is_bound());
        assert!(!form.is_valid());
        assert!(form.errors.is_empty());
    }

    #[test]
    fn valid_comment_is_trimmed() {
        let form = BoundForm::bind(comment("  Ana ", " ana@example.com", " Nice post \n"));
        assert!(form.is_valid(), "{:?}", form.errors);
        assert_eq!(form.data.name, "Ana");
        assert_eq!(form.data.email, "ana@example.com");
        assert_eq!(form.data.body, "Nice post");
    }

    #[test]
    fn missing_fields_are_reported_per_field() {
        let form = BoundForm::bind(comment("", "not-an-email", "   "));
        assert!(!form.is_valid());
        assert_eq!(form.errors_for("name").len(), 1);
        assert_eq!(form.errors_for("email"), ["Enter a valid email address."]);
        assert_eq!(form.errors_for("body"), ["This field is required."]);
    }

    #[test]
    fn overlong_comment_name_is_rejected() {
        let form = BoundForm::bind(comment(&"x".repeat(81), "a@b.io", "hi"));
        assert_eq!(form.errors.len(), 1);
        assert!(!form.errors_for("name").is_empty());
    }

    #[test]
    fn share_form_allows_empty_comments() {
        let form = BoundForm::bind(EmailPostForm {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            to: "bo@example.com".into(),
            comments: String::new(),
        });
        assert!(form.is_valid(), "{:?}", form.errors);
    }

    #[test]
    fn share_form_checks_both_addresses() {
        let form = BoundForm::bind(EmailPostForm {
            name: "Ana".into(),
            email: "ana@".into(),
            to: "".into(),
            comments: "read this".into(),
        });
        assert!(!form.is_valid());
        assert!(!form.errors_for("email").is_empty());
        assert!(!form.errors_for("to").is_empty());
        assert!(form.errors_for("comments").is_empty());
    }

    #[test]
    fn share_form_name_is_capped_at_25_chars() {
        let form = BoundForm::bind(EmailPostForm {
            name: "n".repeat(26),
            email: "ana@example.com".into(),
            to: "bo@example.com".into(),
            comments: String::new(),
        });
        assert!(!form.errors_for("name").is_empty());
    }
}
