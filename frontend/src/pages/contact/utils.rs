use crate::error::ValidationError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}

pub fn validate(fields: &ContactFields) -> Result<(), ValidationError> {
    let missing = [&fields.name, &fields.email, &fields.message]
        .iter()
        .any(|value| value.trim().is_empty());
    if missing {
        return Err(ValidationError::MissingField);
    }
    if !is_plausible_email(fields.email.trim()) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// `local@domain.tld` shape check: one `@`, non-empty local part, a dot inside
/// the domain with text on both sides, no whitespace.
pub fn is_plausible_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .match_indices('.')
        .any(|(at, _)| at > 0 && at + 1 < domain.len())
}
