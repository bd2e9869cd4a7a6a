//! Contact form state shared by the contact page and the home page section.

use std::future::Future;

use crate::api::models::ContactSubmission;
use crate::api::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please tell us your name.")]
    MissingName,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("That email address doesn't look right.")]
    InvalidEmail,
    #[error("Please add a short message.")]
    MissingMessage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Company,
    Message,
}

pub fn set_field(form: &mut ContactSubmission, field: Field, value: String) {
    match field {
        Field::Name => form.name = value,
        Field::Email => form.email = value,
        Field::Company => form.company = value,
        Field::Message => form.message = value,
    }
}

/// Trims every field and checks the required ones.
pub fn validate(form: &ContactSubmission) -> Result<ContactSubmission, FormError> {
    let cleaned = ContactSubmission {
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        company: form.company.trim().to_string(),
        message: form.message.trim().to_string(),
    };
    if cleaned.name.is_empty() {
        return Err(FormError::MissingName);
    }
    if cleaned.email.is_empty() {
        return Err(FormError::MissingEmail);
    }
    if !looks_like_email(&cleaned.email) {
        return Err(FormError::InvalidEmail);
    }
    if cleaned.message.is_empty() {
        return Err(FormError::MissingMessage);
    }
    Ok(cleaned)
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .map_or(false, |(host, tld)| !host.is_empty() && !tld.is_empty())
}

/// Sends an already validated form and reports the resulting status.
pub async fn submit<F, Fut>(form: ContactSubmission, send: F) -> SubmitStatus
where
    F: FnOnce(ContactSubmission) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    match send(form).await {
        Ok(()) => {
            log::info!("contact form submitted");
            SubmitStatus::Success
        }
        Err(e) => {
            log::error!("contact form submission failed: {}", e);
            SubmitStatus::Error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn filled() -> ContactSubmission {
        ContactSubmission {
            name: "  Jane ".into(),
            email: "jane@floneo.co".into(),
            company: "".into(),
            message: "Tell me more".into(),
        }
    }

    #[test]
    fn trims_and_accepts_complete_form() {
        let cleaned = validate(&filled()).unwrap();
        assert_eq!(cleaned.name, "Jane");
        assert!(cleaned.company.is_empty());
    }

    #[test]
    fn reports_first_missing_field() {
        let mut form = filled();
        form.name = "   ".into();
        assert_eq!(validate(&form), Err(FormError::MissingName));

        let mut form = filled();
        form.email.clear();
        assert_eq!(validate(&form), Err(FormError::MissingEmail));

        let mut form = filled();
        form.message = "\n".into();
        assert_eq!(validate(&form), Err(FormError::MissingMessage));
    }

    #[test]
    fn rejects_malformed_emails() {
        for bad in ["jane", "@floneo.co", "jane@", "jane@floneo", "ja ne@floneo.co", "a@b@c.de"] {
            let mut form = filled();
            form.email = bad.into();
            assert_eq!(validate(&form), Err(FormError::InvalidEmail), "{}", bad);
        }
    }

    #[test]
    fn set_field_targets_one_field() {
        let mut form = ContactSubmission::default();
        set_field(&mut form, Field::Company, "Floneo".into());
        assert_eq!(form.company, "Floneo");
        assert!(form.name.is_empty());
    }

    #[test]
    fn submit_maps_outcome_to_status() {
        let ok = block_on(submit(filled(), |_| async { Ok::<(), ApiError>(()) }));
        assert_eq!(ok, SubmitStatus::Success);

        let failed = block_on(submit(filled(), |_| async { Err::<(), _>(ApiError::Timeout) }));
        assert_eq!(failed, SubmitStatus::Error);
    }
}
