//! DTOs for the intro banner.

use serde::Serialize;
use validator::Validate;

use crate::domain::entities::{Intro, NewIntro, Stats};
use crate::utils::multipart::MultipartForm;

/// Text fields of the multipart intro upload.
#[derive(Debug, Validate)]
pub struct IntroForm {
    #[validate(required, length(min = 1))]
    pub heading: Option<String>,

    #[validate(required, length(min = 1))]
    pub body: Option<String>,

    #[validate(required, length(min = 1))]
    pub admin_whatsapp_num: Option<String>,
}

impl IntroForm {
    /// Takes the intro fields out of a collected multipart body.
    pub fn from_multipart(form: &mut MultipartForm) -> Self {
        Self {
            heading: form.take_text("heading"),
            body: form.take_text("body"),
            admin_whatsapp_num: form.take_text("adminWhatsappNum"),
        }
    }

    /// Converts a validated form into the service input.
    ///
    /// Returns `None` if a field is missing, which cannot happen after a
    /// successful [`Validate::validate`].
    pub fn into_new_intro(self) -> Option<NewIntro> {
        Some(NewIntro {
            heading: self.heading?,
            body: self.body?,
            admin_whatsapp_num: self.admin_whatsapp_num?,
        })
    }
}

/// `201` body of `POST /intro`.
#[derive(Debug, Serialize)]
pub struct IntroCreatedResponse {
    pub intro: Intro,
}

/// `200` body of `GET /intro`: the banner together with the statistics block.
#[derive(Debug, Serialize)]
pub struct IntroResponse {
    pub intro: Option<Intro>,
    pub stats: Option<Stats>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(heading: Option<&str>, body: Option<&str>, num: Option<&str>) -> IntroForm {
        IntroForm {
            heading: heading.map(str::to_string),
            body: body.map(str::to_string),
            admin_whatsapp_num: num.map(str::to_string),
        }
    }

    #[test]
    fn test_complete_form_is_valid() {
        let form = form(Some("Hi"), Some("Welcome"), Some("+1555"));

        assert!(form.validate().is_ok());
        assert_eq!(form.into_new_intro().unwrap().admin_whatsapp_num, "+1555");
    }

    #[test]
    fn test_missing_field_is_invalid() {
        assert!(form(Some("Hi"), None, Some("+1555")).validate().is_err());
    }

    #[test]
    fn test_empty_field_is_invalid() {
        assert!(form(Some(""), Some("Welcome"), Some("+1555")).validate().is_err());
    }
}
