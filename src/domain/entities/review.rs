//! Customer reviews shown on the homepage.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// A testimonial. `image_url` is optional; the front end falls back to a
/// gender-specific avatar when it is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default)]
    pub image_url: Option<String>,
    pub name: String,
    pub gender: Gender,
    pub review: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_review_deserializes_without_image() {
        let review: Review = serde_json::from_value(json!({
            "name": "Ada",
            "gender": "female",
            "review": "Paid out on time."
        }))
        .unwrap();

        assert_eq!(review.gender, Gender::Female);
        assert!(review.image_url.is_none());
    }

    #[test]
    fn test_review_rejects_unknown_gender() {
        let result = serde_json::from_value::<Review>(json!({
            "name": "Sam",
            "gender": "other",
            "review": "Great"
        }));

        assert!(result.is_err());
    }
}
