//! User preferences: the state owned by the preferences store

use serde::{Deserialize, Serialize};

/// Font size value that maps to the small (16px) container font
pub const FONT_SIZE_SMALL: &str = "small";

/// Font size options offered by the form unless configured otherwise
pub const DEFAULT_FONT_SIZES: &[&str] = &["small", "large"];

/// Everything the preferences store knows
///
/// Only the store's reducer writes these fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub user_name: String,
    pub font_size: String,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            user_name: "Jim".into(),
            font_size: FONT_SIZE_SMALL.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialized_field_names() {
        let value = serde_json::to_value(UserPreferences::default()).unwrap();
        assert_eq!(value, json!({ "userName": "Jim", "fontSize": "small" }));
    }

    #[test]
    fn test_deserialize_from_camel_case() {
        let prefs: UserPreferences =
            serde_json::from_str(r#"{ "userName": "Alice", "fontSize": "large" }"#).unwrap();
        assert_eq!(prefs.user_name, "Alice");
        assert_eq!(prefs.font_size, "large");
    }
}
