//! Pure mapping from preferences to what the screen shows

use crate::state::{UserPreferences, FONT_SIZE_SMALL};

pub const SMALL_FONT_PX: u16 = 16;
pub const LARGE_FONT_PX: u16 = 24;

/// The view updates derived from one preferences snapshot
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewModel {
    /// Text of the greeting target
    pub user_name_text: String,
    /// Font size applied to the container
    pub container_font_px: u16,
    /// Option checked in the font size form
    pub selected_font_size: String,
}

/// Map preferences to view updates
///
/// The container uses the small font only for `"small"`; any other value,
/// known or not, gets the large font.
pub fn render(prefs: &UserPreferences) -> ViewModel {
    let container_font_px = if prefs.font_size == FONT_SIZE_SMALL {
        SMALL_FONT_PX
    } else {
        LARGE_FONT_PX
    };

    ViewModel {
        user_name_text: prefs.user_name.clone(),
        container_font_px,
        selected_font_size: prefs.font_size.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs(user_name: &str, font_size: &str) -> UserPreferences {
        UserPreferences {
            user_name: user_name.into(),
            font_size: font_size.into(),
        }
    }

    #[test]
    fn test_initial_view() {
        let view = render(&UserPreferences::default());
        assert_eq!(view.user_name_text, "Jim");
        assert_eq!(view.container_font_px, 16);
        assert_eq!(view.selected_font_size, "small");
    }

    #[test]
    fn test_anything_but_small_is_large() {
        for size in ["large", "medium", "", "Small"] {
            assert_eq!(render(&prefs("Jim", size)).container_font_px, 24, "{size:?}");
        }
    }
}
