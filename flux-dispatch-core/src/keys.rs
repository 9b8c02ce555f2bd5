//! Key strings such as `"ctrl+u"` or `"shift+tab"`
//!
//! Used for help text and for building key events in tests.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

/// Named keys: (accepted spellings, code, display label)
const NAMED_KEYS: &[(&[&str], KeyCode, &str)] = &[
    (&["esc", "escape"], KeyCode::Esc, "Esc"),
    (&["enter", "return"], KeyCode::Enter, "Enter"),
    (&["tab"], KeyCode::Tab, "Tab"),
    (&["backtab"], KeyCode::BackTab, "Shift+Tab"),
    (&["backspace"], KeyCode::Backspace, "Backspace"),
    (&["delete", "del"], KeyCode::Delete, "Del"),
    (&["insert"], KeyCode::Insert, "Ins"),
    (&["up"], KeyCode::Up, "Up"),
    (&["down"], KeyCode::Down, "Down"),
    (&["left"], KeyCode::Left, "Left"),
    (&["right"], KeyCode::Right, "Right"),
    (&["home"], KeyCode::Home, "Home"),
    (&["end"], KeyCode::End, "End"),
    (&["pageup"], KeyCode::PageUp, "PgUp"),
    (&["pagedown"], KeyCode::PageDown, "PgDn"),
    (&["space"], KeyCode::Char(' '), "Space"),
];

fn split_modifiers(key_str: &str) -> (KeyModifiers, &str) {
    let mut modifiers = KeyModifiers::empty();
    let mut parts = key_str.split('+').map(str::trim).collect::<Vec<_>>();
    let key_part = parts.pop().unwrap_or_default();
    for part in parts {
        match part {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => {}
        }
    }
    (modifiers, key_part)
}

fn parse_code(key_part: &str) -> Option<KeyCode> {
    if let Some((_, code, _)) = NAMED_KEYS
        .iter()
        .find(|(names, _, _)| names.contains(&key_part))
    {
        return Some(*code);
    }
    if let Some(n) = key_part.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
        if (1..=12).contains(&n) {
            return Some(KeyCode::F(n));
        }
    }
    let mut chars = key_part.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(KeyCode::Char(c)),
        _ => None,
    }
}

/// Parse a key string like "q", "esc", "ctrl+u", "shift+tab" into a `KeyEvent`
pub fn parse_key_string(key_str: &str) -> Option<KeyEvent> {
    let key_str = key_str.trim().to_lowercase();
    if key_str.is_empty() {
        return None;
    }

    let (mut modifiers, key_part) = split_modifiers(&key_str);
    let mut code = parse_code(key_part)?;

    // Terminals report shift+tab as BackTab with the shift modifier set
    if code == KeyCode::Tab && modifiers.contains(KeyModifiers::SHIFT) {
        code = KeyCode::BackTab;
    }
    if code == KeyCode::BackTab {
        modifiers |= KeyModifiers::SHIFT;
    }

    Some(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    })
}

/// Format a key string for display (e.g., "ctrl+u" -> "^U", "tab" -> "Tab")
pub fn format_key_for_display(key_str: &str) -> String {
    let key_str = key_str.trim().to_lowercase();
    let (modifiers, key_part) = split_modifiers(&key_str);

    let is_backtab =
        key_part == "backtab" || (key_part == "tab" && modifiers.contains(KeyModifiers::SHIFT));
    if is_backtab {
        return "Shift+Tab".to_string();
    }

    let label = match NAMED_KEYS
        .iter()
        .find(|(names, _, _)| names.contains(&key_part))
    {
        Some((_, _, label)) => label.to_string(),
        None => key_part.to_uppercase(),
    };

    let mut prefix = String::new();
    if modifiers.contains(KeyModifiers::CONTROL) {
        prefix.push('^');
    }
    if modifiers.contains(KeyModifiers::ALT) {
        prefix.push_str("Alt+");
    }
    if modifiers.contains(KeyModifiers::SHIFT) {
        prefix.push_str("Shift+");
    }
    prefix + &label
}
