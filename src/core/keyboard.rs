use egui::Key;

/// Gallery action bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    SlideLeft,
    SlideRight,
    ExitFullscreen,
}

pub fn action_for_key(key: Key) -> Option<KeyAction> {
    match key {
        Key::ArrowLeft => Some(KeyAction::SlideLeft),
        Key::ArrowRight => Some(KeyAction::SlideRight),
        Key::Escape => Some(KeyAction::ExitFullscreen),
        _ => None,
    }
}

const BOUND_KEYS: [Key; 3] = [Key::ArrowLeft, Key::ArrowRight, Key::Escape];

/// Bound keys pressed this frame, in binding order.
pub fn pressed_keys(input: &egui::InputState) -> Vec<Key> {
    BOUND_KEYS
        .into_iter()
        .filter(|key| input.key_pressed(*key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_escape_are_bound() {
        assert_eq!(action_for_key(Key::ArrowLeft), Some(KeyAction::SlideLeft));
        assert_eq!(action_for_key(Key::ArrowRight), Some(KeyAction::SlideRight));
        assert_eq!(
            action_for_key(Key::Escape),
            Some(KeyAction::ExitFullscreen)
        );
        assert_eq!(action_for_key(Key::Space), None);
    }

    #[test]
    fn every_bound_key_has_an_action() {
        assert!(BOUND_KEYS.iter().all(|k| action_for_key(*k).is_some()));
    }
}
