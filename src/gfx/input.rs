use macroquad::prelude::*;

use crate::core::arcade::Command;

pub fn command_for_key(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Up => Some(Command::AngleUp),
        KeyCode::Down => Some(Command::AngleDown),
        KeyCode::Right => Some(Command::SpeedUp),
        KeyCode::Left => Some(Command::SpeedDown),
        KeyCode::Equal | KeyCode::KpAdd => Some(Command::HeightUp),
        KeyCode::Minus | KeyCode::KpSubtract => Some(Command::HeightDown),
        KeyCode::F => Some(Command::Fire),
        KeyCode::Q => Some(Command::Quit),
        _ => None,
    }
}

/// The single most recent key press of this frame, if any. Never blocks.
pub fn poll_command() -> Option<Command> {
    get_last_key_pressed().and_then(command_for_key)
}

#[cfg(test)]
mod tests {
    use macroquad::prelude::KeyCode;

    use super::command_for_key;
    use crate::core::arcade::Command;

    #[test]
    fn maps_game_keys() {
        assert_eq!(command_for_key(KeyCode::Up), Some(Command::AngleUp));
        assert_eq!(command_for_key(KeyCode::Left), Some(Command::SpeedDown));
        assert_eq!(command_for_key(KeyCode::Equal), Some(Command::HeightUp));
        assert_eq!(command_for_key(KeyCode::Minus), Some(Command::HeightDown));
        assert_eq!(command_for_key(KeyCode::F), Some(Command::Fire));
        assert_eq!(command_for_key(KeyCode::Q), Some(Command::Quit));
        assert_eq!(command_for_key(KeyCode::Space), None);
    }
}
