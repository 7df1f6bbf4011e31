use std::collections::HashMap;

use crate::world::Room;

/// Move the player through an exit of the current room.
///
/// Direction matching is case-insensitive on the whole token. An unknown
/// direction leaves the room unchanged and records an error message, so the
/// operation is idempotent on invalid input.
pub fn handle_move(
    rooms: &HashMap<String, Room>,
    current_room: &mut String,
    update_msg: &mut String,
    direction: &str,
) {
    let target = rooms
        .get(current_room.as_str())
        .and_then(|room| room.exit_target(direction))
        .map(str::to_string);

    match target {
        Some(target) => *current_room = target,
        None => {
            *update_msg = format!(
                "You can't move {}, see above for the directions you can move!",
                direction.to_lowercase()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::builtin_castle;

    #[test]
    fn valid_move_changes_room() {
        let castle = builtin_castle().unwrap();
        let mut current = "Barbican".to_string();
        let mut msg = String::new();

        handle_move(&castle.rooms, &mut current, &mut msg, "South");

        assert_eq!(current, "Gathering Hall");
        assert!(msg.is_empty());
    }

    #[test]
    fn direction_matching_is_case_insensitive() {
        let castle = builtin_castle().unwrap();
        let mut current = "Barbican".to_string();
        let mut msg = String::new();

        handle_move(&castle.rooms, &mut current, &mut msg, "eAsT");

        assert_eq!(current, "Kitchen");
    }

    #[test]
    fn invalid_move_leaves_room_and_sets_error() {
        let castle = builtin_castle().unwrap();
        let mut current = "Barbican".to_string();
        let mut msg = String::new();

        handle_move(&castle.rooms, &mut current, &mut msg, "Up");

        assert_eq!(current, "Barbican");
        assert_eq!(
            msg,
            "You can't move up, see above for the directions you can move!"
        );
    }

    #[test]
    fn invalid_move_is_idempotent() {
        let castle = builtin_castle().unwrap();
        let mut current = "Keep".to_string();
        let mut msg = String::new();

        for _ in 0..3 {
            handle_move(&castle.rooms, &mut current, &mut msg, "North");
            assert_eq!(current, "Keep");
        }
    }
}
