use std::collections::HashSet;

use super::model::{Castle, EXIT_ROOM};

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

pub fn validate_castle(castle: &Castle) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    // Rooms must not be empty
    if castle.rooms.is_empty() {
        errors.push(ValidationError::new("castle has no rooms"));
    }

    // start_room must exist
    if !castle.rooms.contains_key(&castle.start_room) {
        errors.push(ValidationError::new(format!(
            "start_room '{}' not found among rooms",
            castle.start_room
        )));
    }

    // Validate exits
    for (room_name, room) in &castle.rooms {
        let mut seen_directions: HashSet<String> = HashSet::new();

        for exit in &room.exits {
            if !castle.rooms.contains_key(&exit.target) {
                errors.push(ValidationError::new(format!(
                    "room '{}' exit '{}' targets missing room '{}'",
                    room_name, exit.direction, exit.target
                )));
            }

            if !seen_directions.insert(exit.direction.to_lowercase()) {
                errors.push(ValidationError::new(format!(
                    "room '{}' has duplicate exit direction '{}'",
                    room_name, exit.direction
                )));
            }
        }
    }

    // The terminal room is where quitting sends the player; the game cannot
    // end without it, and nothing may be reachable or liftable from it.
    match castle.rooms.get(EXIT_ROOM) {
        None => {
            errors.push(ValidationError::new(format!(
                "terminal room '{EXIT_ROOM}' is missing"
            )));
        }
        Some(room) => {
            if !room.exits.is_empty() {
                errors.push(ValidationError::new(format!(
                    "terminal room '{EXIT_ROOM}' must have no exits"
                )));
            }
            if room.item.is_some() {
                errors.push(ValidationError::new(format!(
                    "terminal room '{EXIT_ROOM}' must have no item"
                )));
            }
            if room.boss.is_some() {
                errors.push(ValidationError::new(format!(
                    "terminal room '{EXIT_ROOM}' must have no boss"
                )));
            }
        }
    }

    // A castle with nothing to collect has no win condition.
    if !castle.rooms.is_empty() && castle.collectible_count() == 0 {
        errors.push(ValidationError::new("castle has no collectible items"));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::model::{Exit, Room};
    use std::collections::HashMap;

    fn minimal_castle() -> Castle {
        let mut rooms = HashMap::new();
        rooms.insert(
            "Hall".to_string(),
            Room {
                name: "Hall".to_string(),
                exits: vec![],
                item: Some("Candle".to_string()),
                boss: None,
            },
        );
        rooms.insert(
            EXIT_ROOM.to_string(),
            Room {
                name: EXIT_ROOM.to_string(),
                exits: vec![],
                item: None,
                boss: None,
            },
        );
        Castle {
            name: "Test".to_string(),
            desc: String::new(),
            start_room: "Hall".to_string(),
            rooms,
        }
    }

    #[test]
    fn minimal_castle_is_valid() {
        assert!(validate_castle(&minimal_castle()).is_empty());
    }

    #[test]
    fn missing_start_room_reported() {
        let mut castle = minimal_castle();
        castle.start_room = "Throne".to_string();
        let errors = validate_castle(&castle);
        assert!(errors.iter().any(|e| e.message.contains("Throne")));
    }

    #[test]
    fn duplicate_direction_reported() {
        let mut castle = minimal_castle();
        let hall = castle.rooms.get_mut("Hall").unwrap();
        hall.exits.push(Exit {
            direction: "North".to_string(),
            target: EXIT_ROOM.to_string(),
        });
        hall.exits.push(Exit {
            direction: "north".to_string(),
            target: EXIT_ROOM.to_string(),
        });
        let errors = validate_castle(&castle);
        assert!(
            errors
                .iter()
                .any(|e| e.message.contains("duplicate exit direction"))
        );
    }

    #[test]
    fn terminal_room_with_exits_reported() {
        let mut castle = minimal_castle();
        castle.rooms.get_mut(EXIT_ROOM).unwrap().exits.push(Exit {
            direction: "North".to_string(),
            target: "Hall".to_string(),
        });
        let errors = validate_castle(&castle);
        assert!(errors.iter().any(|e| e.message.contains("no exits")));
    }

    #[test]
    fn no_collectibles_reported() {
        let mut castle = minimal_castle();
        castle.rooms.get_mut("Hall").unwrap().item = None;
        let errors = validate_castle(&castle);
        assert!(
            errors
                .iter()
                .any(|e| e.message.contains("no collectible items"))
        );
    }
}
