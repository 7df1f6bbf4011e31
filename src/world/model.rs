use std::collections::HashMap;

/// Name of the sentinel room that ends the game when entered.
pub const EXIT_ROOM: &str = "Exit";

/// Runtime castle type used by the game loop.
///
/// This is the immutable template; a session gets its own deep copy via
/// `Clone`, so item removal never touches the template or other sessions.
#[derive(Clone, Debug)]
pub struct Castle {
    pub name: String,
    pub desc: String,
    pub start_room: String,
    pub rooms: HashMap<String, Room>,
}

#[derive(Clone, Debug)]
pub struct Room {
    pub name: String,
    pub exits: Vec<Exit>,
    pub item: Option<String>,
    pub boss: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Exit {
    pub direction: String,
    pub target: String,
}

impl Castle {
    /// Number of items a player can actually collect: items lying in rooms
    /// without a boss. A boss-room item can never be taken.
    pub fn collectible_count(&self) -> usize {
        self.rooms
            .values()
            .filter(|r| r.boss.is_none() && r.item.is_some())
            .count()
    }
}

impl Room {
    pub fn exit_target(&self, direction: &str) -> Option<&str> {
        self.exits
            .iter()
            .find(|e| e.direction.eq_ignore_ascii_case(direction))
            .map(|e| e.target.as_str())
    }
}
