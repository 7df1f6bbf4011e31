use serde::Deserialize;
use std::collections::HashMap;

use thiserror::Error;

use super::model::{Castle, Exit, Room};
use super::validator::validate_castle;

/// The castle shipped with the game, embedded at compile time. The map is
/// fixed by design; there is no file or flag to swap it out.
const CASTLE_TOML: &str = include_str!("../../assets/castle.toml");

#[derive(Debug, Error)]
pub enum CastleError {
    #[error("failed to parse castle definition: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid castle definition: {0}")]
    Invalid(String),
}

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct CastleFile {
    castle: CastleHeader,
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
}

#[derive(Deserialize)]
struct CastleHeader {
    name: String,
    start_room: String,
    #[serde(default)]
    desc: String,
}

#[derive(Deserialize)]
struct RoomConfig {
    name: String,

    #[serde(default)]
    item: Option<String>,

    #[serde(default)]
    boss: Option<String>,

    #[serde(default)]
    exit: Vec<ExitConfig>, // [[room.exit]]
}

#[derive(Deserialize)]
struct ExitConfig {
    direction: String,
    target: String,
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Public API: build the embedded castle template.
pub fn builtin_castle() -> Result<Castle, CastleError> {
    load_castle_from_str(CASTLE_TOML)
}

/// Public API: load a castle template from a TOML string.
pub fn load_castle_from_str(contents: &str) -> Result<Castle, CastleError> {
    let file: CastleFile = toml::from_str(contents)?;

    if file.castle.name.trim().is_empty() {
        return Err(CastleError::Invalid("castle.name may not be empty".into()));
    }
    if file.castle.start_room.trim().is_empty() {
        return Err(CastleError::Invalid(
            "castle.start_room may not be empty".into(),
        ));
    }

    let mut rooms: HashMap<String, Room> = HashMap::new();

    for room_cfg in file.room {
        if rooms.contains_key(&room_cfg.name) {
            return Err(CastleError::Invalid(format!(
                "duplicate room name: {}",
                room_cfg.name
            )));
        }

        let exits = room_cfg
            .exit
            .into_iter()
            .map(|e| Exit {
                direction: e.direction,
                target: e.target,
            })
            .collect();

        rooms.insert(
            room_cfg.name.clone(),
            Room {
                name: room_cfg.name,
                exits,
                item: room_cfg.item,
                boss: room_cfg.boss,
            },
        );
    }

    let castle = Castle {
        name: file.castle.name,
        desc: file.castle.desc,
        start_room: file.castle.start_room,
        rooms,
    };

    let errors = validate_castle(&castle);
    if !errors.is_empty() {
        let combined = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(CastleError::Invalid(combined));
    }

    Ok(castle)
}
