mod loader;
mod model;
mod validator;

pub use loader::{CastleError, builtin_castle, load_castle_from_str};

// Minimal, intentional surface area: re-export only what the game/engine uses.
pub use model::{Castle, EXIT_ROOM, Exit, Room};
pub use validator::{ValidationError, validate_castle};
