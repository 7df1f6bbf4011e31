pub mod engine;
pub mod world;

use log::{debug, info};

use engine::{Output, handle_move, handle_pickup, render_status};
use world::{Castle, EXIT_ROOM};

pub use world::{CastleError, builtin_castle, load_castle_from_str};

const WELCOME_MSG: &str = "Welcome to the Shadow Castle! Find your loot and beat Necross!";

const FAREWELL_MSG: &str = "Thanks for playing! Hope you enjoyed it!";

const LOSE_MSG: &str = "You have been defeated by Necross! You didn't have all the Exodia \
    pieces and the necklace! You're stuck in the Shadow Realm!\n \
    Thank you for playing! Hope you enjoyed it!";

const WIN_MSG: &str = "You used your necklace and Exodia pieces to beat Necross and exit \
    the Shadow Realm! Make sure Kaiba and Pegasus pay for this!\n \
    Thank you for playing! Hope you enjoyed it!";

/// What the presentation loop should do after a command was dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    ShowHelp,
}

/// One player's playthrough: an owned deep copy of the castle plus the
/// player's position, loot, and pending status message. Nothing here is
/// ambient or global; the whole session is threaded through explicitly.
pub struct GameState {
    pub castle: Castle,
    pub current_room: String,
    pub inventory: Vec<String>,
    pub update_msg: String,
    pub item_acquired: bool,
    pub game_over: bool,
    /// Inventory size required to win, taken from the template at session
    /// start (the session copy loses items as they are collected).
    pub goal: usize,
}

impl GameState {
    pub fn new(template: &Castle) -> Self {
        GameState {
            castle: template.clone(),
            current_room: template.start_room.clone(),
            inventory: Vec::new(),
            update_msg: WELCOME_MSG.to_string(),
            item_acquired: false,
            game_over: false,
            goal: template.collectible_count(),
        }
    }

    /// Start-of-turn check, run before rendering. Entering the terminal
    /// room or a boss room ends the game; the boss encounter is a single
    /// inventory check, not a battle. Game over is terminal.
    pub fn evaluate_end_conditions(&mut self) {
        if self.current_room == EXIT_ROOM {
            self.update_msg = FAREWELL_MSG.to_string();
            self.game_over = true;
        }

        if let Some(room) = self.castle.rooms.get(&self.current_room) {
            if room.boss.is_some() {
                self.update_msg = if self.inventory.len() < self.goal {
                    info!("boss reached with {} of {} items: lose", self.inventory.len(), self.goal);
                    LOSE_MSG.to_string()
                } else {
                    info!("boss reached with full inventory: win");
                    WIN_MSG.to_string()
                };
                self.game_over = true;
            }
        }
    }

    /// Render the status view for this turn. The one-shot acquisition
    /// announcement is consumed here.
    pub fn render_status(&mut self) -> Output {
        let mut out = Output::new();
        render_status(
            &mut out,
            &self.castle.rooms,
            &self.current_room,
            &self.inventory,
            &mut self.update_msg,
            &mut self.item_acquired,
        );
        out
    }

    /// Dispatch one line of player input. The first token selects the
    /// command, case-insensitively; the rest is its argument. Every error
    /// is recoverable and lands in `update_msg` for the next render.
    pub fn step(&mut self, input: &str) -> StepOutcome {
        if self.game_over {
            return StepOutcome::Continue;
        }

        debug!("command: {input:?}");
        self.update_msg.clear();

        let mut parts = input.split_whitespace();
        let verb = parts.next().unwrap_or("");
        let rest = parts.collect::<Vec<&str>>().join(" ");

        if verb.eq_ignore_ascii_case("move") || verb.eq_ignore_ascii_case("go") {
            if rest.is_empty() {
                self.update_msg = "You need a direction!".to_string();
            } else {
                handle_move(
                    &self.castle.rooms,
                    &mut self.current_room,
                    &mut self.update_msg,
                    &rest,
                );
            }
        } else if verb.eq_ignore_ascii_case("get") {
            if rest.trim().is_empty() {
                self.update_msg = "You can't pick up thin air. \
                    Include the item name (ex. get fish tacos)."
                    .to_string();
            } else {
                handle_pickup(
                    &mut self.castle.rooms,
                    &self.current_room,
                    &mut self.inventory,
                    &mut self.update_msg,
                    &mut self.item_acquired,
                    &rest,
                );
            }
        } else if verb.eq_ignore_ascii_case("help") {
            return StepOutcome::ShowHelp;
        } else if verb.eq_ignore_ascii_case("exit") || verb.eq_ignore_ascii_case("quit") {
            self.current_room = EXIT_ROOM.to_string();
        } else {
            self.update_msg =
                "Error: Invalid command. Type 'help' if you need assistance.".to_string();
        }

        StepOutcome::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_game() -> GameState {
        GameState::new(&builtin_castle().unwrap())
    }

    #[test]
    fn session_starts_at_barbican_with_welcome() {
        let state = new_game();
        assert_eq!(state.current_room, "Barbican");
        assert!(state.inventory.is_empty());
        assert_eq!(state.update_msg, WELCOME_MSG);
        assert_eq!(state.goal, 6);
        assert!(!state.game_over);
    }

    #[test]
    fn move_and_pickup_scenario() {
        let mut state = new_game();

        state.step("move South");
        assert_eq!(state.current_room, "Gathering Hall");

        state.step("get left arm of the forbidden one");
        assert_eq!(state.inventory, vec!["Left Arm Of The Forbidden One"]);
        assert!(state.castle.rooms["Gathering Hall"].item.is_none());
        assert!(state.item_acquired);
    }

    #[test]
    fn invalid_direction_leaves_room_unchanged() {
        let mut state = new_game();
        state.step("move Up");
        assert_eq!(state.current_room, "Barbican");
        assert!(state.update_msg.contains("can't move up"));
    }

    #[test]
    fn move_without_direction_errors() {
        let mut state = new_game();
        state.step("go");
        assert_eq!(state.update_msg, "You need a direction!");
        assert_eq!(state.current_room, "Barbican");
    }

    #[test]
    fn bare_get_errors_without_state_change() {
        let mut state = new_game();
        state.step("get");
        assert!(state.update_msg.starts_with("You can't pick up thin air."));
        assert!(state.inventory.is_empty());
        assert_eq!(state.current_room, "Barbican");
    }

    #[test]
    fn unknown_command_errors() {
        let mut state = new_game();
        state.step("dance");
        assert_eq!(
            state.update_msg,
            "Error: Invalid command. Type 'help' if you need assistance."
        );
    }

    #[test]
    fn help_requests_instructions_and_clears_message() {
        let mut state = new_game();
        assert_eq!(state.step("HELP"), StepOutcome::ShowHelp);
        assert!(state.update_msg.is_empty());
    }

    #[test]
    fn quit_teleports_to_terminal_room() {
        let mut state = new_game();
        state.step("quit");
        assert_eq!(state.current_room, EXIT_ROOM);

        state.evaluate_end_conditions();
        assert!(state.game_over);
        assert_eq!(state.update_msg, FAREWELL_MSG);
    }

    #[test]
    fn boss_with_partial_inventory_loses() {
        let mut state = new_game();
        for cmd in ["go West", "go South", "go South"] {
            state.step(cmd);
        }
        assert_eq!(state.current_room, "Catacombs");

        state.evaluate_end_conditions();
        assert!(state.game_over);
        assert!(state.update_msg.contains("defeated by Necross"));
    }

    #[test]
    fn no_transition_leaves_game_over() {
        let mut state = new_game();
        state.step("quit");
        state.evaluate_end_conditions();
        assert!(state.game_over);

        state.step("move North");
        assert_eq!(state.current_room, EXIT_ROOM);
        assert!(state.game_over);
    }
}
