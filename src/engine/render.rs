use std::collections::HashMap;

use crate::engine::output::Output;
use crate::world::{EXIT_ROOM, Room};

/// Join direction names in natural-language list form:
/// "A", "A or B", "A, B, or C".
pub fn join_directions(directions: &[&str]) -> String {
    match directions {
        [] => String::new(),
        [only] => (*only).to_string(),
        [first, second] => format!("{first} or {second}"),
        [head @ .., last] => format!("{}, or {last}", head.join(", ")),
    }
}

/// Render the per-turn status view.
///
/// The only side effect is consuming the one-shot acquisition announcement:
/// when `item_acquired` is set, the pending update message is shown as the
/// ground-item line exactly once, then both are cleared.
pub fn render_status(
    out: &mut Output,
    rooms: &HashMap<String, Room>,
    current_room: &str,
    inventory: &[String],
    update_msg: &mut String,
    item_acquired: &mut bool,
) {
    if current_room == EXIT_ROOM {
        out.status("You are exiting the castle.");
        out.status("You dropped all the items in your inventory and give up!");
        out.status("Necross laughs at you and taunts you to try again!");
        out.event(update_msg.as_str());
        return;
    }

    let Some(room) = rooms.get(current_room) else {
        return;
    };

    let movement_line = match &room.boss {
        Some(boss) => {
            out.status(format!("You are in the {current_room}. {boss} is here!"));
            "You can't move. It's time to duel!".to_string()
        }
        None => {
            let directions: Vec<&str> = room
                .exits
                .iter()
                .map(|e| e.direction.as_str())
                .collect();
            out.status(format!("You are in the {current_room}."));
            format!(
                "You can move {}.",
                join_directions(&directions).to_lowercase()
            )
        }
    };

    if inventory.is_empty() {
        out.status("Inventory: (empty)");
    } else {
        out.status(format!("Inventory: {}", inventory.join(", ")));
    }

    match &room.item {
        Some(item) if !inventory.contains(item) => {
            if room.boss.is_some() {
                out.status(format!(
                    "{item} is on the ground! To get it back, beat Necross!"
                ));
            } else {
                out.status(format!(
                    "{item} is on the ground! To pick it up, type 'get {}'!",
                    item.to_lowercase()
                ));
            }
        }
        Some(_) => {}
        None => {
            if *item_acquired {
                out.status(update_msg.as_str());
                update_msg.clear();
                *item_acquired = false;
            } else {
                out.status("Nothing is on the ground!");
            }
        }
    }

    out.set_exits(movement_line);
    out.event(update_msg.as_str());
}
