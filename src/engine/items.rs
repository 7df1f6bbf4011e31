use std::collections::HashMap;

use crate::world::Room;

/// Pick up the item lying in the current room.
///
/// The query must match the room's item by full name, case-insensitively.
/// On success the item moves from the room into the inventory; the room slot
/// is emptied so a second pickup reports the item as missing.
pub fn handle_pickup(
    rooms: &mut HashMap<String, Room>,
    current_room: &str,
    inventory: &mut Vec<String>,
    update_msg: &mut String,
    item_acquired: &mut bool,
    query: &str,
) {
    let query = query.trim();

    let Some(room) = rooms.get_mut(current_room) else {
        return;
    };

    let matched = room
        .item
        .as_deref()
        .filter(|item| item.eq_ignore_ascii_case(query))
        .map(str::to_string);

    match matched {
        Some(item) => {
            if inventory.contains(&item) {
                // Unreachable in practice: pickup empties the room slot.
                *update_msg = "You already have this.".to_string();
            } else {
                room.item = None;
                *update_msg = format!("You have obtained {item}!");
                inventory.push(item);
                *item_acquired = true;
            }
        }
        None => {
            *update_msg = format!(
                "{query} isn't in {current_room}! Make sure you spelled it correctly!"
            );
        }
    }
}
