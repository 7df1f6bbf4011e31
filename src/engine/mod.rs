mod items;
mod movement;
mod output;
mod render;

pub use items::handle_pickup;
pub use movement::handle_move;
pub use output::{Output, OutputBlock};
pub use render::{join_directions, render_status};
