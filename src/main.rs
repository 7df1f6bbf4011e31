use std::io::{self, Write};

use anyhow::{Context, Result};
use log::info;

use shadow_castle::engine::{Output, OutputBlock};
use shadow_castle::{GameState, StepOutcome, builtin_castle, world};

const STORYLINE: &str = include_str!("../assets/storyline.txt");
const INSTRUCTIONS: &str = include_str!("../assets/instructions.txt");

fn clear_screen() {
    print!("\x1B[2J\x1B[H");
    let _ = io::stdout().flush();
}

/// Show a prompt and wait for enter. An aborted or failed read is treated
/// as acknowledgement.
fn wait_for_enter(prompt: &str) {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut ack = String::new();
    let _ = io::stdin().read_line(&mut ack);
}

fn flush_output(out: Output) {
    let rule = format!(" {}", "-".repeat(27));
    let mut in_panel = false;

    for block in out.blocks {
        match block {
            OutputBlock::Status(line) => {
                if !in_panel {
                    println!("\n{rule}");
                    in_panel = true;
                }
                println!(" {line}");
            }
            OutputBlock::Exits(line) | OutputBlock::Event(line) => {
                if in_panel {
                    println!("{rule}");
                    in_panel = false;
                }
                println!(" {line}");
            }
        }
    }

    if in_panel {
        println!("{rule}");
    }
    println!();
}

fn main() -> Result<()> {
    env_logger::init();

    let castle = builtin_castle().context("while loading the Shadow Castle map")?;
    info!("castle loaded: {} rooms", castle.rooms.len());

    let mut state = GameState::new(&castle);

    println!("\n{STORYLINE}");
    wait_for_enter("Press enter to continue to instructions.");
    clear_screen();
    println!("\n{INSTRUCTIONS}");
    wait_for_enter("Press enter to start the game!");
    clear_screen();

    let stdin = io::stdin();

    loop {
        clear_screen();

        state.evaluate_end_conditions();
        flush_output(state.render_status());

        if state.game_over {
            info!("game over");
            break;
        }

        print!("Enter your command: ");
        io::stdout().flush()?;

        let mut input = String::new();
        let bytes_read = stdin.read_line(&mut input)?;
        if bytes_read == 0 {
            // EOF counts as quitting; the next pass prints the farewell.
            state.current_room = world::EXIT_ROOM.to_string();
            continue;
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        if state.step(input) == StepOutcome::ShowHelp {
            clear_screen();
            println!("\n{INSTRUCTIONS}");
            wait_for_enter("Press enter to return to the game!");
        }
    }

    Ok(())
}
