use std::{io, process};

use anyhow::{Context, Result};
use crossterm::terminal;

use research_animation::player::{Player, announce_stop};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let (width, _) = terminal::size().context("Failed to read the terminal size")?;

    let mut player = Player::new(width)?;
    player.play()?;

    announce_stop(&mut io::stdout())?;
    Ok(())
}
