//! Colors command handler.

use anyhow::Result;

use crate::domain::Color;

pub fn handle_colors() -> Result<()> {
    for color in Color::ALL {
        let starter = if Color::STARTER.contains(&color) {
            "  (new notes)"
        } else {
            ""
        };
        println!("{:<7} {}{}", color.name(), color.class(), starter);
    }
    Ok(())
}
