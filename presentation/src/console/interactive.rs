//! Interactive terminal console.
//!
//! Prompts are written to stdout and answers read from stdin, one line per
//! answer. The session looks like:
//!
//! ```text
//! ════════════════════════════════════════════════════════════
//!   Configuration file builder for the Dice Game
//! ════════════════════════════════════════════════════════════
//! ...
//! Input the participant ID: p1
//! Choose an option to input (x, y, z, v, r, q): x
//! Input the rotation angle: 90
//! Choose an option to input (x, y, z, v, r, q): q
//! ```
//!
//! Answers are returned exactly as typed, minus the line terminator. No
//! trimming, no case folding: deciding what an answer means is the use
//! case's job.

use colored::Colorize;
use diceconf_application::ports::operator_console::{ConsoleError, OperatorConsole};
use std::io::{self, BufRead, Write};

/// Strip one trailing line terminator (`\n` or `\r\n`), nothing else.
fn chomp(input: &mut String) {
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
}

/// Terminal-based [`OperatorConsole`] for interactive sessions.
pub struct InteractiveConsole;

impl InteractiveConsole {
    pub fn new() -> Self {
        Self
    }

    /// Print a prompt and read one answer line.
    fn prompt(&self, message: &str) -> Result<String, ConsoleError> {
        print!("{} ", message.cyan().bold());
        io::stdout().flush()?;

        let mut input = String::new();
        let bytes = io::stdin().lock().read_line(&mut input)?;
        if bytes == 0 {
            return Err(ConsoleError::Eof);
        }

        chomp(&mut input);
        Ok(input)
    }
}

impl Default for InteractiveConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl OperatorConsole for InteractiveConsole {
    fn show_banner(&self) -> Result<(), ConsoleError> {
        let rule = "════════════════════════════════════════════════════════════";

        println!("{}", rule.cyan().bold());
        println!(
            "{}",
            "  Configuration file builder for the Dice Game".cyan().bold()
        );
        println!("{}", rule.cyan().bold());
        println!();
        println!("{}", "Participant ID:".cyan().bold());
        println!("  A single word; any whitespace is removed from the ID.");
        println!();
        println!("{}", "Rotations:".cyan().bold());
        println!("  {} - rotate about a principal axis", "x, y, z".green());
        println!("  {}       - rotate about a custom axis vector:", "v".green());
        println!("            3 real numbers separated by whitespace or commas");
        println!("  {}       - record a rotation chosen at random by the game", "r".green());
        println!("  {}       - stop entering rotations and write the file", "q".green());
        println!();
        println!("  An angle in degrees is asked after each axis or vector.");
        println!("  Enter as many rotations as you wish.");
        println!("{}", rule.cyan().bold());

        Ok(())
    }

    fn read_participant_id(&self) -> Result<String, ConsoleError> {
        self.prompt("Input the participant ID:")
    }

    fn read_rotation_choice(&self) -> Result<String, ConsoleError> {
        self.prompt("Choose an option to input (x, y, z, v, r, q):")
    }

    fn read_rotation_angle(&self) -> Result<String, ConsoleError> {
        self.prompt("Input the rotation angle:")
    }

    fn read_axis_vector(&self) -> Result<String, ConsoleError> {
        self.prompt("Input the rotation axis vector:")
    }
}
