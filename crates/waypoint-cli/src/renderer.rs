//! Terminal rendering for markdown output.
//!
//! Rich mode styles markdown with termimad; plain mode prints the text
//! unchanged for pipes and tests.

use anyhow::Result;
use termimad::{MadSkin, crossterm::style::Color};
use waypoint_core::Notice;

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            // Headers keep their hash marks so plan titles stand out.
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("\x1b[34m{line}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }

    /// Success notices in green, failures in red.
    pub fn notice(&self, notice: &Notice) -> Result<()> {
        if self.rich_enabled {
            let color = if notice.success { 32 } else { 31 };
            print!("\x1b[{color}m{notice}\x1b[0m");
        } else {
            print!("{notice}");
        }
        Ok(())
    }

    /// Secondary text such as input hints.
    pub fn hint(&self, text: &str) -> Result<()> {
        if self.rich_enabled {
            println!("\x1b[2m{text}\x1b[0m");
        } else {
            println!("{text}");
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
