//! Terminal rendering for markdown output
//!
//! Status overviews are markdown; they are styled with termimad unless color
//! is disabled, in which case the markdown is printed as-is.

use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Green);
        skin.bold.set_fg(Color::Yellow);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) {
        print!("{}", self.styled(markdown));
    }

    fn styled(&self, markdown: &str) -> String {
        if self.rich_enabled {
            self.skin.term_text(markdown).to_string()
        } else {
            markdown.to_owned()
        }
    }

    /// Print a chat reply. Replies are plain text and never styled.
    pub fn reply(&self, text: &str) {
        println!("{text}");
    }
}
