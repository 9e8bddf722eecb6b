//! Terminal rendering of markdown output.
//!
//! Plan overviews and export reports are line oriented, so each line is
//! classified and styled on its own: week headings, training sessions with
//! their bold duration, dimmed rest days, failed formats and the closing
//! status line. With colors disabled the markdown is printed untouched.

use anyhow::Result;
use termimad::{
    crossterm::style::{Color, Stylize},
    MadSkin,
};

/// How a line of pacer output is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    /// `#` headings: plan title, week sections, report title
    Heading,
    /// A rest-day list item, e.g. `- Day 4 (Sat 2025-07-19): *Rest day*`
    Rest,
    /// A report item for a format or file that failed
    Failure,
    /// `Success:`, `Partial:` or `Error:` status line
    Status(Color),
    /// Anything else, rendered as inline markdown
    Text,
}

fn classify(line: &str) -> LineKind {
    if line.starts_with('#') {
        return LineKind::Heading;
    }
    for (prefix, color) in [
        ("Success:", Color::Green),
        ("Partial:", Color::Yellow),
        ("Error:", Color::Red),
    ] {
        if line.starts_with(prefix) {
            return LineKind::Status(color);
        }
    }
    if let Some(item) = line.strip_prefix("- ") {
        if item.contains(": failed") || item.contains(": not written") {
            return LineKind::Failure;
        }
        if item.ends_with('*') && !item.ends_with("**") {
            return LineKind::Rest;
        }
    }
    LineKind::Text
}

/// Prints markdown either styled or as plain text.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        // durations are bold, interval notation is inline code
        skin.bold.set_fg(Color::Yellow);
        skin.inline_code.set_fg(Color::Cyan);
        skin.code_block.set_bg(Color::AnsiValue(236));

        Self { rich_enabled, skin }
    }

    pub fn is_rich(&self) -> bool {
        self.rich_enabled
    }

    /// One line with its terminal styling applied.
    fn styled(&self, line: &str) -> String {
        match classify(line) {
            LineKind::Heading => line.with(Color::Green).bold().to_string(),
            LineKind::Rest => line.replace('*', "").with(Color::DarkGrey).italic().to_string(),
            LineKind::Failure => line.replace("**", "").with(Color::Red).to_string(),
            LineKind::Status(color) => line.with(color).bold().to_string(),
            LineKind::Text => self.skin.inline(line).to_string(),
        }
    }

    /// Render markdown text to stdout.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            for line in markdown.lines() {
                println!("{}", self.styled(line));
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        assert!(!TerminalRenderer::new(false).is_rich());
    }

    #[test]
    fn test_default_is_rich() {
        assert!(TerminalRenderer::default().is_rich());
    }

    #[test]
    fn test_plan_lines() {
        assert_eq!(classify("# Couch to 5K Plan"), LineKind::Heading);
        assert_eq!(classify("## Week 3"), LineKind::Heading);
        assert_eq!(
            classify("- Day 4 (Sat 2025-07-19): *Rest day*"),
            LineKind::Rest
        );
        assert_eq!(
            classify("- Day 2 (Wed 2025-07-16 07:30): **25:00** `W300 R60 W90`"),
            LineKind::Text
        );
        assert_eq!(
            classify("- Day 1 (Mon 2025-07-21 07:30): **25:00**"),
            LineKind::Text
        );
    }

    #[test]
    fn test_report_lines() {
        assert_eq!(classify("- **ics**: failed: Export to ics failed"), LineKind::Failure);
        assert_eq!(classify("- `c25k-plan.pdf`: not written: denied"), LineKind::Failure);
        assert_eq!(classify("- **csv**: ok (c25k-plan.csv)"), LineKind::Text);
        assert_eq!(classify("Success: wrote 2 artifact(s)"), LineKind::Status(Color::Green));
        assert_eq!(classify("Partial: wrote 1 artifact(s)"), LineKind::Status(Color::Yellow));
        assert_eq!(classify("Error: settings exist"), LineKind::Status(Color::Red));
    }

    #[test]
    fn test_rest_line_drops_emphasis_markers() {
        let styled = TerminalRenderer::default().styled("- Day 4 (Sat 2025-07-19): *Rest day*");
        assert!(styled.contains("Rest day"));
        assert!(!styled.contains('*'));
    }
}
