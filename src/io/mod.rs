//! Input/output abstractions
//!
//! The turn loop talks to the player only through these traits, so a game
//! can be driven from the terminal or from a scripted command list.

use std::io::{self, BufRead, Write};

/// Trait for reading player commands
pub trait InputReader {
    /// Show `prompt` and read one line. `Ok(None)` means the input is closed.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Trait for writing game text to the player
pub trait OutputWriter {
    /// Write a message with a newline
    fn writeln(&mut self, message: &str);
}

/// Terminal I/O implementation using stdin/stdout
pub struct TerminalIO;

impl InputReader for TerminalIO {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input))
    }
}

impl OutputWriter for TerminalIO {
    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Scripted I/O for tests and non-interactive runs
pub mod test_utils {
    use super::*;
    use std::collections::VecDeque;

    /// Replays a fixed list of commands, then reports end of input
    pub struct MockInput {
        responses: VecDeque<String>,
    }

    impl MockInput {
        pub fn new(responses: Vec<&str>) -> Self {
            Self {
                responses: responses.into_iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    impl InputReader for MockInput {
        fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
            Ok(self.responses.pop_front())
        }
    }

    /// Collects every line written to it
    #[derive(Default)]
    pub struct MockOutput {
        pub messages: Vec<String>,
    }

    impl MockOutput {
        pub fn new() -> Self {
            Self::default()
        }

        /// Whole transcript as one string.
        pub fn text(&self) -> String {
            self.messages.join("\n")
        }

        pub fn contains(&self, needle: &str) -> bool {
            self.messages.iter().any(|m| m.contains(needle))
        }
    }

    impl OutputWriter for MockOutput {
        fn writeln(&mut self, message: &str) {
            self.messages.push(message.to_string());
        }
    }
}
