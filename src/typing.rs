use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingTimings {
    pub start: Duration,
    pub type_char: Duration,
    pub delete_char: Duration,
    pub dwell_full: Duration,
    pub dwell_empty: Duration,
}

impl Default for TypingTimings {
    fn default() -> Self {
        Self {
            start: Duration::from_millis(2_000),
            type_char: Duration::from_millis(100),
            delete_char: Duration::from_millis(50),
            dwell_full: Duration::from_millis(2_000),
            dwell_empty: Duration::from_millis(500),
        }
    }
}

/// What to display after a tick, and how long to wait before the next one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub delay: Duration,
}

/// Types each command out, holds it, erases it, holds the empty line, then
/// moves on to the next command, wrapping after the last.
#[derive(Clone, Debug)]
pub struct TypingEngine {
    commands: Vec<String>,
    timings: TypingTimings,
    current_index: usize,
    char_index: usize,
    is_deleting: bool,
}

impl TypingEngine {
    /// Returns `None` for an empty command list.
    pub fn new<I, S>(commands: I, timings: TypingTimings) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let commands: Vec<String> = commands.into_iter().map(Into::into).collect();
        if commands.is_empty() {
            return None;
        }

        Some(Self {
            commands,
            timings,
            current_index: 0,
            char_index: 0,
            is_deleting: false,
        })
    }

    pub fn timings(&self) -> TypingTimings {
        self.timings
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_deleting(&self) -> bool {
        self.is_deleting
    }

    pub fn tick(&mut self) -> TypingFrame {
        let command = &self.commands[self.current_index];
        let length = command.chars().count();

        if self.is_deleting {
            self.char_index = self.char_index.saturating_sub(1);
        } else {
            self.char_index = (self.char_index + 1).min(length.max(1));
        }
        let text = char_prefix(command, self.char_index).to_string();

        let mut delay = if self.is_deleting {
            self.timings.delete_char
        } else {
            self.timings.type_char
        };

        if !self.is_deleting && self.char_index >= length {
            delay = self.timings.dwell_full;
            self.is_deleting = true;
        } else if self.is_deleting && self.char_index == 0 {
            self.is_deleting = false;
            self.current_index = (self.current_index + 1) % self.commands.len();
            delay = self.timings.dwell_empty;
        }

        TypingFrame { text, delay }
    }
}

fn char_prefix(value: &str, chars: usize) -> &str {
    match value.char_indices().nth(chars) {
        Some((byte_index, _)) => &value[..byte_index],
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(commands: &[&str]) -> TypingEngine {
        TypingEngine::new(commands.iter().copied(), TypingTimings::default())
            .expect("non-empty command list")
    }

    #[test]
    fn empty_command_list_yields_no_engine() {
        let commands: Vec<String> = Vec::new();
        assert!(TypingEngine::new(commands, TypingTimings::default()).is_none());
    }

    #[test]
    fn types_then_dwells_then_deletes_then_advances() {
        let mut engine = engine(&["ls", "id"]);

        let frames: Vec<TypingFrame> = (0..5).map(|_| engine.tick()).collect();
        let texts: Vec<&str> = frames.iter().map(|f| f.text.as_str()).collect();
        let delays: Vec<u64> = frames.iter().map(|f| f.delay.as_millis() as u64).collect();

        assert_eq!(texts, ["l", "ls", "l", "", "i"]);
        assert_eq!(delays, [100, 2_000, 50, 500, 100]);
        assert_eq!(engine.current_index(), 1);
    }

    #[test]
    fn every_command_returns_to_empty_and_order_wraps() {
        let commands = ["python --version", "whoami", "ls projects/"];
        let mut engine = engine(&commands);

        for round in 0..2 {
            for (index, command) in commands.iter().enumerate() {
                assert_eq!(engine.current_index(), index, "round {round}");
                let mut longest = String::new();
                loop {
                    let frame = engine.tick();
                    if frame.text.len() > longest.len() {
                        longest = frame.text.clone();
                    }
                    if frame.delay == TypingTimings::default().dwell_empty {
                        assert_eq!(frame.text, "");
                        break;
                    }
                }
                assert_eq!(longest, *command);
            }
        }
        assert_eq!(engine.current_index(), 0);
    }

    #[test]
    fn multibyte_commands_are_typed_by_character() {
        let mut engine = engine(&["日本"]);

        assert_eq!(engine.tick().text, "日");
        assert_eq!(engine.tick().text, "日本");
        assert_eq!(engine.tick().text, "日");
    }

    #[test]
    fn blank_command_is_skipped_without_stalling() {
        let mut engine = engine(&["", "a"]);

        assert_eq!(engine.tick().delay, Duration::from_millis(2_000));
        let frame = engine.tick();
        assert_eq!(frame.text, "");
        assert_eq!(frame.delay, Duration::from_millis(500));
        assert_eq!(engine.current_index(), 1);
    }
}
