use std::fmt;
use std::str::FromStr;

use flash_core::AnswerState;

/// A line typed at the round prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Answer a card; without an index the card on top of the stack.
    Answer {
        answer: AnswerState,
        index: Option<usize>,
    },
    Flip,
    Pause,
    Resume,
    Reset,
    Show,
    Help,
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    Unknown(String),
    InvalidIndex { raw: String },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => write!(f, "type a command, or h for help"),
            CommandError::Unknown(cmd) => write!(f, "unknown command: {cmd}"),
            CommandError::InvalidIndex { raw } => write!(f, "invalid card number: {raw}"),
        }
    }
}

impl std::error::Error for CommandError {}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Empty);
        };

        let answer = match head {
            "c" | "correct" => AnswerState::Correct,
            "i" | "incorrect" => AnswerState::Incorrect,
            "f" | "flip" => return Ok(Self::Flip),
            "p" | "pause" => return Ok(Self::Pause),
            "r" | "resume" => return Ok(Self::Resume),
            "x" | "reset" => return Ok(Self::Reset),
            "s" | "show" => return Ok(Self::Show),
            "h" | "help" | "?" => return Ok(Self::Help),
            "q" | "quit" => return Ok(Self::Quit),
            other => return Err(CommandError::Unknown(other.to_owned())),
        };

        // Card numbers are shown 1-based.
        let index = match words.next() {
            None => None,
            Some(raw) => match raw.parse::<usize>() {
                Ok(number) if number > 0 => Some(number - 1),
                _ => {
                    return Err(CommandError::InvalidIndex {
                        raw: raw.to_owned(),
                    });
                }
            },
        };

        Ok(Self::Answer { answer, index })
    }
}

pub const HELP: &str = "\
commands:
  c [n]   mark card n (default: top card) correct
  i [n]   mark card n (default: top card) incorrect
  f       flip the top card
  p / r   pause / resume the clock
  x       start again
  s       show the round
  q       quit";
