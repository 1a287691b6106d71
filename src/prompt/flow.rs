/// Outcome of asking the user for something.
///
/// Every prompt can be abandoned: `cancel`/`cc` aborts the current order and
/// `quit`/`qq` ends the program. Callers thread these through with
/// [`Flow::map`] and [`Flow::and_then`] instead of checking sentinel values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow<T> {
    Continue(T),
    Cancelled,
    Quit,
}

impl<T> Flow<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Flow<U> {
        match self {
            Flow::Continue(value) => Flow::Continue(f(value)),
            Flow::Cancelled => Flow::Cancelled,
            Flow::Quit => Flow::Quit,
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> Flow<U>) -> Flow<U> {
        match self {
            Flow::Continue(value) => f(value),
            Flow::Cancelled => Flow::Cancelled,
            Flow::Quit => Flow::Quit,
        }
    }
}

/// Control keywords recognised at every prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Cancel,
}

impl Command {
    /// Matches already-normalized (trimmed, lowercased) input.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "quit" | "qq" => Some(Command::Quit),
            "cancel" | "cc" => Some(Command::Cancel),
            _ => None,
        }
    }

    pub fn into_flow<T>(self) -> Flow<T> {
        match self {
            Command::Quit => Flow::Quit,
            Command::Cancel => Flow::Cancelled,
        }
    }
}
