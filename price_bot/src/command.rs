/// What an inbound text asks for, resolved once per message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `/start`, optionally addressed as `/start@botname` and followed by arguments.
    Start,
    /// `price` in any casing, surrounding whitespace ignored.
    Price,
    /// Anything else, including empty and punctuation-only text.
    Invalid,
}

impl Command {
    pub fn parse(text: &str) -> Self {
        if is_start(text) {
            return Command::Start;
        }
        if text.trim().to_lowercase() == "price" {
            Command::Price
        } else {
            Command::Invalid
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Price => "price",
            Command::Invalid => "invalid",
        }
    }
}

fn is_start(text: &str) -> bool {
    if !text.starts_with('/') {
        return false;
    }
    text.split_whitespace()
        .next()
        .and_then(|token| token.split('@').next())
        .is_some_and(|command| command == "/start")
}
