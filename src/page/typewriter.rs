//! Header typewriter effect

/// Delay before the first character (ms)
pub const START_DELAY_MS: i32 = 500;
/// Delay between characters (ms)
pub const CHAR_INTERVAL_MS: i32 = 100;

/// Reveals a string one character at a time
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    typed: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            typed: 0,
        }
    }

    /// Next character to append, or `None` once the text is complete
    pub fn advance(&mut self) -> Option<char> {
        let next = self.chars.get(self.typed).copied()?;
        self.typed += 1;
        Some(next)
    }

    pub fn typed(&self) -> String {
        self.chars[..self.typed].iter().collect()
    }

    pub fn is_done(&self) -> bool {
        self.typed >= self.chars.len()
    }
}
