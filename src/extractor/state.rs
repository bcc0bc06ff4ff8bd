//! Quote and parenthesis state tracking for the parenthesis stripping stage.
//!
//! `ScanState` is a two-flag automaton driven one character at a time over the
//! reduced paragraph text. Parenthesized asides are dropped unless the scan is
//! currently inside a double-quoted span.

/// Combined quote × paren state of a forward scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanState {
    /// Toggled by every `"`.
    in_quotes: bool,

    /// Set by `(`, cleared by `)`. Not affected by quote toggles.
    in_parens: bool,
}

impl ScanState {
    /// State at the start of a text: outside quotes and parentheses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the automaton over `c` and reports whether `c` is retained.
    ///
    /// A character is kept when the scan is inside quotes or outside
    /// parentheses. Both delimiters of an aside count as part of it, so `(` is
    /// judged after it opens the aside and `)` before it closes it.
    pub fn step(&mut self, c: char) -> bool {
        match c {
            '"' => self.in_quotes = !self.in_quotes,
            '(' => self.in_parens = true,
            _ => {}
        }
        let keep = self.in_quotes || !self.in_parens;
        if c == ')' {
            self.in_parens = false;
        }
        keep
    }

    /// Whether the scan is inside a quoted span.
    #[must_use]
    pub fn in_quotes(&self) -> bool {
        self.in_quotes
    }

    /// Whether the scan is inside a parenthesized aside.
    #[must_use]
    pub fn in_parens(&self) -> bool {
        self.in_parens
    }
}

/// Removes parenthesized asides from `text`, except inside double quotes.
///
/// State is never reset, so an unterminated quote or parenthesis affects the
/// remainder of the text.
#[must_use]
pub fn strip_parens(text: &str) -> String {
    let mut state = ScanState::new();
    text.chars().filter(|&c| state.step(c)).collect()
}
