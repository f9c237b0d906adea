use std::time::Duration;

pub const TYPE_DELAY: Duration = Duration::from_millis(100);
pub const DELETE_DELAY: Duration = Duration::from_millis(50);
pub const HOLD_DELAY: Duration = Duration::from_millis(1_000);
pub const BLINK_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub delay: Duration,
}

/// Types a phrase out one character at a time, holds it, deletes it, then moves on to the
/// next phrase. Wraps around forever.
#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase_index: usize,
    revealed: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new<I, P>(phrases: I) -> Option<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return None;
        }

        Some(Self {
            phrases,
            phrase_index: 0,
            revealed: 0,
            deleting: false,
        })
    }

    #[cfg(test)]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    #[cfg(test)]
    pub fn revealed_len(&self) -> usize {
        self.revealed
    }

    fn phrase(&self) -> &str {
        &self.phrases[self.phrase_index]
    }

    fn phrase_len(&self) -> usize {
        self.phrase().chars().count()
    }

    pub fn visible_text(&self) -> &str {
        let phrase = self.phrase();
        match phrase.char_indices().nth(self.revealed) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    /// Advances one step and returns how long to wait before the next one.
    pub fn tick(&mut self) -> Duration {
        if self.deleting {
            if self.revealed == 0 {
                self.deleting = false;
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                return TYPE_DELAY;
            }
            self.revealed -= 1;
            return DELETE_DELAY;
        }

        let len = self.phrase_len();
        if self.revealed < len {
            self.revealed += 1;
        }
        if self.revealed == len {
            self.deleting = true;
            return HOLD_DELAY;
        }
        TYPE_DELAY
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn reset(&mut self) {
        self.phrase_index = 0;
        self.revealed = 0;
        self.deleting = false;
    }

    /// Infinite; callers bound it with `take`.
    pub fn frames(&mut self) -> impl Iterator<Item = Frame> + '_ {
        std::iter::from_fn(move || {
            let delay = self.tick();
            Some(Frame {
                text: self.visible_text().to_string(),
                delay,
            })
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorBlink {
    visible: bool,
}

impl Default for CursorBlink {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl CursorBlink {
    pub fn visible(self) -> bool {
        self.visible
    }

    pub fn toggled(self) -> Self {
        Self {
            visible: !self.visible,
        }
    }
}
