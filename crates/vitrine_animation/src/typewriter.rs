//! Typewriter runs
//!
//! Reveals a fixed string one character per interval, like text being
//! typed. The visible portion is always a valid prefix on a char boundary.

/// Default interval between revealed characters in milliseconds
pub const TYPEWRITER_SPEED_MS: f32 = 100.0;

/// A single text element's typing animation
#[derive(Clone, Debug)]
pub struct TypewriterRun {
    text: String,
    /// Byte length of the revealed prefix
    shown_bytes: usize,
    speed_ms: f32,
    elapsed: f32,
}

impl TypewriterRun {
    pub fn new(text: impl Into<String>, speed_ms: f32) -> Self {
        Self {
            text: text.into(),
            shown_bytes: 0,
            speed_ms: speed_ms.max(f32::EPSILON),
            elapsed: 0.0,
        }
    }

    /// Advance the run by `dt_ms`, revealing a character per full interval
    pub fn advance(&mut self, dt_ms: f32) {
        if self.is_done() {
            return;
        }
        self.elapsed += dt_ms;
        while self.elapsed >= self.speed_ms && !self.is_done() {
            self.elapsed -= self.speed_ms;
            if let Some(c) = self.text[self.shown_bytes..].chars().next() {
                self.shown_bytes += c.len_utf8();
            }
        }
    }

    /// The currently revealed prefix
    pub fn visible_text(&self) -> &str {
        &self.text[..self.shown_bytes]
    }

    /// The full string this run is revealing
    pub fn full_text(&self) -> &str {
        &self.text
    }

    pub fn is_done(&self) -> bool {
        self.shown_bytes == self.text.len()
    }
}
