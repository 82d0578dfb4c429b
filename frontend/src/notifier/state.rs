//! Toast bookkeeping, independent of the DOM.
//!
//! Each `show` bumps a generation counter. A hide timer carries the
//! generation it was scheduled for and only hides the toast if no newer
//! message has been shown since, so the last call always wins.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastState {
    pub message: String,
    pub is_error: bool,
    pub visible: bool,
    generation: u64,
}

impl ToastState {
    /// Replaces the current message and returns the generation the hide timer must carry.
    pub fn show(&mut self, message: &str, is_error: bool) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.message = message.to_string();
        self.is_error = is_error;
        self.visible = true;
        self.generation
    }

    /// Hides the toast if `generation` is still the latest. Returns whether it hid.
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.visible && generation == self.generation {
            self.visible = false;
            true
        } else {
            false
        }
    }

    pub fn background(&self) -> &'static str {
        if self.is_error {
            "#d32f2f"
        } else {
            "#0ea95d"
        }
    }
}
