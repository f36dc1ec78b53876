/// One-shot marker distinguishing self-caused native scroll events from user-caused ones.
///
/// The engine arms it right before writing the native scroll position; the next native
/// scroll event consumes it. It is owned by [`crate::Scrollable`], one per instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EchoSuppressor {
    armed: bool,
}

impl EchoSuppressor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self) {
        self.armed = true;
    }

    pub fn clear(&mut self) {
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Returns whether the marker was armed, disarming it.
    pub fn take(&mut self) -> bool {
        core::mem::take(&mut self.armed)
    }
}
