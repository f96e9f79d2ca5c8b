use std::path::PathBuf;

/// Discrete widget interactions the host UI layer reports back to the core.
/// Staged spinner values are raw — any integer the widget allows — and are
/// only clamped when committed by the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidgetEvent {
    /// H-Frames spinner value changed while configuring.
    HFramesStaged(i32),
    /// V-Frames spinner value changed while configuring.
    VFramesStaged(i32),
    HFramesEditToggled,
    VFramesEditToggled,
    /// Frame spinner value changed while previewing.
    FrameSelected(i32),
    FrameEditToggled,
    /// Frame-duration spinner value changed, in seconds.
    FrameDurationStaged(f32),
    FrameDurationEditToggled,
    RotateToggled(bool),
    PixelateToggled(bool),
    PlayPressed,
    StopPressed,
    ConfirmPressed,
    EditPressed,
    HideUiPressed,
    CycleBackgroundPressed,
}

/// Input event types the previewer understands.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Exactly one file was dropped onto the window this tick.
    FileDropped { path: PathBuf },
    /// A primary pointer press at canvas coordinates.
    PointerDown { x: f32, y: f32 },
    /// A discrete widget interaction.
    Widget(WidgetEvent),
}

/// A queue of input events.
/// The host pushes events as they arrive; the core drains them once per tick.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    /// Push a new input event.
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
