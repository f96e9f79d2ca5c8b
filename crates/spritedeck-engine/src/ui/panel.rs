//! Widget overlay description.
//!
//! The core describes what the overlay contains; the host renders it with
//! its own widget toolkit and reports interactions back as `WidgetEvent`s.
//! Widgets are rebuilt from state every tick against these descriptors, so
//! drawing and mutation never mix.

use glam::Vec2;

use crate::api::types::{Color, Rect};
use crate::components::sheet::SpriteSheet;
use crate::core::clock::AnimationClock;
use crate::core::state::{AppState, Mode, UiVisibility, PALETTE};
use crate::systems::layout::StackLayout;

/// Stable identifiers connecting widgets to the events the host reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetId {
    HFrames,
    VFrames,
    Confirm,
    FrameSize,
    Frame,
    FrameDuration,
    Rotate,
    Pixelate,
    Background,
    PlayStop,
    Edit,
    HideUi,
    DropHint,
}

/// One widget the host should draw this tick.
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    /// Integer spinner with inclusive bounds and an edit-mode flag.
    IntSpinner {
        id: WidgetId,
        rect: Rect,
        caption: String,
        value: i32,
        min: i32,
        max: i32,
        editing: bool,
    },
    /// Float spinner with inclusive bounds, a step, and an edit-mode flag.
    FloatSpinner {
        id: WidgetId,
        rect: Rect,
        caption: String,
        value: f32,
        min: f32,
        max: f32,
        step: f32,
        editing: bool,
    },
    Checkbox {
        id: WidgetId,
        rect: Rect,
        caption: String,
        checked: bool,
    },
    Button {
        id: WidgetId,
        rect: Rect,
        caption: String,
    },
    Label {
        id: WidgetId,
        rect: Rect,
        caption: String,
    },
}

impl Widget {
    pub fn id(&self) -> WidgetId {
        match self {
            Widget::IntSpinner { id, .. }
            | Widget::FloatSpinner { id, .. }
            | Widget::Checkbox { id, .. }
            | Widget::Button { id, .. }
            | Widget::Label { id, .. } => *id,
        }
    }
}

/// The widget overlay for one tick, ready for the host to render.
#[derive(Debug, Clone, PartialEq)]
pub struct UiPanel {
    /// Text color matching the current background.
    pub text_color: Color,
    pub widgets: Vec<Widget>,
}

impl UiPanel {
    pub fn new() -> Self {
        Self {
            text_color: PALETTE[0].text,
            widgets: Vec::new(),
        }
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.widgets.iter().any(|w| w.id() == id)
    }
}

impl Default for UiPanel {
    fn default() -> Self {
        Self::new()
    }
}

// Control column anchored at the right edge of the default canvas.
const COLUMN_X: f32 = 390.0;
const ROW_STEP: f32 = 30.0;

fn row(index: u32) -> f32 {
    10.0 + index as f32 * ROW_STEP
}

fn button(id: WidgetId, index: u32, caption: &str) -> Widget {
    Widget::Button {
        id,
        rect: Rect::new(COLUMN_X, row(index), 100.0, 24.0),
        caption: caption.to_string(),
    }
}

/// Describe the widget overlay for the current state.
pub fn build_panel(
    state: &AppState,
    sheet: &SpriteSheet,
    clock: &AnimationClock,
    layout: &StackLayout,
    canvas: Vec2,
) -> UiPanel {
    let mut widgets = Vec::new();

    if !sheet.is_loaded() {
        widgets.push(Widget::Label {
            id: WidgetId::DropHint,
            rect: Rect::new(canvas.x * 0.5 - 100.0, canvas.y * 0.5 - 20.0, 200.0, 20.0),
            caption: "Drag sprite to the window".to_string(),
        });
        return UiPanel {
            text_color: state.palette().text,
            widgets,
        };
    }

    match (state.mode(), state.visibility()) {
        (Mode::Configuring, _) => {
            widgets.push(Widget::IntSpinner {
                id: WidgetId::HFrames,
                rect: Rect::new(COLUMN_X, row(0), 100.0, 24.0),
                caption: "H-Frames ".to_string(),
                value: state.staged_h,
                min: 1,
                max: 100,
                editing: state.h_frames_edit,
            });
            widgets.push(Widget::IntSpinner {
                id: WidgetId::VFrames,
                rect: Rect::new(COLUMN_X, row(1), 100.0, 24.0),
                caption: "V-Frames ".to_string(),
                value: state.staged_v,
                min: 1,
                max: 100,
                editing: state.v_frames_edit,
            });
            widgets.push(button(WidgetId::Confirm, 2, "Confirm"));
            widgets.push(Widget::Label {
                id: WidgetId::FrameSize,
                rect: Rect::new(COLUMN_X, row(3), 100.0, 20.0),
                caption: format!("Frame: {} x {}", layout.frame_width, layout.frame_height),
            });
        }
        (Mode::Previewing, UiVisibility::Visible) => {
            let v_frames = state.grid().v_frames();
            widgets.push(Widget::IntSpinner {
                id: WidgetId::Frame,
                rect: Rect::new(COLUMN_X, row(0), 100.0, 24.0),
                caption: "Frame ".to_string(),
                value: clock.frame_index() as i32,
                min: 0,
                max: v_frames as i32 - 1,
                editing: state.frame_edit,
            });
            widgets.push(Widget::FloatSpinner {
                id: WidgetId::FrameDuration,
                rect: Rect::new(COLUMN_X, row(1), 100.0, 24.0),
                caption: "Frame Dur. (s) ".to_string(),
                value: clock.seconds_per_frame(),
                min: 0.1,
                max: 1.0,
                step: 0.1,
                editing: state.duration_edit,
            });
            widgets.push(Widget::Checkbox {
                id: WidgetId::Rotate,
                rect: Rect::new(COLUMN_X, row(2), 24.0, 24.0),
                caption: " Rotate".to_string(),
                checked: state.rotate,
            });
            widgets.push(Widget::Checkbox {
                id: WidgetId::Pixelate,
                rect: Rect::new(COLUMN_X, row(3), 24.0, 24.0),
                caption: " Pixelizer".to_string(),
                checked: state.pixelate,
            });
            widgets.push(button(WidgetId::Background, 4, "Bkg color"));
            widgets.push(button(
                WidgetId::PlayStop,
                5,
                if state.play_anim { "Stop" } else { "Play" },
            ));
            widgets.push(button(WidgetId::Edit, 6, "Edit grid"));
            widgets.push(button(WidgetId::HideUi, 7, "Hide UI"));
        }
        (Mode::Previewing, UiVisibility::Hidden) => {}
    }

    UiPanel {
        text_color: state.palette().text,
        widgets,
    }
}
