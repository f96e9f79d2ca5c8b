//! The two-mode interaction state machine.
//!
//! One explicit state record owns every value the widget layer reads or
//! writes; components receive it by reference each tick. Committed grid
//! values mutate only through the clamping transition paths.

use crate::api::types::Color;
use crate::components::sheet::GridConfig;

/// Which interaction surface is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Grid setup after a drop; the stack renders at configuration scale.
    Configuring,
    /// Normal animated display.
    Previewing,
}

/// Whether the widget overlay is drawn. Hidden is reachable only from
/// Previewing; any primary pointer press recovers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiVisibility {
    Visible,
    Hidden,
}

/// One background/text pairing the background button cycles through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub background: Color,
    pub text: Color,
}

/// Fixed ordered palette; the cycle action wraps from the last entry to 0.
pub const PALETTE: [PaletteEntry; 2] = [
    PaletteEntry {
        background: Color::LIGHT_GRAY,
        text: Color::from_hex(0x8282_82FF),
    },
    PaletteEntry {
        background: Color::DARK_GRAY,
        text: Color::from_hex(0xC8C8_C8FF),
    },
];

/// All interaction state for one previewer instance.
#[derive(Debug, Clone)]
pub struct AppState {
    mode: Mode,
    visibility: UiVisibility,
    grid: GridConfig,
    /// Raw H-Frames spinner value; any integer until committed.
    pub staged_h: i32,
    /// Raw V-Frames spinner value; any integer until committed.
    pub staged_v: i32,
    pub play_anim: bool,
    pub rotate: bool,
    pub pixelate: bool,
    // Spinner edit-mode flags, persisted across ticks for the widget layer.
    pub h_frames_edit: bool,
    pub v_frames_edit: bool,
    pub frame_edit: bool,
    pub duration_edit: bool,
    palette_index: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            mode: Mode::Previewing,
            visibility: UiVisibility::Visible,
            grid: GridConfig::default(),
            staged_h: 1,
            staged_v: 1,
            play_anim: false,
            rotate: true,
            pixelate: false,
            h_frames_edit: false,
            v_frames_edit: false,
            frame_edit: false,
            duration_edit: false,
            palette_index: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn visibility(&self) -> UiVisibility {
        self.visibility
    }

    /// The committed grid. Always at least 1x1.
    pub fn grid(&self) -> GridConfig {
        self.grid
    }

    pub fn palette(&self) -> PaletteEntry {
        PALETTE[self.palette_index]
    }

    pub fn palette_index(&self) -> usize {
        self.palette_index
    }

    /// A new sprite always restarts configuration from a clean 1x1 grid,
    /// regardless of the prior mode.
    pub fn on_sprite_dropped(&mut self) {
        self.mode = Mode::Configuring;
        self.visibility = UiVisibility::Visible;
        self.grid = GridConfig::default();
        self.staged_h = 1;
        self.staged_v = 1;
        self.play_anim = false;
        self.pixelate = false;
    }

    /// Commit the staged grid (clamping non-positive values to 1) and switch
    /// to preview. Ignored outside Configuring.
    pub fn confirm_config(&mut self) {
        if self.mode != Mode::Configuring {
            return;
        }
        self.grid = GridConfig::new(self.staged_h, self.staged_v);
        self.mode = Mode::Previewing;
    }

    /// Back to grid configuration, re-seeding the spinners from the
    /// committed grid. Ignored outside Previewing.
    pub fn edit_config(&mut self) {
        if self.mode != Mode::Previewing {
            return;
        }
        self.staged_h = self.grid.h_frames() as i32;
        self.staged_v = self.grid.v_frames() as i32;
        self.mode = Mode::Configuring;
    }

    /// Hide the widget overlay. Only meaningful while previewing.
    pub fn hide_ui(&mut self) {
        if self.mode == Mode::Previewing {
            self.visibility = UiVisibility::Hidden;
        }
    }

    /// Any primary pointer press anywhere in the window recovers a hidden
    /// overlay.
    pub fn on_pointer_down(&mut self) {
        self.visibility = UiVisibility::Visible;
    }

    /// Advance to the next background/text pairing, wrapping at the end.
    /// Preview-mode action.
    pub fn cycle_background(&mut self) {
        if self.mode != Mode::Previewing {
            return;
        }
        self.palette_index = (self.palette_index + 1) % PALETTE.len();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_forces_configuring_and_clears_toggles() {
        let mut state = AppState::new();
        state.staged_h = 6;
        state.staged_v = 3;
        state.confirm_config(); // no-op: not configuring yet
        state.play_anim = true;
        state.pixelate = true;
        state.hide_ui();

        state.on_sprite_dropped();

        assert_eq!(state.mode(), Mode::Configuring);
        assert_eq!(state.visibility(), UiVisibility::Visible);
        assert_eq!(state.grid(), GridConfig::default());
        assert_eq!((state.staged_h, state.staged_v), (1, 1));
        assert!(!state.play_anim);
        assert!(!state.pixelate);
        // Rotation preference survives the drop
        assert!(state.rotate);
    }

    #[test]
    fn confirm_clamps_staged_values() {
        let mut state = AppState::new();
        state.on_sprite_dropped();
        state.staged_h = 0;
        state.staged_v = -5;
        state.confirm_config();

        assert_eq!(state.mode(), Mode::Previewing);
        assert_eq!(state.grid(), GridConfig::new(1, 1));

        state.edit_config();
        state.staged_h = 50;
        state.staged_v = 4;
        state.confirm_config();
        assert_eq!(state.grid().h_frames(), 50);
        assert_eq!(state.grid().v_frames(), 4);
    }

    #[test]
    fn edit_reseeds_spinners_from_committed_grid() {
        let mut state = AppState::new();
        state.on_sprite_dropped();
        state.staged_h = 8;
        state.staged_v = 2;
        state.confirm_config();

        state.staged_h = 999; // stale staging noise
        state.edit_config();
        assert_eq!(state.mode(), Mode::Configuring);
        assert_eq!((state.staged_h, state.staged_v), (8, 2));
    }

    #[test]
    fn hidden_is_only_reachable_from_previewing() {
        let mut state = AppState::new();
        state.on_sprite_dropped();
        state.hide_ui();
        assert_eq!(state.visibility(), UiVisibility::Visible);

        state.confirm_config();
        state.hide_ui();
        assert_eq!(state.visibility(), UiVisibility::Hidden);

        state.on_pointer_down();
        assert_eq!(state.visibility(), UiVisibility::Visible);
    }

    #[test]
    fn background_cycle_wraps() {
        let mut state = AppState::new();
        assert_eq!(state.palette_index(), 0);
        state.cycle_background();
        assert_eq!(state.palette_index(), 1);
        state.cycle_background();
        assert_eq!(state.palette_index(), 0);
        assert_eq!(state.palette().background, Color::LIGHT_GRAY);
    }

    #[test]
    fn cycle_is_a_preview_action() {
        let mut state = AppState::new();
        state.on_sprite_dropped();
        state.cycle_background();
        assert_eq!(state.palette_index(), 0);
    }
}
