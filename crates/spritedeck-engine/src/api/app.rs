//! The previewer core: one struct owning all state, driven one tick at a
//! time by a host loop.

use std::path::PathBuf;

use crate::api::config::AppConfig;
use crate::assets::store::{ImageStore, TextureStore};
use crate::components::sheet::{SpriteSheet, Texture};
use crate::core::clock::{AnimationClock, TickAccumulator};
use crate::core::state::{AppState, Mode};
use crate::input::queue::{InputEvent, InputQueue, WidgetEvent};
use crate::renderer::instance::FramePlan;
use crate::systems::hot_reload;
use crate::systems::layout::{compute_layout, StackLayout};
use crate::systems::render::build_frame_plan;
use crate::ui::panel::{build_panel, UiPanel};

/// The stacked-sprite previewer.
///
/// Single-threaded by design: the host calls `tick` once per displayed
/// frame, then reads `frame_plan` and `panel` back. Each tick runs strictly
/// in order: input, file watch, clock advance, layout recompute, frame-plan
/// build, panel build — so a texture swap always lands before the draw list
/// that references it.
pub struct App {
    config: AppConfig,
    state: AppState,
    sheet: SpriteSheet,
    clock: AnimationClock,
    ticker: TickAccumulator,
    layout: StackLayout,
    plan: FramePlan,
    panel: UiPanel,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let clock = AnimationClock::new(config.tick_rate, config.rotation_speed);
        let ticker = TickAccumulator::new(config.tick_rate);
        Self {
            config,
            state: AppState::new(),
            sheet: SpriteSheet::new(),
            clock,
            ticker,
            layout: StackLayout::default(),
            plan: FramePlan::new(),
            panel: UiPanel::new(),
        }
    }

    /// Run one display tick.
    pub fn tick<I: ImageStore, T: TextureStore>(
        &mut self,
        dt: f32,
        input: &mut InputQueue,
        images: &mut I,
        textures: &mut T,
    ) {
        for event in input.drain() {
            self.apply_event(event, images, textures);
        }

        hot_reload::check_and_reload(&mut self.sheet, images, textures);

        let ticks = self.ticker.advance(dt);
        let v_frames = self.state.grid().v_frames();
        for _ in 0..ticks {
            self.clock.step(self.state.play_anim, v_frames);
        }
        self.clock.rotate(dt, self.state.rotate);

        let scale = match self.state.mode() {
            Mode::Configuring => self.config.config_scale,
            Mode::Previewing => self.config.preview_scale,
        };
        let canvas = self.config.canvas_size();
        self.layout = match self.sheet.dimensions() {
            Some((width, height)) => {
                compute_layout(width, height, self.state.grid(), scale, canvas)
            }
            None => StackLayout::default(),
        };

        build_frame_plan(
            &mut self.plan,
            &self.sheet,
            &self.layout,
            &self.clock,
            &self.state,
        );
        self.panel = build_panel(&self.state, &self.sheet, &self.clock, &self.layout, canvas);
    }

    fn apply_event<I: ImageStore, T: TextureStore>(
        &mut self,
        event: InputEvent,
        images: &mut I,
        textures: &mut T,
    ) {
        match event {
            InputEvent::FileDropped { path } => self.load_sheet(path, images, textures),
            InputEvent::PointerDown { .. } => self.state.on_pointer_down(),
            InputEvent::Widget(widget) => self.apply_widget(widget),
        }
    }

    /// Load a dropped file through the image store. On failure the previous
    /// asset, layout, and mode are all retained; the drop simply does not
    /// take.
    fn load_sheet<I: ImageStore, T: TextureStore>(
        &mut self,
        path: PathBuf,
        images: &mut I,
        textures: &mut T,
    ) {
        match images.load(&path, true) {
            Ok((image, modified)) => {
                let texture = Texture {
                    handle: textures.upload(&image),
                    width: image.width,
                    height: image.height,
                };
                log::info!(
                    "loaded {} ({}x{})",
                    path.display(),
                    texture.width,
                    texture.height
                );
                if let Some(old) = self.sheet.replace(path, modified, texture) {
                    textures.release(old.handle);
                }
                self.clock.reset();
                self.state.on_sprite_dropped();
            }
            Err(err) => {
                log::warn!("dropped file rejected: {}", err);
            }
        }
    }

    fn apply_widget(&mut self, event: WidgetEvent) {
        match event {
            WidgetEvent::HFramesStaged(value) => self.state.staged_h = value,
            WidgetEvent::VFramesStaged(value) => self.state.staged_v = value,
            WidgetEvent::HFramesEditToggled => {
                self.state.h_frames_edit = !self.state.h_frames_edit;
            }
            WidgetEvent::VFramesEditToggled => {
                self.state.v_frames_edit = !self.state.v_frames_edit;
            }
            WidgetEvent::FrameSelected(value) => {
                self.clock.set_frame(value, self.state.grid().v_frames());
            }
            WidgetEvent::FrameEditToggled => self.state.frame_edit = !self.state.frame_edit,
            WidgetEvent::FrameDurationStaged(value) => self.clock.set_seconds_per_frame(value),
            WidgetEvent::FrameDurationEditToggled => {
                self.state.duration_edit = !self.state.duration_edit;
            }
            WidgetEvent::RotateToggled(on) => self.state.rotate = on,
            WidgetEvent::PixelateToggled(on) => self.state.pixelate = on,
            WidgetEvent::PlayPressed => self.state.play_anim = true,
            WidgetEvent::StopPressed => self.state.play_anim = false,
            WidgetEvent::ConfirmPressed => {
                self.state.confirm_config();
                self.clock.clamp_frame(self.state.grid().v_frames());
            }
            WidgetEvent::EditPressed => self.state.edit_config(),
            WidgetEvent::HideUiPressed => self.state.hide_ui(),
            WidgetEvent::CycleBackgroundPressed => self.state.cycle_background(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn sheet(&self) -> &SpriteSheet {
        &self.sheet
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn layout(&self) -> &StackLayout {
        &self.layout
    }

    /// The draw list for the tick that just ran.
    pub fn frame_plan(&self) -> &FramePlan {
        &self.plan
    }

    /// The widget overlay for the tick that just ran.
    pub fn panel(&self) -> &UiPanel {
        &self.panel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::memory::{MemoryImageStore, RecordingTextures};
    use crate::assets::store::RawImage;
    use crate::core::state::UiVisibility;
    use crate::ui::panel::WidgetId;
    use std::path::Path;

    const DT: f32 = 1.0 / 60.0;

    struct Rig {
        app: App,
        input: InputQueue,
        images: MemoryImageStore,
        textures: RecordingTextures,
    }

    impl Rig {
        fn new() -> Self {
            let mut images = MemoryImageStore::new();
            images.insert("sheet.png", RawImage::filled(64, 48, [255, 0, 0, 255]), 100);
            Self {
                app: App::new(AppConfig::default()),
                input: InputQueue::new(),
                images,
                textures: RecordingTextures::new(),
            }
        }

        fn push(&mut self, event: InputEvent) {
            self.input.push(event);
        }

        fn widget(&mut self, event: WidgetEvent) {
            self.input.push(InputEvent::Widget(event));
        }

        fn tick(&mut self) {
            self.app
                .tick(DT, &mut self.input, &mut self.images, &mut self.textures);
        }

        fn drop_sheet(&mut self) {
            self.push(InputEvent::FileDropped {
                path: "sheet.png".into(),
            });
            self.tick();
        }
    }

    #[test]
    fn startup_shows_drop_hint_and_draws_nothing() {
        let mut rig = Rig::new();
        rig.tick();
        assert!(rig.app.frame_plan().sprites.is_empty());
        assert!(rig.app.panel().contains(WidgetId::DropHint));
    }

    #[test]
    fn dropping_a_sheet_enters_configuration_at_unit_scale() {
        let mut rig = Rig::new();
        rig.drop_sheet();

        assert_eq!(rig.app.state().mode(), Mode::Configuring);
        assert_eq!(rig.textures.uploads, 1);
        assert_eq!(rig.app.sheet().dimensions(), Some((64, 48)));

        // 1x1 grid at configuration scale: one placement, unscaled
        let layout = rig.app.layout();
        assert_eq!(layout.placements.len(), 1);
        assert_eq!(layout.placements[0].w, 64.0);
        assert_eq!(rig.app.frame_plan().sprites.len(), 1);
    }

    #[test]
    fn confirm_commits_clamped_grid_and_scales_up() {
        let mut rig = Rig::new();
        rig.drop_sheet();

        rig.widget(WidgetEvent::HFramesStaged(4));
        rig.widget(WidgetEvent::VFramesStaged(0));
        rig.widget(WidgetEvent::ConfirmPressed);
        rig.tick();

        assert_eq!(rig.app.state().mode(), Mode::Previewing);
        assert_eq!(rig.app.state().grid().h_frames(), 4);
        assert_eq!(rig.app.state().grid().v_frames(), 1);

        let layout = rig.app.layout();
        assert_eq!(layout.placements.len(), 4);
        // 64 / 4 = 16 px frame at preview scale 8
        assert_eq!(layout.placements[0].w, 128.0);
    }

    #[test]
    fn animation_advances_once_per_half_second_at_sixty_ticks() {
        let mut rig = Rig::new();
        rig.drop_sheet();
        rig.widget(WidgetEvent::VFramesStaged(4));
        rig.widget(WidgetEvent::ConfirmPressed);
        rig.widget(WidgetEvent::FrameDurationStaged(0.5));
        rig.widget(WidgetEvent::PlayPressed);
        rig.tick();

        let mut seen = vec![rig.app.clock().frame_index()];
        for _ in 0..120 {
            rig.tick();
            let frame = rig.app.clock().frame_index();
            if *seen.last().unwrap() != frame {
                seen.push(frame);
            }
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 0]);
    }

    #[test]
    fn stop_freezes_playback() {
        let mut rig = Rig::new();
        rig.drop_sheet();
        rig.widget(WidgetEvent::VFramesStaged(4));
        rig.widget(WidgetEvent::ConfirmPressed);
        rig.widget(WidgetEvent::FrameDurationStaged(0.1));
        rig.widget(WidgetEvent::PlayPressed);
        rig.tick();
        rig.widget(WidgetEvent::StopPressed);
        for _ in 0..60 {
            rig.tick();
        }
        assert_eq!(rig.app.clock().frame_index(), 0);
    }

    #[test]
    fn hot_reload_swaps_texture_within_one_tick() {
        let mut rig = Rig::new();
        rig.drop_sheet();
        let old_handle = rig.app.sheet().texture().unwrap().handle;

        rig.images.touch(Path::new("sheet.png"), 200);
        rig.tick();

        assert_eq!((rig.textures.uploads, rig.textures.releases), (2, 1));
        assert!(!rig.textures.is_live(old_handle));
        // The frame plan already references the fresh texture
        let bound = rig.app.frame_plan().texture.unwrap();
        assert!(rig.textures.is_live(bound));

        rig.tick();
        assert_eq!(rig.textures.uploads, 2);
    }

    #[test]
    fn redrop_while_previewing_resets_the_session() {
        let mut rig = Rig::new();
        rig.drop_sheet();
        rig.widget(WidgetEvent::HFramesStaged(4));
        rig.widget(WidgetEvent::VFramesStaged(4));
        rig.widget(WidgetEvent::ConfirmPressed);
        rig.widget(WidgetEvent::PlayPressed);
        rig.widget(WidgetEvent::PixelateToggled(true));
        rig.widget(WidgetEvent::HideUiPressed);
        rig.tick();
        assert_eq!(rig.app.state().visibility(), UiVisibility::Hidden);

        rig.drop_sheet();

        let state = rig.app.state();
        assert_eq!(state.mode(), Mode::Configuring);
        assert_eq!(state.visibility(), UiVisibility::Visible);
        assert!(!state.play_anim);
        assert!(!state.pixelate);
        assert_eq!(rig.app.clock().frame_index(), 0);
        // Rotation restarted: only the drop tick itself has accumulated
        assert_eq!(rig.app.clock().rotation_degrees(), DT * 20.0);
        // Old texture released, new one live
        assert_eq!(rig.textures.live_count(), 1);
    }

    #[test]
    fn failed_drop_keeps_previous_sheet() {
        let mut rig = Rig::new();
        rig.drop_sheet();
        rig.widget(WidgetEvent::ConfirmPressed);
        rig.tick();

        rig.push(InputEvent::FileDropped {
            path: "missing.png".into(),
        });
        rig.tick();

        assert_eq!(rig.app.state().mode(), Mode::Previewing);
        assert!(rig.app.sheet().is_loaded());
        assert_eq!(rig.textures.uploads, 1);
        assert_eq!(rig.app.frame_plan().sprites.len(), 1);
    }

    #[test]
    fn pointer_press_recovers_hidden_ui() {
        let mut rig = Rig::new();
        rig.drop_sheet();
        rig.widget(WidgetEvent::ConfirmPressed);
        rig.widget(WidgetEvent::HideUiPressed);
        rig.tick();
        assert!(rig.app.panel().widgets.is_empty());

        rig.push(InputEvent::PointerDown { x: 42.0, y: 17.0 });
        rig.tick();
        assert!(rig.app.panel().contains(WidgetId::Frame));
    }

    #[test]
    fn shrinking_frame_count_reclamps_the_frame_index() {
        let mut rig = Rig::new();
        rig.drop_sheet();
        rig.widget(WidgetEvent::VFramesStaged(8));
        rig.widget(WidgetEvent::ConfirmPressed);
        rig.widget(WidgetEvent::FrameSelected(6));
        rig.tick();
        assert_eq!(rig.app.clock().frame_index(), 6);

        rig.widget(WidgetEvent::EditPressed);
        rig.widget(WidgetEvent::VFramesStaged(3));
        rig.widget(WidgetEvent::ConfirmPressed);
        rig.tick();
        assert_eq!(rig.app.clock().frame_index(), 0);
    }

    #[test]
    fn background_cycle_recolors_plan_and_panel() {
        let mut rig = Rig::new();
        rig.drop_sheet();
        rig.widget(WidgetEvent::ConfirmPressed);
        rig.widget(WidgetEvent::CycleBackgroundPressed);
        rig.tick();

        assert_eq!(rig.app.state().palette_index(), 1);
        assert_eq!(
            rig.app.frame_plan().background,
            crate::api::types::Color::DARK_GRAY
        );
        assert_eq!(rig.app.panel().text_color, rig.app.frame_plan().text_color);
    }
}
