pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod input;
pub mod renderer;
pub mod systems;
pub mod ui;

// Re-export key types at crate root for convenience
pub use crate::api::app::App;
pub use crate::api::config::AppConfig;
pub use crate::api::types::{Color, Rect, TextureHandle};
pub use crate::assets::memory::{MemoryImageStore, RecordingTextures};
pub use crate::assets::store::{AssetError, ImageStore, RawImage, TextureStore};
pub use crate::components::sheet::{GridConfig, SheetSource, SpriteSheet, Texture};
pub use crate::core::clock::{AnimationClock, TickAccumulator};
pub use crate::core::state::{AppState, Mode, PaletteEntry, UiVisibility, PALETTE};
pub use crate::input::queue::{InputEvent, InputQueue, WidgetEvent};
pub use crate::renderer::instance::{FramePlan, StackBuffer, StackInstance};
pub use crate::systems::hot_reload::check_and_reload;
pub use crate::systems::layout::{compute_layout, StackLayout};
pub use crate::systems::render::build_frame_plan;
pub use crate::ui::panel::{build_panel, UiPanel, Widget, WidgetId};
