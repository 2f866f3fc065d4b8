/// UI module exports
pub mod overlay;
pub mod playground;

pub use overlay::{BugIndicator, OverlayProvider, RenderTarget};
pub use playground::App;
