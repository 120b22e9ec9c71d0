pub mod recording_surface;
pub mod scripted_source;

pub use recording_surface::RecordingSurface;
pub use scripted_source::ScriptedSource;
