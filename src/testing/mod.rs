mod stubs;

pub use stubs::{RecordingSurface, ScriptedSource};
