mod schema;
mod surface_choice;
mod task_choice;
mod ui_choice;

pub use schema::*;
pub use surface_choice::*;
pub use task_choice::*;
pub use ui_choice::UIChoice;
