pub mod drivers;
pub mod wizard;
