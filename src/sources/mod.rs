mod random_source;
mod uniform_source;

pub use random_source::RandomSource;
pub use uniform_source::UniformSource;
