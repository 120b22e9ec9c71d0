/// Pull-based source of independent uniform draws in `[0, 1)`.
///
/// The estimator never touches an ambient generator; every draw comes from a
/// source handed to it, so tests can substitute a seeded or scripted one.
pub trait UniformSource {
    /// Returns the next draw. Must lie in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Resets the source to its initial state.
    ///
    /// Seeded sources replay the same sequence after a restart. Sources with
    /// no fixed seed may start a fresh, unrelated sequence.
    fn restart(&mut self);
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }

    fn restart(&mut self) {
        (**self).restart()
    }
}

impl<S: UniformSource + ?Sized> UniformSource for Box<S> {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }

    fn restart(&mut self) {
        (**self).restart()
    }
}
