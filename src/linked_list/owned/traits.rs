/// A sequence consumer.
///
/// A traversal hands the consumer one value per call, in `next` order, and
/// consumes nothing back. This is the only boundary through which list
/// contents leave the library.
pub trait Consumer<T> {
    /// Receive the next value of the sequence.
    fn emit(&mut self, value: &T);
}

impl<T, F> Consumer<T> for F
where
    F: FnMut(&T),
{
    fn emit(&mut self, value: &T) {
        self(value)
    }
}
