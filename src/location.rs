/// Anything that carries a geographic position, e.g. a reading from a
/// platform location provider.
pub trait Location: Sync {
    fn latitude(&self) -> f64;
    fn longitude(&self) -> f64;

    /// Meters above the reference ellipsoid, if the source reports it
    fn altitude(&self) -> Option<f64> {
        None
    }
}
