/// Logging port used by the use cases.
///
/// Implemented by the `logger` infrastructure crate; injected as `Arc<dyn Logger>`.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
