// Event types for async communication

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The dispatcher finished. `id` is the submission it answers; `text` is
    /// either the generated piece or an error string.
    GenerationFinished { id: u64, text: String },
}
