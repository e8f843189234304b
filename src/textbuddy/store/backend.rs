use crate::error::Result;

/// Abstract interface for raw line storage.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `LineStore` handles the "what" (the lines, and when to sync them).
pub trait StorageBackend {
    /// Name of the storage as shown to the user (the backing file's name).
    fn name(&self) -> &str;

    /// Load every stored line, in order.
    /// Storage that does not exist yet is created empty.
    fn load_lines(&self) -> Result<Vec<String>>;

    /// Replace the stored lines with `lines`.
    /// Writes go to the user's storage itself, never to a replacement of it.
    fn save_lines(&self, lines: &[String]) -> Result<()>;

    /// Raw stored content, exactly as persisted.
    fn read_raw(&self) -> Result<String>;
}
