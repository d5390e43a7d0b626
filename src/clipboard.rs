/// Single-shot system clipboard write.
use anyhow::Result;

/// Writes `text` to the system clipboard, reporting failure to the caller
/// instead of surfacing UI side effects from here.
pub fn copy_text(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}
