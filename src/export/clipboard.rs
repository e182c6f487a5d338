use anyhow::Context;

/// Places the plain-text rendering on the system clipboard. A fresh clipboard
/// handle per call; some platforms invalidate long-lived handles.
pub fn copy_text(text: &str) -> anyhow::Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("opening clipboard")?;
    clipboard
        .set_text(text.to_owned())
        .context("writing clipboard")?;
    Ok(())
}

/// Reads text from the system clipboard, for pasting into form fields.
pub fn paste_text() -> anyhow::Result<String> {
    let mut clipboard = arboard::Clipboard::new().context("opening clipboard")?;
    clipboard.get_text().context("reading clipboard")
}
