//! Writing text to the system clipboard.

use egui::Context;

/// Copies `text` to the clipboard.
///
/// Native builds write through `arboard`. When the system clipboard is unavailable the failure
/// is logged and the text is handed to egui's platform output instead, which is also the only
/// path on the web.
#[cfg(not(target_arch = "wasm32"))]
pub fn copy_text(ctx: &Context, text: &str) {
    use arboard::Clipboard;

    let result = Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text));
    match result {
        Ok(()) => log::debug!("copied {} bytes to the clipboard", text.len()),
        Err(e) => {
            log::warn!("Failed to write clipboard: {e}");
            ctx.copy_text(text.to_owned());
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn copy_text(ctx: &Context, text: &str) {
    ctx.copy_text(text.to_owned());
}
