pub mod clipboard;
#[cfg(target_arch = "wasm32")]
pub mod location;
