use crate::error::{Result, ShareError};
#[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
use std::process::{Child, Command, Stdio};

/// Copies text to the system clipboard in an OS-specific way.
/// - macOS: uses pbcopy
/// - Linux: uses xclip or xsel
/// - Windows: uses clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        let child = spawn_piped("pbcopy", &[])?;
        feed(child, text, "pbcopy")
    }

    #[cfg(target_os = "linux")]
    {
        let child = match spawn_piped("xclip", &["-selection", "clipboard"]) {
            Ok(child) => child,
            Err(_) => spawn_piped("xsel", &["--clipboard", "--input"]).map_err(|e| {
                ShareError::Clipboard(format!("{}. Install xclip or xsel.", e))
            })?,
        };
        feed(child, text, "clipboard command")
    }

    #[cfg(target_os = "windows")]
    {
        let child = spawn_piped("clip", &[])?;
        feed(child, text, "clip")
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        Err(ShareError::Clipboard(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

#[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
fn spawn_piped(program: &str, args: &[&str]) -> Result<Child> {
    Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| ShareError::Clipboard(format!("Failed to spawn {}: {}", program, e)))
}

#[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
fn feed(mut child: Child, text: &str, name: &str) -> Result<()> {
    use std::io::Write;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| ShareError::Clipboard(format!("Failed to write to {}: {}", name, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| ShareError::Clipboard(format!("Failed to wait for {}: {}", name, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(ShareError::Clipboard(format!("{} exited with error", name)))
    }
}
