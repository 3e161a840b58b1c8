use anyhow::{anyhow, Result};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Clipboard utilities to try in order, with their arguments.
const CANDIDATES: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// Write `text` to the system clipboard by piping it into whichever
/// platform utility is installed.
pub async fn copy(text: &str) -> Result<()> {
    for (program, args) in CANDIDATES {
        let spawned = Command::new(program)
            .args(*args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(_) => continue,
        };

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
        }

        if child.wait().await?.success() {
            return Ok(());
        }
    }

    Err(anyhow!(
        "no clipboard utility found (tried pbcopy, wl-copy, xclip, xsel)"
    ))
}
