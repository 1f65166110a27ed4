use anyhow::Context;
use std::path::PathBuf;
use std::process::Command;

/// Start the fullscreen presenter as a detached child process and return
/// immediately. The child reads the settings document on its own; nothing is
/// shared with it and its exit is not monitored.
pub fn spawn_presenter() -> anyhow::Result<()> {
    let exe = std::env::current_exe().context("resolve current executable")?;
    let cwd = exe
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut command = Command::new(&exe);
    command.arg("--fullscreen").current_dir(cwd);

    #[cfg(target_os = "windows")]
    {
        use std::os::windows::process::CommandExt;
        const CREATE_NO_WINDOW: u32 = 0x0800_0000;
        command.creation_flags(CREATE_NO_WINDOW);
    }

    command.spawn().map(|_| ()).map_err(|e| e.into())
}
