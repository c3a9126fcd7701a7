//! Post-render subprocess hooks
//!
//! Spawns the wallpaper-setting command and the reload commands after all
//! outputs are written. Commands run sequentially in declaration order and
//! each is waited to completion before the next begins. A failing command
//! is a recoverable diagnostic, never a fatal error.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::logger::Logger;
use crate::settings::GlobalConfig;

/// Token in `wallpaper-command` replaced by the image path
const WALLPAPER_TOKEN: &str = "{wallpaper_path}";

/// Run the wallpaper command followed by each reload command
pub fn run_all(
    global: &GlobalConfig,
    wallpaper: &Path,
    session_dir: &Path,
    logger: &dyn Logger,
    sink: &mut DiagnosticSink,
) {
    if let Some(template) = &global.wallpaper_command {
        let command = template.replace(WALLPAPER_TOKEN, &wallpaper.to_string_lossy());
        run_one(&command, "wallpaper-command", global, session_dir, logger, sink);
    }
    for command in &global.reload_commands {
        run_one(command, "reload-commands", global, session_dir, logger, sink);
    }
}

fn run_one(
    command: &str,
    origin: &str,
    global: &GlobalConfig,
    session_dir: &Path,
    logger: &dyn Logger,
    sink: &mut DiagnosticSink,
) {
    logger.debug(&format!("running: {command}"));
    let Some(mut process) = build(command, global.use_shell) else {
        sink.push(
            Diagnostic::warning(format!("'{command}' is empty, skipped")).at_key(origin.to_string()),
        );
        return;
    };

    if global.log_output {
        match command_log(command, session_dir) {
            Ok((stdout, stderr)) => {
                process.stdout(stdout);
                process.stderr(stderr);
            }
            Err(e) => logger.warn(&format!("cannot open log file for '{command}': {e}")),
        }
    }

    match process.status() {
        Ok(status) if status.success() => {}
        Ok(status) => sink.push(
            Diagnostic::warning(format!("'{command}' exited with {status}"))
                .at_key(origin.to_string()),
        ),
        Err(e) => sink.push(
            Diagnostic::warning(format!("failed to spawn '{command}': {e}"))
                .at_key(origin.to_string())
                .suggest("check that the program is installed and on PATH"),
        ),
    }
}

/// Build the command: `sh -c` under use-shell, whitespace-split otherwise
fn build(command: &str, use_shell: bool) -> Option<Command> {
    if use_shell {
        let mut process = Command::new("sh");
        process.arg("-c").arg(command);
        return Some(process);
    }
    let mut parts = command.split_whitespace();
    let program = parts.next()?;
    let mut process = Command::new(program);
    process.args(parts);
    Some(process)
}

/// `<session-dir>/<command>.log` capture targets
fn command_log(command: &str, session_dir: &Path) -> std::io::Result<(Stdio, Stdio)> {
    std::fs::create_dir_all(session_dir)?;
    let name = command
        .split_whitespace()
        .next()
        .unwrap_or("command")
        .rsplit('/')
        .next()
        .unwrap_or("command");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(session_dir.join(format!("{name}.log")))?;
    let clone = file.try_clone()?;
    Ok((Stdio::from(file), Stdio::from(clone)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::NoOpLogger;

    fn global(use_shell: bool, log_output: bool, commands: Vec<String>) -> GlobalConfig {
        GlobalConfig {
            wallpaper_command: None,
            theme_type: Default::default(),
            reload_commands: commands,
            use_shell,
            log_output,
        }
    }

    #[test]
    fn successful_command_leaves_no_diagnostic() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DiagnosticSink::new();
        run_all(
            &global(false, false, vec!["true".into()]),
            Path::new("/tmp/wall.png"),
            dir.path(),
            &NoOpLogger,
            &mut sink,
        );
        assert!(sink.is_empty());
    }

    #[test]
    fn failing_command_warns_but_does_not_abort() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DiagnosticSink::new();
        run_all(
            &global(false, false, vec!["false".into(), "true".into()]),
            Path::new("/tmp/wall.png"),
            dir.path(),
            &NoOpLogger,
            &mut sink,
        );
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn missing_program_warns() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DiagnosticSink::new();
        run_all(
            &global(false, false, vec!["luminol-definitely-not-a-program".into()]),
            Path::new("/tmp/wall.png"),
            dir.path(),
            &NoOpLogger,
            &mut sink,
        );
        assert!(sink.has_warnings());
    }

    #[test]
    fn wallpaper_token_is_substituted() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("seen");
        let mut config = global(true, false, Vec::new());
        config.wallpaper_command = Some(format!(
            "echo {WALLPAPER_TOKEN} > {}",
            marker.display()
        ));
        let mut sink = DiagnosticSink::new();
        run_all(
            &config,
            Path::new("/tmp/wall.png"),
            dir.path(),
            &NoOpLogger,
            &mut sink,
        );
        let seen = std::fs::read_to_string(&marker).unwrap();
        assert_eq!(seen.trim(), "/tmp/wall.png");
    }

    #[test]
    fn log_output_captures_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DiagnosticSink::new();
        run_all(
            &global(true, true, vec!["echo captured-line".into()]),
            Path::new("/tmp/wall.png"),
            dir.path(),
            &NoOpLogger,
            &mut sink,
        );
        let text = std::fs::read_to_string(dir.path().join("sh.log")).unwrap();
        assert!(text.contains("captured-line"));
    }
}
