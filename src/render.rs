//! `mdb render`: replay a script and write the markdown document.

use anyhow::Result;
use colored::Colorize;
use markdown_builder::{BuildError, Diagnostic, MarkdownBuilder};
use notify::{EventKind, RecursiveMode, Watcher};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crate::config::MdbConfig;
use crate::print_diagnostic;
use crate::script::load_script;

pub fn handle_render(script: &Path, out: Option<&Path>, config: &MdbConfig, quiet: bool) -> Result<()> {
    let parsed = load_script(script)?;
    let mut md = MarkdownBuilder::with_config(config.render_config());
    parsed.apply(&mut md, config.table_options());

    let result = match out {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| anyhow::anyhow!("Failed to create '{}': {}", path.display(), e))?;
            md.build(BufWriter::new(file))
        }
        None => md.build(std::io::stdout().lock()),
    };

    match result {
        Ok(()) => {
            if let Some(path) = out {
                if !quiet {
                    println!("  {} {} → {}", "render".dimmed(), script.display(), path.display());
                }
            }
            Ok(())
        }
        Err(BuildError::Validation(errors)) => {
            let label = script.display().to_string();
            // Oldest first reads naturally on a terminal.
            for err in errors.iter().rev() {
                print_diagnostic(&label, &Diagnostic::from(err));
            }
            anyhow::bail!(
                "{} table(s) in '{}' were skipped due to column mismatches",
                errors.len(),
                script.display()
            )
        }
        Err(err @ BuildError::Write { .. }) => Err(anyhow::Error::new(err)
            .context(format!("Failed to render '{}'", script.display()))),
    }
}

/// Watch the script for changes and re-render on each save.
///
/// Debounces rapid events (e.g. editors that write in stages) with a 200ms window.
/// Ctrl+C exits cleanly.
pub fn watch_and_render(script: &Path, out: Option<&Path>, config: &MdbConfig, quiet: bool) -> Result<()> {
    let script_path = std::fs::canonicalize(script)
        .map_err(|e| anyhow::anyhow!("Cannot resolve path '{}': {}", script.display(), e))?;

    let watch_dir = script_path
        .parent()
        .ok_or_else(|| anyhow::anyhow!("Cannot determine parent directory of '{}'", script.display()))?;

    eprintln!(
        "{} {} for changes (Ctrl+C to stop)",
        "Watching".cyan().bold(),
        script.display()
    );

    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    watcher.watch(watch_dir, RecursiveMode::NonRecursive)?;

    let mut debounce = Debounce::new(Duration::from_millis(200));

    loop {
        match rx.recv_timeout(Duration::from_secs(1)) {
            Ok(event) => {
                let is_write = matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_));
                let affects_script = event
                    .paths
                    .iter()
                    .any(|p| p.canonicalize().ok().as_ref() == Some(&script_path));

                if is_write && affects_script && debounce.ready(Instant::now()) {
                    // Let the editor finish writing.
                    std::thread::sleep(Duration::from_millis(50));

                    tracing::info!(script = %script.display(), "Script changed, re-rendering");
                    if let Err(e) = handle_render(script, out, config, quiet) {
                        eprintln!("{} {:#}", "Render error:".red().bold(), e);
                    }
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}

/// Drops events that arrive within `window` of the last accepted one.
///
/// An accepted event starts a new window whether or not the render it
/// triggers succeeds.
struct Debounce {
    window: Duration,
    last: Instant,
}

impl Debounce {
    fn new(window: Duration) -> Self {
        Self {
            window,
            last: Instant::now(),
        }
    }

    fn ready(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) <= self.window {
            return false;
        }
        self.last = now;
        true
    }
}
