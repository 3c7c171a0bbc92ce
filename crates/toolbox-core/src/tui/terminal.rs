//! Full-screen render/input loop

use crate::scaffold::GenerationReport;
use crate::ui::{Flow, Key, Navigator, SessionContext};
use anyhow::{Context, Result};
use console::Term;
use std::io;

/// Map a console key to a session key. Keys the session ignores map to `None`.
pub fn translate_key(key: console::Key) -> Option<Key> {
    match key {
        console::Key::ArrowUp => Some(Key::Up),
        console::Key::ArrowDown => Some(Key::Down),
        console::Key::ArrowLeft => Some(Key::Left),
        console::Key::ArrowRight => Some(Key::Right),
        console::Key::Enter => Some(Key::Enter),
        console::Key::Escape => Some(Key::Escape),
        console::Key::Backspace => Some(Key::Backspace),
        console::Key::Tab => Some(Key::Tab),
        console::Key::CtrlC | console::Key::Char('\u{3}') => Some(Key::CtrlC),
        console::Key::Char(c) => Some(Key::Char(c)),
        _ => None,
    }
}

/// Run an interactive session until the user quits.
///
/// Returns the reports of tools generated during the session.
pub fn run(context: SessionContext) -> Result<Vec<GenerationReport>> {
    let term = Term::stdout();
    if !term.is_term() {
        anyhow::bail!(
            "The interactive session needs a terminal. Use `generate` for non-interactive use."
        );
    }

    tracing::info!(output_dir = %context.scaffolder.output_root().display(), "session started");

    term.hide_cursor().context("Failed to hide cursor")?;
    let mut navigator = Navigator::new(context);
    let result = event_loop(&term, &mut navigator);

    // Restore the terminal whatever happened.
    let _ = term.clear_screen();
    let _ = term.show_cursor();

    result?;
    Ok(navigator.into_generated())
}

fn event_loop(term: &Term, navigator: &mut Navigator) -> Result<()> {
    loop {
        draw(term, &navigator.render()).context("Failed to draw frame")?;

        let key = match term.read_key() {
            Ok(key) => translate_key(key),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => Some(Key::CtrlC),
            Err(e) => return Err(e).context("Failed to read key"),
        };

        if let Some(key) = key {
            if navigator.handle_key(&key) == Flow::Quit {
                return Ok(());
            }
        }
    }
}

fn draw(term: &Term, frame: &str) -> io::Result<()> {
    term.clear_screen()?;
    term.write_str(frame)?;
    term.flush()
}
