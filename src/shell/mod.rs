//! Shell module: The interactive terminal editor.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   InputEvent    ┌──────────────────────────────┐
//! │ Input Thread │ ──────────────► │ Editor loop (main thread)    │
//! │  (crossterm) │   (bounded)     │  Editor ─► View ─► Screen    │
//! └──────────────┘                 └──────────────────────────────┘
//! ```
//!
//! The input thread only polls and converts events. The main thread owns
//! the image, applies each event and redraws the whole frame in a single
//! write when something changed.

mod app;
mod config;
mod input;
mod messages;
mod output;
mod screen;
mod terminal;

pub use app::{parse_size, Editor, Prompt, PromptKind};
pub use config::{Rgb, ShellConfig};
pub use input::InputActor;
pub use messages::{InputEvent, KeyCode, KeyModifiers, MouseButton, MouseEvent};
pub use output::OutputBuffer;
pub use screen::{Screen, ScreenLayout, View};
pub use terminal::TerminalGuard;

use crate::image::Format;
use crossbeam_channel::{bounded, Receiver};
use std::io::{self, Write};
use std::path::PathBuf;

/// What the editor shows on startup.
#[derive(Debug, Clone, Default)]
pub struct Startup {
    /// File to open.
    pub open: Option<PathBuf>,
    /// Blank canvas to create, as (width, height).
    pub new: Option<(u32, u32)>,
}

impl Startup {
    fn apply(self, editor: &mut Editor) {
        if let Some((width, height)) = self.new {
            editor.new_image(width, height, Format::default());
        } else if let Some(path) = self.open {
            editor.open(path);
        }
    }
}

/// Run the editor until the user quits.
///
/// # Errors
///
/// Returns an error if terminal setup or writing a frame fails. Image and
/// file errors are shown in the status line instead.
pub fn run(config: ShellConfig, startup: Startup) -> io::Result<()> {
    let guard = TerminalGuard::enter(&config)?;
    let (width, height) = TerminalGuard::size()?;
    tracing::info!(target: "limg::shell", width, height, "editor started");

    let (input_tx, input_rx) = bounded::<InputEvent>(64);
    let input = InputActor::spawn(input_tx, config.input_poll_timeout);

    let mut screen = Screen::new(&config);
    let mut editor = Editor::new(config, width, height);
    startup.apply(&mut editor);

    let result = event_loop(&mut editor, &mut screen, &input_rx);

    // Unblocks the input thread if it is waiting on a full channel.
    drop(input_rx);
    input.join();
    drop(guard);
    tracing::info!(target: "limg::shell", "editor stopped");
    result
}

fn event_loop(
    editor: &mut Editor,
    screen: &mut Screen,
    input_rx: &Receiver<InputEvent>,
) -> io::Result<()> {
    let mut stdout = io::stdout();
    screen.render(&editor.view()).flush_to(&mut stdout)?;

    while editor.is_running() {
        let Ok(event) = input_rx.recv() else {
            tracing::warn!(target: "limg::shell", "input channel disconnected");
            break;
        };
        let mut redraw = editor.handle_event(&event);
        // Coalesce drags that queued up while the last frame was written.
        while editor.is_running() {
            let Ok(event) = input_rx.try_recv() else {
                break;
            };
            redraw |= editor.handle_event(&event);
        }

        if redraw && editor.is_running() {
            screen.render(&editor.view()).flush_to(&mut stdout)?;
        }
    }
    stdout.flush()
}
