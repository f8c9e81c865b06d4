//! Input Actor: Dedicated thread for polling terminal events.
//!
//! The editor loop blocks on the channel; this thread owns crossterm's
//! event polling and forwards only the events the editor handles.

use super::messages::{InputEvent, KeyCode, KeyModifiers, MouseButton, MouseEvent};
use crossbeam_channel::Sender;
use crossterm::event::{self, Event, KeyEventKind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Input actor that polls terminal events.
pub struct InputActor {
    /// Handle to the input thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl InputActor {
    /// Spawn the input actor thread.
    ///
    /// `poll_timeout` bounds how long the thread waits for an event before
    /// checking for shutdown.
    pub fn spawn(sender: Sender<InputEvent>, poll_timeout: Duration) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("limg-input".to_string())
            .spawn(move || {
                Self::run_loop(&sender, &shutdown_clone, poll_timeout);
            })
            .expect("Failed to spawn input thread");

        Self {
            handle: Some(handle),
            shutdown,
        }
    }

    /// Signal the input thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the input thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main input polling loop.
    fn run_loop(sender: &Sender<InputEvent>, shutdown: &AtomicBool, poll_timeout: Duration) {
        loop {
            if shutdown.load(Ordering::Relaxed) {
                let _ = sender.send(InputEvent::Shutdown);
                break;
            }

            match event::poll(poll_timeout) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if let Some(input_event) = convert_event(event) {
                            if sender.send(input_event).is_err() {
                                // Receiver dropped, exit
                                break;
                            }
                        }
                    }
                    Err(e) => {
                        let _ = sender.send(InputEvent::Error(e.to_string()));
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    let _ = sender.send(InputEvent::Error(e.to_string()));
                }
            }
        }
    }
}

impl Drop for InputActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Convert a crossterm event to our `InputEvent`.
fn convert_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key_event) => {
            // Only process key press events (not release or repeat)
            if key_event.kind != KeyEventKind::Press {
                return None;
            }

            let code = convert_key_code(key_event.code)?;
            let modifiers = convert_modifiers(key_event.modifiers);

            Some(InputEvent::Key { code, modifiers })
        }

        Event::Mouse(mouse_event) => convert_mouse_event(mouse_event),

        Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),

        Event::FocusGained | Event::FocusLost | Event::Paste(_) => None,
    }
}

/// Convert crossterm `KeyCode` to our `KeyCode`.
fn convert_key_code(code: event::KeyCode) -> Option<KeyCode> {
    Some(match code {
        event::KeyCode::Char(c) => KeyCode::Char(c),
        event::KeyCode::Backspace => KeyCode::Backspace,
        event::KeyCode::Enter => KeyCode::Enter,
        event::KeyCode::Esc => KeyCode::Esc,
        _ => return None,
    })
}

/// Convert crossterm `KeyModifiers` to our `KeyModifiers`.
fn convert_modifiers(mods: event::KeyModifiers) -> KeyModifiers {
    KeyModifiers {
        shift: mods.contains(event::KeyModifiers::SHIFT),
        control: mods.contains(event::KeyModifiers::CONTROL),
        alt: mods.contains(event::KeyModifiers::ALT),
    }
}

/// Convert a crossterm mouse event; presses and drags only.
fn convert_mouse_event(mouse: event::MouseEvent) -> Option<InputEvent> {
    match mouse.kind {
        event::MouseEventKind::Down(button) => Some(InputEvent::MouseDown(MouseEvent {
            x: mouse.column,
            y: mouse.row,
            button: convert_mouse_button(button),
        })),
        event::MouseEventKind::Drag(button) => Some(InputEvent::MouseDrag(MouseEvent {
            x: mouse.column,
            y: mouse.row,
            button: convert_mouse_button(button),
        })),
        _ => None,
    }
}

/// Convert crossterm `MouseButton` to our `MouseButton`.
fn convert_mouse_button(button: event::MouseButton) -> MouseButton {
    match button {
        event::MouseButton::Left => MouseButton::Left,
        event::MouseButton::Right => MouseButton::Right,
        event::MouseButton::Middle => MouseButton::Middle,
    }
}
