//! Editor: The shell's state and its reaction to input events.
//!
//! The editor owns the single live [`ImageModel`] and lends it to the
//! [`EditController`] for each pointer event. It never touches the
//! terminal; [`super::run`] feeds it events and draws its [`View`].

use super::config::ShellConfig;
use super::messages::{InputEvent, KeyCode, MouseButton, MouseEvent};
use super::screen::{ScreenLayout, View};
use crate::edit::{EditController, EditOutcome, PointerEvent};
use crate::error::Error;
use crate::file;
use crate::image::{Format, ImageModel};
use std::path::{Path, PathBuf};

/// Which action a prompt collects input for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// `WxH [format]` for a blank canvas.
    New,
    /// Path of a file to open.
    Open,
    /// Path to save to.
    Save,
}

impl PromptKind {
    const fn label(self) -> &'static str {
        match self {
            Self::New => "New image (WxH)",
            Self::Open => "Open file",
            Self::Save => "Save as",
        }
    }
}

/// A line of text being typed into the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// What the input is for.
    pub kind: PromptKind,
    /// Text typed so far.
    pub input: String,
}

/// Message shown in the status line until the next action.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Status {
    text: String,
    is_error: bool,
}

/// Parse `WxH` (e.g. `"64x32"`) into a width and height.
///
/// Only the syntax is checked here; the 1..=65535 range is enforced when
/// the image is created.
pub fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .trim()
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got '{}'", s.trim()))?;
    let width = w
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("invalid width '{}'", w.trim()))?;
    let height = h
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("invalid height '{}'", h.trim()))?;
    Ok((width, height))
}

/// Parse the new-image prompt: `WxH` optionally followed by a format name.
fn parse_new_image(s: &str) -> Result<(u32, u32, Format), String> {
    let mut parts = s.split_whitespace();
    let size = parts.next().ok_or_else(|| "expected WxH".to_string())?;
    let (width, height) = parse_size(size)?;
    let format = parts.next().map_or(Ok(Format::default()), str::parse)?;
    Ok((width, height, format))
}

/// The terminal editor's state.
#[derive(Debug)]
pub struct Editor {
    config: ShellConfig,
    layout: ScreenLayout,
    image: Option<ImageModel>,
    path: Option<PathBuf>,
    modified: bool,
    controller: EditController,
    prompt: Option<Prompt>,
    status: Option<Status>,
    running: bool,
}

impl Editor {
    /// Create an editor with no image for a terminal of the given size.
    pub fn new(config: ShellConfig, width: u16, height: u16) -> Self {
        let layout = ScreenLayout::new(width, height, &config);
        Self {
            config,
            layout,
            image: None,
            path: None,
            modified: false,
            controller: EditController::new(),
            prompt: None,
            status: None,
            running: true,
        }
    }

    /// The loaded image, if any.
    pub const fn image(&self) -> Option<&ImageModel> {
        self.image.as_ref()
    }

    /// Path the image was opened from or last saved to.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The edit controller.
    pub const fn controller(&self) -> &EditController {
        &self.controller
    }

    /// The active prompt, if any.
    pub const fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    /// Current screen layout.
    pub const fn layout(&self) -> &ScreenLayout {
        &self.layout
    }

    /// Whether the image has unsaved paint.
    pub const fn is_modified(&self) -> bool {
        self.modified
    }

    /// Whether the editor loop should keep going.
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Frame contents for the renderer.
    pub fn view(&self) -> View<'_> {
        let (status, status_is_error) = match (&self.prompt, &self.status) {
            (Some(prompt), _) => (format!("{}: {}_", prompt.kind.label(), prompt.input), false),
            (None, Some(status)) => (status.text.clone(), status.is_error),
            (None, None) => (self.summary(), false),
        };
        View {
            layout: self.layout,
            image: self.image.as_ref(),
            status,
            status_is_error,
        }
    }

    fn summary(&self) -> String {
        let Some(image) = &self.image else {
            return "No image loaded  ^N new  ^O open  ^Q quit".to_string();
        };
        let name = self
            .path
            .as_deref()
            .and_then(Path::file_name)
            .map_or_else(|| "[untitled]".into(), |n| n.to_string_lossy());
        let mode = if self.controller.is_editing() {
            "EDIT"
        } else {
            "VIEW"
        };
        format!(
            "{name}{} {}x{} {} [{mode}]  ^N new  ^O open  ^S save  ^E edit  ^Q quit",
            if self.modified { "*" } else { "" },
            image.width(),
            image.height(),
            image.format(),
        )
    }

    fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(Status {
            text: text.into(),
            is_error: false,
        });
    }

    fn set_error(&mut self, context: &str, error: &Error) {
        self.status = Some(Status {
            text: format!("{context}: {error}"),
            is_error: true,
        });
    }

    /// Replace the current image with a blank canvas and enter edit mode.
    ///
    /// On invalid dimensions the current image is kept.
    pub fn new_image(&mut self, width: u32, height: u32, format: Format) {
        match ImageModel::new_blank(width, height, format) {
            Ok(image) => {
                tracing::info!(target: "limg::shell", width, height, %format, "created blank image");
                self.set_status(format!("New {width}x{height} {format} image"));
                self.image = Some(image);
                self.path = None;
                self.modified = false;
                self.controller.enter_edit_mode();
            }
            Err(e) => self.set_error("Error creating image", &e),
        }
    }

    /// Load `path`, replacing the current image only on success.
    pub fn open(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        match file::load(&path) {
            Ok(image) => {
                tracing::info!(target: "limg::shell", path = %path.display(), "opened image");
                self.set_status(format!(
                    "Opened {} ({}x{} {})",
                    path.display(),
                    image.width(),
                    image.height(),
                    image.format()
                ));
                self.image = Some(image);
                self.path = Some(path);
                self.modified = false;
            }
            Err(e) => self.set_error("Error loading file", &e),
        }
    }

    /// Write the current image to `path`. No-op without an image.
    pub fn save(&mut self, path: impl Into<PathBuf>) {
        let Some(image) = &self.image else {
            self.set_status("No image to save");
            return;
        };
        let path = path.into();
        match file::save(image, &path) {
            Ok(()) => {
                tracing::info!(target: "limg::shell", path = %path.display(), "saved image");
                self.set_status(format!("Saved {}", path.display()));
                self.path = Some(path);
                self.modified = false;
            }
            Err(e) => self.set_error("Error saving file", &e),
        }
    }

    /// React to one input event. Returns whether a redraw is needed.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key { code, modifiers } => {
                if modifiers.control {
                    if let KeyCode::Char(c) = code {
                        return self.handle_shortcut(c.to_ascii_lowercase());
                    }
                    return false;
                }
                self.handle_prompt_key(*code)
            }
            InputEvent::MouseDown(mouse) | InputEvent::MouseDrag(mouse) => self.handle_mouse(*mouse),
            InputEvent::Resize { width, height } => {
                self.layout = ScreenLayout::new(*width, *height, &self.config);
                true
            }
            InputEvent::Error(message) => {
                tracing::warn!(target: "limg::shell", %message, "input error");
                self.status = Some(Status {
                    text: format!("Input error: {message}"),
                    is_error: true,
                });
                true
            }
            InputEvent::Shutdown => {
                self.running = false;
                false
            }
        }
    }

    fn handle_shortcut(&mut self, c: char) -> bool {
        match c {
            'q' | 'c' => {
                self.running = false;
                false
            }
            'n' => self.start_prompt(PromptKind::New, String::new()),
            'o' => self.start_prompt(PromptKind::Open, String::new()),
            's' => {
                if self.image.is_none() {
                    self.set_status("No image to save");
                    return true;
                }
                let current = self
                    .path
                    .as_deref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                self.start_prompt(PromptKind::Save, current)
            }
            'e' => {
                let editing = !self.controller.is_editing();
                self.controller.set_edit_mode(editing);
                self.set_status(if editing {
                    "Edit mode on"
                } else {
                    "Edit mode off"
                });
                true
            }
            _ => false,
        }
    }

    fn start_prompt(&mut self, kind: PromptKind, input: String) -> bool {
        self.prompt = Some(Prompt { kind, input });
        self.status = None;
        true
    }

    fn handle_prompt_key(&mut self, code: KeyCode) -> bool {
        let Some(prompt) = &mut self.prompt else {
            return false;
        };
        match code {
            KeyCode::Char(c) => prompt.input.push(c),
            KeyCode::Backspace => {
                prompt.input.pop();
            }
            KeyCode::Esc => self.prompt = None,
            KeyCode::Enter => {
                if let Some(prompt) = self.prompt.take() {
                    self.submit(prompt);
                }
            }
        }
        true
    }

    fn submit(&mut self, prompt: Prompt) {
        let input = prompt.input.trim();
        // An empty answer cancels, like dismissing a file dialog.
        if input.is_empty() {
            return;
        }
        match prompt.kind {
            PromptKind::New => match parse_new_image(input) {
                Ok((width, height, format)) => self.new_image(width, height, format),
                Err(message) => {
                    self.status = Some(Status {
                        text: format!("Error creating image: {message}"),
                        is_error: true,
                    });
                }
            },
            PromptKind::Open => self.open(input),
            PromptKind::Save => self.save(input),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        if mouse.button != MouseButton::Left
            || self.prompt.is_some()
            || !self.layout.canvas.contains(mouse.x, mouse.y)
        {
            return false;
        }

        let event = PointerEvent::new(mouse.x, mouse.y);
        match self
            .controller
            .handle(self.image.as_mut(), event, self.layout.mapping)
        {
            Ok(EditOutcome::Painted { .. }) => {
                self.modified = true;
                true
            }
            Ok(EditOutcome::Ignored | EditOutcome::OutsideImage) => false,
            Err(e) => {
                self.set_error("Error painting", &e);
                true
            }
        }
    }
}
