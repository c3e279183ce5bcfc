use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::ClearType;
use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::warn;

use crate::error::Result;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    Char(char),
    /// Ctrl+C. Raw mode keeps it from raising SIGINT, so it shows up here.
    Interrupt,
}

pub trait InputSource {
    /// Must return right away whether or not a key is waiting.
    fn poll(&mut self) -> Result<bool>;

    /// Consumes one key and throws away anything queued behind it, so a held
    /// key doesn't build up a backlog of turns.
    fn read_key(&mut self) -> Result<Option<Key>>;
}

pub trait Display {
    fn clear(&mut self) -> Result<()>;
    fn print(&mut self, text: &str) -> Result<()>;
}

impl<D: Display + ?Sized> Display for &mut D {
    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }

    fn print(&mut self, text: &str) -> Result<()> {
        (**self).print(text)
    }
}

/// Keyboard input straight from crossterm's event queue.
pub struct KeyReader;

impl InputSource for KeyReader {
    fn poll(&mut self) -> Result<bool> {
        Ok(poll(Duration::ZERO)?)
    }

    fn read_key(&mut self) -> Result<Option<Key>> {
        let mut events = vec![read()?];

        while poll(Duration::ZERO)? {
            events.push(read()?);
        }

        Ok(first_key(events))
    }
}

/// Owns the terminal mode for the session. Dropping it puts the terminal
/// back the way it was found.
pub struct TermManager {
    stdout: Stdout,
    raw: bool,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout(), raw: false }
    }

    pub fn setup(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.raw = true;
        execute!(self.stdout, cursor::Hide)?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        if !self.raw {
            return Ok(());
        }

        self.raw = false;
        terminal::disable_raw_mode()?;
        execute!(self.stdout, cursor::Show)?;
        Ok(())
    }
}

impl Display for TermManager {
    fn clear(&mut self) -> Result<()> {
        queue!(self.stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<()> {
        queue!(self.stdout, style::Print(text))?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!("Failed to restore terminal: {}", e);
        }
    }
}

///////////////////////////////////////////////////////////////////////////

/// The first key press in a drained queue. A queued Ctrl+C wins over it,
/// everything else is dropped.
fn first_key(events: impl IntoIterator<Item = Event>) -> Option<Key> {
    let mut first = None;

    for key in events.into_iter().filter_map(to_key) {
        if key == Key::Interrupt {
            return Some(Key::Interrupt);
        }
        first = first.or(Some(key));
    }

    first
}

fn to_key(event: Event) -> Option<Key> {
    match event {
        Event::Key(ev) if ev.kind != KeyEventKind::Release => key_from_event(&ev),
        _ => None,
    }
}

fn key_from_event(ev: &KeyEvent) -> Option<Key> {
    match ev {
        KeyEvent { code: KeyCode::Char('c'), modifiers, .. }
            if modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some(Key::Interrupt)
        }
        KeyEvent { code: KeyCode::Char(c), .. } => Some(Key::Char(*c)),
        _ => None,
    }
}
