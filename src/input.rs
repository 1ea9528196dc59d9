//! Raw keyboard input.
//!
//! The session reads at most three bytes per keypress. Arrow keys arrive as
//! `ESC [ <A-D>`; everything else is a single byte. [`decode`] turns those
//! bytes into a [`Command`].

use std::collections::VecDeque;
use std::io::{self, Read};

use crossterm::terminal;

const UP: u8 = 65; // final byte of an arrow-key sequence
const DOWN: u8 = 66;
const RIGHT: u8 = 67;
const LEFT: u8 = 68;
const CTRL_C: u8 = 3;
const ENTER: u8 = 13;
const ESCAPE: u8 = 27;
const BACKTICK: u8 = 96;
const EXIT: u8 = b'x';

/// Longest raw read the decoder understands
pub const MAX_SEQUENCE: usize = 3;

/// Logical command produced by one keypress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Up,
    Down,
    Back,
    Enter,
    /// Turn in-place redraw on or off
    Toggle,
    Exit,
    /// Nothing was read
    Empty,
    /// Any other key, looked up as a hotkey
    Literal(char),
}

/// Decode one raw read.
///
/// Three bytes are treated as an arrow sequence and only the last byte
/// matters; unknown sequences move the cursor down. Shorter reads are
/// decoded from their first byte.
pub fn decode(bytes: &[u8]) -> Command {
    match bytes {
        [] => Command::Empty,
        [_, _, last] => match *last {
            UP => Command::Up,
            DOWN => Command::Down,
            LEFT => Command::Back,
            RIGHT => Command::Enter,
            _ => Command::Down,
        },
        [first, ..] => match *first {
            ENTER => Command::Enter,
            ESCAPE => Command::Back,
            BACKTICK => Command::Toggle,
            EXIT | CTRL_C => Command::Exit,
            other => Command::Literal(char::from(other)),
        },
    }
}

/// Source of raw keypresses.
///
/// Implementations block until at least one byte is available and return
/// the number of bytes written into `buf`.
pub trait InputSource {
    fn read_raw(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn read_raw(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read_raw(buf)
    }
}

/// Read one keypress and decode it.
pub fn read_command(input: &mut impl InputSource) -> io::Result<Command> {
    let mut buf = [0u8; MAX_SEQUENCE];
    let n = input.read_raw(&mut buf)?;
    Ok(decode(&buf[..n.min(MAX_SEQUENCE)]))
}

/// Raw mode for as long as the guard lives.
///
/// On drop the terminal goes back to the mode it was in before, so every
/// exit path out of a read (including errors) leaves it usable. A terminal
/// that was already raw is left alone.
#[derive(Debug)]
pub struct RawModeGuard {
    /// Set only when this guard switched raw mode on
    restore: Option<fn() -> io::Result<()>>,
}

impl RawModeGuard {
    pub fn acquire() -> io::Result<Self> {
        Self::acquire_with(
            terminal::is_raw_mode_enabled,
            terminal::enable_raw_mode,
            terminal::disable_raw_mode,
        )
    }

    fn acquire_with(
        is_enabled: fn() -> io::Result<bool>,
        enable: fn() -> io::Result<()>,
        disable: fn() -> io::Result<()>,
    ) -> io::Result<Self> {
        if is_enabled()? {
            return Ok(Self { restore: None });
        }
        enable()?;
        Ok(Self {
            restore: Some(disable),
        })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Some(disable) = self.restore {
            let _ = disable();
        }
    }
}

/// Keypresses from the controlling terminal.
pub struct TtyInput {
    reader: Box<dyn Read>,
}

impl TtyInput {
    /// Open the controlling terminal (`/dev/tty` on Unix, stdin elsewhere).
    pub fn open() -> io::Result<Self> {
        #[cfg(unix)]
        let reader: Box<dyn Read> = Box::new(std::fs::File::open("/dev/tty")?);
        #[cfg(not(unix))]
        let reader: Box<dyn Read> = Box::new(io::stdin());

        Ok(Self { reader })
    }
}

impl InputSource for TtyInput {
    fn read_raw(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let _raw = RawModeGuard::acquire()?;
        self.reader.read(buf)
    }
}

/// Prerecorded keypresses, one entry per read.
///
/// Runs out with `UnexpectedEof`, which ends a session like a broken
/// terminal would. Useful for driving sessions without a terminal.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    keys: VecDeque<Vec<u8>>,
}

impl ScriptedInput {
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<[u8]>,
    {
        Self {
            keys: keys.into_iter().map(|k| k.as_ref().to_vec()).collect(),
        }
    }

    pub fn push(&mut self, key: impl AsRef<[u8]>) {
        self.keys.push_back(key.as_ref().to_vec());
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_raw(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let key = self
            .keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more scripted keys"))?;
        let n = key.len().min(buf.len());
        buf[..n].copy_from_slice(&key[..n]);
        Ok(n)
    }
}

/// Escape sequences for the arrow keys, handy for scripting input.
pub mod keys {
    pub const UP: &[u8] = b"\x1b[A";
    pub const DOWN: &[u8] = b"\x1b[B";
    pub const RIGHT: &[u8] = b"\x1b[C";
    pub const LEFT: &[u8] = b"\x1b[D";
    pub const ENTER: &[u8] = b"\r";
    pub const ESCAPE: &[u8] = b"\x1b";
    pub const TOGGLE: &[u8] = b"`";
    pub const EXIT: &[u8] = b"x";
    pub const CTRL_C: &[u8] = b"\x03";
}
