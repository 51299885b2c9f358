//! Line-oriented user consoles
//!
//! [`UserConsole`] is the interactive transport: one blocking line in, one
//! line out. [`TextConsole`] drives it over any reader/writer pair (stdin and
//! stdout in the binary), and [`ReplayConsole`] layers the journal on top so
//! every line is read from the user or shown to the user at most once,
//! however many times the process is restarted.

mod replay;
mod text;

pub use replay::{Phase, ReplayConsole};
pub use text::TextConsole;

use crate::error::Result;

/// Blocking line transport to a real user.
pub trait UserConsole {
    /// Block until the user supplies one line. End of input is [`crate::Error::InputClosed`].
    fn read_line(&mut self) -> Result<String>;

    /// Show one line to the user.
    fn write_line(&mut self, content: &str) -> Result<()>;
}

impl<C: UserConsole + ?Sized> UserConsole for &mut C {
    fn read_line(&mut self) -> Result<String> {
        (**self).read_line()
    }

    fn write_line(&mut self, content: &str) -> Result<()> {
        (**self).write_line(content)
    }
}

impl<C: UserConsole + ?Sized> UserConsole for Box<C> {
    fn read_line(&mut self) -> Result<String> {
        (**self).read_line()
    }

    fn write_line(&mut self, content: &str) -> Result<()> {
        (**self).write_line(content)
    }
}
