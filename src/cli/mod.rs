//! Interactive command line
//!
//! `Session` holds the state of one run of the program; `shell` parses input
//! lines into commands and drives the session with them.

pub mod session;
pub mod shell;

pub use session::{parse_timestamp, EntryInput, Session};
pub use shell::{handle_line, run_shell, LoopControl};
