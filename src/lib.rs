//! The FOS kernel command prompt, as an embeddable line-command interpreter.
//!
//! A line typed at the prompt is split on `&` into commands and each command on
//! whitespace into arguments. The first argument names a command in a fixed
//! [`Registry`]; its handler runs and returns a [`Status`](command::Status).
//! A negative status ends the session.
//!
//! The main entry point is [`Interpreter`]: [`Interpreter::execute`] runs one
//! line, [`Interpreter::run`] drives a whole session from any
//! [`LineSource`](command::LineSource). The collaborators a kernel would
//! provide (line editor, numeric parser, linker symbols) live in
//! [`io_adapters`], [`numeric`] and [`layout`].

pub mod builtin;
pub mod command;
pub mod config;
pub mod error;
pub mod io_adapters;
mod interpreter;
pub mod layout;
pub mod numeric;
pub mod registry;
pub mod tokenizer;

pub use interpreter::Interpreter;
pub use registry::Registry;
