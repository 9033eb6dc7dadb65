//! The ordered table of commands the prompt knows about.

use crate::builtin::{BuiltinCommand, Halt, Help, KernelInfo, Rep};
use crate::command::CommandHandler;

/// A registered command: its name, a one-line description and its handler.
pub struct CommandSpec {
    name: String,
    description: String,
    handler: Box<dyn CommandHandler>,
}

impl CommandSpec {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        handler: Box<dyn CommandHandler>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            handler,
        }
    }

    /// Entry for a builtin, using the builtin's own name and description.
    pub fn builtin<T: BuiltinCommand + Default + 'static>() -> Self {
        Self::new(T::NAME, T::DESCRIPTION, Box::new(T::default()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn handler(&self) -> &dyn CommandHandler {
        self.handler.as_ref()
    }
}

/// Immutable, ordered collection of [`CommandSpec`]s.
///
/// Names are not required to be unique; [`Registry::lookup`] returns the first
/// match, so an earlier entry shadows any later one with the same name.
#[derive(Default)]
pub struct Registry {
    entries: Vec<CommandSpec>,
}

impl Registry {
    pub fn new(entries: Vec<CommandSpec>) -> Self {
        Self { entries }
    }

    /// Find the first entry whose name equals `name` exactly.
    pub fn lookup(&self, name: &str) -> Option<&CommandSpec> {
        self.entries.iter().find(|spec| spec.name == name)
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The kernel prompt's stock commands: `help`, `kernel_info`, `rep`, `halt`.
pub fn builtin_registry() -> Registry {
    Registry::new(vec![
        CommandSpec::builtin::<Help>(),
        CommandSpec::builtin::<KernelInfo>(),
        CommandSpec::builtin::<Rep>(),
        CommandSpec::builtin::<Halt>(),
    ])
}
