// src/commands/registry.rs
use indexmap::IndexMap;
use tracing::debug;

use super::types::Command;

/// A handler plus the help text it was registered with.
pub struct RegisteredCommand {
    pub help: String,
    pub handler: Box<dyn Command>,
}

/// Command name to handler, in registration order.
pub struct CommandRegistry {
    commands: IndexMap<String, RegisteredCommand>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: IndexMap::new(),
        }
    }

    /// Register under the command's own name and help.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let name = cmd.name().to_string();
        let help = cmd.help().to_string();
        self.register_as(name, cmd, help);
    }

    /// Register under an explicit name. Re-registering a name replaces the
    /// handler but keeps its original position.
    pub fn register_as(&mut self, name: impl Into<String>, handler: Box<dyn Command>, help: impl Into<String>) {
        let name = name.into();
        debug!(command = %name, "registered command");
        self.commands.insert(
            name,
            RegisteredCommand {
                help: help.into(),
                handler,
            },
        );
    }

    pub fn unregister(&mut self, name: &str) -> bool {
        let removed = self.commands.shift_remove(name).is_some();
        if removed {
            debug!(command = %name, "unregistered command");
        }
        removed
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.handler.as_ref())
    }

    pub fn help(&self, name: &str) -> Option<&str> {
        self.commands.get(name).map(|c| c.help.as_str())
    }

    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().map(|s| s.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegisteredCommand)> {
        self.commands.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::{CommandError, FnCommand};
    use crate::shell::Flags;

    fn noop(name: &str) -> Box<dyn Command> {
        Box::new(FnCommand::new(name, format!("{} help", name), |_: &[String], _: &Flags| {
            Ok::<_, CommandError>(String::new())
        }))
    }

    #[test]
    fn test_registration_order_is_kept() {
        let mut registry = CommandRegistry::new();
        registry.register(noop("zeta"));
        registry.register(noop("alpha"));
        registry.register(noop("mid"));
        assert_eq!(registry.names(), vec!["zeta", "alpha", "mid"]);

        registry.register_as("alpha", noop("other"), "replaced");
        assert_eq!(registry.names(), vec!["zeta", "alpha", "mid"]);
        assert_eq!(registry.help("alpha"), Some("replaced"));
    }

    #[test]
    fn test_unregister() {
        let mut registry = CommandRegistry::new();
        registry.register(noop("a"));
        registry.register(noop("b"));
        registry.register(noop("c"));
        assert!(registry.unregister("b"));
        assert!(!registry.unregister("b"));
        assert_eq!(registry.names(), vec!["a", "c"]);
        assert!(registry.get("b").is_none());
        assert!(registry.contains("c"));
        assert_eq!(registry.len(), 2);
    }
}
