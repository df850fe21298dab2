// src/commands/mod.rs
pub mod alias_cmd;
pub mod cat;
pub mod cd;
pub mod chmod;
pub mod clear_cmd;
pub mod cp;
pub mod date;
pub mod echo;
pub mod env;
pub mod find;
pub mod help_cmd;
pub mod history_cmd;
pub mod hostname_cmd;
pub mod ls;
pub mod mkdir;
pub mod mv;
pub mod neofetch_cmd;
pub mod pwd;
pub mod registry;
pub mod rm;
pub mod rmdir_cmd;
pub mod stat_cmd;
pub mod touch;
pub mod tree_cmd;
pub mod types;
pub mod unalias_cmd;
pub mod whoami_cmd;
pub mod write_cmd;

pub use registry::{CommandRegistry, RegisteredCommand};
pub use types::{Command, CommandContext, CommandError, FnCommand};

use crate::fs::SharedVfs;
use crate::shell::Shell;

/// Register the filesystem commands against `vfs` and the session commands.
pub fn register_builtins(shell: &mut Shell, vfs: &SharedVfs, hostname: &str) {
    shell.register(Box::new(help_cmd::HelpCommand));
    shell.register(Box::new(clear_cmd::ClearCommand));
    shell.register(Box::new(echo::EchoCommand));

    shell.register(Box::new(ls::LsCommand::new(vfs.clone())));
    shell.register(Box::new(cd::CdCommand::new(vfs.clone())));
    shell.register(Box::new(pwd::PwdCommand::new(vfs.clone())));
    shell.register(Box::new(cat::CatCommand::new(vfs.clone())));
    shell.register(Box::new(mkdir::MkdirCommand::new(vfs.clone())));
    shell.register(Box::new(touch::TouchCommand::new(vfs.clone())));
    shell.register(Box::new(rm::RmCommand::new(vfs.clone())));
    shell.register(Box::new(rmdir_cmd::RmdirCommand::new(vfs.clone())));
    shell.register(Box::new(cp::CpCommand::new(vfs.clone())));
    shell.register(Box::new(mv::MvCommand::new(vfs.clone())));
    shell.register(Box::new(write_cmd::WriteCommand::new(vfs.clone())));
    shell.register(Box::new(stat_cmd::StatCommand::new(vfs.clone())));
    shell.register(Box::new(chmod::ChmodCommand::new(vfs.clone())));
    shell.register(Box::new(find::FindCommand::new(vfs.clone())));
    shell.register(Box::new(tree_cmd::TreeCommand::new(vfs.clone())));

    shell.register(Box::new(history_cmd::HistoryCommand));
    shell.register(Box::new(alias_cmd::AliasCommand));
    shell.register(Box::new(unalias_cmd::UnaliasCommand));
    shell.register(Box::new(env::ExportCommand));
    shell.register(Box::new(env::EnvCommand));
    shell.register(Box::new(date::DateCommand));
    shell.register(Box::new(whoami_cmd::WhoamiCommand));
    shell.register(Box::new(hostname_cmd::HostnameCommand::new(vfs.clone(), hostname)));
    shell.register(Box::new(neofetch_cmd::NeofetchCommand::new(vfs.clone(), hostname)));
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::register_builtins;
    use crate::fs::{defaults, SharedVfs, VirtualFileSystem};
    use crate::shell::Shell;

    /// A shell with every builtin over a default tree for `guest`.
    pub fn shell() -> (Shell, SharedVfs) {
        let mut vfs = VirtualFileSystem::new();
        defaults::populate(&mut vfs, "/home/guest", "termos").unwrap();
        let vfs = vfs.into_shared();

        let mut shell = Shell::new();
        shell.set_variable("USER", "guest");
        shell.set_variable("HOME", "/home/guest");
        register_builtins(&mut shell, &vfs, "termos");
        (shell, vfs)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::shell;

    #[test]
    fn test_builtins_registered_in_order() {
        let (shell, _) = shell();
        let names = shell.commands().names();
        assert_eq!(names.first(), Some(&"help"));
        for name in ["ls", "cd", "cat", "write", "tree", "export", "hostname", "neofetch"] {
            assert!(names.contains(&name), "missing {}", name);
        }
        assert_eq!(shell.get_suggestions("c"), vec!["clear", "cd", "cat", "cp", "chmod"]);
    }
}
