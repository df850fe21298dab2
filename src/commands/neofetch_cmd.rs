use std::time::Instant;

use async_trait::async_trait;

use crate::commands::hostname_cmd::current_hostname;
use crate::commands::{Command, CommandContext, CommandError};
use crate::fs::SharedVfs;
use crate::shell::SHELL_NAME;

const OS_NAME: &str = "TermOS";

/// Summary of the running system. Uptime counts from registration.
pub struct NeofetchCommand {
    vfs: SharedVfs,
    fallback_hostname: String,
    started: Instant,
}

impl NeofetchCommand {
    pub fn new(vfs: SharedVfs, fallback_hostname: impl Into<String>) -> Self {
        Self {
            vfs,
            fallback_hostname: fallback_hostname.into(),
            started: Instant::now(),
        }
    }
}

#[async_trait]
impl Command for NeofetchCommand {
    fn name(&self) -> &str {
        "neofetch"
    }

    fn help(&self) -> &str {
        "neofetch - Display system information"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<String, CommandError> {
        let vars = &ctx.session.variables;
        let user = vars.get("USER").map(String::as_str).unwrap_or("guest");
        let shell = vars
            .get("SHELL")
            .cloned()
            .unwrap_or_else(|| format!("/bin/{}", SHELL_NAME));
        let host = current_hostname(&self.vfs, &self.fallback_hostname).await;

        let title = format!("{}@{}", user, host);
        let lines = [
            "-".repeat(title.chars().count()),
            format!("OS: {} v{}", OS_NAME, env!("CARGO_PKG_VERSION")),
            format!("Shell: {}", shell),
            format!("Uptime: {}s", self.started.elapsed().as_secs()),
            format!("Commands: {}", ctx.commands.len()),
        ];
        Ok(std::iter::once(title).chain(lines).collect::<Vec<_>>().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::test_support::shell;

    #[tokio::test]
    async fn test_neofetch_summary() {
        let (mut shell, vfs) = shell();
        shell.set_variable("SHELL", "/bin/tsh");
        let out = shell.run_line("neofetch").await;
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "guest@termos");
        assert_eq!(lines[1], "------------");
        assert_eq!(lines[2], "OS: TermOS v0.1.0");
        assert_eq!(lines[3], "Shell: /bin/tsh");
        assert!(lines[4].starts_with("Uptime: ") && lines[4].ends_with('s'));
        assert_eq!(lines[5], format!("Commands: {}", shell.commands().len()));

        shell.set_variable("USER", "alice");
        vfs.write().await.write_file("/etc/hostname", "box\n").unwrap();
        assert!(shell.run_line("neofetch").await.starts_with("alice@box\n"));
    }
}
