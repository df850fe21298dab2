// src/commands/env/mod.rs
use async_trait::async_trait;
use lazy_static::lazy_static;
use regex_lite::Regex;

use crate::commands::{Command, CommandContext, CommandError};

lazy_static! {
    static ref NAME_RE: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

fn render(ctx: &CommandContext<'_>) -> String {
    ctx.session
        .variables
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join("\n")
}

pub struct EnvCommand;

#[async_trait]
impl Command for EnvCommand {
    fn name(&self) -> &str {
        "env"
    }

    fn help(&self) -> &str {
        "env - List shell variables"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<String, CommandError> {
        Ok(render(&ctx))
    }
}

pub struct ExportCommand;

#[async_trait]
impl Command for ExportCommand {
    fn name(&self) -> &str {
        "export"
    }

    fn help(&self) -> &str {
        "export NAME=VALUE - Set a shell variable"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<String, CommandError> {
        if ctx.args.is_empty() {
            return Ok(render(&ctx));
        }

        let assignment = ctx.args.join(" ");
        let (name, value) = assignment
            .split_once('=')
            .ok_or_else(|| CommandError::Usage("export NAME=VALUE".to_string()))?;
        if !NAME_RE.is_match(name) {
            return Err(CommandError::InvalidArgument(format!("not a valid identifier: {}", name)));
        }
        ctx.session.variables.insert(name.to_string(), value.to_string());
        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::test_support::shell;

    #[tokio::test]
    async fn test_env_lists_variables() {
        let (mut shell, _) = shell();
        let out = shell.run_line("env").await;
        assert!(out.lines().any(|l| l == "USER=guest"));
        assert!(out.lines().any(|l| l == "HOME=/home/guest"));
    }

    #[tokio::test]
    async fn test_export_then_expand() {
        let (mut shell, _) = shell();
        assert_eq!(shell.run_line("export GREETING=hello world").await, "");
        assert_eq!(shell.get_variable("GREETING"), Some("hello world"));
        assert_eq!(shell.run_line("echo $GREETING").await, "hello world");

        shell.run_line("export USER=bob").await;
        assert_eq!(shell.run_line("echo $USER").await, "bob");
    }

    #[tokio::test]
    async fn test_export_errors() {
        let (mut shell, _) = shell();
        assert_eq!(
            shell.run_line("export 1X=2").await,
            "tsh: export: not a valid identifier: 1X"
        );
        assert_eq!(shell.run_line("export NOVALUE").await, "tsh: export: usage: export NAME=VALUE");
    }
}
