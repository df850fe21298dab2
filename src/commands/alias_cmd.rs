use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandError};

pub struct AliasCommand;

#[async_trait]
impl Command for AliasCommand {
    fn name(&self) -> &str {
        "alias"
    }

    fn help(&self) -> &str {
        "alias [name=value] - Define or list aliases"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<String, CommandError> {
        if ctx.args.is_empty() {
            let lines: Vec<String> = ctx
                .session
                .aliases
                .iter()
                .map(|(name, value)| format!("alias {}='{}'", name, value))
                .collect();
            return Ok(lines.join("\n"));
        }

        let definition = ctx.args.join(" ");
        match definition.split_once('=') {
            Some((name, value)) if !name.is_empty() => {
                ctx.session.aliases.insert(name.to_string(), value.to_string());
                Ok(String::new())
            }
            Some(_) => Err(CommandError::Usage("alias [name=value]".to_string())),
            None => match ctx.session.aliases.get(&definition) {
                Some(value) => Ok(format!("alias {}='{}'", definition, value)),
                None => Err(CommandError::Failed(format!("{}: not found", definition))),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::test_support::shell;

    #[tokio::test]
    async fn test_alias_define_and_use() {
        let (mut shell, _) = shell();
        assert_eq!(shell.run_line("alias here='pwd'").await, "");
        assert_eq!(shell.run_line("here").await, "/home/guest");

        assert_eq!(shell.run_line("alias greet=echo hi there").await, "");
        assert_eq!(shell.run_line("greet").await, "hi there");
        assert_eq!(shell.run_line("alias greet").await, "alias greet='echo hi there'");
    }

    #[tokio::test]
    async fn test_alias_list_and_missing() {
        let (mut shell, _) = shell();
        shell.run_line("alias a=pwd").await;
        shell.run_line("alias b=ls").await;
        assert_eq!(shell.run_line("alias").await, "alias a='pwd'\nalias b='ls'");
        assert_eq!(shell.run_line("alias zz").await, "tsh: alias: zz: not found");
        assert_eq!(shell.run_line("alias =x").await, "tsh: alias: usage: alias [name=value]");
    }
}
