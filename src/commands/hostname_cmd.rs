use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandError};
use crate::fs::SharedVfs;

const HOSTNAME_FILE: &str = "/etc/hostname";

pub struct HostnameCommand {
    vfs: SharedVfs,
    fallback: String,
}

impl HostnameCommand {
    pub fn new(vfs: SharedVfs, fallback: impl Into<String>) -> Self {
        Self {
            vfs,
            fallback: fallback.into(),
        }
    }
}

#[async_trait]
impl Command for HostnameCommand {
    fn name(&self) -> &str {
        "hostname"
    }

    fn help(&self) -> &str {
        "hostname - Display the system hostname"
    }

    async fn execute(&self, _ctx: CommandContext<'_>) -> Result<String, CommandError> {
        Ok(current_hostname(&self.vfs, &self.fallback).await)
    }
}

/// First line of `/etc/hostname`, or `fallback` when it is missing or blank.
pub(crate) async fn current_hostname(vfs: &SharedVfs, fallback: &str) -> String {
    let name = vfs
        .read()
        .await
        .read_file(HOSTNAME_FILE)
        .map(|content| content.trim().to_string())
        .unwrap_or_default();
    if name.is_empty() {
        fallback.to_string()
    } else {
        name
    }
}
