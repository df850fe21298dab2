use std::io::{BufRead, IsTerminal};

use clap::Parser;
use termos::{System, SystemOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "termos")]
#[command(about = "A terminal-first virtual desktop shell over an in-memory filesystem")]
#[command(version)]
struct Cli {
    /// Run a single command line
    #[arg(short = 'c')]
    command: Option<String>,

    /// TOML file with startup options
    #[arg(long = "config")]
    config: Option<String>,

    /// Initial working directory
    #[arg(long = "cwd")]
    cwd: Option<String>,

    /// User name (sets $USER and the home directory)
    #[arg(long = "user")]
    user: Option<String>,

    /// Load a filesystem snapshot before running
    #[arg(long = "import")]
    import: Option<String>,

    /// Print the filesystem snapshot after running
    #[arg(long = "export")]
    export: bool,

    /// Print one JSON object per line (input, output)
    #[arg(long = "json")]
    json: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut options = match &cli.config {
        Some(path) => match SystemOptions::load(path) {
            Ok(options) => options,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => SystemOptions::default(),
    };
    if let Some(user) = cli.user {
        options.user = user;
    }
    if let Some(cwd) = cli.cwd {
        options.cwd = Some(cwd);
    }

    let mut system = match System::new(options) {
        Ok(system) => system,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(path) = &cli.import {
        let loaded = match std::fs::read_to_string(path) {
            Ok(json) => system.import_filesystem(&json).await.map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };
        if let Err(e) = loaded {
            eprintln!("Error: Cannot import snapshot {}: {}", path, e);
            std::process::exit(1);
        }
    }

    let lines: Vec<String> = match cli.command {
        Some(line) => vec![line],
        None => {
            let stdin = std::io::stdin();
            if stdin.is_terminal() {
                eprintln!("Error: No input provided. Use -c 'command' or pipe lines via stdin.");
                std::process::exit(1);
            }
            stdin.lock().lines().map_while(Result::ok).collect()
        }
    };

    for line in &lines {
        let output = system.run(line).await;
        if cli.json {
            println!("{}", serde_json::json!({ "input": line, "output": output }));
        } else if !output.is_empty() {
            println!("{}", output);
        }
    }

    if cli.export {
        match system.export_filesystem().await {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
