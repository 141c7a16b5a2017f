//! `creature-browser` — browse creatures from a PokeAPI-compatible endpoint.
//!
//! **Usage:**
//! ```text
//! creature-browser [--base-url <url>] [--timeout-ms <ms>] [--start-id <id>] [--cancel-superseded]
//! ```
//!
//! Commands are read from stdin, one per line:
//!
//! | Input            | Intent                      |
//! |------------------|-----------------------------|
//! | `<number>`       | jump to that identifier     |
//! | `n`, `next`      | next identifier             |
//! | `p`, `prev`      | previous identifier         |
//! | `r`, `reset`     | back to the start id        |
//! | `f`, `find`      | fetch the current id again  |
//! | `c`, `clear`     | clear the view              |
//! | `v <variant>`    | select a sprite variant     |
//! | `variants`       | list the variants           |
//! | `q`, `quit`      | exit                        |

use std::time::Duration;

use clap::Parser;
use creature_browser::{
    Browser, BrowserConfig, HttpConfig, HttpProvider, Phase, Resolution, VariantKey, View,
};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Interactive creature browser.
#[derive(Parser)]
#[command(name = "creature-browser", about = "Browse creatures by id")]
struct Args {
    /// API root; `/pokemon/{id}` is appended. Falls back to CREATURE_API_URL.
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in milliseconds. Falls back to CREATURE_API_TIMEOUT_MS.
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Identifier shown first and restored by `reset`.
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    start_id: i64,

    /// Abort superseded requests instead of discarding their results.
    #[arg(long)]
    cancel_superseded: bool,
}

enum Command {
    Jump(String),
    Next,
    Previous,
    Reset,
    Find,
    Clear,
    Variant(String),
    ListVariants,
    Quit,
    Unknown(String),
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };
        Some(match head {
            "n" | "next" => Command::Next,
            "p" | "prev" | "previous" => Command::Previous,
            "r" | "reset" => Command::Reset,
            "f" | "find" => Command::Find,
            "c" | "clear" => Command::Clear,
            "v" | "variant" => Command::Variant(rest.to_string()),
            "variants" => Command::ListVariants,
            "q" | "quit" | "exit" => Command::Quit,
            _ if head.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '+') => {
                Command::Jump(line.to_string())
            }
            _ => Command::Unknown(line.to_string()),
        })
    }
}

fn render(view: &View) {
    let status = match view.phase {
        Phase::Empty => "empty".to_string(),
        Phase::Loading(id) => format!("loading #{}", id),
        Phase::Loaded(id) => format!("#{}", id),
    };
    match &view.creature {
        Some(creature) => println!(
            "[{}] {} ({}) {} {}",
            view.id_text,
            creature.name,
            status,
            view.selected.label(),
            creature.reference.as_deref().unwrap_or("<no sprite>")
        ),
        None => println!("[{}] ({})", view.id_text, status),
    }
}

fn http_config(args: &Args) -> Result<HttpConfig, Box<dyn std::error::Error>> {
    let mut config = HttpConfig::from_env()?;
    if let Some(url) = &args.base_url {
        config.base_url = url.clone();
    }
    if let Some(ms) = args.timeout_ms {
        config.timeout = Duration::from_millis(ms);
    }
    Ok(config)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let provider = HttpProvider::new(http_config(&args)?)?;
    log::info!("using {}", provider.base_url());

    let config = BrowserConfig::default()
        .with_default_id(args.start_id)
        .cancel_superseded(args.cancel_superseded);
    let mut browser = Browser::new(provider, config);
    render(&browser.view());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let Some(command) = Command::parse(&line) else { continue };
                match command {
                    Command::Jump(text) => {
                        if !browser.set_id_from_text(&text) {
                            println!("not a number: {}", text);
                        }
                    }
                    Command::Next => {
                        browser.next();
                    }
                    Command::Previous => {
                        browser.previous();
                    }
                    Command::Reset => browser.reset(),
                    Command::Find => browser.refresh(),
                    Command::Clear => browser.clear(),
                    Command::Variant(text) => {
                        if !browser.select_variant_text(&text) {
                            println!("unknown variant: {}", text);
                        }
                    }
                    Command::ListVariants => {
                        for key in VariantKey::ALL {
                            println!("  {:<14} {}", key.as_str(), key.label());
                        }
                        continue;
                    }
                    Command::Quit => break,
                    Command::Unknown(text) => {
                        println!("unknown command: {}", text);
                        continue;
                    }
                }
                render(&browser.view());
            }
            resolution = browser.next_completion() => {
                if let Some(Resolution::Applied | Resolution::Failed) = resolution {
                    render(&browser.view());
                }
            }
        }
    }

    Ok(())
}
