//! `nbabot shell`: chat-style REPL.
//!
//! Lines are handled exactly like chat messages: only lines starting with
//! the bot prefix are answered.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::commands::Bot;
use crate::error::Result;
use crate::output::{self, OutputMode};

fn history_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|d| d.join("nbabot").join("history.txt"))
}

pub async fn run(bot: &Bot, mode: OutputMode) -> Result<()> {
    let prefix = bot.prefix().to_string();
    println!("\x1b[36mNBABot Interactive Shell\x1b[0m");
    println!("Type commands with the '{prefix}' prefix. E.g.: {prefix}season james harden 2018 playoffs");
    println!("Type '{prefix}help' for available commands, 'exit' to quit.");
    println!();

    let history = history_path();
    let mut rl = DefaultEditor::new()?;
    if let Some(ref path) = history {
        let _ = rl.load_history(path);
    }

    loop {
        match rl.readline("\x1b[36mnba>\x1b[0m ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                if matches!(line, "exit" | "quit" | "q") {
                    break;
                }

                match bot.handle_line(line).await {
                    Some(reply) => {
                        if let Err(e) = output::print_reply(&reply, mode) {
                            output::print_error(&format!("{e}"));
                        }
                    }
                    None => println!("(not a command; start the line with '{prefix}')"),
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                output::print_error(&format!("readline error: {e}"));
                break;
            }
        }
    }

    if let Some(ref path) = history {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = rl.save_history(path);
    }

    Ok(())
}
