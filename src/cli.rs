//! Interactive text loop.
//!
//! Reads lines from stdin and runs one pipeline per line. `exit`/`quit`
//! (case-insensitive), EOF, and Ctrl-C all leave the loop; failures are
//! printed as `Error:` lines without terminating it.

use crate::error::Result;
use crate::router::Router;
use crate::RouterError;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Run the interactive loop until the user quits.
pub async fn run(router: Router) -> Result<()> {
    println!("Chat router (type 'exit' to quit)");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("\nYou: ");
        std::io::stdout()
            .flush()
            .map_err(|e| RouterError::Other(e.to_string()))?;

        let line = tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                println!("\nExiting.");
                break;
            }
            line = lines.next_line() => {
                line.map_err(|e| RouterError::Other(e.to_string()))?
            }
        };

        let Some(line) = line else {
            // EOF
            println!("\nExiting.");
            break;
        };

        let input = line.trim();
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            println!("Exiting.");
            break;
        }
        if input.is_empty() {
            continue;
        }

        match router.run(input).await {
            Ok(state) => {
                println!("Intent: {}", state.intent);
                if let Some(city) = &state.city {
                    println!("City: {city}");
                }
                if let Some(topic) = &state.topic {
                    println!("Topic: {topic}");
                }
                println!(
                    "Assistant: {}",
                    state.final_answer.as_deref().unwrap_or("No answer generated.")
                );
            }
            Err(err) => println!("Error: {err}"),
        }
    }

    Ok(())
}
