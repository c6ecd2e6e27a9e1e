//! `guessmoji-suggest` - run one JSON command from stdin
//!
//! ```text
//! echo '{"cmd":"Suggest","query":"apply","candidates":["apple","grape"]}' | guessmoji-suggest
//! {"status":"Success","result":{"count":1,"matches":["apple"]}}
//! ```

use std::io::{self, Read};

use guessmoji::command::{run_command, Command, Response};
use guessmoji::config::filter_config_from_env;
use guessmoji::Result;

fn execute(input: &str) -> Result<serde_json::Value> {
    let defaults = filter_config_from_env()?;
    let command: Command = serde_json::from_str(input)?;
    run_command(command, &defaults)
}

fn main() {
    guessmoji::tracing::init_with_filter("warn");

    let mut input = String::new();
    let response: Response = match io::stdin().read_to_string(&mut input) {
        Ok(_) => execute(&input).into(),
        Err(e) => Response::Error {
            message: format!("failed to read input: {}", e),
        },
    };

    if let Response::Error { message } = &response {
        tracing::warn!(%message, "command failed");
    }

    match serde_json::to_string(&response) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            tracing::error!(error = %e, "failed to encode response");
            std::process::exit(1);
        }
    }
}
