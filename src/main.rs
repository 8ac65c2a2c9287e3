// src/main.rs

use std::process::ExitCode;

use get_locale::{cli, logging, start};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = cli::parse();
    let outcome = start(&args, logging::init_logging).await;

    match outcome.to_json(args.pretty) {
        Ok(doc) => {
            println!("{doc}");
            ExitCode::from(outcome.exit_code())
        }
        Err(err) => {
            eprintln!("get_locale error: failed to serialise result: {err}");
            ExitCode::FAILURE
        }
    }
}
