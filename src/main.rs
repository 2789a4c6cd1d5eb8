//! iconmaker - builds ICO and ICNS icon bundles from PNG and GIF images.
//!
//! Prints the path of the bundle on success; exits non-zero with a message
//! naming the failed stage otherwise.

use std::error::Error as _;
use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match iconmaker::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);

            let mut cause = e.source();
            while let Some(err) = cause {
                eprintln!("  caused by: {}", err);
                cause = err.source();
            }

            for suggestion in e.recovery_suggestions() {
                eprintln!("  hint: {}", suggestion);
            }

            e.exit_code()
        }
    };

    process::exit(exit_code);
}
