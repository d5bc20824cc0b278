use moviesinfo_core::{logging, FetchError};

mod cli;

use crate::cli::CliCommand;

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible.
    logging::init();

    if let Err(err) = CliCommand::run_from_args().await {
        eprintln!("movies error: {:#}", err);
        let not_found = err
            .downcast_ref::<FetchError>()
            .is_some_and(FetchError::is_not_found);
        std::process::exit(if not_found { 2 } else { 1 });
    }
}
