//! jsonstore - Entry Point
//!
//! Command line access to a permanent-directory JSON store.

use log::{error, info};
use std::process::ExitCode;

use permdir_jsonstore::auth::Caller;
use permdir_jsonstore::commands::{handle_command, parse_invocation};
use permdir_jsonstore::utils::init_logging;
use permdir_jsonstore::{AsyncJsonStoreService, JsonStoreService, PermdirJsonStore, StoreConfig};

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let invocation = parse_invocation(&args);

    let config = match StoreConfig::load(invocation.config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            init_logging("info");
            error!("Failed to load configuration: {}", e);
            return ExitCode::from(1);
        }
    };
    init_logging(&config.log_level);

    let folder = config.store_folder.clone();
    let store = PermdirJsonStore::with_folder(config, folder);
    info!("Using JSON store at {}", store.root().display());

    let service = AsyncJsonStoreService::new(JsonStoreService::new(store));
    // the local operator is trusted
    let caller = Caller::programming("cli");

    let output = handle_command(&service, &caller, invocation.command).await;
    // usage errors go to stderr, results (including absent values) to stdout
    if output.exit_code == 2 {
        eprintln!("{}", output.text);
    } else {
        println!("{}", output.text);
    }
    ExitCode::from(output.exit_code)
}
