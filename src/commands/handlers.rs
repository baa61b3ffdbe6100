use crate::auth::Caller;
use crate::commands::parser::Command;
use crate::script::AsyncJsonStoreService;
use crate::storage::JsonStore;

use log::{debug, error};
use serde_json::Value;

pub const USAGE: &str = "usage: jsonstore [--config <file>] <command>
commands:
  put <id> <json> [--force]   store a JSON value, refusing to overwrite unless forced
  get <id>                    print the stored value; prints null and exits 1 when nothing is stored
  exists <id>                 print whether a value is stored";

// What to print and the exit code to leave with
#[derive(Debug, PartialEq)]
pub struct CommandOutput {
    pub text: String,
    pub exit_code: u8,
}

impl CommandOutput {
    fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit_code: 0,
        }
    }

    fn absent() -> Self {
        Self {
            text: "null".to_string(),
            exit_code: 1,
        }
    }

    fn usage_error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit_code: 2,
        }
    }
}

// Run a single command against the store
pub async fn handle_command<S: JsonStore + 'static>(
    service: &AsyncJsonStoreService<S>,
    caller: &Caller,
    command: Command,
) -> CommandOutput {
    debug!("Running {:?} as {}", command, caller.name());
    match command {
        Command::Put {
            id,
            json,
            force_overwrite,
        } => handle_cmd_put(service, caller, &id, &json, force_overwrite).await,
        Command::Get(id) => handle_cmd_get(service, caller, &id).await,
        Command::Exists(id) => handle_cmd_exists(service, caller, &id).await,
        Command::Help => CommandOutput::success(USAGE),
        Command::Unknown(raw) => {
            CommandOutput::usage_error(format!("unknown command: {}\n{}", raw, USAGE))
        }
    }
}

// Command handler for put
async fn handle_cmd_put<S: JsonStore + 'static>(
    service: &AsyncJsonStoreService<S>,
    caller: &Caller,
    id: &str,
    json: &str,
    force_overwrite: bool,
) -> CommandOutput {
    let value: Value = match serde_json::from_str(json) {
        Ok(value) => value,
        Err(e) => {
            error!("Value for id {} is not valid JSON: {}", id, e);
            return CommandOutput::usage_error(format!("invalid JSON value: {}\n{}", e, USAGE));
        }
    };
    let written = service
        .persist_as_json(caller, Some(value), id, force_overwrite)
        .await;
    CommandOutput::success(written.to_string())
}

// Command handler for get
async fn handle_cmd_get<S: JsonStore + 'static>(
    service: &AsyncJsonStoreService<S>,
    caller: &Caller,
    id: &str,
) -> CommandOutput {
    match service.get_from_json_store(caller, id).await {
        Some(value) => CommandOutput::success(value.to_string()),
        None => CommandOutput::absent(),
    }
}

// Command handler for exists
async fn handle_cmd_exists<S: JsonStore + 'static>(
    service: &AsyncJsonStoreService<S>,
    caller: &Caller,
    id: &str,
) -> CommandOutput {
    let found = service.exists(caller, id, false).await;
    CommandOutput::success(found.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::JsonStoreService;
    use crate::storage::PermdirJsonStore;

    fn service(dir: &tempfile::TempDir) -> AsyncJsonStoreService<PermdirJsonStore> {
        let store = PermdirJsonStore::new(dir.path().to_path_buf());
        AsyncJsonStoreService::new(JsonStoreService::new(store))
    }

    #[tokio::test]
    async fn test_put_get_exists_commands() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);
        let cli = Caller::programming("cli");

        let put = Command::Put {
            id: "notes/today".into(),
            json: r#"{"done":false}"#.into(),
            force_overwrite: false,
        };
        assert_eq!(
            handle_command(&service, &cli, put).await,
            CommandOutput::success("true")
        );
        assert_eq!(
            handle_command(&service, &cli, Command::Get("notes/today".into())).await,
            CommandOutput::success(r#"{"done":false}"#)
        );
        assert_eq!(
            handle_command(&service, &cli, Command::Exists("notes/today".into())).await,
            CommandOutput::success("true")
        );
        assert_eq!(
            handle_command(&service, &cli, Command::Get("notes/other".into())).await,
            CommandOutput::absent()
        );
    }

    #[tokio::test]
    async fn test_stored_null_differs_from_absent() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);
        let cli = Caller::programming("cli");

        let put = Command::Put {
            id: "empty".into(),
            json: "null".into(),
            force_overwrite: false,
        };
        assert_eq!(
            handle_command(&service, &cli, put).await,
            CommandOutput::success("true")
        );
        let stored = handle_command(&service, &cli, Command::Get("empty".into())).await;
        let missing = handle_command(&service, &cli, Command::Get("missing".into())).await;
        assert_eq!(stored, CommandOutput::success("null"));
        assert_eq!(missing.text, "null");
        assert_eq!(missing.exit_code, 1);
    }

    #[tokio::test]
    async fn test_invalid_json_is_a_usage_error() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);
        let cli = Caller::programming("cli");

        let put = Command::Put {
            id: "k".into(),
            json: "{not json".into(),
            force_overwrite: true,
        };
        let output = handle_command(&service, &cli, put).await;
        assert_eq!(output.exit_code, 2);
        assert!(output.text.starts_with("invalid JSON value"));
        assert!(output.text.ends_with(USAGE));
    }

    #[tokio::test]
    async fn test_unknown_command_prints_usage() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);
        let output = handle_command(
            &service,
            &Caller::programming("cli"),
            Command::Unknown("drop all".into()),
        )
        .await;
        assert_eq!(output.exit_code, 2);
        assert!(output.text.contains(USAGE));
    }
}
