use std::path::PathBuf;

// Store commands accepted by the jsonstore binary
#[derive(Debug, PartialEq)]
pub enum Command {
    Put {
        id: String,
        json: String,
        force_overwrite: bool,
    },
    Get(String),
    Exists(String),
    Help,
    Unknown(String),
}

// Global options plus the command to run
#[derive(Debug, PartialEq)]
pub struct Invocation {
    pub config_path: Option<PathBuf>,
    pub command: Command,
}

// Parse the process arguments (without the program name)
pub fn parse_invocation<S: AsRef<str>>(args: &[S]) -> Invocation {
    let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
    match args.as_slice() {
        ["--config", path, rest @ ..] => Invocation {
            config_path: Some(PathBuf::from(path)),
            command: parse_command(rest),
        },
        rest => Invocation {
            config_path: None,
            command: parse_command(rest),
        },
    }
}

// Parse a command and its arguments into a Command
pub fn parse_command(args: &[&str]) -> Command {
    let Some((cmd, rest)) = args.split_first() else {
        return Command::Help;
    };

    match (cmd.to_ascii_lowercase().as_str(), rest) {
        ("put", [id, json]) => Command::Put {
            id: id.to_string(),
            json: json.to_string(),
            force_overwrite: false,
        },
        ("put", [id, json, "--force"]) | ("put", ["--force", id, json]) => Command::Put {
            id: id.to_string(),
            json: json.to_string(),
            force_overwrite: true,
        },
        ("get", [id]) => Command::Get(id.to_string()),
        ("exists", [id]) => Command::Exists(id.to_string()),
        ("help" | "--help" | "-h", []) => Command::Help,
        _ => Command::Unknown(args.join(" ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(parse_command(&["get", "a/b"]), Command::Get("a/b".to_string()));
        assert_eq!(
            parse_command(&["EXISTS", "a/b"]),
            Command::Exists("a/b".to_string())
        );
        assert_eq!(parse_command(&[]), Command::Help);
        assert_eq!(parse_command(&["--help"]), Command::Help);
    }

    #[test]
    fn test_parse_put() {
        assert_eq!(
            parse_command(&["put", "a/b", "{\"x\":1}"]),
            Command::Put {
                id: "a/b".to_string(),
                json: "{\"x\":1}".to_string(),
                force_overwrite: false,
            }
        );
        let forced = Command::Put {
            id: "a".to_string(),
            json: "2".to_string(),
            force_overwrite: true,
        };
        assert_eq!(parse_command(&["put", "a", "2", "--force"]), forced);
        assert_eq!(parse_command(&["put", "--force", "a", "2"]), forced);
    }

    #[test]
    fn test_unknown_commands() {
        assert_eq!(
            parse_command(&["delete", "a"]),
            Command::Unknown("delete a".to_string())
        );
        assert_eq!(parse_command(&["get"]), Command::Unknown("get".to_string()));
        assert_eq!(
            parse_command(&["put", "a"]),
            Command::Unknown("put a".to_string())
        );
    }

    #[test]
    fn test_parse_invocation_with_config() {
        let invocation = parse_invocation(&["--config", "store.toml", "exists", "k"]);
        assert_eq!(invocation.config_path, Some(PathBuf::from("store.toml")));
        assert_eq!(invocation.command, Command::Exists("k".to_string()));

        let invocation = parse_invocation(&["get", "k"]);
        assert_eq!(invocation.config_path, None);
        assert_eq!(invocation.command, Command::Get("k".to_string()));
    }
}
