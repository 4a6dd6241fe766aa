//! Command parser for the : command system

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Navigation commands
    GoTo(String),
    Panel(String),

    // Session commands
    Login(String),
    Logout,
    WhoAmI,

    // Shell commands
    Help,
    Quit,

    // Unknown command
    Unknown(String),
}

/// Parse a command string (without the leading :)
///
/// Verbs are case-insensitive; arguments are passed on verbatim.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = parts
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    match cmd.to_lowercase().as_str() {
        // Navigation
        "goto" | "go" | "view" => {
            if let Some(view) = args {
                Command::GoTo(view)
            } else {
                Command::Unknown(input.to_string())
            }
        }
        "panel" | "tab" => {
            if let Some(panel) = args {
                Command::Panel(panel)
            } else {
                Command::Unknown(input.to_string())
            }
        }

        // Session
        "login" => {
            if let Some(role) = args {
                Command::Login(role)
            } else {
                Command::Unknown(input.to_string())
            }
        }
        "logout" | "signout" => Command::Logout,
        "whoami" | "who" => Command::WhoAmI,

        // Shell
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,

        _ => Command::Unknown(input.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigation_commands() {
        assert_eq!(parse_command("goto home"), Command::GoTo("home".to_string()));
        assert_eq!(parse_command("go warehouse"), Command::GoTo("warehouse".to_string()));
        assert_eq!(parse_command("view community"), Command::GoTo("community".to_string()));
        assert_eq!(parse_command("tab supplier"), Command::Panel("supplier".to_string()));
        assert_eq!(
            parse_command("  panel   dashboard "),
            Command::Panel("dashboard".to_string())
        );
    }

    #[test]
    fn test_parse_keeps_argument_case() {
        assert_eq!(parse_command("GOTO Home"), Command::GoTo("Home".to_string()));
        assert_eq!(parse_command("login Admin"), Command::Login("Admin".to_string()));
    }

    #[test]
    fn test_parse_session_commands() {
        assert_eq!(parse_command("login supplier"), Command::Login("supplier".to_string()));
        assert_eq!(parse_command("logout"), Command::Logout);
        assert_eq!(parse_command("signout"), Command::Logout);
        assert_eq!(parse_command("whoami"), Command::WhoAmI);
    }

    #[test]
    fn test_parse_shell_commands() {
        assert_eq!(parse_command("help"), Command::Help);
        assert_eq!(parse_command("q"), Command::Quit);
        assert_eq!(parse_command("exit"), Command::Quit);
    }

    #[test]
    fn test_parse_missing_argument() {
        assert_eq!(parse_command("goto"), Command::Unknown("goto".to_string()));
        assert_eq!(parse_command("login "), Command::Unknown("login".to_string()));
        assert_eq!(parse_command("panel"), Command::Unknown("panel".to_string()));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse_command("notacommand"),
            Command::Unknown("notacommand".to_string())
        );
    }
}
