use std::path::PathBuf;

use crate::models::{Credentials, SnippetId};

/// One line of user input, parsed.
#[derive(Debug, Clone)]
pub enum Command {
    Login(Credentials),
    Logout,
    /// The login/logout button: whichever applies to the current session.
    Auth(Credentials),
    Snippets,
    Select(String),
    Open(SnippetId),
    Title(String),
    /// Start multi-line code entry, ended by a lone [`END_OF_CODE`].
    Code,
    Load(PathBuf),
    Show,
    Save,
    Delete,
    Run,
    Output,
    Status,
    Help,
    Quit,
}

/// Terminates `code` entry.
pub const END_OF_CODE: &str = ".";

pub const HELP: &str = "\
Commands:
  login <user> <password>   log in and load your snippets
  logout                    end the session
  auth <user> <password>    log in, or log out when already logged in
  snippets                  reload and list your snippets
  select <id|0>             load a snippet into the editor (0 clears it)
  open <id>                 fetch a snippet fresh from the server and select it
  title <text>              set the snippet name
  code                      enter code, finish with a line containing only '.'
  load <file>               read code from a file
  show                      print the editor
  save                      create, or update the selected snippet
  delete                    delete the selected snippet
  run                       execute the editor code
  output                    print the last result and console
  status                    print session and selection
  help                      this text
  quit                      leave";

fn credentials(args: &[&str], usage: &str) -> Result<Credentials, String> {
    match args {
        [username, password] => Ok(Credentials::new(*username, *password)),
        _ => Err(usage.to_string()),
    }
}

impl Command {
    /// Parses a non-empty input line. The error is a usage hint for the user.
    pub fn parse(line: &str) -> Result<Command, String> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };
        let args: Vec<&str> = rest.split_whitespace().collect();

        let command = match name.to_lowercase().as_str() {
            "login" => Command::Login(credentials(&args, "Usage: login <user> <password>")?),
            "logout" => Command::Logout,
            "auth" => Command::Auth(credentials(&args, "Usage: auth <user> <password>")?),
            "snippets" | "ls" => Command::Snippets,
            "select" => match args.as_slice() {
                [value] => Command::Select(value.to_string()),
                _ => return Err("Usage: select <id|0>".to_string()),
            },
            "open" => match args.as_slice() {
                [value] => Command::Open(
                    value
                        .parse()
                        .map_err(|_| format!("Not a snippet id: {}", value))?,
                ),
                _ => return Err("Usage: open <id>".to_string()),
            },
            // The title keeps its inner spacing.
            "title" => Command::Title(rest.to_string()),
            "code" => Command::Code,
            "load" => {
                if rest.is_empty() {
                    return Err("Usage: load <file>".to_string());
                }
                Command::Load(PathBuf::from(rest))
            }
            "show" => Command::Show,
            "save" => Command::Save,
            "delete" | "rm" => Command::Delete,
            "run" => Command::Run,
            "output" => Command::Output,
            "status" => Command::Status,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(format!("Unknown command '{}'. Type 'help'.", other)),
        };
        Ok(command)
    }
}
