//! Interactive terminal front-end.
//!
//! Reads one command per line, runs it against the backend and prints the
//! outcome. Commands are handled strictly one after another.

mod command;
mod render;

pub use command::{Command, END_OF_CODE, HELP};
pub use render::Renderer;

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::debug;

use crate::api::PlaygroundApi;
use crate::controllers::{runner, session, snippets, ActionResult, Notice};
use crate::state::AppState;

/// Whether the loop should keep reading.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell {
    api: Arc<dyn PlaygroundApi>,
    state: AppState,
    renderer: Renderer,
}

impl Shell {
    pub fn new(api: Arc<dyn PlaygroundApi>, renderer: Renderer) -> Self {
        Self {
            api,
            state: AppState::new(),
            renderer,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Runs until `quit` or end of input.
    pub async fn run<R, W>(&mut self, input: R, output: &mut W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        loop {
            output
                .write_all(self.renderer.prompt(&self.state).as_bytes())
                .await?;
            output.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let text = match Command::parse(&line) {
                Ok(Command::Code) => {
                    self.state.editor.code = read_code(&mut lines).await?;
                    String::new()
                }
                Ok(command) => {
                    debug!(
                        event_name = "shell.command",
                        event_domain = "shell",
                        command = ?command,
                        "Dispatching command"
                    );
                    match self.execute(command).await {
                        (Flow::Quit, text) => {
                            output.write_all(text.as_bytes()).await?;
                            break;
                        }
                        (Flow::Continue, text) => text,
                    }
                }
                Err(usage) => self.renderer.problem(&usage),
            };
            output.write_all(text.as_bytes()).await?;
        }
        output.flush().await
    }

    /// Runs one command and returns what to print. `Code` only works through [`Shell::run`].
    pub async fn execute(&mut self, command: Command) -> (Flow, String) {
        let api = self.api.as_ref();
        let state = &mut self.state;
        let renderer = self.renderer;

        let result: ActionResult = match command {
            Command::Login(credentials) => session::login(api, state, &credentials).await,
            Command::Logout => session::logout(api, state).await,
            Command::Auth(credentials) => session::toggle(api, state, &credentials).await,
            Command::Snippets => match snippets::reload(api, state).await {
                Ok(()) => return (Flow::Continue, renderer.selector(state)),
                Err(e) => Err(e),
            },
            Command::Select(value) => match snippets::select(state, &value) {
                Ok(()) => return (Flow::Continue, renderer.editor(state)),
                Err(e) => Err(e),
            },
            Command::Open(id) => snippets::open(api, state, id).await,
            Command::Title(title) => {
                state.editor.title = title;
                return (Flow::Continue, String::new());
            }
            // Needs the following input lines, which only `run` can read.
            Command::Code => {
                let message = "Code entry needs an interactive input stream";
                return (Flow::Continue, renderer.problem(message));
            }
            Command::Load(path) => match tokio::fs::read_to_string(&path).await {
                Ok(code) => {
                    state.editor.code = code;
                    Ok(Notice::new(format!("Loaded {}", path.display())))
                }
                Err(e) => {
                    let message = format!("Failed to read {}: {}", path.display(), e);
                    return (Flow::Continue, renderer.problem(&message));
                }
            },
            Command::Show => return (Flow::Continue, renderer.editor(state)),
            Command::Save => snippets::save(api, state).await,
            Command::Delete => snippets::delete(api, state).await,
            Command::Run => match runner::run(api, state).await {
                Ok(_) => return (Flow::Continue, renderer.output(state)),
                Err(e) => Err(e),
            },
            Command::Output => return (Flow::Continue, renderer.output(state)),
            Command::Status => return (Flow::Continue, renderer.status(state)),
            Command::Help => return (Flow::Continue, format!("{}\n", HELP)),
            Command::Quit => return (Flow::Quit, String::new()),
        };

        let text = match result {
            Ok(notice) => renderer.notice(&notice),
            Err(error) => renderer.error(&error),
        };
        (Flow::Continue, text)
    }
}

/// Collects lines until the terminator or end of input.
async fn read_code<R>(lines: &mut Lines<R>) -> std::io::Result<String>
where
    R: AsyncBufRead + Unpin,
{
    let mut code = Vec::new();
    while let Some(line) = lines.next_line().await? {
        if line.trim_end() == END_OF_CODE {
            break;
        }
        code.push(line);
    }
    Ok(code.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HttpApi;
    use crate::config::ApiConfig;

    fn offline_shell() -> Shell {
        // Nothing is expected to be sent in these tests.
        let api = HttpApi::new(&ApiConfig {
            base_url: "http://127.0.0.1:9".to_string(),
        });
        Shell::new(Arc::new(api), Renderer::new(false))
    }

    #[tokio::test]
    async fn code_entry_fills_editor() {
        let mut shell = offline_shell();
        let input: &[u8] = b"title Sum\ncode\nlet a = 1;\n  a + 1\n.\nshow\nquit\n";
        let mut out = Vec::new();
        shell.run(input, &mut out).await.unwrap();

        assert_eq!(shell.state().editor.title, "Sum");
        assert_eq!(shell.state().editor.code, "let a = 1;\n  a + 1");
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Title: Sum"));
    }

    #[tokio::test]
    async fn save_without_title_is_rejected_locally() {
        let mut shell = offline_shell();
        let (flow, text) = shell.execute(Command::Save).await;
        assert_eq!(flow, Flow::Continue);
        assert_eq!(text, "✘ Please enter snippet name\n");
    }

    #[tokio::test]
    async fn unknown_command_prints_usage_and_continues() {
        let mut shell = offline_shell();
        let input: &[u8] = b"bogus\nstatus\n";
        let mut out = Vec::new();
        shell.run(input, &mut out).await.unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("✘ Unknown command 'bogus'"));
        assert!(printed.contains("Session: logged out [Login]"));
    }

    #[tokio::test]
    async fn load_reads_file_into_editor() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.js");
        std::fs::write(&path, "log('from disk')").unwrap();

        let mut shell = offline_shell();
        let (_, text) = shell.execute(Command::Load(path)).await;
        assert!(text.starts_with("✔ Loaded"));
        assert_eq!(shell.state().editor.code, "log('from disk')");
    }

    #[tokio::test]
    async fn quit_stops_reading() {
        let mut shell = offline_shell();
        let input: &[u8] = b"quit\ntitle never\n";
        let mut out = Vec::new();
        shell.run(input, &mut out).await.unwrap();
        assert!(shell.state().editor.title.is_empty());
    }

    #[tokio::test]
    async fn code_outside_input_loop_is_reported() {
        let mut shell = offline_shell();
        let (flow, text) = shell.execute(Command::Code).await;
        assert_eq!(flow, Flow::Continue);
        assert_eq!(text, "✘ Code entry needs an interactive input stream\n");
        assert!(shell.state().editor.code.is_empty());
    }
}
