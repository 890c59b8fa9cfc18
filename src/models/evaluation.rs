use serde::{Deserialize, Serialize};

/// What `/api/run` answers: the script's final value and whatever it logged.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Evaluation {
    pub result: String,
    #[serde(default)]
    pub logs: Vec<String>,
}

impl Evaluation {
    /// The log lines as they appear in the console pane.
    pub fn console(&self) -> String {
        self.logs.join("\n")
    }
}
