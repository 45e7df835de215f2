use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use thiserror::Error;

/// The input stream ended (EOF or interrupt) while waiting for a line.
#[derive(Debug, Error)]
#[error("input stream closed")]
pub struct InputClosed;

/// Source of answers to interactive questions.
pub trait Prompt {
    /// Blocks until one line arrives. Fails with [`InputClosed`] once input ends.
    fn ask(&mut self, question: &str) -> Result<String>;
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn ask(&mut self, question: &str) -> Result<String> {
        (**self).ask(question)
    }
}

/// Terminal input with line editing and history.
pub struct LinePrompt {
    editor: DefaultEditor,
}

impl LinePrompt {
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Prompt for LinePrompt {
    fn ask(&mut self, question: &str) -> Result<String> {
        match self.editor.readline(question) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(line)
            }
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => Err(InputClosed.into()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
pub mod scripted {
    use super::*;
    use std::collections::VecDeque;

    /// Replays canned answers, then behaves like a closed stream.
    pub struct ScriptedPrompt {
        answers: VecDeque<String>,
        pub asked: Vec<String>,
    }

    impl ScriptedPrompt {
        pub fn new(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|a| a.to_string()).collect(),
                asked: Vec::new(),
            }
        }

        pub fn remaining(&self) -> usize {
            self.answers.len()
        }
    }

    impl Prompt for ScriptedPrompt {
        fn ask(&mut self, question: &str) -> Result<String> {
            self.asked.push(question.to_string());
            self.answers.pop_front().ok_or_else(|| InputClosed.into())
        }
    }
}
