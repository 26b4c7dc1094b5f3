use std::io::{self, BufRead, IsTerminal};

use colored::*;
use dialoguer::Input;
use dialoguer::console::Term;
use lbnode_common::error::InputError;
use lbnode_common::ports::InputSource;

use crate::terminal::colors;

const USERNAME_PROMPT: &str =
    "Enter the Ansible username to run ARP command (Ex: johndoe or johndoe-adm)";
const SELECTION_PROMPT: &str = "Do you want to get all LoadBalancer IPs? (yes/no)";
const CANDIDATES_PROMPT: &str = "Enter LB IP(s) separated by comma";

/// Reads answers from the terminal, or line by line from stdin when it is piped.
pub struct TerminalInput {
    interactive: bool,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            interactive: Term::stderr().is_term() && io::stdin().is_terminal(),
        }
    }

    fn ask(&self, field: &'static str, prompt: &str) -> Result<String, InputError> {
        let answer = if self.interactive {
            Input::<String>::new()
                .with_prompt(prompt.color(colors::PROMPT).to_string())
                .allow_empty(true)
                .interact_text_on(&Term::stderr())
                .map_err(|e| input_error(field, e))?
        } else {
            read_answer(io::stdin().lock()).map_err(|e| input_error(field, e))?
        };
        Ok(answer.trim().to_string())
    }
}

/// Reads one answer line. End of input reads as an empty answer.
fn read_answer(mut reader: impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn input_error(field: &'static str, e: impl std::fmt::Display) -> InputError {
    InputError {
        field,
        reason: e.to_string(),
    }
}

impl InputSource for TerminalInput {
    fn username(&mut self) -> Result<String, InputError> {
        self.ask("username", USERNAME_PROMPT)
    }

    fn selection(&mut self) -> Result<String, InputError> {
        self.ask("selection", SELECTION_PROMPT)
    }

    fn candidates(&mut self) -> Result<String, InputError> {
        self.ask("candidates", CANDIDATES_PROMPT)
    }
}
