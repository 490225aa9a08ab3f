//! REPL commands and the session that executes them.
//!
//! Commands name prebuilt library functions; there is no syntax for
//! defining new functions.

use std::fmt;

use prf_eval::{bmin, Evaluator, Nat, NatFunction, PrfError};
use prf_stdlib::Library;
use thiserror::Error;
use tracing::debug;

use crate::config::parse_gas_limit;

pub const HELP: &str = "\
commands:
  <name> <args...>          evaluate a library function
  bmin <name> <args...> <n> least k < n with name(args..., k) = 1, else n
  show <name>               print the function's definition
  json <name>               print the function's combinator tree as JSON
  list                      list library functions
  gas <n|off>               set the evaluation step limit
  help                      show this message
  quit                      leave

fib, fst and snd grow in cost with the square of their pair values;
under the default step limit fib reaches about n = 15.";

/// Errors reported for a single input line. The session stays usable.
#[derive(Debug, Error)]
pub enum ReplError {
    #[error(transparent)]
    Prf(#[from] PrfError),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("invalid natural number: {0:?}")]
    InvalidNumber(String),

    #[error("invalid step limit: {0}")]
    InvalidGas(String),

    #[error("{0} is host-defined and has no combinator tree")]
    NoTree(String),

    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("input line is not valid UTF-8")]
    Encoding,
}

// ══════════════════════════════════════════════════════════════════════════════
// Commands
// ══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Eval { name: String, args: Vec<Nat> },
    Search { name: String, args: Vec<Nat>, bound: Nat },
    Show(String),
    Json(String),
    List,
    Gas(Option<u64>),
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, ReplError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };
        let rest: Vec<&str> = words.collect();

        let cmd = match (head, rest.as_slice()) {
            ("quit" | "exit", []) => Self::Quit,
            ("help", []) => Self::Help,
            ("list", []) => Self::List,
            ("show", [name]) => Self::Show(name.to_string()),
            ("show", _) => return Err(ReplError::Usage("show <name>")),
            ("json", [name]) => Self::Json(name.to_string()),
            ("json", _) => return Err(ReplError::Usage("json <name>")),
            ("gas", [val]) => {
                let limit =
                    parse_gas_limit(val).map_err(|e| ReplError::InvalidGas(format!("{e:#}")))?;
                Self::Gas(limit)
            }
            ("gas", _) => return Err(ReplError::Usage("gas <n|off>")),
            ("bmin", [name, nums @ .., last]) => Self::Search {
                name: name.to_string(),
                args: parse_nats(nums)?,
                bound: parse_nat(last)?,
            },
            ("bmin", _) => return Err(ReplError::Usage("bmin <name> <args...> <bound>")),
            (name, nums) => Self::Eval {
                name: name.to_string(),
                args: parse_nats(nums)?,
            },
        };
        Ok(Some(cmd))
    }
}

fn parse_nat(word: &str) -> Result<Nat, ReplError> {
    word.parse()
        .map_err(|_| ReplError::InvalidNumber(word.to_string()))
}

fn parse_nats(words: &[&str]) -> Result<Vec<Nat>, ReplError> {
    words.iter().map(|w| parse_nat(w)).collect()
}

/// Decode one raw input line.
pub fn decode_line(bytes: &[u8]) -> Result<&str, ReplError> {
    std::str::from_utf8(bytes).map_err(|_| ReplError::Encoding)
}

// ══════════════════════════════════════════════════════════════════════════════
// Replies
// ══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Value { value: Nat, steps: u64 },
    Text(String),
    Quit,
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value { value, steps } => write!(f, "{value}  ({steps} steps)"),
            Self::Text(text) => f.write_str(text),
            Self::Quit => Ok(()),
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Session
// ══════════════════════════════════════════════════════════════════════════════

/// A REPL session: the function library plus the current step limit.
pub struct Session {
    library: Library,
    gas_limit: Option<u64>,
}

impl Session {
    pub fn new(library: Library, gas_limit: Option<u64>) -> Self {
        Self { library, gas_limit }
    }

    pub fn gas_limit(&self) -> Option<u64> {
        self.gas_limit
    }

    /// Parse and execute one input line.
    pub fn run_line(&mut self, line: &str) -> Result<Option<Reply>, ReplError> {
        match Command::parse(line)? {
            Some(cmd) => self.execute(cmd).map(Some),
            None => Ok(None),
        }
    }

    pub fn execute(&mut self, cmd: Command) -> Result<Reply, ReplError> {
        debug!(?cmd, "executing");
        match cmd {
            Command::Eval { name, args } => {
                let function = &self.library.get(&name)?.function;
                let mut ev = self.evaluator();
                let value = function.eval(&mut ev, &args)?;
                debug!(%name, value, steps = ev.steps(), "evaluated");
                Ok(Reply::Value {
                    value,
                    steps: ev.steps(),
                })
            }
            Command::Search { name, args, bound } => {
                let function = &self.library.get(&name)?.function;
                let mut ev = self.evaluator();
                let mut frame = args;
                frame.push(0);
                let last = frame.len() - 1;
                let value = bmin(
                    |k| {
                        frame[last] = k;
                        function.eval(&mut ev, &frame)
                    },
                    bound,
                )?;
                debug!(%name, value, steps = ev.steps(), "search finished");
                Ok(Reply::Value {
                    value,
                    steps: ev.steps(),
                })
            }
            Command::Show(name) => {
                let entry = self.library.get(&name)?;
                Ok(Reply::Text(format!(
                    "{} = {}\n  arity {}: {}",
                    entry.name,
                    entry.function.definition(),
                    entry.function.arity(),
                    entry.description
                )))
            }
            Command::Json(name) => {
                let entry = self.library.get(&name)?;
                let tree = entry
                    .function
                    .as_prf()
                    .ok_or_else(|| ReplError::NoTree(name.clone()))?;
                Ok(Reply::Text(serde_json::to_string_pretty(tree)?))
            }
            Command::List => {
                let lines: Vec<String> = self
                    .library
                    .entries()
                    .map(|e| {
                        let arity = e.function.arity().to_string();
                        format!("{:<10} {:<3} {}", e.name, arity, e.description)
                    })
                    .collect();
                Ok(Reply::Text(lines.join("\n")))
            }
            Command::Gas(limit) => {
                self.gas_limit = limit;
                Ok(Reply::Text(match limit {
                    Some(n) => format!("step limit set to {n}"),
                    None => "step limit disabled".to_string(),
                }))
            }
            Command::Help => Ok(Reply::Text(HELP.to_string())),
            Command::Quit => Ok(Reply::Quit),
        }
    }

    fn evaluator(&self) -> Evaluator {
        match self.gas_limit {
            Some(limit) => Evaluator::with_gas_limit(limit),
            None => Evaluator::new(),
        }
    }
}
