#![allow(dead_code)]

use claimant::Listener;
use std::sync::{Arc, Mutex};

// ============================================================================
// Test Event Types
// ============================================================================

#[derive(Clone, Debug)]
pub struct CommandSent {
    pub keywords: Vec<String>,
}

impl CommandSent {
    pub fn new(keywords: &[&str]) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    pub fn keyword(&self) -> &str {
        self.keywords.first().map(String::as_str).unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Bake,
    Clean,
}

#[derive(Clone, Debug)]
pub struct TaskOffer {
    pub kind: Kind,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    pub task: String,
}

// ============================================================================
// Test Listeners
// ============================================================================

/// Shared output sink standing in for a console.
pub type Output = Arc<Mutex<Vec<String>>>;

pub fn output() -> Output {
    Arc::new(Mutex::new(Vec::new()))
}

/// Claims `keyword` commands and writes `line(cmd)` to `out`.
pub fn command_listener(
    keyword: &'static str,
    out: &Output,
    line: fn(&CommandSent) -> String,
) -> Listener<CommandSent> {
    let out = out.clone();
    Listener::new()
        .named(keyword)
        .with_corroborate(move |cmd: &CommandSent| cmd.keyword() == keyword)
        .with_accept(move |cmd: CommandSent| out.lock().unwrap().push(line(&cmd)))
}

/// Claims offers of `kind` and records `worker:task` into `out`.
pub fn worker(
    name: &'static str,
    kind: Kind,
    out: &Output,
) -> Listener<TaskOffer, Assignment> {
    let out = out.clone();
    Listener::new()
        .named(name)
        .with_corroborate(move |offer: &TaskOffer| offer.kind == kind)
        .with_accept(move |assignment: Assignment| {
            out.lock()
                .unwrap()
                .push(format!("{name}:{}", assignment.task))
        })
}
