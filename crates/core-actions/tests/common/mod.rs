#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{Command, DispatchResult, MenuChoice, dispatch};
use core_state::{HistoryPolicy, Session};

/// Session with an editor already created under `policy`.
pub fn active_session(policy: HistoryPolicy) -> Session {
    let mut session = Session::default();
    session.create(policy);
    session
}

pub fn run(session: &mut Session, command: Command) -> DispatchResult {
    dispatch(command, session, HistoryPolicy::default())
}

/// Drive the session the way the menu loop does: a choice line plus the answer
/// to its prompt (if it has one).
pub fn run_menu(session: &mut Session, choice: &str, answer: Option<&str>) -> DispatchResult {
    let choice = MenuChoice::parse(choice);
    let missing = choice.missing_argument();
    match choice.into_command(answer) {
        Some(command) => run(session, command),
        None => DispatchResult::failed(missing.unwrap_or("Invalid choice!")),
    }
}

pub fn print(session: &mut Session) -> String {
    run(session, Command::Print).message
}
