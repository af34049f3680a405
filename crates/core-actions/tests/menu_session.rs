mod common;

use common::{print, run, run_menu};
use core_actions::Command;
use core_state::Session;
use pretty_assertions::assert_eq;

#[test]
fn write_undo_redo_through_menu() {
    let mut session = Session::default();
    assert_eq!(run_menu(&mut session, "1", None).message, "File has been created");
    run_menu(&mut session, "4", Some("xy\n"));
    assert_eq!(run_menu(&mut session, "8", None).message, "xy");

    assert_eq!(run_menu(&mut session, "5", None).message, "Undo performed");
    assert_eq!(print(&mut session), "x");
    assert_eq!(run_menu(&mut session, "6", None).message, "Redo performed");
    assert_eq!(print(&mut session), "xy");
}

#[test]
fn empty_stacks_report_distinct_messages() {
    let mut session = Session::default();
    run(&mut session, Command::Create);
    let undo = run(&mut session, Command::Undo);
    let redo = run(&mut session, Command::Redo);
    assert!(undo.failed && redo.failed);
    assert_eq!(undo.message, "Nothing to undo!");
    assert_eq!(redo.message, "Redo stack is empty!");
}

#[test]
fn undo_after_clear_can_be_redone() {
    let mut session = Session::default();
    run(&mut session, Command::Create);
    run(&mut session, Command::Write("q".into()));
    run(&mut session, Command::Clear);
    let undo = run(&mut session, Command::Undo);
    assert!(undo.failed);
    assert_eq!(undo.message, "There are no characters to delete!");
    assert_eq!(run(&mut session, Command::Redo).message, "Redo performed");
    assert_eq!(print(&mut session), "q");
}

#[test]
fn print_reports_empty_file() {
    let mut session = Session::default();
    run(&mut session, Command::Create);
    assert_eq!(print(&mut session), "File is empty!");
    run(&mut session, Command::Write("abc".into()));
    run(&mut session, Command::Clear);
    assert_eq!(print(&mut session), "File is empty!");
}

#[test]
fn create_starts_over() {
    let mut session = Session::default();
    run(&mut session, Command::Create);
    run(&mut session, Command::Write("old".into()));
    run(&mut session, Command::Create);
    assert_eq!(print(&mut session), "File is empty!");
    assert!(run(&mut session, Command::Undo).failed, "history reset too");
}

#[test]
fn invalid_menu_input_is_rejected() {
    let mut session = Session::default();
    let result = run_menu(&mut session, "9", None);
    assert!(result.failed);
    assert!(!result.quit);
    let result = run_menu(&mut session, "2", Some("   "));
    assert!(result.failed, "blank filename");
}

#[test]
fn exit_quits() {
    let mut session = Session::default();
    let result = run_menu(&mut session, "0", None);
    assert!(result.quit);
    assert_eq!(result.message, "Exiting...");
}
