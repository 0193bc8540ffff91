use std::io::Cursor;

use super::*;
use crate::presenter::{OutputMode, TerminalPresenter};
use watchlist_core::{HintKind, Intent, MovieId, RngSource, StatusFilter};

type TestSession = Session<TerminalPresenter<Vec<u8>>, RngSource>;

fn session() -> TestSession {
    Session::new(
        TerminalPresenter::new(Vec::new(), OutputMode::Table { color: false }),
        RngSource::seeded(1),
    )
}

fn run(script: &str) -> (ShellExit, TestSession) {
    let mut session = session();
    let exit = run_shell(Cursor::new(script.to_string()), &mut session, false).unwrap();
    (exit, session)
}

fn output(session: TestSession) -> String {
    let (_, presenter, _) = session.into_parts();
    String::from_utf8(presenter.into_inner()).unwrap()
}

fn intent(line: &str) -> Intent {
    parse_line(line).unwrap().unwrap().into_intent().unwrap()
}

// ── parsing ─────────────────────────────────────────────────────────────────

#[test]
fn blank_and_comment_lines_are_skipped() {
    assert_eq!(parse_line("").unwrap(), None);
    assert_eq!(parse_line("   \n").unwrap(), None);
    assert_eq!(parse_line("# add something").unwrap(), None);
}

#[test]
fn add_joins_title_words_and_keeps_raw_year() {
    assert_eq!(
        intent("add the iron giant -y 1999"),
        Intent::Add {
            title: "the iron giant".into(),
            year: Some("1999".into()),
        }
    );
    assert_eq!(
        intent("add --year abc dune"),
        Intent::Add {
            title: "dune".into(),
            year: Some("abc".into()),
        }
    );
    assert_eq!(
        intent("add heat"),
        Intent::Add {
            title: "heat".into(),
            year: None,
        }
    );
}

#[test]
fn ids_accept_hash_prefix_and_aliases() {
    let three: MovieId = "3".parse().unwrap();
    assert_eq!(intent("toggle #3"), Intent::Toggle(three));
    assert_eq!(intent("watch 3"), Intent::Toggle(three));
    assert_eq!(intent("rm #3"), Intent::Remove(three));
    assert_eq!(intent("remove 3"), Intent::Remove(three));
}

#[test]
fn filter_search_pick_list() {
    assert_eq!(
        intent("filter unwatched"),
        Intent::SetFilter(StatusFilter::Unwatched)
    );
    assert_eq!(intent("search iron  giant"), Intent::SetSearch("iron giant".into()));
    assert_eq!(intent("search"), Intent::SetSearch(String::new()));
    assert_eq!(intent("pick"), Intent::Pick);
    assert_eq!(intent("ls"), Intent::Refresh);
}

#[test]
fn quit_has_no_intent() {
    for line in ["quit", "exit"] {
        let command = parse_line(line).unwrap().unwrap();
        assert_eq!(command, ShellCommand::Quit);
        assert!(command.into_intent().is_none());
    }
}

#[test]
fn bad_lines_are_parse_errors() {
    assert!(parse_line("add").is_err());
    assert!(parse_line("toggle dune").is_err());
    assert!(parse_line("filter later").is_err());
    assert!(parse_line("frobnicate").is_err());
}

#[test]
fn help_is_informational() {
    let err = parse_line("help").unwrap_err();
    let hint = hint_for_parse_error(&err);
    assert_eq!(hint.kind, HintKind::Info);
    assert!(hint.message.contains("add"));
    assert!(hint.message.contains("pick"));

    let err = parse_line("frobnicate").unwrap_err();
    assert_eq!(hint_for_parse_error(&err).kind, HintKind::Warn);
}

// ── running ─────────────────────────────────────────────────────────────────

#[test]
fn script_runs_until_end_of_input() {
    let (exit, session) = run("add dune\nadd alien -y 1979\ntoggle 1\n");
    assert_eq!(exit, ShellExit::EndOfInput);
    assert_eq!(session.catalog().len(), 2);
    assert_eq!(session.catalog().stats().watched, 1);
}

#[test]
fn quit_stops_before_remaining_lines() {
    let (exit, session) = run("add dune\nquit\nadd alien\n");
    assert_eq!(exit, ShellExit::Quit);
    assert_eq!(session.catalog().len(), 1);
}

#[test]
fn parse_errors_do_not_end_the_session() {
    let (exit, session) = run("toggle dune\nadd heat\n");
    assert_eq!(exit, ShellExit::EndOfInput);
    assert_eq!(session.catalog().len(), 1);
    let text = output(session);
    assert!(text.starts_with("[warn] "));
    assert!(text.contains("[ok] Added \"Heat\"."));
}

#[test]
fn concrete_scenario_output() {
    let script = "\
add the iron giant -y 1999
add get out -y 2017
toggle 2
add  get   out  -y 2017
add dune
toggle 3
remove 2
";
    let (_, session) = run(script);
    let titles: Vec<String> = session
        .catalog()
        .records()
        .map(|r| r.label())
        .collect();
    assert_eq!(titles, vec!["The Iron Giant (1999)", "Dune"]);

    let text = output(session);
    assert!(text.contains("[warn] \"Get Out\" is already on your list."));
    assert!(text.ends_with(
        "  #1  [ ] The Iron Giant (1999)\n  #3  [x] Dune\nTotal: 2  Watched: 1  Remaining: 1\n"
    ));
}

#[test]
fn validation_hints_reach_the_presenter() {
    let (_, session) = run("add -y 2101 metropolis\nadd -y soon metropolis\n");
    assert!(session.catalog().is_empty());
    let text = output(session);
    assert_eq!(text.matches("[warn] Year looks off").count(), 2);
}

#[test]
fn negative_year_is_a_year_not_a_flag() {
    assert_eq!(
        intent("add dune -y -5"),
        Intent::Add {
            title: "dune".into(),
            year: Some("-5".into()),
        }
    );
    assert_eq!(
        intent("add --year -1999 dune"),
        Intent::Add {
            title: "dune".into(),
            year: Some("-1999".into()),
        }
    );

    let (_, session) = run("add dune -y -5\n");
    assert!(session.catalog().is_empty());
    let text = output(session);
    assert!(text.starts_with("[warn] Year looks off (\"-5\")"), "{text}");
}
