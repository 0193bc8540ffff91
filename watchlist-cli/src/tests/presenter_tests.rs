use super::*;
use watchlist_core::Catalog;

fn plain() -> TerminalPresenter<Vec<u8>> {
    TerminalPresenter::new(Vec::new(), OutputMode::Table { color: false })
}

fn output(presenter: TerminalPresenter<Vec<u8>>) -> String {
    String::from_utf8(presenter.into_inner()).unwrap()
}

fn sample() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.add("the iron giant", Some("1999")).unwrap();
    let id = catalog.add("get out", Some("2017")).unwrap().id;
    catalog.add("dune", None).unwrap();
    catalog.toggle(id);
    catalog
}

#[test]
fn table_rows_show_id_mark_and_label() {
    let catalog = sample();
    let mut p = plain();
    p.render(&catalog.visible());
    assert_eq!(
        output(p),
        "  #1  [ ] The Iron Giant (1999)\n  #2  [x] Get Out (2017)\n  #3  [ ] Dune\n"
    );
}

#[test]
fn empty_render_says_so() {
    let mut p = plain();
    p.render(&[]);
    assert_eq!(output(p), "  (no movies to show)\n");
}

#[test]
fn stats_line() {
    let mut p = plain();
    p.show_stats(sample().stats());
    assert_eq!(output(p), "Total: 3  Watched: 1  Remaining: 2\n");
}

#[test]
fn hints_are_tagged_by_kind() {
    let mut p = plain();
    p.show_hint(&Hint::info("a"));
    p.show_hint(&Hint::ok("b"));
    p.show_hint(&Hint::warn("c"));
    assert_eq!(output(p), "[info] a\n[ok] b\n[warn] c\n");
}

#[test]
fn json_mode_emits_one_object_per_update() {
    let catalog = sample();
    let mut p = TerminalPresenter::new(Vec::new(), OutputMode::Json);
    p.render(&catalog.visible());
    p.show_stats(catalog.stats());
    p.show_hint(&Hint::ok("done"));
    let text = output(p);
    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["visible"].as_array().unwrap().len(), 3);
    assert_eq!(lines[0]["visible"][1]["title"], "Get Out");
    assert_eq!(lines[0]["visible"][1]["watched"], true);
    assert_eq!(lines[0]["visible"][2]["year"], serde_json::Value::Null);
    assert_eq!(
        lines[1],
        serde_json::json!({"stats": {"total": 3, "watched": 1, "remaining": 2}})
    );
    assert_eq!(
        lines[2],
        serde_json::json!({"hint": {"message": "done", "kind": "ok"}})
    );
}
