//! Behavioural tests for command evaluation.
//!
//! Lines are compared through their HTML rendering, which is the exact form
//! the browser-side log displays.

use rstest::{fixture, rstest};
use tabrepl::commands::{load_file, search};
use tabrepl::evaluator::Evaluator;
use tabrepl::line::{Line, output_message};
use tabrepl::output::html::render_lines;
use tabrepl::session::Session;
use tabrepl_data::{BuiltinDatasets, DatasetSource, Registry};

// ============================================================================
// Fixtures
// ============================================================================

#[fixture]
fn evaluator() -> Evaluator<BuiltinDatasets> {
    Evaluator::new(BuiltinDatasets)
}

#[fixture]
fn cats() -> (Evaluator<BuiltinDatasets>, Session) {
    let mut evaluator = Evaluator::new(BuiltinDatasets);
    let mut session = Session::new();
    evaluator.evaluate(&mut session, "load_file cats");
    (evaluator, session)
}

fn html(lines: &[Line]) -> Vec<String> {
    render_lines(lines)
}

// ============================================================================
// Handlers with an explicit prefix
// ============================================================================

#[rstest]
#[case::column_and_value(&["search", "Name", "Tiger"][..])]
#[case::unknown_value(&["search", "Name", "boot"][..])]
fn test_search_with_no_file_loaded(#[case] terms: &[&str]) {
    let err = search::run(terms, &Session::new(), "outputPrompt").unwrap_err();
    assert_eq!(
        html(&tabrepl::evaluator::error_lines("outputPrompt", &err)),
        ["<tr class='message'><td>outputPrompt[Error] No csv is selected.</td></tr>"]
    );
}

#[test]
fn test_search_with_numbers() {
    let mut registry = Registry::new(BuiltinDatasets);
    let mut session = Session::new();
    load_file::run(&["load_file", "cats"], &mut session, &mut registry, "outputPrompt").unwrap();

    let lines = search::run(&["search", "Age", "2"], &session, "outputPrompt").unwrap();
    assert_eq!(
        html(&lines),
        [
            "<tr class='message'><td>outputPrompt1 row found in cats.</td></tr>",
            "<tr class='userData'><td>Fluffy</td><td>2</td><td>White</td><td>Persian</td><td>Playful and curious</td></tr>",
        ]
    );
}

#[rstest]
#[case::no_arguments(
    &["search"][..],
    "<tr class='message'><td>outputPrompt[Error] No search term provided.</td></tr>"
)]
#[case::too_many_inputs(
    &["search", "i", "o", "p"][..],
    "<tr class='message'><td>outputPrompt[Error] Too many search terms provided.</td></tr>"
)]
#[case::index_out_of_range(
    &["search", "10", "Tiger"][..],
    "<tr class='message'><td>outputPrompt[Error] Column index out of bounds.</td></tr>"
)]
fn test_search_errors_on_loaded_file(#[case] terms: &[&str], #[case] expected: &str) {
    let mut registry = Registry::new(BuiltinDatasets);
    let mut session = Session::new();
    load_file::run(&["load_file", "cats"], &mut session, &mut registry, "outputPrompt").unwrap();

    let err = search::run(terms, &session, "outputPrompt").unwrap_err();
    assert_eq!(
        html(&tabrepl::evaluator::error_lines("outputPrompt", &err)),
        [expected]
    );
}

#[test]
fn test_output_message_fragment() {
    assert_eq!(
        html(&[output_message("prompt", "content")]),
        ["<tr class='message'><td>promptcontent</td></tr>"]
    );
    assert_eq!(
        html(&[output_message("", "cats is loaded.")]),
        ["<tr class='message'><td>cats is loaded.</td></tr>"]
    );
}

// ============================================================================
// Full command lines
// ============================================================================

#[rstest]
#[case::students("students")]
#[case::burgers("burgers")]
#[case::cats("cats")]
#[case::stars("stars")]
fn test_load_then_view_shows_every_row(
    mut evaluator: Evaluator<BuiltinDatasets>,
    #[case] name: &str,
) {
    let mut session = Session::new();
    assert_eq!(
        evaluator.evaluate(&mut session, &format!("load_file {name}")),
        [output_message("", &format!("{name} is loaded."))]
    );

    let table = BuiltinDatasets.fetch(name).unwrap();
    let lines = evaluator.evaluate(&mut session, "view");
    assert_eq!(lines.len(), table.rows().len() + 1);
    assert_eq!(lines[0], output_message("", &format!("{name} displayed.")));
    for (line, row) in lines[1..].iter().zip(table.rows()) {
        assert_eq!(line, &Line::Data { cells: row.clone() });
    }
}

#[rstest]
#[case::view("view")]
#[case::search("search Tiger")]
#[case::query("query anything")]
fn test_commands_need_a_selection(
    mut evaluator: Evaluator<BuiltinDatasets>,
    #[case] command: &str,
) {
    let mut session = Session::new();
    assert_eq!(
        html(&evaluator.evaluate(&mut session, command)),
        ["<tr class='message'><td>[Error] No csv is selected.</td></tr>"]
    );
}

#[rstest]
#[case::missing("load_file", "[Error] File path not provided.")]
#[case::unknown("load_file dogs", "[Error] File path is invalid.")]
#[case::case_sensitive("load_file Cats", "[Error] File path is invalid.")]
fn test_load_file_errors_keep_selection(
    cats: (Evaluator<BuiltinDatasets>, Session),
    #[case] command: &str,
    #[case] expected: &str,
) {
    let (mut evaluator, mut session) = cats;
    let lines = evaluator.evaluate(&mut session, command);
    assert_eq!(html(&lines), [format!("<tr class='message'><td>{expected}</td></tr>")]);
    assert_eq!(session.selected().map(|s| s.name.as_str()), Some("cats"));
}

#[test]
fn test_load_file_ignores_extra_terms() {
    let mut evaluator = Evaluator::new(BuiltinDatasets);
    let mut session = Session::new();
    assert_eq!(
        evaluator.evaluate(&mut session, "load_file stars extra"),
        [output_message("", "stars is loaded.")]
    );
}

#[rstest]
fn test_search_any_column(cats: (Evaluator<BuiltinDatasets>, Session)) {
    let (mut evaluator, mut session) = cats;
    let lines = evaluator.evaluate(&mut session, "search Tiger");
    assert_eq!(
        html(&lines),
        [
            "<tr class='message'><td>1 row found in cats.</td></tr>",
            "<tr class='userData'><td>Tiger</td><td>5</td><td>Orange Tabby</td><td>Bengal</td><td>Confident and independent</td></tr>",
        ]
    );

    assert_eq!(
        evaluator.evaluate(&mut session, "search anyColumn Tiger"),
        lines
    );
}

#[rstest]
fn test_search_matches_header_row(cats: (Evaluator<BuiltinDatasets>, Session)) {
    let (mut evaluator, mut session) = cats;
    let lines = evaluator.evaluate(&mut session, "search 0 Name");
    assert_eq!(lines[0], output_message("", "1 row found in cats."));
    assert!(matches!(&lines[1], Line::Data { cells } if cells[0] == "Name"));
}

#[rstest]
#[case::partial("search Tig")]
#[case::wrong_case("search tiger")]
#[case::other_column("search Age Tiger")]
#[case::fractional_column("search 1.5 2")]
fn test_search_is_exact(cats: (Evaluator<BuiltinDatasets>, Session), #[case] command: &str) {
    let (mut evaluator, mut session) = cats;
    assert_eq!(
        evaluator.evaluate(&mut session, command),
        [output_message("", "Results not found.")]
    );
}

#[test]
fn test_search_empty_cells() {
    let mut evaluator = Evaluator::new(BuiltinDatasets);
    let mut session = Session::new();
    evaluator.evaluate(&mut session, "load_file stars");

    // A trailing space gives an empty value, which matches blank names.
    let lines = evaluator.evaluate(&mut session, "search ProperName ");
    assert_eq!(lines[0], output_message("", "4 rows found in stars."));
    assert_eq!(lines.len(), 5);
}

#[rstest]
#[case::column_name("search Breed Tiger", "[Error] Column name not found in header.")]
#[case::negative_index("search -1 Tiger", "[Error] Column index out of bounds.")]
#[case::width_index("search 5 Tiger", "[Error] Column index out of bounds.")]
#[case::infinity_index("search Infinity Tiger", "[Error] Column index out of bounds.")]
#[case::inf_is_a_name("search inf x", "[Error] Column name not found in header.")]
fn test_search_column_errors(
    cats: (Evaluator<BuiltinDatasets>, Session),
    #[case] command: &str,
    #[case] expected: &str,
) {
    let (mut evaluator, mut session) = cats;
    assert_eq!(
        html(&evaluator.evaluate(&mut session, command)),
        [format!("<tr class='message'><td>{expected}</td></tr>")]
    );
}

#[rstest]
fn test_invalid_command_changes_nothing(cats: (Evaluator<BuiltinDatasets>, Session)) {
    let (mut evaluator, mut session) = cats;
    let before = session.clone();
    assert_eq!(
        html(&evaluator.evaluate(&mut session, "load cats")),
        ["<tr class='message'><td>[Error] Command is invalid.</td></tr>"]
    );
    assert_eq!(session, before);
}

#[test]
fn test_mode_twice_restores_brief() {
    let mut evaluator = Evaluator::new(BuiltinDatasets);
    let mut session = Session::new();

    assert_eq!(
        evaluator.evaluate(&mut session, "mode"),
        [output_message("Output: ", "Switched to verbose output mode.")]
    );
    assert_eq!(
        evaluator.evaluate(&mut session, "mode"),
        [output_message("", "Switched to brief output mode.")]
    );
    assert!(!session.is_verbose());
}

#[test]
fn test_verbose_prefix_on_results() {
    let mut evaluator = Evaluator::new(BuiltinDatasets);
    let mut session = Session::with_verbose(true);
    assert_eq!(
        html(&evaluator.evaluate(&mut session, "load_file cats")),
        ["<tr class='message'><td>Output: cats is loaded.</td></tr>"]
    );
}

#[test]
fn test_reloading_returns_the_same_table() {
    let mut evaluator = Evaluator::new(BuiltinDatasets);
    let mut first = Session::new();
    let mut second = Session::new();

    evaluator.evaluate(&mut first, "load_file burgers");
    evaluator.evaluate(&mut second, "load_file burgers");

    let a = &first.selected().unwrap().table;
    let b = &second.selected().unwrap().table;
    assert!(std::sync::Arc::ptr_eq(a, b));
}

#[test]
fn test_example_query() {
    let mut evaluator = Evaluator::new(BuiltinDatasets);
    let mut session = Session::new();
    evaluator.evaluate(&mut session, "load_file burgers");

    let command = format!("query {}", tabrepl::commands::query::EXAMPLE_QUERY);
    let lines = evaluator.evaluate(&mut session, &command);
    assert_eq!(lines[0], output_message("", "1 row found in burgers."));
    assert_eq!(lines.len(), 2);
}

#[test]
fn test_unsupported_query_suggests_example() {
    let mut evaluator = Evaluator::new(BuiltinDatasets);
    let mut session = Session::new();
    evaluator.evaluate(&mut session, "load_file cats");

    let lines = html(&evaluator.evaluate(&mut session, "query Name = Tiger"));
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "<tr class='message'><td>[Error] This query command is not supported in mocking.</td></tr>"
    );
    assert_eq!(
        lines[2],
        "<tr class='message'><td>load_file burgers</td></tr>"
    );
    assert_eq!(
        lines[3],
        "<tr class='message'><td>query Name = Tiger</td></tr>"
    );
}
