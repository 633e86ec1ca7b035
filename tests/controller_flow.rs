// End-to-end command handling, from input line to outcome.
use std::fs;
use taskline::config::Config;
use taskline::context::{AppContext, TestContext};
use taskline::model::SearchHit;
use taskline::{ErrorKind, Outcome, TaskController};

fn open(ctx: &TestContext) -> TaskController {
    let (controller, skipped) = TaskController::open(ctx, &Config::default()).unwrap();
    assert!(skipped.is_empty());
    controller
}

fn run(controller: &mut TaskController, line: &str) -> Outcome {
    controller
        .handle_line(line)
        .unwrap_or_else(|e| panic!("{:?} failed: {}", line, e))
}

fn fail(controller: &mut TaskController, line: &str) -> ErrorKind {
    controller
        .handle_line(line)
        .expect_err(&format!("{:?} should fail", line))
        .kind()
}

#[test]
fn test_todo_grows_list_by_one() {
    let ctx = TestContext::new();
    let mut c = open(&ctx);
    run(&mut c, "todo first");

    assert_eq!(
        run(&mut c, "todo read book"),
        Outcome::Added {
            task: "T |   | read book".to_string(),
            count: 2,
        }
    );
    assert_eq!(c.store().len(), 2);
}

#[test]
fn test_mark_unmark_cycle() {
    let ctx = TestContext::new();
    let mut c = open(&ctx);
    run(&mut c, "todo a");

    assert_eq!(run(&mut c, "mark 1"), Outcome::Marked("T | X | a".to_string()));
    assert_eq!(fail(&mut c, "mark 1"), ErrorKind::State);
    assert_eq!(run(&mut c, "unmark 1"), Outcome::Unmarked("T |   | a".to_string()));
    assert_eq!(run(&mut c, "mark 1"), Outcome::Marked("T | X | a".to_string()));
}

#[test]
fn test_bad_indices() {
    let ctx = TestContext::new();
    let mut c = open(&ctx);
    run(&mut c, "todo a");
    run(&mut c, "todo b");

    assert_eq!(fail(&mut c, "mark abc"), ErrorKind::Type);
    assert_eq!(fail(&mut c, "mark"), ErrorKind::Validation);
    assert_eq!(fail(&mut c, "mark 99"), ErrorKind::Range);
    assert_eq!(fail(&mut c, "unmark 0"), ErrorKind::Type);
    assert_eq!(fail(&mut c, "delete -1"), ErrorKind::Type);
    assert_eq!(fail(&mut c, "delete"), ErrorKind::Validation);
    assert_eq!(fail(&mut c, "delete 3"), ErrorKind::Range);
    assert_eq!(fail(&mut c, "mark 99999999999999999999999"), ErrorKind::Range);

    // None of the failures touched the list.
    assert_eq!(
        run(&mut c, "list"),
        Outcome::Listed(vec!["T |   | a".to_string(), "T |   | b".to_string()])
    );
}

#[test]
fn test_delete_reports_removed_task_and_count() {
    let ctx = TestContext::new();
    let mut c = open(&ctx);
    run(&mut c, "todo a");
    run(&mut c, "deadline b /by Fri");
    run(&mut c, "event c /from Mon /to Tue");

    assert_eq!(
        run(&mut c, "delete 2"),
        Outcome::Deleted {
            task: "D |   | b (by: Fri)".to_string(),
            count: 2,
        }
    );
    assert_eq!(
        run(&mut c, "delete 2"),
        Outcome::Deleted {
            task: "E |   | c (from: Mon to: Tue)".to_string(),
            count: 1,
        }
    );
    assert_eq!(fail(&mut c, "delete 2"), ErrorKind::Range);
}

#[test]
fn test_find_outcomes() {
    let ctx = TestContext::new();
    let mut c = open(&ctx);
    run(&mut c, "todo foo bar");
    run(&mut c, "todo baz");
    run(&mut c, "mark 1");

    assert_eq!(
        run(&mut c, "find foo"),
        Outcome::Found(vec![SearchHit {
            position: 1,
            line: "T | X | foo bar".to_string(),
        }])
    );
    assert_eq!(run(&mut c, "find qux"), Outcome::NoMatches);
    assert_eq!(fail(&mut c, "find   "), ErrorKind::Validation);
}

#[test]
fn test_exit_and_unrecognized() {
    let ctx = TestContext::new();
    let mut c = open(&ctx);
    assert_eq!(run(&mut c, "bye"), Outcome::Exit);
    assert_eq!(run(&mut c, "blah"), Outcome::Unrecognized);
    // The loop is still usable afterwards.
    assert!(matches!(run(&mut c, "todo x"), Outcome::Added { count: 1, .. }));
}

#[test]
fn test_state_survives_restart() {
    let ctx = TestContext::new();
    {
        let mut c = open(&ctx);
        run(&mut c, "todo a");
        run(&mut c, "event party /from 8pm /to late");
        run(&mut c, "mark 2");
    }

    let mut c = open(&ctx);
    assert_eq!(
        run(&mut c, "list"),
        Outcome::Listed(vec![
            "T |   | a".to_string(),
            "E | X | party (from: 8pm to: late)".to_string(),
        ])
    );
}

#[test]
fn test_configured_data_file_is_used() {
    let ctx = TestContext::new();
    let config = Config {
        data_file: "other.txt".to_string(),
        ..Config::default()
    };
    let (mut c, _) = TaskController::open(&ctx, &config).unwrap();
    run(&mut c, "todo a");

    let path = ctx.get_data_dir().unwrap().join("other.txt");
    assert_eq!(fs::read_to_string(path).unwrap(), "T |   | a\n");
}

#[test]
fn test_skipped_lines_are_reported_on_open() {
    let ctx = TestContext::new();
    let path = ctx.get_data_dir().unwrap().join("tasks.txt");
    fs::write(&path, "T |   | ok\nnonsense\n").unwrap();

    let (c, skipped) = TaskController::open(&ctx, &Config::default()).unwrap();
    assert_eq!(c.store().len(), 1);
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].content, "nonsense");
}
