// tests/github_outputs.rs

use std::fs;

use pipeline_waiter::report::{GithubActionsSink, OutcomeSink};

#[test]
fn outputs_are_appended_to_the_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("github_output");
    fs::write(&path, "previous=step\n").unwrap();

    let mut sink = GithubActionsSink::new(Vec::new(), Some(path.clone()));
    sink.set_output("execution-id", "exec-1").unwrap();
    sink.set_output("status", "Succeeded").unwrap();
    sink.report_success();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "previous=step\nexecution-id=exec-1\nstatus=Succeeded\n"
    );
    assert_eq!(sink.exit_code(), 0);
    assert!(sink.into_inner().is_empty());
}

#[test]
fn outputs_without_an_output_file_are_not_printed() {
    let mut sink = GithubActionsSink::new(Vec::new(), None);
    sink.set_output("status", "Failed").unwrap();

    assert!(sink.into_inner().is_empty());
}
