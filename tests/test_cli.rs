/// End-to-end tests for the spantree binary
///
/// Runs the built executable against temp files and checks stdout, output
/// files and failure messages.
use anyhow::Result;
use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn spantree() -> Command {
    Command::new(env!("CARGO_BIN_EXE_spantree"))
}

fn run_with_stdin(args: &[&str], input: &str) -> Result<Output> {
    let mut child = spantree()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .take()
        .expect("stdin was piped")
        .write_all(input.as_bytes())?;
    Ok(child.wait_with_output()?)
}

#[test]
fn test_builtin_minimum_tree() -> Result<()> {
    let output = spantree().args(["-g", "work", "-m", "min", "--quiet"]).output()?;
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(
        stdout,
        "# minimum spanning tree: 7 edges, total weight 22\n\
         B\tC\t1\nA\tB\t2\nB\tE\t2\nB\tD\t2\nE\tF\t5\nF\tG\t5\nG\tH\t5\n"
    );
    Ok(())
}

#[test]
fn test_both_trees_by_default() -> Result<()> {
    let output = spantree().args(["--graph", "world"]).output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("# minimum spanning tree: 11 edges, total weight 11"));
    assert!(stdout.contains("# maximum spanning tree: 11 edges, total weight 26"));
    assert_eq!(stdout.lines().count(), 24);

    // Summary is logged, not printed
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[spantree]"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn test_file_input_with_output_and_dot() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("graph.txt");
    let output = temp_dir.path().join("tree.tsv");
    let dot = temp_dir.path().join("tree.dot");
    fs::write(&input, "# triangle\nA B 1\nB C 2\nA C 3\n")?;

    let status = spantree()
        .args([
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--dot",
            dot.to_str().unwrap(),
            "--quiet",
        ])
        .status()?;
    assert!(status.success());

    let written = fs::read_to_string(&output)?;
    assert!(written.starts_with("# minimum spanning tree: 2 edges, total weight 3\nA\tB\t1\nB\tC\t2\n"));
    assert!(written.contains("# maximum spanning tree: 2 edges, total weight 5\nA\tC\t3\nB\tC\t2\n"));

    let min_dot = fs::read_to_string(temp_dir.path().join("tree.min.dot"))?;
    assert!(min_dot.contains("\"A\" -- \"C\" [label=\"3\", color=black, penwidth=1];"));
    let max_dot = fs::read_to_string(temp_dir.path().join("tree.max.dot"))?;
    assert!(max_dot.contains("\"A\" -- \"C\" [label=\"3\", color=red, penwidth=2];"));
    Ok(())
}

#[test]
fn test_stdin_input() -> Result<()> {
    let output = run_with_stdin(&["-m", "max", "--quiet"], "P Q 1\nP Q 2\n")?;
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "# maximum spanning tree: 1 edges, total weight 2\nP\tQ\t2\n"
    );
    Ok(())
}

#[test]
fn test_strict_nodes_reports_unknown_node() -> Result<()> {
    let output = run_with_stdin(&["--strict-nodes", "-m", "min"], "A\nB\nA B 1\nB C 1\n")?;
    assert!(!output.status.success(), "undeclared endpoint should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown node \"C\""), "got: {stderr}");
    Ok(())
}

#[test]
fn test_malformed_line() -> Result<()> {
    let output = run_with_stdin(&[], "A B\n")?;
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Line 1"), "got: {stderr}");
    Ok(())
}

#[test]
fn test_input_conflicts_with_builtin() -> Result<()> {
    let output = spantree().args(["-i", "graph.txt", "-g", "life"]).output()?;
    assert!(!output.status.success());
    Ok(())
}

#[test]
fn test_unknown_builtin() -> Result<()> {
    let output = spantree().args(["-g", "moon"]).output()?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown built-in graph"));
    Ok(())
}
