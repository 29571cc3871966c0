//! Runs without a bound never finish; read a few lines and kill the child.

use std::io::{BufRead, BufReader};
use std::process::Child;
use std::time::{Duration, Instant};

use crate::common::{START, spawn_piped};

/// Reads `count` stdout lines, recording when each arrived, then kills the child.
fn read_lines_then_kill(mut child: Child, count: usize) -> Vec<(String, Instant)> {
    let stdout = child.stdout.take().expect("piped stdout");
    let mut lines = Vec::with_capacity(count);
    for line in BufReader::new(stdout).lines().take(count) {
        lines.push((line.expect("read stdout line"), Instant::now()));
    }
    child.kill().expect("kill longrun");
    let _ = child.wait();
    lines
}

fn assert_counts_forever(max_count: Option<&str>) {
    let lines = read_lines_then_kill(spawn_piped(max_count), 4);
    let text: Vec<&str> = lines.iter().map(|(line, _)| line.as_str()).collect();
    assert_eq!(text, vec![START, "Counter: 1", "Counter: 2", "Counter: 3"]);

    // Allow for pipe scheduling jitter on the reading side.
    for pair in lines[1..].windows(2) {
        let gap = pair[1].1.duration_since(pair[0].1);
        assert!(gap >= Duration::from_millis(900), "gap {gap:?}");
    }
}

#[test]
fn unset_bound_counts_until_killed() {
    assert_counts_forever(None);
}

#[test]
fn empty_bound_counts_until_killed() {
    assert_counts_forever(Some(""));
}

#[test]
fn sentinel_bound_counts_until_killed() {
    assert_counts_forever(Some("-1"));
}
