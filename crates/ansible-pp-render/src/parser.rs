//! Line-oriented parser for `ansible-playbook --list-tasks` output.
//!
//! The listing is scraped, not parsed as a grammar: each line is classified by
//! its leading whitespace and keyword, and lines that don't look like play or
//! task content are passed through untouched.
//!
//! ```text
//! playbook: site.yml                          -> Passthru
//!
//!   play #1 (web): Deploy    TAGS: [deploy]   -> Play
//!     tasks:                                  -> Passthru + open TaskGroup
//!       common : Ping    TAGS: [ping]         -> Task (block "common")
//!       Restart nginx    TAGS: []             -> Task
//!                                             -> closes group, Passthru
//! ```

use std::io::{self, BufRead};

use crate::measure::Measure;
use crate::model::{Play, Row, RowKind, Task, TaskGroup};
use crate::stats::Stats;

const PLAY_PREFIX: &str = "  play";
const TASKS_PREFIX: &str = "    tasks";
const TASK_PREFIX: &str = "      ";
const TAGS_MARKER: &str = "TAGS:";

/// Rows and width statistics of one listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Parsed {
    pub rows: Vec<Row>,
    pub stats: Stats,
}

/// Errors that abort a parse. No partial result is returned.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A play header without exactly one `TAGS:` marker.
    #[error("line {line}: unexpected play format: {text:?}")]
    MalformedPlay { line: usize, text: String },

    /// A task line without exactly one `TAGS:` marker.
    #[error("line {line}: unexpected task format: {text:?}")]
    MalformedTask { line: usize, text: String },

    /// The underlying reader failed.
    #[error("line {line}: failed to read input")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}

impl ParseError {
    /// 1-based number of the line the error refers to.
    pub fn line(&self) -> usize {
        match self {
            ParseError::MalformedPlay { line, .. }
            | ParseError::MalformedTask { line, .. }
            | ParseError::Read { line, .. } => *line,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Idle,
    /// Index into `rows` of the task group receiving task lines.
    InTaskGroup { row: usize },
}

/// Splits `line` into the parts before and after its single `TAGS:` marker.
///
/// Returns `None` unless the marker occurs exactly once.
fn split_tags(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim();
    let (left, right) = trimmed.split_once(TAGS_MARKER)?;
    if right.contains(TAGS_MARKER) {
        return None;
    }
    Some((left.trim(), right.trim()))
}

fn parse_play(line: &str) -> Option<Play> {
    let (name, tags) = split_tags(line)?;
    Some(Play::new(name, tags))
}

fn parse_task(line: &str) -> Option<Task> {
    let (left, tags) = split_tags(line)?;
    let task = match left.split_once(':') {
        Some((block, name)) => Task::new(block.trim(), name.trim(), tags),
        None => Task::new("", left, tags),
    };
    Some(task)
}

struct Parser {
    rows: Vec<Row>,
    stats: Stats,
    state: State,
    plays: usize,
}

impl Parser {
    fn new(measure: Measure) -> Self {
        Parser {
            rows: Vec::new(),
            stats: Stats::new(measure),
            state: State::Idle,
            plays: 0,
        }
    }

    fn feed(&mut self, number: usize, line: String) -> Result<(), ParseError> {
        if line.starts_with(PLAY_PREFIX) {
            let play = parse_play(&line).ok_or_else(|| ParseError::MalformedPlay {
                line: number,
                text: line.clone(),
            })?;
            self.plays += 1;
            tracing::debug!(line = number, play = self.plays, name = %play.name, "play");
            self.stats.update_with_play(&play);
            self.rows.push(Row::play(play));
            self.state = State::Idle;
            return Ok(());
        }

        if line.starts_with(TASKS_PREFIX) {
            tracing::debug!(line = number, play = self.plays, "task group opened");
            self.rows.push(Row::passthru(line));
            self.rows.push(Row::tasks(TaskGroup::new(self.plays)));
            self.state = State::InTaskGroup {
                row: self.rows.len() - 1,
            };
            return Ok(());
        }

        if let State::InTaskGroup { row } = self.state {
            if line.starts_with(TASK_PREFIX) {
                let task = parse_task(&line).ok_or_else(|| ParseError::MalformedTask {
                    line: number,
                    text: line.clone(),
                })?;
                tracing::trace!(line = number, task = %task, "task");
                self.stats.update_with_task(&task);
                if let Some(RowKind::Tasks(group)) = self.rows.get_mut(row).map(|r| &mut r.kind) {
                    group.push(task);
                }
                return Ok(());
            }
            tracing::trace!(line = number, "task group closed");
            self.state = State::Idle;
        }

        tracing::trace!(line = number, "passthru");
        self.rows.push(Row::passthru(line));
        Ok(())
    }

    fn finish(self) -> Parsed {
        tracing::debug!(
            rows = self.rows.len(),
            plays = self.plays,
            measure = %self.stats.measure,
            "parsed listing"
        );
        Parsed {
            rows: self.rows,
            stats: self.stats,
        }
    }
}

/// Parses a stream of lines, as produced by [`BufRead::lines`].
///
/// # Errors
///
/// Fails on the first malformed play or task line, or on the first read error.
pub fn parse_lines<I>(lines: I, measure: Measure) -> Result<Parsed, ParseError>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let mut parser = Parser::new(measure);
    for (index, line) in lines.into_iter().enumerate() {
        let number = index + 1;
        let line = line.map_err(|source| ParseError::Read {
            line: number,
            source,
        })?;
        parser.feed(number, line)?;
    }
    Ok(parser.finish())
}

/// Parses everything `reader` yields.
pub fn parse_reader<R: BufRead>(reader: R, measure: Measure) -> Result<Parsed, ParseError> {
    parse_lines(reader.lines(), measure)
}

/// Parses an in-memory listing.
///
/// # Example
///
/// ```rust
/// use ansible_pp_render::{parse_str, Measure, RowKind};
///
/// let parsed = parse_str(
///     "  play #1 (all): Demo\tTAGS: []\n    tasks:\n      Ping\tTAGS: [ping]\n",
///     Measure::Chars,
/// )
/// .unwrap();
///
/// assert_eq!(parsed.rows.len(), 3);
/// assert!(matches!(&parsed.rows[2].kind, RowKind::Tasks(group) if group.len() == 1));
/// assert_eq!(parsed.stats.task_name.value, "Ping");
/// ```
pub fn parse_str(input: &str, measure: Measure) -> Result<Parsed, ParseError> {
    parse_lines(input.lines().map(|l| Ok(l.to_string())), measure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Longest;

    const FIXTURE: &str = "playbook: playbooks/vsp/playbook_vps.yml\n\
        \n  play #1 (vps): Test\tTAGS: []\n\
        \x20   tasks:\n\
        \x20     Block: Name\tTAGS: [Tag1, Tag2]\n\
        \x20     Gather the package facts\tTAGS: [apt, facts, vars]\n\
        \n  play #2 (vps): Demo 2\tTAGS: []\n\
        \x20   tasks:\n\
        \x20     Task 2.1\tTAGS: []\n\
        \x20     Task 2.2\tTAGS: []\n";

    fn group(row: &Row) -> &TaskGroup {
        match &row.kind {
            RowKind::Tasks(group) => group,
            other => panic!("expected task group, got {other:?}"),
        }
    }

    #[test]
    fn test_fixture_has_eleven_lines() {
        assert_eq!(FIXTURE.lines().count(), 11);
    }

    #[test]
    fn test_parse_play() {
        assert_eq!(
            parse_play("  play #1 (vps1): Test\tTAGS: []"),
            Some(Play::new("play #1 (vps1): Test", "[]"))
        );
        assert_eq!(
            parse_play("  play #1 (vps1): Test    TAGS:"),
            Some(Play::new("play #1 (vps1): Test", ""))
        );
        assert_eq!(
            parse_play("     play #1 (vps1): TestTAGS: [tag1,   tag2]     "),
            Some(Play::new("play #1 (vps1): Test", "[tag1,   tag2]"))
        );
        assert_eq!(parse_play("TAGS:"), Some(Play::default()));
    }

    #[test]
    fn test_parse_play_rejects_missing_or_repeated_marker() {
        assert_eq!(parse_play("  play #1 (vps1): Test\tTAG: []"), None);
        assert_eq!(parse_play("  play #1: TAGS: a TAGS: b"), None);
    }

    #[test]
    fn test_parse_task() {
        assert_eq!(
            parse_task("      Block: Name\tTAGS: [♪, ♪♪, ♪♪♪]"),
            Some(Task::new("Block", "Name", "[♪, ♪♪, ♪♪♪]"))
        );
        assert_eq!(
            parse_task("      Block NameTAGS: [♪,♪♪,♪♪♪]"),
            Some(Task::new("", "Block Name", "[♪,♪♪,♪♪♪]"))
        );
        assert_eq!(parse_task("TAGS:"), Some(Task::default()));
    }

    #[test]
    fn test_parse_task_splits_on_first_colon_only() {
        assert_eq!(
            parse_task("      role : Step: one\tTAGS: []"),
            Some(Task::new("role", "Step: one", "[]"))
        );
    }

    #[test]
    fn test_parse_task_rejects_missing_marker() {
        assert_eq!(parse_task("      Block: Name\tTAG: []"), None);
    }

    #[test]
    fn test_parse_fixture_rows() {
        let parsed = parse_str(FIXTURE, Measure::Chars).unwrap();
        let rows = &parsed.rows;

        assert_eq!(rows.len(), 9);
        assert_eq!(rows[0], Row::passthru("playbook: playbooks/vsp/playbook_vps.yml"));
        assert_eq!(rows[1], Row::passthru(""));
        assert_eq!(rows[2], Row::play(Play::new("play #1 (vps): Test", "[]")));
        assert_eq!(rows[3], Row::passthru("    tasks:"));
        assert_eq!(rows[5], Row::passthru(""));
        assert_eq!(rows[6], Row::play(Play::new("play #2 (vps): Demo 2", "[]")));
        assert_eq!(rows[7], Row::passthru("    tasks:"));

        let first = group(&rows[4]);
        assert_eq!(first.play_number, 1);
        assert_eq!(
            first.tasks,
            vec![
                Task::new("Block", "Name", "[Tag1, Tag2]"),
                Task::new("", "Gather the package facts", "[apt, facts, vars]"),
            ]
        );

        let second = group(&rows[8]);
        assert_eq!(second.play_number, 2);
        assert_eq!(second.len(), 2);
        assert_eq!(rows[8].indent, 6);
    }

    #[test]
    fn test_parse_fixture_stats() {
        let stats = parse_str(FIXTURE, Measure::Chars).unwrap().stats;

        assert_eq!(stats.play_description, Longest::new("play #2 (vps): Demo 2", 21));
        assert_eq!(stats.play_tags, Longest::new("[]", 2));
        assert_eq!(stats.task_block, Longest::new("Block", 5));
        assert_eq!(stats.task_name, Longest::new("Gather the package facts", 24));
        assert_eq!(
            stats.task_description,
            Longest::new("Gather the package facts", 24)
        );
        assert_eq!(stats.task_tags, Longest::new("[apt, facts, vars]", 18));
    }

    #[test]
    fn test_play_line_closes_task_group() {
        let input = "  play #1: A\tTAGS: []\n    tasks:\n      T1\tTAGS: []\n  play #2: B\tTAGS: []\n      not a task\n";
        let parsed = parse_str(input, Measure::Chars).unwrap();

        assert_eq!(parsed.rows.len(), 5);
        assert_eq!(group(&parsed.rows[2]).len(), 1);
        assert_eq!(parsed.rows[4], Row::passthru("      not a task"));
    }

    #[test]
    fn test_six_space_lines_outside_group_pass_through() {
        let parsed = parse_str("      stray\n", Measure::Chars).unwrap();
        assert_eq!(parsed.rows, vec![Row::passthru("      stray")]);
    }

    #[test]
    fn test_tasks_before_any_play_use_play_zero() {
        let parsed = parse_str("    tasks:\n      T\tTAGS: []\n", Measure::Chars).unwrap();
        assert_eq!(group(&parsed.rows[1]).play_number, 0);
    }

    #[test]
    fn test_empty_group_is_kept() {
        let parsed = parse_str("    tasks:\n\n", Measure::Chars).unwrap();
        assert_eq!(parsed.rows.len(), 3);
        assert!(group(&parsed.rows[1]).is_empty());
    }

    #[test]
    fn test_malformed_play_reports_line() {
        let err = parse_str("header\n  play #1 (vps1): Test\tTAG: []\n", Measure::Chars).unwrap_err();
        assert!(matches!(err, ParseError::MalformedPlay { line: 2, .. }));
        assert_eq!(err.line(), 2);
        assert!(err.to_string().starts_with("line 2: unexpected play format"));
    }

    #[test]
    fn test_malformed_task_reports_line() {
        let err = parse_str("    tasks:\n      Broken task\n", Measure::Chars).unwrap_err();
        match err {
            ParseError::MalformedTask { line, text } => {
                assert_eq!(line, 2);
                assert_eq!(text, "      Broken task");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_read_error_aborts() {
        let lines = vec![
            Ok("  play #1: A\tTAGS: []".to_string()),
            Err(io::Error::new(io::ErrorKind::InvalidData, "bad utf-8")),
            Ok("never reached".to_string()),
        ];
        let err = parse_lines(lines, Measure::Chars).unwrap_err();
        assert!(matches!(err, ParseError::Read { line: 2, .. }));
    }

    #[test]
    fn test_parse_reader_strips_crlf() {
        let input = "  play #1: A\tTAGS: [x]\r\nplain\r\n";
        let parsed = parse_reader(io::Cursor::new(input), Measure::Chars).unwrap();
        assert_eq!(parsed.rows[0], Row::play(Play::new("play #1: A", "[x]")));
        assert_eq!(parsed.rows[1], Row::passthru("plain"));
    }

    #[test]
    fn test_stats_use_requested_measure() {
        let parsed = parse_str("    tasks:\n      日本\tTAGS: []\n", Measure::Monospace).unwrap();
        assert_eq!(parsed.stats.measure, Measure::Monospace);
        assert_eq!(parsed.stats.task_name.width, 4);
    }

    #[test]
    fn test_empty_input() {
        let parsed = parse_str("", Measure::Chars).unwrap();
        assert!(parsed.rows.is_empty());
        assert_eq!(parsed.stats, Stats::new(Measure::Chars));
    }
}
