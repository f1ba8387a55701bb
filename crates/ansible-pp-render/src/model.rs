//! Line model produced by the parser.
//!
//! A parsed listing is an ordered sequence of [`Row`]s. Each row carries one of
//! three payloads: a line passed through verbatim, a play header, or the group
//! of tasks listed under one play. Layouts match on [`RowKind`] and render each
//! variant from its own data.

use std::fmt;

/// One logical line (or, for task groups, block of lines) of a listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    /// Leading indentation of the source line.
    ///
    /// Recorded for every row but never consulted by a layout.
    pub indent: usize,
    pub kind: RowKind,
}

impl Row {
    pub fn passthru(line: impl Into<String>) -> Self {
        Row {
            indent: 0,
            kind: RowKind::Passthru(line.into()),
        }
    }

    pub fn play(play: Play) -> Self {
        Row {
            indent: 2,
            kind: RowKind::Play(play),
        }
    }

    pub fn tasks(group: TaskGroup) -> Self {
        Row {
            indent: 6,
            kind: RowKind::Tasks(group),
        }
    }
}

/// Payload of a [`Row`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowKind {
    /// A line that is not play or task content, kept as-is.
    Passthru(String),
    Play(Play),
    Tasks(TaskGroup),
}

/// A play header such as `play #1 (webservers): Deploy  TAGS: [deploy]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Play {
    pub name: String,
    pub tags: String,
}

impl Play {
    pub fn new(name: impl Into<String>, tags: impl Into<String>) -> Self {
        Play {
            name: name.into(),
            tags: tags.into(),
        }
    }

    /// The text shown in the first column.
    pub fn description(&self) -> &str {
        &self.name
    }
}

/// A single task line, optionally prefixed by the block or role it belongs to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Task {
    /// Block/role name; empty when the line had no `block: name` prefix.
    pub block: String,
    pub name: String,
    pub tags: String,
}

impl Task {
    pub fn new(block: impl Into<String>, name: impl Into<String>, tags: impl Into<String>) -> Self {
        Task {
            block: block.into(),
            name: name.into(),
            tags: tags.into(),
        }
    }

    /// `name`, or `block: name` when the task has a block.
    ///
    /// ```rust
    /// use ansible_pp_render::Task;
    ///
    /// assert_eq!(Task::new("", "Ping", "[]").description(), "Ping");
    /// assert_eq!(Task::new("common", "Ping", "[]").description(), "common: Ping");
    /// ```
    pub fn description(&self) -> String {
        if self.block.is_empty() {
            self.name.clone()
        } else {
            format!("{}: {}", self.block, self.name)
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}    TAGS: {}", self.description(), self.tags)
    }
}

/// The tasks listed under one play's `tasks:` header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskGroup {
    /// 1-based number of the play this group belongs to (0 if no play was seen).
    pub play_number: usize,
    pub tasks: Vec<Task>,
}

impl TaskGroup {
    pub fn new(play_number: usize) -> Self {
        TaskGroup {
            play_number,
            tasks: Vec::new(),
        }
    }

    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthru_is_verbatim() {
        let row = Row::passthru("    tasks:");
        assert_eq!(row.kind, RowKind::Passthru("    tasks:".to_string()));
        assert_eq!(row.indent, 0);
    }

    #[test]
    fn test_play_description() {
        let play = Play::new("play #1 (demo): Demo play", "[p1, demo]");
        assert_eq!(play.description(), "play #1 (demo): Demo play");
    }

    #[test]
    fn test_task_description() {
        assert_eq!(Task::new("", "Task 1", "[t1]").description(), "Task 1");
        assert_eq!(Task::new("Block 1", "Task 1", "[t1]").description(), "Block 1: Task 1");
    }

    #[test]
    fn test_task_display() {
        let task = Task::new("Block", "Name", "[♪, ♪♪, ♪♪♪]");
        assert_eq!(task.to_string(), "Block: Name    TAGS: [♪, ♪♪, ♪♪♪]");
    }

    #[test]
    fn test_task_group() {
        let mut group = TaskGroup::new(2);
        assert!(group.is_empty());
        group.push(Task::new("", "Task 2.1", "[]"));
        group.push(Task::new("", "Task 2.2", "[]"));
        assert_eq!(group.len(), 2);
        assert_eq!(group.tasks[1].name, "Task 2.2");
    }

    #[test]
    fn test_row_indents() {
        assert_eq!(Row::play(Play::default()).indent, 2);
        assert_eq!(Row::tasks(TaskGroup::new(1)).indent, 6);
    }
}
