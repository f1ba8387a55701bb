//! Running width statistics over a parsed listing.
//!
//! Layouts size their columns from these maxima instead of re-scanning rows.

use crate::measure::Measure;
use crate::model::{Play, Task};

/// The widest value seen for one field, and its width.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Longest {
    pub value: String,
    pub width: usize,
}

impl Longest {
    pub fn new(value: impl Into<String>, width: usize) -> Self {
        Longest {
            value: value.into(),
            width,
        }
    }

    /// Replaces the stored value if `candidate` is strictly wider.
    ///
    /// Ties keep the value seen first.
    fn offer(&mut self, candidate: &str, measure: Measure) {
        let width = measure.width(candidate);
        if width > self.width {
            self.width = width;
            self.value = candidate.to_string();
        }
    }
}

/// Longest play and task fields of a listing, measured with one [`Measure`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub measure: Measure,
    pub play_description: Longest,
    pub play_tags: Longest,
    pub task_block: Longest,
    pub task_name: Longest,
    pub task_description: Longest,
    pub task_tags: Longest,
}

impl Stats {
    pub fn new(measure: Measure) -> Self {
        Stats {
            measure,
            ..Default::default()
        }
    }

    pub fn update_with_play(&mut self, play: &Play) {
        let m = self.measure;
        self.play_description.offer(play.description(), m);
        self.play_tags.offer(&play.tags, m);
    }

    pub fn update_with_task(&mut self, task: &Task) {
        let m = self.measure;
        self.task_block.offer(&task.block, m);
        self.task_name.offer(&task.name, m);
        self.task_description.offer(&task.description(), m);
        self.task_tags.offer(&task.tags, m);
    }

    /// Human-readable `label: value` lines, labels right-aligned.
    ///
    /// Each field contributes two lines: the longest value and its length.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ansible_pp_render::{Measure, Stats};
    ///
    /// let lines = Stats::new(Measure::Chars).lines();
    /// assert_eq!(lines.len(), 12);
    /// assert_eq!(lines[1], "LongestPlayDescriptionLength: 0");
    /// ```
    pub fn lines(&self) -> Vec<String> {
        let fields = [
            ("PlayDescription", &self.play_description),
            ("PlayTags", &self.play_tags),
            ("TaskBlock", &self.task_block),
            ("TaskName", &self.task_name),
            ("TaskDescription", &self.task_description),
            ("TaskTags", &self.task_tags),
        ];

        let mut entries: Vec<(String, String)> = Vec::with_capacity(fields.len() * 2);
        for (name, longest) in fields {
            entries.push((format!("Longest{name}"), longest.value.clone()));
            entries.push((format!("Longest{name}Length"), longest.width.to_string()));
        }

        let label_width = entries
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);

        entries
            .into_iter()
            .map(|(label, value)| format!("{label:>label_width$}: {value}"))
            .collect()
    }
}
