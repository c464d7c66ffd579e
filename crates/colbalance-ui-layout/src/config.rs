//! Tuning knobs for column balancing

/// How an item picks among existing columns that still have room for it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColumnFit {
    /// Earliest created column with room wins.
    #[default]
    FirstFit,
    /// Column left with the least spare height after insertion wins; ties go
    /// to the earliest created column.
    BestFit,
}

/// How leftover (or missing) horizontal space is shared between columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlackDistribution {
    /// Every column receives the same share regardless of its width.
    #[default]
    Uniform,
    /// Each column receives a share proportional to its desired width.
    Proportional,
}

/// Specification for balanced column layout behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColumnBalanceSpec {
    pub fit: ColumnFit,
    pub slack: SlackDistribution,
}

impl ColumnBalanceSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fit(mut self, fit: ColumnFit) -> Self {
        self.fit = fit;
        self
    }

    pub fn slack(mut self, slack: SlackDistribution) -> Self {
        self.slack = slack;
        self
    }
}
