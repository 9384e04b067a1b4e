use serde::{Deserialize, Serialize};

/// Task priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Sort rank: high tasks come first
    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    /// Display name
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Cycle to the next priority (Low -> Medium -> High -> Low)
    pub fn next(&self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::Low,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

/// Named filter tab narrowing the displayed task set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterTab {
    All,
    Pending,
    Completed,
    High,
    Today,
}

impl FilterTab {
    /// Display name for the tab bar
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Pending => "Pending",
            Self::Completed => "Completed",
            Self::High => "High Priority",
            Self::Today => "Today",
        }
    }

    /// All tabs in display order
    pub fn all() -> &'static [FilterTab] {
        &[
            Self::All,
            Self::Pending,
            Self::Completed,
            Self::High,
            Self::Today,
        ]
    }

    /// Cycle to the next tab
    pub fn next(&self) -> Self {
        match self {
            Self::All => Self::Pending,
            Self::Pending => Self::Completed,
            Self::Completed => Self::High,
            Self::High => Self::Today,
            Self::Today => Self::All,
        }
    }

    /// Cycle to the previous tab
    pub fn prev(&self) -> Self {
        match self {
            Self::All => Self::Today,
            Self::Pending => Self::All,
            Self::Completed => Self::Pending,
            Self::High => Self::Completed,
            Self::Today => Self::High,
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    EditingTitle,
    Searching,
}
