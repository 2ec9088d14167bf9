use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::item::Item;

/// Error for option names that don't parse
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Status tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    /// Tabs in display order
    pub const TABS: [StatusFilter; 3] = [
        StatusFilter::All,
        StatusFilter::Active,
        StatusFilter::Completed,
    ];

    pub fn admits(self, item: &Item) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => !item.completed,
            StatusFilter::Completed => item.completed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Active => "Active",
            StatusFilter::Completed => "Completed",
        }
    }

    /// Next tab to the right, wrapping
    pub fn next(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Active,
            StatusFilter::Active => StatusFilter::Completed,
            StatusFilter::Completed => StatusFilter::All,
        }
    }

    /// Next tab to the left, wrapping
    pub fn prev(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Completed,
            StatusFilter::Active => StatusFilter::All,
            StatusFilter::Completed => StatusFilter::Active,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            "completed" | "done" => Ok(StatusFilter::Completed),
            _ => Err(UnknownOption {
                kind: "status filter",
                value: s.to_string(),
                expected: "all, active, completed",
            }),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_ascii_lowercase())
    }
}

/// Sort dropdown value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOption {
    #[default]
    #[serde(rename = "a-z", alias = "A-Z")]
    AToZ,
    #[serde(rename = "z-a", alias = "Z-A")]
    ZToA,
    #[serde(rename = "oldest")]
    Oldest,
    #[serde(rename = "newest")]
    Newest,
}

impl SortOption {
    pub fn label(self) -> &'static str {
        match self {
            SortOption::AToZ => "A-Z",
            SortOption::ZToA => "Z-A",
            SortOption::Oldest => "Oldest",
            SortOption::Newest => "Newest",
        }
    }

    /// Next option in dropdown order, wrapping
    pub fn next(self) -> Self {
        match self {
            SortOption::AToZ => SortOption::ZToA,
            SortOption::ZToA => SortOption::Oldest,
            SortOption::Oldest => SortOption::Newest,
            SortOption::Newest => SortOption::AToZ,
        }
    }
}

impl FromStr for SortOption {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a-z" => Ok(SortOption::AToZ),
            "z-a" => Ok(SortOption::ZToA),
            "oldest" => Ok(SortOption::Oldest),
            "newest" => Ok(SortOption::Newest),
            _ => Err(UnknownOption {
                kind: "sort option",
                value: s.to_string(),
                expected: "a-z, z-a, oldest, newest",
            }),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the search term and the status tab combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Composition {
    /// Whichever of search / tab was set last is the only filter in effect
    Exclusive,
    /// Search and tab both filter
    #[default]
    Conjunctive,
}

impl FromStr for Composition {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "exclusive" => Ok(Composition::Exclusive),
            "conjunctive" => Ok(Composition::Conjunctive),
            _ => Err(UnknownOption {
                kind: "composition",
                value: s.to_string(),
                expected: "exclusive, conjunctive",
            }),
        }
    }
}

/// Which filter knob was touched most recently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKnob {
    Search,
    #[default]
    Status,
}

/// The view knobs. Non-authoritative: the visible list is always derived
/// from these plus the collection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ViewState {
    /// Trimmed search term; empty means no search
    pub search_term: String,
    pub status_filter: StatusFilter,
    /// Value shown in the sort dropdown
    pub sort_option: SortOption,
    /// Whether `sort_option` currently orders the view
    pub sort_applied: bool,
    pub last_filter: FilterKnob,
}

impl ViewState {
    pub fn with_sort_option(sort_option: SortOption) -> Self {
        ViewState {
            sort_option,
            ..ViewState::default()
        }
    }

    /// Whether the search term currently filters the view
    pub fn search_applied(&self, composition: Composition) -> bool {
        if self.search_term.is_empty() {
            return false;
        }
        match composition {
            Composition::Conjunctive => true,
            Composition::Exclusive => self.last_filter == FilterKnob::Search,
        }
    }

    /// Whether the selected status tab currently filters the view
    pub fn status_applied(&self, composition: Composition) -> bool {
        match composition {
            Composition::Conjunctive => true,
            Composition::Exclusive => self.last_filter == FilterKnob::Status,
        }
    }

    /// The status tab currently in effect
    pub fn effective_status(&self, composition: Composition) -> StatusFilter {
        if self.status_applied(composition) {
            self.status_filter
        } else {
            StatusFilter::All
        }
    }

    /// The sort currently in effect, if any
    pub fn effective_sort(&self) -> Option<SortOption> {
        self.sort_applied.then_some(self.sort_option)
    }
}
