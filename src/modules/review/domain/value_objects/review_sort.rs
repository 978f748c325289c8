use serde::{Deserialize, Serialize};

/// Field a review listing can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReviewSortField {
    #[default]
    #[serde(rename = "datePosted")]
    DatePosted,
    #[serde(rename = "rating")]
    Rating,
}

impl ReviewSortField {
    /// Unknown keys fall back to `DatePosted` rather than failing the request
    pub fn from_key(key: &str) -> Self {
        match key {
            "rating" => ReviewSortField::Rating,
            _ => ReviewSortField::DatePosted,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewSortField::DatePosted => "datePosted",
            ReviewSortField::Rating => "rating",
        }
    }
}

impl std::fmt::Display for ReviewSortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Case-insensitive; anything other than "asc" is descending
    pub fn from_key(key: &str) -> Self {
        if key.eq_ignore_ascii_case("asc") {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        }
    }

    pub fn is_ascending(&self) -> bool {
        matches!(self, SortDirection::Asc)
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

/// Requested ordering; the default is newest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReviewSort {
    pub field: ReviewSortField,
    pub direction: SortDirection,
}

impl ReviewSort {
    pub fn new(field: ReviewSortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Parse a `key,direction` pair such as `rating,asc`
    pub fn from_keys(field: &str, direction: &str) -> Self {
        Self::new(
            ReviewSortField::from_key(field),
            SortDirection::from_key(direction),
        )
    }

    pub fn ascending(field: ReviewSortField) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn descending(field: ReviewSortField) -> Self {
        Self::new(field, SortDirection::Desc)
    }
}

impl std::fmt::Display for ReviewSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.field, self.direction)
    }
}
