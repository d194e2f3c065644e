//! Listing envelope shared by paginated endpoints.

use serde::{Deserialize, Serialize};

/// One page of a listing response.
///
/// `first` and `max` echo the pagination filters the page was requested with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    /// Records on this page.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Total number of records matching the filters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    /// Offset of the first record on this page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<i32>,
    /// Page size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i32>,
}

impl<T> PagedResponse<T> {
    /// Number of records on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the page holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
