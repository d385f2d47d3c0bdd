//! Query options of list requests.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Paging, sorting and filtering of a list request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub page: Option<u32>,
    pub size: Option<u32>,
    /// Sort entries such as `id,asc`, each sent as its own `sort` parameter.
    pub sort: Vec<String>,
    /// Criteria passed through verbatim, e.g. `calculationId.equals` -> `3`.
    pub filters: BTreeMap<String, String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Adds the sort parameter of `state`, if it has one.
    pub fn sort(mut self, state: &SortState) -> Self {
        if let Some(param) = state.to_param() {
            self.sort.push(param);
        }
        self
    }

    pub fn filter(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.filters.insert(key.into(), value.to_string());
        self
    }

    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page".to_string(), page.to_string()));
        }
        if let Some(size) = self.size {
            query.push(("size".to_string(), size.to_string()));
        }
        for sort in &self.sort {
            query.push(("sort".to_string(), sort.clone()));
        }
        for (key, value) in &self.filters {
            query.push((key.clone(), value.clone()));
        }
        query
    }
}

/// Column and direction of a sorted list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub predicate: String,
    pub ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            predicate: "id".to_string(),
            ascending: true,
        }
    }
}

impl SortState {
    pub fn new(predicate: impl Into<String>, ascending: bool) -> Self {
        Self {
            predicate: predicate.into(),
            ascending,
        }
    }

    /// `None` when no column is selected.
    pub fn to_param(&self) -> Option<String> {
        if self.predicate.is_empty() {
            None
        } else {
            Some(self.to_string())
        }
    }

    /// Clicking the same column flips the direction, another column starts ascending.
    pub fn toggle(&mut self, predicate: &str) {
        if self.predicate == predicate {
            self.ascending = !self.ascending;
        } else {
            self.predicate = predicate.to_string();
            self.ascending = true;
        }
    }
}

impl fmt::Display for SortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = if self.ascending { "asc" } else { "desc" };
        write!(f, "{},{}", self.predicate, direction)
    }
}

impl FromStr for SortState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(2, ',');
        let predicate = parts.next().unwrap_or_default().trim();
        let ascending = match parts.next().map(str::trim) {
            None | Some("asc") => true,
            Some("desc") => false,
            Some(other) => return Err(format!("unknown sort direction: {}", other)),
        };
        Ok(Self::new(predicate, ascending))
    }
}
