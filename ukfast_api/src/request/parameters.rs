//! Request parameters shared by every list endpoint: pagination, sorting and filtering.

use std::fmt;
use std::str::FromStr;

use url::Url;

/// Filtering, sorting and pagination directives for a list request.
///
/// Builder methods consume and return `self`. The client never mutates a
/// caller's parameters; page navigation works on a clone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientRequestParameters {
    pub pagination: Option<PaginationParameters>,
    pub sorting: Option<SortingParameters>,
    pub filtering: Vec<FilteringParameter>,
}

/// Page selection. `None` fields use the API defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationParameters {
    /// Page number (1-indexed).
    pub page: Option<u64>,
    /// Results per page.
    pub per_page: Option<u64>,
}

/// Sort order, rendered as `sort=<property>:asc|desc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortingParameters {
    pub property: String,
    pub descending: bool,
}

/// A single filter, rendered as `<property>:<operator>=<v1>,<v2>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteringParameter {
    pub property: String,
    pub operator: FilterOperator,
    pub values: Vec<String>,
}

/// Comparison operators understood by the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterOperator {
    /// Equal to. This is the default.
    #[default]
    Eq,
    /// Like, with `*` wildcards.
    Lk,
    /// Greater than.
    Gt,
    /// Less than.
    Lt,
    /// In the given set.
    In,
    /// Not equal to.
    Neq,
    /// Not in the given set.
    Nin,
    /// Not like.
    Nlk,
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FilterOperator::Eq => "eq",
            FilterOperator::Lk => "lk",
            FilterOperator::Gt => "gt",
            FilterOperator::Lt => "lt",
            FilterOperator::In => "in",
            FilterOperator::Neq => "neq",
            FilterOperator::Nin => "nin",
            FilterOperator::Nlk => "nlk",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for FilterOperator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "eq" => Ok(FilterOperator::Eq),
            "lk" => Ok(FilterOperator::Lk),
            "gt" => Ok(FilterOperator::Gt),
            "lt" => Ok(FilterOperator::Lt),
            "in" => Ok(FilterOperator::In),
            "neq" => Ok(FilterOperator::Neq),
            "nin" => Ok(FilterOperator::Nin),
            "nlk" => Ok(FilterOperator::Nlk),
            _ => Err(()),
        }
    }
}

impl ClientRequestParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page number (1-indexed).
    pub fn with_page(mut self, page: u64) -> Self {
        self.pagination.get_or_insert_with(Default::default).page = Some(page);
        self
    }

    /// Sets the number of results per page.
    pub fn with_per_page(mut self, per_page: u64) -> Self {
        self.pagination.get_or_insert_with(Default::default).per_page = Some(per_page);
        self
    }

    /// Sorts by `property`, replacing any previous sort.
    pub fn with_sort(mut self, property: impl Into<String>, descending: bool) -> Self {
        self.sorting = Some(SortingParameters {
            property: property.into(),
            descending,
        });
        self
    }

    /// Adds a filter. Multiple values are joined with commas (for `in`/`nin`).
    pub fn with_filter<I, V>(mut self, property: impl Into<String>, operator: FilterOperator, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.filtering.push(FilteringParameter {
            property: property.into(),
            operator,
            values: values.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn page(&self) -> Option<u64> {
        self.pagination.and_then(|p| p.page)
    }

    pub fn per_page(&self) -> Option<u64> {
        self.pagination.and_then(|p| p.per_page)
    }

    /// Returns a copy targeting `page`. An existing `per_page` wins over `fallback_per_page`.
    pub fn for_page(&self, page: u64, fallback_per_page: Option<u64>) -> Self {
        let mut params = self.clone();
        let pagination = params.pagination.get_or_insert_with(Default::default);
        pagination.page = Some(page);
        if pagination.per_page.is_none() {
            pagination.per_page = fallback_per_page.filter(|n| *n > 0);
        }
        params
    }

    /// Renders the parameters as ordered query pairs.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page() {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(per_page) = self.per_page() {
            pairs.push(("per_page".to_string(), per_page.to_string()));
        }
        if let Some(sorting) = &self.sorting {
            let direction = if sorting.descending { "desc" } else { "asc" };
            pairs.push((
                "sort".to_string(),
                format!("{}:{}", sorting.property, direction),
            ));
        }
        for filter in &self.filtering {
            pairs.push((
                format!("{}:{}", filter.property, filter.operator),
                filter.values.join(","),
            ));
        }
        pairs
    }

    /// Appends these parameters to the given URL, returning the modified URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        let pairs = self.to_query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        url
    }
}
