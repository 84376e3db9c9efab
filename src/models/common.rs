//! Common types shared across Zendesk API models.
//!
//! This module defines pagination, sideload and search options, the
//! combined result types returned by "full" list and search calls, and the
//! query-string builder the resource methods use to apply them.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use super::{Group, Organization, User};

/// Timestamp as returned by the API (ISO 8601, UTC).
pub type Timestamp = DateTime<Utc>;

/// Pagination parameters for list operations.
///
/// Zendesk API docs: <https://developer.zendesk.com/api-reference/introduction/pagination/>
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Page of results to retrieve (1-based).
    pub page: Option<u32>,

    /// Number of results per page.
    pub per_page: Option<u32>,
}

impl ListOptions {
    /// Creates options with server-side defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page to retrieve.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the number of results per page.
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub(crate) fn apply(&self, query: &mut Query) {
        if let Some(page) = self.page {
            query.push("page", page);
        }
        if let Some(per_page) = self.per_page {
            query.push("per_page", per_page);
        }
    }
}

/// Filters for listing users.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListUsersOptions {
    pub list: ListOptions,

    /// `end-user`, `agent` or `admin`. Several roles are OR-ed.
    pub roles: Vec<String>,

    /// Custom role ID, for accounts with custom agent roles.
    pub permission_set: Option<i64>,
}

impl ListUsersOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(mut self, list: ListOptions) -> Self {
        self.list = list;
        self
    }

    /// Adds a role to filter on.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.push(role.into());
        self
    }

    pub fn with_permission_set(mut self, permission_set: i64) -> Self {
        self.permission_set = Some(permission_set);
        self
    }

    pub(crate) fn apply(&self, query: &mut Query) {
        self.list.apply(query);
        match self.roles.as_slice() {
            [] => {}
            [role] => {
                query.push("role", role);
            }
            roles => {
                for role in roles {
                    query.push("role[]", role);
                }
            }
        }
        if let Some(permission_set) = self.permission_set {
            query.push("permission_set", permission_set);
        }
    }
}

/// A related resource the server can include alongside a list response.
///
/// Zendesk API docs: <https://developer.zendesk.com/documentation/ticketing/using-the-zendesk-api/side_loading/>
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SideLoad {
    Users,
    Groups,
    Organizations,
    LastAudits,
    MetricSets,
    CommentCount,
    Dates,
    Brands,
    /// Any sideload not listed above, passed through as-is.
    Other(String),
}

impl SideLoad {
    /// Returns the value used in the `include` parameter.
    pub fn as_str(&self) -> &str {
        match self {
            SideLoad::Users => "users",
            SideLoad::Groups => "groups",
            SideLoad::Organizations => "organizations",
            SideLoad::LastAudits => "last_audits",
            SideLoad::MetricSets => "metric_sets",
            SideLoad::CommentCount => "comment_count",
            SideLoad::Dates => "dates",
            SideLoad::Brands => "brands",
            SideLoad::Other(name) => name,
        }
    }
}

impl fmt::Display for SideLoad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered list of sideloads for one call.
///
/// Sideloads are sent in the order they were added; duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideLoads {
    include: Vec<SideLoad>,
}

impl SideLoads {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a sideload.
    pub fn include(mut self, sideload: SideLoad) -> Self {
        self.include.push(sideload);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_empty()
    }

    /// Sideloads in the order they were added.
    pub fn as_slice(&self) -> &[SideLoad] {
        &self.include
    }

    pub(crate) fn apply(&self, query: &mut Query) {
        if self.include.is_empty() {
            return;
        }
        let joined = self
            .include
            .iter()
            .map(SideLoad::as_str)
            .collect::<Vec<_>>()
            .join(",");
        query.push("include", joined);
    }
}

impl FromIterator<SideLoad> for SideLoads {
    fn from_iter<I: IntoIterator<Item = SideLoad>>(iter: I) -> Self {
        Self {
            include: iter.into_iter().collect(),
        }
    }
}

/// One page of a list call together with its sideloads and pagination links.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// The primary resources on this page.
    pub items: Vec<T>,
    pub users: Vec<User>,
    pub groups: Vec<Group>,
    pub organizations: Vec<Organization>,
    /// URL of the next page, if there is one.
    pub next_page: Option<String>,
    /// URL of the previous page, if there is one.
    pub previous_page: Option<String>,
    /// Total number of matching resources.
    pub count: Option<i64>,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.next_page.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous_page.is_some()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            users: Vec::new(),
            groups: Vec::new(),
            organizations: Vec::new(),
            next_page: None,
            previous_page: None,
            count: None,
        }
    }
}

/// Comparison used by [`SearchFilter::Status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchOperator {
    Equal,
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
}

impl SearchOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchOperator::Equal => ":",
            SearchOperator::LessThan => "<",
            SearchOperator::GreaterThan => ">",
            SearchOperator::LessThanOrEqual => "<=",
            SearchOperator::GreaterThanOrEqual => ">=",
        }
    }
}

/// A condition narrowing a unified search.
///
/// Zendesk API docs: <https://support.zendesk.com/hc/en-us/articles/4408886879258>
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchFilter {
    /// `status<op><status>`, e.g. `status<solved`.
    Status(SearchOperator, String),
    /// `organization_id:<id>`.
    OrganizationId(i64),
    /// `group:<name>`; names containing a space are quoted.
    Group(String),
    /// Appended to the query verbatim.
    Raw(String),
}

impl SearchFilter {
    pub fn status(operator: SearchOperator, status: impl Into<String>) -> Self {
        SearchFilter::Status(operator, status.into())
    }

    pub fn group(name: impl Into<String>) -> Self {
        SearchFilter::Group(name.into())
    }
}

impl fmt::Display for SearchFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchFilter::Status(operator, status) => {
                write!(f, "status{}{}", operator.as_str(), status)
            }
            SearchFilter::OrganizationId(id) => write!(f, "organization_id:{}", id),
            SearchFilter::Group(name) if name.contains(' ') => write!(f, "group:\"{}\"", name),
            SearchFilter::Group(name) => write!(f, "group:{}", name),
            SearchFilter::Raw(raw) => f.write_str(raw),
        }
    }
}

/// Builds the `query` value of a unified search: the result type, then the
/// filters in the order given, then the quoted term.
pub(crate) fn search_query(result_type: &str, term: &str, filters: &[SearchFilter]) -> String {
    let mut parts = Vec::with_capacity(filters.len() + 2);
    parts.push(format!("type:{}", result_type));
    parts.extend(filters.iter().map(ToString::to_string));
    if !term.is_empty() {
        parts.push(format!("\"{}\"", term));
    }
    parts.join(" ")
}

/// Results of a unified search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct SearchResults<T> {
    #[serde(default, deserialize_with = "super::optional::null_as_empty")]
    pub results: Vec<T>,

    #[serde(default)]
    pub next_page: Option<String>,

    #[serde(default)]
    pub previous_page: Option<String>,

    #[serde(default)]
    pub count: Option<i64>,
}

impl<T> Default for SearchResults<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            next_page: None,
            previous_page: None,
            count: None,
        }
    }
}

/// Query-string parameters in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Appends the encoded parameters to `path`, or returns `path` unchanged
    /// when there are none.
    pub(crate) fn to_endpoint(&self, path: &str) -> String {
        if self.pairs.is_empty() {
            return path.to_string();
        }
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.pairs)
            .finish();
        format!("{}?{}", path, encoded)
    }
}

/// Joins IDs with commas, as expected by `ids=` parameters.
pub(crate) fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
