//! Unified search.
//!
//! Zendesk API docs: <https://developer.zendesk.com/api-reference/ticketing/ticket-management/search/>

use crate::client::ZendeskClient;
use crate::error::ZendeskError;
use crate::models::{search_query, ListOptions, Query, SearchFilter, SearchResults, Ticket, User};

impl ZendeskClient {
    /// Searches tickets.
    ///
    /// The query is `type:ticket`, then each filter in order, then `term` in
    /// quotes (left out when empty).
    ///
    /// # Example
    ///
    /// ```ignore
    /// let results = client
    ///     .search_tickets(
    ///         "printer",
    ///         &ListOptions::new().with_per_page(25),
    ///         &[SearchFilter::status(SearchOperator::LessThan, "solved")],
    ///     )
    ///     .await?;
    /// ```
    pub async fn search_tickets(
        &self,
        term: &str,
        options: &ListOptions,
        filters: &[SearchFilter],
    ) -> Result<SearchResults<Ticket>, ZendeskError> {
        self.search("ticket", term, options, filters).await
    }

    /// Searches users; built the same way as [`ZendeskClient::search_tickets`].
    pub async fn search_users_with_filters(
        &self,
        term: &str,
        options: &ListOptions,
        filters: &[SearchFilter],
    ) -> Result<SearchResults<User>, ZendeskError> {
        self.search("user", term, options, filters).await
    }

    async fn search<T>(
        &self,
        result_type: &str,
        term: &str,
        options: &ListOptions,
        filters: &[SearchFilter],
    ) -> Result<SearchResults<T>, ZendeskError>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        let mut query = Query::new();
        options.apply(&mut query);
        query.push("query", search_query(result_type, term, filters));

        self.get(&query.to_endpoint("/api/v2/search.json")).await
    }
}
