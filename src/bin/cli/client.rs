use quotebook::dto::{
    AuthorDetail, CreateAuthorDto, CreateQuoteDto, CreateTagDto, DeletedAuthorDto, QuoteListing,
    QuoteView, SearchListing, TagListing,
};
use quotebook::models::{Author, Tag, TagCount};
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Error type for CLI client operations
#[derive(Debug, Error)]
pub enum ClientError {
    /// Server returned an error status with a message body
    #[error("Server error ({}): {message}", .status.as_u16())]
    Server { status: reqwest::StatusCode, message: String },
    /// Network/connection/request error
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

/// Extension trait for checking HTTP responses and extracting server error messages
trait ResponseExt {
    /// Checks for error status and extracts the server's error message body
    async fn check(self) -> Result<reqwest::Response, ClientError>;
}

impl ResponseExt for reqwest::Response {
    async fn check(self) -> Result<reqwest::Response, ClientError> {
        if self.status().is_success() {
            return Ok(self);
        }
        let status = self.status();
        let message = match self.json::<serde_json::Value>().await {
            Ok(body) => body.get("error")
                .and_then(|e| e.as_str())
                .unwrap_or("Unknown error")
                .to_string(),
            Err(_) => format!("HTTP {}", status),
        };
        Err(ClientError::Server { status, message })
    }
}

/// Percent-encodes a value used as a single path segment
fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// HTTP client wrapper for communicating with the Quotebook server
pub struct QuotebookClient {
    /// The base URL of the server (e.g. "http://localhost:3000")
    base_url: String,
    /// The underlying HTTP client
    client: Client,
}

impl QuotebookClient {
    /// Creates a new QuotebookClient
    ///
    /// ### Arguments
    ///
    /// * `base_url` - The base URL of the Quotebook server
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.client.get(self.url(path)).send().await?.check().await?;
        Ok(response.json().await?)
    }

    async fn post_json<B: serde::Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ClientError> {
        let response = self.client.post(self.url(path)).json(body).send().await?.check().await?;
        Ok(response.json().await?)
    }

    // ── Listings ─────────────────────────────────────────────────────

    /// Fetches one page of all quotes
    pub async fn list_quotes(&self, page: i64) -> Result<QuoteListing, ClientError> {
        self.get_json(&format!("/{}", page)).await
    }

    /// Fetches one page of the quotes carrying a tag
    pub async fn quotes_by_tag(&self, tag_name: &str, page: i64) -> Result<TagListing, ClientError> {
        self.get_json(&format!("/tag/{}/{}", segment(tag_name), page)).await
    }

    /// Fetches one page of search results
    pub async fn search(&self, data: &str, page: i64) -> Result<SearchListing, ClientError> {
        self.get_json(&format!("/search_data/{}/{}", segment(data), page)).await
    }

    // ── Author endpoints ─────────────────────────────────────────────

    /// Gets an author and their quotes by full name
    pub async fn get_author(&self, fullname: &str) -> Result<AuthorDetail, ClientError> {
        self.get_json(&format!("/author/{}", segment(fullname))).await
    }

    /// Lists all authors
    pub async fn list_authors(&self) -> Result<Vec<Author>, ClientError> {
        self.get_json("/authors").await
    }

    /// Creates a new author
    pub async fn create_author(&self, dto: &CreateAuthorDto) -> Result<Author, ClientError> {
        self.post_json("/add_author/", dto).await
    }

    /// Deletes an author and all of their quotes
    pub async fn delete_author(&self, fullname: &str) -> Result<DeletedAuthorDto, ClientError> {
        let url = self.url(&format!("/author/{}", segment(fullname)));
        let response = self.client.delete(&url).send().await?.check().await?;
        Ok(response.json().await?)
    }

    // ── Tag endpoints ────────────────────────────────────────────────

    /// Lists all tags
    pub async fn list_tags(&self) -> Result<Vec<Tag>, ClientError> {
        self.get_json("/tags").await
    }

    /// Lists the most used tags
    pub async fn top_tags(&self) -> Result<Vec<TagCount>, ClientError> {
        self.get_json("/top_tags").await
    }

    /// Creates a tag, or returns the one that already has the name
    pub async fn create_tag(&self, name: String) -> Result<Tag, ClientError> {
        self.post_json("/add_tag/", &CreateTagDto { name }).await
    }

    // ── Quote endpoints ──────────────────────────────────────────────

    /// Creates a new quote
    pub async fn create_quote(&self, dto: &CreateQuoteDto) -> Result<QuoteView, ClientError> {
        self.post_json("/add_quote/", dto).await
    }
}
