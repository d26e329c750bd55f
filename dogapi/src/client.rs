//! Blocking HTTP client for the dog.ceo API.

use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::{
    endpoint::Endpoint,
    types::{BreedList, Envelope, ImageUrl},
    Error,
};

/// Production base URL.
pub const DEFAULT_BASE_URL: &str = "https://dog.ceo/api/";

/// HTTP client for the dog.ceo API.
///
/// Every method performs exactly one blocking GET, with no custom headers,
/// retries, or caching. The underlying `reqwest` connection pool is reused
/// across calls, and the client can be shared between threads.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::blocking::Client,
    /// Base URL for the API. Defaults to [`DEFAULT_BASE_URL`].
    base_api_url: Url,
}

impl Client {
    /// Creates a new client pointing at the production dog.ceo API.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        let base_api_url = Url::parse(base_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", base_url, e);
            Error::InvalidBaseUrl(format!("{}: {}", base_url, e))
        })?;
        if base_api_url.cannot_be_a_base() {
            tracing::error!("Base URL cannot carry a path: {}", base_url);
            return Err(Error::InvalidBaseUrl(base_url.to_string()));
        }
        let http = reqwest::blocking::Client::builder().build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::Transport(e.to_string())
        })?;
        Ok(Self { http, base_api_url })
    }

    /// The base URL endpoints are appended to.
    pub fn base_url(&self) -> &Url {
        &self.base_api_url
    }

    /// Performs the request for `endpoint` and returns the envelope's `message`
    /// payload untouched.
    pub fn execute(&self, endpoint: &Endpoint) -> Result<Value, Error> {
        let url = endpoint.to_url(&self.base_api_url)?;
        tracing::debug!("GET {}", url);

        let resp = self.http.get(url).send().map_err(|e| {
            tracing::error!("Failed to get resource {}: {}", endpoint, e);
            Error::Transport(e.to_string())
        })?;

        let status = resp.status();
        let body = resp.text().map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e.to_string())
        })?;

        decode_response(status.as_u16(), &body)
    }

    /// Like [`Client::execute`], then deserializes the payload into `T`.
    pub fn get<T>(&self, endpoint: &Endpoint) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let payload = self.execute(endpoint)?;
        serde_json::from_value::<T>(payload).map_err(|e| {
            tracing::error!("Unexpected payload shape for {}: {}", endpoint, e);
            Error::Parse(format!("unexpected payload for {}: {}", endpoint, e))
        })
    }

    /// Fetches a single random image from the whole collection.
    pub fn random_image(&self) -> Result<ImageUrl, Error> {
        self.get::<ImageUrl>(&Endpoint::RandomImage)
    }

    /// Fetches `count` random images from the whole collection.
    ///
    /// The API returns at most 50 images no matter how many are requested.
    pub fn multiple_random_images(&self, count: u32) -> Result<Vec<ImageUrl>, Error> {
        self.get::<Vec<ImageUrl>>(&Endpoint::multiple_random_images(count))
    }

    /// Fetches a random image of `breed`, e.g. `hound`.
    pub fn random_image_by_breed(&self, breed: &str) -> Result<ImageUrl, Error> {
        self.get::<ImageUrl>(&Endpoint::random_image_by_breed(breed))
    }

    pub fn multiple_random_images_by_breed(
        &self,
        breed: &str,
        count: u32,
    ) -> Result<Vec<ImageUrl>, Error> {
        self.get::<Vec<ImageUrl>>(&Endpoint::multiple_random_images_by_breed(breed, count))
    }

    /// Fetches every image of `breed`.
    pub fn images_by_breed(&self, breed: &str) -> Result<Vec<ImageUrl>, Error> {
        self.get::<Vec<ImageUrl>>(&Endpoint::images_by_breed(breed))
    }

    /// Fetches a random image of a sub-breed, e.g. `hound` / `afghan`.
    pub fn random_image_by_sub_breed(
        &self,
        breed: &str,
        sub_breed: &str,
    ) -> Result<ImageUrl, Error> {
        self.get::<ImageUrl>(&Endpoint::random_image_by_sub_breed(breed, sub_breed))
    }

    pub fn multiple_random_images_by_sub_breed(
        &self,
        breed: &str,
        sub_breed: &str,
        count: u32,
    ) -> Result<Vec<ImageUrl>, Error> {
        self.get::<Vec<ImageUrl>>(&Endpoint::multiple_random_images_by_sub_breed(
            breed, sub_breed, count,
        ))
    }

    pub fn images_by_sub_breed(
        &self,
        breed: &str,
        sub_breed: &str,
    ) -> Result<Vec<ImageUrl>, Error> {
        self.get::<Vec<ImageUrl>>(&Endpoint::images_by_sub_breed(breed, sub_breed))
    }

    /// Lists every breed with its sub-breeds.
    pub fn breeds_list(&self) -> Result<BreedList, Error> {
        self.get::<BreedList>(&Endpoint::BreedsList)
    }

    /// Lists the sub-breeds of `breed`. Empty when the breed has none.
    pub fn sub_breeds(&self, breed: &str) -> Result<Vec<String>, Error> {
        self.get::<Vec<String>>(&Endpoint::sub_breeds(breed))
    }
}

/// Turns an HTTP status and body into the envelope payload or an [`Error`].
///
/// Non-2xx responses become [`Error::HttpStatus`], using the envelope message
/// when the body carries one. A body that is not an envelope is a
/// [`Error::Parse`]. An envelope whose `status` is not `"success"` is an
/// [`Error::Api`] holding the envelope message.
pub fn decode_response(status: u16, body: &str) -> Result<Value, Error> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<Envelope>(body)
            .ok()
            .filter(|envelope| envelope.message.is_some())
            .map(|envelope| envelope.error_message())
            .unwrap_or_else(|| reason_phrase(status));
        tracing::error!(
            "Request failed with status {}: {}",
            status,
            truncate_body(body)
        );
        return Err(Error::HttpStatus { status, message });
    }

    let envelope = serde_json::from_str::<Envelope>(body).map_err(|e| {
        tracing::error!("Failed to parse resource: {} | body: {}", e, truncate_body(body));
        Error::Parse(e.to_string())
    })?;

    if !envelope.is_success() {
        let message = envelope.error_message();
        tracing::error!("API returned status {:?}: {}", envelope.status, message);
        return Err(Error::Api(message));
    }

    Ok(envelope.message.unwrap_or(Value::Null))
}

fn reason_phrase(status: u16) -> String {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown status")
        .to_string()
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
