//! HTTP implementation of the beer collaborators.

use std::path::Path;
use std::{fs, io};

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Response;
use tracing::debug;
use url::Url;

use super::config::ApiConfig;
use super::error::{ApiError, Result};
use crate::types::{Beer, IdentifyResponse};

const SEARCH_PATH: &str = "beers";
const IDENTIFY_PATH: &str = "identify-beer";
const IMAGE_FIELD: &str = "image";
const FALLBACK_MIME: &str = "application/octet-stream";

/// The two external services the client consumes.
///
/// Implemented over HTTP by [`HttpBeerApi`]; tests substitute in-process fakes.
#[async_trait]
pub trait BeerApi: Send + Sync {
	/// Look up beers matching `query`.
	async fn search(&self, query: &str) -> Result<Vec<Beer>>;

	/// Upload a photo and ask which beer it shows.
	async fn identify(&self, upload: ImageUpload) -> Result<IdentifyResponse>;
}

/// An image file ready to be sent as a multipart part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
	pub file_name: String,
	pub mime: String,
	pub bytes: Vec<u8>,
}

impl ImageUpload {
	/// Wrap raw bytes, guessing the MIME type from the file name.
	#[must_use]
	pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
		let file_name = file_name.into();
		let mime = mime_guess::from_path(&file_name)
			.first_raw()
			.unwrap_or(FALLBACK_MIME)
			.to_string();
		Self {
			file_name,
			mime,
			bytes,
		}
	}

	/// Read an image from disk.
	pub fn from_path(path: &Path) -> io::Result<Self> {
		let bytes = fs::read(path)?;
		let file_name = path
			.file_name()
			.map(|name| name.to_string_lossy().into_owned())
			.unwrap_or_else(|| "image".to_string());
		Ok(Self::new(file_name, bytes))
	}
}

/// Production client talking to `GET /beers` and `POST /identify-beer`.
pub struct HttpBeerApi {
	inner: reqwest::Client,
	base: Url,
	config: ApiConfig,
}

impl HttpBeerApi {
	pub fn new(config: ApiConfig) -> Result<Self> {
		let base = parse_origin(&config.origin)?;
		let inner = reqwest::Client::builder()
			.timeout(config.timeout)
			.connect_timeout(config.connect_timeout)
			.user_agent(&config.user_agent)
			.build()
			.map_err(|err| ApiError::Build(err.to_string()))?;

		Ok(Self {
			inner,
			base,
			config,
		})
	}

	pub fn with_defaults() -> Result<Self> {
		Self::new(ApiConfig::default())
	}

	#[must_use]
	pub fn config(&self) -> &ApiConfig {
		&self.config
	}

	/// Full URL of the search endpoint for `query`.
	pub fn search_url(&self, query: &str) -> Result<Url> {
		let mut url = self.endpoint(SEARCH_PATH)?;
		url.query_pairs_mut().append_pair("search", query);
		Ok(url)
	}

	pub fn identify_url(&self) -> Result<Url> {
		self.endpoint(IDENTIFY_PATH)
	}

	fn endpoint(&self, path: &str) -> Result<Url> {
		self.base.join(path).map_err(|err| ApiError::InvalidOrigin {
			origin: self.config.origin.clone(),
			reason: err.to_string(),
		})
	}
}

#[async_trait]
impl BeerApi for HttpBeerApi {
	async fn search(&self, query: &str) -> Result<Vec<Beer>> {
		let url = self.search_url(query)?;
		debug!("HTTP GET: {url}");
		let response = ensure_success(self.inner.get(url).send().await?).await?;
		let body = response.bytes().await?;
		let beers: Vec<Beer> =
			serde_json::from_slice(&body).map_err(|err| ApiError::Decode(err.to_string()))?;
		debug!(count = beers.len(), query, "search response decoded");
		Ok(beers)
	}

	async fn identify(&self, upload: ImageUpload) -> Result<IdentifyResponse> {
		let url = self.identify_url()?;
		debug!(file = %upload.file_name, size = upload.bytes.len(), "HTTP POST: {url}");
		let part = Part::bytes(upload.bytes)
			.file_name(upload.file_name)
			.mime_str(&upload.mime)?;
		let form = Form::new().part(IMAGE_FIELD, part);

		let response = ensure_success(self.inner.post(url).multipart(form).send().await?).await?;
		let body = response.bytes().await?;
		let identified: IdentifyResponse =
			serde_json::from_slice(&body).map_err(|err| ApiError::Decode(err.to_string()))?;
		debug!(?identified, "identify response decoded");
		Ok(identified)
	}
}

/// Turn non-2xx responses into [`ApiError::Status`], keeping the body text.
async fn ensure_success(response: Response) -> Result<Response> {
	let status = response.status();
	if status.is_success() {
		return Ok(response);
	}

	let body = response.text().await.unwrap_or_default();
	Err(ApiError::Status { status, body })
}

fn parse_origin(origin: &str) -> Result<Url> {
	let invalid = |reason: String| ApiError::InvalidOrigin {
		origin: origin.to_string(),
		reason,
	};

	let mut url = Url::parse(origin.trim()).map_err(|err| invalid(err.to_string()))?;
	if !matches!(url.scheme(), "http" | "https") {
		return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
	}
	if url.cannot_be_a_base() {
		return Err(invalid("origin cannot carry paths".to_string()));
	}
	// Endpoint paths are joined relative to the origin, so keep any prefix.
	if !url.path().ends_with('/') {
		let path = format!("{}/", url.path());
		url.set_path(&path);
	}
	url.set_query(None);
	url.set_fragment(None);
	Ok(url)
}
