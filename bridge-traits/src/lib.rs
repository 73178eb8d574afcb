//! # Host Bridge Traits
//!
//! Capability traits the lyrics sync core needs from its host.
//!
//! ## Overview
//!
//! The core never talks to the network or the filesystem directly. It asks a
//! bridge for it, which keeps the pipeline testable with in-memory doubles and
//! lets each host decide how the capability is provided.
//!
//! ## Traits
//!
//! - [`HttpClient`](http::HttpClient) - Async HTTP operations with retry and timeouts
//! - [`FileSystemAccess`](storage::FileSystemAccess) - Directory listing and file metadata
//!
//! ## Platform Requirements
//!
//! | Platform | Implementation Crate |
//! |----------|----------------------|
//! | Desktop  | `bridge-desktop`     |
//!
//! ## Error Handling
//!
//! All bridge traits use the [`BridgeError`](error::BridgeError) type. Implementations
//! should convert platform-specific errors to `BridgeError` and keep the context
//! (URL, path, status code) in the message.
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` so a single handle can be shared
//! behind an `Arc` by every component of the pipeline.
//!
//! ## Example
//!
//! ```ignore
//! use bridge_traits::http::{HttpClient, HttpRequest, HttpResponse};
//! use bridge_traits::error::Result;
//! use async_trait::async_trait;
//!
//! pub struct MyHttpClient {
//!     client: reqwest::Client,
//! }
//!
//! #[async_trait]
//! impl HttpClient for MyHttpClient {
//!     async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
//!         todo!()
//!     }
//! }
//! ```

pub mod error;
pub mod http;
pub mod storage;

pub use error::BridgeError;

pub use http::{HttpClient, HttpMethod, HttpRequest, HttpResponse, RetryPolicy};
pub use storage::{FileMetadata, FileSystemAccess};
