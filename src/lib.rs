//! New York Times Books API 클라이언트
//!
//! ```no_run
//! use nyt_books::{Client, Context, QueryParam};
//!
//! let client = Client::new("api-key")?;
//! let params = QueryParam::from([("list", "hardcover-fiction")]);
//! let list = client.best_sellers_list(&Context::background(), Some(&params))?;
//! println!("{}", list.num_results);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod query;
pub mod response;
pub mod transport;

pub use client::{Client, ClientBuilder, BASE_URL};
pub use endpoint::ListDate;
pub use error::{BuildError, Error};
pub use query::QueryParam;
pub use transport::{Context, HttpRequest, HttpResponse, Transport, TransportError};
