pub mod client;
pub mod decode;
pub mod errors;
pub mod retry;
pub mod types;

pub use client::{build_client, fetch_once};
pub use errors::FetchError;
pub use retry::fetch;
pub use types::PageText;
