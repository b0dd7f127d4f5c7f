mod ureq_client;

use super::{HttpClient, Response};

pub use ureq_client::UreqClient;

#[cfg(test)]
mod mock_client;

#[cfg(test)]
pub use mock_client::MockClient;
