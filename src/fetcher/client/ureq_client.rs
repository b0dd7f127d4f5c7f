use ureq::Error::Status;

use super::{HttpClient, Response};

use std::io::Read;
use std::time::Duration;

const USER_AGENT: &str = "UbuntuImageFetcher/1.0 (meseretakalu)";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct UreqClient {
    agent: ureq::Agent,
}

impl HttpClient for UreqClient {
    fn get(&self, url: &str) -> Response {
        let request = self.agent.get(url);

        let response = request.call();

        match response {
            Ok(response) => {
                let content_type = response.header("Content-Type").map(str::to_string);

                let body = response
                    .into_reader()
                    .bytes()
                    .collect::<Result<Vec<u8>, _>>();

                let Ok(body) = body else {
                    return Response::transport("failed to read response body");
                };

                Response::ok(body, content_type)
            }

            Err(Status(code, _)) => Response::status(code),

            Err(err) => Response::transport(err.to_string()),
        }
    }
}

impl UreqClient {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build();

        UreqClient { agent }
    }
}

impl Default for UreqClient {
    fn default() -> Self {
        Self::new()
    }
}
