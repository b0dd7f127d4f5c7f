use std::cell::RefCell;

use super::{HttpClient, Response};

pub struct MockClient {
    responses: RefCell<Vec<Response>>,
}

impl HttpClient for MockClient {
    fn get(&self, _url: &str) -> Response {
        let mut responses = self.responses.borrow_mut();

        if responses.is_empty() {
            Response::transport("mock response queue is empty")
        } else {
            responses.remove(0)
        }
    }
}

impl MockClient {
    pub fn new(responses: Vec<Response>) -> Self {
        Self {
            responses: RefCell::new(responses),
        }
    }
}
