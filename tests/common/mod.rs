use nyt_books::{HttpRequest, HttpResponse, Transport, TransportError};
use reqwest::{StatusCode, Url};
use std::io::Cursor;
use std::sync::Mutex;

enum Reply {
    Body(StatusCode, String),
    Fail(String),
}

/// 네트워크에 접근하지 않고 미리 정해둔 응답을 돌려주는 전송 계층
pub struct StubTransport {
    reply: Reply,
    requests: Mutex<Vec<Url>>,
}

impl StubTransport {
    pub fn ok(body: &str) -> Self {
        StubTransport::with_status(StatusCode::OK, body)
    }

    pub fn with_status(status: StatusCode, body: &str) -> Self {
        StubTransport {
            reply: Reply::Body(status, body.to_owned()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        StubTransport {
            reply: Reply::Fail(message.to_owned()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Url> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for StubTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        request.context.check()?;
        self.requests.lock().unwrap().push(request.url);

        match &self.reply {
            Reply::Body(status, body) => Ok(HttpResponse::new(*status, Cursor::new(body.clone().into_bytes()))),
            Reply::Fail(message) => Err(TransportError::Other(message.clone())),
        }
    }
}
