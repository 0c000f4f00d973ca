use reqwest::blocking;
use reqwest::{StatusCode, Url};
use std::io::Read;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::Duration;

/// 요청 한 건을 실행하고 응답 한 건을 돌려주는 전송 계층
///
/// 클라이언트가 네트워크에 접근하는 유일한 지점으로 테스트에서는 실제 I/O 없이
/// 미리 준비한 응답을 돌려주는 구현으로 교체할 수 있다.
/// 여러 스레드에서 같은 클라이언트를 공유할 수 있도록 `Send + Sync`를 요구한다.
pub trait Transport: Send + Sync {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request cancelled")]
    Cancelled,
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Other(String),
}

/// 요청 한 건에 대한 취소/타임아웃 정보
///
/// `Context`는 복제 비용이 낮으며 복제본끼리 같은 취소 플래그를 공유한다.
#[derive(Debug, Clone, Default)]
pub struct Context {
    timeout: Option<Duration>,
    cancelled: Arc<AtomicBool>,
}

impl Context {
    /// 취소되지 않고 타임아웃도 없는 컨텍스트
    pub fn background() -> Self {
        Context::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Context {
            timeout: Some(timeout),
            cancelled: Arc::default(),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// 다른 스레드에서 요청을 취소할 때 사용하는 핸들을 반환한다.
    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle {
            cancelled: self.cancelled.clone(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// 취소된 컨텍스트라면 [`TransportError::Cancelled`]를 반환한다.
    pub fn check(&self) -> Result<(), TransportError> {
        if self.is_cancelled() {
            Err(TransportError::Cancelled)
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Clone)]
pub struct CancelHandle {
    cancelled: Arc<AtomicBool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: Url,
    pub context: Context,
}

impl HttpRequest {
    pub fn get(url: Url, context: Context) -> Self {
        HttpRequest { url, context }
    }
}

/// 전송 계층이 돌려준 원본 응답
///
/// HTTP 상태 코드는 해석하지 않는다. 본문은 호출자가 소유하며 응답을 drop하면 함께 해제된다.
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Box<dyn Read + Send>,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Read + Send + 'static) -> Self {
        HttpResponse {
            status,
            body: Box::new(body),
        }
    }
}

impl std::fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

impl Transport for blocking::Client {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        request.context.check()?;

        let mut builder = self.get(request.url);
        if let Some(timeout) = request.context.timeout() {
            builder = builder.timeout(timeout);
        }

        let response = builder.send()?;
        request.context.check()?;

        Ok(HttpResponse::new(response.status(), response))
    }
}

static DEFAULT_TRANSPORT: OnceLock<Arc<dyn Transport>> = OnceLock::new();

/// 프로세스 전체에서 공유하는 기본 전송 계층
///
/// 전송 계층을 지정하지 않고 만든 클라이언트는 모두 같은 인스턴스를 사용한다.
pub fn default_transport() -> Arc<dyn Transport> {
    DEFAULT_TRANSPORT
        .get_or_init(|| Arc::new(blocking::Client::new()))
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_context_is_never_cancelled() {
        let ctx = Context::background();

        assert!(!ctx.is_cancelled());
        assert!(ctx.timeout().is_none());
        assert!(ctx.check().is_ok());
    }

    #[test]
    fn cancel_handle_cancels_every_clone() {
        let ctx = Context::with_timeout(Duration::from_secs(3));
        let cloned = ctx.clone();

        ctx.cancel_handle().cancel();

        assert!(cloned.is_cancelled());
        assert!(matches!(ctx.check(), Err(TransportError::Cancelled)));
        assert_eq!(cloned.timeout(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn reqwest_transport_fails_fast_on_cancelled_context() {
        let ctx = Context::background();
        ctx.cancel_handle().cancel();

        let url = Url::parse("http://127.0.0.1:9/unreachable").unwrap();
        let result = default_transport().execute(HttpRequest::get(url, ctx));

        assert!(matches!(result, Err(TransportError::Cancelled)));
    }

    #[test]
    fn default_transport_is_shared() {
        assert!(Arc::ptr_eq(&default_transport(), &default_transport()));
    }
}
