use crate::transport::TransportError;

/// 조회 작업에서 발생할 수 있는 에러
///
/// 각 단계에서 발생한 에러를 감싸기만 하고 내용을 바꾸지 않는다.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// 기본 URL과 엔드포인트를 합친 값이 올바른 URL이 아님
    #[error(transparent)]
    Url(#[from] url::ParseError),
    /// 네트워크 오류, 타임아웃, 취소
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// 응답 본문이 JSON이 아니거나 결과 구조와 맞지 않음
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    #[error("api key is required")]
    MissingApiKey,
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}
