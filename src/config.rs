pub mod log;

use crate::client::Client;
use crate::error::BuildError;
use serde::Deserialize;
use std::env;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Load(#[from] config::ConfigError),
    #[error(transparent)]
    Client(#[from] BuildError),
    #[error("failed to build http client: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    key: String,

    /// API 기본 URL로 설정하지 않을시 [`crate::client::BASE_URL`]을 사용한다.
    base_url: Option<String>,

    /// HTTP 요청 타임아웃(초), 설정하지 않을시 타임아웃을 적용하지 않는다.
    timeout_secs: Option<u64>,
}

impl ApiConfig {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    api: ApiConfig,
    logger: Option<log::Config>,
}

impl AppConfig {
    pub fn api(&self) -> &ApiConfig {
        &self.api
    }

    pub fn logger(&self) -> Option<&log::Config> {
        self.logger.as_ref()
    }

    /// 설정 값으로 API 클라이언트를 생성한다.
    ///
    /// 타임아웃이 설정 되어 있으면 해당 타임아웃을 가진 전송 계층을 새로 만들고,
    /// 그렇지 않으면 기본 전송 계층을 사용한다.
    pub fn client(&self) -> Result<Client, ConfigError> {
        let mut builder = Client::builder().api_key(self.api.key());

        if let Some(base) = self.api.base_url() {
            builder = builder.base_url(base);
        }
        if let Some(timeout) = self.api.timeout() {
            let http = reqwest::blocking::Client::builder().timeout(timeout).build()?;
            builder = builder.transport(Arc::new(http));
        }

        Ok(builder.build()?)
    }
}

/// 실행 환경에 따라 .env 파일을 로드한다.
pub fn load_dotenv() {
    let env_filename = env::var("RUN_MODE")
        .map(|env| format!(".env.{}", env))
        .unwrap_or_else(|_| ".env".into());

    dotenvy::from_filename(env_filename).ok();
}

/// `config/{RUN_MODE}.json` 파일과 `NYT_` 로 시작하는 환경 변수를 읽어 설정을 만든다.
///
/// 환경 변수는 `__`로 계층을 구분한다. (ex. `NYT_API__KEY`)
/// 설정 파일은 없어도 되며 같은 값이 있으면 환경 변수가 우선한다.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let env = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
    let config = config::Config::builder()
        .add_source(config::File::with_name(&format!("config/{}.json", env)).required(false))
        .add_source(config::Environment::with_prefix("NYT").separator("__"))
        .build()?;

    Ok(config.try_deserialize()?)
}
