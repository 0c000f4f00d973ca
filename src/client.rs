use crate::endpoint::{self, ListDate};
use crate::error::{BuildError, Error};
use crate::query::QueryParam;
use crate::response::{List, ListByDate, ListHistory, ListNames, Overview, Reviews};
use crate::transport::{self, Context, HttpRequest, HttpResponse, Transport};
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

/// NYT Books API 기본 URL
pub const BASE_URL: &str = "https://api.nytimes.com/svc/books/v3";

/// NYT Books API 클라이언트
///
/// 생성 이후에는 설정이 바뀌지 않으므로 복제하거나 여러 스레드에서 동시에 사용해도 된다.
#[derive(Clone)]
pub struct Client {
    base: String,
    api_key: String,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// 기본 전송 계층을 사용하는 클라이언트를 생성한다.
    pub fn new<S: Into<String>>(api_key: S) -> Result<Self, BuildError> {
        Client::builder().api_key(api_key).build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// 엔드포인트와 쿼리 파라미터로 요청 URL을 만든다.
    ///
    /// 쿼리의 첫 번째 파라미터는 항상 `api-key`이며 그 뒤로 `params`가 키 순서대로 붙는다.
    pub fn make_link(&self, endpoint: &str, params: Option<&QueryParam>) -> Result<Url, Error> {
        let mut url = Url::parse(&format!("{}{}", self.base, endpoint))?;

        {
            let mut query = url.query_pairs_mut();
            query.clear().append_pair("api-key", &self.api_key);
            if let Some(params) = params {
                query.extend_pairs(params.iter());
            }
        }

        Ok(url)
    }

    /// 전송 계층으로 GET 요청을 보낸다. HTTP 상태 코드는 확인하지 않는다.
    pub fn get(&self, ctx: &Context, url: Url) -> Result<HttpResponse, Error> {
        debug!(path = url.path(), "GET");

        let response = self.transport.execute(HttpRequest::get(url, ctx.clone()))?;
        debug!(status = %response.status, "response received");

        Ok(response)
    }

    fn fetch<T: DeserializeOwned>(
        &self,
        ctx: &Context,
        endpoint: &str,
        params: Option<&QueryParam>,
    ) -> Result<T, Error> {
        let url = self.make_link(endpoint, params)?;
        let response = self.get(ctx, url)?;

        Ok(serde_json::from_reader(response.body)?)
    }

    /// 가장 최근의 Best Sellers 목록을 조회한다.
    pub fn best_sellers_list(&self, ctx: &Context, params: Option<&QueryParam>) -> Result<List, Error> {
        self.fetch(ctx, endpoint::LISTS, params)
    }

    /// 지정한 날짜의 Best Sellers 목록을 조회한다.
    pub fn best_sellers_list_by_date(
        &self,
        ctx: &Context,
        date: ListDate,
        list: &str,
        params: Option<&QueryParam>,
    ) -> Result<ListByDate, Error> {
        self.fetch(ctx, &endpoint::lists_by_date(date, list), params)
    }

    pub fn best_sellers_list_history(
        &self,
        ctx: &Context,
        params: Option<&QueryParam>,
    ) -> Result<ListHistory, Error> {
        self.fetch(ctx, endpoint::HISTORY, params)
    }

    pub fn list_names(&self, ctx: &Context, params: Option<&QueryParam>) -> Result<ListNames, Error> {
        self.fetch(ctx, endpoint::NAMES, params)
    }

    /// 모든 Best Sellers 목록의 상위 5권을 조회한다.
    pub fn overview(&self, ctx: &Context, params: Option<&QueryParam>) -> Result<Overview, Error> {
        self.fetch(ctx, endpoint::OVERVIEW, params)
    }

    pub fn reviews(&self, ctx: &Context, params: Option<&QueryParam>) -> Result<Reviews, Error> {
        self.fetch(ctx, endpoint::REVIEWS, params)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

#[derive(Default)]
pub struct ClientBuilder {
    api_key: Option<String>,
    base: Option<String>,
    transport: Option<Arc<dyn Transport>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        ClientBuilder::default()
    }

    pub fn api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// 기본 URL을 변경한다. 설정하지 않을 시 [`BASE_URL`]을 사용한다.
    pub fn base_url<S: Into<String>>(mut self, base: S) -> Self {
        self.base = Some(base.into());
        self
    }

    /// 전송 계층을 교체한다. 설정하지 않을 시 [`transport::default_transport`]를 사용한다.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<Client, BuildError> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(BuildError::MissingApiKey)?;

        let base = self.base.unwrap_or_else(|| BASE_URL.to_owned());
        Url::parse(&base)?;
        let base = base.trim_end_matches('/').to_owned();

        let transport = self.transport.unwrap_or_else(transport::default_transport);

        Ok(Client {
            base,
            api_key,
            transport,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::TransportError;
    use reqwest::StatusCode;
    use std::io::{Cursor, Read};
    use std::sync::Mutex;

    struct StubTransport {
        body: &'static str,
        urls: Mutex<Vec<Url>>,
    }

    impl Transport for StubTransport {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.urls.lock().unwrap().push(request.url);
            Ok(HttpResponse::new(StatusCode::OK, Cursor::new(self.body)))
        }
    }

    fn client() -> Client {
        Client::new("apikey").unwrap()
    }

    #[test]
    fn link_without_params_carries_only_api_key() {
        let c = client();

        let got = c.make_link(endpoint::LISTS, None).unwrap();

        assert_eq!(got.as_str(), format!("{}/lists.json?api-key=apikey", c.base()));
    }

    #[test]
    fn link_with_empty_params_carries_only_api_key() {
        let c = client();

        let got = c.make_link(endpoint::NAMES, Some(&QueryParam::new())).unwrap();

        assert_eq!(got.as_str(), format!("{}/lists/names.json?api-key=apikey", c.base()));
    }

    #[test]
    fn link_appends_sorted_params_after_api_key() {
        let c = client();
        let qp = QueryParam::from([("offset", "40"), ("list", "hardcover-fiction")]);

        let got = c.make_link(endpoint::LISTS, Some(&qp)).unwrap();

        assert_eq!(
            got.as_str(),
            format!("{}/lists.json?api-key=apikey&list=hardcover-fiction&offset=40", c.base())
        );
    }

    #[test]
    fn link_on_interpolated_endpoint() {
        let c = client();
        let qp = QueryParam::from([("list", "hardcover-fiction"), ("offset", "40")]);
        let date = ListDate::parse("2021-07-06").unwrap();

        let got = c
            .make_link(&endpoint::lists_by_date(date, "hardcover-fiction"), Some(&qp))
            .unwrap();

        assert_eq!(
            got.as_str(),
            format!(
                "{}/lists/2021-07-06/hardcover-fiction.json?api-key=apikey&list=hardcover-fiction&offset=40",
                c.base()
            )
        );
    }

    #[test]
    fn link_keeps_escaped_list_name_in_path() {
        let c = client();

        let got = c
            .make_link(&endpoint::lists_by_date(ListDate::Current, "a?b"), None)
            .unwrap();

        assert_eq!(got.path(), "/svc/books/v3/lists/current/a%3Fb.json");
        assert_eq!(got.query(), Some("api-key=apikey"));
    }

    #[test]
    fn link_encodes_params_like_query_param_display() {
        let c = client();
        let qp = QueryParam::from([("title", "the martian & co")]);

        let got = c.make_link(endpoint::REVIEWS, Some(&qp)).unwrap();

        assert_eq!(got.query(), Some(format!("api-key=apikey&{}", qp).as_str()));
    }

    #[test]
    fn link_fails_when_concatenation_is_not_a_url() {
        let c = Client::builder()
            .api_key("apikey")
            .base_url("http://localhost")
            .build()
            .unwrap();

        let got = c.make_link(":notaport/lists.json", None);

        assert!(matches!(got, Err(Error::Url(_))));
    }

    #[test]
    fn builder_rejects_missing_or_blank_key() {
        assert_eq!(Client::builder().build().unwrap_err(), BuildError::MissingApiKey);
        assert_eq!(Client::new("  ").unwrap_err(), BuildError::MissingApiKey);
    }

    #[test]
    fn builder_rejects_relative_base_url() {
        let got = Client::builder().api_key("apikey").base_url("/svc/books/v3").build();

        assert!(matches!(got, Err(BuildError::InvalidBaseUrl(_))));
    }

    #[test]
    fn builder_trims_trailing_slash_from_base_url() {
        let c = Client::builder()
            .api_key("apikey")
            .base_url("http://localhost:8080/v3/")
            .build()
            .unwrap();

        let got = c.make_link(endpoint::LISTS, None).unwrap();

        assert_eq!(got.as_str(), "http://localhost:8080/v3/lists.json?api-key=apikey");
    }

    #[test]
    fn get_hands_back_raw_body() {
        let stub = Arc::new(StubTransport {
            body: "jetfuel",
            urls: Mutex::new(Vec::new()),
        });
        let c = Client::builder().api_key("apikey").transport(stub.clone()).build().unwrap();
        let url = Url::parse("http://someplace.com").unwrap();

        let mut response = c.get(&Context::background(), url.clone()).unwrap();
        let mut got = String::new();
        response.body.read_to_string(&mut got).unwrap();

        assert_eq!(got, "jetfuel");
        assert_eq!(stub.urls.lock().unwrap().as_slice(), &[url]);
    }
}
