use chrono::NaiveDate;
use std::fmt;

/// Best Sellers 목록 조회, 날짜를 지정하지 않으면 가장 최근 목록을 반환한다.
pub const LISTS: &str = "/lists.json";
/// 날짜별 Best Sellers 목록 조회 (`/lists/{date}/{list}.json`)
pub const LISTS_BY_DATE: &str = "/lists/{date}/{list}.json";
/// Best Sellers 목록 히스토리 조회
pub const HISTORY: &str = "/lists/best-sellers/history.json";
/// Best Sellers 목록 이름 조회
pub const NAMES: &str = "/lists/names.json";
/// 지정한 날짜의 모든 Best Sellers 목록의 상위 5권 조회
pub const OVERVIEW: &str = "/lists/overview.json";
/// 도서 리뷰 조회
pub const REVIEWS: &str = "/reviews.json";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// 날짜별 목록 조회에 사용하는 날짜
///
/// API는 날짜 자리에 `current`를 받으면 가장 최근 목록을 반환한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListDate {
    Current,
    On(NaiveDate),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid list date: {0} (expected \"current\" or YYYY-MM-DD)")]
pub struct InvalidListDate(String);

impl ListDate {
    pub fn parse(s: &str) -> Result<Self, InvalidListDate> {
        if s == "current" {
            return Ok(ListDate::Current);
        }
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(ListDate::On)
            .map_err(|_| InvalidListDate(s.to_owned()))
    }
}

impl From<NaiveDate> for ListDate {
    fn from(date: NaiveDate) -> Self {
        ListDate::On(date)
    }
}

impl fmt::Display for ListDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListDate::Current => f.write_str("current"),
            ListDate::On(date) => write!(f, "{}", date.format(DATE_FORMAT)),
        }
    }
}

/// 날짜별 목록 조회 경로를 만든다.
///
/// 목록 이름은 경로 한 단계로 들어가도록 퍼센트 인코딩 된다. (ex. `a?b` => `a%3Fb`)
pub fn lists_by_date(date: ListDate, list: &str) -> String {
    LISTS_BY_DATE
        .replace("{date}", &date.to_string())
        .replace("{list}", &urlencoding::encode(list))
}
