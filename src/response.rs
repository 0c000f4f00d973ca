//! API 응답 본문을 표현하는 구조체
//!
//! 필드 이름은 API의 JSON 키와 1:1로 대응한다. API는 값이 없는 필드를 생략하거나
//! `null`로 보내는 경우가 많아 모든 구조체는 누락되거나 `null`인 필드를 기본값으로 채운다.

mod history;
mod list;
mod list_by_date;
mod names;
mod overview;
mod reviews;

pub use history::{HistoryBook, ListHistory, RankHistory};
pub use list::{BookDetail, List, ListResult};
pub use list_by_date::{ListByDate, ListByDateResult, RankedBook};
pub use names::{ListName, ListNames};
pub use overview::{BuyLink, Overview, OverviewBook, OverviewList, OverviewResult};
pub use reviews::{Review, Reviews};

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// ISBN10, ISBN13 쌍
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Isbn {
    #[serde_as(as = "DefaultOnNull")]
    pub isbn10: String,
    #[serde_as(as = "DefaultOnNull")]
    pub isbn13: String,
}

/// NYT 리뷰 관련 링크
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewLinks {
    #[serde_as(as = "DefaultOnNull")]
    pub book_review_link: String,
    #[serde_as(as = "DefaultOnNull")]
    pub first_chapter_link: String,
    #[serde_as(as = "DefaultOnNull")]
    pub sunday_review_link: String,
    #[serde_as(as = "DefaultOnNull")]
    pub article_chapter_link: String,
}
