use crate::response::{Isbn, ReviewLinks};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull, DisplayFromStr, PickFirst};

/// Best Sellers 히스토리 응답 (`/lists/best-sellers/history.json`)
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListHistory {
    #[serde_as(as = "DefaultOnNull")]
    pub status: String,
    #[serde_as(as = "DefaultOnNull")]
    pub copyright: String,
    #[serde_as(as = "DefaultOnNull")]
    pub num_results: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub results: Vec<HistoryBook>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryBook {
    #[serde_as(as = "DefaultOnNull")]
    pub title: String,
    #[serde_as(as = "DefaultOnNull")]
    pub description: String,
    #[serde_as(as = "DefaultOnNull")]
    pub contributor: String,
    #[serde_as(as = "DefaultOnNull")]
    pub author: String,
    #[serde_as(as = "DefaultOnNull")]
    pub contributor_note: String,
    #[serde_as(as = "DefaultOnNull<PickFirst<(_, DisplayFromStr)>>")]
    pub price: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub age_group: String,
    #[serde_as(as = "DefaultOnNull")]
    pub publisher: String,
    #[serde_as(as = "DefaultOnNull")]
    pub isbns: Vec<Isbn>,
    #[serde_as(as = "DefaultOnNull")]
    pub ranks_history: Vec<RankHistory>,
    #[serde_as(as = "DefaultOnNull")]
    pub reviews: Vec<ReviewLinks>,
}

/// 도서가 특정 목록에 올랐던 한 주의 기록
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankHistory {
    #[serde_as(as = "DefaultOnNull")]
    pub primary_isbn10: String,
    #[serde_as(as = "DefaultOnNull")]
    pub primary_isbn13: String,
    #[serde_as(as = "DefaultOnNull")]
    pub rank: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub list_name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub display_name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub published_date: String,
    #[serde_as(as = "DefaultOnNull")]
    pub bestsellers_date: String,
    #[serde_as(as = "DefaultOnNull")]
    pub weeks_on_list: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub ranks_last_week: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub asterisk: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub dagger: i32,
}
