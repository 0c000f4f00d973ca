use crate::response::{Isbn, ReviewLinks};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull, DisplayFromStr, PickFirst};

/// 최신 Best Sellers 목록 응답 (`/lists.json`)
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct List {
    #[serde_as(as = "DefaultOnNull")]
    pub status: String,
    #[serde_as(as = "DefaultOnNull")]
    pub copyright: String,
    #[serde_as(as = "DefaultOnNull")]
    pub num_results: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub last_modified: String,
    #[serde_as(as = "DefaultOnNull")]
    pub results: Vec<ListResult>,
}

/// 목록에 포함된 도서 한 권의 순위 정보
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListResult {
    #[serde_as(as = "DefaultOnNull")]
    pub list_name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub display_name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub bestsellers_date: String,
    #[serde_as(as = "DefaultOnNull")]
    pub published_date: String,
    #[serde_as(as = "DefaultOnNull")]
    pub rank: i32,
    /// 지난주 순위, 지난주 목록에 없었다면 0
    #[serde_as(as = "DefaultOnNull")]
    pub rank_last_week: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub weeks_on_list: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub asterisk: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub dagger: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub amazon_product_url: String,
    #[serde_as(as = "DefaultOnNull")]
    pub isbns: Vec<Isbn>,
    #[serde_as(as = "DefaultOnNull")]
    pub book_details: Vec<BookDetail>,
    #[serde_as(as = "DefaultOnNull")]
    pub reviews: Vec<ReviewLinks>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookDetail {
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
    pub primary_isbn13: String,
    #[serde_as(as = "DefaultOnNull")]
    pub primary_isbn10: String,
}
