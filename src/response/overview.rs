use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull, DisplayFromStr, PickFirst};

/// 모든 목록의 상위 도서 응답 (`/lists/overview.json`)
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Overview {
    #[serde_as(as = "DefaultOnNull")]
    pub status: String,
    #[serde_as(as = "DefaultOnNull")]
    pub copyright: String,
    #[serde_as(as = "DefaultOnNull")]
    pub num_results: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub results: OverviewResult,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverviewResult {
    #[serde_as(as = "DefaultOnNull")]
    pub bestsellers_date: String,
    #[serde_as(as = "DefaultOnNull")]
    pub published_date: String,
    #[serde_as(as = "DefaultOnNull")]
    pub published_date_description: String,
    #[serde_as(as = "DefaultOnNull")]
    pub previous_published_date: String,
    #[serde_as(as = "DefaultOnNull")]
    pub next_published_date: String,
    #[serde_as(as = "DefaultOnNull")]
    pub lists: Vec<OverviewList>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverviewList {
    #[serde_as(as = "DefaultOnNull")]
    pub list_id: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub list_name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub list_name_encoded: String,
    #[serde_as(as = "DefaultOnNull")]
    pub display_name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub updated: String,
    pub list_image: Option<String>,
    pub list_image_width: Option<i32>,
    pub list_image_height: Option<i32>,
    #[serde_as(as = "DefaultOnNull")]
    pub books: Vec<OverviewBook>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverviewBook {
    #[serde_as(as = "DefaultOnNull")]
    pub age_group: String,
    #[serde_as(as = "DefaultOnNull")]
    pub amazon_product_url: String,
    #[serde_as(as = "DefaultOnNull")]
    pub article_chapter_link: String,
    #[serde_as(as = "DefaultOnNull")]
    pub author: String,
    #[serde_as(as = "DefaultOnNull")]
    pub book_image: String,
    #[serde_as(as = "DefaultOnNull")]
    pub book_image_width: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub book_image_height: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub book_review_link: String,
    #[serde_as(as = "DefaultOnNull")]
    pub book_uri: String,
    #[serde_as(as = "DefaultOnNull")]
    pub contributor: String,
    #[serde_as(as = "DefaultOnNull")]
    pub contributor_note: String,
    #[serde_as(as = "DefaultOnNull")]
    pub created_date: String,
    #[serde_as(as = "DefaultOnNull")]
    pub description: String,
    #[serde_as(as = "DefaultOnNull")]
    pub first_chapter_link: String,
    #[serde_as(as = "DefaultOnNull<PickFirst<(_, DisplayFromStr)>>")]
    pub price: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub primary_isbn10: String,
    #[serde_as(as = "DefaultOnNull")]
    pub primary_isbn13: String,
    #[serde_as(as = "DefaultOnNull")]
    pub publisher: String,
    #[serde_as(as = "DefaultOnNull")]
    pub rank: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub rank_last_week: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub sunday_review_link: String,
    #[serde_as(as = "DefaultOnNull")]
    pub title: String,
    #[serde_as(as = "DefaultOnNull")]
    pub updated_date: String,
    #[serde_as(as = "DefaultOnNull")]
    pub weeks_on_list: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub buy_links: Vec<BuyLink>,
}

/// 판매처 링크
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuyLink {
    #[serde_as(as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub url: String,
}
