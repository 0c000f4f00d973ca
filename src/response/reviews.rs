use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// 도서 리뷰 응답 (`/reviews.json`)
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reviews {
    #[serde_as(as = "DefaultOnNull")]
    pub status: String,
    #[serde_as(as = "DefaultOnNull")]
    pub copyright: String,
    #[serde_as(as = "DefaultOnNull")]
    pub num_results: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub results: Vec<Review>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    #[serde_as(as = "DefaultOnNull")]
    pub url: String,
    #[serde_as(as = "DefaultOnNull")]
    pub publication_dt: String,
    #[serde_as(as = "DefaultOnNull")]
    pub byline: String,
    #[serde_as(as = "DefaultOnNull")]
    pub book_title: String,
    #[serde_as(as = "DefaultOnNull")]
    pub book_author: String,
    #[serde_as(as = "DefaultOnNull")]
    pub summary: String,
    #[serde_as(as = "DefaultOnNull")]
    pub uuid: String,
    #[serde_as(as = "DefaultOnNull")]
    pub uri: String,
    #[serde_as(as = "DefaultOnNull")]
    pub isbn13: Vec<String>,
}
