use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// Best Sellers 목록 이름 응답 (`/lists/names.json`)
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListNames {
    #[serde_as(as = "DefaultOnNull")]
    pub status: String,
    #[serde_as(as = "DefaultOnNull")]
    pub copyright: String,
    #[serde_as(as = "DefaultOnNull")]
    pub num_results: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub results: Vec<ListName>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListName {
    #[serde_as(as = "DefaultOnNull")]
    pub list_name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub display_name: String,
    /// 날짜별 목록 조회에 사용하는 목록 이름 (ex. `hardcover-fiction`)
    #[serde_as(as = "DefaultOnNull")]
    pub list_name_encoded: String,
    #[serde_as(as = "DefaultOnNull")]
    pub oldest_published_date: String,
    #[serde_as(as = "DefaultOnNull")]
    pub newest_published_date: String,
    #[serde_as(as = "DefaultOnNull")]
    pub updated: String,
}
