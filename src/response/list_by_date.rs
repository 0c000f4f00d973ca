use crate::response::Isbn;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull, DisplayFromStr, PickFirst};

/// 날짜별 Best Sellers 목록 응답 (`/lists/{date}/{list}.json`)
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListByDate {
    #[serde_as(as = "DefaultOnNull")]
    pub status: String,
    #[serde_as(as = "DefaultOnNull")]
    pub copyright: String,
    #[serde_as(as = "DefaultOnNull")]
    pub num_results: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub last_modified: String,
    #[serde_as(as = "DefaultOnNull")]
    pub results: ListByDateResult,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListByDateResult {
    #[serde_as(as = "DefaultOnNull")]
    pub list_name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub bestsellers_date: String,
    #[serde_as(as = "DefaultOnNull")]
    pub published_date: String,
    #[serde_as(as = "DefaultOnNull")]
    pub display_name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub normal_list_ends_at: i32,
    /// 목록 갱신 주기 (`WEEKLY`, `MONTHLY`)
    #[serde_as(as = "DefaultOnNull")]
    pub updated: String,
    #[serde_as(as = "DefaultOnNull")]
    pub books: Vec<RankedBook>,
    #[serde_as(as = "DefaultOnNull")]
    pub corrections: Vec<serde_json::Value>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankedBook {
    #[serde_as(as = "DefaultOnNull")]
    pub rank: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub rank_last_week: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub weeks_on_list: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub asterisk: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub dagger: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub primary_isbn13: String,
    #[serde_as(as = "DefaultOnNull")]
    pub primary_isbn10: String,
    #[serde_as(as = "DefaultOnNull")]
    pub publisher: String,
    #[serde_as(as = "DefaultOnNull")]
    pub description: String,
    #[serde_as(as = "DefaultOnNull<PickFirst<(_, DisplayFromStr)>>")]
    pub price: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub title: String,
    #[serde_as(as = "DefaultOnNull")]
    pub author: String,
    #[serde_as(as = "DefaultOnNull")]
    pub contributor: String,
    #[serde_as(as = "DefaultOnNull")]
    pub contributor_note: String,
    #[serde_as(as = "DefaultOnNull")]
    pub book_image: String,
    #[serde_as(as = "DefaultOnNull")]
    pub amazon_product_url: String,
    #[serde_as(as = "DefaultOnNull")]
    pub age_group: String,
    #[serde_as(as = "DefaultOnNull")]
    pub book_review_link: String,
    #[serde_as(as = "DefaultOnNull")]
    pub first_chapter_link: String,
    #[serde_as(as = "DefaultOnNull")]
    pub sunday_review_link: String,
    #[serde_as(as = "DefaultOnNull")]
    pub article_chapter_link: String,
    #[serde_as(as = "DefaultOnNull")]
    pub isbns: Vec<Isbn>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_text_fields_decode_as_empty() {
        let json = r#"{"status": "OK", "results": {
            "list_name": "Trade Fiction Paperback",
            "updated": null,
            "corrections": null,
            "books": [{
                "rank": 1,
                "title": "THE MARTIAN",
                "book_review_link": null,
                "age_group": null,
                "isbns": [{"isbn10": null, "isbn13": "9780804139021"}]
            }]
        }}"#;

        let list: ListByDate = serde_json::from_str(json).unwrap();
        let book = &list.results.books[0];

        assert_eq!(list.results.updated, "");
        assert!(list.results.corrections.is_empty());
        assert_eq!(book.title, "THE MARTIAN");
        assert_eq!(book.book_review_link, "");
        assert_eq!(book.isbns[0].isbn10, "");
        assert_eq!(book.isbns[0].isbn13, "9780804139021");
    }
}
