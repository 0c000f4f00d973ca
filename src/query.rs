use std::collections::BTreeMap;
use std::fmt;
use url::form_urlencoded;

/// API 키 이외에 요청마다 추가로 전달하는 쿼리 파라미터
///
/// 키 순서로 정렬되어 있어 같은 파라미터는 항상 같은 쿼리 문자열이 된다.
///
/// 인코딩은 `application/x-www-form-urlencoded` 규칙을 따르므로 공백은 `+`, `~`는 `%7E`가 되고
/// `*`는 그대로 남는다. Go의 `url.Values.Encode`와는 `~`, `*` 처리가 반대지만 서버는 둘 다 같은 값으로 해석한다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParam(BTreeMap<String, String>);

impl QueryParam {
    pub fn new() -> Self {
        QueryParam::default()
    }

    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for QueryParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish();
        f.write_str(&encoded)
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParam
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        QueryParam(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for QueryParam
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_sorted_pairs() {
        let mut qp = QueryParam::new();
        qp.insert("page", "5");
        qp.insert("first", "ffs");

        assert_eq!(qp.to_string(), "first=ffs&page=5");
    }

    #[test]
    fn percent_encodes_keys_and_values() {
        let qp = QueryParam::from([("title", "the martian & co"), ("author", "André")]);

        assert_eq!(qp.to_string(), "author=Andr%C3%A9&title=the+martian+%26+co");
    }

    #[test]
    fn encodes_tilde_and_keeps_asterisk() {
        let qp = QueryParam::from([("title", "x~y*z")]);

        assert_eq!(qp.to_string(), "title=x%7Ey*z");
    }

    #[test]
    fn empty_mapping_renders_nothing() {
        assert_eq!(QueryParam::new().to_string(), "");
    }

    #[test]
    fn insert_replaces_existing_value() {
        let mut qp = QueryParam::from([("offset", "20")]);

        assert_eq!(qp.insert("offset", "40"), Some("20".to_string()));
        assert_eq!(qp.get("offset"), Some("40"));
        assert_eq!(qp.len(), 1);
    }
}
