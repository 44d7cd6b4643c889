use url::form_urlencoded;

/// Ordered key/value pairs of a URL query string, with the same parsing and
/// serialization rules a browser applies to `location.search`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParameters {
    pairs: Vec<(String, String)>,
}

impl QueryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a query string; a leading `?` is optional.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = form_urlencoded::parse(query.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        Self { pairs }
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replaces the first occurrence of `key` in place and drops any later
    /// duplicates, or appends the pair when the key is new.
    pub fn set(&mut self, key: &str, value: &str) {
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(index) => {
                self.pairs[index].1 = value.to_string();
                let mut seen = 0usize;
                self.pairs.retain(|(k, _)| {
                    if k != key {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.pairs.push((key.to_string(), value.to_string())),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialized form without the leading `?`.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

#[cfg(test)]
impl QueryParameters {
    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_leading_question_mark() {
        let params = QueryParameters::parse("?page=2&cuisine=italian%2Cthai");
        assert_eq!(params.get("page"), Some("2"));
        assert_eq!(params.get("cuisine"), Some("italian,thai"));
        assert_eq!(params.get("diet"), None);
    }

    #[test]
    fn parse_decodes_plus_and_percent() {
        let params = QueryParameters::parse("q=green+beans&diet=Non%2DVegetarian");
        assert_eq!(params.get("q"), Some("green beans"));
        assert_eq!(params.get("diet"), Some("Non-Vegetarian"));
    }

    #[test]
    fn get_returns_first_duplicate() {
        let params = QueryParameters::parse("page=1&page=3");
        assert_eq!(params.get("page"), Some("1"));
    }

    #[test]
    fn set_replaces_in_place_and_collapses_duplicates() {
        let mut params = QueryParameters::parse("page=1&sort=new&page=3");
        params.set("page", "4");
        assert_eq!(params.to_query_string(), "page=4&sort=new");

        params.set("time", "Under30");
        assert_eq!(params.to_query_string(), "page=4&sort=new&time=Under30");
    }

    #[test]
    fn serialization_encodes_commas() {
        let mut params = QueryParameters::new();
        params.set("cuisine", "Indian,Italian");
        assert_eq!(params.to_query_string(), "cuisine=Indian%2CItalian");
    }

    #[test]
    fn empty_query_is_empty() {
        assert!(QueryParameters::parse("").is_empty());
        assert!(QueryParameters::parse("?").is_empty());
        assert_eq!(QueryParameters::new().to_query_string(), "");
    }
}
