use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultItem {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub channel_title: String,
}

#[derive(Deserialize)]
struct Response {
    #[serde(default)]
    items: Vec<SearchResultItem>,
}

/// One GET against the backend search endpoint. Non-2xx statuses and
/// transport failures both come back as `Err`; the caller folds them into a
/// single user-facing message.
pub async fn search_videos(
    client: &reqwest::Client,
    base_url: &str,
    query: &str,
) -> Result<Vec<SearchResultItem>, reqwest::Error> {
    let response = client
        .get(format!("{base_url}/api/search/videos"))
        .query(&[("q", query)])
        .send()
        .await?
        .error_for_status()?
        .json::<Response>()
        .await?;
    Ok(response.items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_search_response() {
        let body = r#"{
            "items": [
                {
                    "id": "abc",
                    "title": "T1",
                    "thumbnail": "https://i.ytimg.com/vi/abc/default.jpg",
                    "channelTitle": "C1"
                }
            ]
        }"#;
        let response: Response = serde_json::from_str(body).unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].id, "abc");
        assert_eq!(response.items[0].channel_title, "C1");
    }

    #[test]
    fn missing_items_key_decodes_as_empty() {
        let response: Response = serde_json::from_str("{}").unwrap();
        assert!(response.items.is_empty());
    }
}
