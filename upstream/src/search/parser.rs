use crate::errors::Result;
use crate::models::SocialPost;
use json::{get_array, get_str};
use serde_json::Value;

// 搜索结果的标题和摘要里带有<strong>等高亮标签
pub fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.replace("&amp;", "&")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .trim()
        .to_string()
}

/// Brave web search → posts. Results without title or url are dropped.
pub fn parse_search_results(data: &str, limit: usize) -> Result<Vec<SocialPost>> {
    let value: Value = json::loads(data)?;
    let Some(rows) = get_array(&value, "/web/results") else {
        return Ok(vec![]);
    };
    Ok(rows
        .iter()
        .filter_map(|row| {
            let title = strip_tags(get_str(row, "/title")?);
            let url = get_str(row, "/url")?.to_string();
            let source = get_str(row, "/profile/name")
                .or_else(|| get_str(row, "/meta_url/hostname"))
                .unwrap_or("Unknown")
                .to_string();
            Some(SocialPost {
                title,
                url,
                source,
                description: get_str(row, "/description")
                    .map(strip_tags)
                    .filter(|d| !d.is_empty()),
                published: get_str(row, "/page_age")
                    .or_else(|| get_str(row, "/age"))
                    .map(str::to_string),
            })
        })
        .take(limit)
        .collect())
}
