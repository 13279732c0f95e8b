//! Tool definitions for RSS/Atom feed search.
//!
//! Each tool targets one fixed feed; only the query and result cap come
//! from the caller. News feeds are searched by title and description,
//! video feeds by title only.

use serde::Deserialize;
use serde_json::json;

use super::registry::ToolDescriptor;

pub const FCC_NEWS_TOOL: &str = "fcc_news_search";
pub const FCC_YOUTUBE_TOOL: &str = "fcc_youtube_search";
pub const GEHC_YOUTUBE_TOOL: &str = "GEHC_youtube_search";
pub const CAPGEMINI_NEWS_TOOL: &str = "capgemini_news_search";

pub const FCC_NEWS_FEED: &str = "https://www.freecodecamp.org/news/rss/";
pub const FCC_YOUTUBE_FEED: &str =
    "https://www.youtube.com/feeds/videos.xml?channel_id=UC8butISFwT-Wl7EV0hUK0BQ";
pub const GEHC_YOUTUBE_FEED: &str =
    "https://www.youtube.com/feeds/videos.xml?channel_id=UC04R4GsgwjtoI28q7F3YrLw";
pub const CAPGEMINI_NEWS_FEED: &str = "https://www.capgemini.com/news/rss/";

pub fn fcc_news_descriptor() -> ToolDescriptor {
    search_descriptor(
        FCC_NEWS_TOOL,
        "Search FreeCodeCamp news feed via RSS by title/description",
    )
}

pub fn fcc_youtube_descriptor() -> ToolDescriptor {
    search_descriptor(
        FCC_YOUTUBE_TOOL,
        "Search FreeCodeCamp Youtube channel via RSS by title",
    )
}

pub fn gehc_youtube_descriptor() -> ToolDescriptor {
    search_descriptor(
        GEHC_YOUTUBE_TOOL,
        "Search GEHC Youtube channel via RSS by title",
    )
}

pub fn capgemini_news_descriptor() -> ToolDescriptor {
    search_descriptor(
        CAPGEMINI_NEWS_TOOL,
        "Search Capgemini news feed via RSS by title/description",
    )
}

fn search_descriptor(name: &str, description: &str) -> ToolDescriptor {
    ToolDescriptor {
        name: name.to_string(),
        description: description.to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Substring to match, case-insensitive"
                },
                "max_results": {
                    "type": "integer",
                    "description": "Maximum number of results (default: 3)"
                }
            },
            "required": ["query"]
        }),
    }
}

#[derive(Debug, Deserialize)]
pub struct FeedSearchRequest {
    pub query: String,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_max_results() -> usize {
    3
}
