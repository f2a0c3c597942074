//! Catalog search models
//!
//! The public types are what callers see. `SearchRequest` and
//! [`parse_search_response`] deal with the YouTube Music web API. Its
//! renderer tree is deep and only loosely stable, so it is walked with JSON
//! pointers and every missing piece degrades to `None`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An artist credited on a candidate track
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogArtist {
    /// Display name
    pub name: Option<String>,
    /// Channel/browse id of the artist page
    pub id: Option<String>,
}

impl CatalogArtist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            id: None,
        }
    }
}

/// A song returned by the catalog search, in catalog ranking order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CandidateTrack {
    pub video_id: Option<String>,
    pub title: Option<String>,
    pub artists: Vec<CatalogArtist>,
}

impl CandidateTrack {
    /// Artist names joined for display, skipping unnamed entries
    pub fn artist_names(&self) -> String {
        self.artists
            .iter()
            .filter_map(|a| a.name.as_deref())
            .filter(|n| !n.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A resolved, playable track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayableResult {
    /// Watch URL on music.youtube.com
    pub url: String,
    pub title: String,
    pub artist: String,
}

// Request types for the search endpoint

#[derive(Debug, Serialize)]
pub(crate) struct SearchRequest<'a> {
    pub context: RequestContext<'a>,
    pub query: &'a str,
    pub params: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct RequestContext<'a> {
    pub client: ClientInfo<'a>,
    pub user: serde_json::Map<String, Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ClientInfo<'a> {
    pub client_name: &'a str,
    pub client_version: &'a str,
    pub hl: &'a str,
}

const SECTIONS_PATH: &str =
    "/contents/tabbedSearchResultsRenderer/tabs/0/tabRenderer/content/sectionListRenderer/contents";
const OVERLAY_VIDEO_ID_PATH: &str = "/overlay/musicItemThumbnailOverlayRenderer/content/musicPlayButtonRenderer/playNavigationEndpoint/watchEndpoint/videoId";
const ARTIST_PAGE_TYPE: &str = "MUSIC_PAGE_TYPE_ARTIST";
const RUN_SEPARATOR: &str = " • ";

/// Extract song candidates from a search response, preserving order
pub(crate) fn parse_search_response(body: &Value) -> Vec<CandidateTrack> {
    let Some(sections) = body.pointer(SECTIONS_PATH).and_then(Value::as_array) else {
        return Vec::new();
    };

    sections
        .iter()
        .filter_map(|section| section.pointer("/musicShelfRenderer/contents"))
        .filter_map(Value::as_array)
        .flatten()
        .filter_map(|item| item.get("musicResponsiveListItemRenderer"))
        .map(parse_list_item)
        .collect()
}

fn parse_list_item(item: &Value) -> CandidateTrack {
    let video_id = item
        .pointer("/playlistItemData/videoId")
        .or_else(|| item.pointer(OVERLAY_VIDEO_ID_PATH))
        .and_then(Value::as_str)
        .map(str::to_string);

    let title = flex_column_runs(item, 0)
        .and_then(|runs| runs.first())
        .and_then(|run| run.get("text"))
        .and_then(Value::as_str)
        .map(str::to_string);

    let artists = flex_column_runs(item, 1)
        .map(|runs| parse_artist_runs(runs.as_slice()))
        .unwrap_or_default();

    CandidateTrack {
        video_id,
        title,
        artists,
    }
}

fn flex_column_runs(item: &Value, column: usize) -> Option<&Vec<Value>> {
    item.pointer(&format!(
        "/flexColumns/{}/musicResponsiveListItemFlexColumnRenderer/text/runs",
        column
    ))
    .and_then(Value::as_array)
}

/// Artists are the runs linking to an artist page. Unlinked credits only
/// show up as plain text, in which case the leading run is the artist.
fn parse_artist_runs(runs: &[Value]) -> Vec<CatalogArtist> {
    let linked: Vec<CatalogArtist> = runs
        .iter()
        .filter_map(|run| {
            let browse = run.pointer("/navigationEndpoint/browseEndpoint")?;
            let browse_id = browse.get("browseId").and_then(Value::as_str);
            let page_type = browse
                .pointer("/browseEndpointContextSupportedConfigs/browseEndpointContextMusicConfig/pageType")
                .and_then(Value::as_str);

            let is_artist = page_type == Some(ARTIST_PAGE_TYPE)
                || browse_id.is_some_and(|id| id.starts_with("UC"));
            if !is_artist {
                return None;
            }

            Some(CatalogArtist {
                name: run.get("text").and_then(Value::as_str).map(str::to_string),
                id: browse_id.map(str::to_string),
            })
        })
        .collect();

    if !linked.is_empty() {
        return linked;
    }

    runs.first()
        .and_then(|run| run.get("text"))
        .and_then(Value::as_str)
        .filter(|text| !text.trim().is_empty() && *text != RUN_SEPARATOR)
        .map(|text| vec![CatalogArtist::new(text)])
        .unwrap_or_default()
}
