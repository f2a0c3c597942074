//! Candidate selection and URL building

use crate::error::{CatalogError, CatalogResult};
use crate::models::{CandidateTrack, PlayableResult};

/// Watch-URL template; the video id is appended
pub const WATCH_URL_PREFIX: &str = "https://music.youtube.com/watch?v=";

/// Build the watch URL for a video id
pub fn watch_url(video_id: &str) -> String {
    format!("{}{}", WATCH_URL_PREFIX, video_id)
}

/// Pick the candidate to play for `artist_name`
///
/// The first candidate, in catalog order, with an artist whose name contains
/// `artist_name` (case-insensitive) wins. Without such a candidate the first
/// one is used. `None` only for an empty list.
pub fn select_candidate<'a>(
    candidates: &'a [CandidateTrack],
    artist_name: &str,
) -> Option<&'a CandidateTrack> {
    let wanted = artist_name.to_lowercase();

    candidates
        .iter()
        .find(|candidate| {
            candidate.artists.iter().any(|artist| {
                artist
                    .name
                    .as_deref()
                    .is_some_and(|name| name.to_lowercase().contains(&wanted))
            })
        })
        .or_else(|| candidates.first())
}

/// Turn the chosen candidate into a playable result
pub(crate) fn into_playable(candidate: &CandidateTrack) -> CatalogResult<PlayableResult> {
    let video_id = candidate
        .video_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or(CatalogError::MissingVideoId)?;

    Ok(PlayableResult {
        url: watch_url(video_id),
        title: candidate.title.clone().unwrap_or_default(),
        artist: candidate.artist_names(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CatalogArtist;

    fn candidate(id: Option<&str>, artists: &[&str]) -> CandidateTrack {
        CandidateTrack {
            video_id: id.map(str::to_string),
            title: Some(format!("title-{}", id.unwrap_or("none"))),
            artists: artists.iter().map(|a| CatalogArtist::new(*a)).collect(),
        }
    }

    #[test]
    fn test_matching_artist_wins_over_position() {
        let candidates = vec![candidate(Some("a"), &["Other"]), candidate(Some("b"), &["Artist X"])];
        let chosen = select_candidate(&candidates, "artist x").unwrap();
        assert_eq!(chosen.video_id.as_deref(), Some("b"));
    }

    #[test]
    fn test_substring_match_in_any_artist_entry() {
        let candidates = vec![
            candidate(Some("a"), &["Other"]),
            candidate(Some("b"), &["Someone", "The Artist X Band"]),
        ];
        let chosen = select_candidate(&candidates, "Artist X").unwrap();
        assert_eq!(chosen.video_id.as_deref(), Some("b"));
    }

    #[test]
    fn test_first_match_not_best_match() {
        let candidates = vec![
            candidate(Some("a"), &["Artist X and Friends"]),
            candidate(Some("b"), &["Artist X"]),
        ];
        let chosen = select_candidate(&candidates, "artist x").unwrap();
        assert_eq!(chosen.video_id.as_deref(), Some("a"));
    }

    #[test]
    fn test_no_match_falls_back_to_first() {
        let candidates = vec![candidate(Some("a"), &["Other"]), candidate(Some("b"), &["Another"])];
        let chosen = select_candidate(&candidates, "nobody").unwrap();
        assert_eq!(chosen.video_id.as_deref(), Some("a"));
    }

    #[test]
    fn test_unnamed_artists_are_skipped() {
        let mut unnamed = candidate(Some("a"), &[]);
        unnamed.artists.push(CatalogArtist::default());
        let candidates = vec![unnamed, candidate(Some("b"), &["Match"])];
        let chosen = select_candidate(&candidates, "match").unwrap();
        assert_eq!(chosen.video_id.as_deref(), Some("b"));
    }

    #[test]
    fn test_empty_list_selects_nothing() {
        assert!(select_candidate(&[], "anyone").is_none());
    }

    #[test]
    fn test_into_playable_builds_watch_url() {
        let result = into_playable(&candidate(Some("dQw4w9WgXcQ"), &["A", "B"])).unwrap();
        assert_eq!(result.url, "https://music.youtube.com/watch?v=dQw4w9WgXcQ");
        assert_eq!(result.title, "title-dQw4w9WgXcQ");
        assert_eq!(result.artist, "A, B");
    }

    #[test]
    fn test_into_playable_requires_video_id() {
        assert!(matches!(
            into_playable(&candidate(None, &["A"])),
            Err(CatalogError::MissingVideoId)
        ));
        assert!(matches!(
            into_playable(&candidate(Some(""), &["A"])),
            Err(CatalogError::MissingVideoId)
        ));
    }
}
