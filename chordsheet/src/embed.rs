// Copyright 2026 The chordweb Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! Embeddable URLs for external streaming links.

use regex::Regex;

/// Converts a Spotify track, playlist or album link to the corresponding
/// embeddable player URL.
///
/// Recognition is by substring, so share links with locale prefixes or query
/// strings work too. Anything without a recognizable id segment yields
/// `None` and no player is embedded.
pub fn spotify_embed_url(url: &str) -> Option<String> {
    for kind in ["track", "playlist", "album"] {
        let id_regex = Regex::new(&format!("{kind}/([a-zA-Z0-9]+)")).unwrap();
        if let Some(captures) = id_regex.captures(url) {
            let id = &captures[1];
            return Some(format!(
                "https://open.spotify.com/embed/{kind}/{id}?utm_source=generator"
            ));
        }
    }
    None
}
