//! Search parameter construction.
//!
//! The search endpoint takes free-form query parameters. [`SearchParameters`]
//! is the raw map the client sends; [`SearchQuery`] is a typed builder for the
//! keys the catalog documents.

use std::collections::HashMap;
use std::str::FromStr;

/// Raw key/value query parameters. Keys are unique; order is irrelevant.
pub type SearchParameters = HashMap<String, String>;

/// Media types accepted by the catalog's `media` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Movie,
    Podcast,
    Music,
    MusicVideo,
    Audiobook,
    ShortFilm,
    TvShow,
    Software,
    Ebook,
    All,
}

impl MediaType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Podcast => "podcast",
            MediaType::Music => "music",
            MediaType::MusicVideo => "musicVideo",
            MediaType::Audiobook => "audiobook",
            MediaType::ShortFilm => "shortFilm",
            MediaType::TvShow => "tvShow",
            MediaType::Software => "software",
            MediaType::Ebook => "ebook",
            MediaType::All => "all",
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let media = match s.to_ascii_lowercase().as_str() {
            "movie" => MediaType::Movie,
            "podcast" => MediaType::Podcast,
            "music" => MediaType::Music,
            "musicvideo" => MediaType::MusicVideo,
            "audiobook" => MediaType::Audiobook,
            "shortfilm" => MediaType::ShortFilm,
            "tvshow" => MediaType::TvShow,
            "software" | "app" | "apps" => MediaType::Software,
            "ebook" | "book" | "books" => MediaType::Ebook,
            "all" => MediaType::All,
            other => return Err(format!("unknown media type '{other}'")),
        };
        Ok(media)
    }
}

/// Typed builder for a catalog search.
///
/// ```
/// use tunesearch_core::{MediaType, SearchQuery};
///
/// let params = SearchQuery::new("blank space")
///     .media(MediaType::Music)
///     .limit(10)
///     .into_parameters();
/// assert_eq!(params["term"], "blank space");
/// assert_eq!(params["media"], "music");
/// assert_eq!(params["limit"], "10");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    term: String,
    media: Option<MediaType>,
    entity: Option<String>,
    country: Option<String>,
    lang: Option<String>,
    limit: Option<u32>,
    explicit: Option<bool>,
}

impl SearchQuery {
    #[must_use]
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn media(mut self, media: MediaType) -> Self {
        self.media = Some(media);
        self
    }

    /// Restricts results to one entity type within the media, e.g. `song` or `album`.
    #[must_use]
    pub fn entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    #[must_use]
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn explicit(mut self, explicit: bool) -> Self {
        self.explicit = Some(explicit);
        self
    }

    /// Converts the builder into the raw parameter map. Unset options are omitted.
    #[must_use]
    pub fn into_parameters(self) -> SearchParameters {
        let mut params = SearchParameters::new();
        params.insert("term".to_string(), self.term);
        if let Some(media) = self.media {
            params.insert("media".to_string(), media.as_str().to_string());
        }
        if let Some(entity) = self.entity {
            params.insert("entity".to_string(), entity);
        }
        if let Some(country) = self.country {
            params.insert("country".to_string(), country);
        }
        if let Some(lang) = self.lang {
            params.insert("lang".to_string(), lang);
        }
        if let Some(limit) = self.limit {
            params.insert("limit".to_string(), limit.to_string());
        }
        if let Some(explicit) = self.explicit {
            let value = if explicit { "Yes" } else { "No" };
            params.insert("explicit".to_string(), value.to_string());
        }
        params
    }
}

impl From<SearchQuery> for SearchParameters {
    fn from(query: SearchQuery) -> Self {
        query.into_parameters()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_only_query_has_one_parameter() {
        let params = SearchQuery::new("hello").into_parameters();
        assert_eq!(params.len(), 1);
        assert_eq!(params["term"], "hello");
    }

    #[test]
    fn all_options_are_emitted() {
        let params: SearchParameters = SearchQuery::new("apple")
            .media(MediaType::Ebook)
            .entity("ebook")
            .country("TW")
            .lang("zh_tw")
            .limit(20)
            .explicit(false)
            .into();
        assert_eq!(params.len(), 7);
        assert_eq!(params["media"], "ebook");
        assert_eq!(params["entity"], "ebook");
        assert_eq!(params["country"], "TW");
        assert_eq!(params["lang"], "zh_tw");
        assert_eq!(params["limit"], "20");
        assert_eq!(params["explicit"], "No");
    }

    #[test]
    fn media_type_parses_case_insensitively() {
        assert_eq!("MusicVideo".parse::<MediaType>(), Ok(MediaType::MusicVideo));
        assert_eq!("tvshow".parse::<MediaType>(), Ok(MediaType::TvShow));
        assert_eq!("apps".parse::<MediaType>(), Ok(MediaType::Software));
    }

    #[test]
    fn media_type_rejects_unknown() {
        assert!("vinyl".parse::<MediaType>().is_err());
    }

    #[test]
    fn media_type_display_matches_wire_value() {
        assert_eq!(MediaType::ShortFilm.to_string(), "shortFilm");
        assert_eq!(MediaType::Software.to_string(), "software");
    }
}
