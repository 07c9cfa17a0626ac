use std::borrow::Cow;
use std::thread;
use std::time::Duration;

use rust_embed::Embed;
use serde::de::DeserializeOwned;

use crate::content::ContentError;
use crate::content::model::{GrammarLesson, Story, Validate};

#[derive(Embed)]
#[folder = "assets/content/"]
struct ContentAssets;

/// The two bundled collections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collection {
    Stories,
    Grammar,
}

impl Collection {
    pub fn file_name(self) -> &'static str {
        match self {
            Collection::Stories => "stories.json",
            Collection::Grammar => "grammar.json",
        }
    }

    fn fallback_notice(self) -> &'static str {
        match self {
            Collection::Stories => "Using inline story data because fetch failed.",
            Collection::Grammar => "Using inline grammar data because fetch failed.",
        }
    }

    fn unavailable_notice(self) -> &'static str {
        match self {
            Collection::Stories => {
                "Stories could not be loaded. Run a local server to enable JSON fetch."
            }
            Collection::Grammar => {
                "Grammar lessons could not be loaded. Run a local server to enable JSON fetch."
            }
        }
    }
}

/// Where a loaded collection came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentSource {
    Remote,
    Embedded,
    Unavailable,
}

#[derive(Clone, Debug)]
pub struct LoadOutcome<T> {
    pub items: Vec<T>,
    pub source: ContentSource,
    pub notice: Option<&'static str>,
}

pub struct Content {
    pub stories: LoadOutcome<Story>,
    pub grammar: LoadOutcome<GrammarLesson>,
}

pub struct ContentRepository {
    base_url: Option<String>,
    timeout: Duration,
}

impl ContentRepository {
    /// `base_url` of `None` skips the network entirely and serves the
    /// bundled collections.
    pub fn new(base_url: Option<String>, timeout: Duration) -> Self {
        Self { base_url, timeout }
    }

    pub fn load_stories(&self) -> LoadOutcome<Story> {
        self.load(Collection::Stories)
    }

    pub fn load_grammar(&self) -> LoadOutcome<GrammarLesson> {
        self.load(Collection::Grammar)
    }

    /// Load both collections concurrently and wait for both.
    pub fn load_all(&self) -> Content {
        thread::scope(|s| {
            let stories = s.spawn(|| self.load_stories());
            let grammar = self.load_grammar();
            let stories = stories.join().unwrap_or_else(|_| {
                log::error!("story loader thread panicked");
                unavailable(Collection::Stories)
            });
            Content { stories, grammar }
        })
    }

    fn load<T: DeserializeOwned + Validate>(&self, collection: Collection) -> LoadOutcome<T> {
        let fetched = match self.base_url {
            Some(ref base) => fetch_url(&join_url(base, collection.file_name()), self.timeout),
            None => Err(ContentError::Fetch("offline".to_string())),
        };
        resolve(collection, fetched, embedded(collection))
    }
}

/// Pick the first usable copy of a collection: the fetched body, then the
/// bundled one, then nothing.
pub fn resolve<T: DeserializeOwned + Validate>(
    collection: Collection,
    fetched: Result<String, ContentError>,
    embedded: Result<Cow<'static, [u8]>, ContentError>,
) -> LoadOutcome<T> {
    let name = collection.file_name();
    match fetched.and_then(|body| parse::<T>(body.as_bytes())) {
        Ok(items) => {
            log::info!("loaded {} entries from remote {name}", items.len());
            return LoadOutcome {
                items,
                source: ContentSource::Remote,
                notice: None,
            };
        }
        Err(e) => log::warn!("remote {name} unusable: {e}"),
    }

    match embedded.and_then(|bytes| parse::<T>(&bytes)) {
        Ok(items) => {
            log::info!("loaded {} entries from bundled {name}", items.len());
            LoadOutcome {
                items,
                source: ContentSource::Embedded,
                notice: Some(collection.fallback_notice()),
            }
        }
        Err(e) => {
            log::warn!("bundled {name} unusable: {e}");
            unavailable(collection)
        }
    }
}

fn unavailable<T>(collection: Collection) -> LoadOutcome<T> {
    LoadOutcome {
        items: Vec::new(),
        source: ContentSource::Unavailable,
        notice: Some(collection.unavailable_notice()),
    }
}

pub fn parse<T: DeserializeOwned + Validate>(bytes: &[u8]) -> Result<Vec<T>, ContentError> {
    let items: Vec<T> = serde_json::from_slice(bytes)?;
    for item in &items {
        item.validate()?;
    }
    Ok(items)
}

fn embedded(collection: Collection) -> Result<Cow<'static, [u8]>, ContentError> {
    ContentAssets::get(collection.file_name())
        .map(|file| file.data)
        .ok_or(ContentError::MissingEmbedded(collection.file_name()))
}

fn join_url(base: &str, file: &str) -> String {
    format!("{}/{file}", base.trim_end_matches('/'))
}

#[cfg(feature = "network")]
fn fetch_url(url: &str, timeout: Duration) -> Result<String, ContentError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ContentError::Fetch(e.to_string()))?;
    let response = client
        .get(url)
        .header(reqwest::header::CACHE_CONTROL, "no-store")
        .send()
        .map_err(|e| ContentError::Fetch(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(ContentError::Fetch(format!("{url} returned {status}")));
    }
    response
        .text()
        .map_err(|e| ContentError::Fetch(e.to_string()))
}

#[cfg(not(feature = "network"))]
fn fetch_url(url: &str, _timeout: Duration) -> Result<String, ContentError> {
    Err(ContentError::Fetch(format!(
        "{url}: built without network support"
    )))
}
