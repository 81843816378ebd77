use std::fmt;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

const WATCH_PREFIX: &str = "https://www.youtube.com/watch?v=";
const SHORTS_PREFIX: &str = "https://www.youtube.com/shorts/";

const SHORT_LINK_DOMAIN: &str = "youtu.be";
const MAIN_DOMAIN: &str = "youtube.com";

/// Bare video IDs: 8 to 20 letters, digits, `_` or `-`, all within the BMP.
/// Real IDs are 11 characters, but the fallback is deliberately permissive.
static BARE_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[[\p{L}\p{Nd}_-]&&[\x{0}-\x{FFFF}]]{8,20}$").unwrap()
});

/// Characters that would end or corrupt the `v` query value.
const QUERY_RESERVED: &[char] = &[' ', '#', '%', '&', '+'];
/// Characters that would end or corrupt a path segment.
const SEGMENT_RESERVED: &[char] = &[' ', '#', '%', '/', '?'];

/// How a URL's host is matched against the YouTube domains.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HostPolicy {
    /// Any host containing `youtu.be` or `youtube.com` as a substring.
    /// Also accepts look-alikes such as `notyoutube.com.evil.example`.
    #[default]
    Loose,
    /// The domain itself or one of its subdomains, nothing else.
    Strict,
}

impl fmt::Display for HostPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostPolicy::Loose => f.write_str("loose"),
            HostPolicy::Strict => f.write_str("strict"),
        }
    }
}

impl HostPolicy {
    fn matches(self, host: &str, domain: &str) -> bool {
        match self {
            HostPolicy::Loose => host.contains(domain),
            HostPolicy::Strict => {
                host == domain
                    || host
                        .strip_suffix(domain)
                        .is_some_and(|rest| rest.ends_with('.'))
            }
        }
    }
}

/// Token identifying a video or short. Never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoId(String);

impl VideoId {
    fn new(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The playable URL an accepted input normalizes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonicalUrl {
    /// `https://www.youtube.com/watch?v=<id>`
    Watch(VideoId),
    /// `https://www.youtube.com/shorts/<id>`
    Shorts(VideoId),
    /// A YouTube URL with some other path (e.g. `/live/<id>`), kept as entered.
    PassThrough(String),
}

impl CanonicalUrl {
    pub fn video_id(&self) -> Option<&VideoId> {
        match self {
            CanonicalUrl::Watch(id) | CanonicalUrl::Shorts(id) => Some(id),
            CanonicalUrl::PassThrough(_) => None,
        }
    }
}

impl fmt::Display for CanonicalUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalUrl::Watch(id) => {
                write!(f, "{WATCH_PREFIX}{}", escape(&id.0, QUERY_RESERVED))
            }
            CanonicalUrl::Shorts(id) => {
                write!(f, "{SHORTS_PREFIX}{}", escape(&id.0, SEGMENT_RESERVED))
            }
            CanonicalUrl::PassThrough(url) => f.write_str(url),
        }
    }
}

/// Percent-encodes `reserved` characters and controls, leaving everything
/// else (including non-ASCII) as is.
fn escape(id: &str, reserved: &[char]) -> String {
    let mut out = String::with_capacity(id.len());
    for c in id.chars() {
        if reserved.contains(&c) || c.is_control() {
            let mut buf = [0u8; 4];
            for b in c.encode_utf8(&mut buf).bytes() {
                out.push_str(&format!("%{b:02X}"));
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Why an input was not accepted.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Rejected {
    #[error("input is empty")]
    Empty,
    #[error("not a valid URL: {0}")]
    Unparsable(#[from] url::ParseError),
    #[error("URL has no host")]
    MissingHost,
    #[error("'{0}' is not a YouTube host")]
    NotYouTube(String),
    #[error("URL does not contain a video ID")]
    MissingVideoId,
    #[error("'{0}' is neither a URL nor a video ID")]
    NotAVideoId(String),
}

/// Normalizes user input into a canonical YouTube URL using loose host matching.
pub fn normalize(input: &str) -> Result<CanonicalUrl, Rejected> {
    normalize_with(input, HostPolicy::Loose)
}

/// Normalizes user input into a canonical YouTube URL.
///
/// Accepts `youtu.be/<id>`, `youtube.com/watch?v=<id>` and
/// `youtube.com/shorts/<id>` links, passes other `youtube.com` paths through
/// unchanged, and falls back to treating scheme-less input as a bare video ID.
pub fn normalize_with(input: &str, policy: HostPolicy) -> Result<CanonicalUrl, Rejected> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Rejected::Empty);
    }

    if has_http_scheme(trimmed) {
        return normalize_url(trimmed, policy);
    }

    if BARE_ID_RE.is_match(trimmed) {
        return Ok(CanonicalUrl::Watch(VideoId(trimmed.to_string())));
    }

    debug!("rejected {trimmed:?}: no scheme and not a bare video ID");
    Err(Rejected::NotAVideoId(trimmed.to_string()))
}

fn has_http_scheme(s: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        s.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

fn normalize_url(trimmed: &str, policy: HostPolicy) -> Result<CanonicalUrl, Rejected> {
    let parsed = Url::parse(trimmed).inspect_err(|e| debug!("rejected {trimmed:?}: {e}"))?;

    let host = parsed
        .host_str()
        .map(str::to_lowercase)
        .ok_or(Rejected::MissingHost)?;

    let segments = path_segments(&parsed);

    if policy.matches(&host, SHORT_LINK_DOMAIN) {
        // youtu.be/<id>
        let id = segments
            .first()
            .and_then(|s| VideoId::new(s))
            .ok_or(Rejected::MissingVideoId)?;
        return Ok(CanonicalUrl::Watch(id));
    }

    if policy.matches(&host, MAIN_DOMAIN) {
        return match segments.first().map(String::as_str) {
            Some("watch") => parsed
                .query_pairs()
                .find(|(k, _)| k == "v")
                .and_then(|(_, v)| VideoId::new(&v))
                .map(CanonicalUrl::Watch)
                .ok_or(Rejected::MissingVideoId),
            Some("shorts") => segments
                .get(1)
                .and_then(|s| VideoId::new(s))
                .map(CanonicalUrl::Shorts)
                .ok_or(Rejected::MissingVideoId),
            // /live/<id> and friends
            _ => Ok(CanonicalUrl::PassThrough(trimmed.to_string())),
        };
    }

    debug!("rejected {trimmed:?}: host {host} is not YouTube ({policy} matching)");
    Err(Rejected::NotYouTube(host))
}

/// Decoded, non-empty path segments.
fn path_segments(url: &Url) -> Vec<String> {
    url.path_segments()
        .map(|segments| {
            segments
                .filter(|s| !s.is_empty())
                .map(|s| String::from_utf8_lossy(&urlencoding::decode_binary(s.as_bytes())).into_owned())
                .collect()
        })
        .unwrap_or_default()
}
