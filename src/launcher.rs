use std::fmt;
use std::io;

use log::debug;
use thiserror::Error;

/// Something the OS can open a URL with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handler {
    /// A named application, e.g. `firefox` or `mpv`.
    App(String),
    /// Whatever the system has registered for https URLs.
    SystemDefault,
}

impl fmt::Display for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::App(name) => f.write_str(name),
            Handler::SystemDefault => f.write_str("system default"),
        }
    }
}

#[derive(Error, Debug)]
#[error("no handler available for {url} (tried: {tried})")]
pub struct NoHandlerAvailable {
    pub url: String,
    pub tried: String,
}

/// Handlers in the order they are tried: configured apps, then the system default.
pub fn candidates(apps: &[String]) -> Vec<Handler> {
    apps.iter()
        .map(|a| a.trim())
        .filter(|a| !a.is_empty())
        .map(|a| Handler::App(a.to_string()))
        .chain(std::iter::once(Handler::SystemDefault))
        .collect()
}

/// Opens `url` with the first handler that accepts it.
pub fn launch(url: &str, apps: &[String]) -> Result<Handler, NoHandlerAvailable> {
    launch_with(url, apps, |url, handler| match handler {
        Handler::App(app) => open::with(url, app.as_str()),
        Handler::SystemDefault => open::that(url),
    })
}

/// Like [`launch`], but with the open attempt supplied by the caller.
pub fn launch_with<F>(url: &str, apps: &[String], mut attempt: F) -> Result<Handler, NoHandlerAvailable>
where
    F: FnMut(&str, &Handler) -> io::Result<()>,
{
    let handlers = candidates(apps);

    for handler in &handlers {
        match attempt(url, handler) {
            Ok(()) => return Ok(handler.clone()),
            Err(e) => debug!("handler {handler} could not open {url}: {e}"),
        }
    }

    let tried = handlers
        .iter()
        .map(Handler::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    Err(NoHandlerAvailable {
        url: url.to_string(),
        tried,
    })
}
