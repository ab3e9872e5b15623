// src/core/net.rs
// Blocking HTTPS GET over one shared reqwest client.

use reqwest::blocking::Client;
use url::Url;

use crate::config::{consts::SEARCH_TYPE, options::LookupOptions};
use crate::error::{Error, LookupFailure};

/// One client per run; connections are pooled and reused across lookups.
/// Timeout is the client default.
pub fn build_client(opts: &LookupOptions) -> Result<Client, Error> {
    Client::builder()
        .user_agent(opts.user_agent.as_str())
        .build()
        .map_err(Error::Client)
}

/// `<base>/Search/?q=<id>&type=auto`, with `id` form-encoded.
pub fn search_url(opts: &LookupOptions, id: &str) -> Result<Url, LookupFailure> {
    Url::parse_with_params(&opts.search_url(), &[("q", id), ("type", SEARCH_TYPE)])
        .map_err(LookupFailure::Url)
}

/// GET `url` and return the body. Any non-2xx status is an error.
pub fn http_get(client: &Client, url: Url) -> Result<String, LookupFailure> {
    let resp = client.get(url).send().map_err(LookupFailure::Transport)?;

    let status = resp.status();
    if !status.is_success() {
        return Err(LookupFailure::Status(status));
    }
    resp.text().map_err(LookupFailure::Body)
}
