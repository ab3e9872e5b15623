// src/lookup.rs
use reqwest::blocking::Client;

use crate::{
    config::options::LookupOptions,
    core::net,
    error::{Error, LookupFailure, Outcome},
    record::ResultRecord,
    specs::taxinfo,
};

/// Fetches and parses one identifier at a time over a shared client.
pub struct LookupClient {
    client: Client,
    opts: LookupOptions,
}

impl LookupClient {
    pub fn new(opts: LookupOptions) -> Result<Self, Error> {
        let client = net::build_client(&opts)?;
        Ok(Self { client, opts })
    }

    /// Never fails: on any error the record is empty and `Outcome` says why.
    pub fn lookup(&self, id: &str) -> (ResultRecord, Outcome) {
        match self.fetch(id) {
            Ok(body) => (taxinfo::extract(&body), Outcome::Ok),
            Err(failure) => {
                let outcome = Outcome::from(failure);
                match &outcome {
                    Outcome::Blocked => {
                        logw!("Lookup {id}: access forbidden, the server is probably blocking us");
                    }
                    Outcome::Failed(reason) => loge!("Lookup {id}: {reason}"),
                    Outcome::Ok => {}
                }
                (ResultRecord::new(), outcome)
            }
        }
    }

    fn fetch(&self, id: &str) -> Result<String, LookupFailure> {
        let url = net::search_url(&self.opts, id)?;
        logd!("Lookup {id}: GET {url}");
        net::http_get(&self.client, url)
    }
}
