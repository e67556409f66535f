//! Integration tests for list views over the catalog.

#[path = "../support/mod.rs"]
mod support;

mod paging;
mod screens;

use setlist::catalog::Musician;
use setlist::{keys, ListResponse, RawParams};

pub fn last_names(response: &ListResponse<Musician>) -> Vec<String> {
    response
        .page
        .items
        .iter()
        .map(|m| m.data.last_name.clone())
        .collect()
}

pub fn full_names(response: &ListResponse<Musician>) -> Vec<String> {
    response
        .page
        .items
        .iter()
        .map(|m| format!("{} {}", m.data.first_name, m.data.last_name))
        .collect()
}

/// The params a browser would send after `response`, plus `extra`.
pub fn follow_up<M>(response: &ListResponse<M>, extra: &[(&str, &str)]) -> RawParams {
    let mut params = response.sort_params();
    params.set(keys::PAGE, response.page.page_index.to_string());
    for (key, value) in extra {
        params.set(*key, *value);
    }
    params
}
