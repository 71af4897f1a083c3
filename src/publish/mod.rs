//! Gist publishing
//!
//! A [`PublishRequest`] carries the gist identifier, the owner's credentials, and the
//! rendered text. [`GistClient`] turns it into one authenticated request that replaces
//! the content of a single file in the gist. Non-2xx responses are errors.

mod gist_client;
mod publish_request;

pub use gist_client::GistClient;
pub use publish_request::{GistFile, GistUpdate, PublishRequest};
