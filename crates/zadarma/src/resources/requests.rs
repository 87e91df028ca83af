//! Callback request endpoint

use crate::{
    client::Client,
    error::Result,
    http::{Method, Response},
};
use zadarma_core::ParameterSet;

/// Callback requests: the API first rings one party, then connects the other.
#[derive(Debug, Clone, Copy)]
pub struct Requests<'a> {
    client: &'a Client,
}

impl<'a> Requests<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Ring `from`, then connect it to `to`.
    ///
    /// `sip` selects the SIP number whose caller ID is used. With `predicted`
    /// the API checks that `to` answers before calling `from`.
    pub async fn callback(
        &self,
        from: &str,
        to: &str,
        sip: Option<&str>,
        predicted: bool,
    ) -> Result<Response> {
        let params = ParameterSet::new()
            .with("from", from)
            .with("to", to)
            .with_opt("sip", sip)
            .with_opt("predicted", predicted.then_some("1"));

        self.client
            .call(Method::GET, "/v1/request/callback/", params)
            .await
    }
}
