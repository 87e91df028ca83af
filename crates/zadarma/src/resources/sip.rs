//! SIP line endpoints

use crate::{
    client::Client,
    error::{Error, Result},
    http::{Method, Response},
};
use zadarma_core::ParameterSet;

/// SIP numbers of the account: listing, online status, caller ID and
/// call forwarding.
#[derive(Debug, Clone, Copy)]
pub struct Sip<'a> {
    client: &'a Client,
}

impl<'a> Sip<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// All SIP numbers of the account.
    pub async fn list(&self) -> Result<Response> {
        self.client
            .call(Method::GET, "/v1/sip/", ParameterSet::new())
            .await
    }

    /// Online status of SIP number `sip`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if `sip` is empty or not alphanumeric,
    /// since it becomes a path segment.
    pub async fn status(&self, sip: &str) -> Result<Response> {
        if sip.is_empty() || !sip.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::InvalidRequest(format!(
                "SIP id '{}' must be a non-empty alphanumeric string",
                sip
            )));
        }

        self.client
            .call(
                Method::GET,
                &format!("/v1/sip/{}/status/", sip),
                ParameterSet::new(),
            )
            .await
    }

    /// Set the outgoing caller ID of SIP `id` to `number`.
    pub async fn set_caller_id(&self, id: &str, number: &str) -> Result<Response> {
        let params = ParameterSet::new().with("id", id).with("number", number);

        self.client
            .call(Method::PUT, "/v1/sip/callerid/", params)
            .await
    }

    /// Call forwarding settings, for one SIP `id` or all of them.
    pub async fn redirection(&self, id: Option<&str>) -> Result<Response> {
        let params = ParameterSet::new().with_opt("id", id);

        self.client
            .call(Method::GET, "/v1/sip/redirection/", params)
            .await
    }
}
