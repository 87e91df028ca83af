//! SMS endpoint

use crate::{
    client::Client,
    error::Result,
    http::{Method, Response},
};
use zadarma_core::ParameterSet;

/// Outgoing SMS.
#[derive(Debug, Clone, Copy)]
pub struct Sms<'a> {
    client: &'a Client,
}

impl<'a> Sms<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Send `message` to `number`, optionally from `caller_id`.
    ///
    /// The message travels form-encoded in the request body and is signed
    /// like any other parameter.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use zadarma::Client;
    /// # async fn example(client: Client) -> zadarma::Result<()> {
    /// let response = client
    ///     .sms()
    ///     .send("71234567890", "Your code is 1234", None)
    ///     .await?
    ///     .error_for_status()?;
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(
        skip(self, number, message),
        fields(message_len = message.chars().count())
    )]
    pub async fn send(
        &self,
        number: &str,
        message: &str,
        caller_id: Option<&str>,
    ) -> Result<Response> {
        let params = ParameterSet::new()
            .with("number", number)
            .with("message", message)
            .with_opt("caller_id", caller_id);

        self.client
            .call(Method::POST, "/v1/sms/send/", params)
            .await
    }
}
