//! Account information endpoints

use crate::{
    client::Client,
    error::Result,
    http::{Method, Response},
};
use zadarma_core::ParameterSet;

/// Account balance, call prices, timezone and tariff.
#[derive(Debug, Clone, Copy)]
pub struct Info<'a> {
    client: &'a Client,
}

impl<'a> Info<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Current account balance.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use zadarma::Client;
    /// # async fn example(client: Client) -> zadarma::Result<()> {
    /// let response = client.info().balance().await?;
    /// println!("{}: {}", response.status(), response.text()?);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn balance(&self) -> Result<Response> {
        self.client
            .call(Method::GET, "/v1/info/balance/", ParameterSet::new())
            .await
    }

    /// Price of a call to `number`, optionally as seen from `caller_id`.
    pub async fn price(&self, number: &str, caller_id: Option<&str>) -> Result<Response> {
        let params = ParameterSet::new()
            .with("number", number)
            .with_opt("caller_id", caller_id);

        self.client
            .call(Method::GET, "/v1/info/price/", params)
            .await
    }

    /// Account timezone.
    pub async fn timezone(&self) -> Result<Response> {
        self.client
            .call(Method::GET, "/v1/info/timezone/", ParameterSet::new())
            .await
    }

    /// Current tariff plan.
    pub async fn tariff(&self) -> Result<Response> {
        self.client
            .call(Method::GET, "/v1/tariff/", ParameterSet::new())
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::recording_client;
    use crate::http::Method;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_balance() {
        let (client, transport) = recording_client();
        client.info().balance().await.unwrap();

        let request = transport.last();
        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.url().path(), "/v1/info/balance/");
        assert_eq!(request.url().query(), Some("format=json"));
    }

    #[tokio::test]
    async fn test_price_with_and_without_caller_id() {
        let (client, transport) = recording_client();

        client.info().price("79123456789", None).await.unwrap();
        assert_eq!(
            transport.last().url().query(),
            Some("format=json&number=79123456789")
        );

        client
            .info()
            .price("79123456789", Some("74951234567"))
            .await
            .unwrap();
        assert_eq!(
            transport.last().url().query(),
            Some("caller_id=74951234567&format=json&number=79123456789")
        );
    }

    #[tokio::test]
    async fn test_timezone_signature() {
        let (client, transport) = recording_client();
        client.info().timezone().await.unwrap();

        assert_eq!(
            transport.last().authorization(),
            Some("testkey:NWYzNTFkNGZmMGYwNmQyZmI2NjA5MDYwOWJlN2QwMGJkZWJlZTA0MA==")
        );
    }

    #[tokio::test]
    async fn test_tariff_path() {
        let (client, transport) = recording_client();
        client.info().tariff().await.unwrap();
        assert_eq!(transport.last().url().path(), "/v1/tariff/");
    }
}
