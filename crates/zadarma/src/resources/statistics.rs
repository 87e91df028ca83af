//! Call statistics endpoints

use crate::{
    client::Client,
    error::Result,
    http::{Method, Response},
};
use zadarma_core::ParameterSet;

/// Call statistics for a time window.
///
/// `start` and `end` use the API's `YYYY-MM-DD HH:MM:SS` format and are
/// passed through unchanged.
#[derive(Debug, Clone, Copy)]
pub struct Statistics<'a> {
    client: &'a Client,
}

impl<'a> Statistics<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Overall call statistics between `start` and `end`.
    pub async fn overall(&self, start: &str, end: &str) -> Result<Response> {
        self.client
            .call(Method::GET, "/v1/statistics/", window(start, end))
            .await
    }

    /// PBX call statistics between `start` and `end`.
    pub async fn pbx(&self, start: &str, end: &str) -> Result<Response> {
        self.client
            .call(Method::GET, "/v1/statistics/pbx/", window(start, end))
            .await
    }
}

fn window(start: &str, end: &str) -> ParameterSet {
    ParameterSet::new().with("start", start).with("end", end)
}

#[cfg(test)]
mod tests {
    use crate::client::tests::recording_client;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_overall_encodes_window() {
        let (client, transport) = recording_client();
        client
            .statistics()
            .overall("2024-01-01 00:00:00", "2024-01-31 23:59:59")
            .await
            .unwrap();

        let request = transport.last();
        assert_eq!(request.url().path(), "/v1/statistics/");
        assert_eq!(
            request.url().query(),
            Some("end=2024-01-31+23%3A59%3A59&format=json&start=2024-01-01+00%3A00%3A00")
        );
    }

    #[tokio::test]
    async fn test_pbx_path() {
        let (client, transport) = recording_client();
        client
            .statistics()
            .pbx("2024-01-01 00:00:00", "2024-01-02 00:00:00")
            .await
            .unwrap();
        assert_eq!(transport.last().url().path(), "/v1/statistics/pbx/");
    }
}
