//! Realtime lookup: stop code + expected line → arrival estimates.

use async_trait::async_trait;
use tracing::warn;

use crate::domain::{RealtimeInfo, StopCode};

use super::client::CurlbusClient;
use super::error::RealtimeError;
use super::parse::parse_board;

/// Source of raw arrival boards per stop.
///
/// This abstraction allows the fetcher and enricher to be tested with
/// canned board text.
#[async_trait]
pub trait ArrivalBoard: Send + Sync {
    /// Fetch the raw arrival board for a stop.
    async fn board(&self, stop_code: &StopCode) -> Result<String, RealtimeError>;
}

#[async_trait]
impl ArrivalBoard for CurlbusClient {
    async fn board(&self, stop_code: &StopCode) -> Result<String, RealtimeError> {
        CurlbusClient::board(self, stop_code).await
    }
}

/// Fetches and filters live arrivals for one stop and line.
pub struct RealtimeFetcher<'a, B: ArrivalBoard> {
    board: &'a B,
}

impl<'a, B: ArrivalBoard> RealtimeFetcher<'a, B> {
    /// Create a fetcher over an arrival board source.
    pub fn new(board: &'a B) -> Self {
        Self { board }
    }

    /// Fetch upcoming arrivals at `stop_code` for `expected_line`.
    ///
    /// Infallible by design: a feed failure or timeout becomes
    /// `status: error`, a responding stop with no matching line becomes
    /// `status: no_data`. Callers attach the result either way.
    pub async fn fetch(&self, stop_code: &StopCode, expected_line: &str) -> RealtimeInfo {
        match self.board.board(stop_code).await {
            Ok(text) => RealtimeInfo::from_arrivals(parse_board(&text, expected_line)),
            Err(e) => {
                warn!(stop = %stop_code, line = expected_line, error = %e, "realtime lookup failed");
                RealtimeInfo::unavailable()
            }
        }
    }
}
