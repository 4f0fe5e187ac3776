//! Exchange quote types and rate provider abstractions

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Upstream symbol for USD priced in BRL.
pub const USD_PAIR: &str = "USDBRL";
/// Upstream symbol for EUR priced in BRL.
pub const EUR_PAIR: &str = "EURBRL";

/// Latest quote for a single currency pair, as returned by the upstream API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeQuote {
    pub code: String,
    pub bid: String,
}

/// Quotes keyed by pair symbol, e.g. `USDBRL`.
pub type QuoteBook = HashMap<String, ExchangeQuote>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rates {
    pub usd: f64,
    pub eur: f64,
}

impl Rates {
    /// Parses the USD and EUR bids out of a quote book.
    pub fn from_quotes(quotes: &QuoteBook) -> Result<Self> {
        Ok(Rates {
            usd: parse_bid(quotes, USD_PAIR)?,
            eur: parse_bid(quotes, EUR_PAIR)?,
        })
    }
}

fn parse_bid(quotes: &QuoteBook, pair: &str) -> Result<f64> {
    let quote = quotes
        .get(pair)
        .ok_or_else(|| anyhow!("Missing quote for pair: {pair}"))?;
    quote
        .bid
        .parse::<f64>()
        .with_context(|| format!("Invalid bid for pair {pair}: {:?}", quote.bid))
}

/// Performs one upstream lookup for all required pairs.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch_quotes(&self) -> Result<QuoteBook>;
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn get_rates(&self) -> Result<Rates>;
}
