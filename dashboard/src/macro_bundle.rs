use crate::data_provider::DataProvider;
use crate::errors::{DashboardError, Result};
use futures::future::join_all;
use log::warn;
use upstream::consts::*;
use upstream::models::*;

const QUOTE_SYMBOLS: [&str; 6] = [
    SYMBOL_DXY,
    SYMBOL_SPX,
    SYMBOL_DJIA,
    SYMBOL_YIELD_10Y,
    SYMBOL_GOLD,
    SYMBOL_SILVER,
];

fn keep<T>(name: &str, result: Result<T>, failures: &mut Vec<DashboardError>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            warn!("macro series {} omitted: {}", name, e);
            failures.push(e);
            None
        }
    }
}

/// Fetches every macro series in parallel. A failed series is left out; the
/// bundle only fails when nothing at all could be fetched.
pub async fn fetch_macro_bundle(
    provider: &dyn DataProvider,
    range: SeriesRange,
) -> Result<MacroBundle> {
    let quotes = join_all(
        QUOTE_SYMBOLS
            .iter()
            .map(|symbol| provider.get_market_quote(symbol, range)),
    );
    let (quotes, m2, fed_rate) =
        tokio::join!(quotes, provider.get_m2(range), provider.get_fed_rate(range));

    let mut failures = vec![];
    let mut quotes = QUOTE_SYMBOLS
        .iter()
        .zip(quotes)
        .map(|(symbol, result)| keep(symbol, result, &mut failures))
        .collect::<Vec<_>>()
        .into_iter();
    let mut next = || quotes.next().flatten();

    let bundle = MacroBundle {
        dxy: next(),
        spx: next(),
        djia: next(),
        yield10y: next(),
        gold: next(),
        silver: next(),
        m2: keep(FRED_M2, m2, &mut failures),
        fed_rate: keep(FRED_FED_FUNDS, fed_rate, &mut failures),
    };

    if bundle.is_empty() {
        if !failures.is_empty() && failures.iter().all(|e| matches!(e, DashboardError::RateLimited { .. })) {
            return Err(DashboardError::RateLimited {
                message: "every macro series was rate limited".to_string(),
            });
        }
        return Err(DashboardError::UpstreamUnavailable {
            status: None,
            message: format!(
                "every macro series failed: {}",
                failures.first().map(|e| e.to_string()).unwrap_or_default()
            ),
        });
    }
    Ok(bundle)
}
