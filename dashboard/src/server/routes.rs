use crate::errors::{DashboardError, Result};
use crate::factors::calc_technical_analysis;
use crate::keys::*;
use crate::macro_bundle::fetch_macro_bundle;
use crate::state::AppState;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderName, HeaderValue, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use cache::CacheStatus;
use log::{info, warn};
use serde::Serialize;
use serde_json::{Value, json};
use std::{collections::HashMap, future::Future, sync::Arc};
use time::LatencyGuard;
use upstream::models::ExchangeRate;

type Params = Query<HashMap<String, String>>;

const HARD_REFRESH_PARAM: &str = "__hr";
const X_CACHE: HeaderName = HeaderName::from_static("x-cache");
const CLEAR_SITE_DATA: HeaderName = HeaderName::from_static("clear-site-data");

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/prices", get(prices))
        .route("/api/chart/:coin/:days", get(chart))
        .route("/api/chart-long/:range", get(chart_long))
        .route("/api/global", get(global))
        .route("/api/fear-greed", get(fear_greed))
        .route("/api/news", get(news))
        .route("/api/ta/:coin", get(technical_analysis))
        .route("/api/macro", get(macro_bundle))
        .route("/api/mining", get(mining))
        .route("/api/lightning", get(lightning))
        .route("/api/x-posts", get(x_posts))
        .route("/api/exchange-rate", get(exchange_rate))
        .route("/api/health", get(health))
        .route("/api/cache/clear", post(clear_cache))
        .with_state(state)
}

fn is_hard_refresh(params: &HashMap<String, String>) -> bool {
    params.contains_key(HARD_REFRESH_PARAM)
}

fn to_json<T: Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| DashboardError::Internal {
        message: format!("serialize response: {}", e),
    })
}

fn json_response(value: Value, status: CacheStatus, hard_refresh: bool) -> Response {
    let mut resp = Json(value).into_response();
    let headers = resp.headers_mut();
    headers.insert(X_CACHE, HeaderValue::from_static(status.as_str()));
    if hard_refresh {
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    }
    resp
}

/// Runs one cached fetch and renders it. `producer` is called once per
/// attempt.
async fn serve<T, F, Fut>(
    state: &AppState,
    key: CacheKey,
    ttl_secs: u64,
    throttled: bool,
    hard_refresh: bool,
    producer: F,
) -> Response
where
    T: Serialize,
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let key = key.to_string();
    let _lg = LatencyGuard::new(format!("serve {}", key));
    let policy = state.policy(ttl_secs, throttled, hard_refresh);
    let result = state
        .fetcher
        .fetch(&key, &policy, || {
            let fut = producer();
            async move { to_json(fut.await?) }
        })
        .await;
    match result {
        Ok(fetched) => {
            let mut resp = json_response(fetched.value, fetched.status, hard_refresh);
            // 命中或过期缓存时附带缓存年龄
            if fetched.status != CacheStatus::Miss {
                if let Some(age) = state.fetcher.store().age(&key) {
                    resp.headers_mut().insert(header::AGE, HeaderValue::from(age.as_secs()));
                }
            }
            resp
        }
        Err(e) => {
            warn!("{} failed: {}", key, e);
            e.into_response()
        }
    }
}

async fn prices(State(state): State<Arc<AppState>>, Query(params): Params) -> Response {
    let vs = match parse_vs(params.get("vs").map(String::as_str)) {
        Ok(vs) => vs,
        Err(e) => return e.into_response(),
    };
    let provider = state.provider.clone();
    serve(
        &state,
        CacheKey::Prices { vs: vs.clone() },
        state.config.ttl.prices,
        true,
        is_hard_refresh(&params),
        || {
            let provider = provider.clone();
            let vs = vs.clone();
            async move { provider.get_prices(&vs).await }
        },
    )
    .await
}

async fn chart(
    State(state): State<Arc<AppState>>,
    Path((coin, days)): Path<(String, String)>,
    Query(params): Params,
) -> Response {
    let parsed = parse_coin(&coin).and_then(|coin| {
        Ok((
            coin,
            parse_days(&days)?,
            parse_vs(params.get("vs").map(String::as_str))?,
        ))
    });
    let (coin, days, vs) = match parsed {
        Ok(p) => p,
        Err(e) => return e.into_response(),
    };
    let provider = state.provider.clone();
    let key = CacheKey::Chart {
        vs: vs.clone(),
        days: days.clone(),
        coin: coin.clone(),
    };
    serve(
        &state,
        key,
        state.config.ttl.chart,
        true,
        is_hard_refresh(&params),
        || {
            let provider = provider.clone();
            let (coin, days, vs) = (coin.clone(), days.clone(), vs.clone());
            async move { provider.get_chart(&coin, &days, &vs).await }
        },
    )
    .await
}

async fn chart_long(
    State(state): State<Arc<AppState>>,
    Path(range): Path<String>,
    Query(params): Params,
) -> Response {
    let range = match parse_long_range(&range) {
        Ok(r) => r,
        Err(e) => return e.into_response(),
    };
    let provider = state.provider.clone();
    serve(
        &state,
        CacheKey::ChartLong(range),
        state.config.ttl.chart_long,
        false,
        is_hard_refresh(&params),
        || {
            let provider = provider.clone();
            async move { provider.get_long_chart(range).await }
        },
    )
    .await
}

async fn global(State(state): State<Arc<AppState>>, Query(params): Params) -> Response {
    let provider = state.provider.clone();
    serve(
        &state,
        CacheKey::Global,
        state.config.ttl.global,
        true,
        is_hard_refresh(&params),
        || {
            let provider = provider.clone();
            async move { provider.get_global().await }
        },
    )
    .await
}

async fn fear_greed(State(state): State<Arc<AppState>>, Query(params): Params) -> Response {
    let provider = state.provider.clone();
    serve(
        &state,
        CacheKey::FearGreed,
        state.config.ttl.fear_greed,
        false,
        is_hard_refresh(&params),
        || {
            let provider = provider.clone();
            async move { provider.get_fear_greed().await }
        },
    )
    .await
}

async fn news(State(state): State<Arc<AppState>>, Query(params): Params) -> Response {
    let provider = state.provider.clone();
    serve(
        &state,
        CacheKey::News,
        state.config.ttl.news,
        false,
        is_hard_refresh(&params),
        || {
            let provider = provider.clone();
            async move { provider.get_news().await }
        },
    )
    .await
}

async fn technical_analysis(
    State(state): State<Arc<AppState>>,
    Path(coin): Path<String>,
    Query(params): Params,
) -> Response {
    let coin = match parse_coin(&coin) {
        Ok(c) => c,
        Err(e) => return e.into_response(),
    };
    let provider = state.provider.clone();
    let days = state.config.upstream.ta_days.to_string();
    serve(
        &state,
        CacheKey::Ta { coin: coin.clone() },
        state.config.ttl.ta,
        true,
        is_hard_refresh(&params),
        || {
            let provider = provider.clone();
            let (coin, days) = (coin.clone(), days.clone());
            async move {
                let chart = provider.get_chart(&coin, &days, DEFAULT_VS).await?;
                calc_technical_analysis(&chart.closes())
            }
        },
    )
    .await
}

async fn macro_bundle(State(state): State<Arc<AppState>>, Query(params): Params) -> Response {
    let range = match parse_series_range(params.get("range").map(String::as_str)) {
        Ok(r) => r,
        Err(e) => return e.into_response(),
    };
    let provider = state.provider.clone();
    serve(
        &state,
        CacheKey::Macro(range),
        state.config.ttl.macro_bundle,
        false,
        is_hard_refresh(&params),
        || {
            let provider = provider.clone();
            async move { fetch_macro_bundle(provider.as_ref(), range).await }
        },
    )
    .await
}

async fn mining(State(state): State<Arc<AppState>>, Query(params): Params) -> Response {
    let range = match parse_series_range(params.get("range").map(String::as_str)) {
        Ok(r) => r,
        Err(e) => return e.into_response(),
    };
    let provider = state.provider.clone();
    serve(
        &state,
        CacheKey::Mining(range),
        state.config.ttl.mining,
        false,
        is_hard_refresh(&params),
        || {
            let provider = provider.clone();
            async move { provider.get_mining(range).await }
        },
    )
    .await
}

async fn lightning(State(state): State<Arc<AppState>>, Query(params): Params) -> Response {
    let range = match parse_series_range(params.get("range").map(String::as_str)) {
        Ok(r) => r,
        Err(e) => return e.into_response(),
    };
    let provider = state.provider.clone();
    serve(
        &state,
        CacheKey::Lightning(range),
        state.config.ttl.lightning,
        false,
        is_hard_refresh(&params),
        || {
            let provider = provider.clone();
            async move { provider.get_lightning(range).await }
        },
    )
    .await
}

async fn x_posts(State(state): State<Arc<AppState>>, Query(params): Params) -> Response {
    let provider = state.provider.clone();
    serve(
        &state,
        CacheKey::XPosts,
        state.config.ttl.x_posts,
        false,
        is_hard_refresh(&params),
        || {
            let provider = provider.clone();
            async move { provider.get_social_posts().await }
        },
    )
    .await
}

async fn exchange_rate(State(state): State<Arc<AppState>>, Query(params): Params) -> Response {
    let vs = match parse_vs(params.get("vs").map(String::as_str)) {
        Ok(vs) => vs,
        Err(e) => return e.into_response(),
    };
    let hard_refresh = is_hard_refresh(&params);
    if vs == DEFAULT_VS {
        return match to_json(ExchangeRate::usd()) {
            Ok(value) => json_response(value, CacheStatus::Hit, hard_refresh),
            Err(e) => e.into_response(),
        };
    }
    let provider = state.provider.clone();
    serve(
        &state,
        CacheKey::ExchangeRate { vs: vs.clone() },
        state.config.ttl.exchange_rate,
        true,
        hard_refresh,
        || {
            let provider = provider.clone();
            let vs = vs.clone();
            async move {
                let (btc_usd, btc_vs) = provider.get_btc_quotes(&vs).await?;
                Ok(upstream::coingecko::parser::derive_cross_rate(&vs, btc_usd, btc_vs)?)
            }
        },
    )
    .await
}

async fn health(State(state): State<Arc<AppState>>) -> Response {
    Json(json!({
        "status": "ok",
        "uptime_secs": state.uptime().as_secs(),
        "cache": state.cache_len(),
    }))
    .into_response()
}

async fn clear_cache(State(state): State<Arc<AppState>>) -> Response {
    let cleared = state.fetcher.store().invalidate_all();
    info!("cache cleared: {} entries", cleared);
    let mut resp = Json(json!({ "cleared": cleared })).into_response();
    let headers = resp.headers_mut();
    headers.insert(CLEAR_SITE_DATA, HeaderValue::from_static("\"cache\""));
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    resp
}

/// Binds the configured address and serves until ctrl-c.
pub async fn run(state: Arc<AppState>) -> Result<()> {
    let addr = state.config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| DashboardError::Internal {
            message: format!("bind {} failed: {}", addr, e),
        })?;
    info!("dashboard listening on {}", addr);
    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("ctrl-c handler failed: {}", e);
            }
            info!("shutting down");
        })
        .await
        .map_err(|e| DashboardError::Internal {
            message: format!("server error: {}", e),
        })
}
