use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use wealthdash_client::{ClientConfig, PortfolioApiClient};
use wealthdash_core::{
    DashboardService, DashboardServiceTrait, Error, HoldingsTableState, LoadStatus,
    PortfolioApiTrait, RiskLevel,
};

const HOLDINGS: &str = r#"[
    {"symbol": "RELIANCE", "name": "Reliance Industries Ltd", "quantity": 50,
     "avgPrice": 2450, "currentPrice": 2680.5, "sector": "Energy", "marketCap": "Large",
     "exchange": "NSE", "value": 134025, "gainLoss": 11525, "gainLossPercent": 9.4},
    {"symbol": "INFY", "name": "Infosys Limited", "quantity": 100,
     "avgPrice": 1800, "currentPrice": 1650, "sector": "Technology", "marketCap": "Large",
     "value": 165000, "gainLoss": -15000, "gainLossPercent": -8.33}
]"#;

const ALLOCATION: &str = r#"{
    "bySector": {
        "Energy": {"value": 134025, "percentage": 44.82},
        "Technology": {"value": 165000, "percentage": 55.18}
    },
    "byMarketCap": {
        "Large": {"value": 299025, "percentage": 100}
    }
}"#;

const SUMMARY: &str = r#"{
    "totalValue": 299025, "totalInvested": 302500, "totalGainLoss": -3475,
    "totalGainLossPercent": -1.15, "diversificationScore": 4.2, "riskLevel": "High",
    "topPerformer": {"symbol": "RELIANCE", "name": "Reliance Industries Ltd", "gainPercent": 9.4},
    "worstPerformer": {"symbol": "INFY", "name": "Infosys Limited", "gainPercent": -8.33}
}"#;

const PERFORMANCE: &str = r#"{
    "timeline": [
        {"date": "2024-01-01", "portfolio": 650000, "nifty50": 21000, "gold": 62000},
        {"date": "2024-02-01", "portfolio": 660000, "nifty50": 22100, "gold": 61500}
    ],
    "returns": {
        "portfolio": {"1month": 2.3, "3months": 8.1, "1year": 15.7},
        "nifty50": {"1month": 1.8}
    }
}"#;

fn respond(path: &str) -> (u16, &'static str) {
    if path.ends_with("/holdings") {
        (200, HOLDINGS)
    } else if path.ends_with("/allocation") {
        (200, ALLOCATION)
    } else if path.ends_with("/summary") {
        (200, SUMMARY)
    } else if path.ends_with("/performance") {
        (200, PERFORMANCE)
    } else {
        (404, r#"{"error": "not found"}"#)
    }
}

async fn read_request_path(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let head = String::from_utf8_lossy(&buf);
    head.split_whitespace().nth(1).unwrap_or("/").to_string()
}

async fn write_response(stream: &mut TcpStream, status: u16, body: &str) {
    let reason = if status == 200 { "OK" } else { "Error" };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\
         Connection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );
    stream.write_all(response.as_bytes()).await.unwrap();
    stream.shutdown().await.ok();
}

/// Serves the fixture API on a local port and returns its base URL.
async fn spawn_api(delay: Option<Duration>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };
            tokio::spawn(async move {
                let path = read_request_path(&mut stream).await;
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                let (status, body) = respond(&path);
                write_response(&mut stream, status, body).await;
            });
        }
    });
    format!("http://{}/api/portfolio", addr)
}

fn client(base_url: &str, timeout: Duration) -> PortfolioApiClient {
    PortfolioApiClient::new(&ClientConfig::new(base_url, timeout)).unwrap()
}

#[tokio::test]
async fn fetches_and_decodes_every_resource() {
    let base_url = spawn_api(None).await;
    let api = client(&base_url, Duration::from_secs(5));

    let holdings = api.get_holdings().await.unwrap();
    assert_eq!(holdings.len(), 2);
    assert_eq!(holdings[0].exchange.as_deref(), Some("NSE"));
    assert!(holdings[1].exchange.is_none());

    let allocation = api.get_allocation().await.unwrap();
    assert_eq!(allocation.by_sector.len(), 2);

    let summary = api.get_summary().await.unwrap();
    assert_eq!(summary.risk_level, RiskLevel::High);
    assert_eq!(summary.top_performer.unwrap().symbol, "RELIANCE");

    let performance = api.get_performance().await.unwrap();
    assert_eq!(performance.timeline.len(), 2);
}

#[tokio::test]
async fn slow_server_times_out() {
    let base_url = spawn_api(Some(Duration::from_secs(3))).await;
    let api = client(&base_url, Duration::from_millis(200));

    match api.get_holdings().await {
        Err(err @ Error::Timeout { .. }) => {
            assert_eq!(err.to_string(), "Request to /holdings timed out after 200ms");
        }
        other => panic!("expected timeout, got {:?}", other),
    }
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = client(&format!("http://{}/api/portfolio", addr), Duration::from_secs(2));
    let err = api.get_summary().await.unwrap_err();
    assert!(err.is_transport(), "unexpected error: {:?}", err);
}

#[tokio::test]
async fn dashboard_cycle_over_http() {
    let base_url = spawn_api(None).await;
    let api = Arc::new(client(&base_url, Duration::from_secs(5)));
    let service = DashboardService::new(api);

    assert_eq!(service.refresh().await, LoadStatus::Ready);
    let state = service.state().await;
    let snapshot = state.snapshot.unwrap();

    let view = snapshot.holdings_view(&HoldingsTableState::new());
    assert_eq!(view.symbols(), vec!["INFY", "RELIANCE"]);
    assert_eq!(view.caption(), "Showing 2 holdings");

    assert_eq!(snapshot.top_performer().unwrap().name, "Reliance Industries Ltd");
    assert_eq!(snapshot.worst_performer().unwrap().symbol, "INFY");
    assert_eq!(
        snapshot.allocation_charts().by_sector.labels(),
        vec!["Technology", "Energy"]
    );
}
