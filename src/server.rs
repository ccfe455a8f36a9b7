use crate::{config::Config, process::load_restaurants};
use serde::Serialize;
use std::{convert::Infallible, sync::Arc, time::Instant};
use tracing::{error, info};
use warp::{Filter, Rejection, Reply};

/// Request headers a browser may announce in a CORS preflight.
const CORS_HEADERS: &[&str] = &[
    "accept",
    "accept-language",
    "authorization",
    "cache-control",
    "content-language",
    "content-type",
    "if-none-match",
    "origin",
    "pragma",
    "x-requested-with",
];

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

async fn health_check() -> Result<impl Reply, Infallible> {
    Ok(warp::reply::json(&serde_json::json!({
        "status": "healthy",
        "service": "geovis"
    })))
}

/// Loads and sanitizes the dataset on every call. Failures are reported in the
/// body with a 200 status; clients must check for the `error` key.
async fn get_restaurants(cfg: Arc<Config>) -> Result<impl Reply, Infallible> {
    let start = Instant::now();
    let path = cfg.data_path.clone();

    // file read + parse are blocking, keep them off the reactor
    let reply = match tokio::task::spawn_blocking(move || load_restaurants(path)).await {
        Ok(Ok(out)) => {
            info!(
                rows = out.data.len(),
                elapsed = ?start.elapsed(),
                "served restaurants"
            );
            warp::reply::json(&out)
        }
        Ok(Err(e)) => {
            error!("Error loading data: {}", e);
            warp::reply::json(&ErrorResponse {
                error: e.to_string(),
            })
        }
        Err(e) => {
            error!("loader task failed: {:?}", e);
            warp::reply::json(&ErrorResponse {
                error: format!("loader task failed: {}", e),
            })
        }
    };
    Ok(reply)
}

fn with_config(
    cfg: Arc<Config>,
) -> impl Filter<Extract = (Arc<Config>,), Error = Infallible> + Clone {
    warp::any().map(move || cfg.clone())
}

/// `GET /restaurants` and `GET /health`, open to any origin.
pub fn routes(
    cfg: Arc<Config>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(health_check);

    let restaurants = warp::path("restaurants")
        .and(warp::path::end())
        .and(warp::get())
        .and(with_config(cfg))
        .and_then(get_restaurants);

    let cors = warp::cors()
        .allow_any_origin()
        .allow_methods(vec!["GET", "OPTIONS"])
        .allow_headers(CORS_HEADERS.iter().copied());

    health
        .or(restaurants)
        .with(cors)
        .with(warp::trace::request())
}

pub async fn serve(cfg: Config) {
    let addr = cfg.addr();
    info!("Server starting on {}", addr);
    info!("Health check: http://{}/health", addr);
    info!("Restaurants: GET http://{}/restaurants", addr);
    warp::serve(routes(Arc::new(cfg))).run(addr).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;
    use warp::http::StatusCode;

    fn config_for(path: PathBuf) -> Arc<Config> {
        Arc::new(Config {
            data_path: path,
            ..Config::default()
        })
    }

    async fn get_json(cfg: Arc<Config>, path: &str) -> (StatusCode, Value) {
        let resp = warp::test::request()
            .method("GET")
            .path(path)
            .reply(&routes(cfg))
            .await;
        let body = serde_json::from_slice(resp.body()).expect("json body");
        (resp.status(), body)
    }

    #[tokio::test]
    async fn test_health_check() {
        let cfg = config_for(PathBuf::from("unused.csv"));
        let (status, body) = get_json(cfg, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_restaurants_split_payload() {
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(b" Lat ,LNG,Name\n24.7,46.6,Cafe X\n,46.7,Nowhere\n")
            .unwrap();

        let cfg = config_for(tmp.path().to_path_buf());
        let (status, body) = get_json(cfg, "/restaurants").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["columns"], serde_json::json!(["lat", "lng", "name"]));
        assert_eq!(body["data"], serde_json::json!([[24.7, 46.6, "Cafe X"]]));
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn test_missing_file_is_error_payload() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_for(dir.path().join("missing.csv"));
        let (status, body) = get_json(cfg, "/restaurants").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["error"].as_str().unwrap().contains("missing.csv"));
        assert!(body.get("columns").is_none());
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn test_missing_lat_column_is_error_payload() {
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(b"latitude,lng\n24.7,46.6\n").unwrap();

        let cfg = config_for(tmp.path().to_path_buf());
        let (status, body) = get_json(cfg, "/restaurants").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["error"].as_str().unwrap().contains("'lat'"));
    }

    #[tokio::test]
    async fn test_cors_header_present() {
        let resp = warp::test::request()
            .method("GET")
            .path("/health")
            .header("origin", "http://localhost:5173")
            .reply(&routes(config_for(PathBuf::from("unused.csv"))))
            .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().contains_key("access-control-allow-origin"));
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_common_headers() {
        let resp = warp::test::request()
            .method("OPTIONS")
            .path("/restaurants")
            .header("origin", "http://localhost:5173")
            .header("access-control-request-method", "GET")
            .header(
                "access-control-request-headers",
                "authorization, x-requested-with",
            )
            .reply(&routes(config_for(PathBuf::from("unused.csv"))))
            .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().contains_key("access-control-allow-origin"));
        let allowed = resp
            .headers()
            .get("access-control-allow-headers")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_lowercase();
        assert!(allowed.contains("authorization"));
        assert!(allowed.contains("x-requested-with"));
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_error_payload() {
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(b"lat,lng,name\n24.7,46.6,Caf\xe9\n").unwrap();

        let cfg = config_for(tmp.path().to_path_buf());
        let (status, body) = get_json(cfg, "/restaurants").await;
        assert_eq!(status, StatusCode::OK);
        let message = body["error"].as_str().unwrap();
        assert!(message.starts_with("malformed dataset"));
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let resp = warp::test::request()
            .method("GET")
            .path("/nope")
            .reply(&routes(config_for(PathBuf::from("unused.csv"))))
            .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
