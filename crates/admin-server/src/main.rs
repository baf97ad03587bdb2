//! The uShare admin server binary entrypoint.

use std::net::SocketAddr;

use admin_server::Allowlist;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let addr: SocketAddr = parse_env_var("ADDR");

    let allowlist: Allowlist = parse_optional_env_var("ADMIN_ALLOWLIST").unwrap_or_default();

    let storage = storage_api_client::Client {
        reqwest: reqwest::Client::new(),
        base_url: env_var("STORAGE_BASE_URL"),
        service_key: env_var("STORAGE_SERVICE_KEY"),
    };

    let root_filter = admin_server::init(storage, allowlist);

    let (addr, server) =
        warp::serve(root_filter).bind_with_graceful_shutdown(addr, shutdown_signal());
    println!("Listening on http://{addr}");
    server.await;
}

/// Get the value of the process environment variable `key`.
/// Panics if the variable is not set.
fn env_var(key: &str) -> String {
    std::env::var(key).unwrap_or_else(|err| panic!("{key} env var is not set: {err}"))
}

/// Get the value of the process environment variable `key` and parse it
/// into the type `T`.
/// Panics if the variable is not set, or if the parsing fails.
fn parse_env_var<T>(key: &str) -> T
where
    T: std::str::FromStr,
    <T as std::str::FromStr>::Err: std::fmt::Display,
{
    let val = env_var(key);
    val.parse()
        .unwrap_or_else(|err| panic!("unable to parse {key} env var ({val}): {err}"))
}

/// Get the value of the process environment variable `key` and parse it
/// into the type `T` if the variable is set.
/// Panics if the parsing fails.
fn parse_optional_env_var<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
    <T as std::str::FromStr>::Err: std::fmt::Display,
{
    let val = std::env::var(key).ok()?;
    Some(
        val.parse()
            .unwrap_or_else(|err| panic!("unable to parse {key} env var ({val}): {err}")),
    )
}

/// Await for the shutdown signal, i.e. Ctrl+C.
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("unable to install Ctrl+C signal handler");
}
