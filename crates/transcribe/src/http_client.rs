use std::{sync::OnceLock, time::Duration};

use reqwest::Client;

/// Shared HTTP client for outbound audio fetches
pub(crate) fn http_client() -> Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();

    CLIENT
        .get_or_init(|| {
            Client::builder()
                .timeout(Duration::from_secs(120))
                .connect_timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to build default HTTP client")
        })
        .clone()
}
