// CloudWatch Slack Relay - Lambda Entry Point

use std::sync::Arc;

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use cloudwatch_slack_relay::{KmsDecryptor, Relay};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Lambda adds its own timestamps to log lines
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_ansi(false)
        .without_time()
        .init();

    let relay = Arc::new(Relay::new(Arc::new(KmsDecryptor::from_env().await)));

    run(service_fn(move |event: LambdaEvent<Value>| {
        let relay = Arc::clone(&relay);
        async move {
            let outcome = relay.handle(&event.payload).await;
            tracing::debug!("Invocation finished: {:?}", outcome);
            Ok::<(), Error>(())
        }
    }))
    .await
}
