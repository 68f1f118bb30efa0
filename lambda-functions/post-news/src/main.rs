use aws_lambda_events::event::apigw::ApiGatewayProxyRequest;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use post_news::PostNewsService;
use shared::{Config, NewsStore};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .json()
        .init();

    // Missing table configuration aborts startup; no request is served.
    let config = Config::from_env()?;
    let store = NewsStore::new(config.table_name).await;
    let service = PostNewsService::new(store);

    run(service_fn(|event: LambdaEvent<ApiGatewayProxyRequest>| async {
        Ok::<_, Error>(service.handle(event.payload).await)
    }))
    .await
}
