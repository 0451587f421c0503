use instagram_app::{app::App, config::Config};

use clap::Parser;
use implementation::Impl;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::parse();
    let client = instagram_client::Ig::init(config.session(), &config.ig_user_agent)?;

    let app = App {
        config: Arc::new(config),
        client: Impl::new(client),
    };

    if app.config.stdio {
        instagram_app::serve_stdio(app).await
    } else {
        instagram_app::serve(app).await
    }
}
