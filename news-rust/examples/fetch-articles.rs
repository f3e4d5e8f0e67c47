use dotenvy::dotenv;
use futures::TryStreamExt;
use std::{env, error::Error};
use tracing_subscriber::EnvFilter;
use web3_news::{list_all, ListOptions, RemoteArticleService, RemoteArticleServiceOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let service = RemoteArticleService::new(RemoteArticleServiceOptions {
        base_url: env::var("WEB3_NEWS_API_URL").ok(),
        ..Default::default()
    });

    let mut options = ListOptions::default().limit(10);
    if let Some(category) = env::args().nth(1) {
        options = options.category(category);
    }

    let articles: Vec<_> = list_all(&service, options).try_collect().await?;
    for article in &articles {
        println!(
            "{:>5}  {}  [{}] by {}",
            article.votes, article.title, article.category_id, article.author_name
        );
    }
    println!("{} articles", articles.len());

    Ok(())
}
