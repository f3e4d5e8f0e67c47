use dotenvy::dotenv;
use std::{env, error::Error, sync::Arc};
use tracing_subscriber::EnvFilter;
use web3_news::{
    ArticleDraft, ArticleStore, RemoteArticleService, RemoteArticleServiceOptions,
};
use web3_news_feed::{ArticleFeed, UserRole, WalletSession};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let store = Arc::new(ArticleStore::with_seed_data());
    let mut builder = ArticleFeed::builder(store);
    if let Ok(base_url) = env::var("WEB3_NEWS_API_URL") {
        builder = builder.remote(Arc::new(RemoteArticleService::new(
            RemoteArticleServiceOptions {
                base_url: Some(base_url),
                ..Default::default()
            },
        )));
    }
    let feed = builder.build();

    let articles = feed.load_articles(None).await?;
    println!(
        "{} articles from {}",
        articles.as_inner().len(),
        if articles.is_remote() { "the API" } else { "local data" }
    );

    println!("Trending:");
    for article in feed.trending(None) {
        println!("{:>5}  {}", article.votes, article.title);
    }

    let mut wallet = WalletSession::disconnected();
    let address = wallet.connect_random().to_string();
    let session = feed.session(&wallet, UserRole::for_address(&address));

    let article_id = session
        .publish(
            ArticleDraft::new(
                "Hello from the feed example",
                "<p>Published with a random wallet.</p>",
                "Miscellaneous",
            )
            .with_author_name("Example"),
        )
        .await?;
    let outcome = session.vote(&article_id, "up")?;
    println!("{address} published {article_id} ({} votes)", outcome.votes);

    let profile = session.profile()?;
    println!(
        "profile: {} published, {} ballots",
        profile.published.len(),
        profile.votes.len()
    );

    Ok(())
}
