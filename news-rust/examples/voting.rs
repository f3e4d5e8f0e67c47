use std::error::Error;
use web3_news::{ArticleDraft, ArticleStore, VoteType, DEFAULT_TRENDING_LIMIT};

fn main() -> Result<(), Box<dyn Error>> {
    let store = ArticleStore::with_seed_data();

    let id = store.publish(
        ArticleDraft::new(
            "Validator set grows past one million",
            "<p>Staking participation reached a new high this week.</p>",
            "Technology",
        )
        .with_author("0x00000000000000000000000000000000000a1b2c3"),
    )?;
    println!("published {id}");

    for (voter, vote_type) in [
        ("0xaaa", VoteType::Up),
        ("0xbbb", VoteType::Up),
        ("0xaaa", VoteType::Up),
        ("0xccc", VoteType::Down),
        ("0xbbb", VoteType::Down),
    ] {
        let outcome = store.vote(&id, vote_type, voter)?;
        println!(
            "{voter} voted {vote_type}: {:?}, tally {}",
            outcome.change, outcome.votes
        );
    }

    println!("trending:");
    for article in store.trending(None, DEFAULT_TRENDING_LIMIT) {
        println!("{:>5}  {}", article.votes, article.title);
    }

    Ok(())
}
