//! Starting content for a fresh site.
//!
//! Seeded tallies are backed by generated ballots so that every seeded
//! article already satisfies `votes == up - down`.

use crate::{Article, Ballot, Category, VoteType, PLACEHOLDER_IMAGE_URL};
use chrono::{DateTime, Utc};

struct SeedArticle {
    id: &'static str,
    title: &'static str,
    content: &'static str,
    category_id: &'static str,
    author: &'static str,
    author_name: &'static str,
    created_at: i64,
    up: usize,
    down: usize,
}

const CATEGORIES: [(&str, &str, &str); 6] = [
    ("Business", "Markets, funding rounds and company news", "💰"),
    ("Politics", "Regulation, policy and governance", "🖼️"),
    ("Entertainment", "Media, games and culture", "🎥"),
    ("Sports", "Leagues, fan tokens and athletes", "🏈"),
    ("Technology", "Protocols, tooling and infrastructure", "💻"),
    ("Miscellaneous", "Everything else", "🏛️"),
];

const ARTICLES: [SeedArticle; 6] = [
    SeedArticle {
        id: "article-1",
        title: "New DeFi Protocol Reaches $1B TVL in Just 48 Hours",
        content: "<p>A new lending protocol crossed one billion dollars in total value locked two days after launch.</p>",
        category_id: "Business",
        author: "0x1234567890abcdef1234567890abcdef12345678",
        author_name: "CryptoInsider",
        created_at: 1_743_849_000,
        up: 44,
        down: 2,
    },
    SeedArticle {
        id: "article-2",
        title: "Bored Ape Yacht Club Launches New NFT Collection",
        content: "<p>A pixel-art companion collection grants holders access to a set of arcade games.</p>",
        category_id: "Entertainment",
        author: "0xabcdef1234567890abcdef1234567890abcdef12",
        author_name: "NFTEnthusiast",
        created_at: 1_743_781_500,
        up: 38,
        down: 0,
    },
    SeedArticle {
        id: "article-3",
        title: "MakerDAO Votes to Diversify $500M Treasury into Traditional Assets",
        content: "<p>Token holders approved moving part of the treasury into short-dated bonds.</p>",
        category_id: "Politics",
        author: "0x7890abcdef1234567890abcdef1234567890abcd",
        author_name: "DAOexpert",
        created_at: 1_743_671_700,
        up: 31,
        down: 2,
    },
    SeedArticle {
        id: "article-4",
        title: "Ethereum Layer 2 Solutions See Record Adoption as Gas Fees Spike",
        content: "<p>Rollup activity hit an all-time high while mainnet fees climbed.</p>",
        category_id: "Technology",
        author: "0xdef1234567890abcdef1234567890abcdef123456",
        author_name: "L2Enthusiast",
        created_at: 1_743_603_600,
        up: 35,
        down: 0,
    },
    SeedArticle {
        id: "article-5",
        title: "Virtual Land in the Metaverse: The Next Real Estate Boom?",
        content: "<p>Parcel prices in several virtual worlds rose sharply over the quarter.</p>",
        category_id: "Miscellaneous",
        author: "0x567890abcdef1234567890abcdef1234567890ab",
        author_name: "MetaverseTrader",
        created_at: 1_743_505_500,
        up: 29,
        down: 2,
    },
    SeedArticle {
        id: "article-6",
        title: "Uniswap DAO Proposes $10M Developer Grant Program",
        content: "<p>A governance proposal would fund tooling and research over two years.</p>",
        category_id: "Technology",
        author: "0x90abcdef1234567890abcdef1234567890abcdef",
        author_name: "DeFiDeveloper",
        created_at: 1_743_438_600,
        up: 31,
        down: 0,
    },
];

#[must_use]
pub fn categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|(name, description, icon)| Category {
            id: (*name).to_string(),
            name: (*name).to_string(),
            description: (*description).to_string(),
            icon: (*icon).to_string(),
        })
        .collect()
}

/// Seeded articles, newest first.
#[must_use]
pub fn articles() -> Vec<Article> {
    ARTICLES
        .iter()
        .map(|seed| {
            let user_votes = ballots(seed.id, seed.up, seed.down);
            Article {
                id: seed.id.to_string(),
                title: seed.title.to_string(),
                content: seed.content.to_string(),
                category_id: seed.category_id.to_string(),
                author: seed.author.to_string(),
                author_name: seed.author_name.to_string(),
                image_url: PLACEHOLDER_IMAGE_URL.to_string(),
                created_at: DateTime::<Utc>::from_timestamp(seed.created_at, 0).unwrap_or_default(),
                votes: crate::types_ext::tally(&user_votes),
                user_votes,
            }
        })
        .collect()
}

fn ballots(article_id: &str, up: usize, down: usize) -> Vec<Ballot> {
    let voter = |n: usize| format!("seed:{article_id}:{n}");
    (0..up)
        .map(|n| Ballot::new(voter(n), VoteType::Up))
        .chain((up..up + down).map(|n| Ballot::new(voter(n), VoteType::Down)))
        .collect()
}
