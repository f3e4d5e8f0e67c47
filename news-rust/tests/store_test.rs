use chrono::{DateTime, Utc};
use std::{sync::Arc, thread};
use web3_news::{
    seed, Article, ArticleDraft, ArticleQuery, ArticleStore, Ballot, Category, StoreError,
    VoteChange, VoteType, ANONYMOUS_AUTHOR, DEFAULT_TRENDING_LIMIT, PLACEHOLDER_IMAGE_URL,
};

fn article(id: &str, category_id: &str, ballots: Vec<Ballot>) -> Article {
    Article {
        id: id.to_string(),
        title: format!("Title of {id}"),
        content: format!("<p>Body of {id}</p>"),
        category_id: category_id.to_string(),
        author: "0xauthor".to_string(),
        author_name: "Author".to_string(),
        image_url: PLACEHOLDER_IMAGE_URL.to_string(),
        created_at: DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap(),
        votes: 0,
        user_votes: ballots,
    }
}

fn up_ballots(prefix: &str, n: usize) -> Vec<Ballot> {
    (0..n)
        .map(|i| Ballot::new(format!("{prefix}-{i}"), VoteType::Up))
        .collect()
}

fn category(id: &str) -> Category {
    Category {
        id: id.to_string(),
        name: id.to_string(),
        description: format!("{id} news"),
        icon: "*".to_string(),
    }
}

fn single_article_store() -> ArticleStore {
    ArticleStore::new(vec![], vec![article("a1", "tech", vec![])])
}

fn assert_tally_invariant(article: &Article) {
    let up = article
        .user_votes
        .iter()
        .filter(|b| b.vote_type == VoteType::Up)
        .count() as i64;
    let down = article
        .user_votes
        .iter()
        .filter(|b| b.vote_type == VoteType::Down)
        .count() as i64;
    assert_eq!(article.votes, up - down, "tally drifted from ballots");
}

#[test]
fn vote_scenario_toggle_switch_and_second_voter() {
    let store = single_article_store();

    let outcome = store.vote("a1", VoteType::Up, "w1").unwrap();
    assert_eq!(outcome.votes, 1);
    assert_eq!(outcome.change, VoteChange::Cast);

    let outcome = store.vote("a1", VoteType::Up, "w1").unwrap();
    assert_eq!(outcome.votes, 0);
    assert_eq!(outcome.change, VoteChange::Retracted);
    assert_eq!(outcome.ballot, None);
    assert!(store.get_by_id("a1").unwrap().user_votes.is_empty());

    let outcome = store.vote("a1", VoteType::Down, "w1").unwrap();
    assert_eq!(outcome.votes, -1);
    assert_eq!(
        store.get_by_id("a1").unwrap().user_votes,
        vec![Ballot::new("w1", VoteType::Down)]
    );

    let outcome = store.vote("a1", VoteType::Up, "w2").unwrap();
    assert_eq!(outcome.votes, 0);
    assert_eq!(store.get_by_id("a1").unwrap().user_votes.len(), 2);
}

#[test]
fn tally_always_matches_ballots_under_repeated_toggles() {
    let store = single_article_store();
    let voters = ["w1", "w2", "w3"];
    let types = [VoteType::Up, VoteType::Down];

    for step in 0..60 {
        let voter = voters[step % voters.len()];
        let vote_type = types[(step / 2) % types.len()];
        store.vote("a1", vote_type, voter).unwrap();

        let article = store.get_by_id("a1").unwrap();
        assert_tally_invariant(&article);
        for voter in voters {
            let held = article
                .user_votes
                .iter()
                .filter(|b| b.voter_id == voter)
                .count();
            assert!(held <= 1, "{voter} holds {held} ballots");
        }
    }
}

#[test]
fn double_upvote_returns_to_zero() {
    let store = single_article_store();
    store.vote("a1", VoteType::Up, "v").unwrap();
    store.vote("a1", VoteType::Up, "v").unwrap();

    let article = store.get_by_id("a1").unwrap();
    assert_eq!(article.votes, 0);
    assert_eq!(article.ballot_for("v"), None);
}

#[test]
fn switching_replaces_the_ballot() {
    let store = single_article_store();
    store.vote("a1", VoteType::Up, "v").unwrap();
    let outcome = store.vote("a1", VoteType::Down, "v").unwrap();

    assert_eq!(outcome.change, VoteChange::Switched);
    assert_eq!(outcome.ballot, Some(VoteType::Down));

    let article = store.get_by_id("a1").unwrap();
    assert_eq!(article.user_votes, vec![Ballot::new("v", VoteType::Down)]);
    assert_eq!(article.votes, -1);
}

#[test]
fn vote_rejects_empty_voter_unknown_article_and_bad_type() {
    let store = single_article_store();

    assert_eq!(
        store.vote("a1", VoteType::Up, ""),
        Err(StoreError::InvalidVoter)
    );
    assert_eq!(
        store.vote("a1", VoteType::Up, "   "),
        Err(StoreError::InvalidVoter)
    );
    assert!(matches!(
        store.vote("missing", VoteType::Up, "w1"),
        Err(StoreError::NotFound(_))
    ));
    assert_eq!(
        store.vote_raw("a1", "sideways", "w1"),
        Err(StoreError::InvalidVoteType("sideways".to_string()))
    );
    assert!(matches!(
        store.vote_raw("missing", "sideways", "w1"),
        Err(StoreError::NotFound(_))
    ));
    assert_eq!(
        store.vote_raw("a1", "sideways", ""),
        Err(StoreError::InvalidVoter)
    );

    assert_eq!(store.get_by_id("a1").unwrap().votes, 0);
    assert_eq!(store.vote_raw("a1", "down", "w1").unwrap().votes, -1);
}

#[test]
fn trending_keeps_insertion_order_for_ties() {
    let store = ArticleStore::new(
        vec![],
        vec![
            article("first", "x", up_ballots("a", 10)),
            article("second", "x", up_ballots("b", 10)),
            article("third", "y", up_ballots("c", 5)),
            article("fourth", "y", up_ballots("d", 1)),
        ],
    );

    let ids: Vec<String> = store
        .trending(None, 3)
        .into_iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(ids, vec!["first", "second", "third"]);
}

#[test]
fn trending_ranks_by_votes_within_category_and_limit() {
    let store = ArticleStore::new(
        vec![],
        vec![
            article("low", "x", up_ballots("a", 1)),
            article("other", "y", up_ballots("b", 50)),
            article("high", "x", up_ballots("c", 7)),
        ],
    );

    let ids: Vec<String> = store
        .trending(Some("x"), DEFAULT_TRENDING_LIMIT)
        .into_iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(ids, vec!["high", "low"]);

    assert!(store.trending(None, 0).is_empty());
    assert_eq!(store.trending(None, 10).len(), 3);
    assert!(store.trending(Some("nothing"), 3).is_empty());
}

#[test]
fn publish_applies_defaults_and_prepends() {
    let store = single_article_store();
    let before = Utc::now();

    let id = store
        .publish(ArticleDraft::new("T", "C", "x").with_author("0xabc"))
        .unwrap();

    let published = store.get_by_id(&id).unwrap();
    assert_eq!(published.votes, 0);
    assert!(published.user_votes.is_empty());
    assert_eq!(published.author_name, ANONYMOUS_AUTHOR);
    assert_eq!(published.image_url, PLACEHOLDER_IMAGE_URL);
    assert_eq!(published.author, "0xabc");
    assert!(published.created_at >= before && published.created_at <= Utc::now());

    assert_eq!(store.articles()[0].id, id);
    assert_eq!(store.len(), 2);
}

#[test]
fn publish_treats_blank_author_name_as_anonymous() {
    let store = ArticleStore::default();
    let id = store
        .publish(ArticleDraft::new("T", "C", "x").with_author_name("  "))
        .unwrap();
    assert_eq!(store.get_by_id(&id).unwrap().author_name, ANONYMOUS_AUTHOR);

    let id = store
        .publish(ArticleDraft::new("T", "C", "x").with_author_name("Reporter"))
        .unwrap();
    assert_eq!(store.get_by_id(&id).unwrap().author_name, "Reporter");
}

#[test]
fn publish_rejects_missing_fields_without_touching_collection() {
    let store = single_article_store();

    assert_eq!(
        store.publish(ArticleDraft::new("", "C", "x")),
        Err(StoreError::Validation {
            missing_fields: vec!["title".to_string()]
        })
    );
    assert_eq!(
        store.publish(ArticleDraft::new("  ", " \n", "x")),
        Err(StoreError::Validation {
            missing_fields: vec!["title".to_string(), "content".to_string()]
        })
    );
    assert_eq!(store.len(), 1);
}

#[test]
fn published_ids_are_unique() {
    let store = ArticleStore::default();
    let mut ids = std::collections::HashSet::new();
    for i in 0..200 {
        let id = store
            .publish(ArticleDraft::new(format!("T{i}"), "C", "x"))
            .unwrap();
        assert!(ids.insert(id), "duplicate id issued");
    }

    let deleted = store.articles()[0].id.clone();
    store.delete_by_id(&deleted).unwrap();
    let id = store.publish(ArticleDraft::new("again", "C", "x")).unwrap();
    assert_ne!(id, deleted);
}

#[test]
fn default_store_numbers_ids_like_a_new_store() {
    let defaulted = ArticleStore::default();
    let created = ArticleStore::new(vec![], vec![]);

    let first = defaulted.publish(ArticleDraft::new("T", "C", "x")).unwrap();
    let other = created.publish(ArticleDraft::new("T", "C", "x")).unwrap();

    assert!(first.ends_with("-1"), "{first}");
    assert!(other.ends_with("-1"), "{other}");
    assert!(defaulted.categories().is_empty());
}

#[test]
fn delete_is_not_idempotent() {
    let store = single_article_store();
    assert_eq!(store.delete_by_id("a1"), Ok(()));
    assert!(store.is_empty());
    assert!(matches!(
        store.delete_by_id("a1"),
        Err(StoreError::NotFound(_))
    ));
}

#[test]
fn lookups_report_not_found() {
    let store = ArticleStore::new(vec![category("tech")], vec![]);
    assert_eq!(store.get_category_by_id("tech").unwrap().name, "tech");
    assert!(matches!(
        store.get_category_by_id("sports"),
        Err(StoreError::NotFound(_))
    ));
    assert!(matches!(store.get_by_id("a1"), Err(StoreError::NotFound(_))));
}

#[test]
fn list_by_category_keeps_collection_order() {
    let store = ArticleStore::new(
        vec![],
        vec![
            article("a", "x", vec![]),
            article("b", "y", vec![]),
            article("c", "x", vec![]),
        ],
    );
    let ids: Vec<String> = store
        .list_by_category("x")
        .into_iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(ids, vec!["a", "c"]);
    assert!(store.list_by_category("z").is_empty());

    let id = store.publish(ArticleDraft::new("new", "C", "x")).unwrap();
    assert_eq!(store.list_by_category("x")[0].id, id);
}

#[test]
fn edit_keeps_identity_creation_time_and_ballots() {
    let store = single_article_store();
    store.vote("a1", VoteType::Up, "w1").unwrap();
    let original = store.get_by_id("a1").unwrap();

    let edited = store
        .edit(
            "a1",
            ArticleDraft::new("New title", "New body", "sports").with_author("0xsomeoneelse"),
        )
        .unwrap();

    assert_eq!(edited.id, original.id);
    assert_eq!(edited.created_at, original.created_at);
    assert_eq!(edited.author, original.author);
    assert_eq!(edited.user_votes, original.user_votes);
    assert_eq!(edited.votes, 1);
    assert_eq!(edited.title, "New title");
    assert_eq!(edited.category_id, "sports");
    assert_eq!(edited.author_name, ANONYMOUS_AUTHOR);

    assert!(matches!(
        store.edit("a1", ArticleDraft::new("", "body", "x")),
        Err(StoreError::Validation { .. })
    ));
    assert!(matches!(
        store.edit("nope", ArticleDraft::new("t", "body", "x")),
        Err(StoreError::NotFound(_))
    ));
}

#[test]
fn profile_queries_by_author_and_voter() {
    let store = ArticleStore::new(
        vec![],
        vec![article("a", "x", vec![]), article("b", "x", vec![])],
    );
    let mine = store
        .publish(ArticleDraft::new("Mine", "C", "x").with_author("0xme"))
        .unwrap();
    store.vote("a", VoteType::Down, "0xme").unwrap();
    store.vote("b", VoteType::Up, "0xme").unwrap();
    store.vote("b", VoteType::Up, "0xother").unwrap();

    let published = store.articles_by_author("0xme");
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].id, mine);

    let votes: Vec<(String, VoteType)> = store
        .votes_by_voter("0xme")
        .into_iter()
        .map(|v| (v.article.id, v.vote_type))
        .collect();
    assert_eq!(
        votes,
        vec![
            ("a".to_string(), VoteType::Down),
            ("b".to_string(), VoteType::Up)
        ]
    );
}

#[test]
fn search_filters_by_category_and_term_newest_first() {
    let mut old = article("old", "x", vec![]);
    old.title = "Bitcoin halving recap".to_string();
    old.created_at = DateTime::<Utc>::from_timestamp(1_600_000_000, 0).unwrap();
    let mut new = article("new", "x", vec![]);
    new.content = "<p>What the BITCOIN ETF means</p>".to_string();
    new.created_at = DateTime::<Utc>::from_timestamp(1_650_000_000, 0).unwrap();
    let elsewhere = article("elsewhere", "y", vec![]);

    let store = ArticleStore::new(vec![], vec![old, elsewhere, new]);

    let ids = |query: ArticleQuery| -> Vec<String> {
        store.search(&query).into_iter().map(|a| a.id).collect()
    };

    assert_eq!(ids(ArticleQuery::default().matching("bitcoin")), vec!["new", "old"]);
    assert_eq!(
        ids(ArticleQuery::default().in_category("y").matching("  ")),
        vec!["elsewhere"]
    );
    assert_eq!(ids(ArticleQuery::default()).len(), 3);
    assert!(ids(ArticleQuery::default().in_category("y").matching("bitcoin")).is_empty());
}

#[test]
fn loaded_articles_are_reconciled() {
    let mut drifted = article(
        "a",
        "x",
        vec![
            Ballot::new("w1", VoteType::Up),
            Ballot::new("w1", VoteType::Down),
            Ballot::new("w2", VoteType::Up),
        ],
    );
    drifted.votes = 99;

    let store = ArticleStore::new(vec![], vec![drifted, article("a", "y", vec![])]);
    assert_eq!(store.len(), 1);

    let loaded = store.get_by_id("a").unwrap();
    assert_eq!(loaded.votes, 2);
    assert_eq!(loaded.user_votes.len(), 2);
    assert_eq!(loaded.category_id, "x");
}

#[test]
fn seed_data_satisfies_tally_invariant() {
    let store = ArticleStore::with_seed_data();
    assert_eq!(store.categories().len(), seed::categories().len());
    assert!(!store.is_empty());
    for article in store.articles() {
        assert_tally_invariant(&article);
    }

    let top = store.trending(None, DEFAULT_TRENDING_LIMIT);
    assert_eq!(top.len(), 3);
    assert!(top.windows(2).all(|w| w[0].votes >= w[1].votes));
}

#[test]
fn concurrent_votes_from_different_voters_are_not_lost() {
    let store = Arc::new(single_article_store());
    let handles: Vec<_> = (0..8)
        .map(|t| {
            let store = store.clone();
            thread::spawn(move || {
                for i in 0..50 {
                    store
                        .vote("a1", VoteType::Up, &format!("voter-{t}-{i}"))
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let article = store.get_by_id("a1").unwrap();
    assert_eq!(article.votes, 400);
    assert_eq!(article.user_votes.len(), 400);
}
