mod support;

use forum_core::application::error::ApplicationError;
use forum_core::application::queries::articles::{
    GetArticleQuery, ListArticlesQuery, ListCommentsQuery,
};
use support::{article, comment, context, topic, ts, user};

fn seeded() -> support::TestContext {
    context(
        vec![
            article(1, "banana bread", "cooking", "weegembump", 5, ts(30)),
            article(2, "zebra facts", "animals", "lurker", 10, ts(10)),
            article(3, "apple pie", "cooking", "icellusedkars", 0, ts(20)),
        ],
        vec![
            comment(1, 3, "lurker", "looks tasty", 0),
            comment(2, 3, "weegembump", "needs more sugar", 2),
        ],
        vec![topic("cooking"), topic("animals"), topic("paper")],
        vec![user("weegembump"), user("lurker"), user("icellusedkars")],
    )
}

fn list_query(
    sort_by: Option<&str>,
    topic: Option<&str>,
    order: Option<&str>,
) -> ListArticlesQuery {
    ListArticlesQuery {
        sort_by: sort_by.map(String::from),
        topic: topic.map(String::from),
        order: order.map(String::from),
    }
}

#[tokio::test]
async fn lists_articles_sorted_by_created_at_descending_by_default() {
    let ctx = seeded();
    let articles = ctx
        .services
        .article_queries
        .list_articles(list_query(None, None, None))
        .await
        .unwrap();

    let ids: Vec<i64> = articles.iter().map(|a| a.article_id).collect();
    assert_eq!(ids, vec![1, 3, 2]);
}

#[tokio::test]
async fn sorts_by_votes_ascending_when_requested() {
    let ctx = seeded();
    let articles = ctx
        .services
        .article_queries
        .list_articles(list_query(Some("votes"), None, Some("asc")))
        .await
        .unwrap();

    let votes: Vec<i64> = articles.iter().map(|a| a.votes).collect();
    assert_eq!(votes, vec![0, 5, 10]);
}

#[tokio::test]
async fn invalid_order_behaves_like_omitting_it() {
    let ctx = seeded();
    let explicit = ctx
        .services
        .article_queries
        .list_articles(list_query(Some("title"), None, Some("sideways")))
        .await
        .unwrap();
    let defaulted = ctx
        .services
        .article_queries
        .list_articles(list_query(Some("title"), None, None))
        .await
        .unwrap();

    let explicit_ids: Vec<i64> = explicit.iter().map(|a| a.article_id).collect();
    let defaulted_ids: Vec<i64> = defaulted.iter().map(|a| a.article_id).collect();
    assert_eq!(explicit_ids, defaulted_ids);
    assert_eq!(explicit_ids, vec![2, 1, 3]);
}

#[tokio::test]
async fn rejects_sort_keys_outside_the_allow_list_without_touching_storage() {
    let ctx = seeded();
    let err = ctx
        .services
        .article_queries
        .list_articles(list_query(Some("not_a_column"), None, None))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::InvalidQuery(_)));
    assert_eq!(ctx.articles.list_call_count(), 0);
}

#[tokio::test]
async fn filters_by_topic_exactly() {
    let ctx = seeded();
    let articles = ctx
        .services
        .article_queries
        .list_articles(list_query(None, Some("cooking"), None))
        .await
        .unwrap();

    assert_eq!(articles.len(), 2);
    assert!(articles.iter().all(|a| a.topic == "cooking"));
}

#[tokio::test]
async fn registered_topic_with_no_articles_is_an_empty_collection() {
    let ctx = seeded();
    let articles = ctx
        .services
        .article_queries
        .list_articles(list_query(None, Some("paper"), None))
        .await
        .unwrap();

    assert!(articles.is_empty());
}

#[tokio::test]
async fn unknown_topic_is_not_found() {
    let ctx = seeded();
    let err = ctx
        .services
        .article_queries
        .list_articles(list_query(None, Some("invalid-topic"), None))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn supplied_but_empty_topic_is_not_found() {
    let ctx = seeded();
    let err = ctx
        .services
        .article_queries
        .list_articles(list_query(None, Some(""), None))
        .await
        .unwrap_err();

    // `?topic=` names a slug no topic can have, same outcome as an unknown one.
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn gets_a_single_article_with_comment_count() {
    let ctx = seeded();
    let article = ctx
        .services
        .article_queries
        .get_article(GetArticleQuery {
            article_id: "3".into(),
        })
        .await
        .unwrap();

    assert_eq!(article.article_id, 3);
    assert_eq!(article.title, "apple pie");
    assert_eq!(article.body, "some text");
}

#[tokio::test]
async fn get_article_rejects_non_numeric_ids_and_misses() {
    let ctx = seeded();

    let err = ctx
        .services
        .article_queries
        .get_article(GetArticleQuery {
            article_id: "invalid".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::InvalidIdentifier(_)));

    let err = ctx
        .services
        .article_queries
        .get_article(GetArticleQuery {
            article_id: "32993".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn lists_comments_for_an_article() {
    let ctx = seeded();
    let comments = ctx
        .services
        .article_queries
        .list_comments(ListCommentsQuery {
            article_id: "3".into(),
        })
        .await
        .unwrap();

    assert_eq!(comments.len(), 2);
    assert!(comments.iter().all(|c| c.article_id == 3));
}

#[tokio::test]
async fn article_without_comments_yields_an_empty_list_not_an_error() {
    let ctx = seeded();
    let comments = ctx
        .services
        .article_queries
        .list_comments(ListCommentsQuery {
            article_id: "2".into(),
        })
        .await
        .unwrap();

    assert!(comments.is_empty());
}

#[tokio::test]
async fn comments_for_a_missing_article_are_not_found() {
    let ctx = seeded();

    let err = ctx
        .services
        .article_queries
        .list_comments(ListCommentsQuery {
            article_id: "32993".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));

    let err = ctx
        .services
        .article_queries
        .list_comments(ListCommentsQuery {
            article_id: "invalid".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::InvalidIdentifier(_)));
}
