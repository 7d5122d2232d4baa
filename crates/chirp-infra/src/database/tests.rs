use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use uuid::Uuid;

use chirp_core::domain::Post;
use chirp_core::ports::{FollowRepository, PostRepository, UserRepository};

use super::entity::{post, user};
use super::postgres_repo::{
    PostgresFollowRepository, PostgresPostRepository, PostgresUserRepository,
};

#[tokio::test]
async fn find_post_by_id_maps_to_domain() {
    let post_id = Uuid::new_v4();
    let author_id = Uuid::new_v4();
    let now = Utc::now();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post::Model {
            id: post_id,
            author_id,
            body: "hello from the mock".to_owned(),
            created_at: now.into(),
        }]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

    let found = result.unwrap();
    assert_eq!(found.id, post_id);
    assert_eq!(found.author_id, author_id);
    assert_eq!(found.body, "hello from the mock");
}

#[tokio::test]
async fn page_by_authors_maps_window_rows() {
    let author_id = Uuid::new_v4();
    let now = Utc::now();
    let rows: Vec<post::Model> = (0..2)
        .map(|i| post::Model {
            id: Uuid::new_v4(),
            author_id,
            body: format!("post {i}"),
            created_at: now.into(),
        })
        .collect();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![rows])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let page = repo.page_by_authors(&[author_id], 5, 2).await.unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page[0].body, "post 0");
}

#[tokio::test]
async fn follow_insert_reports_new_edge() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let repo = PostgresFollowRepository::new(db);
    let created = repo.insert(Uuid::new_v4(), Uuid::new_v4()).await.unwrap();
    assert!(created);
}

#[tokio::test]
async fn follow_insert_conflict_is_quiet_noop() {
    // ON CONFLICT DO NOTHING: zero rows affected on a repeat follow.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresFollowRepository::new(db);
    let created = repo.insert(Uuid::new_v4(), Uuid::new_v4()).await.unwrap();
    assert!(!created);
}

#[tokio::test]
async fn unfollow_absent_edge_reports_noop() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresFollowRepository::new(db);
    let removed = repo.remove(Uuid::new_v4(), Uuid::new_v4()).await.unwrap();
    assert!(!removed);
}

#[tokio::test]
async fn find_user_by_username_maps_to_domain() {
    let user_id = Uuid::new_v4();
    let now = Utc::now();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![user::Model {
            id: user_id,
            username: "susan".to_owned(),
            email: "susan@example.com".to_owned(),
            password_hash: "$argon2$...".to_owned(),
            about_me: Some("hi".to_owned()),
            last_seen: None,
            created_at: now.into(),
            updated_at: now.into(),
        }]])
        .into_connection();

    let repo = PostgresUserRepository::new(db);
    let found = repo.find_by_username("susan").await.unwrap().unwrap();

    assert_eq!(found.id, user_id);
    assert_eq!(found.about_me.as_deref(), Some("hi"));
    assert!(found.last_seen.is_none());
}
