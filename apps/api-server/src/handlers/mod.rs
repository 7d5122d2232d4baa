//! HTTP handlers and route configuration.

mod auth;
mod health;
mod posts;
mod users;

use actix_web::web;

use chirp_core::domain::{Post, User};
use chirp_core::pagination::Page;
use chirp_shared::dto::{PostPageResponse, PostResponse, UserResponse};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth::register))
                    .route("/login", web::post().to(auth::login))
                    .route("/me", web::get().to(auth::me)),
            )
            // Feed + posts
            .route("/feed", web::get().to(posts::feed))
            .service(
                web::scope("/posts")
                    .route("/explore", web::get().to(posts::explore))
                    .route("", web::post().to(posts::create)),
            )
            // Users + follow graph. "/me" is registered before "/{username}"
            // so it is not swallowed by the dynamic segment.
            .service(
                web::scope("/users")
                    .route("/me", web::put().to(users::update_me))
                    .route("/{username}", web::get().to(users::profile))
                    .route("/{username}/follow", web::post().to(users::follow))
                    .route("/{username}/follow", web::delete().to(users::unfollow)),
            ),
    );
}

pub(crate) fn user_response(user: User) -> UserResponse {
    UserResponse {
        id: user.id,
        username: user.username,
        about_me: user.about_me,
        last_seen: user.last_seen,
        created_at: user.created_at,
    }
}

pub(crate) fn post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        author_id: post.author_id,
        body: post.body,
        created_at: post.created_at,
    }
}

pub(crate) fn post_page_response(page: Page<Post>) -> PostPageResponse {
    let info = page.info;
    PostPageResponse {
        posts: page.items.into_iter().map(post_response).collect(),
        page: info.page,
        per_page: info.page_size,
        total: info.total,
        has_next: info.has_next,
        has_prev: info.has_prev,
        next_page: info.next_page,
        prev_page: info.prev_page,
    }
}

/// Pagination query parameters, clamped before they reach the feed engine
/// (which expects `page >= 1`).
#[derive(Debug, serde::Deserialize)]
pub(crate) struct PageQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

const DEFAULT_PER_PAGE: u64 = 10;
const MAX_PER_PAGE: u64 = 100;

impl PageQuery {
    pub fn clamped(&self) -> (u64, u64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self
            .per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, MAX_PER_PAGE);
        (page, per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::PageQuery;

    #[test]
    fn page_query_clamps_out_of_range_values() {
        let q = PageQuery {
            page: Some(0),
            per_page: Some(1000),
        };
        assert_eq!(q.clamped(), (1, 100));

        let q = PageQuery {
            page: None,
            per_page: None,
        };
        assert_eq!(q.clamped(), (1, 10));
    }
}
