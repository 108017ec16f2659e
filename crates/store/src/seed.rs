//! Demo dataset standing in for a future backend.
//!
//! The seed is deterministic: entities are inserted in a fixed order,
//! so the IDs the store assigns are stable across runs and tests can
//! rely on them.

use chrono::{DateTime, TimeZone, Utc};
use quillpress_common::{AppResult, estimate_reading_time, slugify};

use crate::entities::{
    Category, CommentAuthor, CommentStatus, NewCategory, NewComment, NewPost, NewTag, NewUser,
    PostStatus, PostType,
};
use crate::store::CollectionStore;

// All seed timestamps are valid calendar dates.
#[allow(clippy::unwrap_used)]
fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 10, 0, 0).unwrap()
}

async fn named_category(
    store: &CollectionStore,
    name: &str,
    parent: Option<i64>,
    order: i32,
) -> AppResult<Category> {
    store
        .insert_category(NewCategory {
            name: name.to_string(),
            slug: slugify(name),
            description: None,
            parent_category_id: parent,
            display_order: order,
            is_active: true,
            created_at: at(2023, 1, 1),
        })
        .await
}

async fn named_tag(store: &CollectionStore, name: &str) -> AppResult<i64> {
    let tag = store
        .insert_tag(NewTag {
            name: name.to_string(),
            slug: slugify(name),
            description: None,
            created_at: at(2023, 1, 1),
        })
        .await?;
    Ok(tag.id)
}

/// Load the demo dataset into an empty store.
#[allow(clippy::too_many_lines)]
pub async fn seed(store: &CollectionStore) -> AppResult<()> {
    let john = store
        .insert_user(NewUser {
            username: "johndoe".to_string(),
            email: "john@example.com".to_string(),
            full_name: Some("John Doe".to_string()),
            bio: Some("Systems programmer writing about the web platform.".to_string()),
            avatar_url: None,
            website_url: Some("https://johndoe.dev".to_string()),
            is_active: true,
            is_admin: true,
            created_at: at(2023, 1, 15),
        })
        .await?;

    let jane = store
        .insert_user(NewUser {
            username: "janesmith".to_string(),
            email: "jane@example.com".to_string(),
            full_name: Some("Jane Smith".to_string()),
            bio: Some("Designer focused on accessible interfaces.".to_string()),
            avatar_url: None,
            website_url: None,
            is_active: true,
            is_admin: false,
            created_at: at(2023, 3, 20),
        })
        .await?;

    let technology = named_category(store, "Technology", None, 1).await?;
    let web_development = named_category(store, "Web Development", Some(technology.id), 2).await?;
    let design = named_category(store, "Design", None, 3).await?;
    let lifestyle = named_category(store, "Lifestyle", None, 4).await?;

    let rust = named_tag(store, "Rust").await?;
    let wasm = named_tag(store, "WebAssembly").await?;
    let javascript = named_tag(store, "JavaScript").await?;
    let css = named_tag(store, "CSS").await?;
    let _nodejs = named_tag(store, "Node.js").await?;
    let accessibility = named_tag(store, "Accessibility").await?;
    let tutorial = named_tag(store, "Tutorial").await?;
    let best_practices = named_tag(store, "Best Practices").await?;

    let wasm_content = "WebAssembly lets the browser run code compiled from languages other \
                        than JavaScript, and Rust has first-class tooling for it. This \
                        walkthrough covers installing the wasm32 target, wiring up \
                        wasm-bindgen, and calling into the module from a plain HTML page. \
                        Along the way we look at how ownership rules translate across the \
                        boundary and why the generated glue code stays so small."
        .to_string();
    let wasm_post = store
        .insert_post(NewPost {
            title: "Getting Started with Rust and WebAssembly".to_string(),
            slug: "getting-started-rust-webassembly".to_string(),
            excerpt: Some(
                "Set up a Rust toolchain that compiles to WebAssembly and ship your first \
                 module."
                    .to_string(),
            ),
            reading_time_minutes: Some(estimate_reading_time(&wasm_content)),
            content: wasm_content,
            author_id: john.id,
            category_id: Some(web_development.id),
            tag_ids: vec![rust, wasm, tutorial],
            post_type: PostType::Tutorial,
            status: PostStatus::Published,
            is_featured: true,
            is_comments_enabled: true,
            view_count: 1_520,
            published_at: Some(at(2024, 1, 15)),
            created_at: at(2024, 1, 10),
        })
        .await?;

    let a11y_content = "Accessibility work goes wrong when it is treated as a final audit \
                        instead of a design constraint. This article collects the habits that \
                        held up across several product teams: semantic markup first, visible \
                        focus states, color contrast checked at the token level, and keyboard \
                        paths exercised in review."
        .to_string();
    let a11y_post = store
        .insert_post(NewPost {
            title: "Designing Accessible Interfaces".to_string(),
            slug: "designing-accessible-interfaces".to_string(),
            excerpt: Some(
                "Practical accessibility habits that survive deadline pressure.".to_string(),
            ),
            reading_time_minutes: Some(estimate_reading_time(&a11y_content)),
            content: a11y_content,
            author_id: jane.id,
            category_id: Some(design.id),
            tag_ids: vec![accessibility, best_practices],
            post_type: PostType::Article,
            status: PostStatus::Published,
            is_featured: false,
            is_comments_enabled: true,
            view_count: 2_340,
            published_at: Some(at(2024, 2, 1)),
            created_at: at(2024, 1, 28),
        })
        .await?;

    let css_content = "Layout on the web finally has primitives that match how designers \
                       think. We rebuild three production page shells with grid template \
                       areas, flex wrapping, and container queries, and note where each \
                       primitive earns its place."
        .to_string();
    store
        .insert_post(NewPost {
            title: "Modern CSS Layout Techniques".to_string(),
            slug: "modern-css-layout-techniques".to_string(),
            excerpt: Some(
                "Grid, flexbox, and container queries compared on real layouts.".to_string(),
            ),
            reading_time_minutes: Some(estimate_reading_time(&css_content)),
            content: css_content,
            author_id: jane.id,
            category_id: Some(web_development.id),
            tag_ids: vec![css, tutorial],
            post_type: PostType::Tutorial,
            status: PostStatus::Published,
            is_featured: true,
            is_comments_enabled: true,
            view_count: 980,
            published_at: Some(at(2024, 2, 20)),
            created_at: at(2024, 2, 18),
        })
        .await?;

    let notes_content = "Most productivity systems fail because they demand a new identity \
                         rather than a new habit. Here is the minimal loop that survived two \
                         job changes: capture everything in one inbox, review weekly, archive \
                         aggressively."
        .to_string();
    store
        .insert_post(NewPost {
            title: "A Note-Taking System That Sticks".to_string(),
            slug: "note-taking-system-that-sticks".to_string(),
            excerpt: None,
            reading_time_minutes: Some(estimate_reading_time(&notes_content)),
            content: notes_content,
            author_id: john.id,
            category_id: Some(lifestyle.id),
            tag_ids: vec![best_practices],
            post_type: PostType::Article,
            status: PostStatus::Published,
            is_featured: false,
            is_comments_enabled: false,
            view_count: 450,
            published_at: Some(at(2024, 3, 5)),
            created_at: at(2024, 3, 1),
        })
        .await?;

    let draft_content = "Draft notes on streaming HTML, hydration cost, and where rendering \
                         actually belongs."
        .to_string();
    store
        .insert_post(NewPost {
            title: "Server Rendering Deep Dive".to_string(),
            slug: "server-rendering-deep-dive".to_string(),
            excerpt: None,
            reading_time_minutes: Some(estimate_reading_time(&draft_content)),
            content: draft_content,
            author_id: john.id,
            category_id: Some(web_development.id),
            tag_ids: vec![javascript],
            post_type: PostType::Article,
            status: PostStatus::Draft,
            is_featured: false,
            is_comments_enabled: true,
            view_count: 0,
            published_at: None,
            created_at: at(2024, 3, 10),
        })
        .await?;

    let archive_content = "Kept for the archive: how the framework conversation looked in \
                           2020 and which predictions held up."
        .to_string();
    store
        .insert_post(NewPost {
            title: "JavaScript Frameworks in 2020".to_string(),
            slug: "javascript-frameworks-2020".to_string(),
            excerpt: Some("A period snapshot of the framework landscape.".to_string()),
            reading_time_minutes: Some(estimate_reading_time(&archive_content)),
            content: archive_content,
            author_id: john.id,
            category_id: Some(technology.id),
            tag_ids: vec![javascript],
            post_type: PostType::News,
            status: PostStatus::Archived,
            is_featured: false,
            is_comments_enabled: true,
            view_count: 3_100,
            published_at: Some(at(2020, 6, 1)),
            created_at: at(2020, 5, 28),
        })
        .await?;

    let first_comment = store
        .insert_comment(NewComment {
            post_id: wasm_post.id,
            author: CommentAuthor::Registered { user_id: jane.id },
            parent_comment_id: None,
            content: "The wasm-bindgen section cleared up a lot, thanks!".to_string(),
            status: CommentStatus::Approved,
            is_author_reply: false,
            created_at: at(2024, 1, 16),
        })
        .await?;

    store
        .insert_comment(NewComment {
            post_id: wasm_post.id,
            author: CommentAuthor::Registered { user_id: john.id },
            parent_comment_id: Some(first_comment.id),
            content: "Glad it helped. A follow-up on threading is in the works.".to_string(),
            status: CommentStatus::Approved,
            is_author_reply: true,
            created_at: at(2024, 1, 17),
        })
        .await?;

    store
        .insert_comment(NewComment {
            post_id: wasm_post.id,
            author: CommentAuthor::Anonymous {
                name: "Visitor".to_string(),
                email: "visitor@example.com".to_string(),
            },
            parent_comment_id: Some(first_comment.id),
            content: "Does this work with the no_std ecosystem too?".to_string(),
            status: CommentStatus::Approved,
            is_author_reply: false,
            created_at: at(2024, 1, 18),
        })
        .await?;

    store
        .insert_comment(NewComment {
            post_id: wasm_post.id,
            author: CommentAuthor::Anonymous {
                name: "Newcomer".to_string(),
                email: "new@example.com".to_string(),
            },
            parent_comment_id: None,
            content: "First comment here, still waiting for the moderators.".to_string(),
            status: CommentStatus::Pending,
            is_author_reply: false,
            created_at: at(2024, 1, 19),
        })
        .await?;

    store
        .insert_comment(NewComment {
            post_id: wasm_post.id,
            author: CommentAuthor::Anonymous {
                name: "Promo Bot".to_string(),
                email: "bot@example.com".to_string(),
            },
            parent_comment_id: None,
            content: "Cheap watches at unbeatable prices!!!".to_string(),
            status: CommentStatus::Spam,
            is_author_reply: false,
            created_at: at(2024, 1, 20),
        })
        .await?;

    store
        .insert_comment(NewComment {
            post_id: a11y_post.id,
            author: CommentAuthor::Anonymous {
                name: "Screen Reader User".to_string(),
                email: "reader@example.com".to_string(),
            },
            parent_comment_id: None,
            content: "The focus-state advice matches my daily experience exactly.".to_string(),
            status: CommentStatus::Approved,
            is_author_reply: false,
            created_at: at(2024, 2, 3),
        })
        .await?;

    tracing::info!("Seeded demo dataset");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_is_deterministic() {
        let store = CollectionStore::new();
        seed(&store).await.unwrap();

        let cols = store.read().await;
        assert_eq!(cols.users.len(), 2);
        assert_eq!(cols.categories.len(), 4);
        assert_eq!(cols.tags.len(), 8);
        assert_eq!(cols.posts.len(), 6);
        assert_eq!(cols.comments.len(), 6);

        // IDs are assigned in insertion order.
        assert_eq!(cols.posts[0].id, 1);
        assert_eq!(cols.posts[0].slug, "getting-started-rust-webassembly");
        assert_eq!(cols.categories[1].parent_category_id, Some(1));
    }

    #[tokio::test]
    async fn test_seed_fills_reading_times() {
        let store = CollectionStore::new();
        seed(&store).await.unwrap();

        let cols = store.read().await;
        assert!(cols.posts.iter().all(|p| p.reading_time_minutes.is_some()));
    }

    #[tokio::test]
    async fn test_seed_slugs_are_generated() {
        let store = CollectionStore::new();
        seed(&store).await.unwrap();

        let cols = store.read().await;
        let wd = cols
            .categories
            .iter()
            .find(|c| c.name == "Web Development")
            .unwrap();
        assert_eq!(wd.slug, "web-development");
        let bp = cols.tags.iter().find(|t| t.name == "Best Practices").unwrap();
        assert_eq!(bp.slug, "best-practices");
    }
}
