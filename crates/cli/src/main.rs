//! Quillpress demo entry point.
//!
//! Seeds the in-memory store, wires the repositories and services the
//! way a serving frontend would, and walks through the reading-surface
//! queries, printing each result as JSON.

use std::sync::Arc;

use quillpress_common::Config;
use quillpress_core::{
    CategoryService, CommentService, CreateCommentInput, DEFAULT_RELATED_LIMIT, PostService,
    TagService,
};
use quillpress_store::entities::{CommentAuthor, PostStatus};
use quillpress_store::repositories::{
    CategoryRepository, CommentRepository, PageRequest, PostFilter, PostRepository, TagRepository,
};
use quillpress_store::{CollectionStore, seed};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quillpress=debug".into()),
        )
        .init();

    dotenvy::dotenv().ok();

    info!("Starting quillpress...");

    // Load configuration
    let config = Config::load()?;
    info!(site = %config.site.name, "Loaded configuration");

    // Initialize the store
    let store = Arc::new(CollectionStore::new());
    if config.seed.enabled {
        seed(&store).await?;
        info!("Seeded demo content");
    }

    // Initialize repositories
    let post_repo = PostRepository::new(Arc::clone(&store));
    let category_repo = CategoryRepository::new(Arc::clone(&store));
    let tag_repo = TagRepository::new(Arc::clone(&store));
    let comment_repo = CommentRepository::new(Arc::clone(&store));

    // Initialize services
    let post_service = PostService::new(post_repo.clone());
    let category_service = CategoryService::new(category_repo);
    let tag_service = TagService::new(tag_repo);
    let comment_service = CommentService::new(comment_repo, post_repo);

    // Front page: featured and popular selections
    let featured = post_service
        .featured(config.pagination.featured_limit)
        .await?;
    println!("== Featured posts ==");
    println!("{}", serde_json::to_string_pretty(&featured)?);

    let popular = post_service.popular(config.pagination.popular_limit).await?;
    println!("== Popular posts ==");
    println!("{}", serde_json::to_string_pretty(&popular)?);

    // Archive: first page of published posts, newest first
    let filter = PostFilter {
        status: Some(PostStatus::Published),
        ..PostFilter::default()
    };
    let page = post_service
        .list(
            &filter,
            PageRequest::new(1, config.pagination.default_page_size),
        )
        .await?;
    println!("== Published posts, page 1 ==");
    println!("{}", serde_json::to_string_pretty(&page)?);

    // Navigation: categories with counts, popular tags
    let categories = category_service.list_with_counts().await?;
    println!("== Categories ==");
    println!("{}", serde_json::to_string_pretty(&categories)?);

    let tags = tag_service
        .popular(quillpress_core::DEFAULT_POPULAR_TAG_LIMIT)
        .await?;
    println!("== Popular tags ==");
    println!("{}", serde_json::to_string_pretty(&tags)?);

    // Search
    let results = post_service.search("rust").await?;
    println!("== Search: \"rust\" ==");
    println!("{}", serde_json::to_string_pretty(&results)?);

    // Reading a post: related posts, a recorded view, the comment tree
    if let Some(post) = page.data.iter().find(|p| p.is_comments_enabled) {
        let related = post_service.related(post.id, DEFAULT_RELATED_LIMIT).await?;
        println!("== Related to \"{}\" ==", post.title);
        println!("{}", serde_json::to_string_pretty(&related)?);

        let views = post_service.record_view(post.id).await?;
        info!(post_id = post.id, views, "Recorded a view");

        let threads = comment_service.for_post(post.id).await?;
        println!("== Comments on \"{}\" ==", post.title);
        println!("{}", serde_json::to_string_pretty(&threads)?);

        // Submit a comment and approve it, as a moderator would
        if post.is_comments_enabled {
            let created = comment_service
                .create(CreateCommentInput {
                    post_id: post.id,
                    parent_comment_id: None,
                    author: CommentAuthor::Anonymous {
                        name: "Demo Reader".to_string(),
                        email: "reader@example.com".to_string(),
                    },
                    content: "Enjoyed this one, thanks for writing it up.".to_string(),
                })
                .await?;
            let approved = comment_service.approve(created.id).await?;
            println!("== Newly approved comment ==");
            println!("{}", serde_json::to_string_pretty(&approved)?);
        }
    }

    info!("Done");
    Ok(())
}
