//! Deterministic synthetic content.
//!
//! Everything is drawn from a seeded `StdRng`: ids, timestamps and text.
//! Nothing reads the clock or the OS entropy source.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use folio_core::domain::{Author, PageContent, PageKind, Post};

use super::config::MockConfig;
use super::lexicon::{
    FIRST_NAMES, LAST_NAMES, LOREM, SOCIAL_PLATFORMS, TAGS, TITLE_ADJECTIVES, TITLE_LINKS,
    TITLE_NOUNS, phrases_for,
};

/// Author and posts, in generation order.
#[derive(Debug, Clone)]
pub struct GeneratedContent {
    pub author: Author,
    pub posts: Vec<Post>,
}

/// Build the author and `config.post_count` posts from `config.seed`.
pub fn generate_content(config: &MockConfig) -> GeneratedContent {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let author = generate_author(&mut rng);
    let span_secs = i64::from(config.span_days.max(1)) * 86_400;

    let mut posts: Vec<Post> = (0..config.post_count)
        .map(|_| {
            let title = title(&mut rng);
            let offset = Duration::seconds(rng.gen_range(0..span_secs));
            Post {
                id: uuid_from(&mut rng),
                slug: slug::slugify(&title),
                title,
                excerpt: sentence(&mut rng, 12, 24),
                content: body(&mut rng),
                cover_image: String::new(),
                published_at: config
                    .anchor
                    .checked_sub_signed(offset)
                    .unwrap_or(DateTime::<Utc>::MIN_UTC),
                author_id: author.id,
                tags: tags(&mut rng),
            }
        })
        .collect();

    ensure_unique_slugs(&mut posts);
    for post in &mut posts {
        post.cover_image = cover_image(&post.slug);
    }

    GeneratedContent { author, posts }
}

/// Build static page copy for every configured locale from `config.page_seed`.
///
/// Locales without a phrase table are skipped.
pub fn generate_pages(config: &MockConfig) -> Vec<PageContent> {
    let mut rng = StdRng::seed_from_u64(config.page_seed);
    let mut pages = Vec::new();

    for locale in &config.locales {
        let Some(phrases) = phrases_for(locale) else {
            tracing::warn!(locale = %locale, "No page copy available for locale, skipping");
            continue;
        };

        for (kind, phrase) in PageKind::ALL.iter().zip(phrases.iter()) {
            let paragraphs = rng.gen_range(2..=4);
            pages.push(PageContent {
                page: *kind,
                locale: locale.to_lowercase(),
                title: phrase.title.to_string(),
                subtitle: phrase.subtitle.to_string(),
                body: (0..paragraphs).map(|_| paragraph(&mut rng)).collect(),
            });
        }
    }

    pages
}

/// Make every slug unique by suffixing repeats with `-2`, `-3`, ...
/// Posts keep their order; the first occurrence keeps the bare slug.
pub fn ensure_unique_slugs(posts: &mut [Post]) {
    let mut seen: HashSet<String> = HashSet::with_capacity(posts.len());

    for post in posts.iter_mut() {
        let mut base = if post.slug.is_empty() {
            slug::slugify(&post.title)
        } else {
            post.slug.clone()
        };
        if base.is_empty() {
            base = "post".to_string();
        }

        let mut candidate = base.clone();
        let mut suffix = 2;
        while !seen.insert(candidate.clone()) {
            candidate = format!("{base}-{suffix}");
            suffix += 1;
        }
        post.slug = candidate;
    }
}

fn generate_author(rng: &mut StdRng) -> Author {
    let id = uuid_from(rng);
    let first = pick(rng, FIRST_NAMES);
    let last = pick(rng, LAST_NAMES);
    let handle = slug::slugify(format!("{first}{last}"));

    let social = SOCIAL_PLATFORMS
        .iter()
        .map(|platform| {
            let handle = rng.gen_bool(0.75).then(|| handle.clone());
            (platform.to_string(), handle)
        })
        .collect::<BTreeMap<_, _>>();

    Author {
        id,
        name: format!("{first} {last}"),
        bio: paragraph(rng),
        avatar: format!("https://i.pravatar.cc/300?u={handle}"),
        email: format!("{handle}@example.com"),
        social,
    }
}

fn uuid_from(rng: &mut StdRng) -> Uuid {
    let bytes: [u8; 16] = rng.r#gen();
    uuid::Builder::from_random_bytes(bytes).into_uuid()
}

fn pick<'a>(rng: &mut StdRng, items: &[&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn title(rng: &mut StdRng) -> String {
    let words = [
        pick(rng, TITLE_ADJECTIVES),
        pick(rng, TITLE_NOUNS),
        pick(rng, TITLE_LINKS),
        pick(rng, TITLE_ADJECTIVES),
        pick(rng, TITLE_NOUNS),
    ];
    let mut title = words.join(" ");
    if let Some(first) = words.first() {
        title.replace_range(..first.len(), &capitalize(first));
    }
    title
}

fn sentence(rng: &mut StdRng, min_words: usize, max_words: usize) -> String {
    let count = rng.gen_range(min_words..=max_words);
    let words: Vec<&str> = (0..count).map(|_| pick(rng, LOREM)).collect();
    format!("{}.", capitalize(&words.join(" ")))
}

fn paragraph(rng: &mut StdRng) -> String {
    let count = rng.gen_range(3..=6);
    (0..count)
        .map(|_| sentence(rng, 6, 14))
        .collect::<Vec<_>>()
        .join(" ")
}

fn heading(rng: &mut StdRng) -> String {
    format!("{} {}", capitalize(pick(rng, TITLE_ADJECTIVES)), pick(rng, TITLE_NOUNS))
}

/// Markdown body: paragraphs separated by blank lines, with a `## ` heading
/// in front of every third paragraph after the first.
fn body(rng: &mut StdRng) -> String {
    let count = rng.gen_range(3..=7);
    let mut blocks = Vec::with_capacity(count + count / 3);

    for i in 0..count {
        if i > 0 && i % 3 == 0 {
            blocks.push(format!("## {}", heading(rng)));
        }
        blocks.push(paragraph(rng));
    }

    blocks.join("\n\n")
}

fn tags(rng: &mut StdRng) -> Vec<String> {
    let count = rng.gen_range(1..=3);
    TAGS.choose_multiple(rng, count)
        .map(|t| t.to_string())
        .collect()
}

fn cover_image(slug: &str) -> String {
    format!("https://picsum.photos/seed/{slug}/1200/630")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_with_slug(slug: &str) -> Post {
        let mut post = generate_content(&MockConfig::default().with_post_count(1))
            .posts
            .remove(0);
        post.slug = slug.to_string();
        post
    }

    #[test]
    fn test_same_seed_same_content() {
        let config = MockConfig::default();
        let a = generate_content(&config);
        let b = generate_content(&config);

        assert_eq!(
            serde_json::to_string(&a.author).unwrap(),
            serde_json::to_string(&b.author).unwrap()
        );
        assert_eq!(
            serde_json::to_string(&a.posts).unwrap(),
            serde_json::to_string(&b.posts).unwrap()
        );
    }

    #[test]
    fn test_different_seed_different_content() {
        let a = generate_content(&MockConfig::default());
        let b = generate_content(&MockConfig::default().with_seed(7));
        assert_ne!(a.author.id, b.author.id);
    }

    #[test]
    fn test_posts_reference_the_author() {
        let content = generate_content(&MockConfig::default());
        assert_eq!(content.posts.len(), 25);
        assert!(content.posts.iter().all(|p| p.author_id == content.author.id));
    }

    #[test]
    fn test_published_within_span() {
        let config = MockConfig::default();
        let earliest = config.anchor - Duration::days(i64::from(config.span_days));
        for post in generate_content(&config).posts {
            assert!(post.published_at <= config.anchor);
            assert!(post.published_at > earliest);
        }
    }

    #[test]
    fn test_oversized_span_saturates_at_earliest_instant() {
        let config = MockConfig {
            span_days: u32::MAX,
            ..MockConfig::default()
        };
        let content = generate_content(&config);

        assert_eq!(content.posts.len(), 25);
        assert!(content.posts.iter().all(|p| p.published_at <= config.anchor));
        assert!(
            content
                .posts
                .iter()
                .any(|p| p.published_at == DateTime::<Utc>::MIN_UTC)
        );
    }

    #[test]
    fn test_slugs_are_url_safe_and_unique() {
        let content = generate_content(&MockConfig::default().with_post_count(200));
        let mut seen = HashSet::new();
        for post in &content.posts {
            assert!(
                post.slug
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            );
            assert!(seen.insert(post.slug.clone()), "duplicate slug {}", post.slug);
            assert!(post.cover_image.contains(&post.slug));
        }
    }

    #[test]
    fn test_ensure_unique_slugs_suffixes_repeats() {
        let mut posts = vec![
            post_with_slug("hello"),
            post_with_slug("hello"),
            post_with_slug("hello"),
            post_with_slug("other"),
        ];
        ensure_unique_slugs(&mut posts);

        let slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["hello", "hello-2", "hello-3", "other"]);
    }

    #[test]
    fn test_ensure_unique_slugs_handles_existing_suffix() {
        let mut posts = vec![
            post_with_slug("hello-2"),
            post_with_slug("hello"),
            post_with_slug("hello"),
        ];
        ensure_unique_slugs(&mut posts);

        let slugs: HashSet<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs.len(), 3);
    }

    #[test]
    fn test_subheadings_before_every_third_paragraph() {
        let content = generate_content(&MockConfig::default().with_post_count(40));
        for post in &content.posts {
            let blocks: Vec<&str> = post.content.split("\n\n").collect();
            assert!(!blocks[0].starts_with("## "));

            let mut paragraph_index = 0;
            let mut previous_was_heading = false;
            for block in blocks {
                if block.starts_with("## ") {
                    assert!(paragraph_index > 0 && paragraph_index % 3 == 0);
                    previous_was_heading = true;
                } else {
                    if paragraph_index > 0 && paragraph_index % 3 == 0 {
                        assert!(previous_was_heading);
                    }
                    previous_was_heading = false;
                    paragraph_index += 1;
                }
            }
        }
    }

    #[test]
    fn test_tags_are_distinct() {
        for post in generate_content(&MockConfig::default()).posts {
            let unique: HashSet<&String> = post.tags.iter().collect();
            assert_eq!(unique.len(), post.tags.len());
            assert!((1..=3).contains(&post.tags.len()));
        }
    }

    #[test]
    fn test_page_copy_ignores_post_volume() {
        let small = generate_pages(&MockConfig::default().with_post_count(3));
        let large = generate_pages(&MockConfig::default().with_post_count(300));
        assert_eq!(small, large);
        assert_eq!(small.len(), 6);
    }

    #[test]
    fn test_unknown_locale_is_skipped() {
        let config = MockConfig {
            locales: vec!["en".to_string(), "xx".to_string()],
            ..MockConfig::default()
        };
        let pages = generate_pages(&config);
        assert_eq!(pages.len(), 3);
        assert!(pages.iter().all(|p| p.locale == "en"));
    }
}
