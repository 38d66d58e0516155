// src/presentation/html/blog.rs
use crate::application::dto::{BlogListingDto, PostDto};
use crate::presentation::html::{
    dates::format_display_date,
    layout::{SITE_NAME, call_to_action, document, site_footer, site_header},
    styles::{category_badge_class, featured_accent_class, palette_class},
};
use maud::{Markup, Render, html};

/// At most this many featured posts are promoted above the grid.
pub const MAX_FEATURED: usize = 2;

/// The blog listing page: header, hero, category strip, featured posts,
/// all-posts grid, call to action and footer.
#[derive(Debug, Clone, Copy)]
pub struct BlogListingPage<'a> {
    listing: &'a BlogListingDto,
    base_path: &'a str,
}

impl<'a> BlogListingPage<'a> {
    /// `base_path` is both the page's own URL and the prefix of post links.
    pub fn new(listing: &'a BlogListingDto, base_path: &'a str) -> Self {
        Self { listing, base_path }
    }

    fn post_href(&self, post: &PostDto) -> String {
        format!("{}/{}", self.base_path, post.slug)
    }

    fn hero(&self) -> Markup {
        html! {
            section id="hero" class="bg-gradient-to-br from-blue-50 via-white to-indigo-50 py-20" {
                div class="mx-auto max-w-4xl px-4 text-center sm:px-6 lg:px-8" {
                    h1 class="text-4xl font-extrabold tracking-tight sm:text-5xl" {
                        (SITE_NAME) " Blog"
                    }
                    p class="mt-6 text-xl text-gray-600" {
                        "Insights on compliance, privacy and secure document generation."
                    }
                }
            }
        }
    }

    fn category_strip(&self) -> Markup {
        html! {
            section id="categories" class="border-b border-gray-200 bg-white py-6" {
                div class="mx-auto flex max-w-7xl flex-wrap gap-3 px-4 sm:px-6 lg:px-8" {
                    @for (index, category) in self.listing.categories.iter().enumerate() {
                        button type="button"
                            class={ "rounded-full px-4 py-2 text-sm font-medium transition-colors " (palette_class(index)) }
                            data-category=(category) {
                            (category)
                        }
                    }
                }
            }
        }
    }

    fn featured_section(&self) -> Markup {
        let featured = &self.listing.featured;
        html! {
            @if !featured.is_empty() {
                section id="featured" class="py-16" {
                    div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8" {
                        h2 class="mb-8 text-3xl font-bold" { "Featured Articles" }
                        div class="grid gap-8 md:grid-cols-2" {
                            @for (index, post) in featured.iter().take(MAX_FEATURED).enumerate() {
                                (self.featured_card(index, post))
                            }
                        }
                    }
                }
            }
        }
    }

    fn featured_card(&self, index: usize, post: &PostDto) -> Markup {
        html! {
            article class="featured-card overflow-hidden rounded-2xl bg-white shadow-lg" data-slug=(post.slug) {
                div class={ "h-3 bg-gradient-to-r " (featured_accent_class(index)) } {}
                div class="p-8" {
                    (category_badge(&post.category))
                    h3 class="mt-4 text-2xl font-bold" {
                        a href=(self.post_href(post)) class="hover:text-blue-700" { (post.title) }
                    }
                    p class="mt-3 text-gray-600" { (post.excerpt) }
                    (post_meta(post))
                }
            }
        }
    }

    fn all_posts_grid(&self) -> Markup {
        html! {
            section id="all-posts" class="bg-white py-16" {
                div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8" {
                    h2 class="mb-8 text-3xl font-bold" { "All Articles" }
                    div class="grid gap-8 md:grid-cols-2 lg:grid-cols-3" {
                        @for post in &self.listing.posts {
                            article class="post-card flex flex-col rounded-xl border border-gray-200 p-6 hover:shadow-md" data-slug=(post.slug) {
                                (category_badge(&post.category))
                                h3 class="mt-4 text-xl font-semibold" {
                                    a href=(self.post_href(post)) class="hover:text-blue-700" { (post.title) }
                                }
                                p class="mt-2 flex-1 text-gray-600" { (post.excerpt) }
                                (post_meta(post))
                            }
                        }
                    }
                }
            }
        }
    }
}

impl Render for BlogListingPage<'_> {
    fn render(&self) -> Markup {
        let title = format!("Blog | {SITE_NAME}");
        let body = html! {
            (site_header(self.base_path))
            main {
                (self.hero())
                (self.category_strip())
                (self.featured_section())
                (self.all_posts_grid())
                (call_to_action())
            }
            (site_footer(self.base_path))
        };
        document(
            &title,
            "Guides and news on compliance, privacy and secure document generation.",
            body,
        )
    }
}

fn category_badge(category: &str) -> Markup {
    html! {
        span class={ "category-badge inline-block rounded-full px-3 py-1 text-xs font-semibold " (category_badge_class(category)) } {
            (category)
        }
    }
}

fn post_meta(post: &PostDto) -> Markup {
    html! {
        div class="mt-6 flex items-center justify-between text-sm text-gray-500" {
            span class="font-medium text-gray-700" { (post.author) }
            div class="flex items-center gap-2" {
                time datetime=(post.published_at) { (format_display_date(post.published_on)) }
                span { "·" }
                span { (post.read_time) }
            }
        }
    }
}
