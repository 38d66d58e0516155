// src/presentation/html/layout.rs
use maud::{DOCTYPE, Markup, html};

pub const SITE_NAME: &str = "SafeDocGen";

pub fn document(title: &str, description: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="description" content=(description);
                title { (title) }
                script src="https://cdn.tailwindcss.com" {}
            }
            body class="min-h-screen bg-gray-50 text-gray-900 antialiased" {
                (body)
            }
        }
    }
}

pub fn site_header(blog_path: &str) -> Markup {
    html! {
        header class="sticky top-0 z-50 border-b border-gray-200 bg-white/90 backdrop-blur" {
            nav class="mx-auto flex max-w-7xl items-center justify-between px-4 py-4 sm:px-6 lg:px-8" {
                a href="/" class="text-xl font-bold text-blue-700" { (SITE_NAME) }
                div class="hidden items-center gap-8 md:flex" {
                    a href="/#features" class="text-gray-600 hover:text-gray-900" { "Features" }
                    a href="/#pricing" class="text-gray-600 hover:text-gray-900" { "Pricing" }
                    a href=(blog_path) class="font-medium text-blue-700" aria-current="page" { "Blog" }
                }
                a href="/#pricing" class="rounded-lg bg-blue-600 px-4 py-2 text-sm font-semibold text-white hover:bg-blue-700" {
                    "Get Started"
                }
            }
        }
    }
}

pub fn call_to_action() -> Markup {
    html! {
        section id="cta" class="bg-gradient-to-r from-blue-600 to-indigo-700 py-16" {
            div class="mx-auto max-w-4xl px-4 text-center sm:px-6 lg:px-8" {
                h2 class="text-3xl font-bold text-white" { "Ready to generate compliant documents?" }
                p class="mt-4 text-lg text-blue-100" {
                    "Create privacy policies, terms of service and GDPR notices in minutes."
                }
                div class="mt-8 flex justify-center gap-4" {
                    a href="/#pricing" class="rounded-lg bg-white px-6 py-3 font-semibold text-blue-700 hover:bg-blue-50" {
                        "Start Free Trial"
                    }
                    a href="/#features" class="rounded-lg border border-white px-6 py-3 font-semibold text-white hover:bg-white/10" {
                        "See Features"
                    }
                }
            }
        }
    }
}

pub fn site_footer(blog_path: &str) -> Markup {
    html! {
        footer class="bg-gray-900 py-12 text-gray-400" {
            div class="mx-auto grid max-w-7xl gap-8 px-4 sm:px-6 md:grid-cols-3 lg:px-8" {
                div {
                    p class="text-lg font-bold text-white" { (SITE_NAME) }
                    p class="mt-2 text-sm" { "Compliant documents, generated safely." }
                }
                div {
                    p class="font-semibold text-white" { "Product" }
                    ul class="mt-2 space-y-1 text-sm" {
                        li { a href="/#features" class="hover:text-white" { "Features" } }
                        li { a href="/#pricing" class="hover:text-white" { "Pricing" } }
                        li { a href=(blog_path) class="hover:text-white" { "Blog" } }
                    }
                }
                div {
                    p class="font-semibold text-white" { "Legal" }
                    ul class="mt-2 space-y-1 text-sm" {
                        li { a href="/privacy" class="hover:text-white" { "Privacy Policy" } }
                        li { a href="/terms" class="hover:text-white" { "Terms of Service" } }
                    }
                }
            }
            p class="mt-8 text-center text-xs" { "© SafeDocGen. All rights reserved." }
        }
    }
}
