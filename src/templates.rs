use axum::http::StatusCode;
use maud::{DOCTYPE, Markup, html};

use crate::{
    entities::movie,
    models::{SearchCandidate, UpdateForm},
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

const INPUT_CLASS: &str = "mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500";
const BUTTON_CLASS: &str =
    "w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700";

pub fn index_page(movies: &[movie::Model]) -> String {
    page(
        "My Top Movies",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-4xl mx-auto px-6 py-10" {
                    div class="flex items-start justify-between gap-6" {
                        div {
                            h1 class="text-3xl font-bold text-gray-900" { "My Top Movies" }
                            p class="mt-2 text-gray-600" { "These are my all-time favourite movies." }
                        }
                        a class="rounded-md bg-blue-600 px-4 py-2 text-sm font-semibold text-white hover:bg-blue-700" href="/add" { "Add Movie" }
                    }

                    @if movies.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "No movies yet." }
                        }
                    } @else {
                        div class="mt-10 space-y-4" {
                            @for m in movies {
                                (movie_card(m))
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn add_page(error: Option<&str>) -> String {
    page(
        "Add Movie",
        card(html! {
            h1 class="text-2xl font-bold text-gray-900" { "Add a Movie" }
            (error_note(error))
            form class="mt-6 space-y-6" method="post" action="/add" {
                div {
                    label class="block text-sm font-medium text-gray-700" for="movie_title" { "Movie Title" }
                    input class=(INPUT_CLASS) name="movie_title" id="movie_title" required;
                }
                button class=(BUTTON_CLASS) type="submit" { "Add Movie" }
            }
        }),
    )
}

pub fn select_page(query: &str, candidates: &[SearchCandidate]) -> String {
    page(
        "Select Movie",
        card(html! {
            h1 class="text-2xl font-bold text-gray-900" { "Select Movie" }
            p class="mt-2 text-gray-600" { "Results for \"" (query) "\"" }
            @if candidates.is_empty() {
                p class="mt-6 text-gray-600" { "Nothing matched that title." }
                a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/add" { "Try again" }
            } @else {
                ul class="mt-6 divide-y divide-gray-200" {
                    @for c in candidates {
                        li class="py-3" {
                            a class="text-blue-600 hover:text-blue-800" href=(format!("/add_movie?id={}", c.id)) {
                                (c.display_title())
                                @if let Some(date) = c.release_date.as_deref().filter(|d| !d.is_empty()) {
                                    span class="ml-2 text-gray-500" { "- " (date) }
                                }
                            }
                            @if let Some(original) = c.original_title.as_deref().filter(|o| *o != c.display_title()) {
                                p class="text-xs text-gray-500" { (original) }
                            }
                            @if let Some(overview) = c.overview.as_deref().filter(|o| !o.is_empty()) {
                                p class="mt-1 text-sm text-gray-600 line-clamp-2" { (overview) }
                            }
                        }
                    }
                }
            }
        }),
    )
}

pub fn edit_page(movie: &movie::Model, form: &UpdateForm, error: Option<&str>) -> String {
    page(
        "Edit Movie",
        card(html! {
            h1 class="text-2xl font-bold text-gray-900" { (movie.title) }
            p class="mt-2 text-gray-600" { "Edit Movie Rating" }
            (error_note(error))
            form class="mt-6 space-y-6" method="post" action=(format!("/update?id={}", movie.id)) {
                div {
                    label class="block text-sm font-medium text-gray-700" for="rating" { "Your Rating Out of 10 e.g. 7.5" }
                    input class=(INPUT_CLASS) name="rating" id="rating" value=(form.rating) required;
                }
                div {
                    label class="block text-sm font-medium text-gray-700" for="review" { "Your Review" }
                    input class=(INPUT_CLASS) name="review" id="review" value=(form.review) required;
                }
                button class=(BUTTON_CLASS) type="submit" { "Done" }
            }
        }),
    )
}

pub fn error_page(status: StatusCode, message: String) -> String {
    let heading = status.canonical_reason().unwrap_or("Error");
    page(
        heading,
        card(html! {
            h1 class="text-2xl font-bold text-gray-900" { (heading) }
            p class="mt-4 text-gray-700" { (message) }
            a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
        }),
    )
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body { (body) }
        }
    }
    .into_string()
}

fn card(inner: Markup) -> Markup {
    html! {
        div class="min-h-screen bg-gray-50 flex items-center justify-center" {
            div class="max-w-xl w-full px-6" {
                div class="bg-white shadow rounded-lg p-8" { (inner) }
            }
        }
    }
}

fn error_note(error: Option<&str>) -> Markup {
    html! {
        @if let Some(error) = error {
            p class="mt-4 rounded-md bg-red-50 px-3 py-2 text-sm text-red-700" { (error) }
        }
    }
}

fn movie_card(m: &movie::Model) -> Markup {
    html! {
        div class="bg-white shadow rounded-lg p-6 flex gap-6" {
            img class="w-24 rounded" src=(m.img_url) alt=(m.title);
            div class="flex-1" {
                div class="flex items-start justify-between gap-4" {
                    h2 class="text-xl font-semibold text-gray-900" {
                        @if let Some(ranking) = m.ranking {
                            span class="mr-2 text-gray-400" { "#" (ranking) }
                        }
                        (m.title)
                        span class="ml-2 font-normal text-gray-500" { "(" (m.year) ")" }
                    }
                    @if let Some(rating) = m.rating {
                        span class="text-lg font-semibold text-yellow-600" { (format!("{rating:.1}")) }
                    }
                }
                @if let Some(review) = &m.review {
                    p class="mt-1 italic text-gray-700" { "\"" (review) "\"" }
                }
                p class="mt-2 text-sm text-gray-600" { (m.description) }
                div class="mt-4 flex gap-4 text-sm" {
                    a class="text-blue-600 hover:text-blue-800" href=(format!("/update?id={}", m.id)) { "Update" }
                    a class="text-red-600 hover:text-red-800" href=(format!("/delete?id={}", m.id)) { "Delete" }
                }
            }
        }
    }
}
