use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::blog::{self, BlogPost, ALL_CATEGORIES, CATEGORIES};
use crate::fetch::use_fetch;
use crate::Route;

#[derive(Properties, PartialEq)]
struct BlogCardProps {
    post: BlogPost,
}

#[function_component(BlogCard)]
fn blog_card(props: &BlogCardProps) -> Html {
    let post = &props.post;
    html! {
        <div class="blog-post-preview">
            <Link<Route> to={Route::BlogDetail { id: post.route_id() }}>
                if let Some(src) = &post.featured_image {
                    <img src={src.clone()} alt={post.title.clone()} loading="lazy" class="blog-preview-image" />
                }
                <span class="blog-category">{&post.category}</span>
                <h2>{&post.title}</h2>
                <p>{&post.excerpt}</p>
                <div class="blog-meta">
                    <span class="blog-avatar">{post.author_initial()}</span>
                    <span>{&post.author}</span>
                    <span>{post.read_time_label()}</span>
                    if let Some(date) = post.display_date() {
                        <span class="blog-date">{date}</span>
                    }
                </div>
            </Link<Route>>
        </div>
    }
}

#[function_component(Blogs)]
pub fn blogs() -> Html {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let state = use_fetch((), api::blog_posts);
    let query = use_state(String::new);
    let category = use_state(|| ALL_CATEGORIES.to_string());

    let posts = use_memo(
        |records| {
            let mut posts: Vec<BlogPost> = records
                .iter()
                .flatten()
                .cloned()
                .map(BlogPost::from_record)
                .collect();
            if posts.is_empty() {
                posts.push(blog::demo_post());
            }
            blog::sort_newest_first(&mut posts);
            posts
        },
        state.data.clone(),
    );
    let shown = blog::filter_posts(&posts, &query, &category);

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    html! {
        <div class="blog-list-page">
            <section class="blog-list-hero">
                <h1>{"Blog"}</h1>
                <p>{"Insights, guides, and updates on building and automating without code"}</p>
                <input
                    class="blog-search"
                    type="search"
                    placeholder="Search articles..."
                    value={(*query).clone()}
                    oninput={on_search}
                />
                <div class="blog-categories">
                    { for CATEGORIES.iter().map(|name| {
                        let category = category.clone();
                        let selected = *category == *name;
                        let onclick = {
                            let category = category.clone();
                            let name = name.to_string();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                category.set(name.clone());
                            })
                        };
                        html! {
                            <button class={classes!("blog-category-button", selected.then(|| "selected"))} {onclick}>
                                {*name}
                            </button>
                        }
                    }) }
                </div>
            </section>
            <section class="blog-list-section">
                if state.loading && state.data.is_none() {
                    <p class="blog-status">{"Loading posts..."}</p>
                }
                if let Some(error) = &state.error {
                    <p class="blog-status error">{format!("Couldn't refresh posts: {}", error)}</p>
                }
                { for shown.into_iter().map(|post| html! { <BlogCard key={post.id.clone()} post={post.clone()} /> }) }
            </section>
            <style>
                {r#"
                .blog-list-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    background: #fafafa;
                }
                .blog-list-hero {
                    text-align: center;
                    padding: 6rem 2rem 3rem;
                }
                .blog-list-hero h1 {
                    font-size: 3.5rem;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(45deg, #0b1b3f, #1E90FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .blog-list-hero p {
                    font-size: 1.2rem;
                    color: #777;
                    max-width: 600px;
                    margin: 0 auto 2rem;
                }
                .blog-search {
                    width: min(560px, 90%);
                    padding: 1rem 1.25rem;
                    border-radius: 12px;
                    border: 1px solid #ddd;
                    font-size: 1rem;
                }
                .blog-categories {
                    display: flex;
                    gap: 0.5rem;
                    justify-content: center;
                    flex-wrap: wrap;
                    margin-top: 1.5rem;
                }
                .blog-category-button {
                    padding: 0.5rem 1.2rem;
                    border-radius: 999px;
                    border: 1px solid #ddd;
                    background: #fff;
                    color: #555;
                    cursor: pointer;
                }
                .blog-category-button.selected {
                    background: #1E90FF;
                    border-color: #1E90FF;
                    color: #fff;
                }
                .blog-list-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 2rem;
                }
                .blog-status {
                    text-align: center;
                    color: #777;
                }
                .blog-status.error {
                    color: #c0392b;
                }
                .blog-post-preview {
                    background: #fff;
                    border: 1px solid #e5e5e5;
                    border-radius: 24px;
                    margin-bottom: 2rem;
                    overflow: hidden;
                    transition: all 0.3s ease;
                }
                .blog-post-preview:hover {
                    border-color: rgba(30, 144, 255, 0.4);
                    transform: translateY(-5px);
                }
                .blog-post-preview a {
                    text-decoration: none;
                    color: inherit;
                    display: block;
                    padding-bottom: 1.5rem;
                }
                .blog-preview-image {
                    width: 100%;
                    height: 260px;
                    object-fit: cover;
                }
                .blog-category {
                    display: inline-block;
                    margin: 1.5rem 1.5rem 0;
                    color: #1E90FF;
                    font-size: 0.85rem;
                }
                .blog-post-preview h2 {
                    margin: 0.5rem 1.5rem;
                    font-size: 1.6rem;
                }
                .blog-post-preview p {
                    margin: 0 1.5rem;
                    color: #666;
                    line-height: 1.6;
                }
                .blog-meta {
                    display: flex;
                    gap: 1rem;
                    align-items: center;
                    margin: 1rem 1.5rem 0;
                    font-size: 0.9rem;
                    color: #888;
                }
                .blog-avatar {
                    width: 28px;
                    height: 28px;
                    border-radius: 50%;
                    background: #1E90FF;
                    color: #fff;
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                }
                "#}
            </style>
        </div>
    }
}
