use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{self, ApiError};
use crate::blog::{self, BlogPost};
use crate::fetch::use_fetch;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct BlogDetailProps {
    pub id: String,
}

#[function_component(BlogDetail)]
pub fn blog_detail(props: &BlogDetailProps) -> Html {
    let id = props.id.clone();
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        props.id.clone(),
    );

    let state = use_fetch(props.id.clone(), move || async move {
        let post = blog::resolve_post(&id, api::blog_post, api::blog_posts).await;
        Ok::<BlogPost, ApiError>(post)
    });

    let page_title = state
        .data
        .as_ref()
        .map(|post| post.meta_title.clone().unwrap_or_else(|| post.title.clone()));
    use_effect_with_deps(
        move |title: &Option<String>| {
            if let (Some(title), Some(document)) =
                (title, web_sys::window().and_then(|w| w.document()))
            {
                document.set_title(&format!("{} - Floneo", title));
            }
            || ()
        },
        page_title,
    );

    let Some(post) = state.data.as_ref() else {
        return html! {
            <div class="blog-detail-page">
                <p class="blog-status">{"Loading article..."}</p>
            </div>
        };
    };

    html! {
        <div class="blog-detail-page">
            <Link<Route> to={Route::Blogs} classes="back-to-blogs">
                {"← All articles"}
            </Link<Route>>
            <article class="blog-article">
                <span class="blog-category">{&post.category}</span>
                <h1>{&post.title}</h1>
                <div class="blog-article-meta">
                    <span>{&post.author}</span>
                    if let Some(date) = post.display_date() {
                        <span>{date}</span>
                    }
                    <span>{post.read_time_label()}</span>
                    if post.view_count > 0 {
                        <span>{format!("{} views", post.view_count)}</span>
                    }
                </div>
                if let Some(src) = &post.featured_image {
                    <img class="blog-article-image" src={src.clone()} alt={post.title.clone()} />
                }
                if let Some(video) = &post.video_url {
                    <video class="blog-article-video" src={video.clone()} controls={true} />
                }
                { for post.paragraphs().into_iter().map(|paragraph| html! { <p>{paragraph}</p> }) }
                if !post.tags.is_empty() {
                    <div class="blog-tags">
                        { for post.tags.iter().map(|tag| html! { <span class="blog-tag">{format!("#{}", tag)}</span> }) }
                    </div>
                }
            </article>
            <style>
                {r#"
                .blog-detail-page {
                    padding: 120px 24px 80px;
                    min-height: 100vh;
                    background: #fafafa;
                }
                .back-to-blogs {
                    display: inline-block;
                    margin-bottom: 2rem;
                    color: #1E90FF;
                    text-decoration: none;
                }
                .blog-article {
                    max-width: 760px;
                    margin: 0 auto;
                    color: #222;
                    line-height: 1.8;
                    font-size: 1.1rem;
                }
                .blog-article h1 {
                    font-size: 2.8rem;
                    line-height: 1.2;
                    margin: 0.5rem 0 1.5rem;
                }
                .blog-article-meta {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                    color: #888;
                    font-size: 0.95rem;
                    padding-bottom: 2rem;
                    margin-bottom: 2rem;
                    border-bottom: 1px solid #e5e5e5;
                }
                .blog-article-image, .blog-article-video {
                    width: 100%;
                    border-radius: 16px;
                    margin-bottom: 2rem;
                }
                .blog-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-top: 3rem;
                    padding-top: 2rem;
                    border-top: 1px solid #e5e5e5;
                }
                .blog-tag {
                    padding: 0.3rem 0.8rem;
                    border-radius: 999px;
                    background: #eef5ff;
                    color: #1E90FF;
                    font-size: 0.85rem;
                }
                "#}
            </style>
        </div>
    }
}
