use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="not-found-page">
            <h1>{"404"}</h1>
            <p>{"Oops! Page not found"}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Return to Home"}
            </Link<Route>>
            <style>
                {r#"
                .not-found-page {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                }
                .not-found-page h1 {
                    font-size: 4rem;
                    font-weight: 700;
                }
                .not-found-page p {
                    color: #999;
                    font-size: 1.25rem;
                }
                .not-found-link {
                    color: #7EB2FF;
                    text-decoration: underline;
                }
                "#}
            </style>
        </div>
    }
}
