use yew::prelude::*;
use yew_router::prelude::*;
use log::{error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod modal;
mod components {
    pub mod fallback_image;
    pub mod lightbox;
    pub mod project_card;
    pub mod project_modal;
    pub mod projects_grid;
    pub mod roi;
}
mod pages {
    pub mod home;
    pub mod not_found;
    pub mod projects;
}

use pages::{
    home::Home,
    not_found::NotFound,
    projects::Projects,
};


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/projects")]
    Projects,
    #[at("/projects/:id")]
    ProjectDetail { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    fn nav_items() -> [(Route, &'static str); 2] {
        [(Route::Home, "Home"), (Route::Projects, "Projects")]
    }

    /// The nav entry a route belongs to. Deep links count as Projects.
    fn section(&self) -> Route {
        match self {
            Route::ProjectDetail { .. } => Route::Projects,
            other => other.clone(),
        }
    }
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Projects => {
            info!("Rendering Projects page");
            html! { <Projects key="projects" /> }
        },
        Route::ProjectDetail { id } => {
            info!("Rendering Projects page for {}", id);
            // Keyed per route: navigating remounts the grid and drops modal state.
            let key = format!("projects/{}", id);
            html! { <Projects key={key} open={Some(AttrValue::from(id))} /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let current = use_route::<Route>();
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let destructor: Box<dyn FnOnce()> = match web_sys::window() {
                Some(window) => {
                    let scroll_window = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let scroll_top = scroll_window.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(scroll_top > 24.0);
                    }) as Box<dyn FnMut()>);

                    if let Err(err) = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                        log::warn!("scroll listener unavailable: {:?}", err);
                    }

                    Box::new(move || {
                        if let Err(err) = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                            log::warn!("failed to remove scroll listener: {:?}", err);
                        }
                    })
                }
                None => Box::new(|| ()),
            };
            destructor
        }, ());
    }

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <nav class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Portfolio"}
                </Link<Route>>
                <div class="nav-right">
                    { for Route::nav_items().into_iter().map(|(route, label)| {
                        let active = current.as_ref().map(Route::section) == Some(route.clone());
                        html! {
                            <Link<Route> to={route} classes={classes!("nav-link", active.then(|| "active"))}>
                                {label}
                            </Link<Route>>
                        }
                    }) }
                </div>
            </nav>
        </header>
    }
}


#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <p>{"© 2025 Angus. Built with Rust and Yew."}</p>
        </footer>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
            <style>
                {r#"
                * {
                    margin: 0;
                    padding: 0;
                    box-sizing: border-box;
                }
                body {
                    background: #1a1a1a;
                    color: #ffffff;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .gradient-text {
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 40;
                    transition: background 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(26, 26, 26, 0.85);
                    backdrop-filter: blur(10px);
                    border-bottom: 1px solid rgba(30, 144, 255, 0.1);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-size: 1.1rem;
                    font-weight: 600;
                    color: #fff;
                    text-decoration: none;
                }
                .nav-logo:hover {
                    color: #7EB2FF;
                }
                .nav-right {
                    display: flex;
                    gap: 2rem;
                }
                .nav-link {
                    position: relative;
                    font-size: 0.9rem;
                    font-weight: 500;
                    color: #999;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }
                .nav-link:hover,
                .nav-link.active {
                    color: #fff;
                }
                .nav-link.active::after {
                    content: '';
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: -4px;
                    height: 1px;
                    background: #7EB2FF;
                }
                .site-footer {
                    text-align: center;
                    padding: 3rem 1.5rem;
                    color: #666;
                    font-size: 0.85rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                }
                @keyframes fadeUp {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    match content::ContentStore::embedded() {
        Ok(store) => info!("Loaded {} case studies", store.len()),
        Err(err) => error!("Embedded content is invalid: {}", err),
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deep_links_carry_the_project_id() {
        assert_eq!(
            Route::recognize("/projects/recipe-ai"),
            Some(Route::ProjectDetail { id: "recipe-ai".to_string() })
        );
        assert_eq!(
            Route::ProjectDetail { id: "prompt-architect".to_string() }.to_path(),
            "/projects/prompt-architect"
        );
    }

    #[test]
    fn deep_links_highlight_the_projects_nav_entry() {
        let detail = Route::ProjectDetail { id: "recipe-ai".to_string() };
        assert_eq!(detail.section(), Route::Projects);
        assert_eq!(Route::Home.section(), Route::Home);
    }
}
