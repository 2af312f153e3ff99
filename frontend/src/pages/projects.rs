use yew::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::components::projects_grid::ProjectsGrid;

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    /// Id of a case study to open immediately.
    #[prop_or_default]
    pub open: Option<AttrValue>,
}

#[function_component(Projects)]
pub fn projects(props: &ProjectsProps) -> Html {
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
        <div class="projects-page">
            <section class="projects-intro">
                <div class="projects-intro-avatar">
                    <FallbackImage src="/cartoonpic.png" alt="Angus headshot" />
                </div>
                <div class="projects-intro-text">
                    <h1><span class="gradient-text">{"AI Agents Showcase"}</span></h1>
                    <p>
                        <strong>{"Hi, I'm Angus. Welcome to my portfolio."}</strong>
                    </p>
                    <p>
                        {"I specialize in turning the promise of AI into practical, reliable business tools. Below, you'll find a collection of agents I've engineered to solve real-world problems, tackling everything from prompt engineering and RAG solutions to complex workflow automation."}
                    </p>
                </div>
            </section>
            <ProjectsGrid show_title={false} open_on_mount={props.open.clone()} />
            <style>
                {r#"
                .projects-page {
                    padding-top: 6rem;
                    min-height: 100vh;
                }
                .projects-intro {
                    display: flex;
                    align-items: flex-start;
                    gap: 2rem;
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 4rem 1.5rem 0;
                    animation: fadeUp 0.5s ease-out both;
                }
                .projects-intro-avatar img {
                    width: 14rem;
                    height: 14rem;
                    border-radius: 50%;
                    object-fit: cover;
                    border: 4px solid rgba(30, 144, 255, 0.2);
                }
                .projects-intro-text h1 {
                    font-size: 3.75rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }
                .projects-intro-text p {
                    font-size: 1.25rem;
                    color: #999;
                    line-height: 1.7;
                    margin-bottom: 1.25rem;
                }
                .projects-intro-text strong {
                    color: #fff;
                }
                @media (max-width: 768px) {
                    .projects-intro {
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                    }
                    .projects-intro-text h1 {
                        font-size: 2.75rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
