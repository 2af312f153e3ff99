use yew::prelude::*;

use crate::components::projects_grid::ProjectsGrid;

struct Stat {
    value: &'static str,
    label: &'static str,
}

const HERO_STATS: [Stat; 4] = [
    Stat { value: "78+", label: "Hours Saved Weekly" },
    Stat { value: "100%", label: "Answer Grounding" },
    Stat { value: "300", label: "Hours/Year in Error Reduction" },
    Stat { value: "$17K+", label: "Annual ROI Impact" },
];

#[function_component(Home)]
pub fn home() -> Html {
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
        <div class="home-page">
            <section class="hero">
                <div class="hero-grid-pattern"></div>
                <div class="hero-content">
                    <span class="hero-badge">{"Technical Architect • AI Agent Builder"}</span>
                    <h1>
                        {"Enterprise AI Solutions for "}
                        <span class="gradient-text">{"Life Sciences & SaaS"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Designing AI agent systems that transform enterprise workflows, turning weeks of manual work into minutes of automated intelligence."}
                    </p>
                    <a href="#projects" class="hero-explore">
                        <span>{"Explore Projects"}</span>
                        <i class="arrow">{"↓"}</i>
                    </a>
                </div>
                <div class="hero-stats">
                    { for HERO_STATS.iter().map(|stat| html! {
                        <div class="hero-stat">
                            <div class="hero-stat-value gradient-text">{stat.value}</div>
                            <div class="hero-stat-label">{stat.label}</div>
                        </div>
                    }) }
                </div>
            </section>
            <div id="projects">
                <ProjectsGrid show_title={true} />
            </div>
            <style>
                {r#"
                .home-page {
                    min-height: 100vh;
                }
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    padding: 8rem 1.5rem 4rem;
                    overflow: hidden;
                }
                .hero-grid-pattern {
                    position: absolute;
                    inset: 0;
                    background-image: radial-gradient(circle at 1px 1px, rgba(255, 255, 255, 0.08) 1px, transparent 0);
                    background-size: 48px 48px;
                    opacity: 0.4;
                    pointer-events: none;
                }
                .hero-content {
                    position: relative;
                    max-width: 900px;
                    text-align: center;
                }
                .hero-badge {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    font-size: 0.75rem;
                    font-weight: 500;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    color: #7EB2FF;
                    border: 1px solid rgba(30, 144, 255, 0.2);
                    border-radius: 999px;
                    background: rgba(30, 144, 255, 0.05);
                    margin-bottom: 1.5rem;
                    animation: fadeUp 0.6s ease-out 0.2s both;
                }
                .hero h1 {
                    font-size: 4.5rem;
                    font-weight: 700;
                    line-height: 1.1;
                    margin-bottom: 2rem;
                    animation: fadeUp 0.6s ease-out 0.3s both;
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #999;
                    max-width: 640px;
                    margin: 0 auto 3rem;
                    animation: fadeUp 0.6s ease-out 0.4s both;
                }
                .hero-explore {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #999;
                    text-decoration: none;
                    font-size: 0.9rem;
                    transition: color 0.3s ease;
                    animation: fadeUp 0.6s ease-out 0.5s both;
                }
                .hero-explore:hover {
                    color: #7EB2FF;
                }
                .hero-explore .arrow {
                    font-style: normal;
                    animation: bounce 1.5s infinite;
                }
                .hero-stats {
                    position: relative;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    max-width: 760px;
                    width: 100%;
                    margin-top: 6rem;
                    animation: fadeUp 0.6s ease-out 0.7s both;
                }
                .hero-stat {
                    text-align: center;
                }
                .hero-stat-value {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }
                .hero-stat-label {
                    font-size: 0.85rem;
                    color: #999;
                }
                @keyframes bounce {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(6px); }
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.75rem;
                    }
                    .hero-stats {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </div>
    }
}
