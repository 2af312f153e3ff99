use std::rc::Rc;

use log::{error, info, warn};
use yew::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::components::project_modal::ProjectModal;
use crate::content::{ContentStore, ProjectRecord};
use crate::modal::{use_body_scroll_lock, use_lightbox_keys, ModalAction, ModalState};

#[derive(Properties, PartialEq)]
pub struct ProjectsGridProps {
    #[prop_or(true)]
    pub show_title: bool,
    /// Case study to open as soon as the grid mounts (deep links).
    #[prop_or_default]
    pub open_on_mount: Option<AttrValue>,
}

#[function_component(ProjectsGrid)]
pub fn projects_grid(props: &ProjectsGridProps) -> Html {
    let modal = use_reducer(ModalState::default);

    use_lightbox_keys(modal.keys_active(), modal.dispatcher());
    use_body_scroll_lock(modal.is_open());

    {
        let modal = modal.clone();
        use_effect_with_deps(
            move |open_on_mount| {
                if let Some(id) = open_on_mount {
                    match ContentStore::embedded().ok().and_then(|store| store.by_id(id)) {
                        Some(project) => modal.dispatch(ModalAction::Open(project)),
                        None => warn!("no case study with id {}", id),
                    }
                }
                || ()
            },
            props.open_on_mount.clone(),
        );
    }

    let store = match ContentStore::embedded() {
        Ok(store) => store,
        Err(err) => {
            error!("project content unavailable: {}", err);
            return html! {
                <section class="projects-section">
                    <div class="projects-error">
                        {"Projects could not be loaded."}
                    </div>
                </section>
            };
        }
    };

    let on_select = {
        let modal = modal.clone();
        Callback::from(move |project: Rc<ProjectRecord>| {
            info!("Case study {} selected", project.id);
            modal.dispatch(ModalAction::Select(project));
        })
    };

    let on_action = {
        let modal = modal.clone();
        Callback::from(move |action: ModalAction| modal.dispatch(action))
    };

    // `inert` takes the listing out of the tab order and event dispatch
    // while the detail view covers it.
    let inert = modal.background_inert().then(|| AttrValue::from("true"));

    html! {
        <section class="projects-section">
            <div class="projects-container" aria-hidden={inert.clone()} inert={inert}>
                if props.show_title {
                    <div class="projects-heading">
                        <h2>{"Featured "}<span class="gradient-text">{"Projects"}</span></h2>
                        <p>{"A selection of AI solutions I've architected to solve real enterprise challenges."}</p>
                    </div>
                }
                if store.is_empty() {
                    <p class="projects-empty">{"No case studies published yet."}</p>
                }
                <div class="projects-grid">
                    { for store.all().iter().enumerate().map(|(position, project)| html! {
                        <ProjectCard
                            key={project.id.clone()}
                            project={project.clone()}
                            position={position}
                            on_select={on_select.clone()}
                        />
                    }) }
                </div>
            </div>

            if let Some(project) = modal.active_project() {
                <ProjectModal
                    project={project.clone()}
                    selected_screenshot={modal.selected_screenshot()}
                    on_action={on_action}
                />
            }

            <style>
                {r#"
                .projects-section {
                    padding: 6rem 0;
                }
                .projects-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .projects-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                    animation: fadeUp 0.5s ease-out both;
                }
                .projects-heading h2 {
                    font-size: 3rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .projects-heading p {
                    color: #999;
                    font-size: 1.1rem;
                    max-width: 640px;
                    margin: 0 auto;
                }
                .projects-error {
                    text-align: center;
                    color: #ff6b6b;
                    padding: 2rem;
                }
                .projects-empty {
                    text-align: center;
                    color: #999;
                }
                .projects-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                }
                .project-card {
                    position: relative;
                    background: rgba(26, 26, 26, 0.85);
                    backdrop-filter: blur(10px);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 16px;
                    padding: 2rem;
                    cursor: pointer;
                    overflow: hidden;
                    transition: all 0.3s ease;
                    animation: fadeUp 0.5s ease-out both;
                }
                .project-card:hover,
                .project-card:focus-visible {
                    border-color: rgba(30, 144, 255, 0.3);
                    transform: translateY(-4px);
                    outline: none;
                }
                .project-card-number {
                    position: absolute;
                    top: 2rem;
                    right: 2rem;
                    font-size: 3.75rem;
                    font-weight: 700;
                    color: rgba(255, 255, 255, 0.06);
                    user-select: none;
                }
                .project-card-body {
                    position: relative;
                    z-index: 1;
                }
                .project-card h3 {
                    font-size: 1.5rem;
                    margin: 1.5rem 0 0.75rem;
                    transition: color 0.3s ease;
                }
                .project-card:hover h3 {
                    color: #7EB2FF;
                }
                .project-card p {
                    color: #999;
                    font-size: 0.95rem;
                    line-height: 1.6;
                    margin-bottom: 1.5rem;
                }
                .project-card-cta {
                    color: #7EB2FF;
                    font-size: 0.9rem;
                    font-weight: 500;
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .project-card:hover .project-card-cta {
                    opacity: 1;
                }
                .project-card-cta .arrow {
                    margin-left: 0.4rem;
                }
                .project-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .project-tag {
                    padding: 0.25rem 0.75rem;
                    font-size: 0.75rem;
                    font-weight: 500;
                    color: #7EB2FF;
                    background: rgba(30, 144, 255, 0.1);
                    border-radius: 999px;
                }
                .project-modal-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(10, 10, 10, 0.8);
                    backdrop-filter: blur(4px);
                    z-index: 50;
                    animation: fadeIn 0.2s ease-out;
                }
                .project-modal:focus {
                    outline: none;
                }
                .project-modal {
                    position: fixed;
                    inset: 5rem;
                    z-index: 51;
                    animation: popIn 0.25s ease-out;
                }
                .project-modal-card {
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    background: rgba(26, 26, 26, 0.97);
                    border: 1px solid rgba(30, 144, 255, 0.15);
                    border-radius: 16px;
                    overflow: hidden;
                }
                .project-modal-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    padding: 2rem;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                }
                .project-modal-meta {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1rem;
                }
                .project-modal-number {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: rgba(126, 178, 255, 0.3);
                }
                .project-modal-header h2 {
                    font-size: 2.25rem;
                    margin-bottom: 0.5rem;
                }
                .project-modal-tagline {
                    color: #999;
                    font-size: 1.1rem;
                }
                .project-modal-link {
                    display: inline-block;
                    margin-top: 1rem;
                    color: #7EB2FF;
                    text-decoration: none;
                }
                .project-modal-close,
                .lightbox-close {
                    background: none;
                    border: none;
                    color: #999;
                    font-size: 1.5rem;
                    cursor: pointer;
                    padding: 0.5rem;
                    border-radius: 8px;
                }
                .project-modal-close:hover {
                    background: rgba(255, 255, 255, 0.06);
                }
                .project-modal-content {
                    flex: 1;
                    overflow-y: auto;
                    padding: 2rem;
                }
                .case-section {
                    max-width: 760px;
                    margin: 0 auto 2.5rem;
                }
                .case-section h3 {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-size: 1.25rem;
                    margin-bottom: 1rem;
                }
                .case-section p,
                .case-section li {
                    color: #bbb;
                    line-height: 1.7;
                    padding-left: 2.5rem;
                }
                .case-section ul {
                    list-style: none;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .case-section li::before {
                    content: '•';
                    color: #7EB2FF;
                    margin-right: 0.75rem;
                }
                .impact-callout {
                    font-size: 1.1rem;
                    color: #fff !important;
                    background: linear-gradient(90deg, rgba(34, 197, 94, 0.12), transparent);
                    border-left: 2px solid #22c55e;
                    border-radius: 8px;
                    padding: 1rem 1rem 1rem 1.25rem !important;
                    margin-left: 2.5rem;
                }
                .gallery-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
                    gap: 1rem;
                    padding-left: 2.5rem;
                }
                .gallery-thumb {
                    background: none;
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 10px;
                    padding: 0;
                    overflow: hidden;
                    cursor: zoom-in;
                    aspect-ratio: 16 / 10;
                }
                .gallery-thumb img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.3s ease;
                }
                .gallery-thumb:hover img {
                    transform: scale(1.04);
                }
                .roi-panel {
                    max-width: 760px;
                    margin: 0 auto 2rem;
                    background: rgba(34, 197, 94, 0.06);
                    border: 1px solid rgba(34, 197, 94, 0.25);
                    border-radius: 16px;
                    padding: 2rem;
                }
                .roi-panel h3 {
                    font-size: 1.15rem;
                    margin-bottom: 1.25rem;
                }
                .roi-metrics {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                    margin-bottom: 1rem;
                }
                .roi-metric {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .roi-icon {
                    font-size: 1.4rem;
                    padding: 0.6rem;
                    border-radius: 12px;
                    background: rgba(34, 197, 94, 0.12);
                }
                .roi-value {
                    font-size: 1.75rem;
                    font-weight: 700;
                    color: #4ade80;
                }
                .roi-label {
                    font-size: 0.85rem;
                    color: #86efac;
                }
                .roi-description {
                    color: #bbb;
                }
                .lightbox-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 60;
                    background: rgba(0, 0, 0, 0.92);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    animation: fadeIn 0.2s ease-out;
                }
                .lightbox-frame {
                    max-width: 85vw;
                    max-height: 85vh;
                }
                .lightbox-image {
                    max-width: 85vw;
                    max-height: 85vh;
                    object-fit: contain;
                    border-radius: 8px;
                }
                .lightbox-close {
                    position: absolute;
                    top: 1.5rem;
                    right: 1.5rem;
                    color: #fff;
                }
                .lightbox-nav {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    background: rgba(255, 255, 255, 0.08);
                    border: none;
                    color: #fff;
                    font-size: 2.5rem;
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 50%;
                    cursor: pointer;
                }
                .lightbox-nav:disabled {
                    opacity: 0.2;
                    cursor: default;
                }
                .lightbox-nav.prev { left: 1.5rem; }
                .lightbox-nav.next { right: 1.5rem; }
                .lightbox-counter {
                    position: absolute;
                    bottom: 1.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    color: #ccc;
                    font-size: 0.9rem;
                }
                @keyframes fadeIn {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                @keyframes popIn {
                    from { opacity: 0; transform: scale(0.95) translateY(20px); }
                    to { opacity: 1; transform: scale(1) translateY(0); }
                }
                @media (max-width: 768px) {
                    .projects-grid {
                        grid-template-columns: 1fr;
                    }
                    .projects-heading h2 {
                        font-size: 2.25rem;
                    }
                    .project-modal {
                        inset: 1rem;
                    }
                    .project-modal-header,
                    .project-modal-content {
                        padding: 1.5rem;
                    }
                    .case-section p,
                    .case-section li,
                    .gallery-grid {
                        padding-left: 0;
                    }
                    .impact-callout {
                        margin-left: 0;
                    }
                }
                "#}
            </style>
        </section>
    }
}
