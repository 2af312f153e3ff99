use std::rc::Rc;

use log::warn;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::components::lightbox::Lightbox;
use crate::components::roi::RoiPanel;
use crate::content::ProjectRecord;
use crate::modal::ModalAction;

#[derive(Properties, PartialEq)]
pub struct ProjectModalProps {
    pub project: Rc<ProjectRecord>,
    pub selected_screenshot: Option<usize>,
    pub on_action: Callback<ModalAction>,
}

#[function_component(ProjectModal)]
pub fn project_modal(props: &ProjectModalProps) -> Html {
    let project = &props.project;
    let dialog = use_node_ref();

    // Move focus off the card that opened the dialog.
    {
        let dialog = dialog.clone();
        use_effect_with_deps(
            move |_| {
                match dialog.cast::<HtmlElement>() {
                    Some(element) => {
                        if let Err(err) = element.focus() {
                            warn!("could not focus detail view: {:?}", err);
                        }
                    }
                    None => warn!("detail view not mounted for focus"),
                }
                || ()
            },
            project.id.clone(),
        );
    }

    let close = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(ModalAction::Close))
    };

    html! {
        <>
            <div class="project-modal-backdrop" onclick={close.clone()}></div>
            <div class="project-modal" ref={dialog} tabindex="-1" role="dialog" aria-modal="true" aria-label={project.title.clone()}>
                <div class="project-modal-card">
                    <header class="project-modal-header">
                        <div class="project-modal-heading">
                            <div class="project-modal-meta">
                                <span class="project-modal-number">{project.display_number.clone()}</span>
                                <div class="project-tags">
                                    { for project.tags.iter().map(|tag| html! {
                                        <span class="project-tag">{tag.clone()}</span>
                                    }) }
                                </div>
                            </div>
                            <h2>{project.title.clone()}</h2>
                            <p class="project-modal-tagline">{project.tagline.clone()}</p>
                            if let Some(link) = &project.link {
                                <a class="project-modal-link" href={link.clone()} target="_blank" rel="noopener noreferrer">
                                    {"View Project ↗"}
                                </a>
                            }
                        </div>
                        <button class="project-modal-close" onclick={close} aria-label="Close">
                            {"✕"}
                        </button>
                    </header>

                    <div class="project-modal-content">
                        <section class="case-section problem">
                            <h3><span class="case-icon">{"🎯"}</span>{"The Problem"}</h3>
                            <p>{project.problem.clone()}</p>
                        </section>

                        <section class="case-section solution">
                            <h3><span class="case-icon">{"💡"}</span>{"The Solution"}</h3>
                            <ul>
                                { for project.solution.iter().map(|point| html! {
                                    <li>{point.clone()}</li>
                                }) }
                            </ul>
                        </section>

                        <section class="case-section impact">
                            <h3><span class="case-icon">{"⚡"}</span>{"The Impact"}</h3>
                            <p class="impact-callout">{project.impact.clone()}</p>
                        </section>

                        if project.has_gallery() {
                            { gallery(project, &props.on_action) }
                        }

                        if let Some(roi) = &project.roi {
                            <RoiPanel roi={roi.clone()} />
                        }
                    </div>
                </div>
            </div>
            if let Some(index) = props.selected_screenshot {
                <Lightbox
                    screenshots={project.screenshots().to_vec()}
                    index={index}
                    title={project.title.clone()}
                    on_action={props.on_action.clone()}
                />
            }
        </>
    }
}

fn gallery(project: &ProjectRecord, on_action: &Callback<ModalAction>) -> Html {
    let count = project.screenshots().len();

    html! {
        <section class="case-section gallery">
            <h3><span class="case-icon">{"🖼"}</span>{"Screenshots"}</h3>
            <div class="gallery-grid">
                { for project.screenshots().iter().enumerate().map(|(index, src)| {
                    let on_action = on_action.clone();
                    let onclick = Callback::from(move |_: MouseEvent| {
                        on_action.emit(ModalAction::OpenScreenshot(index))
                    });
                    html! {
                        <button
                            class="gallery-thumb"
                            onclick={onclick}
                            aria-label={format!("Screenshot {} of {}", index + 1, count)}
                        >
                            <FallbackImage
                                src={src.clone()}
                                alt={format!("{} screenshot {}", project.title, index + 1)}
                            />
                        </button>
                    }
                }) }
            </div>
        </section>
    }
}
