use std::rc::Rc;

use yew::prelude::*;

use crate::content::ProjectRecord;

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Rc<ProjectRecord>,
    /// Position in the grid, used to stagger the entry animation.
    pub position: usize,
    pub on_select: Callback<Rc<ProjectRecord>>,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;

    let onclick = {
        let project = project.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(project.clone()))
    };

    let onkeydown = {
        let project = project.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                e.prevent_default();
                on_select.emit(project.clone());
            }
        })
    };

    let style = format!("animation-delay: {:.1}s;", props.position as f32 * 0.1);

    html! {
        <article class="project-card" role="button" tabindex="0" style={style} onclick={onclick} onkeydown={onkeydown}>
            <div class="project-card-number">{project.display_number.clone()}</div>
            <div class="project-card-body">
                <div class="project-tags">
                    { for project.tags.iter().take(2).map(|tag| html! {
                        <span class="project-tag">{tag.clone()}</span>
                    }) }
                </div>
                <h3>{project.title.clone()}</h3>
                <p>{project.tagline.clone()}</p>
                <div class="project-card-cta">
                    {"View Case Study"}
                    <span class="arrow">{"↗"}</span>
                </div>
            </div>
        </article>
    }
}
