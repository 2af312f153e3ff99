use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct FallbackImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// An `<img>` that removes itself when the browser fails to load it.
#[function_component(FallbackImage)]
pub fn fallback_image(props: &FallbackImageProps) -> Html {
    let failed = use_state(|| false);

    {
        let failed = failed.clone();
        use_effect_with_deps(
            move |_| {
                if *failed {
                    failed.set(false);
                }
                || ()
            },
            props.src.clone(),
        );
    }

    if *failed {
        return html! {};
    }

    let onerror = {
        let failed = failed.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            log::warn!("image failed to load: {}", src);
            failed.set(true);
        })
    };

    html! {
        <img
            src={config::asset_url(&props.src)}
            alt={props.alt.clone()}
            class={props.class.clone()}
            loading="lazy"
            onerror={onerror}
        />
    }
}
