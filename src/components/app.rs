use super::floating_window::FloatingWindow;
use crate::config::DragConfig;
use crate::dom;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| {
        web_sys::window()
            .and_then(|w| w.document())
            .map(|d| DragConfig::load(&d))
            .unwrap_or_default()
    });

    // Bind once the window is in the DOM; the binding unhooks itself on unmount
    {
        let config = config.clone();
        use_effect_with((), move |_| {
            let binding = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| dom::bind(&d, &config));
            move || drop(binding)
        });
    }

    html! {
        <div id="root" style="position:relative; width:100vw; height:100vh; background:#0e1116;">
            <FloatingWindow id={config.target_id.clone()} title="Floating window">
                <p style="margin:0;">{"Press and drag to move this panel."}</p>
                <p style="margin:4px 0 0 0; opacity:0.7;">{"It stays where you release it."}</p>
            </FloatingWindow>
        </div>
    }
}
