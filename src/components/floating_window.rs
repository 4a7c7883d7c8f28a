use yew::prelude::*;

const PANEL_STYLE: &str = concat!(
    "position:absolute; top:24px; left:24px; min-width:220px; ",
    "background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; ",
    "padding:8px 12px; color:#c9d1d9; user-select:none; z-index:10;",
);

#[derive(Properties, PartialEq, Clone)]
pub struct FloatingWindowProps {
    pub id: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

#[function_component]
pub fn FloatingWindow(props: &FloatingWindowProps) -> Html {
    html! {
        <div id={props.id.clone()} style={PANEL_STYLE}>
            <div style="font-weight:600; margin-bottom:6px;">
                {props.title.as_str()}
            </div>
            <div style="font-size:12px; line-height:1.4;">
                {props.children.clone()}
            </div>
        </div>
    }
}
