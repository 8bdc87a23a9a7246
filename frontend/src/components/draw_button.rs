use shared::ButtonState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DrawButtonProps {
    pub state: ButtonState,
    pub on_draw: Callback<()>,
}

#[function_component(DrawButton)]
pub fn draw_button(props: &DrawButtonProps) -> Html {
    if !props.state.is_visible() {
        return html! {};
    }

    let onclick = {
        let on_draw = props.on_draw.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_draw.emit(());
        })
    };

    html! {
        <button id="btn" class={classes!(props.state.css_class())} {onclick}>
            {props.state.label()}
        </button>
    }
}
