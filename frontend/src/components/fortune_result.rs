use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FortuneResultProps {
    /// Markup built from the trusted message pool, or `None` before the first draw
    pub markup: Option<String>,
}

#[function_component(FortuneResult)]
pub fn fortune_result(props: &FortuneResultProps) -> Html {
    match &props.markup {
        Some(markup) => html! {
            <div id="result" class="result show">
                {Html::from_html_unchecked(AttrValue::from(markup.clone()))}
            </div>
        },
        None => html! { <div id="result" class="result"></div> },
    }
}
