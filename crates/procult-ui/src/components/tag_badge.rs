use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TagBadgeProps {
  pub label: String
}

#[function_component(TagBadge)]
pub fn tag_badge(
  props: &TagBadgeProps
) -> Html {
  html! {
      <span class="badge tag-badge">{ &props.label }</span>
  }
}
