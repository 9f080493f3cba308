use chrono::Utc;
use procult_core::countdown::format_time_remaining;
use procult_core::currency::format_cost;
use procult_core::proposal::{
  Proposal,
  ProposalParams,
  tag_chips
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::{
  HeartIcon,
  TagBadge
};

#[derive(Properties, PartialEq)]
pub struct PropostaCardProps {
  pub proposal: Proposal,
  pub on_open:
    Callback<ProposalParams>
}

#[function_component(PropostaCard)]
pub fn proposta_card(
  props: &PropostaCardProps
) -> Html {
  // Remaining time is read once per render; there is no timer here.
  let time_remaining =
    format_time_remaining(
      props.proposal.final_date,
      Utc::now()
    );
  let cost =
    format_cost(props.proposal.cost);

  let onclick = {
    let on_open = props.on_open.clone();
    let params =
      ProposalParams::from_proposal(
        &props.proposal
      );
    Callback::from(move |_| {
      on_open.emit(params.clone());
    })
  };

  html! {
      <div class="proposta-card" {onclick}>
          <img class="proposta-image" src={props.proposal.image_url.clone()} />
          <div class="proposta-info">
              <span class="title">{ &props.proposal.title }</span>
              <span class="description">{ &props.proposal.description }</span>
              <div class="tag-row">
                  {
                      for tag_chips(&props.proposal.tags).into_iter().map(|chip| html! {
                          <TagBadge key={chip.index.to_string()} label={chip.label} />
                      })
                  }
              </div>
              <span class="cost">{ format!("R$ {cost}") }</span>
              <div class="divider"></div>
              <div class="bottom-row">
                  <div class="author-row">
                      <img class="avatar" src="assets/procult.svg" />
                      <span class="mini-text">{ &props.proposal.author }</span>
                  </div>
                  <div class="deadline">
                      <span class="mini-text">{ "Restam: " }</span>
                      <span class="mini-bigger-text">{ time_remaining }</span>
                      <span class="mini-text">{ "para encerrar " }</span>
                  </div>
                  <HeartIcon />
              </div>
          </div>
      </div>
  }
}
