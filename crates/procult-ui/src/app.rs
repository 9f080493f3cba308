use gloo::console::log;
use procult_core::currency::format_cost;
use procult_core::proposal::{
  Proposal,
  ProposalParams
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html,
  use_state
};
use yew_router::prelude::{
  BrowserRouter,
  Link,
  Routable,
  Switch,
  use_location,
  use_navigator
};

use crate::catalog::load_catalog;
use crate::components::PropostaCard;

#[derive(
  Clone, Routable, PartialEq,
)]
pub enum Route {
  #[at("/")]
  Propostas,
  #[at("/proposta/:id")]
  Proposta { id: u64 },
  #[not_found]
  #[at("/404")]
  NotFound
}

#[function_component(App)]
pub fn app() -> Html {
  let proposals =
    use_state(load_catalog);

  let render = {
    let proposals =
      (*proposals).clone();
    Callback::from(
      move |route: Route| {
        render_route(
          route,
          proposals.clone()
        )
      }
    )
  };

  html! {
      <BrowserRouter>
          <Switch<Route> render={render} />
      </BrowserRouter>
  }
}

fn render_route(
  route: Route,
  proposals: Vec<Proposal>
) -> Html {
  match route {
    | Route::Propostas => html! {
        <PropostasScreen {proposals} />
    },
    | Route::Proposta { id } => html! {
        <PropostaScreen {id} {proposals} />
    },
    | Route::NotFound => html! {
        <div class="screen">
            <div class="empty-state">{ "Página não encontrada." }</div>
            <Link<Route> classes="back-link" to={Route::Propostas}>{ "Voltar para propostas" }</Link<Route>>
        </div>
    }
  }
}

#[derive(Properties, PartialEq)]
pub struct PropostasScreenProps {
  pub proposals: Vec<Proposal>
}

#[function_component(PropostasScreen)]
pub fn propostas_screen(
  props: &PropostasScreenProps
) -> Html {
  let navigator = use_navigator()
    .expect("navigator available");

  let on_open = Callback::from(
    move |params: ProposalParams| {
      ui_debug(
        "open-proposta",
        &params.id.to_string()
      );
      tracing::info!(
        proposta_id = params.id,
        titulo = %params.titulo,
        "navigating to Proposta screen"
      );
      navigator.push_with_state(
        &Route::Proposta {
          id: params.id
        },
        params
      );
    }
  );

  html! {
      <div class="screen">
          <header class="screen-header">
              <img class="brand" src="assets/procult.svg" />
              <h1>{ "Propostas" }</h1>
          </header>
          {
              if props.proposals.is_empty() {
                  html! { <div class="empty-state">{ "Nenhuma proposta disponível." }</div> }
              } else {
                  html! {
                      <>
                          {
                              for props.proposals.iter().map(|proposal| html! {
                                  <PropostaCard key={proposal.id.to_string()} proposal={proposal.clone()} on_open={on_open.clone()} />
                              })
                          }
                      </>
                  }
              }
          }
      </div>
  }
}

#[derive(Properties, PartialEq)]
pub struct PropostaScreenProps {
  pub id:        u64,
  pub proposals: Vec<Proposal>
}

#[function_component(PropostaScreen)]
pub fn proposta_screen(
  props: &PropostaScreenProps
) -> Html {
  let params = use_location()
    .and_then(|location| {
      location
        .state::<ProposalParams>()
    })
    .map(|state| (*state).clone())
    .or_else(|| {
      props
        .proposals
        .iter()
        .find(|proposal| {
          proposal.id == props.id
        })
        .map(
          ProposalParams::from_proposal
        )
    });

  let Some(params) = params else {
    ui_debug(
      "proposta-missing",
      &props.id.to_string()
    );
    return html! {
        <div class="screen">
            <div class="empty-state">{ "Proposta não encontrada." }</div>
            <Link<Route> classes="back-link" to={Route::Propostas}>{ "Voltar para propostas" }</Link<Route>>
        </div>
    };
  };

  html! {
      <div class="screen proposta-detail">
          <img class="detail-banner" src={params.image_url.clone()} />
          <div class="detail-body">
              <h1 class="detail-title">{ &params.titulo }</h1>
              <span class="detail-author">{ &params.author }</span>
              <span class="detail-cost">{ format!("R$ {}", format_cost(params.cost)) }</span>
              <p class="detail-description">{ &params.description }</p>
              <p class="detail-text">{ &params.texto }</p>
              <Link<Route> classes="back-link" to={Route::Propostas}>{ "Voltar para propostas" }</Link<Route>>
          </div>
      </div>
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
