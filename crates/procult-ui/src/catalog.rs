use procult_core::catalog::parse_catalog;
use procult_core::proposal::Proposal;

const PROPOSTAS_TOML: &str =
  include_str!(
    "../assets/propostas.toml"
  );

pub fn load_catalog() -> Vec<Proposal>
{
  match parse_catalog(PROPOSTAS_TOML) {
    | Ok(proposals)
      if !proposals.is_empty() =>
    {
      tracing::info!(
        proposal_count =
          proposals.len(),
        "loaded proposal catalog"
      );
      proposals
    }
    | Ok(_) => {
      tracing::warn!(
        "proposal catalog was empty"
      );
      vec![]
    }
    | Err(error) => {
      tracing::error!(%error, "failed to parse proposal catalog; starting empty");
      vec![]
    }
  }
}
