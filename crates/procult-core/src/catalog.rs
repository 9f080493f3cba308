use anyhow::Context;
use serde::Deserialize;

use crate::proposal::Proposal;

#[derive(Debug, Deserialize)]
struct CatalogFile {
  #[serde(default)]
  proposta: Vec<Proposal>
}

#[tracing::instrument(skip(raw))]
pub fn parse_catalog(
  raw: &str
) -> anyhow::Result<Vec<Proposal>> {
  let parsed = toml::from_str::<
    CatalogFile
  >(raw)
  .context(
    "failed to parse proposal catalog"
  )?;

  tracing::debug!(
    proposal_count =
      parsed.proposta.len(),
    "parsed proposal catalog"
  );

  Ok(parsed.proposta)
}

#[cfg(test)]
mod tests {
  use super::parse_catalog;

  const SAMPLE: &str = r#"
[[proposta]]
id = 1
title = "Festival de Inverno"
description = "Oficinas de música para a juventude."
tags = ["Música", "Educação"]
cost = 12500.0
author = "Coletivo Aurora"
final_date = "2026-09-15T18:00:00Z"
image_url = "https://example.com/festival.png"
texto = "Uma semana de oficinas abertas."

[[proposta]]
id = 2
title = "Mostra de Cinema"
description = "Curtas regionais."
tags = []
cost = 800.0
author = "Cine Clube"
final_date = "2026-10-01T12:00:00Z"
image_url = "https://example.com/mostra.png"
texto = "Programação completa da mostra."
"#;

  #[test]
  fn parses_catalog_in_file_order() {
    let proposals =
      parse_catalog(SAMPLE)
        .expect("parse catalog");
    assert_eq!(proposals.len(), 2);
    assert_eq!(proposals[0].id, 1);
    assert_eq!(
      proposals[1].title,
      "Mostra de Cinema"
    );
    assert!(proposals[1].tags.is_empty());
  }

  #[test]
  fn empty_document_is_empty_catalog()
  {
    let proposals = parse_catalog("")
      .expect("parse empty");
    assert!(proposals.is_empty());
  }

  #[test]
  fn rejects_malformed_document() {
    assert!(
      parse_catalog("proposta = 3")
        .is_err()
    );
  }

  #[test]
  fn rejects_missing_fields() {
    let raw = "[[proposta]]\nid = 9";
    assert!(
      parse_catalog(raw).is_err()
    );
  }
}
