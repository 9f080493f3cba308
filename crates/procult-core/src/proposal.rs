use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Proposal {
    pub id: u64,

    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub tags: Vec<String>,

    pub cost: f64,

    pub author: String,

    pub final_date: DateTime<Utc>,

    pub image_url: String,

    #[serde(default)]
    pub texto: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TagChip {
    pub index: usize,
    pub label: String,
}

#[must_use]
pub fn tag_chips(tags: &[String]) -> Vec<TagChip> {
    tags.iter()
        .enumerate()
        .map(|(index, label)| TagChip {
            index,
            label: label.clone(),
        })
        .collect()
}

// The destination screen expects the Portuguese key `titulo`; the
// remaining fields keep their names. Tags and the deadline stay behind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProposalParams {
    pub id: u64,
    pub titulo: String,
    pub description: String,
    pub cost: f64,
    pub author: String,
    pub image_url: String,
    pub texto: String,
}

impl ProposalParams {
    pub fn from_proposal(proposal: &Proposal) -> Self {
        Self {
            id: proposal.id,
            titulo: proposal.title.clone(),
            description: proposal.description.clone(),
            cost: proposal.cost,
            author: proposal.author.clone(),
            image_url: proposal.image_url.clone(),
            texto: proposal.texto.clone(),
        }
    }
}
