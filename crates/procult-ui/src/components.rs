mod heart_icon;
mod proposta_card;
mod tag_badge;

pub use heart_icon::HeartIcon;
pub use proposta_card::PropostaCard;
pub use tag_badge::TagBadge;
