// 팀 편성 시스템
// 영웅 선택 → 특성 시너지 집계 → 공유 링크

pub mod lineup;
pub mod share;
pub mod synergy;

pub use lineup::Lineup;
pub use share::{decode_names, encode_names, parse_query, share_link, share_query, SHARE_PARAM};
pub use synergy::{aggregate_features, features_list, ActivePerk, FeatureSummary};
