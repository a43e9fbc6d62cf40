pub mod formatter;
pub mod handler;
pub mod recommendations;
pub mod resolver;

pub use crate::domain::model::{RecommendationSet, RelatedPart, ResolvedCard, ScryfallCard};
pub use crate::domain::ports::{CardResolver, ConfigProvider, RecommendationSource};
pub use crate::utils::error::Result;
