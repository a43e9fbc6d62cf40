use crate::core::formatter::format_name;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Relationship tag Scryfall uses for the "Partner with" mechanic.
pub const PARTNER_COMPONENT: &str = "partner";

/// Card object returned by Scryfall's `/cards/named` endpoint, reduced to
/// the fields used here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScryfallCard {
    pub name: String,
    #[serde(default)]
    pub all_parts: Option<Vec<RelatedPart>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedPart {
    pub component: String,
    pub name: String,
}

impl ScryfallCard {
    /// First related part tagged as a partner that is not the card itself.
    pub fn partner(&self) -> Option<&RelatedPart> {
        self.all_parts
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|part| part.component == PARTNER_COMPONENT && part.name != self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCard {
    pub canonical_name: String,
    pub partner_name: Option<String>,
}

impl ResolvedCard {
    pub fn new(canonical_name: impl Into<String>) -> Self {
        Self {
            canonical_name: canonical_name.into(),
            partner_name: None,
        }
    }

    pub fn with_partner(mut self, partner_name: impl Into<String>) -> Self {
        self.partner_name = Some(partner_name.into());
        self
    }

    /// Name EDHREC files the commander (or partner pair) under.
    pub fn combined_name(&self) -> String {
        match &self.partner_name {
            Some(partner) => format!("{} {}", self.canonical_name, partner),
            None => self.canonical_name.clone(),
        }
    }

    pub fn lookup_key(&self) -> String {
        format_name(&self.combined_name())
    }
}

impl From<ScryfallCard> for ResolvedCard {
    fn from(card: ScryfallCard) -> Self {
        let partner_name = card.partner().map(|part| part.name.clone());
        Self {
            canonical_name: card.name,
            partner_name,
        }
    }
}

/// Card names in first-seen order, each name kept once.
#[derive(Debug, Clone, Default)]
pub struct RecommendationSet {
    names: Vec<String>,
    seen: HashSet<String>,
}

impl RecommendationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the name was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.seen.contains(&name) {
            return false;
        }
        self.seen.insert(name.clone());
        self.names.push(name);
        true
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.names
    }
}

impl<S: Into<String>> FromIterator<S> for RecommendationSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}
