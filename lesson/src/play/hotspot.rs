//! Hotspot discovery player. No scoring.

#[cfg(test)]
#[path = "hotspot_test.rs"]
mod hotspot_test;

use std::collections::BTreeSet;

use super::Outcome;
use crate::props::{HotspotMarker, HotspotProps};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotspotIntent {
    /// Open marker `id`, adding it to the discovered set.
    Discover(String),
    Reset,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HotspotSession {
    markers: Vec<HotspotMarker>,
    discovered: BTreeSet<String>,
    active: Option<String>,
}

impl HotspotSession {
    #[must_use]
    pub fn new(props: &HotspotProps) -> Self {
        Self { markers: props.hotspots.clone(), discovered: BTreeSet::new(), active: None }
    }

    pub fn apply(&mut self, intent: &HotspotIntent) -> Outcome {
        match intent {
            HotspotIntent::Discover(id) => {
                if !self.markers.iter().any(|m| &m.id == id) {
                    return Outcome::Ignored;
                }
                let inserted = self.discovered.insert(id.clone());
                let switched = self.active.as_ref() != Some(id);
                self.active = Some(id.clone());
                if inserted || switched { Outcome::Updated } else { Outcome::Ignored }
            }
            HotspotIntent::Reset => {
                self.discovered.clear();
                self.active = None;
                Outcome::Updated
            }
        }
    }

    #[must_use]
    pub fn markers(&self) -> &[HotspotMarker] {
        &self.markers
    }

    #[must_use]
    pub fn is_discovered(&self, id: &str) -> bool {
        self.discovered.contains(id)
    }

    /// The most recently opened marker.
    #[must_use]
    pub fn active(&self) -> Option<&HotspotMarker> {
        let id = self.active.as_deref()?;
        self.markers.iter().find(|m| m.id == id)
    }

    #[must_use]
    pub fn discovered(&self) -> usize {
        self.discovered.len()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.markers.len()
    }
}
