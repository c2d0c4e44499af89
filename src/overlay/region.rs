use uuid::Uuid;

// Region ids are unique across instances, so interactions reported for one
// picker can never be claimed by another one on the same page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RegionId(Uuid);

impl RegionId {
    pub fn fresh() -> Self {
        RegionId(Uuid::new_v4())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionSite {
    Anchor,
    Overlay,
    Backdrop,
    Outside,
}

// Interactions are classified against these ids instead of by walking the
// host's element tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionSet {
    anchor: RegionId,
    overlay: RegionId,
    backdrop: RegionId,
}

impl RegionSet {
    pub fn fresh() -> Self {
        RegionSet {
            anchor: RegionId::fresh(),
            overlay: RegionId::fresh(),
            backdrop: RegionId::fresh(),
        }
    }

    pub fn anchor(&self) -> RegionId {
        self.anchor
    }

    pub fn overlay(&self) -> RegionId {
        self.overlay
    }

    pub fn backdrop(&self) -> RegionId {
        self.backdrop
    }

    pub fn classify(&self, target: Option<RegionId>) -> InteractionSite {
        match target {
            Some(id) if id == self.anchor => InteractionSite::Anchor,
            Some(id) if id == self.overlay => InteractionSite::Overlay,
            Some(id) if id == self.backdrop => InteractionSite::Backdrop,
            _ => InteractionSite::Outside,
        }
    }
}
