use orthoproj_core::model::{Primitive, Step};

#[derive(Debug, Clone, PartialEq)]
pub struct PlanEntry {
    pub title: String,
    pub description: String,
    pub primitives: Vec<Primitive>,
}

/// Ordered groups of primitives, one per step. Step `k` draws the
/// primitives of the first `k` entries in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepPlan {
    entries: Vec<PlanEntry>,
}

impl StepPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        primitives: Vec<Primitive>,
    ) -> &mut Self {
        self.entries.push(PlanEntry {
            title: title.into(),
            description: description.into(),
            primitives,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_steps(self) -> Vec<Step> {
        let mut drawn: Vec<Primitive> = Vec::new();
        self.entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                drawn.extend(entry.primitives);
                Step {
                    number: i + 1,
                    title: entry.title,
                    description: entry.description,
                    primitives: drawn.clone(),
                }
            })
            .collect()
    }
}
