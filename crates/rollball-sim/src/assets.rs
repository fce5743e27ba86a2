//! Body templates for the ball and pin models.
//!
//! Stands in for model loading: each asset name resolves to the physical
//! parameters of the body it would produce. Pins are clones of one template.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use rollball_core::components::RigidBody;
use rollball_core::constants::*;
use rollball_core::enums::BodyMode;

use crate::error::SetupError;

/// Physical parameters of a loadable body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyTemplate {
    pub mode: BodyMode,
    pub mass: f32,
    pub radius: f32,
}

impl BodyTemplate {
    /// Create a fresh rigid body at rest.
    pub fn instantiate(&self) -> RigidBody {
        RigidBody::new(self.mode, self.mass, self.radius)
    }
}

/// Registry of body templates by asset name.
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    templates: HashMap<String, BodyTemplate>,
}

impl Default for AssetCatalog {
    /// Catalog with the bowling ball and bowling pin.
    fn default() -> Self {
        let mut catalog = Self::empty();
        catalog.insert(
            BALL_ASSET,
            BodyTemplate {
                mode: BodyMode::Dynamic,
                mass: BALL_MASS,
                radius: BALL_RADIUS,
            },
        );
        catalog.insert(
            PIN_ASSET,
            BodyTemplate {
                mode: BodyMode::Dynamic,
                mass: PIN_MASS,
                radius: PIN_RADIUS,
            },
        );
        catalog
    }
}

impl AssetCatalog {
    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, template: BodyTemplate) {
        self.templates.insert(name.into(), template);
    }

    /// Look up a template. Missing assets are a setup failure.
    pub fn load(&self, name: &str) -> Result<BodyTemplate, SetupError> {
        self.templates
            .get(name)
            .copied()
            .ok_or_else(|| SetupError::MissingAsset(name.to_string()))
    }
}
