pub mod body;
pub mod projectile;

pub use body::CentralBody;
pub use projectile::Projectile;

use crate::physics::atmosphere::Atmosphere;

// ---------------------------------------------------------------------------
// Scenario: central body plus optional drag model
// ---------------------------------------------------------------------------

/// One propagation setup. Drag applies only when both an atmosphere and a
/// projectile are configured.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub body: CentralBody,
    pub atmosphere: Option<Atmosphere>,
    pub projectile: Option<Projectile>,
}

impl Scenario {
    /// Atmosphere/projectile pair when both are present.
    pub fn drag_model(&self) -> Option<(&Atmosphere, &Projectile)> {
        match (&self.atmosphere, &self.projectile) {
            (Some(atm), Some(proj)) => Some((atm, proj)),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Scenario builder
// ---------------------------------------------------------------------------

pub struct ScenarioBuilder {
    name: String,
    body: CentralBody,
    atmosphere: Option<Atmosphere>,
    projectile: Option<Projectile>,
}

impl ScenarioBuilder {
    pub fn new(name: impl Into<String>, body: CentralBody) -> Self {
        Self {
            name: name.into(),
            body,
            atmosphere: None,
            projectile: None,
        }
    }

    pub fn atmosphere(mut self, atm: Atmosphere) -> Self {
        self.atmosphere = Some(atm);
        self
    }

    pub fn projectile(mut self, proj: Projectile) -> Self {
        self.projectile = Some(proj);
        self
    }

    pub fn build(self) -> Scenario {
        Scenario {
            name: self.name,
            body: self.body,
            atmosphere: self.atmosphere,
            projectile: self.projectile,
        }
    }
}

// ---------------------------------------------------------------------------
// Preset scenarios
// ---------------------------------------------------------------------------

pub mod presets {
    use super::*;

    /// Earth, gravity only.
    pub fn earth_vacuum() -> Scenario {
        ScenarioBuilder::new("Earth (vacuum)", CentralBody::earth()).build()
    }

    /// Earth with exponential atmosphere acting on a cannonball.
    pub fn earth_drag() -> Scenario {
        ScenarioBuilder::new("Earth (drag)", CentralBody::earth())
            .atmosphere(Atmosphere::earth())
            .projectile(Projectile::cannonball())
            .build()
    }
}
