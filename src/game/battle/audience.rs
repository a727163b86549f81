// Battle audience: crowd size, excitement and star power

/// Audience tuning
#[derive(Debug, Clone, PartialEq)]
pub struct AudienceLimits {
    pub starting_size: u32,
    pub max_size: u32,
    pub starting_excitement: u32,
    pub max_excitement: u32,
    /// Excitement above this adds a member
    pub grow_above: u32,
    pub max_star_power: u32,
}

pub const AUDIENCE_LIMITS: AudienceLimits = AudienceLimits {
    starting_size: 50,
    max_size: 200,
    starting_excitement: 50,
    max_excitement: 100,
    grow_above: 80,
    max_star_power: 100,
};

/// Crowd watching the battles of a session
#[derive(Debug, Clone, PartialEq)]
pub struct Audience {
    pub size: u32,
    pub excitement: u32,
    pub star_power: u32,
}

impl Default for Audience {
    fn default() -> Self {
        Self::new()
    }
}

impl Audience {
    pub fn new() -> Self {
        Self {
            size: AUDIENCE_LIMITS.starting_size,
            excitement: AUDIENCE_LIMITS.starting_excitement,
            star_power: 0,
        }
    }

    pub fn add_member(&mut self) {
        if self.size < AUDIENCE_LIMITS.max_size {
            self.size += 1;
        }
    }

    /// Raise excitement; a thrilled crowd draws one more member
    pub fn increase_excitement(&mut self, amount: u32) {
        self.excitement = (self.excitement + amount).min(AUDIENCE_LIMITS.max_excitement);
        if self.excitement > AUDIENCE_LIMITS.grow_above {
            self.add_member();
        }
    }

    pub fn generate_star_power(&mut self, amount: u32) {
        self.star_power = (self.star_power + amount).min(AUDIENCE_LIMITS.max_star_power);
    }

    /// Crowd size relative to a full house
    pub fn size_fraction(&self) -> f32 {
        self.size as f32 / AUDIENCE_LIMITS.max_size as f32
    }

    /// Star power as a `0.0..=1.0` fraction for the HUD meter
    pub fn star_power_fraction(&self) -> f32 {
        self.star_power as f32 / AUDIENCE_LIMITS.max_star_power as f32
    }
}
