// Client variants and the capability flags they switch on
//
// Both clients run the same session core. What differs is the content they
// offer and which battle and overworld mechanics are enabled.

use std::fmt;

/// Which game client is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum ClientVariant {
    /// One content set, no extra mechanics
    Base,
    /// Two selectable content sets with audience, action commands and more
    #[default]
    Enhanced,
}

/// A campaign: chapter tables plus partner roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentSet {
    /// The base client's campaign
    Classic,
    /// Enhanced client, first campaign: collects star points
    StarSpirit,
    /// Enhanced client, second campaign: collects crystal stars
    CrystalStar,
}

impl ContentSet {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Classic => "Paper Saga",
            Self::StarSpirit => "Star Spirit Saga",
            Self::CrystalStar => "Crystal Star Saga",
        }
    }

    /// Whether chapter rewards are named crystal stars instead of star points
    pub fn awards_crystal_stars(&self) -> bool {
        matches!(self, Self::CrystalStar)
    }
}

impl fmt::Display for ContentSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Mechanics enabled for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// 70% bonus roll on targeted battle actions
    pub action_commands: bool,
    /// 10% chance to block an enemy attack entirely
    pub superguard: bool,
    pub audience: bool,
    /// Overworld paper transformations on keys 0-3
    pub paper_modes: bool,
    /// Stylish and Appeal battle actions
    pub stylish_actions: bool,
    pub badge_points: bool,
    /// Partner damage scales with rank
    pub partner_ranks: bool,
    /// Emit music cues
    pub soundtrack: bool,
}

impl Capabilities {
    /// Capabilities of a client before or after a content set is chosen
    pub fn resolve(client: ClientVariant, content: Option<ContentSet>) -> Self {
        match client {
            ClientVariant::Base => Self::default(),
            ClientVariant::Enhanced => {
                let crystal = content == Some(ContentSet::CrystalStar);
                Self {
                    action_commands: true,
                    superguard: true,
                    audience: true,
                    paper_modes: crystal,
                    stylish_actions: crystal,
                    badge_points: crystal,
                    partner_ranks: true,
                    soundtrack: true,
                }
            }
        }
    }
}

/// Everything the session needs to know about the running client
#[derive(Debug, Clone, PartialEq)]
pub struct VariantConfig {
    pub client: ClientVariant,
    /// Chosen campaign; `None` until the enhanced client's select screen
    pub content: Option<ContentSet>,
    pub capabilities: Capabilities,
    /// Flat hammer damage on top of attack
    pub hammer_bonus: i32,
}

impl VariantConfig {
    pub fn new(client: ClientVariant) -> Self {
        let content = match client {
            ClientVariant::Base => Some(ContentSet::Classic),
            ClientVariant::Enhanced => None,
        };
        Self {
            client,
            content,
            capabilities: Capabilities::resolve(client, content),
            hammer_bonus: match client {
                ClientVariant::Base => 2,
                ClientVariant::Enhanced => 3,
            },
        }
    }

    pub fn base() -> Self {
        Self::new(ClientVariant::Base)
    }

    pub fn enhanced() -> Self {
        Self::new(ClientVariant::Enhanced)
    }

    /// Content sets offered on the select screen, in slot order
    pub fn selectable(&self) -> &'static [ContentSet] {
        match self.client {
            ClientVariant::Base => &[],
            ClientVariant::Enhanced => &[ContentSet::StarSpirit, ContentSet::CrystalStar],
        }
    }

    /// Whether the client starts with a content-set choice
    pub fn needs_selection(&self) -> bool {
        self.content.is_none()
    }

    /// Lock in a content set and recompute capabilities
    pub fn select(&mut self, content: ContentSet) {
        self.content = Some(content);
        self.capabilities = Capabilities::resolve(self.client, self.content);
    }
}

impl Default for VariantConfig {
    fn default() -> Self {
        Self::new(ClientVariant::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_has_no_extras() {
        let config = VariantConfig::base();
        assert_eq!(config.content, Some(ContentSet::Classic));
        assert_eq!(config.capabilities, Capabilities::default());
        assert_eq!(config.hammer_bonus, 2);
        assert!(!config.needs_selection());
        assert!(config.selectable().is_empty());
    }

    #[test]
    fn test_enhanced_needs_selection() {
        let config = VariantConfig::enhanced();
        assert!(config.needs_selection());
        assert_eq!(config.hammer_bonus, 3);
        assert_eq!(
            config.selectable(),
            &[ContentSet::StarSpirit, ContentSet::CrystalStar]
        );
    }

    #[test]
    fn test_crystal_star_enables_paper_mechanics() {
        let mut config = VariantConfig::enhanced();
        config.select(ContentSet::CrystalStar);
        let caps = config.capabilities;
        assert!(caps.paper_modes);
        assert!(caps.stylish_actions);
        assert!(caps.badge_points);
        assert!(caps.audience);
        assert!(caps.action_commands);
    }

    #[test]
    fn test_star_spirit_keeps_shared_enhancements_only() {
        let mut config = VariantConfig::enhanced();
        config.select(ContentSet::StarSpirit);
        let caps = config.capabilities;
        assert!(caps.action_commands);
        assert!(caps.superguard);
        assert!(caps.audience);
        assert!(caps.partner_ranks);
        assert!(caps.soundtrack);
        assert!(!caps.paper_modes);
        assert!(!caps.stylish_actions);
        assert!(!caps.badge_points);
    }

    #[test]
    fn test_milestone_kind() {
        assert!(ContentSet::CrystalStar.awards_crystal_stars());
        assert!(!ContentSet::StarSpirit.awards_crystal_stars());
        assert!(!ContentSet::Classic.awards_crystal_stars());
    }
}
