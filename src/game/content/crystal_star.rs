// Enhanced client, second campaign

use crate::core::{Color, Rect};
use crate::engine::physics::SCREEN_WIDTH;

use super::chapter::{ChapterTemplate, EnemyTemplate};

pub const CHAPTERS: [ChapterTemplate; 8] = [
    ChapterTemplate {
        name: "Rogueport",
        description: "Find the first Crystal Star!",
        background: Color::rgb(100, 150, 200),
        platforms: &[
            Rect::new(0.0, 550.0, SCREEN_WIDTH, 50.0),
            Rect::new(150.0, 450.0, 200.0, 20.0),
            Rect::new(450.0, 400.0, 150.0, 20.0),
        ],
        enemies: &[
            EnemyTemplate::new("Goomba", 6, 2, 0, Color::BROWN, 12),
            EnemyTemplate::new("Koopa", 8, 3, 1, Color::GREEN, 18),
            EnemyTemplate::new("Fuzzy", 5, 2, 0, Color::BLACK, 10),
        ],
        boss: None,
        mechanics: &["Paper Mode Tutorial"],
    },
    ChapterTemplate {
        name: "Boggly Woods",
        description: "Help the Punies!",
        background: Color::rgb(50, 100, 50),
        platforms: &[
            Rect::new(0.0, 520.0, SCREEN_WIDTH, 80.0),
            Rect::new(200.0, 420.0, 100.0, 20.0),
            Rect::new(400.0, 350.0, 200.0, 20.0),
        ],
        enemies: &[
            EnemyTemplate::new("X-Naut", 10, 4, 1, Color::WHITE, 25),
            EnemyTemplate::new("Pider", 7, 3, 0, Color::PURPLE, 15),
            EnemyTemplate::new("Dark Puff", 9, 4, 0, Color::DARK_PURPLE, 20),
        ],
        boss: None,
        mechanics: &["Punies", "Great Tree"],
    },
    ChapterTemplate {
        name: "Glitzville",
        description: "Become the champion!",
        background: Color::GOLD,
        platforms: &[
            Rect::new(0.0, 500.0, SCREEN_WIDTH, 100.0),
            Rect::new(300.0, 400.0, 400.0, 20.0),
        ],
        enemies: &[
            EnemyTemplate::new("Iron Cleft", 15, 5, 4, Color::GRAY, 35),
            EnemyTemplate::new("Shady Koopa", 10, 4, 2, Color::GREEN, 25),
            EnemyTemplate::new("KP Koopa", 8, 3, 1, Color::YELLOW, 20),
        ],
        boss: None,
        mechanics: &["Fighting Ring", "Ranked Battles"],
    },
    ChapterTemplate {
        name: "Twilight Town",
        description: "Solve the bell curse!",
        background: Color::rgb(100, 50, 150),
        platforms: &[
            Rect::new(0.0, 550.0, SCREEN_WIDTH, 50.0),
            Rect::new(100.0, 450.0, 150.0, 20.0),
            Rect::new(350.0, 400.0, 200.0, 20.0),
            Rect::new(650.0, 350.0, 150.0, 20.0),
        ],
        enemies: &[
            EnemyTemplate::new("Hyper Goomba", 12, 5, 1, Color::BROWN, 30),
            EnemyTemplate::new("Crazee Dayzee", 10, 4, 1, Color::YELLOW, 25),
            EnemyTemplate::new("Duplighost", 15, 5, 1, Color::WHITE, 40),
        ],
        boss: None,
        mechanics: &["Bell Tower", "Shadow Curse"],
    },
    ChapterTemplate {
        name: "Keelhaul Key",
        description: "Find pirate treasure!",
        background: Color::rgb(0, 150, 200),
        platforms: &[
            Rect::new(0.0, 520.0, SCREEN_WIDTH, 80.0),
            Rect::new(200.0, 420.0, 150.0, 20.0),
            Rect::new(500.0, 370.0, 200.0, 20.0),
        ],
        enemies: &[
            EnemyTemplate::new("Ember", 8, 4, 0, Color::ORANGE, 18),
            EnemyTemplate::new("Bulky Bob-omb", 18, 6, 2, Color::BLACK, 40),
            EnemyTemplate::new("Paratroopa", 10, 4, 1, Color::GREEN, 22),
        ],
        boss: None,
        mechanics: &["Pirate Ship", "Treasure Hunt"],
    },
    ChapterTemplate {
        name: "Poshley Heights",
        description: "Mystery on the Express!",
        background: Color::rgb(200, 150, 255),
        platforms: &[
            Rect::new(0.0, 500.0, SCREEN_WIDTH, 100.0),
            Rect::new(150.0, 400.0, 200.0, 20.0),
            Rect::new(450.0, 350.0, 150.0, 20.0),
        ],
        enemies: &[
            EnemyTemplate::new("Dark Boo", 13, 5, 1, Color::DARK_PURPLE, 30),
            EnemyTemplate::new("Chain Chomp", 20, 7, 3, Color::BLACK, 50),
            EnemyTemplate::new("Ice Puff", 11, 4, 1, Color::BLUE, 25),
        ],
        boss: None,
        mechanics: &["Excess Express", "Mystery"],
    },
    ChapterTemplate {
        name: "X-Naut Fortress",
        description: "To the moon!",
        background: Color::rgb(20, 20, 60),
        platforms: &[
            Rect::new(0.0, 550.0, SCREEN_WIDTH, 50.0),
            Rect::new(100.0, 450.0, 100.0, 20.0),
            Rect::new(300.0, 400.0, 150.0, 20.0),
            Rect::new(550.0, 350.0, 200.0, 20.0),
        ],
        enemies: &[
            EnemyTemplate::new("Moon Cleft", 12, 5, 3, Color::GRAY, 35),
            EnemyTemplate::new("Z-Yux", 15, 6, 2, Color::WHITE, 40),
            EnemyTemplate::new("Elite X-Naut", 18, 7, 3, Color::RED, 50),
        ],
        boss: None,
        mechanics: &["X-Naut Fortress", "Moon Base"],
    },
    ChapterTemplate {
        name: "Palace of Shadow",
        description: "Stop the Shadow Queen!",
        background: Color::rgb(25, 0, 50),
        platforms: &[
            Rect::new(0.0, 550.0, SCREEN_WIDTH, 50.0),
            Rect::new(150.0, 450.0, 150.0, 20.0),
            Rect::new(400.0, 400.0, 100.0, 20.0),
            Rect::new(600.0, 350.0, 150.0, 20.0),
        ],
        enemies: &[
            EnemyTemplate::new("Dark Wizzerd", 20, 8, 2, Color::DARK_PURPLE, 60),
            EnemyTemplate::new("Phantom Ember", 16, 6, 1, Color::PURPLE, 45),
            EnemyTemplate::new("Swoopula", 14, 5, 1, Color::BLACK, 35),
        ],
        boss: Some(EnemyTemplate::new("Shadow Queen", 80, 12, 5, Color::DARK_PURPLE, 500)),
        mechanics: &["Final Boss", "1000-Year Door"],
    },
];
