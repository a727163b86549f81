// Enhanced client, first campaign

use crate::core::{Color, Rect};
use crate::engine::physics::SCREEN_WIDTH;

use super::chapter::{ChapterTemplate, EnemyTemplate};

pub const CHAPTERS: [ChapterTemplate; 8] = [
    ChapterTemplate {
        name: "Goomba Road",
        description: "Rescue Goomba Village!",
        background: Color::rgb(135, 206, 235),
        platforms: &[
            Rect::new(0.0, 500.0, SCREEN_WIDTH, 100.0),
            Rect::new(200.0, 400.0, 150.0, 20.0),
            Rect::new(400.0, 350.0, 100.0, 20.0),
            Rect::new(600.0, 300.0, 200.0, 20.0),
        ],
        enemies: &[
            EnemyTemplate::new("Goomba", 5, 2, 0, Color::BROWN, 10),
            EnemyTemplate::new("Goomba", 5, 2, 0, Color::BROWN, 10),
            EnemyTemplate::new("Paragoomba", 7, 3, 0, Color::BROWN, 15),
        ],
        boss: None,
        mechanics: &[],
    },
    ChapterTemplate {
        name: "Koopa Fortress",
        description: "Defeat the Koopa Bros!",
        background: Color::rgb(70, 70, 100),
        platforms: &[
            Rect::new(0.0, 550.0, SCREEN_WIDTH, 50.0),
            Rect::new(100.0, 450.0, 200.0, 20.0),
            Rect::new(400.0, 400.0, 150.0, 20.0),
            Rect::new(650.0, 350.0, 200.0, 20.0),
        ],
        enemies: &[
            EnemyTemplate::new("Koopa Troopa", 8, 3, 1, Color::GREEN, 20),
            EnemyTemplate::new("Hammer Bro", 12, 5, 1, Color::GREEN, 30),
        ],
        boss: None,
        mechanics: &[],
    },
    ChapterTemplate {
        name: "Dry Dry Desert",
        description: "Find the hidden ruins!",
        background: Color::rgb(255, 220, 100),
        platforms: &[
            Rect::new(0.0, 520.0, SCREEN_WIDTH, 80.0),
            Rect::new(150.0, 420.0, 100.0, 20.0),
            Rect::new(350.0, 370.0, 150.0, 20.0),
            Rect::new(600.0, 420.0, 100.0, 20.0),
        ],
        enemies: &[
            EnemyTemplate::new("Pokey", 10, 4, 2, Color::YELLOW, 25),
            EnemyTemplate::new("Bandit", 8, 5, 1, Color::PURPLE, 20),
        ],
        boss: None,
        mechanics: &[],
    },
    ChapterTemplate {
        name: "Shy Guy's Toy Box",
        description: "Stop General Guy!",
        background: Color::rgb(255, 100, 200),
        platforms: &[
            Rect::new(0.0, 500.0, SCREEN_WIDTH, 100.0),
            Rect::new(100.0, 400.0, 120.0, 20.0),
            Rect::new(300.0, 350.0, 100.0, 20.0),
            Rect::new(500.0, 300.0, 150.0, 20.0),
        ],
        enemies: &[
            EnemyTemplate::new("Shy Guy", 7, 3, 1, Color::RED, 18),
            EnemyTemplate::new("Groove Guy", 9, 4, 1, Color::PURPLE, 25),
        ],
        boss: None,
        mechanics: &[],
    },
    ChapterTemplate {
        name: "Lavalava Island",
        description: "Calm the volcano!",
        background: Color::rgb(100, 50, 0),
        platforms: &[
            Rect::new(0.0, 550.0, SCREEN_WIDTH, 50.0),
            Rect::new(200.0, 450.0, 100.0, 20.0),
            Rect::new(400.0, 400.0, 200.0, 20.0),
        ],
        enemies: &[
            EnemyTemplate::new("Lava Bubble", 6, 4, 0, Color::ORANGE, 15),
            EnemyTemplate::new("Putrid Piranha", 12, 5, 2, Color::GREEN, 30),
        ],
        boss: None,
        mechanics: &[],
    },
    ChapterTemplate {
        name: "Flower Fields",
        description: "Save the flower fields!",
        background: Color::rgb(150, 255, 150),
        platforms: &[
            Rect::new(0.0, 500.0, SCREEN_WIDTH, 100.0),
            Rect::new(150.0, 400.0, 150.0, 20.0),
            Rect::new(400.0, 350.0, 100.0, 20.0),
        ],
        enemies: &[
            EnemyTemplate::new("Dayzee", 8, 3, 1, Color::YELLOW, 20),
            EnemyTemplate::new("Monty Mole", 10, 4, 2, Color::BROWN, 25),
        ],
        boss: None,
        mechanics: &[],
    },
    ChapterTemplate {
        name: "Crystal Palace",
        description: "Navigate the frozen palace!",
        background: Color::rgb(200, 200, 255),
        platforms: &[
            Rect::new(0.0, 520.0, SCREEN_WIDTH, 80.0),
            Rect::new(100.0, 420.0, 200.0, 20.0),
            Rect::new(400.0, 370.0, 150.0, 20.0),
        ],
        enemies: &[
            EnemyTemplate::new("Crystal Bit", 5, 3, 2, Color::WHITE, 15),
            EnemyTemplate::new("Frost Piranha", 14, 6, 2, Color::BLUE, 35),
        ],
        boss: None,
        mechanics: &[],
    },
    ChapterTemplate {
        name: "Bowser's Castle",
        description: "Final showdown with Bowser!",
        background: Color::rgb(50, 0, 0),
        platforms: &[
            Rect::new(0.0, 550.0, SCREEN_WIDTH, 50.0),
            Rect::new(150.0, 450.0, 150.0, 20.0),
            Rect::new(400.0, 400.0, 100.0, 20.0),
        ],
        enemies: &[
            EnemyTemplate::new("Koopatrol", 18, 7, 4, Color::BLACK, 50),
            EnemyTemplate::new("Magikoopa", 15, 6, 2, Color::BLUE, 45),
        ],
        boss: Some(EnemyTemplate::new("Bowser", 50, 10, 5, Color::BLACK, 200)),
        mechanics: &[],
    },
];
