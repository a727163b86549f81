use crate::core::Rect;

use super::body::Body;

/// Static platform a body can stand on
pub type Platform = Rect;

/// Whether a body should snap onto a platform this tick
///
/// Only bodies that are falling or at rest land; a rising body passes
/// through platforms from below.
pub fn lands_on(body: &Body, platform: &Platform) -> bool {
    body.velocity.y >= 0.0 && body.rect().overlaps(platform)
}

/// Re-evaluate whether a body is standing on any platform
///
/// Overlaps resolve to the first matching platform in list order, not the
/// closest surface. The body is snapped on top of that platform.
pub fn resolve_grounding(body: &mut Body, platforms: &[Platform]) {
    body.grounded = false;

    let Some(platform) = platforms.iter().find(|p| lands_on(body, p)) else {
        return;
    };

    body.grounded = true;
    body.velocity.y = 0.0;
    body.position.y = platform.top() - body.size.y;
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn body_at(x: f32, y: f32, vy: f32) -> Body {
        let mut body = Body::new(x, y);
        body.grounded = false;
        body.velocity = Vec2::new(0.0, vy);
        body
    }

    #[test]
    fn test_falling_body_lands() {
        let platforms = [Rect::new(0.0, 500.0, 1024.0, 100.0)];
        let mut body = body_at(100.0, 445.0, 5.0);

        resolve_grounding(&mut body, &platforms);

        assert!(body.grounded);
        assert_eq!(body.velocity.y, 0.0);
        assert_eq!(body.position.y, 440.0);
    }

    #[test]
    fn test_rising_body_never_snaps() {
        let platforms = [Rect::new(0.0, 500.0, 1024.0, 100.0)];
        let mut body = body_at(100.0, 445.0, -4.0);

        resolve_grounding(&mut body, &platforms);

        assert!(!body.grounded);
        assert_eq!(body.position.y, 445.0);
        assert_eq!(body.velocity.y, -4.0);
    }

    #[test]
    fn test_first_platform_in_list_wins() {
        // Both overlap; the lower platform is listed first and wins anyway
        let platforms = [
            Rect::new(0.0, 480.0, 200.0, 100.0),
            Rect::new(0.0, 470.0, 200.0, 20.0),
        ];
        let mut body = body_at(50.0, 440.0, 2.0);

        resolve_grounding(&mut body, &platforms);

        assert!(body.grounded);
        assert_eq!(body.position.y, 420.0);
    }

    #[test]
    fn test_resting_exactly_on_top_is_not_overlap() {
        let platforms = [Rect::new(0.0, 500.0, 1024.0, 100.0)];
        let mut body = body_at(100.0, 440.0, 0.0);
        body.grounded = true;

        resolve_grounding(&mut body, &platforms);
        assert!(!body.grounded);
    }

    #[test]
    fn test_no_platforms_means_airborne() {
        let mut body = body_at(100.0, 100.0, 1.0);
        body.grounded = true;
        resolve_grounding(&mut body, &[]);
        assert!(!body.grounded);
        assert_eq!(body.velocity.y, 1.0);
    }
}
