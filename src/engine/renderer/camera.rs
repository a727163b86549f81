// Fixed 2D camera over the logical game screen

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec4};

/// Orthographic camera with the origin at the top-left corner and y down
///
/// The game always works in the same logical resolution; the window only
/// stretches the result.
#[derive(Debug, Clone)]
pub struct Camera {
    size: Vec2,
    view_proj: Mat4,
}

impl Camera {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            view_proj: Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0),
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn view_proj_matrix(&self) -> Mat4 {
        self.view_proj
    }

    /// Clip-space position of a screen point
    pub fn to_clip(&self, point: Vec2) -> Vec2 {
        let clip = self.view_proj * Vec4::new(point.x, point.y, 0.0, 1.0);
        Vec2::new(clip.x, clip.y)
    }
}

/// Camera uniform for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj_matrix().to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_corners_map_to_clip_space() {
        let camera = Camera::new(1024.0, 768.0);

        let top_left = camera.to_clip(Vec2::ZERO);
        assert_relative_eq!(top_left.x, -1.0);
        assert_relative_eq!(top_left.y, 1.0);

        let bottom_right = camera.to_clip(Vec2::new(1024.0, 768.0));
        assert_relative_eq!(bottom_right.x, 1.0);
        assert_relative_eq!(bottom_right.y, -1.0);

        let center = camera.to_clip(Vec2::new(512.0, 384.0));
        assert_relative_eq!(center.x, 0.0);
        assert_relative_eq!(center.y, 0.0);
    }

    #[test]
    fn test_uniform_matches_matrix() {
        let camera = Camera::new(1024.0, 768.0);
        let uniform = CameraUniform::new(&camera);
        assert_eq!(
            uniform.view_proj,
            camera.view_proj_matrix().to_cols_array_2d()
        );
    }
}
