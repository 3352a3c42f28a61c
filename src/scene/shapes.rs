use glam::Vec3;

use crate::types::{GeometryKind, Material, MaterialKind};

/// Shared tint of the shaped meshes and particles (#ffeded)
pub const OBJECT_COLOR: [f32; 3] = [1.0, 0.929_411_77, 0.929_411_77];

/// One of the primary decorative meshes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapedObject {
    pub geometry: GeometryKind,
    pub material: Material,
    pub position: Vec3,
    pub rotation: Vec3,
}

/// Build the fixed column of shaped objects, one per page section,
/// at vertical slots 0, -spacing, -2*spacing
pub fn create_shaped_objects(spacing: f32, material: MaterialKind) -> Vec<ShapedObject> {
    [
        GeometryKind::Octahedron,
        GeometryKind::Cone,
        GeometryKind::Torus,
    ]
    .into_iter()
    .enumerate()
    .map(|(index, geometry)| ShapedObject {
        geometry,
        material: Material::from_kind(material),
        position: Vec3::new(0.0, -spacing * index as f32, 0.0),
        rotation: Vec3::ZERO,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_objects_at_fixed_slots() {
        let shapes = create_shaped_objects(4.0, MaterialKind::Toon);
        assert_eq!(shapes.len(), 3);
        assert_eq!(shapes[0].position.y, 0.0);
        assert_eq!(shapes[1].position.y, -4.0);
        assert_eq!(shapes[2].position.y, -8.0);
    }

    #[test]
    fn test_objects_start_unrotated_and_centered() {
        for shape in create_shaped_objects(4.0, MaterialKind::Toon) {
            assert_eq!(shape.rotation, Vec3::ZERO);
            assert_eq!(shape.position.x, 0.0);
        }
    }

    #[test]
    fn test_material_kind_applies_to_all_objects() {
        for shape in create_shaped_objects(4.0, MaterialKind::Hologram) {
            assert_eq!(shape.material, Material::Hologram { time: 0.0 });
        }
    }
}
