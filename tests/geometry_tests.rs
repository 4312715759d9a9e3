use glam::Vec3;
use playground_scene::scene::Geometry;

fn assert_indices_in_range(geometry: &Geometry) {
    assert_eq!(geometry.indices.len() % 3, 0, "indices form whole triangles");
    let max = geometry.vertices.len() as u32;
    assert!(geometry.indices.iter().all(|&i| i < max));
}

fn assert_unit_normals(geometry: &Geometry) {
    for vertex in &geometry.vertices {
        let length = Vec3::from_array(vertex.normal).length();
        assert!(
            (length - 1.0).abs() < 1e-4,
            "normal {:?} is not unit length",
            vertex.normal
        );
    }
}

#[test]
fn test_cuboid_has_four_vertices_per_face() {
    let cuboid = Geometry::cuboid(1000.0, 1.0, 1000.0);

    assert_eq!(cuboid.vertex_count(), 24);
    assert_eq!(cuboid.index_count(), 36);
    assert_indices_in_range(&cuboid);
    assert_unit_normals(&cuboid);
}

#[test]
fn test_cuboid_stays_within_half_extents() {
    let cuboid = Geometry::cuboid(500.0, 20.0, 500.0);

    for vertex in &cuboid.vertices {
        assert!(vertex.position[0].abs() <= 250.0 + 1e-3);
        assert!(vertex.position[1].abs() <= 10.0 + 1e-3);
        assert!(vertex.position[2].abs() <= 250.0 + 1e-3);
    }
}

#[test]
fn test_sphere_vertices_lie_on_the_radius() {
    let sphere = Geometry::sphere(30.0, 20, 10);

    assert_eq!(sphere.vertex_count(), 21 * 11);
    assert_indices_in_range(&sphere);
    assert_unit_normals(&sphere);

    for vertex in &sphere.vertices {
        let radius = Vec3::from_array(vertex.position).length();
        assert!((radius - 30.0).abs() < 1e-3);
    }
}

#[test]
fn test_sphere_normals_point_outward() {
    let sphere = Geometry::sphere(5.0, 8, 6);

    for vertex in &sphere.vertices {
        let position = Vec3::from_array(vertex.position);
        let normal = Vec3::from_array(vertex.normal);
        assert!(position.normalize().dot(normal) > 0.999);
    }
}

#[test]
fn test_cylinder_spans_its_height_and_has_both_caps() {
    let cylinder = Geometry::cylinder(10.0, 7.0, 20.0, 32);

    assert_indices_in_range(&cylinder);
    assert_unit_normals(&cylinder);

    let ys: Vec<f32> = cylinder.vertices.iter().map(|v| v.position[1]).collect();
    assert!(ys.iter().all(|&y| (-10.0..=10.0).contains(&y)));
    assert!(ys.iter().any(|&y| y == 10.0));
    assert!(ys.iter().any(|&y| y == -10.0));

    let has_top_cap = cylinder.vertices.iter().any(|v| v.normal == [0.0, 1.0, 0.0]);
    let has_bottom_cap = cylinder
        .vertices
        .iter()
        .any(|v| v.normal == [0.0, -1.0, 0.0]);
    assert!(has_top_cap && has_bottom_cap);
}

#[test]
fn test_cone_collapses_the_top_ring_to_the_apex() {
    let cone = Geometry::cone(5.0, 15.0, 32);

    assert_indices_in_range(&cone);
    assert_unit_normals(&cone);

    // Apex vertices sit on the axis at half height
    let apex: Vec<_> = cone
        .vertices
        .iter()
        .filter(|v| v.position[1] == 7.5)
        .collect();
    assert!(!apex.is_empty());
    assert!(apex
        .iter()
        .all(|v| v.position[0] == 0.0 && v.position[2] == 0.0));

    // No top cap when the top radius is zero
    assert!(!cone.vertices.iter().any(|v| v.normal == [0.0, 1.0, 0.0]));
    assert!(cone.vertices.iter().any(|v| v.normal == [0.0, -1.0, 0.0]));
}

#[test]
fn test_octahedron_is_flat_shaded() {
    let octahedron = Geometry::octahedron(10.0);

    assert_eq!(octahedron.vertex_count(), 24);
    assert_eq!(octahedron.index_count(), 24);
    assert_indices_in_range(&octahedron);
    assert_unit_normals(&octahedron);

    for vertex in &octahedron.vertices {
        let radius = Vec3::from_array(vertex.position).length();
        assert!((radius - 10.0).abs() < 1e-4);
    }

    // Eight faces, eight distinct face normals
    let mut normals: Vec<[i32; 3]> = octahedron
        .vertices
        .iter()
        .map(|v| {
            [
                (v.normal[0] * 1000.0) as i32,
                (v.normal[1] * 1000.0) as i32,
                (v.normal[2] * 1000.0) as i32,
            ]
        })
        .collect();
    normals.sort();
    normals.dedup();
    assert_eq!(normals.len(), 8);
}

#[test]
fn test_octahedron_normals_face_away_from_center() {
    let octahedron = Geometry::octahedron(1.0);

    for triangle in octahedron.indices.chunks(3) {
        let centroid: Vec3 = triangle
            .iter()
            .map(|&i| Vec3::from_array(octahedron.vertices[i as usize].position))
            .sum::<Vec3>()
            / 3.0;
        let normal = Vec3::from_array(octahedron.vertices[triangle[0] as usize].normal);
        assert!(centroid.dot(normal) > 0.0);
    }
}
