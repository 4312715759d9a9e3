use std::sync::Arc;

use glam::Vec3;

use crate::core::hooks::UpdateHooks;
use crate::scene::{AmbientLight, Geometry, Material, Mesh, PointLight};
use crate::stage::Stage;
use crate::traits::scene::SceneProvider;

const GROUND_SIZE: f32 = 1000.0;
/// Radians added to the prism's yaw each frame
const PRISM_SPIN_STEP: f32 = 0.05;
/// Period divisor of the lamp oscillation, in seconds
const LAMP_PHASE_PERIOD: f32 = 0.5;
const LAMP_SWING_X: f32 = 400.0;
const LAMP_SWING_Z: f32 = 200.0;

/// The playground: ground, sandbox, bucket, seesaw, ball and a spinning
/// prism, with an ambient fill and an oscillating lamp.
pub struct PlaygroundScene;

impl SceneProvider for PlaygroundScene {
    fn build(&self, stage: &mut Stage, hooks: &mut UpdateHooks<Stage>) {
        let scene = &mut stage.scene;

        // Ground
        let ground_geometry = Arc::new(Geometry::cuboid(GROUND_SIZE, 1.0, GROUND_SIZE));
        scene.add_mesh(Mesh::new(ground_geometry, Material::from_hex(0x227700)));

        // Red ball
        let mut ball = Mesh::new(
            Arc::new(Geometry::sphere(30.0, 20, 10)),
            Material::from_hex(0xff0000),
        );
        ball.transform.position = Vec3::new(200.0, 30.0, 50.0);
        scene.add_mesh(ball);

        // Sandbox frame
        let frame_geometry = Arc::new(Geometry::cuboid(500.0, 20.0, 500.0));
        let mut wood = Mesh::new(frame_geometry.clone(), Material::from_hex(0x462300));
        wood.transform.position = Vec3::new(-150.0, 10.0, 0.0);
        let wood_position = wood.transform.position;
        scene.add_mesh(wood);

        // Sandbox sand: same shape as the frame, squeezed in and raised
        let mut sand = Mesh::new(frame_geometry, Material::from_hex(0xcc8800));
        sand.transform.position = wood_position + Vec3::new(0.0, 5.0, 0.0);
        sand.transform.scale = Vec3::new(0.9, 1.0, 0.9);
        let sand_position = sand.transform.position;
        scene.add_mesh(sand);

        // Blue bucket
        let mut bucket = Mesh::new(
            Arc::new(Geometry::cylinder(10.0, 7.0, 20.0, 32)),
            Material::from_hex(0x0000ff),
        );
        bucket.transform.position = sand_position + Vec3::new(-90.0, 25.0, 100.0);
        bucket.transform.scale = Vec3::splat(1.5);
        scene.add_mesh(bucket);

        // Black prism, hovering over the sandbox
        let mut prism = Mesh::new(
            Arc::new(Geometry::octahedron(10.0)),
            Material::from_hex(0x000000),
        );
        prism.transform.position = wood_position + Vec3::new(0.0, 80.0, 0.0);
        prism.transform.scale = Vec3::splat(4.0);
        let prism = scene.add_mesh(prism);

        // Seesaw base
        let mut base = Mesh::new(
            Arc::new(Geometry::cone(5.0, 15.0, 32)),
            Material::from_hex(0xddaa00),
        );
        base.transform.position = Vec3::new(0.0, 10.0, -350.0);
        base.transform.scale = Vec3::splat(5.0);
        let base_position = base.transform.position;
        scene.add_mesh(base);

        // Seesaw plank, tilted to rest on one end
        let mut plank = Mesh::new(
            Arc::new(Geometry::cuboid(70.0, 1.0, 10.0)),
            Material::from_hex(0xddaa00),
        );
        plank.transform.position = base_position + Vec3::new(0.0, 35.0, 0.0);
        plank.transform.scale = Vec3::splat(5.0);
        plank.transform.rotation.z = 0.2;
        scene.add_mesh(plank);

        // Lights
        scene.set_ambient_light(AmbientLight::new(0xffffff, 0.2));
        let lamp = scene.add_point_light(
            PointLight::new(0xdddd00, 10.0, 500.0).at(Vec3::new(0.0, 40.0, 0.0)),
        );

        hooks.register(move |stage, _time| {
            stage.scene.mesh_mut(prism).transform.rotation.y += PRISM_SPIN_STEP;
        });

        hooks.register(|stage, _time| {
            let Stage {
                camera,
                controls,
                input,
                ..
            } = stage;
            controls.update(input, camera);
        });

        // Lamp sweep is driven by absolute time, not per-frame delta
        hooks.register(move |stage, time| {
            let phase = (time / LAMP_PHASE_PERIOD).sin();
            let lamp = stage.scene.point_light_mut(lamp);
            lamp.position.x = LAMP_SWING_X * phase;
            lamp.position.z = LAMP_SWING_Z * phase;
        });

        log::info!(
            "playground built: {} meshes, {} point lights",
            stage.scene.meshes().len(),
            stage.scene.point_lights().len()
        );
    }

    fn name(&self) -> &str {
        "Playground"
    }
}
