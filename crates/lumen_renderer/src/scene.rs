//! Scene container and the Cornell box reference scene.

use crate::{
    AxisAlignedRect, Camera, Color, Cuboid, DiffuseLight, HittableList, Lambertian, Material,
    RectLight,
};
use lumen_math::Vec3;
use std::sync::Arc;

/// Everything a render reads: geometry, viewpoint and the light to sample.
pub struct Scene {
    pub world: HittableList,
    pub camera: Camera,
    pub light: RectLight,
}

/// The classic 555-unit Cornell box with two white blocks.
///
/// The camera is initialized for `aspect_ratio` (width / height).
pub fn cornell_box(aspect_ratio: f32) -> Scene {
    let red: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.65, 0.05, 0.05)));
    let white: Arc<dyn Material> = Arc::new(Lambertian::new(Color::splat(0.73)));
    let green: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.12, 0.45, 0.15)));
    let lamp: Arc<dyn Material> = Arc::new(DiffuseLight::new(Color::splat(15.0)));

    let light = RectLight::xz(213.0, 343.0, 227.0, 332.0, 554.0);

    let mut world = HittableList::new();
    world.add(Box::new(AxisAlignedRect::yz(0.0, 555.0, 0.0, 555.0, 555.0, green)));
    world.add(Box::new(AxisAlignedRect::yz(0.0, 555.0, 0.0, 555.0, 0.0, red)));
    world.add(Box::new(AxisAlignedRect::new(
        light.plane,
        light.a,
        light.b,
        light.k,
        lamp,
    )));
    world.add(Box::new(AxisAlignedRect::xz(0.0, 555.0, 0.0, 555.0, 0.0, Arc::clone(&white))));
    world.add(Box::new(AxisAlignedRect::xz(0.0, 555.0, 0.0, 555.0, 555.0, Arc::clone(&white))));
    world.add(Box::new(AxisAlignedRect::xy(0.0, 555.0, 0.0, 555.0, 555.0, Arc::clone(&white))));

    world.add(Box::new(Cuboid::new(
        Vec3::new(130.0, 0.0, 65.0),
        Vec3::new(295.0, 165.0, 230.0),
        Arc::clone(&white),
    )));
    world.add(Box::new(Cuboid::new(
        Vec3::new(265.0, 0.0, 295.0),
        Vec3::new(430.0, 330.0, 460.0),
        white,
    )));

    let mut camera = Camera::new()
        .with_position(
            Vec3::new(278.0, 278.0, -800.0),
            Vec3::new(278.0, 278.0, 0.0),
            Vec3::Y,
        )
        .with_lens(40.0, 0.0, 10.0)
        .with_aspect_ratio(aspect_ratio)
        .with_shutter(0.0, 1.0);
    camera.initialize();

    log::debug!("Built Cornell box with {} objects", world.len());

    Scene {
        world,
        camera,
        light,
    }
}
