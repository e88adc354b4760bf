use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResolution};

use canvas_toys::app::CanvasPlugin;
use canvas_toys::app::systems::{CanvasSprite, Stage};
use canvas_toys::canvas::Surface;
use canvas_toys::physics::Pointer;
use canvas_toys::scene::{HeartSwarm, Scene};

/// Headless app hosting a seeded swarm in a primary window of `width`×`height`
pub fn headless(width: u32, height: u32) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, AssetPlugin::default()))
        .init_asset::<Image>()
        .init_resource::<ButtonInput<KeyCode>>()
        .add_plugins(CanvasPlugin::<HeartSwarm>::new(|surface| HeartSwarm::new(surface, 1)));
    app.world_mut().spawn((
        Window {
            resolution: WindowResolution::new(width, height),
            ..default()
        },
        PrimaryWindow,
    ));
    app
}

fn stage(app: &App) -> Option<&Stage<HeartSwarm>> {
    app.world().get_resource::<Stage<HeartSwarm>>()
}

fn with_window(app: &mut App, edit: impl FnOnce(&mut Window)) {
    let world = app.world_mut();
    let mut q = world.query_filtered::<&mut Window, With<PrimaryWindow>>();
    let mut window = q.single_mut(world).unwrap();
    edit(&mut *window);
}

fn image_size(app: &App) -> UVec2 {
    let handle = stage(app).unwrap().image.clone();
    let images = app.world().resource::<Assets<Image>>();
    let size = images.get(&handle).unwrap().texture_descriptor.size;
    UVec2::new(size.width, size.height)
}

// ==================================================================================
// Startup and resize
// ==================================================================================

#[test]
fn stage_opens_once_a_minimized_window_is_restored() {
    let mut app = headless(0, 0);
    app.update();
    assert!(stage(&app).is_none());

    with_window(&mut app, |w| w.resolution = WindowResolution::new(800, 600));
    for _ in 0..3 {
        app.update();
    }

    let opened = stage(&app).expect("stage after the window became usable");
    assert_eq!(opened.driver.scene().surface(), Surface::new(800.0, 600.0).unwrap());
    assert!(opened.driver.is_running());
    assert!(opened.driver.frames() > 0);
}

#[test]
fn usable_window_opens_the_stage_at_startup() {
    let mut app = headless(640, 480);
    app.update();
    let running = stage(&app).unwrap();
    assert_eq!(running.driver.scene().surface(), Surface::new(640.0, 480.0).unwrap());
    assert_eq!(image_size(&app), UVec2::new(640, 480));
}

#[test]
fn empty_window_keeps_the_running_surface() {
    let mut app = headless(800, 600);
    app.update();

    with_window(&mut app, |w| w.resolution = WindowResolution::new(0, 0));
    app.update();

    assert_eq!(
        stage(&app).unwrap().driver.scene().surface(),
        Surface::new(800.0, 600.0).unwrap()
    );
    assert_eq!(image_size(&app), UVec2::new(800, 600));
}

#[test]
fn resize_swaps_in_a_matching_image_and_sprite() {
    let mut app = headless(800, 600);
    app.update();

    with_window(&mut app, |w| w.resolution = WindowResolution::new(1024, 768));
    app.update();

    let running = stage(&app).unwrap();
    assert_eq!(running.driver.scene().surface(), Surface::new(1024.0, 768.0).unwrap());
    assert_eq!((running.canvas.width(), running.canvas.height()), (1024, 768));
    assert_eq!(image_size(&app), UVec2::new(1024, 768));

    let world = app.world_mut();
    let mut sprites = world.query_filtered::<&Sprite, With<CanvasSprite>>();
    let sprite = sprites.single(world).unwrap();
    assert_eq!(sprite.custom_size, Some(Vec2::new(1024.0, 768.0)));
}

// ==================================================================================
// Pointer and upload
// ==================================================================================

#[test]
fn cursor_reaches_the_scene_and_leaving_clears_it() {
    let mut app = headless(800, 600);
    app.update();

    with_window(&mut app, |w| w.set_cursor_position(Some(Vec2::new(120.0, 80.0))));
    app.update();
    assert_eq!(
        stage(&app).unwrap().driver.scene().pointer(),
        Pointer::Present(Vec2::new(120.0, 80.0))
    );

    with_window(&mut app, |w| w.set_cursor_position(None));
    app.update();
    assert_eq!(stage(&app).unwrap().driver.scene().pointer(), Pointer::Absent);
}

#[test]
fn uploaded_image_matches_the_canvas() {
    let mut app = headless(320, 240);
    for _ in 0..3 {
        app.update();
    }

    let running = stage(&app).unwrap();
    let images = app.world().resource::<Assets<Image>>();
    let data = images.get(&running.image).unwrap().data.as_deref().unwrap();
    assert_eq!(data, running.canvas.bytes());
    // The trail wash has touched every pixel by now.
    assert!(data.chunks_exact(4).all(|px| px[3] > 0));
}
