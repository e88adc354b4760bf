use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use bevy::window::PrimaryWindow;

use crate::canvas::{PixelCanvas, Surface};
use crate::driver::{Driver, FrameTicks};
use crate::physics::Pointer;
use crate::scene::Scene;

/// How the plugin builds its scene once the window size is known.
#[derive(Resource)]
pub struct SceneFactory<S: Send + Sync + 'static>(pub fn(Surface) -> S);

/// Everything one running scene needs: the driver, the pixels it paints into,
/// and the image asset those pixels are shown through.
#[derive(Resource)]
pub struct Stage<S: Send + Sync + 'static> {
    pub driver: Driver<S, FrameTicks>,
    pub canvas: PixelCanvas,
    pub image: Handle<Image>,
}

/// Marker for the full-window sprite showing the canvas.
#[derive(Component)]
pub struct CanvasSprite;

fn canvas_image(canvas: &PixelCanvas) -> Image {
    Image::new(
        Extent3d {
            width: canvas.width(),
            height: canvas.height(),
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        canvas.bytes().to_vec(),
        TextureFormat::Rgba8UnormSrgb,
        // Pixels are rewritten on the CPU every frame
        RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
    )
}

fn window_surface(window: &Window) -> Option<Surface> {
    Surface::new(window.width(), window.height())
}

/// Create the canvas sprite, its image and a started driver for `surface`.
fn open_stage<S: Scene + Send + Sync + 'static>(
    commands: &mut Commands,
    images: &mut Assets<Image>,
    factory: &SceneFactory<S>,
    surface: Surface,
) {
    let canvas = PixelCanvas::for_surface(surface);
    let image = images.add(canvas_image(&canvas));
    commands.spawn((
        Sprite {
            image: image.clone(),
            custom_size: Some(surface.size()),
            ..default()
        },
        Transform::default(),
        CanvasSprite,
    ));

    let mut driver = Driver::new((factory.0)(surface), FrameTicks);
    driver.start();
    commands.insert_resource(Stage {
        driver,
        canvas,
        image,
    });
}

/// Spawn the camera and, if the window is already usable, the stage.
/// Without a primary window there is nothing to draw on: log it and stay idle.
pub fn spawn_canvas<S: Scene + Send + Sync + 'static>(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    factory: Res<SceneFactory<S>>,
) {
    commands.spawn(Camera2d);

    let Ok(window) = windows.single() else {
        warn!("no primary window; nothing to draw on");
        return;
    };
    match window_surface(window) {
        Some(surface) => open_stage(&mut commands, &mut images, &factory, surface),
        // Minimized at launch: `sync_surface` opens the stage on the first usable size
        None => warn!(
            width = window.width(),
            height = window.height(),
            "window too small to draw on yet"
        ),
    }
}

/// Re-initialize the scene and reallocate the canvas when the window size
/// changes; open the stage if startup could not.
pub fn sync_surface<S: Scene + Send + Sync + 'static>(
    mut commands: Commands,
    windows: Query<&Window, With<PrimaryWindow>>,
    stage: Option<ResMut<Stage<S>>>,
    factory: Res<SceneFactory<S>>,
    mut images: ResMut<Assets<Image>>,
    mut sprites: Query<&mut Sprite, With<CanvasSprite>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(surface) = window_surface(window) else {
        debug!("skipping resize to an empty window");
        return;
    };
    let Some(mut stage) = stage else {
        open_stage(&mut commands, &mut images, &factory, surface);
        return;
    };
    if surface == stage.driver.scene().surface() {
        return;
    }

    stage.driver.resize(surface);
    stage.canvas = PixelCanvas::for_surface(surface);
    let replacement = canvas_image(&stage.canvas);
    if let Some(existing) = images.get_mut(&stage.image) {
        *existing = replacement;
    }
    for mut sprite in &mut sprites {
        sprite.custom_size = Some(surface.size());
    }
}

/// Feed the cursor (window coordinates: top-left origin, +Y down) to the scene.
pub fn sync_pointer<S: Scene + Send + Sync + 'static>(
    windows: Query<&Window, With<PrimaryWindow>>,
    stage: Option<ResMut<Stage<S>>>,
) {
    let (Some(mut stage), Ok(window)) = (stage, windows.single()) else {
        return;
    };
    stage
        .driver
        .set_pointer(Pointer::from_cursor(window.cursor_position()));
}

/// One display refresh: run the due tick(s) into the canvas.
pub fn advance<S: Scene + Send + Sync + 'static>(stage: Option<ResMut<Stage<S>>>) {
    let Some(mut stage) = stage else {
        return;
    };
    let Stage { driver, canvas, .. } = &mut *stage;
    driver.pump(canvas);
}

/// Copy this frame's pixels into the sprite's image.
pub fn upload_canvas<S: Scene + Send + Sync + 'static>(
    stage: Option<Res<Stage<S>>>,
    mut images: ResMut<Assets<Image>>,
) {
    let Some(stage) = stage else {
        return;
    };
    let Some(image) = images.get_mut(&stage.image) else {
        return;
    };
    let bytes = stage.canvas.bytes();
    match &mut image.data {
        Some(data) if data.len() == bytes.len() => data.copy_from_slice(bytes),
        slot => *slot = Some(bytes.to_vec()),
    }
}

/// Native-only quit: press Esc or Q to exit the app.
/// (No-op on wasm32.)
pub fn exit_on_esc_or_q_if_native(
    keys: Res<ButtonInput<KeyCode>>,
    mut exit: MessageWriter<AppExit>,
) {
    if cfg!(not(target_arch = "wasm32")) && keys.any_just_pressed([KeyCode::Escape, KeyCode::KeyQ])
    {
        exit.write(AppExit::Success);
    }
}
