//! Rendering plugin - draws the world's `Frame` with 2D meshes.
//!
//! Shapes are kept in a pool of mesh entities indexed by draw order. Each
//! frame the i-th draw command reuses the i-th entity, so nothing is spawned
//! once the pool has grown to the largest frame seen. Unused entities are
//! hidden.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::frame::{DrawCommand, Primitive};
use crate::core::{load_game_config, GameConfig};
use crate::world::GameWorld;

/// Depth step between consecutive draw commands.
const DEPTH_STEP: f32 = 0.1;

/// Rendering plugin - camera, window size and shape drawing.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ShapePool>()
            .add_systems(
                Startup,
                (
                    spawn_camera,
                    create_shape_meshes,
                    fit_window.after(load_game_config),
                ),
            )
            .add_systems(Update, draw_frame);
    }
}

/// Unit meshes every drawn shape is scaled from.
#[derive(Resource)]
pub struct ShapeMeshes {
    /// 1x1 square centred on the origin.
    pub quad: Handle<Mesh>,
    /// Upward triangle in the unit square centred on the origin.
    pub triangle: Handle<Mesh>,
    /// Radius 1 circle.
    pub circle: Handle<Mesh>,
}

impl ShapeMeshes {
    pub fn for_primitive(&self, primitive: &Primitive) -> &Handle<Mesh> {
        match primitive {
            Primitive::Quad(_) => &self.quad,
            Primitive::Triangle(_) => &self.triangle,
            Primitive::Circle { .. } => &self.circle,
        }
    }
}

/// Marker for pooled shape entities.
#[derive(Component)]
pub struct FrameShape;

struct PooledShape {
    entity: Entity,
    material: Handle<ColorMaterial>,
}

/// Shape entities in draw order.
#[derive(Resource, Default)]
pub struct ShapePool {
    shapes: Vec<PooledShape>,
}

impl ShapePool {
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn create_shape_meshes(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    commands.insert_resource(ShapeMeshes {
        quad: meshes.add(Rectangle::new(1.0, 1.0)),
        triangle: meshes.add(Triangle2d::new(
            Vec2::new(-0.5, -0.5),
            Vec2::new(0.5, -0.5),
            Vec2::new(0.0, 0.5),
        )),
        circle: meshes.add(Circle::new(1.0)),
    });
}

/// Size the primary window to the configured screen.
fn fit_window(
    config: Res<GameConfig>,
    mut window_query: Query<&mut Window, With<PrimaryWindow>>,
) {
    if let Ok(mut window) = window_query.get_single_mut() {
        window
            .resolution
            .set(config.window_width, config.window_height);
    }
}

/// Map a screen pixel (origin top-left, y down) to world space (origin
/// centre, y up).
pub fn screen_to_world(point: Vec2, config: &GameConfig) -> Vec2 {
    Vec2::new(
        point.x - config.window_width / 2.0,
        config.window_height / 2.0 - point.y,
    )
}

/// Transform that stretches the matching unit mesh over `primitive`.
pub fn shape_transform(primitive: &Primitive, depth: f32, config: &GameConfig) -> Transform {
    let (center, scale) = match primitive {
        Primitive::Quad(rect) | Primitive::Triangle(rect) => (rect.center(), rect.size()),
        Primitive::Circle { center, radius } => (*center, Vec2::splat(*radius)),
    };
    let position = screen_to_world(center, config);
    Transform::from_xyz(position.x, position.y, depth).with_scale(scale.extend(1.0))
}

/// Sync the shape pool with the world's current frame.
fn draw_frame(
    mut commands: Commands,
    world: Res<GameWorld>,
    meshes: Res<ShapeMeshes>,
    mut pool: ResMut<ShapePool>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut shapes: Query<(&mut Transform, &mut Visibility, &mut Mesh2d), With<FrameShape>>,
) {
    if !world.is_changed() && !pool.is_empty() {
        return;
    }

    let frame = world.render();
    let config = world.config();

    for (index, command) in frame.shapes.iter().enumerate() {
        let transform = shape_transform(&command.primitive, index as f32 * DEPTH_STEP, config);
        let mesh = meshes.for_primitive(&command.primitive);

        let Some(pooled) = pool.shapes.get(index) else {
            let material = materials.add(command.color);
            let entity = commands
                .spawn((
                    FrameShape,
                    Mesh2d(mesh.clone()),
                    MeshMaterial2d(material.clone()),
                    transform,
                    Visibility::Visible,
                ))
                .id();
            pool.shapes.push(PooledShape { entity, material });
            continue;
        };

        if let Ok((mut current, mut visibility, mut current_mesh)) = shapes.get_mut(pooled.entity) {
            *current = transform;
            *visibility = Visibility::Visible;
            if current_mesh.0 != *mesh {
                current_mesh.0 = mesh.clone();
            }
        }
        recolor(&mut materials, &pooled.material, command);
    }

    for pooled in pool.shapes.iter().skip(frame.shapes.len()) {
        if let Ok((_, mut visibility, _)) = shapes.get_mut(pooled.entity) {
            *visibility = Visibility::Hidden;
        }
    }
}

fn recolor(
    materials: &mut Assets<ColorMaterial>,
    handle: &Handle<ColorMaterial>,
    command: &DrawCommand,
) {
    let unchanged = materials
        .get(handle)
        .is_some_and(|material| material.color == command.color);
    if unchanged {
        return;
    }
    if let Some(material) = materials.get_mut(handle) {
        material.color = command.color;
    }
}
