//! In-game HUD - the score label.

use bevy::prelude::*;

use crate::rendering::TextCommand;
use crate::world::GameWorld;

/// Marker for the score text.
#[derive(Component)]
pub struct ScoreText;

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(Startup, spawn_hud)
        .add_systems(Update, update_score_text);
}

/// UI node placing a text command at its pixel position.
pub fn text_bundle(command: &TextCommand) -> (Text, TextFont, TextColor, Node) {
    (
        Text::new(command.content),
        TextFont {
            font_size: command.font_size,
            ..default()
        },
        TextColor(command.color),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(command.position.x),
            top: Val::Px(command.position.y),
            ..default()
        },
    )
}

/// Spawn the score label. Its content is filled in by `update_score_text`.
fn spawn_hud(mut commands: Commands) {
    let placeholder = TextCommand {
        content: "",
        position: Vec2::new(10.0, 10.0),
        font_size: crate::rendering::frame::SCORE_FONT_SIZE,
        color: crate::rendering::frame::SCORE_COLOR,
    };
    commands.spawn((text_bundle(&placeholder), ScoreText));
}

/// Rewrite the score label in place when the world's score text changed.
fn update_score_text(world: Res<GameWorld>, mut query: Query<&mut Text, With<ScoreText>>) {
    let Ok(mut text) = query.get_single_mut() else {
        return;
    };
    let label = world.score_label();
    if text.0 != label.content {
        text.0.clear();
        text.0.push_str(label.content);
    }
}
