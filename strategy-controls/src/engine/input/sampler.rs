use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::input::SCROLL_UNITS_PER_NOTCH;
use std::hash::Hash;

/// State of one button for the current frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonSample {
    pub held: bool,
    pub just_pressed: bool,
    pub just_released: bool,
}

impl ButtonSample {
    pub fn read<T>(input: &ButtonInput<T>, button: T) -> Self
    where
        T: Copy + Eq + Hash + Send + Sync + 'static,
    {
        Self {
            held: input.pressed(button),
            just_pressed: input.just_pressed(button),
            just_released: input.just_released(button),
        }
    }
}

/// Snapshot of raw input for one tick. No interpretation beyond unit normalization.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct InputFrame {
    /// Keyboard axis: x = right, y = forward. Components in -1..=1, not normalized.
    pub move_axis: Vec2,
    /// Pointer position in viewport pixels, origin top-left. `None` when outside the window.
    pub pointer: Option<Vec2>,
    /// Pointer travel since the previous frame, in pixels.
    pub pointer_delta: Vec2,
    /// Vertical scroll in notch units of 120 per wheel click, positive away from the user.
    pub scroll: f32,
    pub screen_size: Vec2,
    pub pan: ButtonSample,
    pub rotate: ButtonSample,
    pub pick: ButtonSample,
    pub hold_pressed: bool,
    pub overlay_toggled: bool,
}

#[derive(Resource, Debug, Clone)]
pub struct InputBindings {
    pub forward: Vec<KeyCode>,
    pub back: Vec<KeyCode>,
    pub left: Vec<KeyCode>,
    pub right: Vec<KeyCode>,
    pub pan: MouseButton,
    pub rotate: MouseButton,
    pub pick: MouseButton,
    pub hold: KeyCode,
    pub overlay: KeyCode,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            forward: vec![KeyCode::KeyW, KeyCode::ArrowUp],
            back: vec![KeyCode::KeyS, KeyCode::ArrowDown],
            left: vec![KeyCode::KeyA, KeyCode::ArrowLeft],
            right: vec![KeyCode::KeyD, KeyCode::ArrowRight],
            pan: MouseButton::Middle,
            rotate: MouseButton::Right,
            pick: MouseButton::Left,
            hold: KeyCode::KeyH,
            overlay: KeyCode::F3,
        }
    }
}

pub fn movement_axis(keyboard: &ButtonInput<KeyCode>, bindings: &InputBindings) -> Vec2 {
    let held = |keys: &[KeyCode]| {
        if keyboard.any_pressed(keys.iter().copied()) {
            1.0
        } else {
            0.0
        }
    };
    Vec2::new(
        held(&bindings.right) - held(&bindings.left),
        held(&bindings.forward) - held(&bindings.back),
    )
}

/// Convert a wheel reading into notch units (120 per click).
pub fn scroll_units(unit: MouseScrollUnit, delta_y: f32) -> f32 {
    match unit {
        MouseScrollUnit::Line => delta_y * SCROLL_UNITS_PER_NOTCH,
        MouseScrollUnit::Pixel => delta_y,
    }
}

pub fn sample_input(
    mut frame: ResMut<InputFrame>,
    bindings: Res<InputBindings>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    scroll: Res<AccumulatedMouseScroll>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let (pointer, screen_size) = match windows.single() {
        Ok(window) => (
            window.cursor_position(),
            Vec2::new(window.width(), window.height()),
        ),
        Err(_) => (None, Vec2::ZERO),
    };

    *frame = InputFrame {
        move_axis: movement_axis(&keyboard, &bindings),
        pointer,
        pointer_delta: motion.delta,
        scroll: scroll_units(scroll.unit, scroll.delta.y),
        screen_size,
        pan: ButtonSample::read(&mouse_buttons, bindings.pan),
        rotate: ButtonSample::read(&mouse_buttons, bindings.rotate),
        pick: ButtonSample::read(&mouse_buttons, bindings.pick),
        hold_pressed: keyboard.just_pressed(bindings.hold),
        overlay_toggled: keyboard.just_pressed(bindings.overlay),
    };
}
