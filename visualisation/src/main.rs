mod controls;
mod draw_circle;
mod scenes;
mod simulation_renderer;

use bounce_engine as be;
use macroquad::prelude::*;
use log::info;

fn window_conf() -> Conf {
    Conf {
        window_title: "Bouncing balls".to_owned(),
        window_width: 800,
        window_height: 600,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")
        .expect("invalid RUST_LOG filter")
        .start()
        .expect("logger failed to start");

    let scenes = scenes::get_all_scenes();
    let mut controls = controls::SimControls::new();
    let mut world = scenes[controls.scene_idx].create_world();
    info!("starting with scene {:?}", scenes[controls.scene_idx].name());

    let mut last_mouse = Vec2::from(mouse_position());

    loop {
        // set_viewport is a no-op unless the window actually changed size
        world.set_viewport(screen_width(), screen_height());

        let outcome = controls.show(&mut world, &scenes);

        if is_key_pressed(KeyCode::Space) {
            controls.paused = !controls.paused;
        }
        if outcome.restart || is_key_pressed(KeyCode::R) {
            world = scenes[controls.scene_idx].create_world();
            world.set_viewport(screen_width(), screen_height());
            info!("switched to scene {:?}", scenes[controls.scene_idx].name());
        }

        let mouse = Vec2::from(mouse_position());
        let pointer = be::PointerSample {
            pixel: mouse,
            last_pixel: last_mouse,
            down: is_mouse_button_down(MouseButton::Left),
        };
        if is_mouse_button_pressed(MouseButton::Left) && !outcome.wants_pointer {
            world.pointer_pressed(mouse);
        }
        if is_mouse_button_released(MouseButton::Left) {
            world.pointer_released();
        }

        if !controls.paused {
            world.step(get_frame_time(), &pointer);
        }

        // Map NDC ([-aspect, aspect] x [-1, 1], y up) onto the window
        let aspect = screen_width() / screen_height();
        set_camera(&Camera2D {
            zoom: Vec2::new(1. / aspect, 1.),
            ..Default::default()
        });
        simulation_renderer::render_world(&world);

        set_default_camera();
        egui_macroquad::draw();

        last_mouse = mouse;
        next_frame().await;
    }
}
