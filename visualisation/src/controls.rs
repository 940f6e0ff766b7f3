use bounce_engine as be;
use crate::scenes::Scene;

/// What the panel asks of the main loop for the current frame
pub struct PanelOutcome {
    /// egui owns the pointer, don't forward presses to the world
    pub wants_pointer: bool,
    pub restart: bool,
}

pub struct SimControls {
    pub scene_idx: usize,
    pub paused: bool,
}

impl SimControls {
    pub fn new() -> Self {
        Self {
            scene_idx: 0,
            paused: false,
        }
    }

    /// Builds the tweak panel for this frame. The draw itself happens in
    /// `egui_macroquad::draw()` at the end of the frame.
    pub fn show(&mut self, world: &mut be::World, scenes: &[Box<dyn Scene>]) -> PanelOutcome {
        let mut outcome = PanelOutcome {
            wants_pointer: false,
            restart: false,
        };

        egui_macroquad::ui(|ctx| {
            egui::Window::new("Simulation").show(ctx, |ui| {
                egui::ComboBox::from_label("Scene")
                    .selected_text(scenes[self.scene_idx].name())
                    .show_ui(ui, |ui| {
                        for (idx, scene) in scenes.iter().enumerate() {
                            if ui
                                .selectable_value(&mut self.scene_idx, idx, scene.name())
                                .changed()
                            {
                                outcome.restart = true;
                            }
                        }
                    });

                ui.horizontal(|ui| {
                    let pause_label = if self.paused { "Resume" } else { "Pause" };
                    if ui.button(pause_label).clicked() {
                        self.paused = !self.paused;
                    }
                    if ui.button("Restart").clicked() {
                        outcome.restart = true;
                    }
                });

                let config = world.config_mut();
                ui.add(egui::Slider::new(&mut config.gravity.y, -20.0..=20.0).text("gravity"));
                ui.add(egui::Slider::new(&mut config.drag, 0.0..=5.0).text("drag"));
                ui.add(egui::Slider::new(&mut config.restitution, 0.0..=1.0).text("restitution"));

                ui.label(format!(
                    "{} bodies, {} fps",
                    world.bodies().len(),
                    macroquad::time::get_fps(),
                ));
            });

            outcome.wants_pointer = ctx.wants_pointer_input();
        });

        outcome
    }
}
