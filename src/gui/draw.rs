use super::{App, Config};
use eframe::egui::{
    load::SizedTexture, vec2, Button, ColorImage, Image, RichText, Slider, Stroke, TextureFilter,
    TextureOptions, TextureWrapMode, Ui, Vec2,
};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_simulation_controls(&mut self, ui: &mut Ui) {
        let text = if self.is_paused { "Play" } else { "Pause" };
        if ui.add(Self::new_button(text)).clicked() {
            self.is_paused = !self.is_paused;
        }

        if ui
            .add_enabled(self.is_paused, |ui: &mut Ui| {
                ui.add(Self::new_button("Next step"))
            })
            .clicked()
        {
            self.do_one_step = true;
        }

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Updates per second: "));
            ui.add(
                Slider::new(
                    &mut self.updates_per_second,
                    1.0..=Config::MAX_UPDATES_PER_SECOND,
                )
                .logarithmic(true),
            );
        });
    }

    fn draw_field_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if ui.add(Self::new_button("Reseed")).clicked() {
                self.reseed();
            }
            ui.label(Self::new_text(" with live probability: "));
        });
        ui.add(Slider::new(&mut self.live_probability, 0.0..=1.0));

        if ui.add(Self::new_button("Clear")).clicked() {
            self.clear();
        }
    }

    fn draw_stats(&mut self, ui: &mut Ui) {
        ui.label(Self::new_text(&format!("Generation: {}", self.generation)));
        ui.label(Self::new_text(&format!(
            "Population: {}",
            self.grid.population()
        )));
        ui.label(Self::new_text(&format!(
            "Last field update: {:.3} ms",
            self.last_update_duration * 1e3
        )));
        ui.label(Self::new_text(&format!(
            "FPS: {:3}",
            self.fps_limiter.fps().round() as u32
        )));
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            let aw = ui.available_width();

            ui.horizontal(|ui| {
                ui.group(|ui| {
                    ui.vertical(|ui| {
                        self.draw_simulation_controls(ui);

                        ui.add_space(Config::WIDGET_GAP);

                        self.draw_field_controls(ui);

                        ui.add_space(Config::WIDGET_GAP);

                        self.draw_stats(ui);
                    });

                    // to adjust the bounds
                    ui.add_space((Config::CONTROL_PANEL_WIDTH - aw + ui.available_width()).max(0.));
                });
            });
        });
    }

    fn draw_life_field(&mut self, ui: &mut Ui, size_px: Vec2) {
        let (width, height) = self.grid.size();
        let gray = self
            .grid
            .cells()
            .iter()
            .map(|&alive| if alive { u8::MAX } else { 0 })
            .collect::<Vec<_>>();
        let ci = ColorImage::from_gray([width, height], &gray);

        let texture_options = TextureOptions {
            magnification: TextureFilter::Nearest,
            minification: TextureFilter::Linear,
            wrap_mode: TextureWrapMode::ClampToEdge,
        };
        self.texture.set(ci, texture_options);

        let source = SizedTexture::new(self.texture.id(), size_px);
        let response = ui.add(Image::from_texture(source));
        self.field_rect.replace(response.rect);
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        let area = ui.available_size();
        let (width, height) = self.grid.size();

        // Scale the field to the space left of the control panel while
        // preserving the cell aspect ratio.
        let avail = vec2(
            area.x - Config::CONTROL_PANEL_WIDTH - Config::FRAME_MARGIN,
            area.y,
        );
        let scale = (avail.x / width as f32).min(avail.y / height as f32);
        let size_px = vec2(width as f32 * scale, height as f32 * scale);

        ui.horizontal(|ui| {
            self.draw_controls(ui);

            ui.add_space(ui.available_width() - size_px.x);

            ui.vertical_centered(|ui| {
                self.draw_life_field(ui, size_px);
            });
        });
    }
}
