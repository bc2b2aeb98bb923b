use super::{Config, FpsLimiter};
use crate::Grid;
use eframe::egui::{
    CentralPanel, Color32, ColorImage, Context, Frame, Key, Margin, Rect, TextureHandle,
    TextureOptions,
};
use std::time::Instant;

pub struct App {
    pub(super) grid: Grid,                // Current generation of the field.
    pub(super) is_paused: bool,           // Whether the simulation is paused.
    pub(super) do_one_step: bool,         // Advance one generation and pause.
    pub(super) generation: u64,           // Generations since the last reseed.
    pub(super) last_update_duration: f64, // Duration of the last step in seconds.
    pub(super) live_probability: f64,     // Fill rate used when reseeding.
    pub(super) updates_per_second: f64,   // Target generation rate while running.
    pub(super) texture: TextureHandle,    // Texture the field is rendered into.
    pub(super) field_rect: Option<Rect>,  // Part of the window displaying the field.
    pub(super) fps_limiter: FpsLimiter,   // Limits the frame rate to the generation rate.
}

impl App {
    pub fn new(ctx: &Context) -> Self {
        let grid = Grid::random(
            Config::GRID_WIDTH,
            Config::GRID_HEIGHT,
            Config::DEFAULT_LIVE_PROBABILITY,
            None,
        )
        .expect("startup field dimensions and probability are valid");
        log::info!(
            "seeded {}x{} field with live probability {}",
            Config::GRID_WIDTH,
            Config::GRID_HEIGHT,
            Config::DEFAULT_LIVE_PROBABILITY
        );

        Self {
            grid,
            is_paused: false,
            do_one_step: false,
            generation: 0,
            last_update_duration: 0.,
            live_probability: Config::DEFAULT_LIVE_PROBABILITY,
            updates_per_second: Config::DEFAULT_UPDATES_PER_SECOND,
            texture: ctx.load_texture(
                "life field",
                ColorImage::default(),
                TextureOptions::default(),
            ),
            field_rect: None,
            fps_limiter: FpsLimiter::default(),
        }
    }

    pub(super) fn reseed(&mut self) {
        match Grid::random(
            self.grid.width(),
            self.grid.height(),
            self.live_probability,
            None,
        ) {
            Ok(grid) => {
                self.grid = grid;
                self.generation = 0;
                log::debug!("reseeded field with live probability {}", self.live_probability);
            }
            Err(err) => log::error!("reseed failed: {err}"),
        }
    }

    pub(super) fn clear(&mut self) {
        match Grid::blank(self.grid.width(), self.grid.height()) {
            Ok(grid) => {
                self.grid = grid;
                self.generation = 0;
            }
            Err(err) => log::error!("clear failed: {err}"),
        }
    }

    fn update_field(&mut self) {
        if self.is_paused && !self.do_one_step {
            return;
        }

        let timer = Instant::now();
        self.grid.advance(1);
        self.last_update_duration = timer.elapsed().as_secs_f64();

        self.generation += 1;
        self.do_one_step = false;
    }

    fn handle_input(&mut self, ctx: &Context, field_rect: Rect) {
        ctx.input(|input| {
            if let Some(pos) = input.pointer.latest_pos() {
                // cell editing is only available while paused
                if field_rect.contains(pos) && input.pointer.primary_clicked() && self.is_paused {
                    let p = (pos - field_rect.left_top()) / field_rect.size();
                    let x = ((p.x * self.grid.width() as f32) as usize).min(self.grid.width() - 1);
                    let y =
                        ((p.y * self.grid.height() as f32) as usize).min(self.grid.height() - 1);
                    self.grid.set_cell(x, y, !self.grid.get_cell(x, y));
                }
            }
            if input.key_pressed(Key::Space) {
                self.do_one_step = true;
            }
            if input.key_pressed(Key::E) && !input.modifiers.ctrl {
                self.is_paused = !self.is_paused;
            }
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| {
                ctx.request_repaint();

                if let Some(field_rect) = self.field_rect {
                    self.handle_input(ctx, field_rect);
                }

                self.draw(ui);

                self.update_field();
            });

        self.fps_limiter.sleep(self.updates_per_second);
    }
}
