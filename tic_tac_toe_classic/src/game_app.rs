use crate::game_session::{GameSession, Mark, Outcome};

use eframe::egui;
use tracing::error;

const ACCENT: egui::Color32 = egui::Color32::from_rgb(0x21, 0x96, 0xf3);
const INK: egui::Color32 = egui::Color32::BLACK;
const PAPER: egui::Color32 = egui::Color32::WHITE;

const CELL_SIZE: f32 = 80.0;

/// Top status line: whose turn it is, or the final result.
pub fn status_text(outcome: Outcome, turn: Mark) -> String {
    match outcome {
        Outcome::InProgress => format!("Current: Player {turn}"),
        Outcome::Win(mark) => format!("Player {mark} wins!"),
        Outcome::Draw => "It's a draw!".to_string(),
    }
}

/// Banner under the board, only shown once the game is decided.
pub fn result_banner(outcome: Outcome) -> Option<String> {
    match outcome {
        Outcome::InProgress => None,
        Outcome::Win(mark) => Some(format!("Congratulations! Player {mark} wins.")),
        Outcome::Draw => Some("It's a draw! Try again.".to_string()),
    }
}

/// 1-based label used as hover text for a cell button.
pub fn cell_label(index: usize) -> String {
    format!("Cell {}", index + 1)
}

#[derive(Default)]
pub struct GameApp {
    session: GameSession,
}

impl GameApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::default()
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Forwards a cell click to the session.
    pub fn click_cell(&mut self, index: usize) {
        if let Err(e) = self.session.play(index) {
            error!("❌ Click not applied: {}", e);
        }
    }

    pub fn click_reset(&mut self) {
        self.session.reset();
    }

    fn handle_game_ui(&mut self, ui: &mut egui::Ui) {
        let outcome = self.session.outcome();

        ui.vertical_centered(|ui| {
            ui.add_space(20.0);

            ui.label(
                egui::RichText::new(status_text(outcome, self.session.turn()))
                    .size(22.0)
                    .strong()
                    .color(if outcome.is_over() { ACCENT } else { INK }),
            );

            ui.add_space(20.0);

            self.render_board(ui, outcome);

            ui.add_space(20.0);

            if let Some(banner) = result_banner(outcome) {
                ui.label(egui::RichText::new(banner).size(16.0).color(ACCENT));
                ui.add_space(10.0);
            }

            if ui
                .add(
                    egui::Button::new(
                        egui::RichText::new("Reset Game")
                            .size(16.0)
                            .strong()
                            .color(PAPER),
                    )
                    .fill(ACCENT)
                    .min_size(egui::vec2(120.0, 32.0)),
                )
                .clicked()
            {
                self.click_reset();
            }
        });
    }

    fn render_board(&mut self, ui: &mut egui::Ui, outcome: Outcome) {
        let board = *self.session.board();
        let mut clicked = None;

        egui::Frame::none()
            .fill(ACCENT)
            .rounding(12.0)
            .inner_margin(4.0)
            .show(ui, |ui| {
                ui.spacing_mut().item_spacing = egui::vec2(4.0, 4.0);
                egui::Grid::new("board").spacing([4.0, 4.0]).show(ui, |ui| {
                    for (index, cell) in board.iter().enumerate() {
                        let can_move = !outcome.is_over() && cell.is_none();

                        let text = match cell {
                            Some(Mark::X) => egui::RichText::new("X").color(ACCENT),
                            Some(Mark::O) => egui::RichText::new("O").color(INK),
                            None => egui::RichText::new(" "),
                        };
                        let stroke_color = if *cell == Some(Mark::O) { INK } else { ACCENT };

                        let button = ui
                            .add_enabled(
                                can_move,
                                egui::Button::new(text.size(40.0).strong().monospace())
                                    .fill(PAPER)
                                    .stroke(egui::Stroke::new(2.0, stroke_color))
                                    .min_size(egui::vec2(CELL_SIZE, CELL_SIZE)),
                            )
                            .on_hover_text(cell_label(index));

                        if button.clicked() && can_move {
                            clicked = Some(index);
                        }

                        if index % 3 == 2 {
                            ui.end_row();
                        }
                    }
                });
            });

        if let Some(index) = clicked {
            self.click_cell(index);
        }
    }
}

impl eframe::App for GameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).fill(PAPER))
            .show(ctx, |ui| {
                self.handle_game_ui(ui);
            });
    }
}
