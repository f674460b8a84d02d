//! Main application for the Omok GUI

use std::time::{Duration, Instant};

use egui::{Align2, CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use log::{debug, info};
use rand::Rng;

use super::board_view::BoardView;
use super::theme::*;
use crate::config::{TIMER_CRITICAL_SECS, TIMER_WARNING_SECS};
use crate::{EngineEvent, GameEngine, MoveOutcome, MoveSource, Outcome, Pos, Stone};

/// Repaint cadence while a clock is running
const FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    MainMenu,
    InGame,
    /// Board stays visible under the announcement window
    GameOver(Outcome),
}

/// Main Omok application
pub struct OmokApp {
    state: AppState,
    /// Only present while a game is on screen
    engine: Option<GameEngine>,
    board_view: BoardView,
    winning_line: Option<Vec<Pos>>,
    last_frame: Option<Instant>,
    seed: Option<u64>,
}

impl OmokApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, seed: Option<u64>) -> Self {
        Self {
            state: AppState::MainMenu,
            engine: None,
            board_view: BoardView::default(),
            winning_line: None,
            last_frame: None,
            seed,
        }
    }

    fn start_game(&mut self) {
        let engine = match self.seed {
            Some(seed) => GameEngine::seeded(seed),
            None => GameEngine::new(),
        };
        info!("game started");
        self.engine = Some(engine);
        self.winning_line = None;
        self.last_frame = Some(Instant::now());
        self.state = AppState::InGame;
    }

    /// Clear the board and play again without leaving the game screen
    fn restart_game(&mut self) {
        match self.engine.as_mut() {
            Some(engine) => engine.reset(),
            None => return self.start_game(),
        }
        self.winning_line = None;
        self.last_frame = Some(Instant::now());
        self.state = AppState::InGame;
    }

    fn return_to_menu(&mut self) {
        self.engine = None;
        self.winning_line = None;
        self.last_frame = None;
        self.state = AppState::MainMenu;
    }

    /// React to an engine result; only game-ending outcomes change the screen
    fn handle_outcome(&mut self, outcome: MoveOutcome) {
        match outcome {
            MoveOutcome::Won { stone, line, .. } => {
                self.winning_line = Some(line);
                self.state = AppState::GameOver(Outcome::Win(stone));
            }
            MoveOutcome::Drawn { .. } => {
                self.state = AppState::GameOver(Outcome::Draw);
            }
            MoveOutcome::Ignored(err) => debug!("click ignored: {}", err),
            MoveOutcome::Placed { .. } | MoveOutcome::NotInProgress => {}
        }
    }

    /// Forward this frame's click and elapsed time to the engine
    fn drive_frame(&mut self, click: Option<(i32, i32)>) {
        let now = Instant::now();
        let elapsed = self.last_frame.map_or(Duration::ZERO, |t| now - t);
        self.last_frame = Some(now);

        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        for outcome in play_frame(engine, click, elapsed) {
            self.handle_outcome(outcome);
        }
    }

    /// Render the title screen
    fn render_main_menu(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.2);
                    ui.label(RichText::new("●○").size(36.0).color(STATUS_WHITE));
                    ui.label(RichText::new("OMOK").size(40.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new("Five in a row").size(14.0).color(TEXT_MUTED));
                    ui.add_space(48.0);

                    let button = |text: &str| {
                        egui::Button::new(RichText::new(text).size(18.0).color(TEXT_PRIMARY))
                            .min_size(Vec2::from(MENU_BUTTON_SIZE))
                    };

                    if ui.add(button("Start game")).clicked() {
                        self.start_game();
                    }
                    ui.add_space(12.0);
                    if ui.add(button("Quit")).clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.restart_game();
                        ui.close_menu();
                    }
                    if ui.button("Main Menu (Esc)").clicked() {
                        self.return_to_menu();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        ui.close_menu();
                    }
                });
            });
        });
    }

    /// Render the side panel with turn and clock
    fn render_side_panel(&self, ctx: &Context) {
        let Some(engine) = self.engine.as_ref() else {
            return;
        };
        let over = matches!(self.state, AppState::GameOver(_));

        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                Self::render_title_card(ui);
                ui.add_space(12.0);
                Self::render_turn_card(ui, engine.current_player(), over);
                ui.add_space(10.0);
                Self::render_timer_card(ui, engine, over);
                ui.add_space(10.0);
                Self::card_frame().show(ui, |ui| {
                    ui.label(
                        RichText::new(format!("Move #{}", engine.move_count()))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                });
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(egui::Color32::from_rgb(180, 180, 185)));
            ui.add_space(4.0);
            ui.label(RichText::new("OMOK").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(ui: &mut egui::Ui, turn: Stone, over: bool) {
        Self::card_frame().show(ui, |ui| {
            let (stone_char, accent, glyph) = match turn {
                Stone::Black => ("●", STATUS_BLACK, TEXT_PRIMARY),
                Stone::White => ("○", STATUS_WHITE, egui::Color32::from_rgb(30, 30, 35)),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(28.0),
                    glyph,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(turn.name().to_uppercase())
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    let (status, color) = if over {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else {
                        ("To move", TIMER_NORMAL)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });
        });
    }

    /// Render the countdown
    fn render_timer_card(ui: &mut egui::Ui, engine: &GameEngine, over: bool) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("⏱ TIME LEFT").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let remaining = engine.remaining_secs();
            let color = if over {
                TEXT_MUTED
            } else if remaining <= TIMER_CRITICAL_SECS {
                TIMER_CRITICAL
            } else if remaining <= TIMER_WARNING_SECS {
                TIMER_WARNING
            } else {
                TIMER_NORMAL
            };

            ui.label(RichText::new(format!("{}s", remaining)).size(28.0).strong().color(color));
            ui.add_space(4.0);
            ui.add(
                egui::ProgressBar::new(engine.timer().fraction_left())
                    .fill(color)
                    .desired_height(6.0),
            );
        });
    }

    /// Announce the result; the game resets once the window is dismissed
    fn render_game_over_window(&mut self, ctx: &Context, outcome: Outcome) {
        let headline = match outcome {
            Outcome::Win(winner) => format!("{} wins!", winner),
            Outcome::Draw => "Draw - the board is full".to_string(),
        };

        let mut play_again = false;
        let mut to_menu = false;

        egui::Window::new("Game Over")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(22.0).strong());
                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        play_again = ui.button("Play again").clicked();
                        to_menu = ui.button("Main menu").clicked();
                    });
                });
            });

        if play_again {
            self.restart_game();
        } else if to_menu {
            self.return_to_menu();
        }
    }

    /// Render the main board and return the clicked intersection
    fn render_board(&mut self, ctx: &Context) -> Option<(i32, i32)> {
        let accept_input = self.state == AppState::InGame;
        let mut clicked = None;

        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_AREA_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                let Some(engine) = self.engine.as_ref() else {
                    return;
                };
                clicked = self.board_view.show(
                    ui,
                    engine.board(),
                    engine.current_player(),
                    engine.last_move(),
                    self.winning_line.as_deref(),
                    accept_input,
                );
            });

        clicked
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, escape) = ctx.input(|i| (i.key_pressed(egui::Key::N), i.key_pressed(egui::Key::Escape)));

        if new_game {
            self.restart_game();
        } else if escape && self.state != AppState::MainMenu {
            self.return_to_menu();
        }
    }
}

/// Apply one frame of input to the engine.
///
/// The click is handled before the clock so a move made in the same frame
/// the clock runs out wins over the timeout. An accepted click starts a new
/// turn, and the elapsed time belonged to the turn it ended, so the clock is
/// not advanced in that case.
fn play_frame<R: Rng>(
    engine: &mut GameEngine<R>,
    click: Option<(i32, i32)>,
    elapsed: Duration,
) -> Vec<MoveOutcome> {
    let mut outcomes = Vec::new();

    if let Some((row, col)) = click {
        let outcome = engine.request_move(MoveSource::User { row, col });
        let placed = outcome.placed().is_some();
        outcomes.push(outcome);
        if placed {
            return outcomes;
        }
    }

    for event in engine.advance(elapsed) {
        if let EngineEvent::TimedOut(outcome) = event {
            outcomes.push(outcome);
        }
    }
    outcomes
}

impl eframe::App for OmokApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        match self.state {
            AppState::MainMenu => self.render_main_menu(ctx),
            AppState::InGame => {
                self.render_menu_bar(ctx);
                self.render_side_panel(ctx);
                let click = self.render_board(ctx);
                self.drive_frame(click);
                if click.is_some() {
                    ctx.request_repaint();
                } else {
                    ctx.request_repaint_after(FRAME_INTERVAL);
                }
            }
            AppState::GameOver(outcome) => {
                self.render_menu_bar(ctx);
                self.render_side_panel(ctx);
                self.render_board(ctx);
                self.render_game_over_window(ctx, outcome);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_click_beats_expiring_clock() {
        let mut engine = GameEngine::seeded(8);
        engine.advance(Duration::from_secs(29));
        assert_eq!(engine.remaining_secs(), 1);

        let outcomes = play_frame(&mut engine, Some((3, 3)), Duration::from_millis(950));
        assert_eq!(
            outcomes,
            vec![MoveOutcome::Placed {
                pos: Pos::new(3, 3),
                stone: Stone::Black,
                next: Stone::White,
            }]
        );
        assert_eq!(engine.board().stone_count(), 1);
        assert_eq!(engine.board().get(Pos::new(3, 3)), Some(Stone::Black));
        assert_eq!(engine.current_player(), Stone::White);
        assert_eq!(engine.remaining_secs(), 30);
    }

    #[test]
    fn test_ignored_click_lets_clock_expire() {
        let mut engine = GameEngine::seeded(8);
        engine.request_move(MoveSource::User { row: 3, col: 3 });
        engine.advance(Duration::from_secs(29));

        // White clicks the occupied cell while the clock runs out
        let outcomes = play_frame(&mut engine, Some((3, 3)), Duration::from_secs(1));
        assert_eq!(outcomes.len(), 2);
        assert!(matches!(outcomes[0], MoveOutcome::Ignored(_)));
        assert_eq!(outcomes[1].placed().map(|(_, stone)| stone), Some(Stone::White));
        assert_eq!(engine.board().stone_count(), 2);
        assert_eq!(engine.current_player(), Stone::Black);
    }

    #[test]
    fn test_frame_without_click_only_advances() {
        let mut engine = GameEngine::seeded(8);
        assert!(play_frame(&mut engine, None, Duration::from_secs(5)).is_empty());
        assert_eq!(engine.remaining_secs(), 25);
        assert_eq!(engine.board(), &Board::new());
    }
}
