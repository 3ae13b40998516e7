//! Main application for the Pente GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, ScrollArea, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardScene, BoardView};
use super::game_state::GameState;
use super::theme::*;
use crate::game::{MatchConfig, Player, PlayerKind, TournamentResult};
use crate::rules::WINNING_CAPTURES;
use crate::Stone;

/// Main Pente application
pub struct PenteApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl PenteApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: MatchConfig) -> Self {
        Self {
            state: GameState::new(config),
            board_view: BoardView::default(),
            show_debug: false,
        }
    }

    fn save(&mut self) {
        if let Err(err) = self.state.save_game() {
            self.state.message = Some(err.to_string());
        }
    }

    fn load(&mut self) {
        if let Err(err) = self.state.load_game() {
            self.state.message = Some(err.to_string());
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Tournament").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Save Game").clicked() {
                        self.save();
                        ui.close_menu();
                    }
                    if ui.button("Load Game").clicked() {
                        self.load();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("End Tournament").clicked() {
                        self.state.quit_tournament();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Decision Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("You: {}", self.state.human_colour()));
                });
            });
        });
    }

    /// Render the side panel with scores, actions and the log
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(260.0)
            .max_width(300.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                let state = self.state.controller.state();
                let (human, computer) = (*state.human(), *state.computer());
                self.render_player_card(ui, &human);
                ui.add_space(6.0);
                self.render_player_card(ui, &computer);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(result) = self.state.final_result {
                    ui.add_space(10.0);
                    self.render_tournament_card(ui, result);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    self.render_message_card(ui, msg);
                }

                ui.add_space(10.0);
                self.render_log_card(ui);
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("PENTE").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Whose turn it is, or how the round ended
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let controller = &self.state.controller;
            let active = controller.state().active;
            let (stone_char, accent, ink) = if active == Stone::Black {
                ("●", STATUS_BLACK, TEXT_PRIMARY)
            } else {
                ("○", STATUS_WHITE, BLACK_STONE)
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(28.0),
                    ink,
                );
                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    let mover = controller.active_kind();
                    ui.label(
                        RichText::new(format!("{mover} - {active}"))
                            .size(16.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let status = if let Some(winner) = controller.state().winner() {
                        (format!("{winner} won the round"), WIN_HIGHLIGHT)
                    } else if controller.is_round_over() {
                        ("Round drawn".to_string(), TIMER_WARNING)
                    } else if self.state.is_ai_thinking() {
                        let secs = self
                            .state
                            .ai_thinking_elapsed()
                            .map_or(0.0, |d| d.as_secs_f32());
                        (format!("Computer thinking... {secs:.1}s"), TIMER_WARNING)
                    } else if self.state.is_human_turn() {
                        let secs = self.state.move_timer.elapsed().as_secs_f32();
                        (format!("Your turn ({secs:.0}s)"), TIMER_NORMAL)
                    } else {
                        ("Waiting".to_string(), TEXT_MUTED)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Points and captures for one side
    fn render_player_card(&self, ui: &mut egui::Ui, player: &Player) {
        Self::card_frame().show(ui, |ui| {
            let symbol = if player.colour == Stone::Black { "●" } else { "○" };
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("{symbol} {}", player.kind))
                        .size(14.0)
                        .strong()
                        .color(TEXT_PRIMARY),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("Tournament {}", player.tournament_points))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                });
            });
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Round points: {}", player.round_points))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );

            ui.horizontal(|ui| {
                for i in 0..WINNING_CAPTURES {
                    let color = if i < player.capture_points {
                        if player.capture_points + 1 >= WINNING_CAPTURES {
                            TIMER_WARNING
                        } else {
                            TEXT_PRIMARY
                        }
                    } else {
                        TEXT_MUTED
                    };
                    ui.label(RichText::new("◆").size(14.0).color(color));
                }
                ui.label(
                    RichText::new(format!("{}/{} pairs", player.capture_points, WINNING_CAPTURES))
                        .size(11.0)
                        .color(TEXT_SECONDARY),
                );
            });
        });
    }

    fn action_button(ui: &mut egui::Ui, text: &str, enabled: bool) -> bool {
        let color = if enabled { TEXT_PRIMARY } else { TEXT_MUTED };
        Frame::new()
            .fill(BUTTON_BG)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(8.0)
            .show(ui, |ui| {
                let label = egui::Label::new(RichText::new(text).size(12.0).color(color))
                    .sense(egui::Sense::click());
                ui.add(label).clicked() && enabled
            })
            .inner
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let can_hint = self.state.is_human_turn() && !self.state.is_ai_thinking();
            let can_advance = self.state.is_round_over() && self.state.final_result.is_none();
            ui.horizontal(|ui| {
                if Self::action_button(ui, "Hint (H)", can_hint) {
                    self.state.request_hint();
                }
                if Self::action_button(ui, "Next Round (N)", can_advance) {
                    self.state.next_round();
                }
            });
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                let idle = !self.state.is_ai_thinking();
                if Self::action_button(ui, "Save", idle) {
                    self.save();
                }
                if Self::action_button(ui, "Load", idle) {
                    self.load();
                }
                if Self::action_button(ui, "End", idle && self.state.final_result.is_none()) {
                    self.state.quit_tournament();
                }
            });
        });
    }

    /// Why the computer played its last move
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("LAST DECISION").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.state.last_ai_result else {
                ui.label(RichText::new("No computer move yet").size(10.0).color(TEXT_MUTED));
                return;
            };
            ui.label(
                RichText::new(format!("{:?}", result.reason))
                    .size(11.0)
                    .strong()
                    .color(TIMER_NORMAL),
            );
            ui.label(
                RichText::new(format!("Value {}  |  {}ms", result.value, result.time_ms))
                    .size(10.0)
                    .color(TEXT_SECONDARY),
            );
            ui.label(
                RichText::new(format!("→ {}", result.best_move))
                    .size(12.0)
                    .strong()
                    .color(WIN_HIGHLIGHT),
            );
            if let Some(elapsed) = self.state.move_timer.ai_thinking_time {
                ui.label(
                    RichText::new(format!("Round trip {:.3}s", elapsed.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_MUTED),
                );
            }
        });
    }

    fn render_tournament_card(&self, ui: &mut egui::Ui, result: TournamentResult) {
        let headline = match result {
            TournamentResult::Winner { kind: PlayerKind::Human, .. } => "YOU WIN",
            TournamentResult::Winner { .. } => "COMPUTER WINS",
            TournamentResult::Draw { .. } => "DRAW",
        };
        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("TOURNAMENT OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(6.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(WIN_HIGHLIGHT));
                    ui.label(RichText::new(result.to_string()).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    fn render_log_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("LOG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ScrollArea::vertical()
                .stick_to_bottom(true)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for line in &self.state.log {
                        ui.label(RichText::new(line).size(11.0).color(TEXT_SECONDARY));
                    }
                });
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let scene = BoardScene {
                board: &self.state.controller.state().board,
                human_colour: self.state.human_colour(),
                last_move: self.state.last_move,
                captured: &self.state.last_captured,
                hint: self.state.hint.map(|h| h.best_move),
                second_move_zone: self.state.second_move_pending(),
                accepting_input: self.state.is_human_turn() && !self.state.is_ai_thinking(),
            };
            let clicked = self.board_view.show(ui, &scene);

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.try_place_stone(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (debug, hint, next) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::H),
                i.key_pressed(egui::Key::N),
            )
        });
        if debug {
            self.show_debug = !self.show_debug;
        }
        if hint && self.state.is_human_turn() {
            self.state.request_hint();
        }
        if next {
            self.state.next_round();
        }
    }
}

impl eframe::App for PenteApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();
        if self.state.is_ai_turn() && !self.state.is_ai_thinking() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() || self.state.is_human_turn() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
