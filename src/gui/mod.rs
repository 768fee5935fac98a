mod round_button;
mod theme;

use round_button::RoundButton;
pub use theme::Theme;

use crate::{
    clock::SystemClock,
    format::format_ms,
    laps::{LapRow, LapStyle},
    stopwatch::{LapControl, Stopwatch},
    ticker::{Scheduler, Ticker},
};

use anyhow::Result;
use eframe::{
    egui::{self, Align, Color32, Frame, Key, Layout, RichText, ScrollArea, Ui, Visuals},
    App, CreationContext,
};
use log::{debug, error};

use std::{
    sync::mpsc::{self, Receiver, Sender},
    time::Duration,
};

/// Message sent by the tick thread. Only its arrival matters.
pub struct Tick;

/// Schedules tick threads that wake the UI.
pub struct RepaintScheduler {
    ctx: egui::Context,
    tx: Sender<Tick>,
}

impl Scheduler for RepaintScheduler {
    type Handle = Ticker;

    fn schedule(&mut self, period: Duration) -> Result<Ticker> {
        let ctx = self.ctx.clone();
        let tx = self.tx.clone();
        Ticker::spawn(period, move || {
            // The receiver only goes away with the gui, which cancels us first
            if tx.send(Tick).is_ok() {
                ctx.request_repaint();
            }
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    StartStop,
    LapControl,
    None,
}

pub struct Gui {
    rx: Receiver<Tick>,
    stopwatch: Stopwatch<SystemClock, RepaintScheduler>,
    theme: Theme,
}

impl Gui {
    pub fn new(cc: &CreationContext<'_>, tick_period: Duration, theme: Theme) -> Gui {
        cc.egui_ctx.set_visuals(Visuals::dark());

        let (tx, rx) = mpsc::channel();
        let scheduler = RepaintScheduler {
            ctx: cc.egui_ctx.clone(),
            tx,
        };

        Gui {
            rx,
            stopwatch: Stopwatch::new(SystemClock::new(), scheduler, tick_period),
            theme,
        }
    }

    fn process_ticks(&mut self) {
        let mut ticked = false;
        while self.rx.try_recv().is_ok() {
            ticked = true;
        }

        if ticked {
            self.stopwatch.tick();
        }
    }

    fn handle_action(&mut self, action: Action) -> Result<()> {
        match action {
            Action::StartStop => self.stopwatch.press_start_stop()?,
            Action::LapControl => self.stopwatch.press_lap_control(),
            Action::None => (),
        }

        Ok(())
    }

    fn render(&mut self, ctx: &egui::Context) -> Result<()> {
        self.process_ticks();

        let mut action = keyboard_action(ctx);

        let frame = Frame::none()
            .fill(self.theme.background)
            .inner_margin(self.theme.margin);

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            let elapsed = self.stopwatch.elapsed_ms().unwrap_or(0);
            render_timer(ui, &self.theme, elapsed);

            let clicked = render_controls(
                ui,
                &self.theme,
                self.stopwatch.lap_control(),
                self.stopwatch.start_stop_label(),
                self.stopwatch.is_running(),
            );
            action = action.or(clicked);

            render_laps(ui, &self.theme, &self.stopwatch.lap_rows());
        });

        self.handle_action(action)
    }
}

impl App for Gui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Err(e) = self.render(ctx) {
            error!("{:?}", e);
        }
    }
}

impl Drop for Gui {
    fn drop(&mut self) {
        debug!("Stopwatch gui closing");
        self.stopwatch.stop();
    }
}

impl Action {
    /// Keeps `self` unless it is `None`. Keyboard input is resolved first, so a shortcut
    /// wins over a click in the same frame.
    fn or(self, other: Action) -> Action {
        match self {
            Action::None => other,
            _ => self,
        }
    }
}

fn keyboard_action(ctx: &egui::Context) -> Action {
    ctx.input(|input| action_for_keys(|key| input.key_pressed(key)))
}

fn action_for_keys(key_pressed: impl Fn(Key) -> bool) -> Action {
    if key_pressed(Key::Space) {
        Action::StartStop
    } else if key_pressed(Key::L) || key_pressed(Key::Enter) {
        Action::LapControl
    } else {
        Action::None
    }
}

fn render_timer(ui: &mut Ui, theme: &Theme, elapsed_ms: u64) {
    ui.add_space(ui.available_height() / 6.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(format_ms(elapsed_ms))
                .monospace()
                .size(theme.timer_font_size)
                .color(theme.text),
        );
    });
    ui.add_space(theme.margin * 2.0);
}

fn render_controls(
    ui: &mut Ui,
    theme: &Theme,
    lap_control: LapControl,
    start_stop_label: &str,
    running: bool,
) -> Action {
    let mut action = Action::None;

    ui.horizontal(|ui| {
        let lap_button = RoundButton::new(lap_control.label(), theme.control_diameter)
            .fill(theme.lap_fill)
            .border(theme.control_border_width, theme.lap_border)
            .text(theme.lap_text, theme.control_font_size)
            .pressed_fill(theme.pressed_underlay);
        if ui.add(lap_button).clicked() {
            action = Action::LapControl;
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let (fill, border, text) = if running {
                (theme.stop_fill, theme.stop_border, theme.stop_text)
            } else {
                (theme.start_fill, theme.start_border, theme.start_text)
            };

            let start_button = RoundButton::new(start_stop_label, theme.control_diameter)
                .fill(fill)
                .border(theme.control_border_width, border)
                .text(text, theme.control_font_size)
                .pressed_fill(theme.pressed_underlay);
            if ui.add(start_button).clicked() {
                action = Action::StartStop;
            }
        });
    });

    action
}

fn lap_color(theme: &Theme, style: LapStyle) -> Color32 {
    match style {
        LapStyle::Plain => theme.text,
        LapStyle::Fastest => theme.fastest_lap,
        LapStyle::Slowest => theme.slowest_lap,
    }
}

fn render_laps(ui: &mut Ui, theme: &Theme, rows: &[LapRow]) {
    ui.add_space(theme.margin);

    ScrollArea::vertical()
        .id_source("laps")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for row in rows {
                let color = lap_color(theme, row.style);
                ui.add_space(theme.lap_row_spacing);
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!("Lap {}", row.number))
                            .size(theme.lap_font_size)
                            .color(color),
                    );

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(
                            RichText::new(format_ms(row.value_ms))
                                .monospace()
                                .size(theme.lap_font_size)
                                .color(color),
                        );
                        ui.label(
                            RichText::new(format!("+{}", format_ms(row.split_ms)))
                                .monospace()
                                .size(theme.split_font_size)
                                .color(color),
                        );
                    });
                });
            }
        });
}
