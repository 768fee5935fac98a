use eframe::egui::Color32;

/// Colors and sizes for the stopwatch screen.
#[derive(Clone, Debug)]
pub struct Theme {
    pub background: Color32,
    pub text: Color32,
    pub margin: f32,

    pub timer_font_size: f32,
    pub lap_font_size: f32,
    pub split_font_size: f32,
    pub lap_row_spacing: f32,
    pub fastest_lap: Color32,
    pub slowest_lap: Color32,

    pub control_diameter: f32,
    pub control_border_width: f32,
    pub control_font_size: f32,
    pub pressed_underlay: Color32,

    pub lap_fill: Color32,
    pub lap_border: Color32,
    pub lap_text: Color32,

    pub start_fill: Color32,
    pub start_border: Color32,
    pub start_text: Color32,

    pub stop_fill: Color32,
    pub stop_border: Color32,
    pub stop_text: Color32,
}

impl Default for Theme {
    fn default() -> Theme {
        Theme {
            background: Color32::BLACK,
            text: Color32::WHITE,
            margin: 10.0,

            timer_font_size: 60.0,
            lap_font_size: 30.0,
            split_font_size: 16.0,
            lap_row_spacing: 10.0,
            fastest_lap: Color32::from_rgb(0, 200, 0),
            slowest_lap: Color32::RED,

            control_diameter: 60.0,
            control_border_width: 2.0,
            control_font_size: 14.0,
            pressed_underlay: Color32::GRAY,

            lap_fill: Color32::DARK_GRAY,
            lap_border: Color32::BLACK,
            lap_text: Color32::WHITE,

            start_fill: Color32::from_rgba_unmultiplied(0, 100, 0, 128),
            start_border: Color32::from_rgba_unmultiplied(0, 200, 0, 128),
            start_text: Color32::from_rgba_unmultiplied(0, 200, 0, 128),

            stop_fill: Color32::from_rgba_unmultiplied(255, 0, 0, 128),
            stop_border: Color32::from_rgba_unmultiplied(255, 0, 0, 128),
            stop_text: Color32::RED,
        }
    }
}
