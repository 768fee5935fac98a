use eframe::egui::{vec2, Align2, Color32, FontId, Response, Sense, Stroke, Ui, Widget};

/// Circular push button with a centered label. Shows an underlay color while held down.
#[must_use = "You should put this widget in an ui with `ui.add(widget);`"]
pub struct RoundButton<'a> {
    label: &'a str,
    diameter: f32,
    fill: Color32,
    border: Stroke,
    text_color: Color32,
    font_size: f32,
    pressed_fill: Color32,
}

impl<'a> RoundButton<'a> {
    pub fn new(label: &'a str, diameter: f32) -> Self {
        RoundButton {
            label,
            diameter,
            fill: Color32::DARK_GRAY,
            border: Stroke::new(2.0, Color32::BLACK),
            text_color: Color32::WHITE,
            font_size: 14.0,
            pressed_fill: Color32::GRAY,
        }
    }

    pub fn fill(mut self, fill: Color32) -> Self {
        self.fill = fill;
        self
    }

    pub fn border(mut self, width: f32, color: Color32) -> Self {
        self.border = Stroke::new(width, color);
        self
    }

    pub fn text(mut self, color: Color32, size: f32) -> Self {
        self.text_color = color;
        self.font_size = size;
        self
    }

    pub fn pressed_fill(mut self, color: Color32) -> Self {
        self.pressed_fill = color;
        self
    }
}

impl<'a> Widget for RoundButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let RoundButton {
            label,
            diameter,
            fill,
            border,
            text_color,
            font_size,
            pressed_fill,
        } = self;

        let (rect, response) = ui.allocate_exact_size(vec2(diameter, diameter), Sense::click());

        if ui.is_rect_visible(rect) {
            let visuals = ui.style().interact(&response);
            let fill = if response.is_pointer_button_down_on() {
                pressed_fill
            } else {
                fill
            };

            let radius = diameter / 2.0 + visuals.expansion - border.width / 2.0;
            let painter = ui.painter();
            painter.circle(rect.center(), radius, fill, border);
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                label,
                FontId::proportional(font_size),
                text_color,
            );
        }

        response
    }
}
