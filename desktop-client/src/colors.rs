use common::games::sos::PlayerColor;
use eframe::egui::Color32;

pub fn player_color(color: PlayerColor) -> Color32 {
    match color {
        PlayerColor::Blue => Color32::from_rgb(50, 90, 220),
        PlayerColor::Red => Color32::from_rgb(220, 50, 50),
    }
}
