use client_core::Severity;
use egui::Color32;
use shared::domain::Disc;

pub const BOARD_GREEN: Color32 = Color32::from_rgb(0x1b, 0x5e, 0x20);
pub const GRID_LINE: Color32 = Color32::from_rgb(0x0d, 0x3b, 0x12);
pub const LEGAL_MARK: Color32 = Color32::from_rgb(0xa5, 0xd6, 0xa7);
pub const ACCENT: Color32 = Color32::from_rgb(0xe9, 0x45, 0x60);
pub const INFO_TEXT: Color32 = Color32::from_rgb(0xff, 0xad, 0xb8);
pub const ERROR_TEXT: Color32 = Color32::RED;

pub fn disc_color(disc: Disc) -> Color32 {
    match disc {
        Disc::Black => Color32::from_gray(20),
        Disc::White => Color32::from_gray(240),
    }
}

pub fn message_color(severity: Severity) -> Color32 {
    match severity {
        Severity::Info => INFO_TEXT,
        Severity::Error => ERROR_TEXT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_are_red_and_info_is_accented() {
        assert_eq!(message_color(Severity::Error), Color32::RED);
        assert_eq!(message_color(Severity::Info), INFO_TEXT);
    }

    #[test]
    fn discs_are_distinguishable() {
        assert_ne!(disc_color(Disc::Black), disc_color(Disc::White));
    }
}
