use crate::hud::status::{Alignment, HealthState, StatusRow, TeamPanel, TeamPanels};
use crate::players::classes::PlayerClass;
use crate::players::Team;
use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Vec2};

const ROW_WIDTH: f32 = 192.0;
const ROW_HEIGHT: f32 = 32.0;
const ROW_GAP: f32 = 1.0;
const SEPARATOR_HEIGHT: f32 = 8.0;
const TEXT_PADDING: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamColors {
    pub health_bar: Color32,
    pub health_overhealed: Color32,
    pub health_low: Color32,
}

pub fn team_colors(team: Team) -> TeamColors {
    match team {
        Team::Red => TeamColors {
            health_bar: Color32::from_rgb(184, 56, 59),
            health_overhealed: Color32::from_rgb(255, 210, 120),
            health_low: Color32::from_rgb(255, 90, 90),
        },
        Team::Blue => TeamColors {
            health_bar: Color32::from_rgb(88, 133, 162),
            health_overhealed: Color32::from_rgb(140, 230, 255),
            health_low: Color32::from_rgb(255, 90, 90),
        },
        Team::Spectator | Team::Unassigned => TeamColors {
            health_bar: Color32::from_gray(120),
            health_overhealed: Color32::WHITE,
            health_low: Color32::from_rgb(255, 90, 90),
        },
    }
}

/// Rectangle covering `width_percent` of `container`, growing from the
/// aligned edge.
pub fn bar_rect(container: Rect, width_percent: f32, alignment: Alignment) -> Rect {
    let width = container.width() * width_percent.clamp(0.0, 100.0) / 100.0;
    let size = Vec2::new(width, container.height());
    match alignment {
        Alignment::Left => Rect::from_min_size(container.min, size),
        Alignment::Right => {
            Rect::from_min_size(Pos2::new(container.max.x - width, container.min.y), size)
        }
    }
}

pub fn paint_team_panels(ctx: &egui::Context, panels: &TeamPanels) {
    show_panel(ctx, &panels.blue, "blue_status_panel", Align2::LEFT_TOP);
    show_panel(ctx, &panels.red, "red_status_panel", Align2::RIGHT_TOP);
}

fn show_panel(ctx: &egui::Context, panel: &TeamPanel, id: &str, anchor: Align2) {
    if panel.is_empty() {
        return;
    }
    egui::Area::new(egui::Id::new(id))
        .anchor(anchor, Vec2::ZERO)
        .interactable(false)
        .show(ctx, |ui| {
            ui.spacing_mut().item_spacing = Vec2::new(0.0, ROW_GAP);
            let layout = match panel.alignment {
                Alignment::Left => egui::Layout::top_down(egui::Align::Min),
                Alignment::Right => egui::Layout::top_down(egui::Align::Max),
            };
            ui.with_layout(layout, |ui| {
                let colors = team_colors(panel.team);
                for row in &panel.players {
                    paint_row(ui, row, panel.alignment, colors);
                }
                if panel.has_separator() {
                    ui.add_space(SEPARATOR_HEIGHT);
                }
                for row in &panel.charges {
                    paint_row(ui, row, panel.alignment, colors);
                }
            });
        });
}

fn paint_row(ui: &mut egui::Ui, row: &StatusRow, alignment: Alignment, colors: TeamColors) {
    let (rect, _) = ui.allocate_exact_size(Vec2::new(ROW_WIDTH, ROW_HEIGHT), Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, Color32::from_black_alpha(178));

    let (icon_rect, details) = match (row.class_id, alignment) {
        (None, _) => (None, rect),
        (Some(_), Alignment::Left) => {
            let icon = Rect::from_min_size(rect.min, Vec2::splat(ROW_HEIGHT));
            let rest = Rect::from_min_max(Pos2::new(icon.max.x, rect.min.y), rect.max);
            (Some(icon), rest)
        }
        (Some(_), Alignment::Right) => {
            let icon = Rect::from_min_size(
                Pos2::new(rect.max.x - ROW_HEIGHT, rect.min.y),
                Vec2::splat(ROW_HEIGHT),
            );
            let rest = Rect::from_min_max(rect.min, Pos2::new(icon.min.x, rect.max.y));
            (Some(icon), rest)
        }
    };

    if let (Some(icon), Some(class_id)) = (icon_rect, row.class_id) {
        painter.rect_filled(icon, 0.0, Color32::from_black_alpha(51));
        let label = PlayerClass::from_id(class_id)
            .map(PlayerClass::abbreviation)
            .unwrap_or("?");
        painter.text(
            icon.center(),
            Align2::CENTER_CENTER,
            label,
            FontId::monospace(10.0),
            Color32::WHITE,
        );
    }

    painter.rect_filled(
        bar_rect(details, row.fill_width(), alignment),
        0.0,
        colors.health_bar,
    );
    painter.rect_filled(
        bar_rect(details, row.overheal_width(), alignment),
        0.0,
        Color32::from_white_alpha(102),
    );

    let value_color = match row.health_state {
        HealthState::Normal => Color32::WHITE,
        HealthState::Overhealed => colors.health_overhealed,
        HealthState::Low => colors.health_low,
    };
    let font = FontId::monospace(14.0);
    let (name_pos, name_align, value_pos, value_align) = match alignment {
        Alignment::Left => (
            details.left_center() + Vec2::new(TEXT_PADDING, 0.0),
            Align2::LEFT_CENTER,
            details.right_center() - Vec2::new(TEXT_PADDING, 0.0),
            Align2::RIGHT_CENTER,
        ),
        Alignment::Right => (
            details.right_center() - Vec2::new(TEXT_PADDING, 0.0),
            Align2::RIGHT_CENTER,
            details.left_center() + Vec2::new(TEXT_PADDING, 0.0),
            Align2::LEFT_CENTER,
        ),
    };
    painter.text(name_pos, name_align, &row.name, font.clone(), Color32::WHITE);
    painter.text(
        value_pos,
        value_align,
        format!("{:.0}", row.value),
        font,
        value_color,
    );
}
