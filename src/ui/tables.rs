use ratatui::{
    layout::Constraint,
    style::{Color, Modifier, Style},
    widgets::{Cell, Row},
};

pub(super) struct ColumnDef {
    pub name: &'static str,
    pub width: u16,
    pub priority: u8,
}

/// Indices of the columns that fit in `available_width`, dropping the
/// highest priority numbers first.
pub(super) fn visible_columns(columns: &[ColumnDef], available_width: u16) -> Vec<usize> {
    let max_priority = columns.iter().map(|c| c.priority).max().unwrap_or(1);
    let mut visible: Vec<usize> = Vec::new();
    for priority_cutoff in 1..=max_priority {
        let candidate: Vec<usize> = columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.priority <= priority_cutoff)
            .map(|(i, _)| i)
            .collect();
        let total_width: u16 = candidate.iter().map(|&i| columns[i].width).sum();
        if total_width <= available_width {
            visible = candidate;
        } else {
            break;
        }
    }
    if visible.is_empty() {
        visible = columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.priority == 1)
            .map(|(i, _)| i)
            .collect();
    }
    visible
}

pub(super) fn header_row(columns: &[ColumnDef], vis: &[usize], color: Color) -> Row<'static> {
    let cells: Vec<Cell> = vis
        .iter()
        .map(|&i| {
            Cell::from(columns[i].name)
                .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        })
        .collect();
    Row::new(cells).height(1)
}

pub(super) fn column_constraints(
    columns: &[ColumnDef],
    vis: &[usize],
    stretch_col: usize,
    available_width: u16,
) -> Vec<Constraint> {
    let total_vis_width: u16 = vis.iter().map(|&i| columns[i].width).sum();
    let extra = available_width.saturating_sub(total_vis_width);

    vis.iter()
        .map(|&i| {
            if i == stretch_col && extra > 0 {
                Constraint::Min(columns[i].width)
            } else {
                Constraint::Length(columns[i].width)
            }
        })
        .collect()
}
