use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};
use tui_input::Input;

use crate::view::{
    form::{ContactForm, FIELD_LABELS},
    keymap::{Focus, BUTTONS},
    prompt::Backdrop,
    table::{row_shade, RowShade, COLUMN_TITLES},
};

const HEADER_BG: Color = Color::Rgb(0x8D, 0xB6, 0xCD);
const BUTTON_BG: Color = Color::Rgb(0x60, 0x7B, 0x8B);
const SIDEBAR_WIDTH: u16 = 22;

pub fn shade_color(shade: RowShade) -> Color {
    match shade {
        RowShade::Gray => Color::Rgb(0xB8, 0xB8, 0xB8),
        RowShade::White => Color::White,
    }
}

pub fn render_main(frame: &mut Frame, backdrop: &Backdrop, focus: Focus) {
    let [body, status] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
    ]).areas(frame.area());

    let [table_area, sidebar] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(SIDEBAR_WIDTH),
    ]).areas(body);

    render_table(frame, backdrop, table_area);
    render_sidebar(frame, backdrop.search, focus, sidebar);

    let line = backdrop.status.unwrap_or("q: Quit  Up/Down: Select");
    frame.render_widget(
        Paragraph::new(line).style(Style::default().fg(Color::DarkGray)),
        status
    );
}

fn render_table(frame: &mut Frame, backdrop: &Backdrop, area: Rect) {
    let header = Row::new(COLUMN_TITLES.iter().map(|v| Cell::from(*v)))
        .style(Style::default()
            .bg(HEADER_BG)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD));

    let rows = backdrop.table.rows().iter().enumerate().map(|(index, contact)| {
        Row::new(contact.fields().columns().map(|v| Cell::from(v.to_string())))
            .style(Style::default()
                .bg(shade_color(row_shade(index)))
                .fg(Color::Black))
    });

    let table = Table::new(rows, [Constraint::Ratio(1, 4); 4])
        .header(header)
        .block(Block::bordered().title(" Phone Book "))
        .row_highlight_style(Style::default()
            .bg(BUTTON_BG)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(backdrop.table.selected());
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_sidebar(frame: &mut Frame, search: &Input, focus: Focus, area: Rect) {
    let [search_area, buttons_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
    ]).areas(area);

    let focused = focus == Focus::Search;
    render_input(frame, search, "Search", focused, search_area);

    let buttons = BUTTONS.iter().map(|(key, label)| {
        Line::from(vec![
            Span::styled(format!(" {key} "), Style::default()
                .bg(BUTTON_BG)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)),
            Span::raw(format!(" {label}")),
        ])
    }).collect::<Vec<_>>();

    frame.render_widget(
        Paragraph::new(buttons).block(Block::bordered().title(" Actions ")),
        buttons_area
    );
}

fn render_input(frame: &mut Frame, input: &Input, title: &str, focused: bool, area: Rect) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let scroll = input.visual_scroll(inner_width);
    let border = match focused {
        true => Style::default().fg(Color::Yellow),
        false => Style::default(),
    };

    frame.render_widget(
        Paragraph::new(input.value())
            .scroll((0, scroll as u16))
            .block(Block::bordered().title(format!(" {title} ")).border_style(border)),
        area
    );

    if focused {
        let x = area.x + 1 + (input.visual_cursor().saturating_sub(scroll)) as u16;
        frame.set_cursor_position((x, area.y + 1));
    }
}

pub fn render_form(frame: &mut Frame, title: &str, form: &ContactForm) {
    let area = centered_rect(50, 15, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::bordered().title(format!(" {title} "));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [fields_area, hint] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
    ]).areas(inner);

    let slots = Layout::vertical([Constraint::Length(3); 4]).split(fields_area);
    for (index, input) in form.inputs().iter().enumerate() {
        if let Some(slot) = slots.get(index) {
            render_input(frame, input, FIELD_LABELS[index], index == form.focused(), *slot);
        }
    }

    frame.render_widget(
        Paragraph::new("Enter: Save  Tab: Next field  Esc: Close")
            .style(Style::default().fg(Color::DarkGray)),
        hint
    );
}

pub fn render_confirm(frame: &mut Frame, title: &str, message: &str, yes: bool) {
    let area = centered_rect(50, 7, frame.area());
    frame.render_widget(Clear, area);

    let choice = |label: &str, active: bool| {
        let style = match active {
            true => Style::default().bg(BUTTON_BG).fg(Color::White).add_modifier(Modifier::BOLD),
            false => Style::default(),
        };
        Span::styled(format!(" {label} "), style)
    };

    let text = vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(vec![choice("Yes", yes), Span::raw("   "), choice("No", !yes)]),
    ];

    frame.render_widget(
        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .block(Block::bordered().title(format!(" {title} "))),
        area
    );
}

pub fn render_notice(frame: &mut Frame, message: &str) {
    let area = centered_rect(60, 7, frame.area());
    frame.render_widget(Clear, area);

    let text = vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled("Press any key to dismiss", Style::default().fg(Color::DarkGray))),
    ];

    frame.render_widget(
        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .block(Block::bordered()
                .title(" Error ")
                .border_style(Style::default().fg(Color::Red))),
        area
    );
}

pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
