//! Dashboard rendering
//!
//! One render function per panel, all pure consumers of [`App`]: the market
//! cap bar chart, the 24h volume share breakdown (the terminal counterpart
//! of a pie chart), the intraday price line chart, and the listing table.

use coindash_data::{
    QuoteField, format_change, format_magnitude, format_price, is_gain, project_series,
    share_of_total,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, BarChart, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph, Row,
        Table, Tabs,
    },
};

use crate::app::{App, Panel};

// Balanced palette for easy reading
const C_GAIN: Color = Color::Rgb(100, 220, 100);
const C_LOSS: Color = Color::Rgb(220, 100, 100);
const C_DIM: Color = Color::Rgb(120, 120, 120);
const C_BRIGHT: Color = Color::Rgb(220, 220, 220);
const C_ACCENT: Color = Color::Rgb(100, 180, 220);
const C_HEADER: Color = Color::Rgb(180, 130, 220);

/// One color per listed asset, reused across the share breakdown and chart
/// highlights.
const PALETTE: [Color; 5] = [
    Color::Rgb(96, 165, 250),
    Color::Rgb(52, 211, 153),
    Color::Rgb(251, 191, 36),
    Color::Rgb(167, 139, 250),
    Color::Rgb(248, 113, 113),
];

fn asset_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(f.area());

    render_status_bar(f, chunks[0], app);
    render_panel_tabs(f, chunks[1], app);

    match app.panel {
        Panel::Overview => render_overview(f, chunks[2], app),
        Panel::Charts => render_price_chart(f, chunks[2], app),
        Panel::Table => render_table(f, chunks[2], app),
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let title = Span::styled(
        " ◆ COINDASH ◆ ",
        Style::default().fg(C_HEADER).add_modifier(Modifier::BOLD),
    );

    let clock = Span::styled(
        format!(" ⏱  {} ", app.clock.format("%H:%M:%S")),
        Style::default().fg(C_ACCENT),
    );

    let timeframe = Span::styled(
        format!(" {} ", app.timeframe.as_str()),
        Style::default().fg(C_BRIGHT).add_modifier(Modifier::BOLD),
    );

    let help = Span::styled(
        " [Q] Quit  [Tab] Panel  [T] Timeframe  [L] Locale  [↑/↓] Asset ",
        Style::default().fg(C_DIM),
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(C_HEADER));

    let paragraph = Paragraph::new(Line::from(vec![title, clock, timeframe, help]))
        .block(block)
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

fn render_panel_tabs(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Panel::ALL
        .iter()
        .enumerate()
        .map(|(index, panel)| {
            Line::from(Span::styled(
                format!(" {} {} ", index + 1, panel.as_str()),
                Style::default().fg(C_BRIGHT),
            ))
        })
        .collect();

    let selected = Panel::ALL.iter().position(|p| *p == app.panel).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(C_ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );

    f.render_widget(tabs, area);
}

fn render_overview(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_market_cap(f, chunks[0], app);
    render_volume_share(f, chunks[1], app);
}

/// Market capitalization per asset as a bar chart, bars scaled to billions.
fn render_market_cap(f: &mut Frame, area: Rect, app: &App) {
    let series = project_series(app.listing.quotes(), QuoteField::MarketCap);

    let bars: Vec<(&str, u64)> = series
        .iter()
        .map(|point| (point.name.as_str(), (point.value / 1e9) as u64))
        .collect();

    let total: f64 = series.iter().map(|point| point.value).sum();
    let title = Line::from(vec![
        Span::styled(
            " MARKET CAPITALIZATION ",
            Style::default().fg(C_BRIGHT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("($B, total {}) ", format_magnitude(total, app.convention)),
            Style::default().fg(C_DIM),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(C_ACCENT))
        .title_top(title.alignment(Alignment::Center));

    let bar_width = (area.width.saturating_sub(4) / series.len().max(1) as u16)
        .saturating_sub(1)
        .clamp(3, 9);

    let chart = BarChart::default()
        .block(block)
        .data(&bars)
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(C_ACCENT))
        .value_style(Style::default().fg(C_BRIGHT).add_modifier(Modifier::BOLD))
        .label_style(Style::default().fg(C_DIM));

    f.render_widget(chart, area);
}

/// 24h volume share per asset: one proportional bar per slice, labelled with
/// its percentage and abbreviated volume.
fn render_volume_share(f: &mut Frame, area: Rect, app: &App) {
    let series = project_series(app.listing.quotes(), QuoteField::Volume24h);
    let shares = share_of_total(&series);

    let title = Line::from(Span::styled(
        " 24H VOLUME SHARE ",
        Style::default().fg(C_BRIGHT).add_modifier(Modifier::BOLD),
    ));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(C_HEADER))
        .title_top(title.alignment(Alignment::Center));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let bar_width = (inner.width as usize).saturating_sub(32).max(10);

    let mut lines = Vec::with_capacity(series.len() * 2);
    for (index, (point, share)) in series.iter().zip(&shares).enumerate() {
        let filled = (share * bar_width as f64).round() as usize;
        let bar: String = "█".repeat(filled.min(bar_width)) + &"░".repeat(bar_width - filled.min(bar_width));

        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<5}", point.name),
                Style::default()
                    .fg(asset_color(index))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(bar, Style::default().fg(asset_color(index))),
            Span::styled(format!(" {:>5.1}% ", share * 100.0), Style::default().fg(C_BRIGHT)),
            Span::styled(
                format_magnitude(point.value, app.convention),
                Style::default().fg(C_DIM),
            ),
        ]));
        lines.push(Line::from(""));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

/// Mock intraday price history for the selected asset as a line chart.
fn render_price_chart(f: &mut Frame, area: Rect, app: &App) {
    let Some(quote) = app.selected_quote() else {
        return;
    };
    let Some(series) = app.intraday(&quote.symbol) else {
        return;
    };

    let change_color = if is_gain(quote.change_24h) { C_GAIN } else { C_LOSS };
    let arrow = if is_gain(quote.change_24h) { "▲" } else { "▼" };

    let title = Line::from(vec![
        Span::styled(
            format!(" {} ({}) ", quote.name, quote.symbol),
            Style::default().fg(C_BRIGHT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} ", format_price(quote.price)),
            Style::default().fg(C_ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} {} ", arrow, format_change(quote.change_24h)),
            Style::default().fg(change_color).add_modifier(Modifier::BOLD),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(change_color))
        .title_top(title.alignment(Alignment::Center));

    let (mut min, mut max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(_, price) in series {
        min = min.min(price);
        max = max.max(price);
    }
    if !min.is_finite() || !max.is_finite() {
        return;
    }
    // Flat series still needs a non-degenerate y range
    if max - min < f64::EPSILON {
        max = min + 1.0;
    }

    let dataset = Dataset::default()
        .name(quote.symbol.as_str())
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(C_ACCENT))
        .data(series);

    let x_max = (series.len().saturating_sub(1)) as f64;
    let x_labels = vec![
        Span::styled("now", Style::default().fg(C_DIM)),
        Span::styled(
            format!("-{}", app.timeframe.as_str()),
            Style::default().fg(C_DIM),
        ),
    ];
    let y_labels = vec![
        Span::styled(format_price(min), Style::default().fg(C_DIM)),
        Span::styled(format_price((min + max) / 2.0), Style::default().fg(C_DIM)),
        Span::styled(format_price(max), Style::default().fg(C_DIM)),
    ];

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(C_DIM))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(C_DIM))
                .bounds([min, max])
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}

/// Full listing table: price, sign-formatted 24h change, market cap, volume.
fn render_table(f: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(vec!["Name", "Symbol", "Price", "24h", "Market Cap", "24h Volume"])
        .style(Style::default().fg(C_HEADER).add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = app
        .listing
        .quotes()
        .iter()
        .enumerate()
        .map(|(index, quote)| {
            let change_color = if is_gain(quote.change_24h) { C_GAIN } else { C_LOSS };
            let arrow = if is_gain(quote.change_24h) { "▲" } else { "▼" };

            let row = Row::new(vec![
                Line::from(Span::styled(
                    quote.name.clone(),
                    Style::default().fg(C_BRIGHT),
                )),
                Line::from(Span::styled(
                    quote.symbol.clone(),
                    Style::default()
                        .fg(asset_color(index))
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format_price(quote.price),
                    Style::default().fg(C_BRIGHT),
                )),
                Line::from(Span::styled(
                    format!("{arrow} {}", format_change(quote.change_24h)),
                    Style::default().fg(change_color).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format_magnitude(quote.market_cap, app.convention),
                    Style::default().fg(C_ACCENT),
                )),
                Line::from(Span::styled(
                    format_magnitude(quote.volume_24h, app.convention),
                    Style::default().fg(C_DIM),
                )),
            ]);

            if index == app.selected {
                row.style(Style::default().bg(Color::Rgb(35, 35, 50)))
            } else {
                row
            }
        })
        .collect();

    let title = Line::from(Span::styled(
        " MARKET LISTING ",
        Style::default().fg(C_BRIGHT).add_modifier(Modifier::BOLD),
    ));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(C_ACCENT))
        .title_top(title.alignment(Alignment::Center));

    let table = Table::new(
        rows,
        [
            Constraint::Length(14),
            Constraint::Length(8),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(16),
            Constraint::Length(16),
        ],
    )
    .header(header)
    .block(block)
    .column_spacing(2);

    f.render_widget(table, area);
}
